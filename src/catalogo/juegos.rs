use std::sync::Arc;

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use tienda::{juego::Juego, template::ListaJuegos};
use tracing::error;

// Fallback body when the template cannot be rendered.
const ERROR_RENDER: &str = "<div class=\"alert alert-danger\">No se pudo cargar el cat\u{e1}logo</div>";

/// Renders the catalog page. The listing data is the shared seed; nothing
/// from the request is read.
pub(super) async fn lista_juegos(
    State(juegos): State<Arc<Vec<Juego>>>,
) -> (StatusCode, Html<String>) {
    let pagina = ListaJuegos {
        lista_juegos: &juegos,
    };

    match pagina.render() {
        Ok(html) => (StatusCode::OK, Html(html)),
        Err(e) => {
            error!("Could not render catalog template: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_RENDER.to_owned()))
        }
    }
}
