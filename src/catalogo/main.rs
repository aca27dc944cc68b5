mod juegos;

use std::{
    error::Error,
    sync::{Arc, OnceLock},
};

use axum::{routing::get, serve, Router};
use juegos::lista_juegos;
use tienda::{
    juego::Juego,
    seed,
    signals::shutdown_signal,
    utils::{configure_tracing, env_or},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

// Host variables
static HOST: OnceLock<String> = OnceLock::new();
static LOG_LEVEL: OnceLock<String> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize env variables
    init_env();

    // Configure logging
    configure_tracing(LOG_LEVEL.get().unwrap());

    // Load the catalog seed once; the listings are immutable afterwards.
    let juegos: Arc<Vec<Juego>> = Arc::new(seed::cargar()?);
    info!("Loaded {} catalog listings", juegos.len());

    // Build application and listen to incoming requests.
    let app: Router = build_app(juegos);
    let listener: TcpListener = TcpListener::bind(HOST.get().unwrap()).await?;

    // Run the app.
    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// Initialize env variables
fn init_env() {
    HOST.get_or_init(|| env_or("CATALOGO_HOST", "127.0.0.1:3000"));
    LOG_LEVEL.get_or_init(|| env_or("LOG_LEVEL", "info"));
}

/// Builds the application.
fn build_app(juegos: Arc<Vec<Juego>>) -> Router {
    Router::new()
        .route("/catalogo", get(lista_juegos))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(juegos)
}

#[cfg(test)]
mod test {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_catalog_route_ok() {
        let juegos = Arc::new(seed::cargar().unwrap());
        let app = build_app(juegos);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/catalogo")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(StatusCode::OK, response.status());
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let juegos = Arc::new(seed::cargar().unwrap());
        let app = build_app(juegos);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(StatusCode::NOT_FOUND, response.status());
    }
}
