use askama::Template;

use crate::juego::Juego;

/// Catalog page context. The listings are rendered in the order given,
/// under the single `lista_juegos` key.
#[derive(Template)]
#[template(path = "catalogo/lista_juegos.html")]
pub struct ListaJuegos<'a> {
    pub lista_juegos: &'a [Juego],
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_render_preserves_order() {
        let juegos = vec![
            Juego::new("Resident Evil", Decimal::new(8599, 2), "PS5", None).unwrap(),
            Juego::new("Terminator", Decimal::new(2590, 2), "PC", None).unwrap(),
        ];
        let html = ListaJuegos {
            lista_juegos: &juegos,
        }
        .render()
        .unwrap();

        let primero = html.find("Resident Evil").unwrap();
        let segundo = html.find("Terminator").unwrap();
        assert!(primero < segundo);
        assert!(html.contains("85.99"));
        assert!(html.contains("25.90"));
        // Image references render as captions, not as asset links.
        assert!(html.contains("default.jpg"));
        assert!(!html.contains("/static/img/"));
    }

    #[test]
    fn test_render_empty_catalog() {
        let html = ListaJuegos { lista_juegos: &[] }.render().unwrap();
        assert!(html.contains("Catálogo"));
    }
}
