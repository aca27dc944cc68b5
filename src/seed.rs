use serde::Deserialize;
use thiserror::Error;

use crate::juego::{Juego, JuegoError};

/// Embedded catalog fixture. The listing data is deliberately static: it is
/// parsed and validated once at process start and shared read-only after
/// that, never rebuilt per request.
const JUEGOS_JSON: &str = include_str!("../seed/juegos.json");

/// Seed document version this build understands.
pub const SEED_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not parse seed document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("seed document version {0} is not supported (expected {SEED_VERSION})")]
    VersionNoSoportada(u32),
    #[error("seed entry {indice} (\"{nombre}\") is out of bounds: {source}")]
    JuegoInvalido {
        indice: usize,
        nombre: String,
        source: JuegoError,
    },
}

#[derive(Deserialize)]
struct SeedDoc {
    version: u32,
    juegos: Vec<Juego>,
}

/// Loads the embedded catalog seed.
pub fn cargar() -> Result<Vec<Juego>, SeedError> {
    cargar_desde(JUEGOS_JSON)
}

/// Parses a seed document, validates every listing and normalizes prices to
/// two fractional digits. Order is preserved exactly as given.
pub fn cargar_desde(json: &str) -> Result<Vec<Juego>, SeedError> {
    let doc: SeedDoc = serde_json::from_str(json)?;
    if doc.version != SEED_VERSION {
        return Err(SeedError::VersionNoSoportada(doc.version));
    }

    let mut juegos = doc.juegos;
    for (indice, juego) in juegos.iter_mut().enumerate() {
        juego.validar().map_err(|source| SeedError::JuegoInvalido {
            indice,
            nombre: juego.nombre.clone(),
            source,
        })?;
        juego.normalizar_precio();
    }

    Ok(juegos)
}
