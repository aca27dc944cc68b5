use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Maximum length of a game name.
pub const NOMBRE_MAX: usize = 100;
/// Maximum length of the platform description.
pub const PLATAFORMA_MAX: usize = 200;
/// Maximum length of the image reference.
pub const IMAGEN_MAX: usize = 200;

// Prices carry at most 6 significant digits at 2 decimal places.
const PRECIO_LIMITE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JuegoError {
    #[error("nombre is empty")]
    NombreVacio,
    #[error("nombre has {0} characters, limit is {NOMBRE_MAX}")]
    NombreLargo(usize),
    #[error("precio {0} does not fit 6 significant digits")]
    PrecioFueraDeRango(Decimal),
    #[error("precio {0} has more than 2 decimal places")]
    PrecioDecimales(Decimal),
    #[error("plataforma has {0} characters, limit is {PLATAFORMA_MAX}")]
    PlataformaLarga(usize),
    #[error("imagen has {0} characters, limit is {IMAGEN_MAX}")]
    ImagenLarga(usize),
}

/// A single game listing as shown on the catalog page.
///
/// The platform field is an opaque human-readable string, not a structured
/// set: "PC, PS5, Xbox Serie X" is one value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Juego {
    pub nombre: String,
    pub precio: Decimal,
    pub plataforma: String,
    #[serde(default = "imagen_default")]
    pub imagen: String,
}

fn imagen_default() -> String {
    String::from("default.jpg")
}

impl Juego {
    /// Builds a validated listing. The image reference falls back to
    /// "default.jpg" when not given.
    pub fn new(
        nombre: impl Into<String>,
        precio: Decimal,
        plataforma: impl Into<String>,
        imagen: Option<String>,
    ) -> Result<Self, JuegoError> {
        let juego = Juego {
            nombre: nombre.into(),
            precio,
            plataforma: plataforma.into(),
            imagen: imagen.unwrap_or_else(imagen_default),
        };
        juego.validar()?;
        Ok(juego)
    }

    /// Checks the field bounds once, at the construction boundary.
    pub fn validar(&self) -> Result<(), JuegoError> {
        if self.nombre.is_empty() {
            return Err(JuegoError::NombreVacio);
        }
        if self.nombre.chars().count() > NOMBRE_MAX {
            return Err(JuegoError::NombreLargo(self.nombre.chars().count()));
        }
        if self.precio.abs() >= PRECIO_LIMITE {
            return Err(JuegoError::PrecioFueraDeRango(self.precio));
        }
        if self.precio.scale() > 2 {
            return Err(JuegoError::PrecioDecimales(self.precio));
        }
        if self.plataforma.chars().count() > PLATAFORMA_MAX {
            return Err(JuegoError::PlataformaLarga(self.plataforma.chars().count()));
        }
        if self.imagen.chars().count() > IMAGEN_MAX {
            return Err(JuegoError::ImagenLarga(self.imagen.chars().count()));
        }
        Ok(())
    }

    /// Normalizes the price to exactly two fractional digits, so "25.9"
    /// and "85.99" render consistently.
    pub fn normalizar_precio(&mut self) {
        self.precio.rescale(2);
    }
}

impl fmt::Display for Juego {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.nombre)
    }
}
