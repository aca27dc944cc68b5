mod catalogo;

pub use catalogo::*;
