pub mod juego;
pub mod seed;
pub mod signals;
pub mod template;
pub mod utils;
