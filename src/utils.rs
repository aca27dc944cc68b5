use std::{env, str::FromStr};

use tracing::Level;
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configure tracing with tracing_subscriber.
pub fn configure_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_writer(
                std::io::stdout.with_max_level(Level::from_str(log_level).unwrap_or(Level::INFO)),
            ),
        )
        .init();
}

/// Reads an env variable, falling back to a default when unset or empty.
pub fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) if !v.is_empty() => v,
        _ => String::from(default),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_env_or_default() {
        assert_eq!("fallback", env_or("TIENDA_UNSET_VAR", "fallback"));
    }

    #[test]
    fn test_env_or_set() {
        env::set_var("TIENDA_SET_VAR", "value");
        assert_eq!("value", env_or("TIENDA_SET_VAR", "fallback"));
        env::remove_var("TIENDA_SET_VAR");
    }
}
