//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a console subscriber. `RUST_LOG` takes precedence over `level`.
/// Calling it twice is harmless; the second call is ignored.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_twice_does_not_panic() {
        setup_logging("debug");
        setup_logging("info");
    }
}
