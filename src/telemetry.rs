use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `tracing` subscriber filtered by `RUST_LOG` (default
/// `info`). Returns `false` if the host already installed one.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init_tracing();
        assert!(!init_tracing());
    }
}
