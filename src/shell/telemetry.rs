use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` wins over the configured default level.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).init();
}
