//! Structured logging to stderr.
//!
//! Priority: `RUST_LOG` > configured level (`GITHUB_PROFILE_LOG`) > "info".

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the global subscriber. Call once, before the window is created.
pub fn init(config_level: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = select_directive(rust_log.as_deref(), config_level);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialised"
    );
}

fn select_directive<'a>(rust_log: Option<&'a str>, config_level: Option<&'a str>) -> &'a str {
    rust_log
        .filter(|d| !d.trim().is_empty())
        .or(config_level)
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
