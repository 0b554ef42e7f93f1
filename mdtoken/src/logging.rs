// src/logging.rs
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `level`.
///
/// Calling it again once a subscriber is installed is a no-op.
pub fn init(level: Option<&str>) {
    let level = level.and_then(parse_level).unwrap_or(DEFAULT_LEVEL);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}

pub fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
