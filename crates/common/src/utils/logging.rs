use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Fallback filter used when neither `RUST_LOG` nor config provides one.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

fn env_filter(fallback: &str) -> EnvFilter {
    let fallback = if fallback.trim().is_empty() { DEFAULT_FILTER } else { fallback };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize tracing subscriber with compact human-readable output.
/// - Respects `RUST_LOG` if set, otherwise uses `fallback_filter`
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging_default(fallback_filter: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, otherwise uses `fallback_filter`
/// - Emits one JSON object per event for container log collectors
pub fn init_logging_json(fallback_filter: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the subscriber by format name (`"json"` or anything else for compact).
pub fn init_logging(format: &str, fallback_filter: &str) {
    if format.eq_ignore_ascii_case("json") {
        init_logging_json(fallback_filter);
    } else {
        init_logging_default(fallback_filter);
    }
}
