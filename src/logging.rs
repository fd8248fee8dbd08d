//! Logging setup
//!
//! Installs the global tracing subscriber for the binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Build the env filter: `RUST_LOG` wins, otherwise the configured level
/// applied to this crate plus any extra directives.
pub fn env_filter(config: &LoggingConfig, extra: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut directives = format!("signup={}", config.level);
        if !extra.is_empty() {
            directives.push(',');
            directives.push_str(extra);
        }
        EnvFilter::new(directives)
    })
}

/// Initialize tracing. `format = "json"` switches to structured output.
pub fn init(config: &LoggingConfig, extra: &str) {
    let filter = env_filter(config, extra);

    if config.format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
