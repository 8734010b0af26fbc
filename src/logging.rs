//! Logger setup for the command-line host.
//!
//! The library only emits through the `log` facade; installing a backend is
//! left to whichever binary links it.

use std::sync::Once;

/// `env_filter` uses the `env_logger` filter syntax, e.g. `"info"` or
/// `"julia_renderer=debug"`. When unset, `RUST_LOG` is consulted, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        // another logger (a test harness, say) may already be installed
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
