//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or unparsable: storefront session
/// activity (toggles, resets) at debug, everything else at info.
pub const DEFAULT_DIRECTIVES: &str = "info,storefront=debug";

/// Output shape of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers.
    #[default]
    Json,
    /// Single-line human-readable output, for local runs.
    Compact,
}

/// Subscriber settings chosen by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub default_directives: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_directives: DEFAULT_DIRECTIVES.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    /// `RUST_LOG` wins; falls back to `default_directives`, then to plain `info`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.default_directives))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize tracing with [`TracingConfig::default`].
pub fn init() {
    init_with(&TracingConfig::default());
}

/// Install the process-wide subscriber. Later calls are no-ops.
pub fn init_with(config: &TracingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_json_with_storefront_directives() {
        let config = TracingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.default_directives, DEFAULT_DIRECTIVES);
    }

    #[test]
    fn bad_directives_fall_back_instead_of_failing() {
        let config = TracingConfig {
            default_directives: "=[not a filter".to_string(),
            format: LogFormat::Compact,
        };
        let _ = config.env_filter();
    }

    #[test]
    fn init_is_idempotent() {
        init_with(&TracingConfig {
            format: LogFormat::Compact,
            ..TracingConfig::default()
        });
        init();
        crate::init();
    }
}
