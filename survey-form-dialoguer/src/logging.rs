//! Logging setup for the `survey` binary.
//!
//! Logs go to stderr so they never interleave with the prompts on stdout.
//! Only field keys and counts are logged, never what the user typed.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Configuration for logging behavior.
#[derive(Debug, Clone, Copy)]
pub struct LogConfig {
    /// Maximum level to emit.
    pub level_filter: LevelFilter,
    /// Honour `RUST_LOG` instead of `level_filter` when it is set.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
        }
    }
}

impl LogConfig {
    fn env_filter(&self) -> EnvFilter {
        if self.use_env_filter
            && let Ok(filter) = EnvFilter::try_from_default_env()
        {
            return filter;
        }
        EnvFilter::default().add_directive(self.level_filter.into())
    }
}

/// Install the global tracing subscriber.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet() {
        let config = LogConfig::default();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }
}
