use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "fitring_engine=trace,fitring_studio=debug"). When it is `None` the
/// `RUST_LOG` variable is consulted, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Raises the fallback level to `debug`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.default_level = log::LevelFilter::Debug;
        }
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. Output goes to stderr so it never
/// interleaves with rendered frames on stdout.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder
            .write_style(config.write_style)
            .target(env_logger::Target::Stderr);

        // try_init: a test harness or embedding app may already own the logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_level() {
        let cfg = LoggingConfig::default().verbose(true);
        assert_eq!(cfg.default_level, log::LevelFilter::Debug);
    }

    #[test]
    fn quiet_keeps_info() {
        let cfg = LoggingConfig::default().verbose(false);
        assert_eq!(cfg.default_level, log::LevelFilter::Info);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig { env_filter: Some("trace".into()), ..Default::default() });
    }
}
