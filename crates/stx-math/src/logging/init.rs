use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. "info",
/// "stx_math=trace,stx_demo=debug"). When unset, `RUST_LOG` is consulted, then
/// `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
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

/// Filter source picked by [`init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Explicit(String),
    Env(String),
    Level(log::LevelFilter),
}

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> FilterSource {
    match (&config.env_filter, rust_log) {
        (Some(filter), _) => FilterSource::Explicit(filter.clone()),
        (None, Some(env)) if !env.trim().is_empty() => FilterSource::Env(env),
        _ => FilterSource::Level(config.default_level),
    }
}

static INIT: Once = Once::new();

/// Installs the global logger.
///
/// Only the first call has any effect. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(&config, std::env::var("RUST_LOG").ok()) {
            FilterSource::Explicit(filter) | FilterSource::Env(filter) => {
                builder.parse_filters(&filter);
            }
            FilterSource::Level(level) => {
                builder.filter_level(level);
            }
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
