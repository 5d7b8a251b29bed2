//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global fmt subscriber for `config`.
///
/// `RUST_LOG` directives take precedence over `config.log_level`. Returns
/// `false` when a subscriber was already installed, which happens when the
/// host application sets up its own or `init` runs twice.
pub fn init(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = if config.is_json_logging() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(format = %config.log_format, "Tracing initialized");
    }

    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ThemeMode, ThresholdUnit};
    use url::Url;

    fn config(log_format: &str) -> Config {
        Config {
            api_base_url: Url::parse("http://localhost:8080/").unwrap(),
            api_timeout_seconds: 30,
            api_retry_attempts: 3,
            log_level: "warn".to_string(),
            log_format: log_format.to_string(),
            chart_max_slices: 10,
            chart_min_slice_percent: 2.0,
            inactivity_threshold: 48,
            inactivity_unit: ThresholdUnit::Hours,
            theme_mode: ThemeMode::System,
            theme_primary_color: "#1976d2".to_string(),
        }
    }

    #[test]
    fn test_second_init_is_harmless() {
        init(&config("json"));
        assert!(!init(&config("text")));
    }
}
