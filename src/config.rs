//! Library configuration loaded from environment variables.
//!
//! Configuration is loaded once, validated, and handed to
//! [`crate::state::AppContext::start`].
//!
//! ## Required Variables
//!
//! - `ADMIN_API_BASE_URL` - Backend base URL, e.g. `https://api.shop.in/`
//!
//! ## Optional Variables
//!
//! - `ADMIN_API_TIMEOUT_SECONDS` - Request timeout (default: 30, 1..=300)
//! - `ADMIN_API_RETRY_ATTEMPTS` - Retries for GET requests (default: 3, max: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CHART_MAX_SLICES` - Pie slices per chart, "Other" included (default: 10)
//! - `CHART_MIN_SLICE_PERCENT` - Share below which values go to "Other" (default: 2.0)
//! - `INACTIVITY_THRESHOLD` - Inactive Users default threshold (default: 48)
//! - `INACTIVITY_UNIT` - `hours` or `days` (default: `hours`)
//! - `THEME_MODE` - `light`, `dark` or `system` (default: `system`)
//! - `THEME_PRIMARY_COLOR` - `#rrggbb` (default: `#1976d2`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::domain::entities::{ChartOptions, InactivityThreshold, ThemeMode, ThresholdUnit};
use crate::utils::base_url::{mask_url, normalize_base_url};
use crate::utils::color::{DEFAULT_PRIMARY_COLOR, HexColor};

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Normalized backend base URL, always ending in `/`.
    pub api_base_url: Url,
    pub api_timeout_seconds: u64,
    /// Extra attempts for idempotent GETs after the first one fails.
    pub api_retry_attempts: usize,
    pub log_level: String,
    pub log_format: String,
    pub chart_max_slices: usize,
    pub chart_min_slice_percent: f64,
    pub inactivity_threshold: u32,
    pub inactivity_unit: ThresholdUnit,
    pub theme_mode: ThemeMode,
    pub theme_primary_color: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ADMIN_API_BASE_URL` is missing or malformed, or if
    /// `INACTIVITY_UNIT` / `THEME_MODE` hold an unknown value.
    pub fn from_env() -> Result<Self> {
        let raw_base_url =
            env::var("ADMIN_API_BASE_URL").context("ADMIN_API_BASE_URL must be set")?;
        let api_base_url =
            normalize_base_url(&raw_base_url).context("ADMIN_API_BASE_URL is not a valid URL")?;

        let api_timeout_seconds = env::var("ADMIN_API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let api_retry_attempts = env::var("ADMIN_API_RETRY_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let chart_max_slices = env::var("CHART_MAX_SLICES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(ChartOptions::DEFAULT_MAX_SLICES);

        let chart_min_slice_percent = env::var("CHART_MIN_SLICE_PERCENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(ChartOptions::DEFAULT_MIN_PERCENT);

        let inactivity_threshold = env::var("INACTIVITY_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(InactivityThreshold::default().value);

        let inactivity_unit = match env::var("INACTIVITY_UNIT") {
            Ok(raw) => raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Invalid INACTIVITY_UNIT")?,
            Err(_) => InactivityThreshold::default().unit,
        };

        let theme_mode = match env::var("THEME_MODE") {
            Ok(raw) => raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Invalid THEME_MODE")?,
            Err(_) => ThemeMode::System,
        };

        let theme_primary_color = env::var("THEME_PRIMARY_COLOR")
            .unwrap_or_else(|_| DEFAULT_PRIMARY_COLOR.to_string());

        Ok(Self {
            api_base_url,
            api_timeout_seconds,
            api_retry_attempts,
            log_level,
            log_format,
            chart_max_slices,
            chart_min_slice_percent,
            inactivity_threshold,
            inactivity_unit,
            theme_mode,
            theme_primary_color,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the timeout is outside 1..=300 seconds or retries exceed 10
    /// - `log_format` is not `text` or `json`
    /// - `chart_max_slices` is 0 or the slice percentage is outside 0..=100
    /// - the inactivity threshold is 0
    /// - the primary colour is not `#rrggbb`
    pub fn validate(&self) -> Result<()> {
        if !(1..=300).contains(&self.api_timeout_seconds) {
            anyhow::bail!(
                "ADMIN_API_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.api_timeout_seconds
            );
        }

        if self.api_retry_attempts > 10 {
            anyhow::bail!(
                "ADMIN_API_RETRY_ATTEMPTS is too large (max: 10), got {}",
                self.api_retry_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.chart_max_slices == 0 {
            anyhow::bail!("CHART_MAX_SLICES must be at least 1");
        }

        if !(0.0..=100.0).contains(&self.chart_min_slice_percent) {
            anyhow::bail!(
                "CHART_MIN_SLICE_PERCENT must be between 0 and 100, got {}",
                self.chart_min_slice_percent
            );
        }

        if self.inactivity_threshold == 0 {
            anyhow::bail!("INACTIVITY_THRESHOLD must be greater than 0");
        }

        self.theme_primary_color
            .parse::<HexColor>()
            .context("Invalid THEME_PRIMARY_COLOR")?;

        Ok(())
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions::new(self.chart_max_slices, self.chart_min_slice_percent)
    }

    pub fn default_threshold(&self) -> InactivityThreshold {
        InactivityThreshold::new(self.inactivity_threshold, self.inactivity_unit)
    }

    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary (without credentials).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Backend: {}", mask_url(&self.api_base_url));
        tracing::info!(
            "  Timeout: {}s, GET retries: {}",
            self.api_timeout_seconds,
            self.api_retry_attempts
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Charts: max {} slices, min {}%",
            self.chart_max_slices,
            self.chart_min_slice_percent
        );
        tracing::info!(
            "  Inactivity threshold: {} {}",
            self.inactivity_threshold,
            self.inactivity_unit
        );
        tracing::info!("  Theme: {} ({})", self.theme_mode, self.theme_primary_color);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Reads a `.env` file if present, then loads and validates configuration.
pub fn load() -> Result<Config> {
    let _ = dotenvy::dotenv();
    load_from_env()
}
