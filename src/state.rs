//! Shared application context: session, theme and the wired services.

use std::sync::{Arc, PoisonError, RwLock};

use crate::application::services::{ActivityService, AuthService, ChartService, EndpointService};
use crate::config::Config;
use crate::domain::entities::{AuthSession, Theme, ThemeMode};
use crate::error::AppError;
use crate::infrastructure::http::{
    ApiClient, HttpActivityRepository, HttpAuthRepository, HttpDistributionRepository,
    HttpEndpointRepository,
};
use crate::telemetry;
use crate::utils::color::{HexColor, InvalidColor};

/// Holder of the current admin session.
///
/// Clones share the same slot: the HTTP client reads the bearer token from
/// it and [`AuthService`] writes it on login.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<AuthSession> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bearer token of the current session, if logged in.
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn set(&self, session: AuthSession) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Removes the session and returns it.
    pub fn clear(&self) -> Option<AuthSession> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Theme preference and primary colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    mode: ThemeMode,
    primary_color: HexColor,
}

impl ThemeSettings {
    pub fn new(mode: ThemeMode, primary_color: HexColor) -> Self {
        Self {
            mode,
            primary_color,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// Advances light, dark, system, and back to light. Returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.next();
        self.mode
    }

    pub fn resolve(&self, system_prefers_dark: bool) -> Theme {
        self.mode.resolve(system_prefers_dark)
    }

    pub fn primary_color(&self) -> &HexColor {
        &self.primary_color
    }

    /// Replaces the primary colour; the previous one is kept on error.
    pub fn set_primary_color(&mut self, raw: &str) -> Result<(), InvalidColor> {
        self.primary_color = raw.parse()?;
        Ok(())
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self::new(ThemeMode::System, HexColor::default())
    }
}

struct ContextInner {
    config: Config,
    session: SessionStore,
    theme: RwLock<ThemeSettings>,
    charts: ChartService<HttpDistributionRepository>,
    activity: ActivityService<HttpActivityRepository>,
    endpoints: EndpointService<HttpEndpointRepository>,
    auth: AuthService<HttpAuthRepository>,
}

/// Everything a dashboard screen needs, built once from [`Config`].
///
/// Cheap to clone; clones share the session and theme.
#[derive(Clone)]
pub struct AppContext {
    inner: Arc<ContextInner>,
}

impl AppContext {
    /// Initializes logging and wires the HTTP repositories into services.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the configured primary colour or
    /// backend URL is unusable, or [`AppError::Internal`] if the HTTP client
    /// cannot be built.
    pub fn start(config: Config) -> Result<Self, AppError> {
        telemetry::init(&config);
        config.print_summary();

        let primary_color: HexColor = config
            .theme_primary_color
            .parse()
            .map_err(|e: InvalidColor| AppError::bad_request(e.to_string(), serde_json::Value::Null))?;
        let theme = ThemeSettings::new(config.theme_mode, primary_color);

        let session = SessionStore::new();
        let client = Arc::new(ApiClient::from_config(&config, session.clone())?);

        let charts = ChartService::new(
            Arc::new(HttpDistributionRepository::new(client.clone())),
            config.chart_options(),
        );
        let activity = ActivityService::new(
            Arc::new(HttpActivityRepository::new(client.clone())),
            config.chart_options(),
            config.default_threshold(),
        );
        let endpoints = EndpointService::new(Arc::new(HttpEndpointRepository::new(client.clone())));
        let auth = AuthService::new(
            Arc::new(HttpAuthRepository::new(client)),
            session.clone(),
        );

        tracing::info!("Admin context started");

        Ok(Self {
            inner: Arc::new(ContextInner {
                config,
                session,
                theme: RwLock::new(theme),
                charts,
                activity,
                endpoints,
                auth,
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Snapshot of the current theme settings.
    pub fn theme(&self) -> ThemeSettings {
        self.inner
            .theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies `update` to the shared theme settings.
    pub fn update_theme<T>(&self, update: impl FnOnce(&mut ThemeSettings) -> T) -> T {
        let mut theme = self
            .inner
            .theme
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        update(&mut theme)
    }

    pub fn chart_service(&self) -> &ChartService<HttpDistributionRepository> {
        &self.inner.charts
    }

    pub fn activity_service(&self) -> &ActivityService<HttpActivityRepository> {
        &self.inner.activity
    }

    pub fn endpoint_service(&self) -> &EndpointService<HttpEndpointRepository> {
        &self.inner.endpoints
    }

    pub fn auth_service(&self) -> &AuthService<HttpAuthRepository> {
        &self.inner.auth
    }

    /// Drops the session; later requests go out unauthenticated.
    pub fn shutdown(&self) {
        if self.inner.session.clear().is_some() {
            tracing::info!("Session cleared on shutdown");
        }
    }
}
