//! Authenticated admin session and theme preference values.

use std::fmt;
use std::str::FromStr;

/// Tokens and identity returned by a successful login.
#[derive(Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub refresh_token: Option<String>,
    pub role: String,
    pub shop_id: Option<String>,
    pub email: String,
}

impl AuthSession {
    /// Returns true if the session belongs to an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin") || self.role.eq_ignore_ascii_case("role_admin")
    }
}

// Tokens never reach logs.
impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("token", &"***")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "***"),
            )
            .field("role", &self.role)
            .field("shop_id", &self.shop_id)
            .field("email", &self.email)
            .finish()
    }
}

/// Theme preference chosen by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Next mode in the toggle cycle: light, dark, system, light.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Concrete theme for this mode given the operating system preference.
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System if system_prefers_dark => Theme::Dark,
            ThemeMode::System => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode '{other}'")),
        }
    }
}

/// Theme actually applied to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}
