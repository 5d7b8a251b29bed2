//! Chart palette and theme colour values.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Slice colours, assigned in order and reused cyclically.
pub const PALETTE: [&str; 6] = [
    "#1976d2", "#dc004e", "#2e7d32", "#ed6c02", "#d32f2f", "#0288d1",
];

/// Default primary colour of the dashboard theme.
pub const DEFAULT_PRIMARY_COLOR: &str = "#1976d2";

/// Colour of the slice at `index`.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Colour must look like #rrggbb, got '{0}'")]
pub struct InvalidColor(pub String);

/// A `#rrggbb` colour, stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(DEFAULT_PRIMARY_COLOR.to_string())
    }
}

impl FromStr for HexColor {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if HEX_COLOR_REGEX.is_match(s) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(InvalidColor(s.to_string()))
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), "#1976d2");
        assert_eq!(palette_color(5), "#0288d1");
        assert_eq!(palette_color(6), "#1976d2");
        assert_eq!(palette_color(13), "#dc004e");
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!("#1976D2".parse::<HexColor>().unwrap().as_str(), "#1976d2");
        assert!("1976d2".parse::<HexColor>().is_err());
        assert!("#19d".parse::<HexColor>().is_err());
        assert!("#zzzzzz".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_default_color() {
        assert_eq!(HexColor::default().to_string(), DEFAULT_PRIMARY_COLOR);
    }
}
