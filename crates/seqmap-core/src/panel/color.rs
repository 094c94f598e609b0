use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// A packed 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Black, the default color for observed residues.
    pub const BLACK: Color = Color(0x00_00_00);
    /// Grey, the sentinel color for missing residues.
    pub const GREY: Color = Color(0x80_80_80);

    /// Creates a color from its channel values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The channel values as `(r, g, b)`.
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Error returned when a color string is not of the form `#rrggbb`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid color string '{0}', expected '#rrggbb'")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6)
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        u32::from_str_radix(hex, 16)
            .map(Color)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The sequence panel's residue colors.
///
/// The defaults reproduce the conventional scheme: black for residues with
/// coordinates, grey for missing ones. A theme can be overridden from a TOML
/// snippet or file; omitted fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelTheme {
    /// Color for residues present in the structure.
    pub observed: Color,
    /// Color for residues without physical coordinates.
    pub missing: Color,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            observed: Color::BLACK,
            missing: Color::GREY,
        }
    }
}

/// Error raised while loading a panel theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    /// The theme content is not valid TOML or contains invalid colors.
    #[error("failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),
}

impl PanelTheme {
    /// Parses a theme from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a theme from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_rgb_round_trips_channels() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.rgb(), (0x12, 0x34, 0x56));
        assert_eq!(c.to_string(), "#123456");
    }

    #[test]
    fn parses_hex_strings() {
        assert_eq!("#808080".parse::<Color>().unwrap(), Color::GREY);
        assert_eq!("#000000".parse::<Color>().unwrap(), Color::BLACK);
        assert!("808080".parse::<Color>().is_err());
        assert!("#80808".parse::<Color>().is_err());
        assert!("#80808g".parse::<Color>().is_err());
    }

    #[test]
    fn default_theme_is_black_on_grey() {
        let theme = PanelTheme::default();
        assert_eq!(theme.observed, Color::BLACK);
        assert_eq!(theme.missing, Color::GREY);
    }

    #[test]
    fn toml_overrides_only_named_fields() {
        let theme = PanelTheme::from_toml_str("missing = \"#ff0000\"").unwrap();
        assert_eq!(theme.missing, Color::from_rgb(0xff, 0, 0));
        assert_eq!(theme.observed, Color::BLACK);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(PanelTheme::from_toml_str("hidden = \"#ff0000\"").is_err());
    }

    #[test]
    fn load_reads_a_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "observed = \"#101010\"").unwrap();
        writeln!(file, "missing = \"#a0a0a0\"").unwrap();

        let theme = PanelTheme::load(file.path()).unwrap();
        assert_eq!(theme.observed, Color::from_rgb(0x10, 0x10, 0x10));
        assert_eq!(theme.missing, Color::from_rgb(0xa0, 0xa0, 0xa0));
    }

    #[test]
    fn load_propagates_missing_file_errors() {
        assert!(matches!(
            PanelTheme::load("/nonexistent/theme.toml"),
            Err(ThemeError::Io(_))
        ));
    }
}
