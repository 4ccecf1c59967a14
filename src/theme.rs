//! Host theme input and background resolution.
//!
//! The charting host optionally injects a theme record alongside a simple
//! theme name. The only field read here is the rendering-specific background
//! color; everything else in the record is ignored. Resolution happens once
//! at setup and configures the clear color of the render surface.

use serde::Deserialize;

use crate::color::Color;

/// Background color used when the host supplies none.
pub const DEFAULT_BACKGROUND: &str = "#050505";

/// Sentinel value (as a background color or a theme name) selecting a fully
/// transparent surface.
const TRANSPARENT: &str = "transparent";

/// Fallback for unparseable background strings, `#050505`.
const DEFAULT_BACKGROUND_COLOR: Color =
    Color::new(5.0 / 255.0, 5.0 / 255.0, 5.0 / 255.0);

/// The host's theme record.
///
/// Deserializes directly from the host's JSON shape:
/// `{"threejs": {"backgroundColor": "#112233"}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThemeData {
    /// Rendering-specific section of the record.
    #[serde(default)]
    pub threejs: Option<RendererTheme>,
}

/// Rendering-specific theme fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererTheme {
    /// CSS-style color string, or the literal `"transparent"`.
    #[serde(default)]
    pub background_color: Option<String>,
}

impl ThemeData {
    /// Parse a theme record from the host's JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convenience constructor for a record with just a background color.
    pub fn with_background(color: impl Into<String>) -> Self {
        Self {
            threejs: Some(RendererTheme {
                background_color: Some(color.into()),
            }),
        }
    }
}

/// Resolved background configuration for the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// Zero-opacity clear, no background fill.
    Transparent,
    /// Opaque clear with the given color.
    Solid(Color),
}

impl Background {
    /// Resolve the host's theme input into a background configuration.
    ///
    /// The `"transparent"` sentinel, either as the background color or as the
    /// simple theme name, selects [`Background::Transparent`]. A missing
    /// background falls back to [`DEFAULT_BACKGROUND`]; an unparseable one
    /// does too, silently.
    pub fn resolve(data: Option<&ThemeData>, theme: Option<&str>) -> Self {
        let bg = data
            .and_then(|d| d.threejs.as_ref())
            .and_then(|t| t.background_color.as_deref())
            .unwrap_or(DEFAULT_BACKGROUND);

        if bg == TRANSPARENT || theme == Some(TRANSPARENT) {
            return Background::Transparent;
        }

        let color = Color::parse(bg).unwrap_or_else(|| {
            tracing::warn!(value = %bg, "unparseable background color, using default");
            DEFAULT_BACKGROUND_COLOR
        });
        Background::Solid(color)
    }

    /// The wgpu clear color for this background: alpha 0 for transparent,
    /// alpha 1 otherwise.
    pub fn clear_color(&self) -> wgpu::Color {
        match self {
            Background::Transparent => wgpu::Color::TRANSPARENT,
            Background::Solid(color) => color.to_wgpu(1.0),
        }
    }

    /// Whether the surface should composite as transparent.
    pub fn is_transparent(&self) -> bool {
        matches!(self, Background::Transparent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_background_color() {
        let data = ThemeData::with_background("transparent");
        let bg = Background::resolve(Some(&data), None);
        assert_eq!(bg, Background::Transparent);
        assert_eq!(bg.clear_color().a, 0.0);
    }

    #[test]
    fn test_solid_background_color() {
        let data = ThemeData::with_background("#112233");
        let bg = Background::resolve(Some(&data), Some("dark"));
        assert_eq!(
            bg,
            Background::Solid(Color::from_rgb8(0x11, 0x22, 0x33))
        );
        assert_eq!(bg.clear_color().a, 1.0);
    }

    #[test]
    fn test_no_theme_defaults_dark() {
        let bg = Background::resolve(None, None);
        assert_eq!(bg, Background::Solid(DEFAULT_BACKGROUND_COLOR));
    }

    #[test]
    fn test_theme_name_transparent_overrides_default() {
        let bg = Background::resolve(None, Some("transparent"));
        assert_eq!(bg, Background::Transparent);
    }

    #[test]
    fn test_malformed_color_falls_back() {
        let data = ThemeData::with_background("#nothex");
        let bg = Background::resolve(Some(&data), None);
        assert_eq!(bg, Background::Solid(DEFAULT_BACKGROUND_COLOR));
    }

    #[test]
    fn test_from_json_camel_case() {
        let data =
            ThemeData::from_json(r##"{"threejs":{"backgroundColor":"#0a0b0c"}}"##).unwrap();
        assert_eq!(
            data.threejs.unwrap().background_color.as_deref(),
            Some("#0a0b0c")
        );
    }

    #[test]
    fn test_from_json_empty_record() {
        let data = ThemeData::from_json("{}").unwrap();
        assert_eq!(data, ThemeData::default());
        assert!(ThemeData::from_json("not json").is_err());
    }
}
