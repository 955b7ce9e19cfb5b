use derive_more::Display;
use serde::Serialize;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Value Object - how visible samples are stroked
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum RenderStyle {
    /// One small circle per sample
    #[default]
    #[display(fmt = "Points")]
    #[strum(serialize = "points")]
    Points,
    /// Samples joined by straight segments
    #[display(fmt = "Polyline")]
    #[strum(serialize = "polyline")]
    Polyline,
}

/// Value Object - a projected sample in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelPoint {
    /// Dataset index the point was projected from
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Value Object - what the drawing surface reports about itself at mount time
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMetrics {
    pub width: f64,
    pub height: f64,
    pub stroke_color: String,
}

impl SurfaceMetrics {
    pub fn new(width: f64, height: f64, stroke_color: impl Into<String>) -> Self {
        Self { width, height, stroke_color: stroke_color.into() }
    }

    /// Parse a computed CSS length such as `"640px"` or `"480.5px"`.
    /// Keeps only the integer part, the way canvas attributes need it.
    pub fn parse_css_pixels(value: &str) -> Option<f64> {
        let number = value.trim().trim_end_matches("px").trim();
        let parsed: f64 = number.parse().ok()?;
        if !parsed.is_finite() || parsed < 0.0 {
            return None;
        }
        Some(parsed.trunc())
    }
}
