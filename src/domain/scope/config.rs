use crate::domain::errors::{AppError, ConfigResult};
use crate::domain::waveform::RenderStyle;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Recognized options for one oscilloscope view.
///
/// JSON keys are camelCase and every key is optional:
/// `{"initialScale": 4, "renderStyle": "polyline"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScopeConfig {
    pub initial_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Circle radius in pixels, only used by `RenderStyle::Points`
    pub point_radius: f64,
    /// Per-millisecond velocity multiplier while coasting
    pub decay_factor: f64,
    /// Coasting stops once |velocity| (px/ms) drops below this
    pub stop_threshold: f64,
    /// Scale change per unit of wheel `deltaY`
    pub wheel_sensitivity: f64,
    #[serde(deserialize_with = "deserialize_render_style")]
    pub render_style: RenderStyle,
    /// Visible-sample count from which projection runs on rayon (`parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            initial_scale: 3.0,
            min_scale: 1.0,
            max_scale: 10.0,
            point_radius: 3.0,
            decay_factor: 0.99,
            stop_threshold: 0.1,
            wheel_sensitivity: 0.1 / 100.0,
            render_style: RenderStyle::Points,
            parallel_threshold: 4096,
        }
    }
}

impl ScopeConfig {
    /// Parse a (possibly partial) JSON object and validate it.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigError(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings under which the viewport or momentum invariants cannot hold.
    pub fn validate(&self) -> ConfigResult<()> {
        let numbers = [
            ("initialScale", self.initial_scale),
            ("minScale", self.min_scale),
            ("maxScale", self.max_scale),
            ("pointRadius", self.point_radius),
            ("decayFactor", self.decay_factor),
            ("stopThreshold", self.stop_threshold),
            ("wheelSensitivity", self.wheel_sensitivity),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AppError::ConfigError(format!("{} must be finite", name)));
        }

        // widthPercent = 1 / scale must never exceed the whole dataset
        if self.min_scale < 1.0 {
            return Err(AppError::ConfigError(format!(
                "minScale must be at least 1, got {}",
                self.min_scale
            )));
        }
        if self.max_scale < self.min_scale {
            return Err(AppError::ConfigError(format!(
                "maxScale ({}) is below minScale ({})",
                self.max_scale, self.min_scale
            )));
        }
        if self.decay_factor <= 0.0 || self.decay_factor >= 1.0 {
            return Err(AppError::ConfigError(format!(
                "decayFactor must lie in (0, 1), got {}",
                self.decay_factor
            )));
        }
        if self.stop_threshold <= 0.0 {
            return Err(AppError::ConfigError(format!(
                "stopThreshold must be positive, got {}",
                self.stop_threshold
            )));
        }
        if self.point_radius < 0.0 {
            return Err(AppError::ConfigError(format!(
                "pointRadius must not be negative, got {}",
                self.point_radius
            )));
        }
        Ok(())
    }
}

fn deserialize_render_style<'de, D>(deserializer: D) -> Result<RenderStyle, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    RenderStyle::from_str(&raw).map_err(|_| {
        let known: Vec<&'static str> = RenderStyle::iter().map(<&'static str>::from).collect();
        serde::de::Error::custom(format!(
            "unknown renderStyle '{}', expected one of {:?}",
            raw, known
        ))
    })
}
