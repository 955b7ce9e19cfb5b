use super::config::ScopeConfig;

/// Visible window over the dataset in normalized view-space.
///
/// `scale` lives in `[min_scale, max_scale]`, the window is `1 / scale` wide and
/// `0 <= left_percent <= left_percent + width_percent <= 1` holds after every
/// mutation. Out-of-range requests are clamped, never rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportModel {
    initial_scale: f64,
    min_scale: f64,
    max_scale: f64,
    scale: f64,
    left_percent: f64,
    sample_count: usize,
    width_px: f64,
}

impl ViewportModel {
    /// `sample_count` and `width_px` are fixed for the session; the viewport
    /// starts at `initial_scale` anchored on the left edge.
    pub fn new(config: &ScopeConfig, sample_count: usize, width_px: f64) -> Self {
        let mut viewport = Self {
            initial_scale: config.initial_scale,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            scale: config.min_scale,
            left_percent: 0.0,
            sample_count,
            width_px,
        };
        viewport.reset();
        viewport
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn left_percent(&self) -> f64 {
        self.left_percent
    }

    /// Fraction of the dataset visible at once.
    pub fn width_percent(&self) -> f64 {
        1.0 / self.scale
    }

    pub fn right_percent(&self) -> f64 {
        self.left_percent + self.width_percent()
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    /// Clamp into `[min_scale, max_scale]`. Zero or NaN means "back to the
    /// initial scale". Returns the stored value.
    pub fn set_scale(&mut self, raw: f64) -> f64 {
        let requested = if raw == 0.0 || raw.is_nan() { self.initial_scale } else { raw };
        self.scale = requested.max(self.min_scale).min(self.max_scale);
        // a wider window may push the right edge past the dataset
        self.left_percent = self.left_percent.min((1.0 - self.width_percent()).max(0.0));
        self.scale
    }

    /// Clamp into `[0, 1 - width_percent]`. Depends on the current scale, so
    /// call it after `set_scale`. Returns the stored value.
    pub fn set_left_percent(&mut self, raw: f64) -> f64 {
        let upper = (1.0 - self.width_percent()).max(0.0);
        self.left_percent = if raw.is_nan() { 0.0 } else { raw.max(0.0).min(upper) };
        self.left_percent
    }

    /// Back to `initial_scale` with the window on the left edge.
    pub fn reset(&mut self) {
        self.set_scale(0.0);
        self.set_left_percent(0.0);
    }

    /// Change scale by `-delta_scale`, then move the window so the data that was
    /// at `anchor_percent` stays under `anchor_px`. Returns the new left edge.
    pub fn rescale_around_anchor(&mut self, anchor_px: f64, anchor_percent: f64, delta_scale: f64) -> f64 {
        self.set_scale(self.scale - delta_scale);
        let offset = self.width_percent() * self.pixel_fraction(anchor_px);
        self.set_left_percent(anchor_percent - offset)
    }

    /// View-space position currently under surface pixel `px`.
    pub fn percent_at_pixel(&self, px: f64) -> f64 {
        self.left_percent + self.width_percent() * self.pixel_fraction(px)
    }

    /// Surface pixel at which view-space position `percent` is drawn.
    pub fn pixel_at_percent(&self, percent: f64) -> f64 {
        self.width_px * (percent - self.left_percent) / self.width_percent()
    }

    /// A pixel distance expressed as a view-space distance at the current scale.
    pub fn pixels_to_percent(&self, delta_px: f64) -> f64 {
        if self.width_px <= 0.0 {
            return 0.0;
        }
        delta_px / (self.width_px * self.scale)
    }

    /// Place the window `delta_px` pixels to the left of `origin_left`
    /// (content follows the pointer). Returns the new left edge.
    pub fn pan_from(&mut self, origin_left: f64, delta_px: f64) -> f64 {
        let delta_percent = self.pixels_to_percent(delta_px);
        self.set_left_percent(origin_left - delta_percent)
    }

    pub fn percent_to_index(&self, percent: f64) -> f64 {
        percent * self.sample_count as f64
    }

    pub fn index_to_percent(&self, index: f64) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        index / self.sample_count as f64
    }

    fn pixel_fraction(&self, px: f64) -> f64 {
        if self.width_px <= 0.0 {
            return 0.0;
        }
        px / self.width_px
    }
}
