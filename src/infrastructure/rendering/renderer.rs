use super::surface::DrawingSurface;
use crate::domain::{
    errors::RenderingResult,
    logging::LogComponent,
    scope::{ScopeConfig, ViewportModel},
    waveform::{Dataset, PixelPoint, RenderStyle, SurfaceMetrics},
};
use crate::log_trace;
use std::ops::Range;

/// Summary of one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub visible: usize,
    pub first_index: Option<usize>,
    pub last_index: Option<usize>,
}

/// Decimates the dataset to the visible window and strokes it onto a surface.
///
/// Every pass is a full redraw; the visible sample count is bounded by the
/// window, not by the dataset.
#[derive(Debug, Clone)]
pub struct Renderer {
    style: RenderStyle,
    point_radius: f64,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel_threshold: usize, // minimum visible samples before projecting on rayon
}

impl Renderer {
    pub fn new(config: &ScopeConfig) -> Self {
        Self {
            style: config.render_style,
            point_radius: config.point_radius,
            parallel_threshold: config.parallel_threshold.max(1),
        }
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// Indices drawn for the current window: from `ceil(left * N)` while the
    /// index stays below `N` and its percent stays below the right edge.
    pub fn visible_range(viewport: &ViewportModel, dataset: &Dataset) -> Range<usize> {
        let n = dataset.len();
        let right = viewport.right_percent();
        let start_f = viewport.percent_to_index(viewport.left_percent()).ceil();
        let start = if start_f.is_finite() && start_f > 0.0 { (start_f as usize).min(n) } else { 0 };

        let mut end = start;
        while end < n && viewport.index_to_percent(end as f64) < right {
            end += 1;
        }
        start..end
    }

    /// Pixel positions of every visible sample on a `width x height` surface.
    ///
    /// `y` is mirrored about the vertical center with samples read as percent
    /// of the half-height; nothing is clamped, so values beyond +-100 land
    /// off-surface.
    pub fn project(
        &self,
        viewport: &ViewportModel,
        dataset: &Dataset,
        width: f64,
        height: f64,
    ) -> Vec<PixelPoint> {
        let range = Self::visible_range(viewport, dataset);
        let left = viewport.left_percent();
        let window = viewport.width_percent();
        let samples = dataset.samples();

        let project_one = |index: usize| PixelPoint {
            index,
            x: width * (viewport.index_to_percent(index as f64) - left) / window,
            y: height / 2.0 * (1.0 - samples[index] / 100.0),
        };

        #[cfg(feature = "parallel")]
        if range.len() >= self.parallel_threshold {
            use rayon::prelude::*;
            return range.into_par_iter().map(project_one).collect();
        }

        range.map(project_one).collect()
    }

    /// Clear the surface and stroke the visible samples as one path.
    ///
    /// `metrics` are the dimensions captured at mount; the surface is not
    /// queried again.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        metrics: &SurfaceMetrics,
        viewport: &ViewportModel,
        dataset: &Dataset,
    ) -> RenderingResult<RenderStats> {
        let points = self.project(viewport, dataset, metrics.width, metrics.height);

        surface.clear();
        surface.begin_path();
        match self.style {
            RenderStyle::Points => {
                let r = self.point_radius;
                for p in &points {
                    surface.move_to(p.x + r, p.y);
                    surface.arc(p.x, p.y, r)?;
                }
            }
            RenderStyle::Polyline => {
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    surface.move_to(first.x, first.y);
                }
                for p in iter {
                    surface.line_to(p.x, p.y);
                }
            }
        }
        surface.stroke();

        let stats = RenderStats {
            visible: points.len(),
            first_index: points.first().map(|p| p.index),
            last_index: points.last().map(|p| p.index),
        };
        log_trace!(
            LogComponent::Infrastructure("Renderer"),
            "drew {} samples ({:?}..={:?}) at scale {:.3}",
            stats.visible,
            stats.first_index,
            stats.last_index,
            viewport.scale()
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(n: usize) -> (ViewportModel, Dataset) {
        let config = ScopeConfig::default();
        let data: Vec<f64> = (0..n).map(|i| (i % 200) as f64 - 100.0).collect();
        (ViewportModel::new(&config, n, 300.0), Dataset::from(data))
    }

    #[test]
    fn initial_window_covers_first_third() {
        let (vp, ds) = setup(1000);
        // 333.33.. is excluded by the strict upper bound
        assert_eq!(Renderer::visible_range(&vp, &ds), 0..334);
    }

    #[test]
    fn left_edge_is_rounded_up() {
        let (mut vp, ds) = setup(1000);
        vp.set_left_percent(0.1005);
        let range = Renderer::visible_range(&vp, &ds);
        assert_eq!(range.start, 101);
        assert!(vp.index_to_percent(range.end as f64 - 1.0) < vp.right_percent());
    }

    #[test]
    fn right_edge_stops_at_dataset_end() {
        let (mut vp, ds) = setup(10);
        vp.set_left_percent(1.0);
        let range = Renderer::visible_range(&vp, &ds);
        assert_eq!(range.end, 10);
    }

    #[test]
    fn projection_maps_window_onto_surface_width() {
        let (vp, ds) = setup(300);
        let renderer = Renderer::new(&ScopeConfig::default());
        let points = renderer.project(&vp, &ds, 300.0, 200.0);
        assert_eq!(points.len(), 100);
        assert_eq!(points[0].x, 0.0);
        // index 1 at scale 3: 300 * (1/300) * 3 = 3px
        assert!((points[1].x - 3.0).abs() < 1e-9);
        // sample 0 is -100: bottom edge; sample 100 would be the top
        assert_eq!(points[0].y, 200.0);
        assert_eq!(points[100 - 1].y, 100.0 * (1.0 - (-1.0) / 100.0));
    }

    #[test]
    fn out_of_range_samples_are_not_clamped() {
        let config = ScopeConfig { initial_scale: 1.0, ..Default::default() };
        let vp = ViewportModel::new(&config, 2, 100.0);
        let ds = Dataset::from(vec![250.0, -300.0]);
        let points = Renderer::new(&config).project(&vp, &ds, 100.0, 100.0);
        assert!(points[0].y < 0.0);
        assert!(points[1].y > 100.0);
    }

    #[test]
    fn empty_dataset_projects_nothing() {
        let (vp, _) = setup(0);
        let ds = Dataset::from(Vec::new());
        assert!(Renderer::new(&ScopeConfig::default()).project(&vp, &ds, 100.0, 100.0).is_empty());
    }
}
