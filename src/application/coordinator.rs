use serde::Serialize;

use super::input::InputController;
use super::momentum::{MomentumSimulator, MomentumStep, StopReason};
use crate::domain::{
    errors::{AppError, RenderingResult},
    logging::{LogComponent, LogEntry, LogLevel, get_logger},
    scope::{ScopeConfig, ViewportModel},
    waveform::{Dataset, SurfaceMetrics},
};
use crate::infrastructure::rendering::{CanvasSurface, DrawingSurface, RenderStats, Renderer};
use crate::{log_debug, log_info};

/// Serializable view of the coordinator state, used for logging and tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportSnapshot {
    pub scale: f64,
    pub left_percent: f64,
    pub width_percent: f64,
    pub sample_count: usize,
    pub dragging: bool,
    pub coasting: bool,
}

/// Wires input, momentum and rendering around one viewport.
///
/// Every viewport mutation is followed by exactly one full render pass.
pub struct ScopeCoordinator<S: DrawingSurface> {
    config: ScopeConfig,
    dataset: Dataset,
    metrics: SurfaceMetrics,
    viewport: ViewportModel,
    input: InputController,
    momentum: Option<MomentumSimulator>,
    renderer: Renderer,
    surface: S,
    last_render: Option<RenderStats>,
}

impl<S: DrawingSurface> ScopeCoordinator<S> {
    /// Query the surface once, reset the viewport and draw the first frame.
    pub fn mount(surface: S, dataset: Dataset, config: ScopeConfig) -> Result<Self, AppError> {
        if let Err(e) = config.validate() {
            get_logger().error(LogComponent::Application("ScopeCoordinator"), &e.to_string());
            return Err(e);
        }

        let metrics = surface.metrics();
        let viewport = ViewportModel::new(&config, dataset.len(), metrics.width);
        let mut coordinator = Self {
            input: InputController::new(&config),
            renderer: Renderer::new(&config),
            config,
            dataset,
            metrics,
            viewport,
            momentum: None,
            surface,
            last_render: None,
        };
        coordinator.redraw()?;

        log_info!(
            LogComponent::Application("ScopeCoordinator"),
            "mounted {} samples on {}x{} surface ({} style)",
            coordinator.dataset.len(),
            coordinator.metrics.width,
            coordinator.metrics.height,
            coordinator.renderer.style()
        );
        coordinator.log_snapshot("initial viewport");
        Ok(coordinator)
    }

    pub fn viewport(&self) -> &ViewportModel {
        &self.viewport
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    pub fn metrics(&self) -> &SurfaceMetrics {
        &self.metrics
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn last_render(&self) -> Option<RenderStats> {
        self.last_render
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// True while momentum wants more animation frames.
    pub fn is_coasting(&self) -> bool {
        self.momentum.is_some()
    }

    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            scale: self.viewport.scale(),
            left_percent: self.viewport.left_percent(),
            width_percent: self.viewport.width_percent(),
            sample_count: self.viewport.sample_count(),
            dragging: self.is_dragging(),
            coasting: self.is_coasting(),
        }
    }

    /// Full redraw of the current window.
    pub fn redraw(&mut self) -> RenderingResult<RenderStats> {
        let stats = self.renderer.render(&mut self.surface, &self.metrics, &self.viewport, &self.dataset)?;
        self.last_render = Some(stats);
        Ok(stats)
    }

    /// Start a drag. Any running momentum is cancelled.
    pub fn pointer_down(&mut self, x: f64, now_ms: f64) {
        if self.momentum.take().is_some() {
            log_debug!(LogComponent::Application("ScopeCoordinator"), "momentum cancelled by drag");
        }
        self.input.on_pointer_down(x, now_ms, &self.viewport);
    }

    /// Pan while dragging; ignored otherwise.
    pub fn pointer_move(&mut self, x: f64, now_ms: f64) -> RenderingResult<()> {
        if self.input.on_pointer_move(x, now_ms, &mut self.viewport).is_some() {
            self.redraw()?;
        }
        Ok(())
    }

    /// End the drag and start coasting when the release velocity allows it.
    /// Returns whether momentum is now running.
    pub fn pointer_up(&mut self, now_ms: f64) -> bool {
        let was_dragging = self.input.is_dragging();
        let velocity = self.input.on_pointer_up();
        if !was_dragging {
            return self.is_coasting();
        }

        self.momentum = velocity.and_then(|v| MomentumSimulator::start(v, now_ms, &self.config));
        match &self.momentum {
            Some(sim) => {
                log_debug!(
                    LogComponent::Application("ScopeCoordinator"),
                    "drag end, coasting at {:.4}px/ms",
                    sim.velocity()
                );
            }
            None => {
                log_debug!(
                    LogComponent::Application("ScopeCoordinator"),
                    "drag end without usable velocity, momentum skipped"
                );
            }
        }
        self.is_coasting()
    }

    /// Zoom around the cursor. Works during drags and while coasting.
    pub fn wheel(&mut self, offset_x: f64, delta_y: f64) -> RenderingResult<()> {
        self.input.on_wheel(offset_x, delta_y, &mut self.viewport);
        self.redraw()?;
        Ok(())
    }

    /// Advance momentum to `now_ms`. Returns true while another frame is wanted.
    pub fn animation_frame(&mut self, now_ms: f64) -> RenderingResult<bool> {
        let dragging = self.input.is_dragging();
        let Some(sim) = self.momentum.as_mut() else {
            return Ok(false);
        };

        match sim.step(now_ms, &mut self.viewport, dragging) {
            MomentumStep::Continue => {
                self.redraw()?;
                Ok(true)
            }
            MomentumStep::Done(reason) => {
                self.momentum = None;
                if reason == StopReason::Settled {
                    self.redraw()?;
                }
                log_debug!(
                    LogComponent::Application("ScopeCoordinator"),
                    "momentum finished: {:?}",
                    reason
                );
                Ok(false)
            }
        }
    }

    fn log_snapshot(&self, message: &str) {
        let logger = get_logger();
        if !logger.enabled(LogLevel::Debug) {
            return;
        }
        if let Ok(json) = serde_json::to_string(&self.snapshot()) {
            logger.log(
                LogEntry::new(LogLevel::Debug, LogComponent::Application("ScopeCoordinator"), message)
                    .with_metadata(json),
            );
        }
    }
}

/// Coordinator bound to a browser canvas.
pub type CanvasScope = ScopeCoordinator<CanvasSurface>;
