use crate::domain::{
    logging::LogComponent,
    scope::{ScopeConfig, ViewportModel},
};
use crate::log_debug;

/// One pointer position with the time it was observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub time_ms: f64,
    pub x: f64,
}

/// The two most recent samples of a drag; older ones are dropped so the
/// release velocity reflects only the final motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityHistory {
    previous: DragSample,
    latest: Option<DragSample>,
}

impl VelocityHistory {
    /// One-entry history holding the drag origin.
    pub fn seeded(origin: DragSample) -> Self {
        Self { previous: origin, latest: None }
    }

    pub fn push(&mut self, sample: DragSample) {
        if let Some(latest) = self.latest {
            self.previous = latest;
        }
        self.latest = Some(sample);
    }

    /// Pixels per millisecond between the two samples. `None` with a single
    /// sample or when both share a timestamp.
    pub fn velocity(&self) -> Option<f64> {
        let latest = self.latest?;
        let dt = latest.time_ms - self.previous.time_ms;
        if !(dt > 0.0) {
            return None;
        }
        let velocity = (latest.x - self.previous.x) / dt;
        velocity.is_finite().then_some(velocity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub start_x: f64,
    pub start_left_percent: f64,
    pub history: VelocityHistory,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    Dragging(DragState),
}

/// Turns pointer and wheel events into viewport mutations.
#[derive(Debug, Clone)]
pub struct InputController {
    state: InputState,
    wheel_sensitivity: f64,
}

impl InputController {
    pub fn new(config: &ScopeConfig) -> Self {
        Self { state: InputState::Idle, wheel_sensitivity: config.wheel_sensitivity }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InputState::Dragging(_))
    }

    pub fn on_pointer_down(&mut self, x: f64, now_ms: f64, viewport: &ViewportModel) {
        let origin = DragSample { time_ms: now_ms, x };
        self.state = InputState::Dragging(DragState {
            start_x: x,
            start_left_percent: viewport.left_percent(),
            history: VelocityHistory::seeded(origin),
        });
        log_debug!(
            LogComponent::Application("Input"),
            "drag start at x={} left={:.4}",
            x,
            viewport.left_percent()
        );
    }

    /// Pan relative to where the drag started. Returns the new left edge, or
    /// `None` when no drag is active.
    pub fn on_pointer_move(&mut self, x: f64, now_ms: f64, viewport: &mut ViewportModel) -> Option<f64> {
        let InputState::Dragging(drag) = &mut self.state else {
            return None;
        };
        drag.history.push(DragSample { time_ms: now_ms, x });
        Some(viewport.pan_from(drag.start_left_percent, x - drag.start_x))
    }

    /// End the drag and report the release velocity (px/ms) if there is
    /// enough history to estimate one.
    pub fn on_pointer_up(&mut self) -> Option<f64> {
        match std::mem::take(&mut self.state) {
            InputState::Dragging(drag) => drag.history.velocity(),
            InputState::Idle => None,
        }
    }

    /// Scale change for a wheel delta; positive `delta_y` (scroll down) zooms out.
    pub fn wheel_delta_scale(&self, delta_y: f64) -> f64 {
        self.wheel_sensitivity * delta_y
    }

    /// Zoom keeping the sample under `offset_x` in place. Allowed mid-drag.
    /// Returns the applied scale delta.
    pub fn on_wheel(&self, offset_x: f64, delta_y: f64, viewport: &mut ViewportModel) -> f64 {
        let anchor = viewport.percent_at_pixel(offset_x);
        let delta_scale = self.wheel_delta_scale(delta_y);
        viewport.rescale_around_anchor(offset_x, anchor, delta_scale);
        log_debug!(
            LogComponent::Application("Input"),
            "wheel dy={} -> scale {:.3} left {:.4}",
            delta_y,
            viewport.scale(),
            viewport.left_percent()
        );
        delta_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (InputController, ViewportModel) {
        let config = ScopeConfig::default();
        (InputController::new(&config), ViewportModel::new(&config, 1000, 600.0))
    }

    #[test]
    fn history_keeps_two_latest_samples() {
        let mut history = VelocityHistory::seeded(DragSample { time_ms: 0.0, x: 0.0 });
        assert_eq!(history.velocity(), None);

        history.push(DragSample { time_ms: 10.0, x: 100.0 });
        assert_eq!(history.velocity(), Some(10.0));

        // only the final motion counts
        history.push(DragSample { time_ms: 20.0, x: 120.0 });
        assert_eq!(history.velocity(), Some(2.0));
    }

    #[test]
    fn identical_timestamps_give_no_velocity() {
        let mut history = VelocityHistory::seeded(DragSample { time_ms: 5.0, x: 0.0 });
        history.push(DragSample { time_ms: 5.0, x: 40.0 });
        assert_eq!(history.velocity(), None);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let (mut input, mut vp) = setup();
        let before = vp.clone();
        assert_eq!(input.on_pointer_move(300.0, 1.0, &mut vp), None);
        assert_eq!(vp, before);
    }

    #[test]
    fn drag_pans_from_start_position() {
        let (mut input, mut vp) = setup();
        vp.set_left_percent(0.5);
        input.on_pointer_down(300.0, 0.0, &vp);
        assert!(input.is_dragging());

        // 180px at scale 3 on 600px is 0.1
        let left = input.on_pointer_move(120.0, 16.0, &mut vp).unwrap();
        assert!((left - 0.6).abs() < 1e-12);
        // still relative to the drag origin, not the previous move
        let left = input.on_pointer_move(300.0, 32.0, &mut vp).unwrap();
        assert!((left - 0.5).abs() < 1e-12);
    }

    #[test]
    fn click_without_move_has_no_velocity() {
        let (mut input, vp) = setup();
        input.on_pointer_down(10.0, 0.0, &vp);
        assert_eq!(input.on_pointer_up(), None);
        assert!(!input.is_dragging());
    }

    #[test]
    fn release_velocity_uses_last_two_samples() {
        let (mut input, mut vp) = setup();
        input.on_pointer_down(0.0, 0.0, &vp);
        input.on_pointer_move(50.0, 10.0, &mut vp);
        input.on_pointer_move(80.0, 20.0, &mut vp);
        assert_eq!(input.on_pointer_up(), Some(3.0));
    }

    #[test]
    fn pointer_up_while_idle_is_noop() {
        let (mut input, _) = setup();
        assert_eq!(input.on_pointer_up(), None);
    }

    #[test]
    fn wheel_down_zooms_out_around_cursor() {
        let (input, mut vp) = setup();
        vp.set_left_percent(0.2);
        let anchor = vp.percent_at_pixel(150.0);
        let delta = input.on_wheel(150.0, 100.0, &mut vp);
        assert!((delta - 0.1).abs() < 1e-12);
        assert!((vp.scale() - 2.9).abs() < 1e-12);
        assert!((vp.percent_at_pixel(150.0) - anchor).abs() < 1e-12);
    }

    #[test]
    fn wheel_during_drag_keeps_dragging() {
        let (mut input, mut vp) = setup();
        input.on_pointer_down(100.0, 0.0, &vp);
        input.on_wheel(100.0, -300.0, &mut vp);
        assert!(input.is_dragging());
        assert!((vp.scale() - 3.3).abs() < 1e-12);
    }
}
