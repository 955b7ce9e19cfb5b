use crate::domain::{
    logging::LogComponent,
    scope::{ScopeConfig, ViewportModel},
};
use crate::log_trace;
use crate::time_utils::whole_millis_between;

/// Why coasting ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Velocity decayed below the stop threshold
    Settled,
    /// A new drag took over; the viewport was left untouched
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentumStep {
    Continue,
    Done(StopReason),
}

/// Post-release coasting. Driven one animation frame at a time through
/// [`MomentumSimulator::step`]; velocity is in pixels per millisecond and
/// decays once per whole elapsed millisecond.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumSimulator {
    velocity: f64,
    last_step_ms: f64,
    decay_factor: f64,
    stop_threshold: f64,
}

impl MomentumSimulator {
    /// `None` when the release velocity is not a finite number.
    pub fn start(velocity: f64, now_ms: f64, config: &ScopeConfig) -> Option<Self> {
        if !velocity.is_finite() {
            return None;
        }
        Some(Self {
            velocity,
            last_step_ms: now_ms,
            decay_factor: config.decay_factor,
            stop_threshold: config.stop_threshold,
        })
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Advance to `now_ms` and pan the viewport by the distance covered.
    ///
    /// The distance starts at the current velocity and accumulates the decayed
    /// velocity of every whole millisecond since the previous step, so a frame
    /// with no elapsed millisecond still moves by one velocity unit.
    pub fn step(&mut self, now_ms: f64, viewport: &mut ViewportModel, drag_active: bool) -> MomentumStep {
        if drag_active {
            return MomentumStep::Done(StopReason::Interrupted);
        }

        let elapsed = whole_millis_between(self.last_step_ms, now_ms);
        let mut distance = self.velocity;
        for _ in 0..elapsed {
            self.velocity *= self.decay_factor;
            distance += self.velocity;
            if self.velocity == 0.0 {
                break;
            }
        }
        self.last_step_ms = now_ms;

        viewport.pan_from(viewport.left_percent(), distance);
        log_trace!(
            LogComponent::Application("Momentum"),
            "{}ms: moved {:.3}px, v={:.4}, left={:.5}",
            elapsed,
            distance,
            self.velocity,
            viewport.left_percent()
        );

        if self.velocity.abs() < self.stop_threshold {
            MomentumStep::Done(StopReason::Settled)
        } else {
            MomentumStep::Continue
        }
    }
}
