#![allow(dead_code)]

use std::cell::Cell;

use oscilloscope_wasm::domain::errors::{AppError, RenderingResult};
use oscilloscope_wasm::domain::scope::ScopeConfig;
use oscilloscope_wasm::domain::waveform::{Dataset, SurfaceMetrics};
use oscilloscope_wasm::infrastructure::rendering::DrawingSurface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc(f64, f64, f64),
    Stroke,
}

/// Drawing surface double that records every primitive it receives.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub metrics: SurfaceMetrics,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { metrics: SurfaceMetrics::new(width, height, "rgb(0, 255, 0)"), calls: Vec::new() }
    }

    /// Number of full render passes seen so far.
    pub fn passes(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Clear).count()
    }

    pub fn arcs(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Arc(..))).count()
    }

    pub fn clear_log(&mut self) {
        self.calls.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn metrics(&self) -> SurfaceMetrics {
        self.metrics.clone()
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo(x, y));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) -> RenderingResult<()> {
        self.calls.push(DrawCall::Arc(x, y, radius));
        Ok(())
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }
}

/// Surface whose `arc` always fails, as a detached canvas context would.
pub struct BrokenArcSurface;

impl DrawingSurface for BrokenArcSurface {
    fn metrics(&self) -> SurfaceMetrics {
        SurfaceMetrics::new(100.0, 100.0, "black")
    }
    fn clear(&mut self) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn line_to(&mut self, _x: f64, _y: f64) {}
    fn arc(&mut self, _x: f64, _y: f64, _radius: f64) -> RenderingResult<()> {
        Err(AppError::RenderingError("context lost".to_string()))
    }
    fn stroke(&mut self) {}
}

/// Surface whose reported width doubles after the first query, as a canvas
/// resized by CSS would. Records drawn x positions and query count.
pub struct ResizingSurface {
    queries: Cell<usize>,
    pub max_x: f64,
}

impl ResizingSurface {
    pub fn new() -> Self {
        Self { queries: Cell::new(0), max_x: f64::NEG_INFINITY }
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl DrawingSurface for ResizingSurface {
    fn metrics(&self) -> SurfaceMetrics {
        let width = if self.queries.get() == 0 { 300.0 } else { 600.0 };
        self.queries.set(self.queries.get() + 1);
        SurfaceMetrics::new(width, 100.0, "black")
    }
    fn clear(&mut self) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, x: f64, _y: f64) {
        self.max_x = self.max_x.max(x);
    }
    fn line_to(&mut self, x: f64, _y: f64) {
        self.max_x = self.max_x.max(x);
    }
    fn arc(&mut self, x: f64, _y: f64, _radius: f64) -> RenderingResult<()> {
        self.max_x = self.max_x.max(x);
        Ok(())
    }
    fn stroke(&mut self) {}
}

/// Triangle wave in `[-100, 100]`, the shape of the bundled demo data.
pub fn triangle_wave(n: usize) -> Dataset {
    Dataset::from((0..n).map(|i| ((i % 200) as f64 - 100.0).abs() * 2.0 - 100.0).collect::<Vec<_>>())
}

pub fn default_config() -> ScopeConfig {
    ScopeConfig::default()
}
