use super::surface::DrawingSurface;
use crate::domain::{
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
    waveform::SurfaceMetrics,
};
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `<canvas>` 2D context as a drawing surface.
///
/// Size and stroke color come from the element's computed style so styling
/// stays in CSS; they are read once, on construction.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    metrics: SurfaceMetrics,
}

impl CanvasSurface {
    pub fn from_id(canvas_id: &str) -> RenderingResult<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::SurfaceError("document not available".to_string()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| AppError::SurfaceError(format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::SurfaceError(format!("'{}' is not a canvas", canvas_id)))?;
        Self::from_element(canvas)
    }

    pub fn from_element(canvas: HtmlCanvasElement) -> RenderingResult<Self> {
        let metrics = Self::read_computed_metrics(&canvas)?;

        // backing store must match the CSS box or strokes get scaled
        canvas.set_width(metrics.width as u32);
        canvas.set_height(metrics.height as u32);

        let context = canvas
            .get_context("2d")
            .map_err(|e| AppError::SurfaceError(format!("getContext failed: {:?}", e)))?
            .ok_or_else(|| AppError::SurfaceError("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::SurfaceError("failed to cast to 2D context".to_string()))?;

        #[allow(deprecated)]
        context.set_stroke_style(&JsValue::from_str(&metrics.stroke_color));

        get_logger().info(
            LogComponent::Infrastructure("CanvasSurface"),
            &format!(
                "canvas {}x{} stroke {}",
                metrics.width, metrics.height, metrics.stroke_color
            ),
        );

        Ok(Self { canvas, context, metrics })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn read_computed_metrics(canvas: &HtmlCanvasElement) -> RenderingResult<SurfaceMetrics> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::SurfaceError("window not available".to_string()))?;
        let style = window
            .get_computed_style(canvas)
            .map_err(|e| AppError::SurfaceError(format!("getComputedStyle failed: {:?}", e)))?
            .ok_or_else(|| AppError::SurfaceError("canvas has no computed style".to_string()))?;

        let property = |name: &str| {
            style
                .get_property_value(name)
                .map_err(|e| AppError::SurfaceError(format!("cannot read '{}': {:?}", name, e)))
        };

        let width_css = property("width")?;
        let height_css = property("height")?;
        let width = SurfaceMetrics::parse_css_pixels(&width_css)
            .ok_or_else(|| AppError::SurfaceError(format!("unusable width '{}'", width_css)))?;
        let height = SurfaceMetrics::parse_css_pixels(&height_css)
            .ok_or_else(|| AppError::SurfaceError(format!("unusable height '{}'", height_css)))?;

        Ok(SurfaceMetrics::new(width, height, property("color")?))
    }
}

impl DrawingSurface for CanvasSurface {
    fn metrics(&self) -> SurfaceMetrics {
        self.metrics.clone()
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.metrics.width, self.metrics.height);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) -> RenderingResult<()> {
        self.context
            .arc(x, y, radius, 0.0, 2.0 * PI)
            .map_err(|e| AppError::RenderingError(format!("arc failed: {:?}", e)))
    }

    fn stroke(&mut self) {
        self.context.stroke();
        self.context.close_path();
    }
}
