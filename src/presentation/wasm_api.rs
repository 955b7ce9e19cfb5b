use wasm_bindgen::prelude::*;

use crate::application::CanvasScope;
use crate::domain::{
    errors::AppError,
    logging::LogComponent,
    scope::ScopeConfig,
    waveform::Dataset,
};
use crate::infrastructure::rendering::CanvasSurface;
use crate::log_error;

/// Oscilloscope bound to a `<canvas>` for hosts that drive events from plain JS.
///
/// Every instance owns its own viewport, so several canvases can live on one
/// page. Timestamps are milliseconds (`Date.now()` or `performance.now()`, as
/// long as one clock is used throughout). Call `frame(now)` from
/// `requestAnimationFrame` while `isAnimating()` is true.
#[wasm_bindgen]
pub struct OscilloscopeApi {
    canvas_id: String,
    scope: CanvasScope,
}

#[wasm_bindgen]
impl OscilloscopeApi {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: String,
        samples_json: &str,
        config_json: Option<String>,
    ) -> Result<OscilloscopeApi, JsValue> {
        match Self::mount(&canvas_id, samples_json, config_json.as_deref()) {
            Ok(scope) => Ok(Self { canvas_id, scope }),
            Err(e) => {
                log_error!(LogComponent::Presentation("OscilloscopeApi"), "mount on '{}' failed: {}", canvas_id, e);
                Err(e.into())
            }
        }
    }

    #[wasm_bindgen(getter, js_name = canvasId)]
    pub fn canvas_id(&self) -> String {
        self.canvas_id.clone()
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, client_x: f64, now: f64) {
        self.scope.pointer_down(client_x, now);
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, client_x: f64, now: f64) -> Result<(), JsValue> {
        Ok(self.scope.pointer_move(client_x, now)?)
    }

    /// Returns true when momentum started and `frame` should be scheduled.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, now: f64) -> bool {
        self.scope.pointer_up(now)
    }

    pub fn wheel(&mut self, offset_x: f64, delta_y: f64) -> Result<(), JsValue> {
        Ok(self.scope.wheel(offset_x, delta_y)?)
    }

    /// Advance momentum. Returns true while another frame is wanted.
    pub fn frame(&mut self, now: f64) -> Result<bool, JsValue> {
        Ok(self.scope.animation_frame(now)?)
    }

    pub fn redraw(&mut self) -> Result<(), JsValue> {
        self.scope.redraw()?;
        Ok(())
    }

    pub fn scale(&self) -> f64 {
        self.scope.viewport().scale()
    }

    #[wasm_bindgen(js_name = leftPercent)]
    pub fn left_percent(&self) -> f64 {
        self.scope.viewport().left_percent()
    }

    #[wasm_bindgen(js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.scope.is_coasting()
    }

    /// Current viewport as a JSON string.
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.scope.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl OscilloscopeApi {
    fn mount(canvas_id: &str, samples_json: &str, config_json: Option<&str>) -> Result<CanvasScope, AppError> {
        let config = match config_json {
            Some(json) => ScopeConfig::from_json(json)?,
            None => ScopeConfig::default(),
        };
        let dataset = Dataset::from_json(samples_json)?;
        let surface = CanvasSurface::from_id(canvas_id)?;
        CanvasScope::mount(surface, dataset, config)
    }
}
