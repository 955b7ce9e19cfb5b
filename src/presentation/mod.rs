pub mod scope_view;
pub mod wasm_api;

pub use scope_view::Oscilloscope;
pub use wasm_api::OscilloscopeApi;
