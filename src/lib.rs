use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::{scope::ScopeConfig, waveform::Dataset};
use crate::presentation::Oscilloscope;

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Install the panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "oscilloscope module ready");
}

/// Mount the Leptos `<Oscilloscope/>` into `<body>`.
#[wasm_bindgen(js_name = mountOscilloscope)]
pub fn mount_oscilloscope(samples_json: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let dataset = Dataset::from_json(samples_json)?;
    let config = match config_json.as_deref() {
        Some(json) => ScopeConfig::from_json(json)?,
        None => ScopeConfig::default(),
    };

    leptos::mount_to_body(move || {
        leptos::view! { <Oscilloscope samples=dataset.clone() config=config.clone() /> }
    });
    Ok(())
}
