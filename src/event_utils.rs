use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

/// Passive listener on `window`, detached when dropped.
///
/// Drags keep tracking after the cursor leaves the canvas because move and up
/// events are taken from the window rather than the element.
pub struct WindowListener {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<E>(event: E, mut cb: impl FnMut(E::EventType) + 'static) -> Self
    where
        E: EventDescriptor + 'static,
        E::EventType: JsCast,
    {
        let event_name = event.name().into_owned();
        let callback = Closure::wrap(Box::new(move |ev: Event| {
            cb(ev.unchecked_into::<E::EventType>());
        }) as Box<dyn FnMut(Event)>);

        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                &event_name,
                callback.as_ref().unchecked_ref(),
                &opts,
            );
        }

        Self { event_name, callback }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(&self.event_name, self.callback.as_ref().unchecked_ref());
        }
    }
}
