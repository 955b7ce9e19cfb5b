use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use leptos::html::Canvas;
use leptos::*;

use crate::application::CanvasScope;
use crate::domain::{
    logging::{LogComponent, get_logger},
    scope::ScopeConfig,
    waveform::Dataset,
};
use crate::event_utils::WindowListener;
use crate::infrastructure::rendering::CanvasSurface;
use crate::time_utils::now_ms;

type SharedScope = Rc<RefCell<Option<CanvasScope>>>;
type PendingFrame = Rc<RefCell<Option<AnimationFrame>>>;

/// Canvas oscilloscope: drag to pan (with momentum), wheel to zoom.
///
/// Size and stroke color come from the canvas CSS (`class="oscilloscope"`).
#[component]
pub fn Oscilloscope(
    samples: Dataset,
    #[prop(optional)] config: Option<ScopeConfig>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let scope: SharedScope = Rc::new(RefCell::new(None));
    let pending_frame: PendingFrame = Rc::new(RefCell::new(None));
    let (status, set_status) = create_signal(String::new());
    let config = config.unwrap_or_default();

    // mount once the element is in the document, computed style needs layout
    {
        let scope = scope.clone();
        create_effect(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if scope.borrow().is_some() {
                return;
            }
            let element: web_sys::HtmlCanvasElement = (*canvas).clone();
            let mounted = CanvasSurface::from_element(element)
                .and_then(|surface| CanvasScope::mount(surface, samples.clone(), config.clone()));
            match mounted {
                Ok(coordinator) => {
                    *scope.borrow_mut() = Some(coordinator);
                    set_status.set(String::new());
                }
                Err(e) => {
                    get_logger().error(LogComponent::Presentation("Oscilloscope"), &e.to_string());
                    set_status.set(e.to_string());
                }
            }
        });
    }

    let listeners: Vec<WindowListener> = vec![
        {
            let scope = scope.clone();
            WindowListener::new(ev::mousemove, move |event: web_sys::MouseEvent| {
                if let Some(coordinator) = scope.borrow_mut().as_mut() {
                    if let Err(e) = coordinator.pointer_move(event.client_x() as f64, now_ms()) {
                        set_status.set(e.to_string());
                    }
                }
            })
        },
        {
            let scope = scope.clone();
            let pending_frame = pending_frame.clone();
            WindowListener::new(ev::mouseup, move |_event: web_sys::MouseEvent| {
                let coasting = scope
                    .borrow_mut()
                    .as_mut()
                    .map(|coordinator| coordinator.pointer_up(now_ms()))
                    .unwrap_or(false);
                if coasting && pending_frame.borrow().is_none() {
                    schedule_momentum_frame(scope.clone(), pending_frame.clone(), set_status);
                }
            })
        },
    ];

    {
        let pending_frame = pending_frame.clone();
        on_cleanup(move || {
            drop(listeners);
            pending_frame.borrow_mut().take();
        });
    }

    let on_mouse_down = {
        let scope = scope.clone();
        let pending_frame = pending_frame.clone();
        move |event: web_sys::MouseEvent| {
            if let Some(coordinator) = scope.borrow_mut().as_mut() {
                coordinator.pointer_down(event.client_x() as f64, now_ms());
            }
            pending_frame.borrow_mut().take();
        }
    };

    let on_wheel = move |event: web_sys::WheelEvent| {
        if let Some(coordinator) = scope.borrow_mut().as_mut() {
            if let Err(e) = coordinator.wheel(event.offset_x() as f64, event.delta_y()) {
                set_status.set(e.to_string());
            }
        }
    };

    view! {
        <div class="oscilloscope-container">
            <canvas
                class="oscilloscope"
                node_ref=canvas_ref
                on:mousedown=on_mouse_down
                on:wheel=on_wheel
            />
            <Show when=move || status.with(|s| !s.is_empty())>
                <div class="oscilloscope-status">{move || status.get()}</div>
            </Show>
        </div>
    }
}

/// Drive momentum one animation frame at a time until it reports done.
fn schedule_momentum_frame(scope: SharedScope, pending_frame: PendingFrame, set_status: WriteSignal<String>) {
    let next = pending_frame.clone();
    let handle = request_animation_frame(move |_| {
        let wants_more = match scope.borrow_mut().as_mut() {
            Some(coordinator) => coordinator.animation_frame(now_ms()).unwrap_or_else(|e| {
                set_status.set(e.to_string());
                false
            }),
            None => false,
        };
        if wants_more {
            schedule_momentum_frame(scope.clone(), next, set_status);
        } else {
            next.borrow_mut().take();
        }
    });
    *pending_frame.borrow_mut() = Some(handle);
}
