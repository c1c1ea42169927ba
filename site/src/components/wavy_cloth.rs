//! Hero 3D preview: a lit cloth plane on an orbitable canvas.
//!
//! The canvas is always in the tree together with a poster. Once the WebGL
//! renderer is up the poster hides; if it cannot start (no WebGL, shader
//! failure, or no browser at all as in the static export) the poster stays
//! and the canvas is hidden. The page around it is unaffected either way.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::ev::{PointerEvent, WheelEvent};
use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::{Icon, ICON_CUBE};
use crate::error::SceneError;
use crate::scene::{ClothRenderer, ClothScene, OrbitControls};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewerState {
    Pending,
    Running,
    Unavailable,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[component]
pub fn WavyCloth(
    /// Geometry, material, lights and camera; defaults to the hero cloth
    #[prop(optional)]
    scene: ClothScene,
) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let (state, set_state) = signal(ViewerState::Pending);
    let orbit = RwSignal::new(scene.orbit());
    let drag = StoredValue::new(None::<(i32, i32)>);
    let alive = Arc::new(AtomicBool::new(true));

    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        let Some(canvas) = canvas_ref.get() else {
            return false;
        };
        let started = ClothRenderer::new(canvas, scene)
            .and_then(|renderer| run_frames(renderer, orbit, Arc::clone(&alive)));
        match started {
            Ok(()) => set_state.set(ViewerState::Running),
            Err(err) => {
                tracing::warn!(%err, "3D preview unavailable, keeping placeholder");
                set_state.set(ViewerState::Unavailable);
            }
        }
        true
    });

    let on_pointer_down = move |ev: PointerEvent| {
        drag.set_value(Some((ev.client_x(), ev.client_y())));
        if let Some(canvas) = canvas_ref.get_untracked() {
            let _ = canvas.set_pointer_capture(ev.pointer_id());
        }
    };
    let on_pointer_move = move |ev: PointerEvent| {
        let Some((x, y)) = drag.get_value() else {
            return;
        };
        let height = canvas_ref
            .get_untracked()
            .map_or(360, |canvas| canvas.client_height());
        let (dx, dy) = (ev.client_x() - x, ev.client_y() - y);
        orbit.update(|o| o.rotate(dx as f32, dy as f32, height as f32));
        drag.set_value(Some((ev.client_x(), ev.client_y())));
    };
    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        orbit.update(|o| o.zoom(ev.delta_y()));
    };

    view! {
        <div class="viewer-stage">
            <canvas
                node_ref=canvas_ref
                class=move || {
                    if state.get() == ViewerState::Unavailable {
                        "viewer-canvas hidden"
                    } else {
                        "viewer-canvas"
                    }
                }
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=move |_| drag.set_value(None)
                on:pointercancel=move |_| drag.set_value(None)
                on:wheel=on_wheel
            ></canvas>
            <div
                class=move || {
                    if state.get() == ViewerState::Running {
                        "viewer-poster hidden"
                    } else {
                        "viewer-poster"
                    }
                }
                aria-hidden="true"
            >
                <Icon path=ICON_CUBE size="56" class="icon muted" />
            </div>
        </div>
    }
}

/// Drive `renderer` with requestAnimationFrame until `alive` is cleared.
///
/// The frame closure owns the renderer; when it sees `alive == false` (or a
/// later frame cannot be scheduled) it drops itself, which drops the
/// renderer and frees its GL objects.
fn run_frames(
    renderer: ClothRenderer,
    orbit: RwSignal<OrbitControls>,
    alive: Arc<AtomicBool>,
) -> Result<(), SceneError> {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&frame);
    let mut renderer = renderer;
    let mut started_at: Option<f64> = None;

    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let controls = alive
            .load(Ordering::Relaxed)
            .then(|| orbit.try_get_untracked())
            .flatten();
        let Some(controls) = controls else {
            let _ = next.borrow_mut().take();
            return;
        };
        let start = *started_at.get_or_insert(now);
        renderer.draw(&controls, ((now - start) / 1000.0) as f32);
        if let Err(err) = request_frame(web_sys::window(), &next) {
            tracing::warn!(%err, "3D preview stopped");
            let _ = next.borrow_mut().take();
        }
    }));

    let scheduled = request_frame(web_sys::window(), &frame);
    if scheduled.is_err() {
        // break the closure's self-reference so the renderer is released
        let _ = frame.borrow_mut().take();
    }
    scheduled
}

fn request_frame(window: Option<web_sys::Window>, frame: &FrameCallback) -> Result<(), SceneError> {
    let window = window.ok_or(SceneError::NoWindow)?;
    if let Some(callback) = frame.borrow().as_ref() {
        // only fails once the document is being torn down
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
    Ok(())
}
