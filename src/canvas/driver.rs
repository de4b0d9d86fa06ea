//! Frame driver - keeps a scene rendering once per display refresh
//!
//! The callback re-requests itself after every frame and never stops on
//! its own; the loop ends when the page that owns the canvas goes away.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::scene::Scene;
use super::web::CanvasSurface;

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Hand `scene` and `surface` to the browser's frame scheduler
pub fn start(scene: Scene, mut surface: CanvasSurface) -> Result<(), JsValue> {
    // The closure needs a handle to itself to re-request the next frame.
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        scene.render(&mut surface, timestamp_ms);

        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                web_sys::console::error_2(&"floating shapes: frame request failed".into(), &err);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    match slot.borrow().as_ref() {
        Some(callback) => request_frame(callback).map(|_| ()),
        None => Err("frame callback missing".into()),
    }
}
