//! ShapesCanvas - the decorative widget
//!
//! Renders a `<canvas>` that fills its container. Once mounted, the canvas
//! is measured, a scene is laid out for its size and the frame driver takes
//! over. The number of placed shapes is exposed as `data-shape-count`.

use dioxus::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::config::SceneConfig;
use crate::layout::Sampler;
use super::driver;
use super::scene::Scene;
use super::web::CanvasSurface;

const CANVAS_ID: &str = "shapes-canvas";

/// Floating polyhedra backdrop. `seed` makes the layout reproducible.
#[component]
pub fn ShapesCanvas(seed: Option<u64>) -> Element {
    let mut shape_count = use_signal(|| 0usize);

    use_effect(move || match mount(CANVAS_ID, seed) {
        Ok(placed) => shape_count.set(placed),
        Err(err) => web_sys::console::error_2(&"floating shapes: mount failed".into(), &err),
    });

    rsx! {
        canvas {
            id: CANVAS_ID,
            style: "display: block; width: 100%; height: 100%;",
            "data-shape-count": "{shape_count}",
        }
    }
}

fn fresh_rng() -> Result<SmallRng, JsValue> {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(SmallRng::from_seed(buf))
}

/// Bind the canvas, lay out a scene and start animating it
fn mount(id: &str, seed: Option<u64>) -> Result<usize, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(id)
        .ok_or("canvas element not found")?
        .dyn_into()?;

    let surface = CanvasSurface::bind(&canvas)?;
    let (width, height) = (surface.width(), surface.height());

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => fresh_rng()?,
    };
    let layout = Sampler::random_scene(&mut rng, width, height, &SceneConfig::default());

    web_sys::console::log_1(
        &format!(
            "floating shapes: placed {} of {} on {:.0}x{:.0}",
            layout.shapes.len(),
            layout.requested,
            width,
            height
        )
        .into(),
    );
    for shape in &layout.shapes {
        web_sys::console::debug_1(&shape.describe().into());
    }
    if layout.skipped() > 0 {
        web_sys::console::warn_1(
            &format!(
                "floating shapes: {} slot(s) skipped, min distance {:.1}",
                layout.skipped(),
                layout.min_distance
            )
            .into(),
        );
    }

    let placed = layout.shapes.len();
    driver::start(Scene::from_layout(width, height, layout), surface)?;
    Ok(placed)
}
