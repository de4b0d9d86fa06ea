mod canvas;
mod config;
mod landing;
mod layout;
mod primitives;
mod shape;

use dioxus::prelude::*;
use landing::Landing;

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Landing {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
