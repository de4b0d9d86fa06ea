use dioxus::prelude::*;
use crate::canvas::ShapesCanvas;

/// Host page: a hero panel with the shapes widget behind the heading
#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #f4f6fa; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            // Hero
            div {
                style: "position: relative; width: 100%; max-width: 960px; height: 420px; border-radius: 12px; overflow: hidden; background: #ffffff; border: 1px solid #e2e8f0;",

                div {
                    style: "position: absolute; inset: 0;",
                    ShapesCanvas {}
                }

                div {
                    style: "position: relative; height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; pointer-events: none;",
                    h1 {
                        style: "font-size: 48px; font-weight: 700; color: #1e293b; margin: 0 0 16px 0; letter-spacing: -1px;",
                        "Floating Shapes"
                    }
                    p {
                        style: "font-size: 20px; color: #475569; margin: 0; line-height: 1.6; max-width: 560px;",
                        "Cubes, pyramids and gems drifting over the page, shaded with three flat tones."
                    }
                }
            }

            // Footer
            p {
                style: "color: #94a3b8; font-size: 13px; margin-top: 32px;",
                "Reload for a new arrangement"
            }
        }
    }
}
