//! Value primitives shared by the layout engine and the renderer
//!
//! - `Position` → points in CSS pixels
//! - `Palette` / `FaceRole` → fixed three-tone color table
//! - `Motion` → per-shape float and drift oscillations

#[macro_use]
pub mod bounded;
pub mod animation;
pub mod palette;
pub mod position;

pub use animation::Motion;
pub use palette::{FaceRole, Palette};
pub use position::Position;
