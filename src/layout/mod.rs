//! Layout - procedural placement of the shape set
//!
//! Runs once per scene. The result is immutable; the animator derives
//! per-frame positions from it.

pub mod placed;
pub mod sampler;

pub use placed::PlacedShape;
pub use sampler::{Sampler, SceneLayout};
