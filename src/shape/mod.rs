//! Shapes - polyhedron kinds and their projected geometry

pub mod geometry;
pub mod kind;

pub use geometry::{Face, faces, full_height, half_depth};
pub use kind::ShapeKind;
