//! Scene - the animation context and its per-frame render pass
//!
//! A `Scene` owns the immutable shape set and the canvas size. Every frame
//! derives displaced positions, orders shapes back to front by their
//! displaced depth and paints them. Scheduling lives in the driver.

use crate::layout::{PlacedShape, SceneLayout};
use crate::primitives::Position;

use super::surface::{Surface, draw_faces};

/// Per-frame view of a shape; the base shape is never mutated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedShape<'a> {
    pub shape: &'a PlacedShape,
    pub position: Position,
    /// Smaller values are farther away and painted first
    pub sort_depth: f64,
}

/// Where `shape` is after `t` seconds
pub fn animate(shape: &PlacedShape, t: f64) -> AnimatedShape<'_> {
    let position = shape.motion.displace(shape.anchor, t);
    AnimatedShape {
        shape,
        position,
        sort_depth: position.y + shape.half_depth,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    width: f64,
    height: f64,
    shapes: Vec<PlacedShape>,
}

impl Scene {
    pub fn new(width: f64, height: f64, shapes: Vec<PlacedShape>) -> Self {
        Self { width, height, shapes }
    }

    pub fn from_layout(width: f64, height: f64, layout: SceneLayout) -> Self {
        Self::new(width, height, layout.shapes)
    }

    pub fn shapes(&self) -> &[PlacedShape] {
        &self.shapes
    }

    /// Shapes at time `t` (seconds), in paint order
    ///
    /// The sort is stable, so equal depths keep creation order on every frame.
    pub fn draw_order(&self, t: f64) -> Vec<AnimatedShape<'_>> {
        let mut animated: Vec<AnimatedShape<'_>> =
            self.shapes.iter().map(|shape| animate(shape, t)).collect();
        animated.sort_by(|a, b| a.sort_depth.total_cmp(&b.sort_depth));
        animated
    }

    /// Paint one frame; `timestamp_ms` is the scheduler's frame timestamp
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, timestamp_ms: f64) {
        let t = timestamp_ms / 1000.0;
        surface.clear(self.width, self.height);
        for animated in self.draw_order(t) {
            let faces = animated.shape.faces_at(animated.position);
            draw_faces(surface, &faces, animated.shape.palette);
        }
    }
}
