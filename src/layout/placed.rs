//! PlacedShape - one polyhedron at its base position on the canvas
//!
//! Base fields are fixed once layout commits the shape; per-frame motion
//! is derived from `motion` without touching them.

use crate::primitives::{Motion, Palette, Position};
use crate::shape::{Face, ShapeKind, faces, full_height, half_depth};

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape {
    pub kind: ShapeKind,
    /// Topmost reference point of the silhouette
    pub anchor: Position,
    pub width: f64,
    /// Body extrusion, zero for gems
    pub height: f64,
    pub half_depth: f64,
    /// Vertical center of the silhouette, used for spacing
    pub center_y: f64,
    pub palette: &'static Palette,
    pub motion: Motion,
}

impl PlacedShape {
    pub fn new(kind: ShapeKind, anchor: Position, width: f64, height: f64) -> Self {
        let height = if kind.uses_height() { height } else { 0.0 };
        Self {
            kind,
            anchor,
            width,
            height,
            half_depth: half_depth(width),
            center_y: anchor.y + full_height(kind, width, height) / 2.0,
            palette: &Palette::ALL[0],
            motion: Motion::STILL,
        }
    }

    pub fn with_palette(mut self, palette: &'static Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn full_height(&self) -> f64 {
        full_height(self.kind, self.width, self.height)
    }

    /// Spacing reference point: anchor x, silhouette center y
    pub fn center(&self) -> Position {
        Position::new(self.anchor.x, self.center_y)
    }

    /// Bounding box `(left, top, width, height)` at the base position
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.anchor.x - self.width / 2.0,
            self.anchor.y,
            self.width,
            self.full_height(),
        )
    }

    /// Faces with the anchor moved to `anchor`
    pub fn faces_at(&self, anchor: Position) -> Vec<Face> {
        faces(self.kind, anchor, self.width, self.height)
    }

    pub fn describe(&self) -> String {
        format!(
            "{} {} {:.0}x{:.0} at ({:.1}, {:.1}), {}",
            self.palette.name,
            self.kind,
            self.width,
            self.full_height(),
            self.anchor.x,
            self.anchor.y,
            self.motion.describe(),
        )
    }
}
