//! Surface - the 2-D drawing contract and the face renderer on top of it
//!
//! Coordinates are CSS pixels; any device-pixel-ratio scaling is the
//! implementor's business.

use crate::primitives::Palette;
use crate::shape::Face;

/// Outline color shared by every face, independent of palette
pub const STROKE_COLOR: &str = "rgba(0,0,0,0.10)";
pub const STROKE_WIDTH: f64 = 0.7;

/// Minimal vector drawing context
pub trait Surface {
    /// Clear the region `(0, 0, width, height)`
    fn clear(&mut self, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    /// Fill the current path with a solid color
    fn fill(&mut self, color: &str);
    /// Stroke the current path
    fn stroke(&mut self, color: &str, line_width: f64);
}

/// Fill and outline one face with its palette color
pub fn draw_face<S: Surface + ?Sized>(surface: &mut S, face: &Face, palette: &Palette) {
    let Some((first, rest)) = face.points.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(first.x, first.y);
    for p in rest {
        surface.line_to(p.x, p.y);
    }
    surface.close_path();
    surface.fill(palette.color(face.role));
    surface.stroke(STROKE_COLOR, STROKE_WIDTH);
}

/// Draw faces in the order given
pub fn draw_faces<S: Surface + ?Sized>(surface: &mut S, faces: &[Face], palette: &Palette) {
    for face in faces {
        draw_face(surface, face, palette);
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;

    /// One call made against a `RecordingSurface`
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(f64, f64),
        BeginPath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        ClosePath,
        Fill(String),
        Stroke(String, f64),
    }

    /// Surface double that records every call in order
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn fills(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Fill(color) => Some(color.as_str()),
                    _ => None,
                })
                .collect()
        }

        /// First vertex of every path, in drawing order
        pub fn path_starts(&self) -> Vec<(f64, f64)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::MoveTo(x, y) => Some((*x, *y)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear(width, height));
        }
        fn begin_path(&mut self) {
            self.ops.push(Op::BeginPath);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::LineTo(x, y));
        }
        fn close_path(&mut self) {
            self.ops.push(Op::ClosePath);
        }
        fn fill(&mut self, color: &str) {
            self.ops.push(Op::Fill(color.to_string()));
        }
        fn stroke(&mut self, color: &str, line_width: f64) {
            self.ops.push(Op::Stroke(color.to_string(), line_width));
        }
    }
}
