//! Shape geometry - flat polygons that fake an isometric polyhedron
//!
//! All functions are pure. The anchor is the topmost reference point of a
//! shape: the back vertex of a cube's top rhombus, the apex of a pyramid,
//! the upper apex of a gem. Faces come back in painter's order, so drawing
//! them in sequence resolves self-occlusion without a depth buffer.

use crate::primitives::{FaceRole, Position};

use super::kind::ShapeKind;

/// Isometric depth offset as a fraction of width
pub const DEPTH_RATIO: f64 = 0.27;
/// Gem upper pyramid height as a fraction of width
pub const GEM_UPPER_RATIO: f64 = 0.55;
/// Gem lower pyramid height as a fraction of width
pub const GEM_LOWER_RATIO: f64 = 0.38;

/// One filled polygon and the palette role that colors it
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub role: FaceRole,
    pub points: Vec<Position>,
}

impl Face {
    fn new(role: FaceRole, points: &[Position]) -> Self {
        Self {
            role,
            points: points.to_vec(),
        }
    }
}

pub fn half_depth(width: f64) -> f64 {
    width * DEPTH_RATIO
}

/// Total vertical extent of the silhouette
pub fn full_height(kind: ShapeKind, width: f64, height: f64) -> f64 {
    let depth = 2.0 * half_depth(width);
    match kind {
        ShapeKind::Cube => depth + height,
        ShapeKind::Pyramid => height + depth,
        ShapeKind::Gem => GEM_UPPER_RATIO * width + depth + GEM_LOWER_RATIO * width,
    }
}

/// Faces of `kind` anchored at `anchor`, back faces first
pub fn faces(kind: ShapeKind, anchor: Position, width: f64, height: f64) -> Vec<Face> {
    match kind {
        ShapeKind::Cube => cube_faces(anchor, width, height),
        ShapeKind::Pyramid => pyramid_faces(anchor, width, height),
        ShapeKind::Gem => gem_faces(anchor, width),
    }
}

fn cube_faces(anchor: Position, width: f64, height: f64) -> Vec<Face> {
    let Position { x, y } = anchor;
    let hw = width / 2.0;
    let hd = half_depth(width);
    let d = 2.0 * hd;

    let back = Position::new(x, y);
    let right = Position::new(x + hw, y + hd);
    let front = Position::new(x, y + d);
    let left = Position::new(x - hw, y + hd);

    vec![
        Face::new(FaceRole::Top, &[back, right, front, left]),
        Face::new(
            FaceRole::Left,
            &[left, front, front.translate(0.0, height), left.translate(0.0, height)],
        ),
        Face::new(
            FaceRole::Right,
            &[front, right, right.translate(0.0, height), front.translate(0.0, height)],
        ),
    ]
}

fn pyramid_faces(anchor: Position, width: f64, height: f64) -> Vec<Face> {
    let Position { x, y } = anchor;
    let hw = width / 2.0;
    let hd = half_depth(width);
    let d = 2.0 * hd;

    let apex = anchor;
    let base_back = Position::new(x, y + height);
    let base_left = Position::new(x - hw, y + height + hd);
    let base_right = Position::new(x + hw, y + height + hd);
    let base_front = Position::new(x, y + height + d);

    vec![
        // unlit back planes
        Face::new(FaceRole::Top, &[apex, base_back, base_left]),
        Face::new(FaceRole::Top, &[apex, base_back, base_right]),
        Face::new(FaceRole::Left, &[apex, base_left, base_front]),
        Face::new(FaceRole::Right, &[apex, base_right, base_front]),
    ]
}

fn gem_faces(anchor: Position, width: f64) -> Vec<Face> {
    let Position { x, y } = anchor;
    let hw = width / 2.0;
    let hd = half_depth(width);
    let d = 2.0 * hd;
    let upper = GEM_UPPER_RATIO * width;
    let lower = GEM_LOWER_RATIO * width;

    // equatorial rhombus
    let eq_top = Position::new(x, y + upper);
    let eq_right = Position::new(x + hw, y + upper + hd);
    let eq_bottom = Position::new(x, y + upper + d);
    let eq_left = Position::new(x - hw, y + upper + hd);
    let apex_top = anchor;
    let apex_bottom = Position::new(x, y + upper + d + lower);

    vec![
        Face::new(FaceRole::Top, &[apex_top, eq_top, eq_left]),
        Face::new(FaceRole::Top, &[apex_top, eq_top, eq_right]),
        Face::new(FaceRole::Left, &[apex_top, eq_left, eq_bottom]),
        Face::new(FaceRole::Right, &[apex_top, eq_right, eq_bottom]),
        Face::new(FaceRole::Left, &[apex_bottom, eq_left, eq_bottom]),
        Face::new(FaceRole::Right, &[apex_bottom, eq_right, eq_bottom]),
    ]
}
