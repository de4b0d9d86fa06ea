//! ShapeKind - the closed set of polyhedra the scene can contain

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Pyramid,
    /// Bipyramid sharing an equatorial rhombus
    Gem,
}

impl ShapeKind {
    pub const ALL: [Self; 3] = [Self::Cube, Self::Pyramid, Self::Gem];

    /// Sampling vocabulary - every kind listed twice, so uniform over kinds
    pub const VOCABULARY: &[Self] = &[
        Self::Cube,
        Self::Cube,
        Self::Pyramid,
        Self::Pyramid,
        Self::Gem,
        Self::Gem,
    ];

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Pyramid => "pyramid",
            Self::Gem => "gem",
        }
    }

    /// Number of polygons drawn for this kind
    pub const fn face_count(&self) -> usize {
        match self {
            Self::Cube => 3,
            Self::Pyramid => 4,
            Self::Gem => 6,
        }
    }

    /// Whether the body height parameter contributes to the silhouette
    pub const fn uses_height(&self) -> bool {
        !matches!(self, Self::Gem)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
