//! Palette - three-tone face colors for the isometric shading illusion

use std::fmt;

use rand::Rng;

/// Which palette color paints a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceRole {
    Top,
    Left,
    Right,
}

impl FaceRole {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for FaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A named color triple: lightest on top, darker on the two visible sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub top: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

impl Palette {
    pub const STEEL: Self = Self::new("steel", "#b8cce4", "#4a6fa5", "#1e3a5f");
    pub const MIST: Self = Self::new("mist", "#c9d4e8", "#5c7ab0", "#2c4a7a");
    pub const SAND: Self = Self::new("sand", "#d4c5a9", "#8c6a3a", "#5c4a2a");
    pub const SLATE: Self = Self::new("slate", "#b0bac8", "#4a5568", "#2d3748");
    pub const SAGE: Self = Self::new("sage", "#c4d4c0", "#4a7a5c", "#2a4a38");
    pub const PLUM: Self = Self::new("plum", "#d4c4d4", "#7a4a8c", "#4a2a5c");

    /// The fixed palette table, in declaration order
    pub const ALL: &[Self] = &[
        Self::STEEL,
        Self::MIST,
        Self::SAND,
        Self::SLATE,
        Self::SAGE,
        Self::PLUM,
    ];

    pub const fn new(
        name: &'static str,
        top: &'static str,
        left: &'static str,
        right: &'static str,
    ) -> Self {
        Self { name, top, left, right }
    }

    pub fn color(&self, role: FaceRole) -> &'static str {
        match role {
            FaceRole::Top => self.top,
            FaceRole::Left => self.left,
            FaceRole::Right => self.right,
        }
    }

    /// Uniformly pick one entry of the table
    pub fn pick<R: Rng>(rng: &mut R) -> &'static Self {
        &Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STEEL
    }
}
