//! Position - a point on the drawing surface, in CSS pixels

/// Position in CSS pixels, origin at the top-left of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both coordinates are within `tolerance` of `other`
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_translate() {
        let p = Position::new(100.0, 200.0).translate(-5.0, 12.5);
        assert_eq!(p, Position::new(95.0, 212.5));
    }

    #[test]
    fn position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn position_approx_eq() {
        let a = Position::new(1.0, 1.0);
        assert!(a.approx_eq(&Position::new(1.0 + 1e-9, 1.0 - 1e-9), 1e-6));
        assert!(!a.approx_eq(&Position::new(1.1, 1.0), 1e-6));
        assert!(Position::new(0.0, 0.0).approx_eq(&Position::default(), 0.0));
    }
}
