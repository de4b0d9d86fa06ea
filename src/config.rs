//! Layout tunables

use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Requested shape count is drawn uniformly from `min_count..=max_count`
    pub min_count: usize,
    pub max_count: usize,
    /// Placement tries per slot before the slot is dropped
    pub max_attempts: usize,
    pub min_distance_floor: f64,
    pub width_range: Range<f64>,
    /// Body height range, ignored for gems
    pub height_range: Range<f64>,
    pub margin_x: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            min_count: 6,
            max_count: 9,
            max_attempts: 80,
            min_distance_floor: 70.0,
            width_range: 40.0..90.0,
            height_range: 28.0..88.0,
            margin_x: 10.0,
            margin_top: 6.0,
            margin_bottom: 6.0,
        }
    }
}

impl SceneConfig {
    /// Pin the requested shape count
    pub fn with_count(mut self, count: usize) -> Self {
        self.min_count = count;
        self.max_count = count;
        self
    }

    /// Minimum center-to-center distance for a scene of `count` shapes
    pub fn min_distance(&self, canvas_width: f64, count: usize) -> f64 {
        self.min_distance_floor
            .max(canvas_width / (count as f64 + 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_scene_constants() {
        let config = SceneConfig::default();
        assert_eq!((config.min_count, config.max_count), (6, 9));
        assert_eq!(config.max_attempts, 80);
        assert_eq!(config.width_range, 40.0..90.0);
        assert_eq!(config.height_range, 28.0..88.0);
    }

    #[test]
    fn with_count_pins_both_bounds() {
        let config = SceneConfig::default().with_count(6);
        assert_eq!((config.min_count, config.max_count), (6, 6));
    }

    #[test]
    fn min_distance_has_a_floor() {
        let config = SceneConfig::default();
        assert_eq!(config.min_distance(300.0, 9), 70.0);
        assert!((config.min_distance(800.0, 6) - 800.0 / 7.0).abs() < 1e-12);
        assert_eq!(config.min_distance(1400.0, 6), 200.0);
    }
}
