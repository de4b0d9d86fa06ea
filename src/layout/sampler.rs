//! Sampler - random scene generation with minimum-distance spacing
//!
//! Each slot gets a bounded number of placement attempts. An attempt is
//! rejected when the shape cannot fit inside the margins or lands too close
//! to a shape placed earlier. A slot that runs out of attempts is dropped.

use rand::Rng;

use crate::config::SceneConfig;
use crate::primitives::{Motion, Palette, Position};
use crate::shape::{ShapeKind, full_height};
use super::placed::PlacedShape;

/// Outcome of one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub shapes: Vec<PlacedShape>,
    /// Slots the pass tried to fill
    pub requested: usize,
    pub min_distance: f64,
}

impl SceneLayout {
    /// Slots that ran out of attempts
    pub fn skipped(&self) -> usize {
        self.requested.saturating_sub(self.shapes.len())
    }
}

/// Generates shape layouts from an explicit random source
pub struct Sampler;

impl Sampler {
    pub fn random_count<R: Rng>(rng: &mut R, config: &SceneConfig) -> usize {
        rng.random_range(config.min_count..=config.max_count.max(config.min_count))
    }

    pub fn random_kind<R: Rng>(rng: &mut R) -> ShapeKind {
        let vocab = ShapeKind::VOCABULARY;
        vocab[rng.random_range(0..vocab.len())]
    }

    /// `(width, height)`; gems get no body height
    pub fn random_size<R: Rng>(rng: &mut R, kind: ShapeKind, config: &SceneConfig) -> (f64, f64) {
        let width = rng.random_range(config.width_range.clone());
        let height = if kind.uses_height() {
            rng.random_range(config.height_range.clone())
        } else {
            0.0
        };
        (width, height)
    }

    /// Sample an anchor that keeps the whole silhouette inside the margins
    pub fn random_anchor<R: Rng>(
        rng: &mut R,
        width: f64,
        full_height: f64,
        canvas_width: f64,
        canvas_height: f64,
        config: &SceneConfig,
    ) -> Option<Position> {
        let min_x = config.margin_x + width / 2.0;
        let max_x = canvas_width - config.margin_x - width / 2.0;
        if !(min_x <= max_x) {
            return None;
        }
        let x = rng.random_range(min_x..=max_x);

        let min_y = config.margin_top;
        let max_y = canvas_height - config.margin_bottom - full_height;
        if !(min_y <= max_y) {
            return None;
        }
        let y = rng.random_range(min_y..=max_y);

        Some(Position::new(x, y))
    }

    /// One placement attempt, without spacing checks, palette or motion
    pub fn random_placed<R: Rng>(
        rng: &mut R,
        canvas_width: f64,
        canvas_height: f64,
        config: &SceneConfig,
    ) -> Option<PlacedShape> {
        let kind = Self::random_kind(rng);
        let (width, height) = Self::random_size(rng, kind, config);
        let fh = full_height(kind, width, height);
        let anchor = Self::random_anchor(rng, width, fh, canvas_width, canvas_height, config)?;
        Some(PlacedShape::new(kind, anchor, width, height))
    }

    /// Generate a full scene, dropping slots that cannot be placed
    pub fn random_scene<R: Rng>(
        rng: &mut R,
        canvas_width: f64,
        canvas_height: f64,
        config: &SceneConfig,
    ) -> SceneLayout {
        let requested = Self::random_count(rng, config);
        let min_distance = config.min_distance(canvas_width, requested);
        let mut shapes: Vec<PlacedShape> = Vec::with_capacity(requested);

        for _ in 0..requested {
            for _ in 0..config.max_attempts {
                let Some(candidate) = Self::random_placed(rng, canvas_width, canvas_height, config)
                else {
                    continue;
                };

                let center = candidate.center();
                let too_close = shapes
                    .iter()
                    .any(|existing| existing.center().distance(&center) < min_distance);
                if too_close {
                    continue;
                }

                let placed = candidate
                    .with_palette(Palette::pick(rng))
                    .with_motion(Motion::random(rng));
                shapes.push(placed);
                break;
            }
        }

        SceneLayout {
            shapes,
            requested,
            min_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn assert_invariants(layout: &SceneLayout, canvas_width: f64, canvas_height: f64, config: &SceneConfig) {
        for (i, a) in layout.shapes.iter().enumerate() {
            let (left, top, w, h) = a.bounds();
            assert!(top >= 0.0 && top >= config.margin_top, "{} above top margin", a.describe());
            assert!(
                top + h <= canvas_height - config.margin_bottom + 1e-9,
                "{} below bottom margin",
                a.describe()
            );
            assert!(left >= config.margin_x - 1e-9, "{} past left margin", a.describe());
            assert!(
                left + w <= canvas_width - config.margin_x + 1e-9,
                "{} past right margin",
                a.describe()
            );
            for b in &layout.shapes[i + 1..] {
                let d = a.center().distance(&b.center());
                assert!(
                    d >= layout.min_distance,
                    "{} and {} only {} apart (min {})",
                    a.describe(),
                    b.describe(),
                    d,
                    layout.min_distance
                );
            }
        }
    }

    #[test]
    fn six_shapes_fit_an_800x400_canvas() {
        let config = SceneConfig::default().with_count(6);
        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let layout = Sampler::random_scene(&mut rng, 800.0, 400.0, &config);
            assert_eq!(layout.requested, 6);
            assert_eq!(layout.shapes.len(), 6, "seed {} placed {}", seed, layout.shapes.len());
            assert_eq!(layout.skipped(), 0);
            assert!((layout.min_distance - 800.0 / 7.0).abs() < 1e-9);
            assert_invariants(&layout, 800.0, 400.0, &config);
        }
    }

    #[test]
    fn invariants_hold_across_canvas_sizes() {
        let config = SceneConfig::default();
        for (w, h) in [(800.0, 400.0), (1280.0, 320.0), (360.0, 640.0), (200.0, 150.0)] {
            for seed in 0..8 {
                let mut rng = SmallRng::seed_from_u64(seed);
                let layout = Sampler::random_scene(&mut rng, w, h, &config);
                assert!((6..=9).contains(&layout.requested));
                assert!(layout.shapes.len() <= layout.requested);
                assert_eq!(layout.min_distance, config.min_distance(w, layout.requested));
                assert_invariants(&layout, w, h, &config);
            }
        }
    }

    #[test]
    fn short_canvas_yields_no_shapes() {
        let config = SceneConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let layout = Sampler::random_scene(&mut rng, 800.0, 10.0, &config);
        assert!(layout.shapes.is_empty());
        assert_eq!(layout.skipped(), layout.requested);
    }

    #[test]
    fn narrow_canvas_yields_no_shapes() {
        let config = SceneConfig::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let layout = Sampler::random_scene(&mut rng, 50.0, 400.0, &config);
        assert!(layout.shapes.is_empty());
    }

    #[test]
    fn same_seed_same_scene() {
        let config = SceneConfig::default();
        let a = Sampler::random_scene(&mut SmallRng::seed_from_u64(99), 900.0, 300.0, &config);
        let b = Sampler::random_scene(&mut SmallRng::seed_from_u64(99), 900.0, 300.0, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn sizes_stay_in_configured_ranges() {
        let config = SceneConfig::default();
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..500 {
            let kind = Sampler::random_kind(&mut rng);
            let (w, h) = Sampler::random_size(&mut rng, kind, &config);
            assert!(config.width_range.contains(&w));
            if kind == ShapeKind::Gem {
                assert_eq!(h, 0.0);
            } else {
                assert!(config.height_range.contains(&h));
            }
        }
    }

    #[test]
    fn every_kind_gets_sampled() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            match Sampler::random_kind(&mut rng) {
                ShapeKind::Cube => counts[0] += 1,
                ShapeKind::Pyramid => counts[1] += 1,
                ShapeKind::Gem => counts[2] += 1,
            }
        }
        for c in counts {
            assert!(c > 800 && c < 1200, "kind distribution skewed: {:?}", counts);
        }
    }

    #[test]
    fn anchor_rejected_when_silhouette_too_tall() {
        let config = SceneConfig::default();
        let mut rng = SmallRng::seed_from_u64(4);
        assert!(Sampler::random_anchor(&mut rng, 60.0, 100.0, 800.0, 100.0, &config).is_none());
        let anchor = Sampler::random_anchor(&mut rng, 60.0, 88.0, 800.0, 100.0, &config)
            .expect("88px fits exactly between 6px margins");
        assert_eq!(anchor.y, 6.0);
    }

    #[test]
    fn placed_shapes_get_palette_and_motion() {
        let config = SceneConfig::default();
        let mut rng = SmallRng::seed_from_u64(12);
        let layout = Sampler::random_scene(&mut rng, 1000.0, 500.0, &config);
        assert!(!layout.shapes.is_empty());
        for shape in &layout.shapes {
            assert!(Palette::ALL.contains(shape.palette));
            assert!(shape.motion.float.amplitude >= 4.0 && shape.motion.float.amplitude <= 11.0);
            assert!(shape.motion.drift.speed >= 0.3 && shape.motion.drift.speed <= 0.8);
        }
    }
}
