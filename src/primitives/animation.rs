//! Animation - sinusoidal bobbing and drifting
//!
//! Every shape carries two independent oscillations: a vertical "float"
//! and a horizontal "drift". Offsets are a pure function of elapsed time,
//! so the base placement never changes.

use std::f64::consts::TAU;

use rand::Rng;

use super::bounded::bounded_f64;
use super::position::Position;

bounded_f64!(FloatAmplitude, 4.0, 11.0);
bounded_f64!(FloatSpeed, 0.5, 1.4);
bounded_f64!(DriftAmplitude, 2.0, 7.0);
bounded_f64!(DriftSpeed, 0.3, 0.8);
bounded_f64!(Phase, 0.0, TAU);

/// `amplitude * sin(speed * t + phase)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub amplitude: f64,
    /// Radians per second
    pub speed: f64,
    pub phase: f64,
}

impl Oscillation {
    pub const STILL: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(amplitude: f64, speed: f64, phase: f64) -> Self {
        Self { amplitude, speed, phase }
    }

    /// Displacement after `t` seconds
    pub fn offset(&self, t: f64) -> f64 {
        self.amplitude * (self.speed * t + self.phase).sin()
    }
}

/// Float (vertical) and drift (horizontal) motion of one shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub float: Oscillation,
    pub drift: Oscillation,
}

impl Motion {
    pub const STILL: Self = Self {
        float: Oscillation::STILL,
        drift: Oscillation::STILL,
    };

    pub fn new(
        float_amplitude: FloatAmplitude,
        float_speed: FloatSpeed,
        float_phase: Phase,
        drift_amplitude: DriftAmplitude,
        drift_speed: DriftSpeed,
        drift_phase: Phase,
    ) -> Self {
        Self {
            float: Oscillation::new(
                float_amplitude.value(),
                float_speed.value(),
                float_phase.value(),
            ),
            drift: Oscillation::new(
                drift_amplitude.value(),
                drift_speed.value(),
                drift_phase.value(),
            ),
        }
    }

    /// Draw every parameter uniformly from its half-open range
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(
            FloatAmplitude::lerp(rng.random()),
            FloatSpeed::lerp(rng.random()),
            Phase::lerp(rng.random()),
            DriftAmplitude::lerp(rng.random()),
            DriftSpeed::lerp(rng.random()),
            Phase::lerp(rng.random()),
        )
    }

    /// Where `base` has moved to after `t` seconds
    pub fn displace(&self, base: Position, t: f64) -> Position {
        base.translate(self.drift.offset(t), self.float.offset(t))
    }

    pub fn describe(&self) -> String {
        format!(
            "bobbing {:.1}px, drifting {:.1}px",
            self.float.amplitude, self.drift.amplitude
        )
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::STILL
    }
}
