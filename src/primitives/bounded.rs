//! Bounded - macro for creating range-constrained numeric types
//!
//! Generates `f64` newtypes whose constructor rejects out-of-range values
//! in const contexts. Sampling goes through `lerp`, which clamps.

/// Creates a bounded f64 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f64!(FloatSpeed, 0.5, 1.4);
/// let s = FloatSpeed::lerp(0.5);   // FloatSpeed(0.95)
/// let c = FloatSpeed::clamped(9.0); // FloatSpeed(1.4)
/// ```
macro_rules! bounded_f64 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        #[allow(dead_code)]
        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;

            #[track_caller]
            pub const fn new(value: f64) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            pub fn clamped(value: f64) -> Self {
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f64 {
                self.0
            }

            /// Ratio within the range [0.0, 1.0]
            pub const fn ratio(&self) -> f64 {
                (self.0 - Self::MIN) / (Self::MAX - Self::MIN)
            }

            /// Lerp between min and max
            pub fn lerp(t: f64) -> Self {
                Self::clamped(Self::MIN + t * (Self::MAX - Self::MIN))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }
    };
}

pub(crate) use bounded_f64;
