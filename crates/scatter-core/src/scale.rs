// File: crates/scatter-core/src/scale.rs
// Summary: Linear data-domain → pixel-range scale with tick helpers.

use crate::ticks::{self, TickFormat};

/// Data value (e.g., a percentage).
pub type Value = f64;
/// Pixel coordinate inside the plot group.
pub type Pixel = f64;

/// Affine map from `[d0, d1]` onto `[r0, r1]`. The range may be inverted
/// (`r0 > r1`) so that values grow upward on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: [Value; 2],
    pub range: [Pixel; 2],
}

impl LinearScale {
    pub fn new(domain: [Value; 2], range: [Pixel; 2]) -> Self {
        Self { domain, range }
    }

    /// Position of `v` inside the domain as a 0..1 fraction. A collapsed domain
    /// maps everything to the midpoint; a NaN domain maps everything to NaN.
    #[inline]
    fn normalize(&self, v: Value) -> f64 {
        let [d0, d1] = self.domain;
        let span = d1 - d0;
        if span.is_nan() {
            return f64::NAN;
        }
        if span == 0.0 {
            return 0.5;
        }
        (v - d0) / span
    }

    #[inline]
    pub fn apply(&self, v: Value) -> Pixel {
        let [r0, r1] = self.range;
        let t = self.normalize(v);
        r0 + t * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: Pixel) -> Value {
        let [r0, r1] = self.range;
        let [d0, d1] = self.domain;
        let span = r1 - r0;
        let t = if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            0.5
        } else {
            (px - r0) / span
        };
        d0 + t * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<Value> {
        ticks::ticks(self.domain[0], self.domain[1], count)
    }

    pub fn tick_format(&self, count: usize) -> TickFormat {
        TickFormat::for_interval(self.domain[0], self.domain[1], count)
    }
}
