// File: crates/scatter-core/src/ticks.rs
// Summary: "Nice" tick layout (1/2/5 × 10^k steps) and fixed-precision tick labels.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Tick count axes ask for when nothing else is configured.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Integer tick bounds `(i1, i2)` and increment. A negative increment `-k`
/// means the step is `1/k`, which keeps small steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }

    if i2 < i1 && 0.5 <= count && count < 2.0 {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Evenly spaced, human-friendly values covering `[start, stop]`.
/// Reverse intervals yield descending ticks; equal bounds yield one tick.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let count = count as f64;
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|i| {
            let i = i as f64;
            let k = if reverse { i2 - i } else { i1 + i };
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

/// Signed distance between adjacent ticks for the given interval.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let (_, _, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Decimal places needed to distinguish ticks spaced `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    // the decimal exponent comes from the shortest repr, not log10, to stay exact
    let sci = format!("{:e}", step);
    let exponent = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);
    (-exponent).max(0) as usize
}

/// Label formatter for one axis: fixed precision derived from the tick step,
/// `,` digit grouping and a typographic minus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickFormat {
    pub precision: usize,
}

impl TickFormat {
    pub fn for_interval(start: f64, stop: f64, count: usize) -> Self {
        Self { precision: precision_fixed(tick_step(start, stop, count)) }
    }

    pub fn format(&self, v: f64) -> String {
        if v.is_nan() {
            return "NaN".to_string();
        }
        let fixed = format!("{:.*}", self.precision, v.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + 4);
        // "-0" never shows: a value that rounds to zero is printed unsigned
        let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        if v < 0.0 && !rounds_to_zero {
            out.push('\u{2212}');
        }
        let digits = int_part.len();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if let Some(f) = frac_part {
            out.push('.');
            out.push_str(f);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_steps_over_poverty_like_range() {
        // span/count = 1.4 sits just under sqrt(2): unit steps
        let t = ticks(8.3, 22.3, 10);
        assert_eq!(t.first().copied(), Some(9.0));
        assert_eq!(t.last().copied(), Some(22.0));
        assert_eq!(t.len(), 14);

        let t = ticks(8.3, 24.3, 10);
        assert_eq!(t, vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0]);
        assert_eq!(tick_step(8.3, 24.3, 10), 2.0);
    }

    #[test]
    fn fractional_steps_are_exact() {
        assert_eq!(ticks(0.0, 1.0, 10), vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]);
        assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
    }

    #[test]
    fn reverse_and_degenerate_intervals() {
        assert_eq!(ticks(4.0, 0.0, 4), vec![4.0, 3.0, 2.0, 1.0, 0.0]);
        assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
        assert!(ticks(f64::NAN, 3.0, 10).is_empty());
        assert!(ticks(0.0, 3.0, 0).is_empty());
    }

    #[test]
    fn labels_use_step_precision_and_grouping() {
        let f = TickFormat::for_interval(0.0, 1.0, 10);
        assert_eq!(f.precision, 1);
        assert_eq!(f.format(0.3), "0.3");

        let f = TickFormat::for_interval(0.0, 80_000.0, 10);
        assert_eq!(f.precision, 0);
        assert_eq!(f.format(40_000.0), "40,000");
        assert_eq!(f.format(-1_234_567.0), "\u{2212}1,234,567");
        assert_eq!(f.format(-0.2), "0");
    }
}
