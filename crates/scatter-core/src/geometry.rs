// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Both coordinates are finite; NaN positions come from unparseable input.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Format a number as JavaScript prints it: shortest round-trip decimal,
/// integers without a trailing `.0`, `NaN`/`Infinity` verbatim, and exponent
/// form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`. Valid in SVG attributes too.
pub fn fmt_coord(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    let a = v.abs();
    if a != 0.0 && !(1e-6..1e21).contains(&a) {
        let s = format!("{v:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    if v == v.trunc() && a < 1e15 {
        // normalizes -0.0 as well
        return format!("{}", v as i64);
    }
    format!("{}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_format_compactly() {
        assert_eq!(fmt_coord(12.0), "12");
        assert_eq!(fmt_coord(-0.0), "0");
        assert_eq!(fmt_coord(0.25), "0.25");
        assert_eq!(fmt_coord(f64::NAN), "NaN");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(fmt_coord(1e21), "1e+21");
        assert_eq!(fmt_coord(-2.5e22), "-2.5e+22");
        assert_eq!(fmt_coord(1e20), "100000000000000000000");
        assert_eq!(fmt_coord(1e-7), "1e-7");
        assert_eq!(fmt_coord(1.5e-7), "1.5e-7");
        assert_eq!(fmt_coord(0.000001), "0.000001");
        assert_eq!(fmt_coord(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn offset_moves_point() {
        let p = Point::new(10.0, 20.0).offset(-6.0, 4.0);
        assert_eq!(p, Point::new(4.0, 24.0));
        assert!(p.is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }
}
