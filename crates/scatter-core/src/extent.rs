// File: crates/scatter-core/src/extent.rs
// Summary: Data extents and the padded scale domains derived from them.

use crate::record::StateRecord;

/// Minimum and maximum of a column, skipping NaN. Empty or all-NaN input
/// yields `(NaN, NaN)` so downstream positions degrade instead of failing.
pub fn extent<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        if v.is_nan() {
            continue;
        }
        lo = lo.min(v);
        hi = hi.max(v);
        any = true;
    }
    if any { (lo, hi) } else { (f64::NAN, f64::NAN) }
}

/// Scale domains for the chart: X padded by one unit on both sides,
/// Y from zero to one unit above the largest value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domains {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Domains {
    pub fn from_records(records: &[StateRecord]) -> Self {
        let (x_min, x_max) = extent(records.iter().map(|r| r.poverty));
        let (_, y_max) = extent(records.iter().map(|r| r.healthcare));
        Self {
            x: [x_min - 1.0, x_max + 1.0],
            y: [0.0, y_max + 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_nan() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 7.5]), (-1.0, 7.5));
        let (lo, hi) = extent(Vec::<f64>::new());
        assert!(lo.is_nan() && hi.is_nan());
    }

    #[test]
    fn domains_are_padded() {
        let recs = vec![
            StateRecord::new("Alabama", "AL", 19.3, 13.9),
            StateRecord::new("Ohio", "OH", 14.2, 22.5),
            StateRecord::new("Utah", "UT", 11.7, 11.4),
        ];
        let d = Domains::from_records(&recs);
        assert_eq!(d.x, [10.7, 20.3]);
        assert_eq!(d.y, [0.0, 23.5]);
    }

    #[test]
    fn single_record_has_width_two() {
        let d = Domains::from_records(&[StateRecord::new("Ohio", "OH", 14.2, 22.5)]);
        assert_eq!(d.x[1] - d.x[0], 2.0);
    }
}
