// File: crates/scatter-core/src/record.rs
// Summary: One state's measurements plus the text-to-number coercion applied to CSV fields.
// Notes:
// - Coercion mirrors browser unary-plus conversion so lenient output matches the
//   browser chart: blank text is 0, garbage is NaN, nothing is rejected.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// How malformed numeric text is treated during coercion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// Keep going; malformed values become NaN and render at degenerate positions.
    #[default]
    Lenient,
    /// Reject the dataset on the first malformed value.
    Strict,
}

/// Text fields exactly as they appear in the CSV. Missing columns, and fields
/// missing from a short row, stay `None`; a present-but-empty field is `Some("")`.
#[derive(Clone, Debug, Default)]
pub struct RawRecord {
    pub state: Option<String>,
    pub abbr: Option<String>,
    pub poverty: Option<String>,
    pub healthcare: Option<String>,
    pub age: Option<String>,
    pub smokes: Option<String>,
    pub income: Option<String>,
    pub obesity: Option<String>,
}

impl RawRecord {
    /// Pick the known columns out of `row` by header name. Fields beyond the
    /// header are ignored.
    pub fn from_row(headers: &csv::StringRecord, row: &csv::StringRecord) -> Self {
        let field = |name: &str| {
            headers.iter().position(|h| h == name).and_then(|i| row.get(i)).map(str::to_owned)
        };
        Self {
            state: field("state"),
            abbr: field("abbr"),
            poverty: field("poverty"),
            healthcare: field("healthcare"),
            age: field("age"),
            smokes: field("smokes"),
            income: field("income"),
            obesity: field("obesity"),
        }
    }
}

/// One US state. Immutable once coerced.
#[derive(Clone, Debug, PartialEq)]
pub struct StateRecord {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub healthcare: f64,
    pub age: f64,
    pub smokes: f64,
    pub income: f64,
    pub obesity: f64,
}

impl StateRecord {
    /// Record with the two plotted measurements set and the rest zeroed.
    pub fn new(state: impl Into<String>, abbr: impl Into<String>, poverty: f64, healthcare: f64) -> Self {
        Self {
            state: state.into(),
            abbr: abbr.into(),
            poverty,
            healthcare,
            age: 0.0,
            smokes: 0.0,
            income: 0.0,
            obesity: 0.0,
        }
    }

    /// Coerce a raw CSV row. `row` is the 1-based data row used in strict-mode errors.
    pub fn from_raw(raw: RawRecord, row: usize, policy: NumericPolicy) -> Result<Self> {
        let num = |column: &'static str, text: &Option<String>| -> Result<f64> {
            let v = text.as_deref().map_or(f64::NAN, coerce_number);
            if v.is_nan() && policy == NumericPolicy::Strict {
                return Err(ChartError::InvalidNumber {
                    row,
                    column,
                    value: text.clone().unwrap_or_default(),
                });
            }
            Ok(v)
        };

        Ok(Self {
            poverty: num("poverty", &raw.poverty)?,
            healthcare: num("healthcare", &raw.healthcare)?,
            age: num("age", &raw.age)?,
            smokes: num("smokes", &raw.smokes)?,
            income: num("income", &raw.income)?,
            obesity: num("obesity", &raw.obesity)?,
            state: raw.state.unwrap_or_default(),
            abbr: raw.abbr.unwrap_or_default(),
        })
    }
}

/// Convert text to a number with unary-plus semantics. Never fails; returns NaN instead.
pub fn coerce_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        if s.len() == 2 {
            return f64::NAN;
        }
        return parse_radix(&s[2..], radix);
    }

    // Rust's float grammar is a superset here: it also accepts inf/nan spellings.
    let body = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_matches_unary_plus() {
        assert_eq!(coerce_number("14.2"), 14.2);
        assert_eq!(coerce_number("  22.5 \t"), 22.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("-3e2"), -300.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("5."), 5.0);
        assert_eq!(coerce_number("0x1F"), 31.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn garbage_is_nan() {
        for s in ["é1", "abc", "12abc", "1,000", "nan", "NaN", "inf", "infinity", "0x", "0xZZ", "-0x10", "+"] {
            assert!(coerce_number(s).is_nan(), "{s:?} should be NaN");
        }
    }

    #[test]
    fn lenient_keeps_nan() {
        let raw = RawRecord {
            state: Some("Ohio".into()),
            abbr: Some("OH".into()),
            poverty: Some("n/a".into()),
            healthcare: Some("22.5".into()),
            ..Default::default()
        };
        let rec = StateRecord::from_raw(raw, 1, NumericPolicy::Lenient).unwrap();
        assert!(rec.poverty.is_nan());
        assert_eq!(rec.healthcare, 22.5);
        // missing columns are undefined, not blank
        assert!(rec.age.is_nan());
    }

    #[test]
    fn short_row_fields_are_missing_not_blank() {
        let headers = csv::StringRecord::from(vec!["state", "abbr", "poverty", "healthcare"]);
        let raw = RawRecord::from_row(&headers, &csv::StringRecord::from(vec!["Utah", "UT", ""]));
        assert_eq!(raw.poverty.as_deref(), Some(""));
        assert_eq!(raw.healthcare, None);

        let rec = StateRecord::from_raw(raw, 1, NumericPolicy::Lenient).unwrap();
        assert_eq!(rec.poverty, 0.0);
        assert!(rec.healthcare.is_nan());
    }

    #[test]
    fn strict_reports_row_and_column() {
        let raw = RawRecord {
            poverty: Some("14.2".into()),
            healthcare: Some("lots".into()),
            ..Default::default()
        };
        let err = StateRecord::from_raw(raw, 7, NumericPolicy::Strict).unwrap_err();
        match err {
            ChartError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 7);
                assert_eq!(column, "healthcare");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
