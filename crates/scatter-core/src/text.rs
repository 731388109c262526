// File: crates/scatter-core/src/text.rs
// Summary: Approximate sans-serif text metrics used to size tooltip boxes without a font backend.

/// Advance width of one glyph as a fraction of the font size.
fn advance(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.28,
        'f' | 't' | 'r' | ' ' | '(' | ')' | '[' | ']' | '-' => 0.35,
        'm' | 'w' => 0.85,
        'M' | 'W' => 0.9,
        '0'..='9' => 0.56,
        c if c.is_ascii_uppercase() => 0.68,
        _ => 0.52,
    }
}

/// Estimated rendered width of a single line, in pixels.
pub fn measure_width(text: &str, size: f64) -> f64 {
    text.chars().map(advance).sum::<f64>() * size.max(1.0)
}

/// Width of the widest line.
pub fn measure_block(lines: &[String], size: f64) -> f64 {
    lines.iter().map(|l| measure_width(l, size)).fold(0.0, f64::max)
}
