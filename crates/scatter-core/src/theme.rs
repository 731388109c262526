// File: crates/scatter-core/src/theme.rs
// Summary: Named colour presets for points, labels, axes, captions and tooltips.

use std::fmt;

/// A colour kept both as the CSS keyword written into SVG and as RGB for raster output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub css: &'static str,
    pub rgb: (u8, u8, u8),
}

impl Color {
    pub const fn new(css: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { css, rgb: (r, g, b) }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub point_fill: Color,
    pub point_stroke: Color,
    pub point_opacity: f64,
    pub point_label: Color,
    pub axis: Color,
    pub caption: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::new("white", 255, 255, 255),
            point_fill: Color::new("darkviolet", 0x94, 0x00, 0xd3),
            point_stroke: Color::new("black", 0, 0, 0),
            point_opacity: 0.6,
            point_label: Color::new("white", 255, 255, 255),
            axis: Color::new("black", 0, 0, 0),
            caption: Color::new("violet", 0xee, 0x82, 0xee),
            tooltip_background: Color::new("#333333", 0x33, 0x33, 0x33),
            tooltip_text: Color::new("white", 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::new("#121214", 18, 18, 20),
            point_fill: Color::new("#40a0ff", 64, 160, 255),
            point_stroke: Color::new("#ebebf5", 235, 235, 245),
            point_opacity: 0.7,
            point_label: Color::new("white", 255, 255, 255),
            axis: Color::new("#b4b4be", 180, 180, 190),
            caption: Color::new("#ffe646", 255, 230, 70),
            tooltip_background: Color::new("#ebebf5", 235, 235, 245),
            tooltip_text: Color::new("#121214", 18, 18, 20),
        }
    }

    /// CSS for the class names the chart emits. Tooltip visibility is driven by
    /// the `visibility` attribute, so no rule here may set it.
    pub fn stylesheet(&self) -> String {
        format!(
            ".axisColor {{ color: {axis}; }}\n\
             .axisText {{ font-family: sans-serif; font-size: 16px; fill: {caption}; }}\n\
             .circleText {{ font-family: sans-serif; fill: {label}; pointer-events: none; }}\n\
             .d3-tip {{ pointer-events: none; font-family: sans-serif; font-size: 12px; }}\n\
             .d3-tip rect {{ fill: {tip_bg}; fill-opacity: 0.8; }}\n\
             .d3-tip text {{ fill: {tip_fg}; }}\n",
            axis = self.axis,
            caption = self.caption,
            label = self.point_label,
            tip_bg = self.tooltip_background,
            tip_fg = self.tooltip_text,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("no-such-theme").name, "classic");
    }

    #[test]
    fn stylesheet_leaves_tooltip_visibility_alone() {
        let css = Theme::classic().stylesheet();
        assert!(!css.contains("visibility"));
        assert!(css.contains(".axisText { font-family: sans-serif; font-size: 16px; fill: violet; }"));
    }
}
