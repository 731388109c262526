// File: crates/scatter-core/src/types.rs
// Summary: Shared layout constants (canvas size, margins) and the derived plot area.

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels.
pub const WIDTH: u32 = 1200;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 660;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        // left leaves room for the rotated healthcare caption
        Self::new(100, 50, 50, 50)
    }
}

/// Canvas size plus margins; everything else in the chart is derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub margin: Insets,
}

impl Layout {
    pub const fn new(width: u32, height: u32, margin: Insets) -> Self {
        Self { width, height, margin }
    }

    /// Width of the plot area inside the margins (saturates at zero).
    pub const fn plot_width(&self) -> u32 { self.width.saturating_sub(self.margin.hsum()) }

    /// Height of the plot area inside the margins (saturates at zero).
    pub const fn plot_height(&self) -> u32 { self.height.saturating_sub(self.margin.vsum()) }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_area() {
        let l = Layout::default();
        assert_eq!((l.plot_width(), l.plot_height()), (1050, 560));
    }

    #[test]
    fn oversized_margins_saturate() {
        let l = Layout::new(100, 100, Insets::new(80, 80, 10, 10));
        assert_eq!(l.plot_width(), 0);
        assert_eq!(l.plot_height(), 80);
    }

    #[test]
    fn huge_margins_do_not_overflow() {
        let l = Layout::new(WIDTH, HEIGHT, Insets::new(u32::MAX, 1, u32::MAX, u32::MAX));
        assert_eq!(l.margin.hsum(), u32::MAX);
        assert_eq!((l.plot_width(), l.plot_height()), (0, 0));
    }
}
