// File: crates/scatter-core/src/tooltip.rs
// Summary: Per-point hover tooltips: content, placement, SVG element, and the overlay that shows/hides them.

use crate::geometry::{fmt_coord, Point};
use crate::record::StateRecord;
use crate::svg::Element;
use crate::text::measure_block;

pub const TOOLTIP_CLASS: &str = "d3-tip";

const FONT_SIZE: f64 = 12.0;
const LINE_HEIGHT: f64 = 16.0;
const PADDING: f64 = 8.0;

/// Tooltip box geometry relative to the point: `(dy, dx)`, applied to the
/// north edge of the circle's bounding box.
pub const OFFSET: (f64, f64) = (-8.0, 0.0);

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub lines: Vec<String>,
    /// Bottom-centre of the tooltip box, in plot coordinates.
    pub anchor: Point,
}

impl Tooltip {
    /// Tooltip for a point drawn at `center` with radius `radius`: state name,
    /// poverty and healthcare values, placed above the circle.
    pub fn for_record(rec: &StateRecord, center: Point, radius: f64) -> Self {
        let lines = vec![
            rec.state.clone(),
            format!("Poverty: {}", fmt_coord(rec.poverty)),
            format!("Healthcare: {}", fmt_coord(rec.healthcare)),
        ];
        let anchor = Point::new(center.x, center.y - radius).offset(OFFSET.1, OFFSET.0);
        Self { lines, anchor }
    }

    /// Single-line form, e.g. `Ohio / Poverty: 14.2 / Healthcare: 22.5`.
    pub fn summary(&self) -> String {
        self.lines.join(" / ")
    }

    pub fn size(&self) -> (f64, f64) {
        let w = measure_block(&self.lines, FONT_SIZE) + 2.0 * PADDING;
        let h = self.lines.len() as f64 * LINE_HEIGHT + 2.0 * PADDING;
        (w, h)
    }

    pub fn to_element(&self) -> Element {
        let (w, h) = self.size();
        let mut text = Element::new("text").attr("text-anchor", "middle");
        for (i, line) in self.lines.iter().enumerate() {
            let y = -h + PADDING + (i as f64 + 1.0) * LINE_HEIGHT - 4.0;
            let mut span = Element::new("tspan").num("x", 0.0).num("y", y);
            if i == 0 {
                span = span.attr("font-weight", "bold");
            }
            text.push(span.text(line.clone()));
        }

        Element::new("g")
            .attr("class", TOOLTIP_CLASS)
            .attr("transform", format!("translate({},{})", fmt_coord(self.anchor.x), fmt_coord(self.anchor.y)))
            .child(
                Element::new("rect")
                    .num("x", -w / 2.0)
                    .num("y", -h)
                    .num("width", w)
                    .num("height", h)
                    .num("rx", 2.0),
            )
            .child(text)
    }
}

/// Pointer interaction with one point, identified by its index in the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter { index: usize },
    Leave { index: usize },
}

/// Tracks which tooltip is visible. At most one is shown; the latest event wins.
#[derive(Clone, Debug, Default)]
pub struct TooltipOverlay {
    tips: Vec<Tooltip>,
    active: Option<usize>,
}

impl TooltipOverlay {
    pub fn new(tips: Vec<Tooltip>) -> Self {
        Self { tips, active: None }
    }

    pub fn handle_event(&mut self, evt: PointerEvent) {
        match evt {
            PointerEvent::Enter { index } if index < self.tips.len() => self.active = Some(index),
            PointerEvent::Enter { .. } => {}
            // leaving a point whose tooltip was already replaced changes nothing
            PointerEvent::Leave { index } => {
                if self.active == Some(index) {
                    self.active = None;
                }
            }
        }
    }

    pub fn active(&self) -> Option<&Tooltip> {
        self.active.and_then(|i| self.tips.get(i))
    }

    pub fn tips(&self) -> &[Tooltip] {
        &self.tips
    }

    /// Append the visible tooltip, if any, to `group`.
    pub fn render(&self, group: &mut Element) {
        if let Some(tip) = self.active() {
            group.push(tip.to_element().attr("style", "visibility: visible"));
        }
    }
}
