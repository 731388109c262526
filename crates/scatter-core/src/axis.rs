// File: crates/scatter-core/src/axis.rs
// Summary: Axis model (scale, orientation, caption) and its SVG rendering: domain path plus tick groups.

use crate::geometry::fmt_coord;
use crate::scale::LinearScale;
use crate::svg::Element;
use crate::ticks::DEFAULT_TICK_COUNT;

/// Half-pixel shift that keeps 1px strokes crisp.
const CRISP_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub orient: Orient,
    pub scale: LinearScale,
    pub tick_count: usize,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, orient: Orient, scale: LinearScale) -> Self {
        Self {
            label: label.into(),
            orient,
            scale,
            tick_count: DEFAULT_TICK_COUNT,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
        }
    }

    pub fn bottom(label: impl Into<String>, scale: LinearScale) -> Self {
        Self::new(label, Orient::Bottom, scale)
    }

    pub fn left(label: impl Into<String>, scale: LinearScale) -> Self {
        Self::new(label, Orient::Left, scale)
    }

    /// Tick values with their formatted labels.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        let format = self.scale.tick_format(self.tick_count);
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|v| (v, format.format(v)))
            .collect()
    }

    /// Fill `group` with the axis: presentation attributes, the domain path and one
    /// `g.tick` per tick value. Attributes already on `group` are kept first.
    pub fn render(&self, group: Element) -> Element {
        let anchor = match self.orient {
            Orient::Bottom => "middle",
            Orient::Left => "end",
        };
        let mut g = group
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor);

        g.push(
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", "currentColor")
                .attr("d", self.domain_path()),
        );

        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        for (v, text) in self.tick_labels() {
            let pos = self.scale.apply(v) + CRISP_OFFSET;
            let tick = match self.orient {
                Orient::Bottom => Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", 1)
                    .attr("transform", format!("translate({},0)", fmt_coord(pos)))
                    .child(Element::new("line").attr("stroke", "currentColor").num("y2", self.tick_size_inner))
                    .child(
                        Element::new("text")
                            .attr("fill", "currentColor")
                            .num("y", spacing)
                            .attr("dy", "0.71em")
                            .text(text),
                    ),
                Orient::Left => Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", 1)
                    .attr("transform", format!("translate(0,{})", fmt_coord(pos)))
                    .child(Element::new("line").attr("stroke", "currentColor").num("x2", -self.tick_size_inner))
                    .child(
                        Element::new("text")
                            .attr("fill", "currentColor")
                            .num("x", -spacing)
                            .attr("dy", "0.32em")
                            .text(text),
                    ),
            };
            g.push(tick);
        }
        g
    }

    /// Outline along the scale's range with outer ticks at both ends.
    pub fn domain_path(&self) -> String {
        let [r0, r1] = self.scale.range;
        let r0 = fmt_coord(r0 + CRISP_OFFSET);
        let r1 = fmt_coord(r1 + CRISP_OFFSET);
        let off = fmt_coord(CRISP_OFFSET);
        match self.orient {
            Orient::Bottom => {
                let k = fmt_coord(self.tick_size_outer);
                format!("M{r0},{k}V{off}H{r1}V{k}")
            }
            Orient::Left => {
                let k = fmt_coord(-self.tick_size_outer);
                format!("M{k},{r0}H{off}V{r1}H{k}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_domain_path() {
        let axis = Axis::bottom("x", LinearScale::new([8.0, 24.0], [0.0, 1050.0]));
        assert_eq!(axis.domain_path(), "M0.5,6V0.5H1050.5V6");
    }

    #[test]
    fn left_domain_path() {
        let axis = Axis::left("y", LinearScale::new([0.0, 28.0], [560.0, 0.0]));
        assert_eq!(axis.domain_path(), "M-6,560.5H0.5V0.5H-6");
    }

    #[test]
    fn ticks_are_positioned_by_scale() {
        let axis = Axis::left("y", LinearScale::new([0.0, 28.0], [560.0, 0.0]));
        let g = axis.render(Element::new("g").attr("class", "axisColor"));
        assert_eq!(g.get_attr("class"), Some("axisColor"));
        assert_eq!(g.get_attr("text-anchor"), Some("end"));

        let ticks: Vec<_> = g.elements().filter(|e| e.has_class("tick")).collect();
        // step 2 over 0..28
        assert_eq!(ticks.len(), 15);
        assert_eq!(ticks[0].get_attr("transform"), Some("translate(0,560.5)"));
        assert_eq!(ticks[14].get_attr("transform"), Some("translate(0,0.5)"));
        let label = ticks[1].find_all("text")[0];
        assert_eq!(label.text_content(), "2");
        assert_eq!(label.get_attr("x"), Some("-9"));
    }

    #[test]
    fn nan_scale_renders_no_ticks() {
        let axis = Axis::bottom("x", LinearScale::new([f64::NAN, f64::NAN], [0.0, 100.0]));
        let g = axis.render(Element::new("g"));
        assert_eq!(g.elements().count(), 1, "only the domain path");
    }
}
