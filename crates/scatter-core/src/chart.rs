// File: crates/scatter-core/src/chart.rs
// Summary: ScatterChart model and SVG/HTML rendering: axes, points, labels, captions and hover tooltips.

use std::path::Path;

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::extent::Domains;
use crate::geometry::{fmt_coord, Point};
use crate::record::StateRecord;
use crate::scale::LinearScale;
use crate::svg::{Container, Element, SVG_NS};
use crate::theme::Theme;
use crate::tooltip::{Tooltip, TooltipOverlay};
use crate::types::Layout;

pub const X_CAPTION: &str = "Poverty(%)";
pub const Y_CAPTION: &str = "Healthcare (%)";

/// Label position relative to the circle centre.
pub const LABEL_OFFSET: (f64, f64) = (-6.0, 4.0);

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    pub point_radius: f64,
    pub label_font_size: f64,
    pub draw_labels: bool,
    pub tooltips: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::classic(),
            point_radius: 12.0,
            label_font_size: 10.0,
            draw_labels: true,
            tooltips: true,
        }
    }
}

/// Where one record lands in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlottedPoint {
    pub index: usize,
    pub center: Point,
    pub label: Point,
}

#[derive(Debug)]
pub struct ScatterChart {
    pub records: Vec<StateRecord>,
    pub layout: Layout,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl ScatterChart {
    /// Build scales from the full dataset: X over padded poverty, Y from zero
    /// over healthcare with the pixel range inverted.
    pub fn new(records: Vec<StateRecord>, layout: Layout) -> Self {
        let domains = Domains::from_records(&records);
        let width = layout.plot_width() as f64;
        let height = layout.plot_height() as f64;
        let x = LinearScale::new(domains.x, [0.0, width]);
        let y = LinearScale::new(domains.y, [height, 0.0]);
        Self {
            records,
            layout,
            x_axis: Axis::bottom(X_CAPTION, x),
            y_axis: Axis::left(Y_CAPTION, y),
        }
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_axis.scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_axis.scale
    }

    pub fn points(&self) -> Vec<PlottedPoint> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, r)| {
                let center = Point::new(self.x_scale().apply(r.poverty), self.y_scale().apply(r.healthcare));
                PlottedPoint { index, center, label: center.offset(LABEL_OFFSET.0, LABEL_OFFSET.1) }
            })
            .collect()
    }

    /// Hover overlay with one tooltip per point, none shown yet.
    pub fn tooltip_overlay(&self, opts: &RenderOptions) -> TooltipOverlay {
        let tips = self
            .points()
            .into_iter()
            .map(|p| Tooltip::for_record(&self.records[p.index], p.center, opts.point_radius))
            .collect();
        TooltipOverlay::new(tips)
    }

    /// The `<g>` translated by the margins that holds everything drawn.
    pub fn plot_group(&self, opts: &RenderOptions) -> Element {
        let layout = &self.layout;
        let width = layout.plot_width() as f64;
        let height = layout.plot_height() as f64;
        let theme = &opts.theme;

        let mut g = Element::new("g").attr(
            "transform",
            format!("translate({}, {})", layout.margin.left, layout.margin.top),
        );

        g.push(self.x_axis.render(
            Element::new("g")
                .attr("transform", format!("translate(0, {})", fmt_coord(height)))
                .attr("class", "axisColor"),
        ));
        g.push(self.y_axis.render(Element::new("g").attr("class", "axisColor")));

        let overlay = self.tooltip_overlay(opts);
        let points = self.points();
        for p in &points {
            let rec = &self.records[p.index];
            let mut circle = Element::new("circle")
                .attr("id", point_id(p.index))
                .num("cx", p.center.x)
                .num("cy", p.center.y)
                .num("r", opts.point_radius)
                .attr("style", format!("fill: {}; stroke: {};", theme.point_fill, theme.point_stroke))
                .num("opacity", theme.point_opacity);
            if opts.tooltips {
                circle.push(Element::new("title").text(overlay.tips()[p.index].summary()));
            }
            g.push(circle);

            if opts.draw_labels {
                g.push(
                    Element::new("text")
                        .attr("class", "circleText")
                        .num("x", p.label.x)
                        .num("y", p.label.y)
                        .num("font-size", opts.label_font_size)
                        .text(rec.abbr.clone()),
                );
            }
        }

        let caption_style = format!("stroke: {};", theme.caption);
        g.push(
            Element::new("text")
                .attr("transform", "rotate(-90)")
                .num("y", 40.0 - layout.margin.left as f64)
                .num("x", -(height / 2.0))
                .attr("dy", "1em")
                .attr("class", "axisText")
                .attr("style", caption_style.as_str())
                .text(self.y_axis.label.clone()),
        );
        g.push(
            Element::new("text")
                .attr(
                    "transform",
                    format!(
                        "translate({}, {})",
                        fmt_coord(width / 2.0),
                        fmt_coord(height + layout.margin.top as f64 - 5.0)
                    ),
                )
                .attr("class", "axisText")
                .attr("style", caption_style.as_str())
                .text(self.x_axis.label.clone()),
        );

        // Tooltips go last so they paint above every point; each one is toggled
        // by its circle's pointer events.
        if opts.tooltips {
            for (i, tip) in overlay.tips().iter().enumerate() {
                let id = point_id(i);
                g.push(
                    tip.to_element()
                        .attr("visibility", "hidden")
                        .child(
                            Element::new("set")
                                .attr("attributeName", "visibility")
                                .attr("to", "visible")
                                .attr("begin", format!("{id}.mouseover"))
                                .attr("end", format!("{id}.mouseout")),
                        ),
                );
            }
        }
        g
    }

    /// The complete `<svg>` element.
    pub fn to_svg(&self, opts: &RenderOptions) -> Element {
        Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("height", self.layout.height)
            .attr("width", self.layout.width)
            .child(Element::new("style").text(opts.theme.stylesheet()))
            .child(self.plot_group(opts))
    }

    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> String {
        self.to_svg(opts).to_string()
    }

    /// Write a standalone SVG document to `output_svg_path`.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let body = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n",
            self.render_to_svg_string(opts)
        );
        write_output(output_svg_path.as_ref(), body.as_bytes())
    }

    /// Insert the chart's `<svg>` under `container`.
    pub fn render_into(&self, opts: &RenderOptions, container: &mut Container) {
        container.append(self.to_svg(opts));
    }

    /// A minimal page with the chart inside the container element.
    pub fn render_to_html(&self, opts: &RenderOptions, selector: &str) -> String {
        let mut container = Container::new(selector);
        self.render_into(opts, &mut container);
        page(&container)
    }
}

fn point_id(index: usize) -> String {
    format!("point-{index}")
}

/// Wrap a container in an HTML page.
pub fn page(container: &Container) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = "Healthcare vs. Poverty",
        body = container.to_element(),
    )
}

/// Write `bytes` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
        }
    }
    std::fs::write(path, bytes).map_err(|e| ChartError::io(path, e))
}
