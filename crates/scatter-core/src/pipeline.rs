// File: crates/scatter-core/src/pipeline.rs
// Summary: Load → coerce → scale → draw, inserting the chart into a container or logging the failure.

use crate::chart::{RenderOptions, ScatterChart};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::load::load_records;
use crate::svg::Container;

/// Run the whole chart pipeline for `config`.
///
/// On success the chart's `<svg>` is appended to `container` and the chart is
/// returned. When the data cannot be loaded the error is logged once and
/// returned; `container` is left untouched, so nothing partial is ever drawn.
pub fn run(config: &ChartConfig, container: &mut Container) -> Result<ScatterChart> {
    let records = match load_records(&config.input, config.numeric) {
        Ok(records) => records,
        Err(err) => {
            tracing::error!(path = %config.input.display(), error = %err, "failed to load chart data");
            return Err(err);
        }
    };

    let chart = ScatterChart::new(records, config.layout);
    let degenerate = chart.points().iter().filter(|p| !p.center.is_finite()).count();
    if degenerate > 0 {
        tracing::debug!(count = degenerate, "points with non-numeric coordinates");
    }

    let opts: RenderOptions = config.render_options();
    chart.render_into(&opts, container);
    tracing::info!(
        points = chart.records.len(),
        x_domain = ?chart.x_scale().domain,
        y_domain = ?chart.y_scale().domain,
        "chart rendered"
    );
    Ok(chart)
}

/// Convenience: run against a fresh container for `config.selector`.
pub fn render(config: &ChartConfig) -> (Container, Result<ScatterChart>) {
    let mut container = Container::new(config.selector.clone());
    let result = run(config, &mut container);
    (container, result)
}
