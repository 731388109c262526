// File: crates/scatter-cli/src/main.rs
// Summary: Loads the state CSV and writes the poverty vs. healthcare scatter chart as SVG (plus optional HTML/PNG).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use scatter_core::chart::{page, write_output};
use scatter_core::{pipeline, ChartConfig, NumericPolicy, RenderOptions, ScatterChart};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the poverty vs. healthcare scatter chart", long_about = None)]
struct Cli {
    /// CSV with state, abbr, poverty and healthcare columns [default: assets/data/data.csv]
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output SVG path (defaults to target/out/scatter_<input stem>.svg)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Also write an HTML page embedding the chart
    #[arg(long, value_hint = ValueHint::FilePath)]
    html: Option<PathBuf>,

    /// Also write a PNG rendering
    #[cfg(feature = "png")]
    #[arg(long, value_hint = ValueHint::FilePath)]
    png: Option<PathBuf>,

    /// TOML config file; flags override its values
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Reject non-numeric measurements instead of plotting them at NaN
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Colour preset (classic, dark)
    #[arg(long)]
    theme: Option<String>,

    /// Id selector of the HTML container element
    #[arg(long)]
    selector: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = build_config(&cli)?;
    tracing::debug!(?config, "effective configuration");

    // Load failures are already logged by the pipeline; nothing is written.
    let (container, chart) = pipeline::render(&config);
    let Ok(chart) = chart else {
        return Ok(ExitCode::FAILURE);
    };
    let opts = config.render_options();

    let out_svg = cli.output.clone().unwrap_or_else(|| default_output(&config.input));
    chart
        .render_to_svg(&opts, &out_svg)
        .with_context(|| format!("writing {}", out_svg.display()))?;
    tracing::info!(path = %out_svg.display(), "wrote SVG");

    if let Some(out_html) = &cli.html {
        write_output(out_html, page(&container).as_bytes())
            .with_context(|| format!("writing {}", out_html.display()))?;
        tracing::info!(path = %out_html.display(), "wrote HTML");
    }

    write_png(&cli, &chart, &opts)?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "png")]
fn write_png(cli: &Cli, chart: &ScatterChart, opts: &RenderOptions) -> Result<()> {
    if let Some(out_png) = &cli.png {
        chart
            .render_to_png(opts, out_png)
            .with_context(|| format!("writing {}", out_png.display()))?;
        tracing::info!(path = %out_png.display(), "wrote PNG");
    }
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_cli: &Cli, _chart: &ScatterChart, _opts: &RenderOptions) -> Result<()> {
    Ok(())
}

/// Defaults, then the config file, then command-line flags.
fn build_config(cli: &Cli) -> Result<ChartConfig> {
    let mut config = match &cli.config {
        Some(path) => ChartConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if cli.strict {
        config.numeric = NumericPolicy::Strict;
    }
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if let Some(selector) = &cli.selector {
        config.selector = selector.clone();
    }
    Ok(config)
}

/// Produce output file name like target/out/scatter_<stem>.svg
fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("scatter_{stem}.svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_defaults() {
        let cli = Cli::parse_from(["povscatter", "states.csv", "--strict", "--theme", "dark"]);
        let cfg = build_config(&cli).unwrap();
        assert_eq!(cfg.input, PathBuf::from("states.csv"));
        assert_eq!(cfg.numeric, NumericPolicy::Strict);
        assert_eq!(cfg.theme, "dark");
        assert_eq!(cfg.selector, "#scatter");
    }

    #[test]
    fn default_output_uses_input_stem() {
        assert_eq!(default_output(Path::new("assets/data/data.csv")), PathBuf::from("target/out/scatter_data.svg"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
