// File: crates/scatter-core/src/config.rs
// Summary: File-backed chart configuration (TOML) with defaults matching the published chart.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::RenderOptions;
use crate::error::{ChartError, Result};
use crate::load::DEFAULT_DATA_PATH;
use crate::record::NumericPolicy;
use crate::theme;
use crate::types::Layout;

/// Selector of the page element the chart is inserted into.
pub const DEFAULT_SELECTOR: &str = "#scatter";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub input: PathBuf,
    pub selector: String,
    pub layout: Layout,
    pub theme: String,
    pub numeric: NumericPolicy,
    pub point_radius: f64,
    pub label_font_size: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DATA_PATH),
            selector: DEFAULT_SELECTOR.to_string(),
            layout: Layout::default(),
            theme: "classic".to_string(),
            numeric: NumericPolicy::Lenient,
            point_radius: 12.0,
            label_font_size: 10.0,
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| ChartError::Config { path: origin.to_path_buf(), source })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        let cfg = Self::from_toml_str(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded chart config");
        Ok(cfg)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            theme: theme::find(&self.theme),
            point_radius: self.point_radius,
            label_font_size: self.label_font_size,
            ..RenderOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = ChartConfig::from_toml_str("", Path::new("chart.toml")).unwrap();
        assert_eq!(cfg, ChartConfig::default());
        assert_eq!(cfg.input, PathBuf::from("assets/data/data.csv"));
    }

    #[test]
    fn partial_tables_merge_with_defaults() {
        let text = r#"
            theme = "dark"
            numeric = "strict"

            [layout]
            width = 800

            [layout.margin]
            left = 60
        "#;
        let cfg = ChartConfig::from_toml_str(text, Path::new("chart.toml")).unwrap();
        assert_eq!(cfg.numeric, NumericPolicy::Strict);
        assert_eq!(cfg.layout.width, 800);
        assert_eq!(cfg.layout.height, 660);
        assert_eq!(cfg.layout.margin.left, 60);
        assert_eq!(cfg.layout.margin.right, 50);
        assert_eq!(cfg.render_options().theme.name, "dark");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ChartConfig::from_toml_str("colour = 1", Path::new("chart.toml")).unwrap_err();
        assert!(matches!(err, ChartError::Config { .. }));
    }

    #[test]
    fn margins_wider_than_canvas_leave_empty_plot() {
        let text = "[layout.margin]\nleft = 4294967295\nright = 1\n";
        let cfg = ChartConfig::from_toml_str(text, Path::new("chart.toml")).unwrap();
        assert_eq!(cfg.layout.plot_width(), 0);
        assert_eq!(cfg.layout.plot_height(), 560);
    }
}
