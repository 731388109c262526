// File: crates/scatter-core/src/error.rs
// Summary: Library error type shared by loading, configuration and rendering.

use std::path::PathBuf;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Only produced under `NumericPolicy::Strict`.
    #[error("row {row}: column `{column}` is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("encode failed: {0}")]
    Encode(String),
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }

    /// True for failures that happen while fetching or parsing the dataset.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Csv { .. } | Self::InvalidNumber { .. })
    }
}
