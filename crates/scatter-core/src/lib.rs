// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the API for loading state records and rendering the scatter chart.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod extent;
pub mod geometry;
pub mod load;
pub mod pipeline;
pub mod record;
pub mod scale;
pub mod svg;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod tooltip;
pub mod types;
#[cfg(feature = "png")]
pub mod raster;

pub use axis::{Axis, Orient};
pub use chart::{PlottedPoint, RenderOptions, ScatterChart};
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use extent::Domains;
pub use load::{load_records, read_records};
pub use record::{coerce_number, NumericPolicy, StateRecord};
pub use scale::LinearScale;
pub use svg::{Container, Element};
pub use theme::Theme;
pub use tooltip::{PointerEvent, Tooltip, TooltipOverlay};
pub use types::{Insets, Layout};
