// File: crates/csv2chart-core/src/lib.rs
// Summary: Core library entry point; CSV table inference and heat chart construction.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod directive;
pub mod error;
pub mod grid;
pub mod heat;
pub mod loader;
pub mod matrix;
pub mod model;
pub mod paint_scale;

pub use chart::{HeatChart, PaintScaleLegend, PlotOrientation, XyzDataset};
pub use crate::color::Rgb;
pub use config::LoaderOptions;
pub use directive::{Directive, Overrides};
pub use error::{ConfigError, Error, Result};
pub use heat::{build_heat_chart, build_point_cloud, resolve_color_scale, resolve_header_counts, ColorScaleSettings, PointCloud};
pub use loader::{build_data_vector, build_model, classify_column, detect_header_row_count, parse_line, TableLoader};
pub use matrix::Matrix;
pub use model::{ColumnKind, DataModel, DataVector};
pub use paint_scale::{ColorScale, PaintScale};
