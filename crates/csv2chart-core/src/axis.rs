// File: crates/csv2chart-core/src/axis.rs
// Summary: Numeric axis model with label, range and tick styling.

use crate::color::Rgb;
use crate::grid::linspace;

/// Font used for tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberAxis {
    pub label: Option<String>,
    pub min: f64,
    pub max: f64,
    /// Whether an automatic range is widened to include zero.
    pub auto_range_includes_zero: bool,
    /// `None` leaves the renderer's default.
    pub axis_line_color: Option<Rgb>,
    pub tick_mark_color: Option<Rgb>,
    pub tick_label_font: Option<FontSpec>,
}

impl NumberAxis {
    pub fn new(label: Option<String>, min: f64, max: f64) -> Self {
        Self {
            label,
            min,
            max,
            auto_range_includes_zero: true,
            axis_line_color: None,
            tick_mark_color: None,
            tick_label_font: None,
        }
    }

    /// Axis spanning `lo..=hi` widened by `pad` on both ends.
    pub fn padded(label: Option<String>, lo: f64, hi: f64, pad: f64) -> Self {
        let mut axis = Self::new(label, lo - pad, hi + pad);
        axis.auto_range_includes_zero = false;
        axis
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// `count` evenly spaced tick values across the range.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linspace(self.min, self.max, count)
    }
}
