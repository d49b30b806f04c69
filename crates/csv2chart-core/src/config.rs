// File: crates/csv2chart-core/src/config.rs
// Summary: Shared constants (delimiters, directive marker, fallback colors, legend geometry).

use crate::color::Rgb;

/// Default field separator.
pub const DEFAULT_SEPARATOR: u8 = b',';
/// Default comment line prefix.
pub const DEFAULT_COMMENT: &str = "#";
/// Marker that introduces a directive inside a comment line.
pub const DIRECTIVE_MARKER: &str = "csv2chart.";

/// Fallback color of the low end of the scale (cool blue).
pub const PASTEL_BLUE: Rgb = Rgb::from_hex(0x2166ac);
/// Fallback color of the scale midpoint (pale yellow).
pub const PASTEL_YELLOW: Rgb = Rgb::from_hex(0xffffbf);
/// Fallback color of the high end of the scale (warm red).
pub const PASTEL_RED: Rgb = Rgb::from_hex(0xb2182b);
/// Fallback color for values outside the scale domain.
pub const LIGHT_GRAY: Rgb = Rgb::new(192, 192, 192);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Legend strip width in pixels.
pub const LEGEND_STRIP_WIDTH: f64 = 10.0;
/// Gap between the legend strip and its axis.
pub const LEGEND_AXIS_OFFSET: f64 = 5.0;
pub const LEGEND_TICK_FONT: &str = "Dialog";
pub const LEGEND_TICK_FONT_SIZE: f32 = 7.0;
/// Number of tick values exposed on the legend axis.
pub const LEGEND_TICK_COUNT: usize = 6;

/// Edge insets, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

/// Outer margin around the legend.
pub const LEGEND_MARGIN: Insets = Insets::uniform(5);
/// Inner padding of the legend.
pub const LEGEND_PADDING: Insets = Insets::uniform(10);

/// How a CSV file is split into rows and fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderOptions {
    pub separator: u8,
    pub comment: String,
}

impl LoaderOptions {
    pub fn new(separator: u8, comment: impl Into<String>) -> Self {
        Self { separator, comment: comment.into() }
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR, DEFAULT_COMMENT)
    }
}
