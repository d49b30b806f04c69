// File: crates/csv2chart-core/src/chart.rs
// Summary: Renderer-agnostic heat chart description (XYZ dataset, block plot, scale legend).

use crate::axis::NumberAxis;
use crate::color::Rgb;
use crate::config::Insets;
use crate::paint_scale::{ColorScale, PaintScale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotOrientation {
    /// Domain axis horizontal.
    Vertical,
    /// Domain axis vertical.
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectangleEdge {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisLocation {
    BottomOrLeft,
    TopOrRight,
}

/// Columnar (x, y, z) triples of one series.
/// Contract: `xs`, `ys` and `zs` have equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XyzDataset {
    pub series_key: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
}

impl XyzDataset {
    pub fn len(&self) -> usize { self.zs.len() }
    pub fn is_empty(&self) -> bool { self.zs.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .zip(&self.zs)
            .map(|((&x, &y), &z)| (x, y, z))
    }
}

/// Draws each point as a `block_width` x `block_height` cell centered on (x, y).
#[derive(Clone, Debug, PartialEq)]
pub struct BlockRenderer {
    pub block_width: f64,
    pub block_height: f64,
    pub paint_scale: ColorScale,
}

impl BlockRenderer {
    pub fn new(paint_scale: ColorScale) -> Self {
        Self { block_width: 1.0, block_height: 1.0, paint_scale }
    }

    /// Fill color of a dataset point.
    pub fn fill(&self, z: f64) -> Rgb {
        self.paint_scale.paint(z)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct XyPlot {
    pub dataset: XyzDataset,
    /// Axis of the x values (row headers).
    pub domain_axis: NumberAxis,
    /// Axis of the y values (column headers).
    pub range_axis: NumberAxis,
    pub renderer: BlockRenderer,
    pub orientation: PlotOrientation,
}

/// Color strip with its own value axis, placed beside the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintScaleLegend {
    pub scale: ColorScale,
    pub axis: NumberAxis,
    pub axis_location: AxisLocation,
    pub axis_offset: f64,
    pub margin: Insets,
    pub padding: Insets,
    pub strip_width: f64,
    pub position: RectangleEdge,
}

impl PaintScaleLegend {
    /// `steps` (value, color) pairs along the strip.
    pub fn strip(&self, steps: usize) -> Vec<(f64, Rgb)> {
        self.scale.samples(steps)
    }
}

/// Fully configured heat chart, ready for an image encoder.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatChart {
    pub title: Option<String>,
    pub header_rows: usize,
    pub header_columns: usize,
    /// Smallest and largest z of the data, before any scale overrides.
    pub z_extent: (f64, f64),
    pub plot: XyPlot,
    pub legend: Option<PaintScaleLegend>,
}

impl HeatChart {
    pub fn scale(&self) -> &ColorScale { &self.plot.renderer.paint_scale }

    /// The axis drawn vertically, given the plot orientation.
    pub fn vertical_axis(&self) -> &NumberAxis {
        match self.plot.orientation {
            PlotOrientation::Horizontal => &self.plot.domain_axis,
            PlotOrientation::Vertical => &self.plot.range_axis,
        }
    }

    pub fn horizontal_axis(&self) -> &NumberAxis {
        match self.plot.orientation {
            PlotOrientation::Horizontal => &self.plot.range_axis,
            PlotOrientation::Vertical => &self.plot.domain_axis,
        }
    }

    /// Every dataset point with its fill color, in dataset order.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, Rgb)> + '_ {
        self.plot
            .dataset
            .iter()
            .map(|(x, y, z)| (x, y, self.plot.renderer.fill(z)))
    }
}
