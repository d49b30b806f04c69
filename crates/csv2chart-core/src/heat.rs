// File: crates/csv2chart-core/src/heat.rs
// Summary: Heat chart construction: header resolution, XYZ point cloud, color scale and legend.

use std::path::Path;

use crate::axis::{FontSpec, NumberAxis};
use crate::chart::{
    AxisLocation, BlockRenderer, HeatChart, PaintScaleLegend, PlotOrientation, RectangleEdge, XyPlot, XyzDataset,
};
use crate::color::Rgb;
use crate::config::{
    LoaderOptions, LEGEND_AXIS_OFFSET, LEGEND_MARGIN, LEGEND_PADDING, LEGEND_STRIP_WIDTH, LEGEND_TICK_FONT,
    LEGEND_TICK_FONT_SIZE, LIGHT_GRAY, PASTEL_BLUE, PASTEL_RED, PASTEL_YELLOW, WHITE,
};
use crate::directive::Overrides;
use crate::error::{Error, Result};
use crate::grid::extent;
use crate::loader::{detect_header_row_count, TableLoader};
use crate::matrix::{clean, parse_number, Matrix};
use crate::paint_scale::{ColorScale, ThreeColorPaintScale, TwoColorPaintScale};

/// (header rows, header columns) for the heat map.
/// A detected header row count wins; otherwise the `headerRow` flag decides.
pub fn resolve_header_counts(matrix: &Matrix, overrides: &Overrides) -> (usize, usize) {
    let header_columns = usize::from(overrides.header_column());
    let detected = detect_header_row_count(matrix, overrides.strip());
    let header_rows = if detected != 0 { detected } else { usize::from(overrides.header_row()) };
    (header_rows, header_columns)
}

/// One point per data cell, row-major, plus the z extent and the header
/// counts the data region was cut with.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    pub header_rows: usize,
    pub header_columns: usize,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
    pub min_z: f64,
    pub max_z: f64,
}

impl PointCloud {
    pub fn len(&self) -> usize { self.zs.len() }
    pub fn is_empty(&self) -> bool { self.zs.is_empty() }
}

fn number_at(matrix: &Matrix, x: usize, y: usize, strip: bool) -> Result<f64> {
    let raw = matrix.get(x, y).ok_or(Error::MissingCell { column: x, row: y })?;
    let value = clean(raw, strip);
    parse_number(value).ok_or_else(|| Error::InvalidValue { column: x, row: y, value: value.to_string() })
}

/// Map the data region (rows >= `header_rows`, columns >= `header_columns`)
/// to (row header, column header, value) points. Absent headers become
/// 0-based indices.
pub fn build_point_cloud(matrix: &Matrix, header_rows: usize, header_columns: usize, strip: bool) -> Result<PointCloud> {
    let width = matrix.width();
    let height = matrix.height();
    let data_columns = width.saturating_sub(header_columns);
    let data_rows = height.saturating_sub(header_rows);
    if data_columns == 0 || data_rows == 0 {
        return Err(Error::EmptyData);
    }

    let column_headers = if header_rows > 0 {
        (header_columns..width).map(|x| number_at(matrix, x, 0, strip)).collect::<Result<Vec<_>>>()?
    } else {
        (0..data_columns).map(|i| i as f64).collect()
    };
    let row_headers = if header_columns > 0 {
        (header_rows..height).map(|y| number_at(matrix, 0, y, strip)).collect::<Result<Vec<_>>>()?
    } else {
        (0..data_rows).map(|i| i as f64).collect()
    };

    let n = data_rows * data_columns;
    let mut cloud = PointCloud {
        header_rows,
        header_columns,
        xs: Vec::with_capacity(n),
        ys: Vec::with_capacity(n),
        zs: Vec::with_capacity(n),
        min_z: f64::INFINITY,
        max_z: f64::NEG_INFINITY,
    };
    for (row, &x) in row_headers.iter().enumerate() {
        for (column, &y) in column_headers.iter().enumerate() {
            let z = number_at(matrix, column + header_columns, row + header_rows, strip)?;
            cloud.xs.push(x);
            cloud.ys.push(y);
            cloud.zs.push(z);
            cloud.min_z = cloud.min_z.min(z);
            cloud.max_z = cloud.max_z.max(z);
        }
    }
    tracing::debug!(points = cloud.len(), min_z = cloud.min_z, max_z = cloud.max_z, "built point cloud");
    Ok(cloud)
}

/// Color scale configuration after merging user overrides with data-derived
/// defaults and fallback colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScaleSettings {
    pub min_value: f64,
    pub mid_value: f64,
    pub max_value: f64,
    pub min_color: Rgb,
    pub mid_color: Rgb,
    pub max_color: Rgb,
    pub default_color: Rgb,
}

impl ColorScaleSettings {
    pub fn resolve(overrides: &Overrides, min_z: f64, max_z: f64) -> Self {
        let min_value = overrides.color_scale_min_value.unwrap_or(min_z);
        let max_value = overrides.color_scale_max_value.unwrap_or(max_z);
        let mid_value = overrides.color_scale_mid_value.unwrap_or_else(|| {
            if overrides.color_scale_mid_color.is_some() && min_value >= 0.0 {
                (max_value - min_value) / 2.0 + min_value
            } else {
                0.0
            }
        });
        Self {
            min_value,
            mid_value,
            max_value,
            min_color: overrides.color_scale_min_color.unwrap_or(PASTEL_BLUE),
            mid_color: overrides.color_scale_mid_color.unwrap_or(PASTEL_YELLOW),
            max_color: overrides.color_scale_max_color.unwrap_or(PASTEL_RED),
            default_color: overrides.color_scale_default_color.unwrap_or(LIGHT_GRAY),
        }
    }

    /// Pick the scale shape:
    /// `min < mid < max` gives three stops; `min < mid` alone gives two stops
    /// from the mid color to the min color; anything else gives two stops
    /// from the mid color to the max color.
    pub fn paint_scale(&self) -> ColorScale {
        let s = self;
        if s.min_value < s.mid_value && s.mid_value < s.max_value {
            ColorScale::ThreeStop(ThreeColorPaintScale {
                min: s.min_value,
                mid: s.mid_value,
                max: s.max_value,
                min_color: s.min_color,
                mid_color: s.mid_color,
                max_color: s.max_color,
                default_color: s.default_color,
            })
        } else if s.min_value < s.mid_value {
            // mid >= max: the min color ends up at the top of the range.
            ColorScale::TwoStop(TwoColorPaintScale::new(
                s.min_value,
                s.max_value,
                s.mid_color,
                s.min_color,
                s.default_color,
            ))
        } else {
            ColorScale::TwoStop(TwoColorPaintScale::new(
                s.min_value,
                s.max_value,
                s.mid_color,
                s.max_color,
                s.default_color,
            ))
        }
    }
}

pub fn resolve_color_scale(overrides: &Overrides, min_z: f64, max_z: f64) -> (ColorScaleSettings, ColorScale) {
    let settings = ColorScaleSettings::resolve(overrides, min_z, max_z);
    (settings, settings.paint_scale())
}

fn scale_legend(scale: ColorScale, settings: &ColorScaleSettings, label: Option<String>) -> PaintScaleLegend {
    let mut axis = NumberAxis::new(label, settings.min_value, settings.max_value);
    axis.axis_line_color = Some(WHITE);
    axis.tick_mark_color = Some(WHITE);
    axis.tick_label_font = Some(FontSpec { family: LEGEND_TICK_FONT.to_string(), size: LEGEND_TICK_FONT_SIZE });

    PaintScaleLegend {
        scale,
        axis,
        axis_location: AxisLocation::BottomOrLeft,
        axis_offset: LEGEND_AXIS_OFFSET,
        margin: LEGEND_MARGIN,
        padding: LEGEND_PADDING,
        strip_width: LEGEND_STRIP_WIDTH,
        position: RectangleEdge::Right,
    }
}

/// Put the point cloud, scale and labels together. The row axis is drawn
/// vertically; the legend sits on the right unless disabled.
pub fn assemble_chart(
    cloud: PointCloud,
    scale: ColorScale,
    settings: &ColorScaleSettings,
    overrides: &Overrides,
) -> HeatChart {
    let renderer = BlockRenderer::new(scale);
    let (x_lo, x_hi) = extent(&cloud.xs).unwrap_or((0.0, 0.0));
    let (y_lo, y_hi) = extent(&cloud.ys).unwrap_or((0.0, 0.0));
    let domain_axis = NumberAxis::padded(overrides.y_axis_label.clone(), x_lo, x_hi, renderer.block_height / 2.0);
    let range_axis = NumberAxis::padded(overrides.x_axis_label.clone(), y_lo, y_hi, renderer.block_width / 2.0);

    let legend = overrides.legend().then(|| scale_legend(scale, settings, overrides.z_axis_label.clone()));

    HeatChart {
        title: overrides.title.clone(),
        header_rows: cloud.header_rows,
        header_columns: cloud.header_columns,
        z_extent: (cloud.min_z, cloud.max_z),
        plot: XyPlot {
            dataset: XyzDataset { series_key: "series".to_string(), xs: cloud.xs, ys: cloud.ys, zs: cloud.zs },
            domain_axis,
            range_axis,
            renderer,
            orientation: PlotOrientation::Horizontal,
        },
        legend,
    }
}

/// Build a heat chart straight from the raw matrix.
pub fn build_heat_chart(matrix: &Matrix, overrides: &Overrides) -> Result<HeatChart> {
    let (header_rows, header_columns) = resolve_header_counts(matrix, overrides);
    let cloud = build_point_cloud(matrix, header_rows, header_columns, overrides.strip())?;
    let (settings, scale) = resolve_color_scale(overrides, cloud.min_z, cloud.max_z);
    tracing::info!(
        header_rows,
        header_columns,
        points = cloud.len(),
        scale = scale.shape_name(),
        "built heat chart"
    );
    Ok(assemble_chart(cloud, scale, &settings, overrides))
}

impl HeatChart {
    /// Load `path` and build its heat chart.
    pub fn from_path(path: impl AsRef<Path>, options: &LoaderOptions) -> Result<HeatChart> {
        let (matrix, overrides) = TableLoader::new(options.clone()).load_matrix(path)?;
        build_heat_chart(&matrix, &overrides)
    }
}
