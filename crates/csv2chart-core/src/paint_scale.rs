// File: crates/csv2chart-core/src/paint_scale.rs
// Summary: Value -> color transforms (two- and three-stop linear paint scales).

use crate::color::Rgb;
use crate::grid::linspace;

/// Maps a z value to a fill color.
pub trait PaintScale {
    fn lower_bound(&self) -> f64;
    fn upper_bound(&self) -> f64;
    /// Color for `value`; values outside the bounds get the default color.
    fn paint(&self, value: f64) -> Rgb;

    /// `steps` evenly spaced (value, color) samples across the domain,
    /// e.g. for drawing a legend strip.
    fn samples(&self, steps: usize) -> Vec<(f64, Rgb)> {
        linspace(self.lower_bound(), self.upper_bound(), steps)
            .into_iter()
            .map(|v| (v, self.paint(v)))
            .collect()
    }
}

/// Position of `value` within [lo, hi] as 0..=1; a zero-width range maps to 0.
#[inline]
fn fraction(value: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span == 0.0 { 0.0 } else { (value - lo) / span }
}

#[inline]
fn outside(value: f64, lo: f64, hi: f64) -> bool {
    value.is_nan() || value < lo || value > hi
}

/// Linear blend from `low_color` at `lower` to `high_color` at `upper`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoColorPaintScale {
    pub lower: f64,
    pub upper: f64,
    pub low_color: Rgb,
    pub high_color: Rgb,
    pub default_color: Rgb,
}

impl TwoColorPaintScale {
    pub fn new(lower: f64, upper: f64, low_color: Rgb, high_color: Rgb, default_color: Rgb) -> Self {
        Self { lower, upper, low_color, high_color, default_color }
    }
}

impl PaintScale for TwoColorPaintScale {
    fn lower_bound(&self) -> f64 { self.lower }
    fn upper_bound(&self) -> f64 { self.upper }

    fn paint(&self, value: f64) -> Rgb {
        if outside(value, self.lower, self.upper) {
            return self.default_color;
        }
        self.low_color.lerp(self.high_color, fraction(value, self.lower, self.upper))
    }
}

/// Piecewise blend: `min_color` -> `mid_color` on [min, mid],
/// `mid_color` -> `max_color` on [mid, max].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreeColorPaintScale {
    pub min: f64,
    pub mid: f64,
    pub max: f64,
    pub min_color: Rgb,
    pub mid_color: Rgb,
    pub max_color: Rgb,
    pub default_color: Rgb,
}

impl PaintScale for ThreeColorPaintScale {
    fn lower_bound(&self) -> f64 { self.min }
    fn upper_bound(&self) -> f64 { self.max }

    fn paint(&self, value: f64) -> Rgb {
        if outside(value, self.min, self.max) {
            return self.default_color;
        }
        if value <= self.mid {
            self.min_color.lerp(self.mid_color, fraction(value, self.min, self.mid))
        } else {
            self.mid_color.lerp(self.max_color, fraction(value, self.mid, self.max))
        }
    }
}

/// The scale shapes a heat chart can use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorScale {
    ThreeStop(ThreeColorPaintScale),
    TwoStop(TwoColorPaintScale),
}

impl ColorScale {
    pub fn shape_name(&self) -> &'static str {
        match self {
            ColorScale::ThreeStop(_) => "three-stop",
            ColorScale::TwoStop(_) => "two-stop",
        }
    }
}

impl PaintScale for ColorScale {
    fn lower_bound(&self) -> f64 {
        match self {
            ColorScale::ThreeStop(s) => s.lower_bound(),
            ColorScale::TwoStop(s) => s.lower_bound(),
        }
    }

    fn upper_bound(&self) -> f64 {
        match self {
            ColorScale::ThreeStop(s) => s.upper_bound(),
            ColorScale::TwoStop(s) => s.upper_bound(),
        }
    }

    fn paint(&self, value: f64) -> Rgb {
        match self {
            ColorScale::ThreeStop(s) => s.paint(value),
            ColorScale::TwoStop(s) => s.paint(value),
        }
    }
}
