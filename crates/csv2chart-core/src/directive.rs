// File: crates/csv2chart-core/src/directive.rs
// Summary: In-file `csv2chart.<name>=<value>` directives and the user overrides they produce.

use std::str::FromStr;

use crate::color::Rgb;
use crate::config::DIRECTIVE_MARKER;
use crate::error::ConfigError;
use crate::matrix::parse_number;

/// Every directive name the loader understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    Title,
    XAxisLabel,
    YAxisLabel,
    ZAxisLabel,
    HeaderRow,
    HeaderColumn,
    Strip,
    Legend,
    ColorScaleMinValue,
    ColorScaleMidValue,
    ColorScaleMaxValue,
    ColorScaleMinColor,
    ColorScaleMidColor,
    ColorScaleMaxColor,
    ColorScaleDefaultColor,
}

impl Directive {
    pub const ALL: [Directive; 15] = [
        Directive::Title,
        Directive::XAxisLabel,
        Directive::YAxisLabel,
        Directive::ZAxisLabel,
        Directive::HeaderRow,
        Directive::HeaderColumn,
        Directive::Strip,
        Directive::Legend,
        Directive::ColorScaleMinValue,
        Directive::ColorScaleMidValue,
        Directive::ColorScaleMaxValue,
        Directive::ColorScaleMinColor,
        Directive::ColorScaleMidColor,
        Directive::ColorScaleMaxColor,
        Directive::ColorScaleDefaultColor,
    ];

    /// Name as written in the CSV file.
    pub const fn name(self) -> &'static str {
        match self {
            Directive::Title => "title",
            Directive::XAxisLabel => "xAxisLabel",
            Directive::YAxisLabel => "yAxisLabel",
            Directive::ZAxisLabel => "zAxisLabel",
            Directive::HeaderRow => "headerRow",
            Directive::HeaderColumn => "headerColumn",
            Directive::Strip => "strip",
            Directive::Legend => "legend",
            Directive::ColorScaleMinValue => "colorScaleMinValue",
            Directive::ColorScaleMidValue => "colorScaleMidValue",
            Directive::ColorScaleMaxValue => "colorScaleMaxValue",
            Directive::ColorScaleMinColor => "colorScaleMinColor",
            Directive::ColorScaleMidColor => "colorScaleMidColor",
            Directive::ColorScaleMaxColor => "colorScaleMaxColor",
            Directive::ColorScaleDefaultColor => "colorScaleDefaultColor",
        }
    }
}

impl FromStr for Directive {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Directive::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ConfigError::UnknownDirective(s.to_string()))
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings supplied by the user through directives. Every field is optional;
/// unset fields are filled in later from the data or from fallback constants.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub title: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub z_axis_label: Option<String>,
    pub header_row: Option<bool>,
    pub header_column: Option<bool>,
    pub strip: Option<bool>,
    pub legend: Option<bool>,
    pub color_scale_min_value: Option<f64>,
    pub color_scale_mid_value: Option<f64>,
    pub color_scale_max_value: Option<f64>,
    pub color_scale_min_color: Option<Rgb>,
    pub color_scale_mid_color: Option<Rgb>,
    pub color_scale_max_color: Option<Rgb>,
    pub color_scale_default_color: Option<Rgb>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strip(&self) -> bool { self.strip.unwrap_or(false) }
    pub fn header_row(&self) -> bool { self.header_row.unwrap_or(false) }
    pub fn header_column(&self) -> bool { self.header_column.unwrap_or(false) }
    pub fn legend(&self) -> bool { self.legend.unwrap_or(true) }

    /// Apply `name=value`. Unknown names and malformed values are errors;
    /// a later assignment replaces an earlier one.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let directive: Directive = name.parse()?;
        self.apply(directive, value)
    }

    pub fn apply(&mut self, directive: Directive, value: &str) -> Result<(), ConfigError> {
        let text = || Some(value.to_string());
        match directive {
            Directive::Title => self.title = text(),
            Directive::XAxisLabel => self.x_axis_label = text(),
            Directive::YAxisLabel => self.y_axis_label = text(),
            Directive::ZAxisLabel => self.z_axis_label = text(),
            Directive::HeaderRow => self.header_row = Some(parse_bool(directive, value)?),
            Directive::HeaderColumn => self.header_column = Some(parse_bool(directive, value)?),
            Directive::Strip => self.strip = Some(parse_bool(directive, value)?),
            Directive::Legend => self.legend = Some(parse_bool(directive, value)?),
            Directive::ColorScaleMinValue => self.color_scale_min_value = Some(parse_f64(directive, value)?),
            Directive::ColorScaleMidValue => self.color_scale_mid_value = Some(parse_f64(directive, value)?),
            Directive::ColorScaleMaxValue => self.color_scale_max_value = Some(parse_f64(directive, value)?),
            Directive::ColorScaleMinColor => self.color_scale_min_color = Some(parse_rgb(directive, value)?),
            Directive::ColorScaleMidColor => self.color_scale_mid_color = Some(parse_rgb(directive, value)?),
            Directive::ColorScaleMaxColor => self.color_scale_max_color = Some(parse_rgb(directive, value)?),
            Directive::ColorScaleDefaultColor => {
                self.color_scale_default_color = Some(parse_rgb(directive, value)?)
            }
        }
        tracing::debug!(directive = directive.name(), value, "applied directive");
        Ok(())
    }
}

/// Extract `(name, value)` from a comment line, if it carries a directive.
/// A marker without a following `=` is not a directive.
pub fn split_directive(line: &str) -> Option<(&str, &str)> {
    let start = line.find(DIRECTIVE_MARKER)? + DIRECTIVE_MARKER.len();
    let rest = &line[start..];
    let eq = rest.find('=')?;
    Some((rest[..eq].trim(), rest[eq + 1..].trim()))
}

fn parse_bool(directive: Directive, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name: directive.name().to_string(), value: value.to_string() }),
    }
}

fn parse_f64(directive: Directive, value: &str) -> Result<f64, ConfigError> {
    parse_number(value)
        .ok_or_else(|| ConfigError::InvalidNumber { name: directive.name().to_string(), value: value.to_string() })
}

fn parse_rgb(directive: Directive, value: &str) -> Result<Rgb, ConfigError> {
    Rgb::parse(value)
        .ok_or_else(|| ConfigError::InvalidColor { name: directive.name().to_string(), value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for d in Directive::ALL {
            assert_eq!(d.name().parse::<Directive>(), Ok(d));
        }
        assert_eq!(
            "colorscaleminvalue".parse::<Directive>(),
            Err(ConfigError::UnknownDirective("colorscaleminvalue".into()))
        );
    }

    #[test]
    fn split_directive_trims_name_and_value() {
        assert_eq!(split_directive("# csv2chart.title = Hello = World "), Some(("title", "Hello = World")));
        assert_eq!(split_directive("#csv2chart.title"), None);
        assert_eq!(split_directive("# plain comment"), None);
    }

    #[test]
    fn typed_setters() {
        let mut o = Overrides::new();
        o.set("headerRow", "Yes").unwrap();
        o.set("colorScaleMaxValue", "-1.5e2").unwrap();
        o.set("colorScaleMidColor", "#ffffff").unwrap();
        assert_eq!(o.header_row, Some(true));
        assert_eq!(o.color_scale_max_value, Some(-150.0));
        assert_eq!(o.color_scale_mid_color, Some(Rgb::new(255, 255, 255)));

        assert!(matches!(o.set("strip", "maybe"), Err(ConfigError::InvalidBool { .. })));
        assert!(matches!(o.set("colorScaleMinValue", "low"), Err(ConfigError::InvalidNumber { .. })));
        assert!(matches!(o.set("colorScaleMinColor", "#zz"), Err(ConfigError::InvalidColor { .. })));
    }
}
