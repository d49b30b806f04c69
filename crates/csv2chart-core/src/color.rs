// File: crates/csv2chart-core/src/color.rs
// Summary: Opaque RGB color with per-channel interpolation and directive parsing.

use ::color::{parse_color, Srgb};

/// 8-bit opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Linear blend towards `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Parse a CSS color name or hex literal (`#rgb`, `#rrggbb`, `0xrrggbb`).
    /// Returns `None` for anything else, including translucent colors.
    pub fn parse(text: &str) -> Option<Rgb> {
        let text = text.trim();
        let normalized = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(hex) => format!("#{hex}"),
            None => text.to_string(),
        };
        let parsed = parse_color(&normalized).ok()?;
        let rgba = parsed.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a != u8::MAX {
            return None;
        }
        Some(Rgb::new(rgba.r, rgba.g, rgba.b))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(Rgb::parse("#2166ac"), Some(Rgb::from_hex(0x2166ac)));
        assert_eq!(Rgb::parse("0xb2182b"), Some(Rgb::from_hex(0xb2182b)));
        assert_eq!(Rgb::parse("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse("red"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::parse("not-a-color"), None);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(100, 200, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(50, 150, 100));
        assert_eq!(a.lerp(b, 7.0), b);
    }
}
