// File: crates/csv2chart-core/src/matrix.rs
// Summary: Sparse string matrix addressed by (column, row) plus the numeric cell policy.

use std::collections::HashMap;

/// Sparse 2D table of cell strings.
/// Width/height are the largest populated index + 1 on each axis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matrix {
    cells: HashMap<(usize, usize), String>,
    width: usize,
    height: usize,
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dense matrix from rows of cells; handy for tests and callers
    /// that already split their input.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut m = Self::new();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, cell) in row.into_iter().enumerate() {
                m.set(x, y, cell);
            }
        }
        m
    }

    pub fn set(&mut self, x: usize, y: usize, value: impl Into<String>) {
        self.cells.insert((x, y), value.into());
        self.width = self.width.max(x + 1);
        self.height = self.height.max(y + 1);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&str> {
        self.cells.get(&(x, y)).map(String::as_str)
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    /// True if any cell of the `width` x `height` block at (`x`, `y`) is numeric.
    pub fn contains_numbers(&self, x: usize, y: usize, width: usize, height: usize, strip: bool) -> bool {
        (y..y + height).any(|iy| {
            (x..x + width).any(|ix| self.get(ix, iy).is_some_and(|v| is_number(v, strip)))
        })
    }
}

/// Remove one layer of surrounding double quotes, if present.
pub fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Apply [`strip_quotes`] only when `strip` is enabled.
pub fn clean(value: &str, strip: bool) -> &str {
    if strip { strip_quotes(value) } else { value }
}

/// Parse a plain decimal literal: optional sign, digits, optional fraction,
/// optional exponent. Rejects `inf`, `NaN` and hex forms.
pub fn parse_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    let sign = |i: &mut usize| {
        if matches!(bytes.get(*i).copied(), Some(b'+' | b'-')) { *i += 1; }
    };
    let digits = |i: &mut usize| -> usize {
        let start = *i;
        while bytes.get(*i).is_some_and(u8::is_ascii_digit) { *i += 1; }
        *i - start
    };

    sign(&mut i);
    let mut mantissa = digits(&mut i);
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        mantissa += digits(&mut i);
    }
    if mantissa == 0 {
        return None;
    }
    if matches!(bytes.get(i).copied(), Some(b'e' | b'E')) {
        i += 1;
        sign(&mut i);
        if digits(&mut i) == 0 {
            return None;
        }
    }
    if i != bytes.len() {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Numeric cell test shared by header detection and column classification.
pub fn is_number(value: &str, strip: bool) -> bool {
    parse_number(clean(value, strip)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_literals() {
        for ok in ["1", "-2", "+3.5", ".5", "5.", "1e3", "-1.25E-2"] {
            assert!(parse_number(ok).is_some(), "{ok}");
        }
        for bad in ["", "-", ".", "e5", "1e", "inf", "NaN", "0x10", "1,5", " 1", "abc"] {
            assert!(parse_number(bad).is_none(), "{bad}");
        }
    }

    #[test]
    fn strip_applies_only_when_enabled() {
        assert!(!is_number("\"12\"", false));
        assert!(is_number("\"12\"", true));
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn dimensions_follow_max_index() {
        let mut m = Matrix::new();
        m.set(3, 1, "x");
        assert_eq!((m.width(), m.height()), (4, 2));
        assert_eq!(m.get(0, 0), None);
        assert_eq!(m.get(3, 1), Some("x"));
    }
}
