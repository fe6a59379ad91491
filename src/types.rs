//! Core value types shared by the geometry, shape and layout modules.

use std::fmt;

/// A point in glyph space (SVG convention: x grows right, y grows down).
///
/// Points are plain values; every transform produces a fresh one.
pub type Point = glam::DVec2;

/// Shorthand constructor used throughout the glyph table and tests.
#[inline]
pub const fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Which side of the vowel a consonant cluster attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Consonants before the nucleus, placed along `start -> middle`.
    Onset,
    /// Consonants after the nucleus, placed along `middle -> end`.
    Coda,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Onset => write!(f, "onset"),
            Side::Coda => write!(f, "coda"),
        }
    }
}

/// The three anchor points of a vowel stroke.
///
/// `start -> middle` is the onset segment, `middle -> end` the coda segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub start: Point,
    pub middle: Point,
    pub end: Point,
}

impl Anchors {
    pub const fn new(start: Point, middle: Point, end: Point) -> Self {
        Self { start, middle, end }
    }

    /// The open end of the segment for `side` (where the walk begins).
    pub fn open_end(&self, side: Side) -> Point {
        match side {
            Side::Onset => self.start,
            Side::Coda => self.end,
        }
    }

    /// Length of the segment for `side`.
    pub fn segment_length(&self, side: Side) -> f64 {
        self.open_end(side).distance(self.middle)
    }
}

/// Format a coordinate for SVG output: up to 10 significant digits,
/// trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 10)
}

/// Magnitudes below this are float noise and print as `0`.
const ZERO_EPSILON: f64 = 1e-9;

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value.abs() < ZERO_EPSILON {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Format a point as `x,y`.
pub(crate) fn fmt_point(p: Point) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_integers() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(6.0), "6");
        assert_eq!(fmt_num(24.0), "24");
        assert_eq!(fmt_num(-3.0), "-3");
        assert_eq!(fmt_num(100.0), "100");
    }

    #[test]
    fn fmt_num_fractions() {
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(13.5), "13.5");
        assert_eq!(fmt_num(-2.25), "-2.25");
    }

    #[test]
    fn fmt_num_trims_float_noise() {
        assert_eq!(fmt_num(0.1 + 0.2), "0.3");
        assert_eq!(fmt_num(5.999_999_999_999_999), "6");
    }

    #[test]
    fn fmt_num_snaps_noise_to_zero() {
        assert_eq!(fmt_num(3.5e-15), "0");
        assert_eq!(fmt_num(-2e-12), "0");
        assert_eq!(fmt_point(pt(-1e-16, 24.0)), "0,24");
        assert_eq!(fmt_num(0.001), "0.001");
    }

    #[test]
    fn fmt_point_joins_with_comma() {
        assert_eq!(fmt_point(pt(6.0, 24.5)), "6,24.5");
    }

    #[test]
    fn segment_lengths() {
        let anchors = Anchors::new(pt(6.0, 6.0), pt(6.0, 24.0), pt(24.0, 24.0));
        assert_eq!(anchors.segment_length(Side::Onset), 18.0);
        assert_eq!(anchors.segment_length(Side::Coda), 18.0);
        assert_eq!(anchors.open_end(Side::Coda), pt(24.0, 24.0));
    }
}
