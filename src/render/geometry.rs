//! Geometry primitives: distances, interpolation, rotation and reflection.

use crate::types::Point;

/// Decimal places kept for the cosine and sine factors in [`rotate_point`].
pub const ROTATION_FACTOR_PRECISION: i32 = 2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// The point at fraction `t` of the way from `a` to `b`.
///
/// `t` outside `0..=1` extrapolates along the same line.
#[inline]
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    a.lerp(b, t)
}

/// The point `d` units from `a` along the ray toward `b`.
///
/// Returns `None` when `a == b`, since the direction is undefined.
pub fn travel_towards(a: Point, b: Point, d: f64) -> Option<Point> {
    let length = distance(a, b);
    if length == 0.0 {
        return None;
    }
    Some(lerp(a, b, d / length))
}

/// Rotate `p` clockwise (on a y-down canvas) by `degrees` about `pivot`.
///
/// The cosine and sine factors are rounded to two decimal places, so
/// multiples of 90 degrees are exact and other angles are approximate.
pub fn rotate_point(p: Point, pivot: Point, degrees: f64) -> Point {
    if p == pivot {
        return p;
    }

    let radians = degrees.to_radians();
    let cos = round_to(radians.cos(), ROTATION_FACTOR_PRECISION);
    let sin = round_to(radians.sin(), ROTATION_FACTOR_PRECISION);

    let rel = p - pivot;
    let rotated = Point::new(rel.x * cos - rel.y * sin, rel.x * sin + rel.y * cos);
    rotated + pivot
}

/// Reflect the scalar `a` about `axis`.
#[inline]
pub fn flip_coordinate(a: f64, axis: f64) -> f64 {
    a + 2.0 * (axis - a)
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    let rounded = (value * scale).round() / scale;
    // keep -0.0 out of the factors so output stays sign-stable
    if rounded == 0.0 { 0.0 } else { rounded }
}
