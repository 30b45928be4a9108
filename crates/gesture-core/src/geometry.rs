//! Planar geometry helpers for normalized image coordinates.
//!
//! Angles follow the on-screen orientation: with y growing downward, a
//! vector pointing toward +x is 0°, toward screen-up (-y) is +90°, toward
//! -x is ±180°, and toward screen-down (+y) is -90°.

use handmove_frame_model::frame::Point2D;

/// Euclidean distance between two points.
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Signed angle at vertex `b` formed by `a` and `c`, in radians.
///
/// Computed from `ab = b - a` and `cb = b - c` as `atan2(ab × cb, ab · cb)`.
/// Returns 0 when either vector is zero-length.
pub fn signed_angle_radians(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    let ab = (b.x - a.x, b.y - a.y);
    let cb = (b.x - c.x, b.y - c.y);

    let dot = ab.0 * cb.0 + ab.1 * cb.1;
    let cross = ab.0 * cb.1 - ab.1 * cb.0;

    cross.atan2(dot)
}

/// Convert radians to whole degrees, rounding half up.
pub fn radians_to_degrees(radians: f64) -> i32 {
    (radians.to_degrees() + 0.5).floor() as i32
}

/// [`signed_angle_radians`] in whole degrees, within `[-180, 180]`.
pub fn signed_angle_degrees(a: Point2D, b: Point2D, c: Point2D) -> i32 {
    radians_to_degrees(signed_angle_radians(a, b, c))
}

/// Angle of the direction `from -> to` measured against horizontal.
///
/// `reference_offset` places the synthetic reference point at
/// `from + (reference_offset, 0)`; any positive value gives the same angle.
pub fn heading_degrees(from: Point2D, to: Point2D, reference_offset: f64) -> i32 {
    signed_angle_degrees(to, from, from.offset(reference_offset, 0.0))
}
