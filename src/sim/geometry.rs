//! Coordinate transforms on screen-space vertices
//!
//! Screen space has y increasing downward. Angles are in degrees.

use glam::{IVec2, Vec2};

use crate::consts::AREA_TOLERANCE;

/// Slide a vertex by `delta`
#[inline]
pub fn translate(v: Vec2, delta: Vec2) -> Vec2 {
    Vec2::new(v.x + delta.x, v.y + delta.y)
}

/// Move a vertex closer to / further from the origin
#[inline]
pub fn scale(v: Vec2, factor: f32) -> Vec2 {
    Vec2::new(v.x * factor, v.y * factor)
}

/// Scale a vertex away from `pivot`
pub fn scale_about(v: Vec2, pivot: Vec2, factor: f32) -> Vec2 {
    let moved = translate(v, -pivot);
    let scaled = scale(moved, factor);
    translate(scaled, pivot)
}

/// Rotate a vertex about the origin.
///
/// Uses `x' = x·cosθ + y·sinθ, y' = −x·sinθ + y·cosθ`, the rotation-of-axes
/// form. Every caller relies on this sign.
pub fn rotate_about_origin(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

/// Rotate a vertex about `pivot`
pub fn rotate_about_point(v: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    let moved = translate(v, -pivot);
    let rotated = rotate_about_origin(moved, degrees);
    translate(rotated, pivot)
}

/// Unsigned area of a triangle (shoelace)
pub fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    ((a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0).abs()
}

/// Approximate point-in-triangle test.
///
/// `p` is inside when the three sub-triangles it forms with the edges add up
/// to the full area, within `AREA_TOLERANCE`. Points on or just beyond an edge
/// count as inside.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let full = triangle_area(a, b, c);

    let pbc = triangle_area(p, b, c);
    let pac = triangle_area(p, a, c);
    let pab = triangle_area(p, a, b);

    (pbc + pac + pab - full).abs() < AREA_TOLERANCE
}

/// Nearest integer coordinate, for the renderer boundary
#[inline]
pub fn round_to_int(v: Vec2) -> IVec2 {
    IVec2::new(v.x.round() as i32, v.y.round() as i32)
}
