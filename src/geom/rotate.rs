//! Rotation of a vector about the origin.

use crate::geom::Vector2D;

/// Applies the standard counter-clockwise rotation matrix by `radians`.
///
/// The input is left untouched; a new vector
/// `(x cos a - y sin a, x sin a + y cos a)` is returned.
#[inline]
pub fn rotate(vector: Vector2D, radians: f64) -> Vector2D {
    let (sin_a, cos_a) = radians.sin_cos();
    Vector2D {
        x: vector.x * cos_a - vector.y * sin_a,
        y: vector.x * sin_a + vector.y * cos_a,
    }
}
