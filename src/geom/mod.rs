//! Plain 2D vectors used as sweep samples.
//!
//! `Vector2D` is a copyable `(x, y)` pair with no identity. Samples produced by
//! the sweeps lie on the unit circle up to accumulated rounding error.

pub mod rotate;

pub use rotate::rotate;

/// Point or direction in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2D {
    /// The reference direction every sweep starts from.
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0 };

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector `(cos θ, sin θ)`.
    pub fn from_polar(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { x: cos, y: sin }
    }

    /// Euclidean length without intermediate overflow.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns true if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::Vector2D;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn from_polar_quarter_turn() {
        let v = Vector2D::from_polar(FRAC_PI_2);
        assert!(v.x.abs() < 1e-15);
        assert_eq!(v.y, 1.0);
    }

    #[test]
    fn length_of_pythagorean_triple() {
        assert_eq!(Vector2D::new(3.0, 4.0).length(), 5.0);
        assert!(!Vector2D::new(f64::NAN, 0.0).is_finite());
    }
}
