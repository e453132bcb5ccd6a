//! Angle recovery from vectors and the matching clamp conventions.
//!
//! The two recovery methods observe different quotients of the circle:
//! `acos` cannot tell `θ` from `2π - θ`, while `atan2` resolves the full
//! turn. A swept ground-truth angle must be mapped through the clamp of the
//! same convention before it is compared with a recovered angle.

pub mod clamp;

pub use clamp::{clamp_signed, clamp_unsigned};

use crate::geom::Vector2D;
use crate::util::{DriftError, DriftResult};

/// Angle of `vector` to the positive x axis via the normalized dot product.
///
/// Returns `acos(x / |v|)` in `[0, π]`; the sign of `y` is lost.
pub fn angle_via_dot(vector: Vector2D) -> DriftResult<f64> {
    let length = vector.length();
    if !vector.is_finite() || length == 0.0 {
        return Err(DriftError::DegenerateVector {
            x: vector.x,
            y: vector.y,
        });
    }
    let cos = (vector.x / length).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Angle of `vector` to the positive x axis via `atan2(y, x)`, in `(-π, π]`.
#[inline]
pub fn angle_via_atan2(vector: Vector2D) -> f64 {
    vector.y.atan2(vector.x)
}

/// Representational convention of an angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Convention {
    /// `[0, π]`, reflection-symmetric.
    Unsigned,
    /// `(-π, π]`, full turn.
    Signed,
}

impl Convention {
    /// Maps a swept angle in `[0, 2π]` into this convention.
    #[inline]
    pub fn clamp(self, raw: f64) -> f64 {
        match self {
            Convention::Unsigned => clamp_unsigned(raw),
            Convention::Signed => clamp_signed(raw),
        }
    }
}

/// Method used to recover an angle from a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recovery {
    /// Inverse cosine of the normalized x component.
    Dot,
    /// Two-argument arctangent.
    Atan2,
}

impl Recovery {
    /// Recovers the angle of `vector`.
    #[inline]
    pub fn recover(self, vector: Vector2D) -> DriftResult<f64> {
        match self {
            Recovery::Dot => angle_via_dot(vector),
            Recovery::Atan2 => Ok(angle_via_atan2(vector)),
        }
    }

    /// Convention the recovered angles live in.
    pub fn convention(self) -> Convention {
        match self {
            Recovery::Dot => Convention::Unsigned,
            Recovery::Atan2 => Convention::Signed,
        }
    }

    /// Short label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Recovery::Dot => "Dot",
            Recovery::Atan2 => "Trig",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{angle_via_atan2, angle_via_dot, Convention, Recovery};
    use crate::geom::Vector2D;
    use crate::util::DriftError;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn dot_rejects_zero_and_nan() {
        let err = angle_via_dot(Vector2D::new(0.0, 0.0)).unwrap_err();
        assert_eq!(err, DriftError::DegenerateVector { x: 0.0, y: 0.0 });
        assert!(angle_via_dot(Vector2D::new(f64::NAN, 1.0)).is_err());
        assert!(angle_via_dot(Vector2D::new(f64::INFINITY, 1.0)).is_err());
    }

    #[test]
    fn dot_ignores_length_and_sign_of_y() {
        let up = angle_via_dot(Vector2D::new(0.0, 3.0)).unwrap();
        let down = angle_via_dot(Vector2D::new(0.0, -3.0)).unwrap();
        assert!((up - FRAC_PI_2).abs() < 1e-15);
        assert_eq!(up, down);
    }

    #[test]
    fn atan2_keeps_quadrant() {
        assert!((angle_via_atan2(Vector2D::new(0.0, -1.0)) + FRAC_PI_2).abs() < 1e-15);
        assert_eq!(angle_via_atan2(Vector2D::new(-1.0, 0.0)), PI);
        assert_eq!(angle_via_atan2(Vector2D::new(-1.0, -0.0)), -PI);
    }

    #[test]
    fn recovery_pairs_with_convention() {
        assert_eq!(Recovery::Dot.convention(), Convention::Unsigned);
        assert_eq!(Recovery::Atan2.convention(), Convention::Signed);
        assert!((Convention::Signed.clamp(1.5 * PI) + FRAC_PI_2).abs() < 1e-15);
        let v = Vector2D::new(1.0, 1.0);
        let trig = Recovery::Atan2.recover(v).unwrap();
        let dot = Recovery::Dot.recover(v).unwrap();
        assert!((trig - dot).abs() < 1e-15);
    }
}
