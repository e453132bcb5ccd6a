//! Mapping of a swept angle in `[0, 2π]` into a recovery convention.

use std::f64::consts::{PI, TAU};

/// Folds `theta` into `[0, π]`: angles past `π` become `2π - θ`.
#[inline]
pub fn clamp_unsigned(theta: f64) -> f64 {
    if theta > PI {
        TAU - theta
    } else {
        theta
    }
}

/// Maps `theta` into `(-π, π]`: angles past `π` become `-(2π - θ)`.
#[inline]
pub fn clamp_signed(theta: f64) -> f64 {
    if theta > PI {
        -(TAU - theta)
    } else {
        theta
    }
}

#[cfg(test)]
mod tests {
    use super::{clamp_signed, clamp_unsigned};
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn seam_stays_positive() {
        assert_eq!(clamp_unsigned(PI), PI);
        assert_eq!(clamp_signed(PI), PI);
    }

    #[test]
    fn past_seam_reflects_or_negates() {
        let theta = PI + FRAC_PI_2;
        assert!((clamp_unsigned(theta) - FRAC_PI_2).abs() < 1e-15);
        assert!((clamp_signed(theta) + FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn full_turn_returns_to_zero() {
        assert_eq!(clamp_unsigned(TAU), 0.0);
        assert_eq!(clamp_signed(TAU), 0.0);
        assert_eq!(clamp_unsigned(0.0), 0.0);
    }
}
