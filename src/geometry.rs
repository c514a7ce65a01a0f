//! Angle and distance helpers shared by the spring model and picking.

use crate::float::Float;
use crate::vec::Vec2;

/// Smallest distance the spring model and picking will ever report.
///
/// Keeps the spring force finite when two particles coincide.
pub const MIN_SEPARATION: f64 = 10.0;

/// Direction from `from` to `to`, in radians.
///
/// When `dy > 0` this is plain `atan2`. Otherwise `2π` is added. The
/// branch makes an exactly horizontal leftward vector come out as 3π
/// rather than π. Spring directions are derived from this value, so the
/// branch is kept exactly as is.
pub fn spring_angle<F: Float>(from: Vec2<F>, to: Vec2<F>) -> F {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dy > F::zero() {
        F::atan2(dy, dx)
    } else {
        F::tau() + F::atan2(dy, dx)
    }
}

/// Euclidean distance between `a` and `b`, never less than [`MIN_SEPARATION`].
pub fn floored_distance<F: Float>(a: Vec2<F>, b: Vec2<F>) -> F {
    a.distance(b).max(F::from_f64(MIN_SEPARATION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn coincident_points_floor_to_ten() {
        let p = Vec2::new(42.0f64, -7.0);
        let d = floored_distance(p, p);
        assert_eq!(d, 10.0);
        assert!(!d.is_nan());
    }

    #[test]
    fn far_points_use_true_distance() {
        let d = floored_distance(Vec2::new(0.0f64, 0.0), Vec2::new(30.0, 40.0));
        assert_eq!(d, 50.0);
    }

    #[test]
    fn downward_angle_is_unshifted() {
        let a = spring_angle(Vec2::new(0.0f64, 0.0), Vec2::new(0.0, 5.0));
        assert!((a - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn upward_angle_is_shifted_by_full_turn() {
        let a = spring_angle(Vec2::new(0.0f64, 0.0), Vec2::new(0.0, -5.0));
        assert!((a - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn horizontal_angles_take_shifted_branch() {
        let right = spring_angle(Vec2::new(0.0f64, 0.0), Vec2::new(5.0, 0.0));
        assert!((right - 2.0 * PI).abs() < 1e-12);
        let left = spring_angle(Vec2::new(0.0f64, 0.0), Vec2::new(-5.0, 0.0));
        assert!((left - 3.0 * PI).abs() < 1e-12);
        assert!((left.cos() + 1.0).abs() < 1e-12);
    }
}
