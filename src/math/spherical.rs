use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Smallest polar distance kept from either pole
pub const EPSILON: f32 = 1.01e-5;

/// Azimuth/polar pair of a unit direction, Y up.
///
/// `theta` is measured from +Z toward +X, `phi` from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub fn new(theta: f32, phi: f32) -> Self {
        Self { theta, phi }
    }

    /// Angles of a unit direction
    pub fn from_direction(dir: Vec3) -> Self {
        Self {
            theta: dir.x.atan2(dir.z),
            phi: dir.y.clamp(-1.0, 1.0).acos(),
        }
    }

    /// Perturb by a pointer delta: x turns azimuth, y tilts toward the lower pole
    pub fn rotated(self, delta: Vec2) -> Self {
        Self {
            theta: self.theta - delta.x,
            phi: clamp_phi(self.phi + delta.y),
        }
    }

    pub fn to_direction(self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }
}

/// Keep the polar angle off the poles so lookAt never sees `dir ∥ up`
pub fn clamp_phi(phi: f32) -> f32 {
    phi.clamp(EPSILON, PI - EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_directions() {
        let z = Spherical::from_direction(Vec3::Z);
        assert!(z.theta.abs() < 1e-6);
        assert!((z.phi - PI / 2.0).abs() < 1e-6);

        let x = Spherical::from_direction(Vec3::X);
        assert!((x.theta - PI / 2.0).abs() < 1e-6);

        let up = Spherical::from_direction(Vec3::Y);
        assert!(up.phi.abs() < 1e-6);
    }

    #[test]
    fn test_direction_round_trip() {
        let dir = Vec3::new(1.0, 2.0, -0.5).normalize();
        let back = Spherical::from_direction(dir).to_direction();
        assert!((back - dir).length() < 1e-5);
    }

    #[test]
    fn test_rotated_moves_theta_opposite_to_delta() {
        let s = Spherical::new(0.3, 1.0).rotated(Vec2::new(0.1, 0.0));
        assert!((s.theta - 0.2).abs() < 1e-6);
        assert_eq!(s.phi, 1.0);
    }

    #[test]
    fn test_phi_clamped_at_both_poles() {
        let mut s = Spherical::new(0.0, 1.0);
        for _ in 0..20 {
            s = s.rotated(Vec2::new(0.0, 1.0));
            assert!(s.phi <= PI - EPSILON);
        }
        assert_eq!(s.phi, PI - EPSILON);

        for _ in 0..20 {
            s = s.rotated(Vec2::new(0.0, -1.0));
            assert!(s.phi >= EPSILON);
        }
        assert_eq!(s.phi, EPSILON);
    }

    #[test]
    fn test_from_direction_tolerates_overshoot() {
        let s = Spherical::from_direction(Vec3::new(0.0, -1.000_000_1, 0.0));
        assert!(s.phi.is_finite());
    }
}
