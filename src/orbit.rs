//! Orbit rig transforms.
//!
//! Every operation reads the current `(view, target)` pair, derives the eye
//! from the inverse view, and writes a fresh pair back. No angle or radius
//! state is kept between calls, so the view matrix is always the single
//! source of truth.
//!
//! Rotation angles are measured in a frame whose pole is the rig's `up`.
//!
//! Preconditions: eye and target never coincide, and zero deltas are
//! filtered before reaching these functions.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::math::{Spherical, EPSILON};

/// Upper bound on the orbit radius
pub const MAX_RADIUS: f32 = 1024.0;

/// World-space eye position encoded by a view matrix
pub fn eye_from_view(view: &Mat4) -> Vec3 {
    view.inverse().w_axis.truncate()
}

/// Radius scaled by `1 + dx`, clamped to `[EPSILON, MAX_RADIUS]`
pub fn scaled_radius(radius: f32, dx: f32) -> f32 {
    (radius + dx * radius).clamp(EPSILON, MAX_RADIUS)
}

/// Eye, radius and unit eye-from-target direction
fn orbit_frame(view: &Mat4, target: Vec3) -> (Vec3, f32, Vec3) {
    let eye = eye_from_view(view);
    let r = eye.distance(target);
    (eye, r, (eye - target) / r)
}

/// Rotation taking `up` onto +Y, the pole `Spherical` measures from
fn up_frame(up: Vec3) -> Quat {
    Quat::from_rotation_arc(up.normalize(), Vec3::Y)
}

/// Angles of `dir` about the pole `up`
pub fn spherical_about(dir: Vec3, up: Vec3) -> Spherical {
    Spherical::from_direction(up_frame(up) * dir)
}

/// Rotate the eye about the target on a sphere of fixed radius.
pub fn rotate_orbit(view: &mut Mat4, target: &Vec3, delta: Vec2, up: Vec3) {
    let (_, r, dir) = orbit_frame(view, *target);
    let to_local = up_frame(up);
    let local = Spherical::from_direction(to_local * dir).rotated(delta).to_direction();
    let eye = *target + to_local.inverse() * local * r;
    *view = Mat4::look_at_rh(eye, *target, up);
}

/// Move the eye radially; direction and target are untouched.
pub fn pinch_orbit(view: &mut Mat4, target: &Vec3, delta: Vec2, up: Vec3) {
    let (_, r, dir) = orbit_frame(view, *target);
    let eye = *target + dir * scaled_radius(r, delta.x);
    *view = Mat4::look_at_rh(eye, *target, up);
}

/// Move the eye radially by the distance between two target-plane hits.
/// Positive `sign` pulls the eye in; the radius stays in `[EPSILON, MAX_RADIUS]`.
pub fn pinch_anchored(view: &mut Mat4, target: &Vec3, hit: Vec3, prev: Vec3, sign: f32, up: Vec3) {
    let (_, r, dir) = orbit_frame(view, *target);
    let radius = (r - sign * hit.distance(prev)).clamp(EPSILON, MAX_RADIUS);
    let eye = *target + dir * radius;
    *view = Mat4::look_at_rh(eye, *target, up);
}

/// Walk eye and target together along the view axis by the pinch offset.
pub fn move_z(view: &mut Mat4, target: &mut Vec3, delta: Vec2, up: Vec3) {
    let (_, r, dir) = orbit_frame(view, *target);
    let eye = *target + dir * scaled_radius(r, delta.x);
    *target = eye - dir * r;
    *view = Mat4::look_at_rh(eye, *target, up);
}

/// Translate eye and target in the view plane, scaled by the orbit radius.
pub fn move_xy(view: &mut Mat4, target: &mut Vec3, delta: Vec2, up: Vec3) {
    let camera_to_world = view.inverse();
    let eye = camera_to_world.w_axis.truncate();

    let dp = delta.extend(0.0) * eye.distance(*target);
    let dp = camera_to_world.transform_vector3(dp);

    *target -= dp;
    *view = Mat4::look_at_rh(eye - dp, *target, up);
}

/// Translate eye and target so the plane point under `prev` follows the
/// pointer to `hit`. Both points come from the target-plane raycaster.
pub fn pan_anchored(view: &mut Mat4, target: &mut Vec3, hit: Vec3, prev: Vec3, up: Vec3) {
    let eye = eye_from_view(view);
    let dp = hit - prev;

    *target -= dp;
    *view = Mat4::look_at_rh(eye - dp, *target, up);
}

/// View matrix plus the pivot it orbits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub view: Mat4,
    pub target: Vec3,
    pub up: Vec3,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            view: Mat4::look_at_rh(eye, target, up),
            target,
            up,
        }
    }

    pub fn eye(&self) -> Vec3 {
        eye_from_view(&self.view)
    }

    pub fn radius(&self) -> f32 {
        self.eye().distance(self.target)
    }

    /// Unit vector from target toward eye
    pub fn direction(&self) -> Vec3 {
        (self.eye() - self.target).normalize()
    }

    /// Angles of the view direction about `up`
    pub fn spherical(&self) -> Spherical {
        spherical_about(self.direction(), self.up)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        rotate_orbit(&mut self.view, &self.target, delta, self.up);
    }

    pub fn pinch(&mut self, delta: Vec2) {
        pinch_orbit(&mut self.view, &self.target, delta, self.up);
    }

    pub fn pinch_anchored(&mut self, hit: Vec3, prev: Vec3, sign: f32) {
        pinch_anchored(&mut self.view, &self.target, hit, prev, sign, self.up);
    }

    pub fn dolly(&mut self, delta: Vec2) {
        move_z(&mut self.view, &mut self.target, delta, self.up);
    }

    pub fn pan(&mut self, delta: Vec2) {
        move_xy(&mut self.view, &mut self.target, delta, self.up);
    }

    pub fn pan_anchored(&mut self, hit: Vec3, prev: Vec3) {
        pan_anchored(&mut self.view, &mut self.target, hit, prev, self.up);
    }
}
