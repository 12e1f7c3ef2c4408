use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Narrowest vertical field of view reachable by angular zoom
pub const MIN_FOV: f32 = PI / 12.0;
/// Widest vertical field of view reachable by angular zoom
pub const MAX_FOV: f32 = 2.0 * PI / 3.0;
/// Previous-hit angles below this are treated as collinear
const MIN_SUBTENDED_ANGLE: f32 = 1e-4;

/// How a pinch gesture zooms the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomStrategy {
    /// Scale the orbit radius; the lens is untouched
    #[default]
    RadialDistance,
    /// Scale the field of view by the change in angle subtended at the eye
    AngularRatio,
    /// Move the eye radially by the distance between two target-plane hits
    PlaneAnchored,
}

/// How a pan gesture translates the rig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanStrategy {
    /// Pointer delta mapped through the camera basis, scaled by radius
    #[default]
    ViewBasis,
    /// Difference of two target-plane hits; the grabbed point stays under the pointer
    PlaneAnchored,
}

/// Angle at `eye` between the directions to `target` and to `hit`
pub fn subtended_angle(eye: Vec3, target: Vec3, hit: Vec3) -> f32 {
    let (a, b) = (target - eye, hit - eye);
    a.cross(b).length().atan2(a.dot(b))
}

/// Ratio of the angle subtended by the current plane hit to the previous one.
///
/// Returns `None` when the previous hit is collinear with eye and target
/// (zero angle), which has no meaningful ratio.
pub fn zoom_ratio(eye: Vec3, target: Vec3, hit: Vec3, prev: Vec3) -> Option<f32> {
    let a_prev = subtended_angle(eye, target, prev);
    if !a_prev.is_finite() || a_prev < MIN_SUBTENDED_ANGLE {
        return None;
    }
    let ratio = subtended_angle(eye, target, hit) / a_prev;
    ratio.is_finite().then_some(ratio)
}

/// Direction of an anchored pinch: the sign of the horizontal pointer
/// movement, or of the vertical one when the drag is purely vertical.
/// Positive pulls the eye toward the target.
pub fn drag_sign(movement: Vec2) -> f32 {
    let lead = if movement.x != 0.0 { movement.x } else { movement.y };
    if lead > 0.0 {
        1.0
    } else if lead < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Scale `yfov` by `ratio`, clamped to `[MIN_FOV, MAX_FOV]`
pub fn apply_zoom_ratio(yfov: f32, ratio: f32) -> f32 {
    (yfov * ratio).clamp(MIN_FOV, MAX_FOV)
}
