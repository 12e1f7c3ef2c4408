use glam::{Mat4, Vec2, Vec3};

/// NDC depth of the near clip plane in GL clip space
pub const NEAR_PLANE_NDC_Z: f32 = -1.0;

/// Map a canvas pixel position to normalized device coordinates.
/// Screen Y grows downward, NDC Y grows upward.
pub fn pixel_to_ndc(pointer: Vec2, canvas: Vec2) -> Vec2 {
    Vec2::new(
        (pointer.x / canvas.x) * 2.0 - 1.0,
        (-pointer.y / canvas.y) * 2.0 + 1.0,
    )
}

/// Offset `d` of the plane through `point` with unit `normal` (`n·x + d = 0`)
pub fn plane_offset(point: Vec3, normal: Vec3) -> f32 {
    -point.dot(normal)
}

/// Intersect the ray `p0 + t·v` with the plane `n·x + d = 0`.
///
/// When `v` is parallel to the plane the result is not finite; callers
/// must keep the ray off the plane.
pub fn raycast_to_plane(p0: Vec3, v: Vec3, n: Vec3, d: f32) -> Vec3 {
    let t = -(p0.dot(n) + d) / v.dot(n);
    p0 + v * t
}

/// Cast a ray from the eye through a pointer position and intersect it with
/// the plane that passes through `target` and faces the eye.
///
/// `pointer` and `canvas` are in pixels. `inv_view_proj` must be the inverse
/// of the view-projection the pointer was observed under.
pub fn cast_to_target_plane(
    pointer: Vec2,
    canvas: Vec2,
    inv_view_proj: &Mat4,
    eye: Vec3,
    target: Vec3,
) -> Vec3 {
    let ndc = pixel_to_ndc(pointer, canvas);
    let p0 = inv_view_proj.project_point3(ndc.extend(NEAR_PLANE_NDC_Z));
    let n = (eye - target).normalize();
    let v = (p0 - eye).normalize();
    raycast_to_plane(p0, v, n, plane_offset(target, n))
}
