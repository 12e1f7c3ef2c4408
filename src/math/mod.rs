mod ray;
mod spherical;

pub use ray::{
    cast_to_target_plane, pixel_to_ndc, plane_offset, raycast_to_plane, NEAR_PLANE_NDC_Z,
};
pub use spherical::{clamp_phi, Spherical, EPSILON};
