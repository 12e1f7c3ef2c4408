pub mod cli;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod math;
pub mod orbit;
pub mod projection;
pub mod rig;
pub mod types;
pub mod zoom;

pub use config::CameraConfig;
pub use error::CameraError;
pub use orbit::{move_xy, move_z, pinch_orbit, rotate_orbit, OrbitCamera};
pub use rig::CameraRig;
