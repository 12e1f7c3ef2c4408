use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dispatch::{BindingScheme, Operation};
use crate::error::{CameraError, Result};
use crate::projection::Lens;
use crate::zoom::{PanStrategy, ZoomStrategy};

/// Startup configuration for the camera rig
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub lens: Lens,
    pub zoom: ZoomStrategy,
    pub pan: PanStrategy,
    pub scheme: BindingScheme,
    pub wheel: Operation,
    /// Quiescence window for coalescing resize bursts
    pub resize_debounce_ms: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [2.0, 2.0, 2.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            lens: Lens::default(),
            zoom: ZoomStrategy::default(),
            pan: PanStrategy::default(),
            scheme: BindingScheme::default(),
            wheel: Operation::Pinch,
            resize_debounce_ms: 150,
        }
    }
}

impl CameraConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.eye)
    }

    pub fn target(&self) -> Vec3 {
        Vec3::from_array(self.target)
    }

    /// Normalized up vector
    pub fn up(&self) -> Vec3 {
        Vec3::from_array(self.up).normalize_or_zero()
    }

    pub fn resize_debounce_secs(&self) -> f32 {
        self.resize_debounce_ms as f32 / 1000.0
    }

    pub fn validate(&self) -> Result<()> {
        let (eye, target, up) = (self.eye(), self.target(), self.up());
        if !eye.is_finite() || !target.is_finite() {
            return Err(CameraError::DegenerateOrbit(
                "eye and target must be finite".into(),
            ));
        }
        if eye.distance(target) <= crate::math::EPSILON {
            return Err(CameraError::DegenerateOrbit(format!(
                "eye {:?} coincides with target",
                self.eye
            )));
        }
        if up == Vec3::ZERO || !up.is_finite() {
            return Err(CameraError::DegenerateOrbit(format!(
                "up vector {:?} has no direction",
                self.up
            )));
        }
        if (eye - target).normalize().cross(up).length_squared() < 1e-12 {
            return Err(CameraError::DegenerateOrbit(
                "view direction is parallel to up".into(),
            ));
        }
        self.lens.validate()
    }
}
