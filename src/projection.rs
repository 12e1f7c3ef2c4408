//! Projection and view-projection maintenance.
//!
//! Matrices follow the GL clip-space convention (NDC z in [-1, 1]) so the
//! raycaster can lift pointer positions to the near plane at z = -1.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_4, PI};

use crate::error::{CameraError, Result};

/// Half height of the orthographic view volume in world units
pub const ORTHO_HALF_HEIGHT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionKind {
    #[default]
    Perspective,
    Orthographic,
}

/// Projection parameters; `yfov` is only read for perspective lenses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lens {
    pub kind: ProjectionKind,
    pub yfov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            kind: ProjectionKind::Perspective,
            yfov: FRAC_PI_4,
            near: 0.01,
            far: 1024.0,
        }
    }
}

impl Lens {
    pub fn validate(&self) -> Result<()> {
        if !(self.near.is_finite() && self.far.is_finite()) || self.near >= self.far {
            return Err(CameraError::InvalidLens(format!(
                "near {} must be below far {}",
                self.near, self.far
            )));
        }
        if self.kind == ProjectionKind::Perspective {
            if self.near <= 0.0 {
                return Err(CameraError::InvalidLens(format!(
                    "perspective near {} must be positive",
                    self.near
                )));
            }
            if !(self.yfov > 0.0 && self.yfov < PI) {
                return Err(CameraError::InvalidLens(format!(
                    "yfov {} outside (0, pi)",
                    self.yfov
                )));
            }
        }
        Ok(())
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        match self.kind {
            ProjectionKind::Perspective => {
                Mat4::perspective_rh_gl(self.yfov, aspect, self.near, self.far)
            }
            ProjectionKind::Orthographic => {
                let half_width = ORTHO_HALF_HEIGHT * aspect;
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -ORTHO_HALF_HEIGHT,
                    ORTHO_HALF_HEIGHT,
                    self.near,
                    self.far,
                )
            }
        }
    }
}

/// Derived camera matrices; `view_projection = projection * view`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub projection: Mat4,
    pub view: Mat4,
    pub view_projection: Mat4,
    pub inv_view_projection: Mat4,
}

impl Default for CameraMatrices {
    fn default() -> Self {
        Self {
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            inv_view_projection: Mat4::IDENTITY,
        }
    }
}

impl CameraMatrices {
    pub fn compute(view: Mat4, lens: &Lens, aspect: f32) -> Result<Self> {
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(CameraError::InvalidLens(format!("aspect ratio {}", aspect)));
        }
        lens.validate()?;

        let projection = lens.projection(aspect);
        let view_projection = projection * view;

        let det = view_projection.determinant();
        if !det.is_finite() || det == 0.0 {
            return Err(CameraError::NonInvertible);
        }
        let inv_view_projection = view_projection.inverse();
        if !inv_view_projection.is_finite() {
            return Err(CameraError::NonInvertible);
        }

        Ok(Self {
            projection,
            view,
            view_projection,
            inv_view_projection,
        })
    }

    pub fn from_look_at(eye: Vec3, target: Vec3, up: Vec3, lens: &Lens, aspect: f32) -> Result<Self> {
        Self::compute(Mat4::look_at_rh(eye, target, up), lens, aspect)
    }
}

/// Holds the last valid matrices; a failed update leaves them in place.
#[derive(Debug, Clone, Default)]
pub struct MatrixMaintainer {
    current: CameraMatrices,
}

impl MatrixMaintainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, view: Mat4, lens: &Lens, aspect: f32) -> Result<&CameraMatrices> {
        self.current = CameraMatrices::compute(view, lens, aspect)?;
        Ok(&self.current)
    }

    pub fn current(&self) -> &CameraMatrices {
        &self.current
    }
}
