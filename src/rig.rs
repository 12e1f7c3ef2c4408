//! Single owner of the mutable camera state.
//!
//! Input events are applied strictly in order: each call to `handle_input`
//! runs at most one operation and recomputes the matrices before returning.

use glam::{Vec2, Vec3};
use log::{debug, trace, warn};

use crate::config::CameraConfig;
use crate::core::timer::Debounce;
use crate::dispatch::{Bindings, Operation};
use crate::error::Result;
use crate::input::InputState;
use crate::math::cast_to_target_plane;
use crate::orbit::OrbitCamera;
use crate::projection::{CameraMatrices, Lens, MatrixMaintainer};
use crate::types::{ViewProjectionUniform, Viewport};
use crate::zoom::{apply_zoom_ratio, drag_sign, zoom_ratio, PanStrategy, ZoomStrategy};

pub struct CameraRig {
    camera: OrbitCamera,
    lens: Lens,
    matrices: MatrixMaintainer,
    viewport: Viewport,
    bindings: Bindings,
    zoom: ZoomStrategy,
    pan: PanStrategy,
    resize: Debounce<Viewport>,
    last_wheel: f32,
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig, viewport: Viewport) -> Result<Self> {
        config.validate()?;

        let camera = OrbitCamera::new(config.eye(), config.target(), config.up());
        let mut matrices = MatrixMaintainer::new();
        matrices.update(camera.view, &config.lens, viewport.aspect_ratio())?;

        debug!(
            "Camera rig: zoom {:?}, pan {:?}, {}x{}",
            config.zoom, config.pan, viewport.width, viewport.height
        );

        Ok(Self {
            camera,
            lens: config.lens,
            matrices,
            viewport,
            bindings: Bindings::from_scheme(&config.scheme, config.wheel),
            zoom: config.zoom,
            pan: config.pan,
            resize: Debounce::new(config.resize_debounce_secs()),
            last_wheel: 0.0,
        })
    }

    /// Apply the one operation selected by this event.
    ///
    /// Pointer movement takes precedence over wheel change. Events with no
    /// movement and no wheel change are dropped before any camera math runs.
    pub fn handle_input(&mut self, input: &InputState) -> Option<Operation> {
        let wheel_delta = input.wheel - self.last_wheel;
        self.last_wheel = input.wheel;

        let (operation, delta, pointer) = if input.has_movement() {
            let operation = self.bindings.select(input)?;
            let pointer = (input.position, input.previous_position());
            (operation, input.delta, Some(pointer))
        } else if wheel_delta != 0.0 {
            let operation = self.bindings.wheel_operation();
            (operation, Vec2::new(-wheel_delta, 0.0), None)
        } else {
            return None;
        };

        if !self.apply(operation, delta, pointer) {
            return None;
        }
        trace!("{:?} by {:?}", operation, delta);
        self.refresh();
        Some(operation)
    }

    /// Run `operation` with a normalized delta. `pointer` holds the current and
    /// previous pixel positions for strategies that raycast the target plane.
    /// Returns false when the event was skipped as degenerate.
    pub fn apply(&mut self, operation: Operation, delta: Vec2, pointer: Option<(Vec2, Vec2)>) -> bool {
        match operation {
            Operation::Rotate => self.camera.rotate(delta),
            Operation::Dolly => self.camera.dolly(delta),
            Operation::Pinch => match (self.zoom, pointer) {
                (ZoomStrategy::RadialDistance, _) => self.camera.pinch(delta),
                (ZoomStrategy::AngularRatio, Some((position, previous))) => {
                    let Some((hit, prev)) = self.plane_hits(position, previous) else {
                        return false;
                    };
                    match zoom_ratio(self.camera.eye(), self.camera.target, hit, prev) {
                        Some(ratio) => self.lens.yfov = apply_zoom_ratio(self.lens.yfov, ratio),
                        None => {
                            trace!("Skipping zoom: previous hit collinear with eye and target");
                            return false;
                        }
                    }
                }
                (ZoomStrategy::AngularRatio, None) => {
                    self.lens.yfov = apply_zoom_ratio(self.lens.yfov, 1.0 + delta.x);
                }
                (ZoomStrategy::PlaneAnchored, Some((position, previous))) => {
                    let Some((hit, prev)) = self.plane_hits(position, previous) else {
                        return false;
                    };
                    self.camera.pinch_anchored(hit, prev, drag_sign(position - previous));
                }
                (ZoomStrategy::PlaneAnchored, None) => self.camera.pinch(delta),
            },
            Operation::Pan => match (self.pan, pointer) {
                (PanStrategy::PlaneAnchored, Some((position, previous))) => {
                    let Some((hit, prev)) = self.plane_hits(position, previous) else {
                        return false;
                    };
                    self.camera.pan_anchored(hit, prev);
                }
                _ => self.camera.pan(delta),
            },
        }
        true
    }

    /// Target-plane hits for two pointer positions; None if either ray misses
    fn plane_hits(&self, position: Vec2, previous: Vec2) -> Option<(Vec3, Vec3)> {
        let hit = self.cast(position);
        let prev = self.cast(previous);
        if hit.is_finite() && prev.is_finite() {
            Some((hit, prev))
        } else {
            trace!("Ray parallel to target plane at {:?}", position);
            None
        }
    }

    /// World point on the target plane under a pixel position
    pub fn cast(&self, pointer: Vec2) -> Vec3 {
        cast_to_target_plane(
            pointer,
            self.viewport.size(),
            &self.matrices.current().inv_view_projection,
            self.camera.eye(),
            self.camera.target,
        )
    }

    /// Schedule a viewport change; bursts collapse into one recompute.
    pub fn request_resize(&mut self, width: u32, height: u32) {
        match Viewport::new(width, height) {
            Ok(viewport) => self.resize.trigger(viewport),
            Err(e) => debug!("Ignoring resize: {}", e),
        }
    }

    /// Apply a viewport change immediately
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.resize.cancel();
        self.viewport = Viewport::new(width, height)?;
        self.refresh();
        Ok(())
    }

    /// Advance timers; returns true when a pending resize was applied
    pub fn tick(&mut self, delta: f32) -> bool {
        match self.resize.tick(delta) {
            Some(viewport) => {
                debug!("Resize to {}x{}", viewport.width, viewport.height);
                self.viewport = viewport;
                self.refresh();
                true
            }
            None => false,
        }
    }

    fn refresh(&mut self) {
        if let Err(e) = self
            .matrices
            .update(self.camera.view, &self.lens, self.viewport.aspect_ratio())
        {
            warn!("Keeping previous camera matrices: {}", e);
        }
    }

    pub fn view_projection(&self) -> ViewProjectionUniform {
        let matrices = self.matrices.current();
        ViewProjectionUniform::new(matrices.view_projection, matrices.view.inverse().w_axis.truncate())
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    pub fn matrices(&self) -> &CameraMatrices {
        self.matrices.current()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn zoom_strategy(&self) -> ZoomStrategy {
        self.zoom
    }

    pub fn set_zoom_strategy(&mut self, zoom: ZoomStrategy) {
        self.zoom = zoom;
    }

    pub fn pan_strategy(&self) -> PanStrategy {
        self.pan
    }

    pub fn set_pan_strategy(&mut self, pan: PanStrategy) {
        self.pan = pan;
    }
}
