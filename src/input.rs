use glam::Vec2;
use std::collections::HashSet;

use crate::core::controller::Button;

pub const BUTTON_PRIMARY: u8 = 1;
pub const BUTTON_SECONDARY: u8 = 2;
pub const BUTTON_MIDDLE: u8 = 4;

/// Wheel accumulator step for one line of a line-based scroll device
pub const WHEEL_LINE_STEP: f32 = 0.05;

/// Pointer movement in pixels → canvas-relative delta, x right, y up, scaled by 2
pub fn normalize_movement(movement: Vec2, canvas: Vec2) -> Vec2 {
    Vec2::new(movement.x / canvas.x * 2.0, -(movement.y / canvas.y) * 2.0)
}

/// Pixel wheel scroll → accumulator units
pub fn normalize_wheel_pixels(pixels: f32, canvas_height: f32) -> f32 {
    pixels / canvas_height * 2.0
}

/// One input event as seen by the camera
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Pointer buttons, 1 = primary, 2 = secondary, 4 = middle
    pub buttons: u8,
    pub keys: HashSet<Button>,
    /// Pointer position in canvas pixels
    pub position: Vec2,
    /// Pointer movement since the previous event, in pixels
    pub movement: Vec2,
    /// `movement` normalized by the canvas
    pub delta: Vec2,
    /// Running wheel accumulator
    pub wheel: f32,
}

impl InputState {
    pub fn is_key_down(&self, key: Button) -> bool {
        self.keys.contains(&key)
    }

    pub fn has_movement(&self) -> bool {
        self.delta != Vec2::ZERO
    }

    /// Pointer position before this event's movement
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.movement
    }
}
