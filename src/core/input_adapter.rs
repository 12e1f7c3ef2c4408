use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};
use crate::input::{normalize_movement, normalize_wheel_pixels, InputState, WHEEL_LINE_STEP};
use crate::types::Viewport;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Current mouse position (relative to window)
    mouse_position: Option<(f32, f32)>,
    /// Mouse movement delta since last reset
    mouse_delta: (f32, f32),
    /// Running wheel total, never reset
    wheel: f32,
    /// Last known canvas size, for pixel wheel normalization
    canvas_height: f32,
    /// Treat Alt as Control (macOS convention)
    remap_alt: bool,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            mouse_position: None,
            mouse_delta: (0.0, 0.0),
            wheel: 0.0,
            canvas_height: 1.0,
            remap_alt: cfg!(target_os = "macos"),
        }
    }

    pub fn with_alt_remap(mut self, remap_alt: bool) -> Self {
        self.remap_alt = remap_alt;
        self
    }

    /// Process a Winit WindowEvent and update internal state.
    /// Returns true when the event changed pointer or key state.
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return false;
                };
                match self.keycode_to_button(keycode) {
                    Some(button) => {
                        self.set_pressed(button, event.state);
                        true
                    }
                    None => false,
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                match Self::mouse_button_to_button(*button) {
                    Some(btn) => {
                        self.set_pressed(btn, *state);
                        true
                    }
                    None => false,
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor((position.x as f32, position.y as f32));
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                false
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.wheel += match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * WHEEL_LINE_STEP,
                    MouseScrollDelta::PixelDelta(p) => {
                        normalize_wheel_pixels(p.y as f32, self.canvas_height)
                    }
                };
                true
            }
            WindowEvent::Resized(size) => {
                if size.height > 0 {
                    self.canvas_height = size.height as f32;
                }
                false
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }
            _ => false,
        }
    }

    fn set_pressed(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    fn move_cursor(&mut self, new_pos: (f32, f32)) {
        if let Some(old_pos) = self.mouse_position {
            self.mouse_delta.0 += new_pos.0 - old_pos.0;
            self.mouse_delta.1 += new_pos.1 - old_pos.1;
        }
        self.mouse_position = Some(new_pos);
    }

    fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Reset per-event state (mouse delta).
    /// Call this after the camera has consumed an `InputState`.
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }

    /// Get current mouse position (if available)
    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    /// Get accumulated mouse delta since last reset
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    pub fn wheel(&self) -> f32 {
        self.wheel
    }

    /// Snapshot for the camera, with movement normalized by the viewport
    pub fn input_state(&self, viewport: Viewport) -> InputState {
        let movement = Vec2::from(self.mouse_delta);
        InputState {
            buttons: self.button_mask(),
            keys: self
                .pressed_keys
                .iter()
                .copied()
                .filter(|b| !b.is_mouse())
                .collect(),
            position: self.mouse_position.map(Vec2::from).unwrap_or_default(),
            movement,
            delta: normalize_movement(movement, viewport.size()),
            wheel: self.wheel,
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(&self, keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Button::Control),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::AltLeft | KeyCode::AltRight if self.remap_alt => Some(Button::Control),
            KeyCode::AltLeft | KeyCode::AltRight => Some(Button::Alt),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            MouseButton::Middle => Some(Button::MouseMiddle),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}
