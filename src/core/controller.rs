/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Control,
    Shift,
    Alt,
    MouseLeft,
    MouseRight,
    MouseMiddle,
}

impl Button {
    /// Bit this button occupies in a pointer `buttons` mask, if it is a pointer button
    pub const fn mask_bit(self) -> u8 {
        match self {
            Button::MouseLeft => 1,
            Button::MouseRight => 2,
            Button::MouseMiddle => 4,
            _ => 0,
        }
    }

    pub const fn is_mouse(self) -> bool {
        self.mask_bit() != 0
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Pointer buttons held, as a bitmask (1 = left, 2 = right, 4 = middle)
    fn button_mask(&self) -> u8 {
        self.get_down_keys()
            .iter()
            .fold(0, |mask, button| mask | button.mask_bit())
    }
}
