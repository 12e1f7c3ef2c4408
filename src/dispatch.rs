//! Mapping from button/modifier state to a single camera operation.

use serde::{Deserialize, Serialize};

use crate::core::controller::Button;
use crate::input::{InputState, BUTTON_MIDDLE, BUTTON_PRIMARY, BUTTON_SECONDARY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Rotate,
    Pinch,
    Dolly,
    Pan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    Control,
    Shift,
    Alt,
}

impl Modifier {
    pub const fn key(self) -> Button {
        match self {
            Modifier::Control => Button::Control,
            Modifier::Shift => Button::Shift,
            Modifier::Alt => Button::Alt,
        }
    }
}

/// Exact pointer mask, optionally gated on a held modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub buttons: u8,
    #[serde(default)]
    pub modifier: Option<Modifier>,
    pub operation: Operation,
}

impl Binding {
    pub const fn new(buttons: u8, operation: Operation) -> Self {
        Self {
            buttons,
            modifier: None,
            operation,
        }
    }

    pub const fn with_modifier(buttons: u8, modifier: Modifier, operation: Operation) -> Self {
        Self {
            buttons,
            modifier: Some(modifier),
            operation,
        }
    }

    fn matches(&self, input: &InputState) -> bool {
        self.buttons == input.buttons
            && self.modifier.map_or(true, |m| input.is_key_down(m.key()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingScheme {
    /// Button combinations alone select the operation
    Buttons,
    /// Modifier keys refine the primary button
    #[default]
    Modifiers,
    Custom(Vec<Binding>),
}

impl BindingScheme {
    pub fn bindings(&self) -> Vec<Binding> {
        match self {
            BindingScheme::Buttons => vec![
                Binding::new(BUTTON_PRIMARY, Operation::Rotate),
                Binding::new(BUTTON_SECONDARY, Operation::Pinch),
                Binding::new(BUTTON_MIDDLE, Operation::Pan),
                Binding::new(BUTTON_MIDDLE | BUTTON_PRIMARY, Operation::Rotate),
                Binding::new(BUTTON_MIDDLE | BUTTON_SECONDARY, Operation::Pinch),
            ],
            BindingScheme::Modifiers => vec![
                Binding::with_modifier(BUTTON_PRIMARY, Modifier::Control, Operation::Pan),
                Binding::with_modifier(BUTTON_PRIMARY, Modifier::Shift, Operation::Dolly),
                Binding::new(BUTTON_PRIMARY, Operation::Rotate),
                Binding::new(BUTTON_SECONDARY, Operation::Pinch),
                Binding::new(BUTTON_MIDDLE, Operation::Pan),
            ],
            BindingScheme::Custom(bindings) => bindings.clone(),
        }
    }
}

/// Ordered binding table plus the operation driven by the wheel
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings {
    bindings: Vec<Binding>,
    wheel: Operation,
}

impl Bindings {
    /// Modifier-gated bindings are tried before plain ones; order within
    /// each group is kept.
    pub fn new(mut bindings: Vec<Binding>, wheel: Operation) -> Self {
        bindings.sort_by_key(|b| b.modifier.is_none());
        Self { bindings, wheel }
    }

    pub fn from_scheme(scheme: &BindingScheme, wheel: Operation) -> Self {
        Self::new(scheme.bindings(), wheel)
    }

    /// The one operation this pointer event drives, if any
    pub fn select(&self, input: &InputState) -> Option<Operation> {
        if input.buttons == 0 {
            return None;
        }
        self.bindings
            .iter()
            .find(|b| b.matches(input))
            .map(|b| b.operation)
    }

    pub fn wheel_operation(&self) -> Operation {
        self.wheel
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::from_scheme(&BindingScheme::default(), Operation::Pinch)
    }
}
