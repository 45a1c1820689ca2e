//! Raw input event data.
//!
//! These structs mirror what a UI-toolkit binding reports, before any
//! normalization: empty or `"Unidentified"` key codes, misreported modifier
//! flags, and misclassified pointer types all arrive here untouched. The
//! reducer in [`super::input_capture`] is responsible for cleaning them up.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::types::Modifier;

bitflags! {
    /// Currently depressed mouse buttons, as reported on mouse/pointer events.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
        const BACK = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

impl MouseButtons {
    /// Map each depressed button to its pseudo-modifier value.
    pub fn to_modifiers(self) -> SmallVec<[Modifier; 2]> {
        let mut modifiers = SmallVec::new();
        if self.contains(Self::LEFT) {
            modifiers.push(Modifier::LeftButton);
        }
        if self.contains(Self::RIGHT) {
            modifiers.push(Modifier::RightButton);
        }
        if self.contains(Self::MIDDLE) {
            modifiers.push(Modifier::MiddleButton);
        }
        if self.contains(Self::BACK) {
            modifiers.push(Modifier::BackButton);
        }
        if self.contains(Self::FORWARD) {
            modifiers.push(Modifier::ForwardButton);
        }
        modifiers
    }
}

/// A raw key-down or key-up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    /// Platform key code (`"KeyA"`, `"MetaLeft"`). May be empty or
    /// `"Unidentified"` on exotic keys.
    pub code: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyboardEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Identifier for one contact in a multi-pointer stream.
pub type PointerId = i32;

/// Device class reported on pointer events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    Mouse,
    Pen,
    Touch,
    /// Anything the platform could not classify.
    Unknown,
}

/// A raw mouse-button event on the capture button element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseEvent {
    pub buttons: MouseButtons,
}

impl MouseEvent {
    pub fn new(buttons: MouseButtons) -> Self {
        Self { buttons }
    }
}

/// A raw pointer event on the capture button element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub pointer_type: PointerType,
    /// The platform's designation of the main contact point.
    pub is_primary: bool,
    pub buttons: MouseButtons,
}

impl PointerEvent {
    pub fn new(pointer_id: PointerId, pointer_type: PointerType) -> Self {
        Self {
            pointer_id,
            pointer_type,
            is_primary: true,
            buttons: MouseButtons::empty(),
        }
    }

    pub fn with_buttons(mut self, buttons: MouseButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn secondary(mut self) -> Self {
        self.is_primary = false;
        self
    }
}

/// One raw event as delivered by the host binding.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyboardEvent),
    KeyUp(KeyboardEvent),
    MouseDown(MouseEvent),
    MouseUp(MouseEvent),
    ContextMenu(MouseEvent),
    PointerDown(PointerEvent),
    PointerOver(PointerEvent),
    PointerOut(PointerEvent),
    PointerCancel(PointerEvent),
}
