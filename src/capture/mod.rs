//! Hotkey input capture subsystem.
//!
//! This module provides:
//! - Canonical capture value types (`Modifier`, `ModifierSet`, `CaptureState`)
//! - Raw event data structs mirroring what a UI-toolkit binding reports
//! - The `InputCapture` component reconciling raw events into canonical state
//! - Platform-aware display formatting
//!
//! # Architecture
//!
//! The component is a single synchronous reducer bound to two host elements
//! (a text input and an optional mouse button):
//! - `prepare` records subscriptions through the injectable
//!   [`ListenerRegistry`] capability
//! - the host binding routes raw events into [`InputCapture::dispatch`]
//! - state converges to a deterministic function of (capability flags, event
//!   sequence), and one `ChangeEvent` fires per actual change
//!
//! # Example
//!
//! ```ignore
//! use hotkey_capture::{ElementId, InputCapture, NullRegistry, Platform};
//!
//! let mut capture = InputCapture::new(Box::new(NullRegistry), ElementId(1), Platform::current());
//! capture.prepare(None, &[], false, true);
//! ```

mod events;
mod format;
mod input_capture;
mod registry;
mod types;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;


// Re-export core types (the public API of the subsystem)
pub use events::{
    InputEvent, KeyboardEvent, MouseButtons, MouseEvent, PointerEvent, PointerId, PointerType,
};
pub use format::{canonical_rank, display_string, key_label, modifier_label};
pub use input_capture::{
    CaptureOptions, ChangeCallback, ChangeEvent, ChangeHandlerId, EventDisposition, InputCapture,
    PointerTypeFilter,
};
pub use registry::{ElementId, EventKind, ListenerRegistry, NullRegistry};
pub use types::{CaptureState, HotkeyParseError, Modifier, ModifierSet, Platform};
