//! Hotkey capture field for settings UIs.
//!
//! This library provides the state machine behind a "press your shortcut"
//! form field: it reconciles raw keyboard, mouse, and pointer events into a
//! canonical, deduplicated combination (optional primary key + ordered
//! modifier set), renders a platform-aware display string, and emits a
//! single change event when the combination actually changes.
//!
//! The concrete event loop stays out: the host binding attaches listeners
//! through the injectable [`ListenerRegistry`] capability and routes raw
//! events into [`InputCapture::dispatch`].
//!
//! # Example
//!
//! ```ignore
//! use hotkey_capture::{
//!     ElementId, InputCapture, InputEvent, KeyboardEvent, NullRegistry, Platform,
//! };
//!
//! let mut capture = InputCapture::new(Box::new(NullRegistry), ElementId(1), Platform::current());
//! capture.on_change(|event| println!("captured: {:?}", event));
//! capture.prepare(None, &[], false, true);
//! capture.dispatch(&InputEvent::KeyDown(KeyboardEvent::new("KeyK").with_ctrl()));
//! assert_eq!(capture.key(), Some("KeyK"));
//! ```

pub mod capture;
pub mod logging;

// Re-export the public surface at the crate root.
#[allow(unused_imports)]
pub use capture::{
    canonical_rank, display_string, key_label, modifier_label, CaptureOptions, CaptureState,
    ChangeCallback, ChangeEvent, ChangeHandlerId, ElementId, EventDisposition, EventKind,
    HotkeyParseError, InputCapture, InputEvent, KeyboardEvent, ListenerRegistry, Modifier,
    ModifierSet, MouseButtons, MouseEvent, NullRegistry, Platform, PointerEvent, PointerId,
    PointerType, PointerTypeFilter,
};
