//! Hotkey capture field.
//!
//! Reconciles raw, platform-inconsistent input events (keyboard, mouse,
//! pointer) into a canonical captured combination and notifies listeners
//! when the combination actually changes.
//!
//! ## Features
//! - Captures modifier keys plus an optional primary key
//! - Mouse buttons as pseudo-modifiers (opt-in per `prepare`)
//! - Pen misclassification workaround for pointer events
//! - Single change-event contract; programmatic updates stay silent
//!
//! ## Usage
//! ```rust,ignore
//! let mut capture = InputCapture::new(Box::new(registry), input_el, Platform::current())
//!     .with_button_element(button_el)
//!     .with_pointer_type_filter(|ty| ty != PointerType::Touch);
//! capture.on_change(|event| println!("captured {:?}+{:?}", event.modifiers, event.key));
//! capture.prepare(None, &[], true, true);
//! // host binding routes raw events:
//! let disposition = capture.dispatch(&InputEvent::KeyDown(key_event));
//! if disposition.default_claimed { /* prevent the toolkit default */ }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::events::{InputEvent, KeyboardEvent, MouseEvent, PointerEvent, PointerId, PointerType};
use super::format;
use super::registry::{ElementId, EventKind, ListenerRegistry};
use super::types::{CaptureState, Modifier, ModifierSet, Platform};

/// Callback invoked when the captured combination actually changes.
pub type ChangeCallback = Box<dyn FnMut(&ChangeEvent)>;

/// Predicate gating which pointer device classes may contribute modifiers.
pub type PointerTypeFilter = Box<dyn Fn(PointerType) -> bool>;

/// Payload of the single event kind this component emits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub modifiers: ModifierSet,
    pub key: Option<String>,
}

/// Handle returned by [`InputCapture::on_change`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChangeHandlerId(u64);

/// Whether a dispatched event claimed its default action.
///
/// The host binding is expected to call its toolkit's prevent-default
/// equivalent when `default_claimed` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventDisposition {
    pub default_claimed: bool,
}

impl EventDisposition {
    fn claimed() -> Self {
        Self {
            default_claimed: true,
        }
    }

    fn ignored() -> Self {
        Self::default()
    }
}

/// Capability flags fixed for the lifetime of one `prepare` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// Mouse buttons may join the combination as pseudo-modifiers.
    #[serde(default)]
    pub mouse_modifiers: bool,
    /// A primary (non-modifier) key may be captured.
    #[serde(default)]
    pub key_capture: bool,
}

/// Key slot update for the reducer: leave unchanged, or set (possibly to
/// absent).
enum KeyUpdate {
    Keep,
    Set(Option<String>),
}

/// Hotkey capture field component.
///
/// Owns the single mutable [`CaptureState`]; all external interaction goes
/// through the documented methods and the change event. Handlers run to
/// completion synchronously and never re-enter the component.
pub struct InputCapture {
    registry: Box<dyn ListenerRegistry>,
    input_element: ElementId,
    button_element: Option<ElementId>,
    platform: Platform,
    pointer_type_filter: Option<PointerTypeFilter>,

    options: CaptureOptions,
    state: CaptureState,
    display: String,
    /// Pointer ids observed as pen-type via pointer-over. Some platforms
    /// report pen pointer-downs as touch; ids in here are forced to pen.
    pen_pointers: HashSet<PointerId>,
    prepared: bool,
    mouse_listeners_attached: bool,

    change_handlers: Vec<(ChangeHandlerId, ChangeCallback)>,
    next_handler_id: u64,
}

impl InputCapture {
    pub fn new(
        registry: Box<dyn ListenerRegistry>,
        input_element: ElementId,
        platform: Platform,
    ) -> Self {
        Self {
            registry,
            input_element,
            button_element: None,
            platform,
            pointer_type_filter: None,
            options: CaptureOptions::default(),
            state: CaptureState::default(),
            display: String::new(),
            pen_pointers: HashSet::new(),
            prepared: false,
            mouse_listeners_attached: false,
            change_handlers: Vec::new(),
            next_handler_id: 0,
        }
    }

    /// Set the button element used for mouse/pointer capture. Without one,
    /// mouse-modifier capture stays inert regardless of `prepare` flags.
    pub fn with_button_element(mut self, element: ElementId) -> Self {
        self.button_element = Some(element);
        self
    }

    /// Set the predicate gating which pointer device classes may contribute
    /// modifiers. Without one, all pointer-based capture is inert.
    pub fn with_pointer_type_filter(
        mut self,
        filter: impl Fn(PointerType) -> bool + 'static,
    ) -> Self {
        self.pointer_type_filter = Some(Box::new(filter));
        self
    }

    // === Getters ===

    pub fn modifiers(&self) -> &ModifierSet {
        &self.state.modifiers
    }

    pub fn key(&self) -> Option<&str> {
        self.state.key.as_deref()
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    /// The rendered display string for the current combination.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    // === Change notification ===

    /// Register a change callback. Fires synchronously, only for user-driven
    /// updates that actually change the combination.
    pub fn on_change(&mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> ChangeHandlerId {
        let id = ChangeHandlerId(self.next_handler_id);
        self.next_handler_id += 1;
        self.change_handlers.push((id, Box::new(callback)));
        id
    }

    /// Remove a change callback. Returns false if the id was already gone.
    pub fn off_change(&mut self, id: ChangeHandlerId) -> bool {
        let before = self.change_handlers.len();
        self.change_handlers.retain(|(handler_id, _)| *handler_id != id);
        self.change_handlers.len() != before
    }

    fn emit_change(&mut self) {
        let event = ChangeEvent {
            modifiers: self.state.modifiers.clone(),
            key: self.state.key.clone(),
        };
        for (_, callback) in self.change_handlers.iter_mut() {
            callback(&event);
        }
    }

    // === Lifecycle ===

    /// Attach the field: tear down any previous subscriptions, store
    /// capability flags, seed the state, and subscribe to raw events.
    ///
    /// Mouse/pointer subscriptions are attached only when
    /// `mouse_modifiers` is set AND a button element was configured.
    pub fn prepare(
        &mut self,
        key: Option<&str>,
        modifiers: &[Modifier],
        mouse_modifiers: bool,
        key_capture: bool,
    ) {
        self.cleanup();
        self.options = CaptureOptions {
            mouse_modifiers,
            key_capture,
        };
        self.set_input(key, modifiers);

        self.registry.subscribe(self.input_element, EventKind::KeyDown);
        self.registry.subscribe(self.input_element, EventKind::KeyUp);

        if mouse_modifiers {
            if let Some(button) = self.button_element {
                for kind in [
                    EventKind::MouseDown,
                    EventKind::MouseUp,
                    EventKind::ContextMenu,
                    EventKind::PointerDown,
                    EventKind::PointerOver,
                    EventKind::PointerOut,
                    EventKind::PointerCancel,
                ] {
                    self.registry.subscribe(button, kind);
                }
                self.mouse_listeners_attached = true;
            }
        }

        self.prepared = true;
        debug!(
            event_type = "capture_lifecycle",
            action = "prepare",
            mouse_modifiers,
            key_capture,
            initial = %self.state.to_canonical_string(),
            "Capture field prepared"
        );
    }

    /// Replace the combination wholesale without emitting a change event.
    /// Used for initialization, not for user-driven updates.
    pub fn set_input(&mut self, key: Option<&str>, modifiers: &[Modifier]) {
        self.state.key = key.map(str::to_owned);
        self.state.modifiers = ModifierSet::from_modifiers(modifiers.iter().copied());
        self.refresh_display();
        trace!(
            event_type = "capture_state",
            action = "set_input",
            state = %self.state.to_canonical_string(),
            "State replaced programmatically"
        );
    }

    /// Detach all subscriptions and reset to an empty, unconfigured field.
    /// Idempotent; safe to call before any `prepare`.
    pub fn cleanup(&mut self) {
        self.registry.unsubscribe_all();
        self.mouse_listeners_attached = false;
        self.prepared = false;
        self.options = CaptureOptions::default();
        self.state = CaptureState::default();
        self.pen_pointers.clear();
        self.refresh_display();
    }

    /// Reset to empty modifiers and absent key through the user-driven
    /// update path: emits a change event if the state differed from empty.
    pub fn clear_inputs(&mut self) {
        self.update_modifiers(Vec::new(), KeyUpdate::Set(None));
    }

    // === Event dispatch ===

    /// Feed one raw event through the reducer.
    ///
    /// Events arriving after `cleanup` (or before any `prepare`) are inert
    /// and claim nothing.
    pub fn dispatch(&mut self, event: &InputEvent) -> EventDisposition {
        if !self.prepared {
            return EventDisposition::ignored();
        }
        match event {
            InputEvent::KeyDown(key_event) => self.on_key_down(key_event),
            // Releasing a key never un-sets a captured combination; only
            // explicit clear or re-capture changes state.
            InputEvent::KeyUp(_) => EventDisposition::claimed(),
            InputEvent::MouseDown(mouse_event) => self.on_mouse_down(mouse_event),
            InputEvent::MouseUp(_) | InputEvent::ContextMenu(_) => {
                if self.mouse_listeners_attached {
                    EventDisposition::claimed()
                } else {
                    EventDisposition::ignored()
                }
            }
            InputEvent::PointerDown(pointer_event) => self.on_pointer_down(pointer_event),
            InputEvent::PointerOver(pointer_event) => {
                if self.mouse_listeners_attached {
                    self.on_pointer_over(pointer_event);
                }
                EventDisposition::ignored()
            }
            InputEvent::PointerOut(pointer_event) | InputEvent::PointerCancel(pointer_event) => {
                if self.mouse_listeners_attached {
                    self.pen_pointers.remove(&pointer_event.pointer_id);
                }
                EventDisposition::ignored()
            }
        }
    }

    fn on_key_down(&mut self, event: &KeyboardEvent) -> EventDisposition {
        let code = normalize_code(&event.code);
        if self.options.key_capture {
            let modifiers = active_keyboard_modifiers(event);
            let key = match code {
                Some(code) if !is_modifier_code(&code) => KeyUpdate::Set(Some(code)),
                _ => KeyUpdate::Set(None),
            };
            self.update_modifiers(modifiers, key);
        } else {
            match code.as_deref() {
                Some("Escape") | Some("Backspace") => self.clear_inputs(),
                _ => {
                    let mut modifiers = self.state.modifiers.to_vec();
                    modifiers.extend(active_keyboard_modifiers(event));
                    self.update_modifiers(modifiers, KeyUpdate::Keep);
                }
            }
        }
        EventDisposition::claimed()
    }

    fn on_mouse_down(&mut self, event: &MouseEvent) -> EventDisposition {
        if !self.mouse_listeners_attached {
            return EventDisposition::ignored();
        }
        let mut modifiers = self.state.modifiers.to_vec();
        modifiers.extend(event.buttons.to_modifiers());
        self.update_modifiers(modifiers, KeyUpdate::Keep);
        EventDisposition::claimed()
    }

    fn on_pointer_down(&mut self, event: &PointerEvent) -> EventDisposition {
        if !self.mouse_listeners_attached {
            return EventDisposition::ignored();
        }
        let effective_type = if self.pen_pointers.contains(&event.pointer_id) {
            PointerType::Pen
        } else {
            event.pointer_type
        };
        let supported = self
            .pointer_type_filter
            .as_ref()
            .is_some_and(|filter| filter(effective_type));
        if !event.is_primary || !supported {
            trace!(
                event_type = "capture_pointer",
                action = "rejected",
                pointer_id = event.pointer_id,
                pointer_type = ?effective_type,
                is_primary = event.is_primary,
                "Pointer-down not eligible for modifier capture"
            );
            return EventDisposition::ignored();
        }
        let mut modifiers = self.state.modifiers.to_vec();
        modifiers.extend(event.buttons.to_modifiers());
        self.update_modifiers(modifiers, KeyUpdate::Keep);
        EventDisposition::claimed()
    }

    fn on_pointer_over(&mut self, event: &PointerEvent) {
        if event.pointer_type == PointerType::Pen {
            self.pen_pointers.insert(event.pointer_id);
        }
    }

    // === Update policy ===

    /// Canonicalize the candidate modifier list, apply the key candidate,
    /// refresh the display, and emit exactly one change event iff either
    /// slot actually changed.
    fn update_modifiers(&mut self, candidates: Vec<Modifier>, key: KeyUpdate) {
        let canonical = ModifierSet::from_modifiers(candidates);
        let mut changed = false;

        if let KeyUpdate::Set(candidate) = key {
            if candidate != self.state.key {
                self.state.key = candidate;
                changed = true;
            }
        }
        if canonical != self.state.modifiers {
            self.state.modifiers = canonical;
            changed = true;
        }

        // Display refresh is cheap and idempotent; it runs even for no-ops.
        self.refresh_display();

        if changed {
            debug!(
                event_type = "capture_change",
                state = %self.state.to_canonical_string(),
                display = %self.display,
                "Captured combination changed"
            );
            self.emit_change();
        }
    }

    fn refresh_display(&mut self) {
        self.display =
            format::display_string(self.state.key.as_deref(), &self.state.modifiers, self.platform);
    }
}

/// `""` and `"Unidentified"` codes carry no key information.
fn normalize_code(code: &str) -> Option<String> {
    if code.is_empty() || code == "Unidentified" {
        None
    } else {
        Some(code.to_string())
    }
}

/// Whether a key code names a modifier key rather than a primary key.
fn is_modifier_code(code: &str) -> bool {
    matches!(
        code,
        "Alt" | "AltLeft"
            | "AltRight"
            | "Control"
            | "ControlLeft"
            | "ControlRight"
            | "Meta"
            | "MetaLeft"
            | "MetaRight"
            | "Shift"
            | "ShiftLeft"
            | "ShiftRight"
            | "OS"
            | "OSLeft"
            | "OSRight"
    )
}

fn is_meta_code(code: &str) -> bool {
    matches!(code, "Meta" | "MetaLeft" | "MetaRight" | "OSLeft" | "OSRight")
}

/// Active modifier set from a keyboard event's reported flags.
///
/// Some platforms omit the meta flag when the Meta key itself goes down in
/// combination with certain other keys; if the code names the Meta key and
/// meta is not already reported, it is forced in. Shift+Alt is known to
/// misreport as including Meta, so that exact pair is left alone.
fn active_keyboard_modifiers(event: &KeyboardEvent) -> Vec<Modifier> {
    let mut modifiers = Vec::with_capacity(4);
    if event.ctrl {
        modifiers.push(Modifier::Control);
    }
    if event.alt {
        modifiers.push(Modifier::Alt);
    }
    if event.shift {
        modifiers.push(Modifier::Shift);
    }
    if event.meta {
        modifiers.push(Modifier::Meta);
    }

    let exactly_shift_alt = event.shift && event.alt && !event.ctrl && !event.meta;
    if is_meta_code(&event.code) && !event.meta && !exactly_shift_alt {
        modifiers.push(Modifier::Meta);
    }
    modifiers
}
