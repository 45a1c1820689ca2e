//! Injectable event-listener registry.
//!
//! `InputCapture` never touches a concrete event loop. During `prepare` it
//! records the (element, event) subscriptions it needs through this trait;
//! the host binding attaches real listeners and feeds the resulting events
//! back via `InputCapture::dispatch`. `cleanup` detaches everything in one
//! call, so a registry implementation only has to track its own handles.

/// Opaque handle to a host UI element (the text input or the mouse button).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// The raw event kinds the component subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    MouseDown,
    MouseUp,
    ContextMenu,
    PointerDown,
    PointerOver,
    PointerOut,
    PointerCancel,
}

/// Capability for attaching and detaching raw event listeners.
pub trait ListenerRegistry {
    /// Attach a listener for `kind` on `element`.
    fn subscribe(&mut self, element: ElementId, kind: EventKind);

    /// Detach every listener this component attached. Must be a no-op when
    /// nothing is attached.
    fn unsubscribe_all(&mut self);
}

/// Registry that attaches nothing.
///
/// For hosts that route events to `dispatch` themselves and have no listener
/// bookkeeping of their own.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRegistry;

impl ListenerRegistry for NullRegistry {
    fn subscribe(&mut self, _element: ElementId, _kind: EventKind) {}

    fn unsubscribe_all(&mut self) {}
}
