//! The OS hotkey facility, as seen by the listener thread.

use std::sync::Arc;

use crate::input::Shortcut;

/// What the listener's message queue produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerMessage {
    /// Work was queued by a caller thread.
    Wake,
    /// A registered hotkey fired; carries the shortcut id.
    HotkeyFired(i32),
    /// Anything else the queue delivered.
    Other,
    /// The queue was asked to shut down.
    Quit,
    /// The queue failed and cannot be read any more.
    Error,
}

/// Hotkey facility owned by the listener thread.
///
/// A backend is created on the listener thread and never leaves it:
/// registrations on most platforms are bound to the thread that made them.
pub trait HotkeyBackend {
    /// Claim `shortcut.id()` system-wide. False if the id is taken.
    fn register(&mut self, shortcut: Shortcut) -> bool;

    /// Release `shortcut.id()`. False if this listener did not hold it.
    fn unregister(&mut self, shortcut: Shortcut) -> bool;

    /// Block until the next message arrives.
    fn wait_message(&mut self) -> ListenerMessage;

    /// Handle other threads use to reach this backend.
    fn handle(&self) -> Arc<dyn BackendHandle>;
}

/// Thread-safe side of a backend.
pub trait BackendHandle: Send + Sync {
    /// Post a [`ListenerMessage::Wake`]. False if the listener is gone.
    fn wake(&self) -> bool;

    /// Post a [`ListenerMessage::Quit`].
    fn stop(&self) -> bool;

    /// Whether any process currently holds the shortcut's key combination,
    /// probed by registering and immediately releasing it.
    fn is_claimed(&self, shortcut: Shortcut) -> bool;
}
