//! In-process hotkey facility.
//!
//! [`MemoryHotkeys`] plays the part of the operating system: it keeps the
//! table of claimed shortcut ids and delivers key presses to the listener
//! that claimed them. Other "processes" can be simulated with
//! [`claim_external`](MemoryHotkeys::claim_external).
//!
//! This is pure Rust with no external dependencies beyond std, which makes
//! the whole registry testable on every platform.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use parking_lot::Mutex;

use super::backend::{BackendHandle, HotkeyBackend, ListenerMessage};
use crate::input::Shortcut;

#[derive(Debug, Clone, Copy)]
enum Claim {
    /// Held by another process.
    External,
    /// Held by the listener attached to this facility, as it was registered.
    Listener(Shortcut),
}

#[derive(Default)]
struct System {
    claims: Mutex<HashMap<i32, Claim>>,
    listener: Mutex<Option<Sender<ListenerMessage>>>,
}

/// A simulated system-wide hotkey table. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct MemoryHotkeys {
    system: Arc<System>,
}

impl MemoryHotkeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the backend for a listener thread. A facility serves one
    /// listener at a time; a new backend replaces the previous one.
    pub fn backend(&self) -> MemoryBackend {
        let (tx, rx) = mpsc::channel();
        *self.system.listener.lock() = Some(tx.clone());
        MemoryBackend {
            hotkeys: self.clone(),
            tx,
            rx,
        }
    }

    /// Claim a shortcut on behalf of some other process.
    pub fn claim_external(&self, shortcut: Shortcut) -> bool {
        let mut claims = self.system.claims.lock();
        if claims.contains_key(&shortcut.id()) {
            return false;
        }
        claims.insert(shortcut.id(), Claim::External);
        true
    }

    pub fn release_external(&self, shortcut: Shortcut) -> bool {
        let mut claims = self.system.claims.lock();
        if matches!(claims.get(&shortcut.id()), Some(Claim::External)) {
            claims.remove(&shortcut.id());
            true
        } else {
            false
        }
    }

    /// Whether anyone holds the shortcut.
    pub fn is_claimed(&self, shortcut: Shortcut) -> bool {
        self.system.claims.lock().contains_key(&shortcut.id())
    }

    /// Whether the attached listener holds the shortcut.
    pub fn is_held_by_listener(&self, shortcut: Shortcut) -> bool {
        self.registered_as(shortcut).is_some()
    }

    /// The shortcut exactly as the listener registered it, repeat flag
    /// included.
    pub fn registered_as(&self, shortcut: Shortcut) -> Option<Shortcut> {
        match self.system.claims.lock().get(&shortcut.id()) {
            Some(Claim::Listener(registered)) => Some(*registered),
            _ => None,
        }
    }

    /// Simulate the user pressing `shortcut`. Only a shortcut claimed by the
    /// listener produces a notification, as with a real OS.
    pub fn press(&self, shortcut: Shortcut) -> bool {
        self.is_held_by_listener(shortcut) && self.post(ListenerMessage::HotkeyFired(shortcut.id()))
    }

    /// Deliver an arbitrary message to the listener.
    pub fn post(&self, message: ListenerMessage) -> bool {
        match self.system.listener.lock().as_ref() {
            Some(tx) => tx.send(message).is_ok(),
            None => false,
        }
    }
}

/// Listener-side backend of a [`MemoryHotkeys`] facility.
pub struct MemoryBackend {
    hotkeys: MemoryHotkeys,
    tx: Sender<ListenerMessage>,
    rx: Receiver<ListenerMessage>,
}

impl HotkeyBackend for MemoryBackend {
    fn register(&mut self, shortcut: Shortcut) -> bool {
        let mut claims = self.hotkeys.system.claims.lock();
        if claims.contains_key(&shortcut.id()) {
            return false;
        }
        claims.insert(shortcut.id(), Claim::Listener(shortcut));
        true
    }

    fn unregister(&mut self, shortcut: Shortcut) -> bool {
        let mut claims = self.hotkeys.system.claims.lock();
        if matches!(claims.get(&shortcut.id()), Some(Claim::Listener(_))) {
            claims.remove(&shortcut.id());
            true
        } else {
            false
        }
    }

    fn wait_message(&mut self) -> ListenerMessage {
        self.rx.recv().unwrap_or(ListenerMessage::Error)
    }

    fn handle(&self) -> Arc<dyn BackendHandle> {
        Arc::new(MemoryHandle {
            hotkeys: self.hotkeys.clone(),
            tx: self.tx.clone(),
        })
    }
}

struct MemoryHandle {
    hotkeys: MemoryHotkeys,
    tx: Sender<ListenerMessage>,
}

impl BackendHandle for MemoryHandle {
    fn wake(&self) -> bool {
        self.tx.send(ListenerMessage::Wake).is_ok()
    }

    fn stop(&self) -> bool {
        self.tx.send(ListenerMessage::Quit).is_ok()
    }

    fn is_claimed(&self, shortcut: Shortcut) -> bool {
        self.hotkeys.is_claimed(shortcut)
    }
}
