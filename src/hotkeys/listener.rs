//! The hotkey listener thread.
//!
//! The listener owns the backend and loops on its message queue:
//!
//! ```text
//!            Wake                      HotkeyFired(id)
//!   Idle ───────────► ProcessingQueue   Idle ──────────► Dispatching
//!    ▲                      │            ▲                    │
//!    └──────────────────────┘            └────────────────────┘
//!
//!   Quit / Error ──► Stopped (every remaining binding is unregistered)
//! ```
//!
//! Pending operations are applied in the order they were queued. A failed
//! registration is dropped: no binding is added and only the optional
//! acknowledgement channel learns about it.

use std::collections::{BTreeMap, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;

use parking_lot::Mutex;

use super::backend::{HotkeyBackend, ListenerMessage};
use super::registry::HotkeyCallback;
use crate::diagnostics::ErrorStream;
use crate::error::Error;
use crate::input::Shortcut;

/// Where the listener thread currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
    /// Started but not yet waiting on its queue.
    Starting,
    /// Blocked on the message queue.
    Idle,
    /// Applying queued register/unregister operations.
    ProcessingQueue,
    /// Running a bound callback.
    Dispatching,
    /// The thread has wound down.
    Stopped,
}

/// A queued register or unregister request.
pub(crate) enum PendingOp {
    Register {
        shortcut: Shortcut,
        callback: HotkeyCallback,
        ack: Option<Sender<bool>>,
    },
    Unregister {
        shortcut: Shortcut,
        ack: Option<Sender<bool>>,
    },
}

pub(crate) struct Tables {
    pub(crate) pending: VecDeque<PendingOp>,
    pub(crate) bindings: BTreeMap<Shortcut, HotkeyCallback>,
    pub(crate) state: ListenerState,
}

/// State shared between the listener and its callers. The queue, the
/// binding table and the state all sit behind the same lock.
pub(crate) struct Shared {
    pub(crate) tables: Mutex<Tables>,
}

impl Shared {
    pub(crate) fn new() -> Self {
        Self {
            tables: Mutex::new(Tables {
                pending: VecDeque::new(),
                bindings: BTreeMap::new(),
                state: ListenerState::Starting,
            }),
        }
    }

    fn set_state(&self, state: ListenerState) {
        self.tables.lock().state = state;
    }
}

/// Body of the listener thread.
pub(crate) fn run<B: HotkeyBackend>(
    mut backend: B,
    shared: &Shared,
    diagnostics: Option<&ErrorStream>,
) {
    shared.set_state(ListenerState::Idle);

    let clean = loop {
        match backend.wait_message() {
            ListenerMessage::Wake => {
                shared.set_state(ListenerState::ProcessingQueue);
                drain(&mut backend, shared, diagnostics);
                shared.set_state(ListenerState::Idle);
            }
            ListenerMessage::HotkeyFired(id) => {
                shared.set_state(ListenerState::Dispatching);
                dispatch(shared, id);
                shared.set_state(ListenerState::Idle);
            }
            ListenerMessage::Other => {}
            ListenerMessage::Quit => break true,
            ListenerMessage::Error => break false,
        }
    };

    let remaining = {
        let mut tables = shared.tables.lock();
        tables.state = ListenerState::Stopped;
        tables.pending.clear();
        std::mem::take(&mut tables.bindings)
    };
    for shortcut in remaining.keys() {
        if !backend.unregister(*shortcut) {
            log::warn!("failed to release hotkey {} on shutdown", shortcut);
        }
    }

    if clean {
        log::info!("hotkey listener stopped");
    } else {
        match diagnostics {
            Some(d) => d.record(&Error::ListenerStopped),
            None => log::warn!("{}", Error::ListenerStopped),
        }
    }
}

fn drain<B: HotkeyBackend>(backend: &mut B, shared: &Shared, diagnostics: Option<&ErrorStream>) {
    loop {
        let Some(op) = shared.tables.lock().pending.pop_front() else {
            break;
        };
        match op {
            PendingOp::Register {
                shortcut,
                callback,
                ack,
            } => {
                let bound = shared
                    .tables
                    .lock()
                    .bindings
                    .get_key_value(&shortcut)
                    .map(|(registered, _)| *registered);
                let ok = match bound {
                    None => backend.register(shortcut),
                    Some(registered) if registered.is_repeatable() == shortcut.is_repeatable() => {
                        true
                    }
                    Some(registered) => match reregister(backend, registered, shortcut) {
                        Rebind::Replaced => true,
                        Rebind::Restored => false,
                        Rebind::Lost => {
                            shared.tables.lock().bindings.remove(&shortcut);
                            false
                        }
                    },
                };
                if ok {
                    let mut tables = shared.tables.lock();
                    // Replace the key too; it carries the repeat flag.
                    tables.bindings.remove(&shortcut);
                    tables.bindings.insert(shortcut, callback);
                    log::debug!("bound hotkey {} (id {})", shortcut, shortcut.id());
                } else {
                    let text = format!(
                        "hotkey {} (id {}) could not be registered; request dropped",
                        shortcut,
                        shortcut.id()
                    );
                    match diagnostics {
                        Some(d) => d.report_text(text),
                        None => log::warn!("{}", text),
                    }
                }
                acknowledge(ack, ok);
            }
            PendingOp::Unregister { shortcut, ack } => {
                let ok = backend.unregister(shortcut);
                if ok {
                    shared.tables.lock().bindings.remove(&shortcut);
                    log::debug!("unbound hotkey {}", shortcut);
                } else {
                    log::debug!("hotkey {} was not registered by this listener", shortcut);
                }
                acknowledge(ack, ok);
            }
        }
    }
}

enum Rebind {
    /// The new registration is in place.
    Replaced,
    /// The new registration failed; the previous one is back.
    Restored,
    /// Neither registration could be made.
    Lost,
}

/// Swap the OS registration of a bound id for one with a different repeat
/// flag, restoring the previous registration on failure.
fn reregister<B: HotkeyBackend>(backend: &mut B, registered: Shortcut, shortcut: Shortcut) -> Rebind {
    backend.unregister(registered);
    if backend.register(shortcut) {
        Rebind::Replaced
    } else if backend.register(registered) {
        Rebind::Restored
    } else {
        log::warn!("hotkey {} lost its registration while rebinding", registered);
        Rebind::Lost
    }
}

fn acknowledge(ack: Option<Sender<bool>>, ok: bool) {
    if let Some(ack) = ack {
        // The caller may have stopped waiting.
        let _ = ack.send(ok);
    }
}

fn dispatch(shared: &Shared, id: i32) {
    let shortcut = Shortcut::from_id(id);
    let callback = shared.tables.lock().bindings.get(&shortcut).cloned();

    match callback {
        Some(callback) => {
            log::debug!("hotkey {} fired", shortcut);
            if panic::catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
                log::error!("callback for hotkey {} panicked", shortcut);
            }
        }
        None => log::debug!("hotkey id {} fired with no binding", id),
    }
}
