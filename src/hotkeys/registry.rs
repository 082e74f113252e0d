//! The hotkey registry: binding table plus the listener that serves it.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::backend::{BackendHandle, HotkeyBackend};
use super::listener::{self, ListenerState, PendingOp, Shared};
use crate::diagnostics::ErrorStream;
use crate::error::{Error, Result};
use crate::input::Shortcut;

/// Callback run on the listener thread when its shortcut fires.
pub type HotkeyCallback = Arc<dyn Fn() + Send + Sync>;

/// Global hotkey bindings served by a dedicated listener thread.
///
/// The registry is an ordinary value: the host application creates one at
/// its composition root and shares it by reference. The listener lives as
/// long as the registry; dropping the registry stops the listener, which
/// releases every hotkey still bound.
///
/// `bind` and `unbind` only queue a request and wake the listener; the OS
/// call happens on the listener thread shortly after. Use
/// [`bind_with_ack`](Self::bind_with_ack) to learn whether a registration
/// succeeded.
pub struct HotkeyRegistry {
    shared: Arc<Shared>,
    handle: Arc<dyn BackendHandle>,
    thread: Option<JoinHandle<()>>,
}

impl HotkeyRegistry {
    /// Start a listener thread. `factory` runs on that thread and builds the
    /// backend it will own.
    pub fn spawn<B, F>(factory: F) -> Result<Self>
    where
        B: HotkeyBackend + 'static,
        F: FnOnce() -> Result<B> + Send + 'static,
    {
        Self::start(factory, None)
    }

    /// Like [`spawn`](Self::spawn), reporting dropped registrations and an
    /// abnormal listener exit into `diagnostics` instead of the log.
    pub fn spawn_with_diagnostics<B, F>(factory: F, diagnostics: Arc<ErrorStream>) -> Result<Self>
    where
        B: HotkeyBackend + 'static,
        F: FnOnce() -> Result<B> + Send + 'static,
    {
        Self::start(factory, Some(diagnostics))
    }

    fn start<B, F>(factory: F, diagnostics: Option<Arc<ErrorStream>>) -> Result<Self>
    where
        B: HotkeyBackend + 'static,
        F: FnOnce() -> Result<B> + Send + 'static,
    {
        let shared = Arc::new(Shared::new());
        let (ready_tx, ready_rx) = mpsc::channel();

        let thread_shared = Arc::clone(&shared);
        let thread = thread::Builder::new()
            .name("hotkey-listener".to_string())
            .spawn(move || {
                let backend = match factory() {
                    Ok(backend) => backend,
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(backend.handle()));
                listener::run(backend, &thread_shared, diagnostics.as_deref());
            })
            .map_err(|e| Error::ListenerSpawn(e.to_string()))?;

        let handle = match ready_rx.recv() {
            Ok(Ok(handle)) => handle,
            Ok(Err(err)) => {
                let _ = thread.join();
                return Err(Error::ListenerSpawn(err.to_string()));
            }
            Err(_) => {
                let _ = thread.join();
                return Err(Error::ListenerSpawn(
                    "listener exited before it was ready".to_string(),
                ));
            }
        };

        log::info!("hotkey listener started");
        Ok(Self {
            shared,
            handle,
            thread: Some(thread),
        })
    }

    /// Whether any process holds the shortcut's key combination, asked of
    /// the OS directly rather than of the binding table.
    pub fn is_registered(&self, shortcut: Shortcut) -> bool {
        self.handle.is_claimed(shortcut)
    }

    /// Queue a registration of `shortcut`. A shortcut already bound here gets
    /// its callback replaced; if its repeat flag changed, the OS registration
    /// is redone with the new flag. If the OS refuses the registration it is
    /// dropped silently.
    pub fn bind<F>(&self, shortcut: Shortcut, callback: F) -> Result<()>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.enqueue(PendingOp::Register {
            shortcut,
            callback: Arc::new(callback),
            ack: None,
        })
    }

    /// [`bind`](Self::bind) when `enable` is true, [`unbind`](Self::unbind)
    /// otherwise.
    pub fn set_bound<F>(&self, shortcut: Shortcut, callback: F, enable: bool) -> Result<()>
    where
        F: Fn() + Send + Sync + 'static,
    {
        if enable {
            self.bind(shortcut, callback)
        } else {
            self.unbind(shortcut)
        }
    }

    /// Like [`bind`](Self::bind), with a channel that receives `true` once
    /// the binding is in place or `false` if the OS refused it.
    pub fn bind_with_ack<F>(&self, shortcut: Shortcut, callback: F) -> Result<Receiver<bool>>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let (tx, rx) = mpsc::channel();
        self.enqueue(PendingOp::Register {
            shortcut,
            callback: Arc::new(callback),
            ack: Some(tx),
        })?;
        Ok(rx)
    }

    /// Queue the release of `shortcut`.
    pub fn unbind(&self, shortcut: Shortcut) -> Result<()> {
        self.enqueue(PendingOp::Unregister {
            shortcut,
            ack: None,
        })
    }

    /// Like [`unbind`](Self::unbind), with a channel that receives whether
    /// the OS released the hotkey.
    pub fn unbind_with_ack(&self, shortcut: Shortcut) -> Result<Receiver<bool>> {
        let (tx, rx) = mpsc::channel();
        self.enqueue(PendingOp::Unregister {
            shortcut,
            ack: Some(tx),
        })?;
        Ok(rx)
    }

    /// Callback currently bound to `shortcut`. Requests still in the queue
    /// are not reflected.
    pub fn callback_for(&self, shortcut: Shortcut) -> Option<HotkeyCallback> {
        self.shared.tables.lock().bindings.get(&shortcut).cloned()
    }

    /// Shortcuts currently bound, ordered by id.
    pub fn bound_shortcuts(&self) -> Vec<Shortcut> {
        self.shared.tables.lock().bindings.keys().copied().collect()
    }

    pub fn listener_state(&self) -> ListenerState {
        self.shared.tables.lock().state
    }

    pub fn is_listening(&self) -> bool {
        self.listener_state() != ListenerState::Stopped
    }

    fn enqueue(&self, op: PendingOp) -> Result<()> {
        {
            let mut tables = self.shared.tables.lock();
            if tables.state == ListenerState::Stopped {
                return Err(Error::ListenerStopped);
            }
            tables.pending.push_back(op);
        }
        if self.handle.wake() {
            Ok(())
        } else {
            Err(Error::ListenerStopped)
        }
    }
}

impl Drop for HotkeyRegistry {
    fn drop(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        if !self.handle.stop() {
            log::debug!("hotkey listener was already gone");
        }
        // A callback dropping the last handle runs on the listener itself.
        if thread.thread().id() != thread::current().id() && thread.join().is_err() {
            log::error!("hotkey listener thread panicked");
        }
    }
}
