//! Global hotkeys.
//!
//! Callers bind shortcuts to callbacks on a [`HotkeyRegistry`]; a dedicated
//! listener thread performs the actual OS registration and runs callbacks
//! when their shortcut fires.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  Thread A   │     │  Thread B   │
//! │   bind()    │     │  unbind()   │
//! └──────┬──────┘     └──────┬──────┘
//!        │ push + wake       │ push + wake
//!        ▼                   ▼
//! ┌─────────────────────────────────────────┐
//! │   pending queue + binding table (lock)  │
//! └───────────────────┬─────────────────────┘
//!                     │ drain / lookup
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │           Listener thread               │
//! │  HotkeyBackend: register / unregister   │
//! │  wait_message → Wake | HotkeyFired(id)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`backend`]: the OS facility traits
//! - [`registry`]: `HotkeyRegistry`
//! - [`listener`]: listener thread loop and its states
//! - [`memory`]: in-process facility for tests and hosts without one

pub mod backend;
pub mod listener;
pub mod memory;
pub mod registry;

pub use backend::{BackendHandle, HotkeyBackend, ListenerMessage};
pub use listener::ListenerState;
pub use memory::{MemoryBackend, MemoryHotkeys};
pub use registry::{HotkeyCallback, HotkeyRegistry};
