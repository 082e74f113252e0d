//! Global hotkeys through `RegisterHotKey`.
//!
//! Hotkeys registered without a window are bound to the registering
//! thread and arrive as `WM_HOTKEY` on its message queue, so the backend is
//! created on, and never leaves, the listener thread. Other threads reach
//! it with `PostThreadMessageW`.

use std::sync::Arc;

use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetMessageW, PeekMessageW, PostThreadMessageW, MSG, PM_NOREMOVE, WM_APP, WM_HOTKEY, WM_QUIT,
    WM_USER,
};

use crate::error::Result;
use crate::hotkeys::{BackendHandle, HotkeyBackend, HotkeyRegistry, ListenerMessage};
use crate::input::Shortcut;
use crate::model::PROBE_HOTKEY_ID;

/// Posted by callers when the pending queue has work.
const WM_HOTKEYS_PENDING: u32 = WM_APP;

/// Listener-side Win32 hotkey facility.
pub struct Win32Hotkeys {
    thread_id: u32,
}

impl Win32Hotkeys {
    /// Must run on the thread that will call `wait_message`.
    pub fn new() -> Result<Self> {
        unsafe {
            // Creates the thread's message queue so early posts are kept.
            let mut msg = MSG::default();
            let _ = PeekMessageW(&mut msg, None, WM_USER, WM_USER, PM_NOREMOVE);
            Ok(Self {
                thread_id: GetCurrentThreadId(),
            })
        }
    }
}

fn modifiers_of(shortcut: Shortcut) -> HOT_KEY_MODIFIERS {
    HOT_KEY_MODIFIERS(shortcut.modifiers.bits())
}

impl HotkeyBackend for Win32Hotkeys {
    fn register(&mut self, shortcut: Shortcut) -> bool {
        unsafe {
            RegisterHotKey(
                None,
                shortcut.id(),
                modifiers_of(shortcut),
                shortcut.key.code(),
            )
        }
        .is_ok()
    }

    fn unregister(&mut self, shortcut: Shortcut) -> bool {
        unsafe { UnregisterHotKey(None, shortcut.id()) }.is_ok()
    }

    fn wait_message(&mut self) -> ListenerMessage {
        let mut msg = MSG::default();
        let ret = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        match ret.0 {
            0 => ListenerMessage::Quit,
            -1 => ListenerMessage::Error,
            _ => match msg.message {
                WM_HOTKEYS_PENDING => ListenerMessage::Wake,
                WM_HOTKEY => ListenerMessage::HotkeyFired(msg.wParam.0 as i32),
                _ => ListenerMessage::Other,
            },
        }
    }

    fn handle(&self) -> Arc<dyn BackendHandle> {
        Arc::new(Win32Handle {
            thread_id: self.thread_id,
        })
    }
}

struct Win32Handle {
    thread_id: u32,
}

impl BackendHandle for Win32Handle {
    fn wake(&self) -> bool {
        unsafe { PostThreadMessageW(self.thread_id, WM_HOTKEYS_PENDING, WPARAM(0), LPARAM(0)) }
            .is_ok()
    }

    fn stop(&self) -> bool {
        unsafe { PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) }.is_ok()
    }

    fn is_claimed(&self, shortcut: Shortcut) -> bool {
        unsafe {
            if RegisterHotKey(
                None,
                PROBE_HOTKEY_ID,
                modifiers_of(shortcut),
                shortcut.key.code(),
            )
            .is_ok()
            {
                let _ = UnregisterHotKey(None, PROBE_HOTKEY_ID);
                false
            } else {
                true
            }
        }
    }
}

/// Start a [`HotkeyRegistry`] backed by the Win32 hotkey facility.
pub fn spawn_registry() -> Result<HotkeyRegistry> {
    HotkeyRegistry::spawn(Win32Hotkeys::new)
}
