//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by the animation engine, the hotkey registry and the
/// settings store.
#[derive(Error, Debug)]
pub enum Error {
    /// A linear path generator needs a finite, strictly positive speed.
    #[error("invalid path speed {0}: must be finite and greater than zero")]
    InvalidSpeed(f64),

    /// A single platform call failed.
    #[error("{operation} failed (code {code})")]
    Platform { operation: &'static str, code: u32 },

    /// A frame of an animated transition could not be applied. The window is
    /// left at the last frame that succeeded.
    #[error("frame {frame} of the transition was rejected: {source}")]
    FrameRejected {
        frame: usize,
        #[source]
        source: Box<Error>,
    },

    /// The hotkey listener thread has wound down and accepts no more work.
    #[error("hotkey listener thread has wound down")]
    ListenerStopped,

    /// The hotkey listener thread could not be started.
    #[error("failed to start hotkey listener: {0}")]
    ListenerSpawn(String),

    /// A shortcut string could not be parsed.
    #[error("invalid shortcut '{input}': {reason}")]
    ShortcutParse { input: String, reason: String },

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Platform error code carried by this error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            Error::Platform { code, .. } => Some(*code),
            Error::FrameRejected { source, .. } => source.code(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
