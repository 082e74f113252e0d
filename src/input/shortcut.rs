//! Shortcuts: a set of modifier keys plus one key.
//!
//! A shortcut reduces to a single integer id, `(modifiers & 0xF) | key << 4`,
//! which is also the id handed to the OS hotkey facility. Equality, ordering
//! and hashing all go through that id, so the repeat flag never makes two
//! shortcuts distinct.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use bitflags::bitflags;

use super::keys::Key;
use crate::error::Error;
use crate::model::{SHORTCUT_KEY_SHIFT, SHORTCUT_MODIFIER_MASK};

bitflags! {
    /// Modifier keys, using the Win32 `MOD_*` bit values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const ALT = 0x0001;
        const CONTROL = 0x0002;
        const SHIFT = 0x0004;
        const WIN = 0x0008;
        /// Suppress repeated notifications while the key is held down.
        const NO_REPEAT = 0x4000;
    }
}

impl Modifiers {
    /// Modifier keys only, without behavior flags.
    pub fn keys(self) -> Modifiers {
        self & (Modifiers::ALT | Modifiers::CONTROL | Modifiers::SHIFT | Modifiers::WIN)
    }
}

/// A global shortcut such as `Ctrl+Alt+A`.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl Shortcut {
    /// New shortcut. It does not repeat while held unless
    /// [`set_repeatable`](Self::set_repeatable) says otherwise.
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self {
            modifiers: modifiers | Modifiers::NO_REPEAT,
            key,
        }
    }

    pub fn set_repeatable(&mut self, enable: bool) -> &mut Self {
        self.modifiers.set(Modifiers::NO_REPEAT, !enable);
        self
    }

    /// Builder form of [`set_repeatable`](Self::set_repeatable).
    pub fn repeatable(mut self, enable: bool) -> Self {
        self.set_repeatable(enable);
        self
    }

    pub fn is_repeatable(&self) -> bool {
        !self.modifiers.contains(Modifiers::NO_REPEAT)
    }

    /// True if every modifier key in `modifiers` is part of this shortcut.
    pub fn contains_modifiers(&self, modifiers: Modifiers) -> bool {
        self.modifiers.keys().contains(modifiers.keys())
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.key == key
    }

    pub fn id(&self) -> i32 {
        ((self.modifiers.bits() & SHORTCUT_MODIFIER_MASK) | (self.key.0 << SHORTCUT_KEY_SHIFT))
            as i32
    }

    /// Rebuild a shortcut from its id, so that `from_id(id).id() == id` for
    /// every id. The repeat flag is not part of the id and comes back as
    /// non-repeating.
    pub fn from_id(id: i32) -> Self {
        let id = id as u32;
        Self::new(
            Modifiers::from_bits_truncate(id & SHORTCUT_MODIFIER_MASK),
            Key(id >> SHORTCUT_KEY_SHIFT),
        )
    }
}

impl PartialEq for Shortcut {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Shortcut {}

impl PartialOrd for Shortcut {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Shortcut {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id().cmp(&other.id())
    }
}

impl Hash for Shortcut {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if self.modifiers.contains(Modifiers::WIN) {
            parts.push("Win".to_string());
        }
        if self.modifiers.contains(Modifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.contains(Modifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.modifiers.contains(Modifiers::ALT) {
            parts.push("Alt".to_string());
        }
        parts.push(self.key.name());
        write!(f, "{}", parts.join("+"))
    }
}

/// Parses `Modifier+Modifier+Key`, e.g. `Ctrl+Alt+A` or `win + shift + f5`.
///
/// Modifiers: `Ctrl`/`Control`, `Alt`/`Option`, `Shift`,
/// `Win`/`Super`/`Cmd`/`Meta`. The key is anything [`Key::from_name`]
/// accepts.
impl FromStr for Shortcut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| Error::ShortcutParse {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key_part, modifier_parts) = match parts.split_last() {
            Some((key, mods)) if !key.is_empty() => (*key, mods),
            _ => return Err(fail("missing key")),
        };

        let mut modifiers = Modifiers::empty();
        for part in modifier_parts {
            let flag = match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => Modifiers::CONTROL,
                "alt" | "option" => Modifiers::ALT,
                "shift" => Modifiers::SHIFT,
                "win" | "super" | "cmd" | "meta" => Modifiers::WIN,
                _ => return Err(fail(&format!("unknown modifier '{}'", part))),
            };
            modifiers |= flag;
        }

        let key = Key::from_name(key_part)
            .ok_or_else(|| fail(&format!("unknown key '{}'", key_part)))?;
        Ok(Shortcut::new(modifiers, key))
    }
}
