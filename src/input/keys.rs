//! Virtual-key codes.
//!
//! Codes follow the Win32 virtual-key table, which is also what the hotkey
//! facility consumes. Only keys that make sense in a global shortcut get a
//! named constant; any other code can still be wrapped with [`Key::new`].

use std::fmt;

/// Range of codes the virtual-key table assigns.
const VIRTUAL_KEY_CODES: std::ops::RangeInclusive<u32> = 0x01..=0xFE;

/// A virtual-key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(pub u32);

impl Key {
    pub const BACKSPACE: Key = Key(0x08);
    pub const TAB: Key = Key(0x09);
    pub const CLEAR: Key = Key(0x0C);
    pub const ENTER: Key = Key(0x0D);
    pub const PAUSE: Key = Key(0x13);
    pub const CAPS_LOCK: Key = Key(0x14);
    pub const ESCAPE: Key = Key(0x1B);
    pub const SPACE: Key = Key(0x20);
    pub const PAGE_UP: Key = Key(0x21);
    pub const PAGE_DOWN: Key = Key(0x22);
    pub const END: Key = Key(0x23);
    pub const HOME: Key = Key(0x24);
    pub const LEFT: Key = Key(0x25);
    pub const UP: Key = Key(0x26);
    pub const RIGHT: Key = Key(0x27);
    pub const DOWN: Key = Key(0x28);
    pub const PRINT_SCREEN: Key = Key(0x2C);
    pub const INSERT: Key = Key(0x2D);
    pub const DELETE: Key = Key(0x2E);

    pub const NUM_0: Key = Key(0x30);
    pub const NUM_1: Key = Key(0x31);
    pub const NUM_2: Key = Key(0x32);
    pub const NUM_3: Key = Key(0x33);
    pub const NUM_4: Key = Key(0x34);
    pub const NUM_5: Key = Key(0x35);
    pub const NUM_6: Key = Key(0x36);
    pub const NUM_7: Key = Key(0x37);
    pub const NUM_8: Key = Key(0x38);
    pub const NUM_9: Key = Key(0x39);

    pub const A: Key = Key(0x41);
    pub const B: Key = Key(0x42);
    pub const C: Key = Key(0x43);
    pub const D: Key = Key(0x44);
    pub const E: Key = Key(0x45);
    pub const F: Key = Key(0x46);
    pub const G: Key = Key(0x47);
    pub const H: Key = Key(0x48);
    pub const I: Key = Key(0x49);
    pub const J: Key = Key(0x4A);
    pub const K: Key = Key(0x4B);
    pub const L: Key = Key(0x4C);
    pub const M: Key = Key(0x4D);
    pub const N: Key = Key(0x4E);
    pub const O: Key = Key(0x4F);
    pub const P: Key = Key(0x50);
    pub const Q: Key = Key(0x51);
    pub const R: Key = Key(0x52);
    pub const S: Key = Key(0x53);
    pub const T: Key = Key(0x54);
    pub const U: Key = Key(0x55);
    pub const V: Key = Key(0x56);
    pub const W: Key = Key(0x57);
    pub const X: Key = Key(0x58);
    pub const Y: Key = Key(0x59);
    pub const Z: Key = Key(0x5A);

    pub const LWIN: Key = Key(0x5B);
    pub const RWIN: Key = Key(0x5C);
    pub const APPS: Key = Key(0x5D);

    pub const NUMPAD_0: Key = Key(0x60);
    pub const NUMPAD_9: Key = Key(0x69);
    pub const MULTIPLY: Key = Key(0x6A);
    pub const ADD: Key = Key(0x6B);
    pub const SUBTRACT: Key = Key(0x6D);
    pub const DECIMAL: Key = Key(0x6E);
    pub const DIVIDE: Key = Key(0x6F);

    pub const F1: Key = Key(0x70);
    pub const F12: Key = Key(0x7B);
    pub const F24: Key = Key(0x87);

    pub const NUM_LOCK: Key = Key(0x90);
    pub const SCROLL_LOCK: Key = Key(0x91);
    pub const RCTRL: Key = Key(0xA3);
    pub const RALT: Key = Key(0xA5);

    pub const VOLUME_MUTE: Key = Key(0xAD);
    pub const VOLUME_DOWN: Key = Key(0xAE);
    pub const VOLUME_UP: Key = Key(0xAF);
    pub const MEDIA_NEXT: Key = Key(0xB0);
    pub const MEDIA_PREV: Key = Key(0xB1);
    pub const MEDIA_STOP: Key = Key(0xB2);
    pub const MEDIA_PLAY_PAUSE: Key = Key(0xB3);

    /// Wrap a raw code. Codes outside `0x01..=0xFE` are not virtual keys and
    /// the OS hotkey facility refuses them.
    pub const fn new(code: u32) -> Self {
        Key(code)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    /// Function key `F<n>` for `n` in `1..=24`.
    pub fn function(n: u32) -> Option<Key> {
        (1..=24).contains(&n).then(|| Key(Self::F1.0 + n - 1))
    }

    /// Human-readable name, used when rendering shortcuts.
    pub fn name(self) -> String {
        let code = self.0;
        match code {
            0x30..=0x39 | 0x41..=0x5A => char::from_u32(code)
                .map(String::from)
                .unwrap_or_default(),
            0x60..=0x69 => format!("Num {}", code - 0x60),
            0x70..=0x87 => format!("F{}", code - 0x70 + 1),
            _ => match NAMED.iter().find(|(k, _)| k.0 == code) {
                Some((_, name)) => (*name).to_string(),
                None => format!("0x{:02X}", code),
            },
        }
    }

    /// Reverse of [`name`](Self::name), case-insensitive.
    pub fn from_name(name: &str) -> Option<Key> {
        let upper = name.trim().to_ascii_uppercase();
        let mut chars = upper.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphanumeric() {
                return Some(Key(c as u32));
            }
        }
        if let Some(n) = upper.strip_prefix("NUM ") {
            return match n.parse::<u32>() {
                Ok(d) if d <= 9 => Some(Key(0x60 + d)),
                _ => None,
            };
        }
        if let Some(n) = upper.strip_prefix('F') {
            if let Ok(n) = n.parse::<u32>() {
                return Key::function(n);
            }
        }
        NAMED
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(&upper))
            .map(|(k, _)| *k)
            .or_else(|| {
                let hex = upper.strip_prefix("0X")?;
                u32::from_str_radix(hex, 16)
                    .ok()
                    .filter(|code| VIRTUAL_KEY_CODES.contains(code))
                    .map(Key)
            })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

const NAMED: &[(Key, &str)] = &[
    (Key::BACKSPACE, "Backspace"),
    (Key::TAB, "Tab"),
    (Key::CLEAR, "Clear"),
    (Key::ENTER, "Enter"),
    (Key::PAUSE, "Pause"),
    (Key::CAPS_LOCK, "CapsLock"),
    (Key::ESCAPE, "Escape"),
    (Key::SPACE, "Space"),
    (Key::PAGE_UP, "PageUp"),
    (Key::PAGE_DOWN, "PageDown"),
    (Key::END, "End"),
    (Key::HOME, "Home"),
    (Key::LEFT, "Left"),
    (Key::UP, "Up"),
    (Key::RIGHT, "Right"),
    (Key::DOWN, "Down"),
    (Key::PRINT_SCREEN, "PrintScreen"),
    (Key::INSERT, "Insert"),
    (Key::DELETE, "Delete"),
    (Key::LWIN, "LWin"),
    (Key::RWIN, "RWin"),
    (Key::APPS, "Apps"),
    (Key::MULTIPLY, "Multiply"),
    (Key::ADD, "Add"),
    (Key::SUBTRACT, "Subtract"),
    (Key::DECIMAL, "Decimal"),
    (Key::DIVIDE, "Divide"),
    (Key::NUM_LOCK, "NumLock"),
    (Key::SCROLL_LOCK, "ScrollLock"),
    (Key::VOLUME_MUTE, "VolumeMute"),
    (Key::VOLUME_DOWN, "VolumeDown"),
    (Key::VOLUME_UP, "VolumeUp"),
    (Key::MEDIA_NEXT, "MediaNext"),
    (Key::MEDIA_PREV, "MediaPrev"),
    (Key::MEDIA_STOP, "MediaStop"),
    (Key::MEDIA_PLAY_PAUSE, "MediaPlayPause"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_digits_and_function_keys_have_short_names() {
        assert_eq!(Key::A.name(), "A");
        assert_eq!(Key::NUM_7.name(), "7");
        assert_eq!(Key::F12.name(), "F12");
        assert_eq!(Key::F24.name(), "F24");
        assert_eq!(Key::NUMPAD_9.name(), "Num 9");
    }

    #[test]
    fn unknown_codes_render_as_hex() {
        assert_eq!(Key(0xE5).name(), "0xE5");
        assert_eq!(Key::from_name("0xE5"), Some(Key(0xE5)));
    }

    #[test]
    fn from_name_round_trips_named_keys() {
        for (key, name) in NAMED {
            assert_eq!(Key::from_name(name), Some(*key), "{name}");
        }
        assert_eq!(Key::from_name("escape"), Some(Key::ESCAPE));
        assert_eq!(Key::from_name("f5"), Key::function(5));
        assert_eq!(Key::from_name("q"), Some(Key::Q));
        assert_eq!(Key::from_name("F25"), None);
        assert_eq!(Key::from_name("Nope"), None);
        assert_eq!(Key::from_name("0x2a"), Some(Key(0x2A)));
        assert_eq!(Key::from_name("0x1FF"), None);
        assert_eq!(Key::from_name("0x00"), None);
    }
}
