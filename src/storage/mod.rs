//! Settings persistence.

pub mod settings;

pub use settings::{
    load_from, save_to, settings_path, try_load_from, Settings, SettingsStore,
};
