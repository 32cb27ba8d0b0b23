//! Saved CLI defaults.

mod file;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use file::{SettingsError, default_path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum password length.
    pub length: usize,
    /// Passwords printed per run.
    pub number: usize,
    /// Include the special character class in the demo rule.
    pub special: bool,
    /// Replacement for the demo rule's special characters.
    pub special_chars: Option<String>,
    /// Rule file used instead of the demo rule.
    pub rule: Option<PathBuf>,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load(&default_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        file::save(self, &default_path())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            number: 1,
            special: true,
            special_chars: None,
            rule: None,
        }
    }
}
