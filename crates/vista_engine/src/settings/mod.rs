//! Persisted presentation settings
//!
//! A single-slot preference read once at startup and written on toggle.
//! Only ever touched from the UI thread.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Whether the dark theme is active
    pub dark: bool,
}

impl Default for ThemeSettings {
    /// Dark is the house default
    fn default() -> Self {
        Self { dark: true }
    }
}

impl Config for ThemeSettings {}

impl ThemeSettings {
    /// Load settings, falling back to the default when the file is missing
    /// or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("failed to load settings from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Flip the theme and return the new dark flag
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        log::info!("theme switched to {}", if self.dark { "dark" } else { "light" });
        self.dark
    }

    /// Persist the current settings
    pub fn store(&self, path: &Path) -> Result<(), ConfigError> {
        self.save_to_file(path)
    }
}
