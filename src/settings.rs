//! Persistent settings for viewer initialization
//!
//! Saves and loads user preferences (viewport size, selected artwork) to/from
//! an init_settings.json file in the config directory. The open/closed pose is
//! deliberately not persisted; the book always mounts closed.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/init_settings.json";

/// Persistent settings that survive between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitSettings {
    /// Viewport preset index
    pub viewport_index: usize,
    /// Index into the cover artwork list
    pub artwork_index: usize,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            viewport_index: crate::constants::DEFAULT_VIEWPORT_INDEX,
            artwork_index: 0,
        }
    }
}

impl InitSettings {
    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            info!("No init_settings.json found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", SETTINGS_FILE);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse init_settings.json: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read init_settings.json: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = Path::new(SETTINGS_FILE).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(SETTINGS_FILE, json)?;
        info!("Saved settings to {}", SETTINGS_FILE);
        Ok(())
    }
}

/// Resource tracking the current settings (for change detection)
#[derive(Resource)]
pub struct CurrentSettings {
    pub settings: InitSettings,
    pub dirty: bool,
}

impl Default for CurrentSettings {
    fn default() -> Self {
        Self {
            settings: InitSettings::load(),
            dirty: false,
        }
    }
}

impl CurrentSettings {
    /// Save settings if marked dirty
    pub fn save_if_dirty(&mut self) {
        if self.dirty {
            if let Err(e) = self.settings.save() {
                warn!("Failed to save settings: {}", e);
            }
            self.dirty = false;
        }
    }
}

/// System that saves settings when dirty
pub fn save_settings_system(mut settings: ResMut<CurrentSettings>) {
    settings.save_if_dirty();
}
