//! Window and overlay settings
//!
//! Read from an optional `settings.json` in the working directory; every
//! field falls back to its default, so a partial file is fine. There are
//! no CLI flags.

use serde::{Deserialize, Serialize};

use crate::consts::*;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window size in logical pixels
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Draw the controls overlay
    pub show_help: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH as u32,
            height: SCREEN_HEIGHT as u32,
            title: "boxhop - 2d camera platformer".to_string(),
            show_help: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(SETTINGS_FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {SETTINGS_FILE}");
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {SETTINGS_FILE}: {err}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn viewport(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_matches_consts() {
        let settings = Settings::default();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 450);
        assert!(settings.show_help);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let settings: Settings = serde_json::from_str(r#"{"show_help": false}"#).unwrap();
        assert!(!settings.show_help);
        assert_eq!(settings.width, 800);
        assert_eq!(settings.title, Settings::default().title);
    }
}
