use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::PathBuf;

use obscura_core::effects::domain::effect_config::{EffectConfig, EffectKind, Intensity};
use obscura_core::pipeline::render_session::DemoConfig;
use obscura_core::shared::constants::DEFAULT_SUBJECT;

/// Demo controls remembered between runs.
///
/// Each field falls back to its default on its own; an out-of-range saved
/// intensity is pulled into range rather than discarding the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub effect: EffectKind,
    #[serde(deserialize_with = "saturating_intensity")]
    pub intensity: Intensity,
    pub subject: String,
    pub outline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            effect: EffectKind::default(),
            intensity: Intensity::default(),
            subject: DEFAULT_SUBJECT.to_string(),
            outline: true,
        }
    }
}

fn saturating_intensity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Intensity, D::Error> {
    u32::deserialize(deserializer).map(Intensity::saturating)
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Obscura").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|json| Self::from_json(&json))
            .unwrap_or_default()
    }

    /// Parses saved settings, falling back to defaults on malformed JSON.
    fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable settings: {e}");
            Self::default()
        })
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                if let Err(e) = fs::write(&path, json) {
                    log::warn!("Failed to save settings to {}: {e}", path.display());
                }
            }
        }
    }

    pub fn demo_config(&self) -> DemoConfig {
        DemoConfig {
            effect: EffectConfig::new(self.effect, self.intensity),
            subject: self.subject.clone(),
            outline: self.outline,
        }
    }
}
