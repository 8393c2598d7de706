//! Player-facing settings
//!
//! Only host concerns live here: how frame time drives motion, and which
//! physical keys map to which game keys. Gameplay tuning stays in `consts`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::Key;
pub use crate::sim::MotionMode;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("key code {code:?} is bound to both {first:?} and {second:?}")]
    ConflictingBinding { code: String, first: Key, second: Key },
    #[error("no key is bound to {0:?}")]
    Unbound(Key),
}

/// Physical key codes (`KeyboardEvent.code`) for each game key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub launch: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".into(), "KeyA".into()],
            right: vec!["ArrowRight".into(), "KeyD".into()],
            launch: vec!["Space".into(), "ArrowUp".into()],
        }
    }
}

fn tagged(codes: &[String], key: Key) -> impl Iterator<Item = (&str, Key)> {
    codes.iter().map(move |c| (c.as_str(), key))
}

impl KeyBindings {
    fn entries(&self) -> impl Iterator<Item = (&str, Key)> {
        tagged(&self.left, Key::Left)
            .chain(tagged(&self.right, Key::Right))
            .chain(tagged(&self.launch, Key::Launch))
    }

    /// Game key for a physical code, if bound
    pub fn resolve(&self, code: &str) -> Option<Key> {
        self.entries().find(|(c, _)| *c == code).map(|(_, key)| key)
    }

    /// Every game key needs a code, and no code may serve two keys
    pub fn validate(&self) -> Result<(), SettingsError> {
        let mut seen: HashMap<&str, Key> = HashMap::new();
        for (code, key) in self.entries() {
            if let Some(&first) = seen.get(code) {
                if first != key {
                    return Err(SettingsError::ConflictingBinding {
                        code: code.to_string(),
                        first,
                        second: key,
                    });
                }
            }
            seen.insert(code, key);
        }

        for key in [Key::Left, Key::Right, Key::Launch] {
            if !seen.values().any(|&k| k == key) {
                return Err(SettingsError::Unbound(key));
            }
        }
        Ok(())
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame-locked (default) or delta-time scaled motion
    pub motion: MotionMode,
    pub bindings: KeyBindings,
    /// Let the demo controller play
    pub autopilot: bool,
}

impl Settings {
    /// Parse and validate settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.bindings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse settings, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings ({:?} motion)", settings.motion);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }
        }
    }
}
