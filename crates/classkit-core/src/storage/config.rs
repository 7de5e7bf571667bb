//! TOML-based user preferences.
//!
//! Stores:
//! - Clock timezone
//! - Alarm volume, repeat count, gap and custom sound
//! - Optional random seed for reproducible draws and groupings
//!
//! Configuration is stored at `~/.config/classkit/config.toml`. Tool state
//! (pools, histories, groups, countdowns) is never written here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::clock::{find_timezone, DEFAULT_TIMEZONE};
use crate::error::{ConfigError, Result};
use crate::timer::{AlarmSettings, AlarmSound, DEFAULT_GAP_MS, DEFAULT_REPEAT_COUNT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmConfig {
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
    #[serde(default = "default_gap_ms")]
    pub gap_ms: u64,
    /// Path to a custom alarm sound. The default beep is used when unset.
    #[serde(default)]
    pub custom_sound: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Fixed seed for draws and groupings. Unset means seeded from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/classkit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub alarm: AlarmConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}
fn default_volume() -> f64 {
    0.3
}
fn default_repeat_count() -> u32 {
    DEFAULT_REPEAT_COUNT
}
fn default_gap_ms() -> u64 {
    DEFAULT_GAP_MS
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            repeat_count: default_repeat_count(),
            gap_ms: default_gap_ms(),
            custom_sound: None,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
        literal: bool,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = if value == "none" {
                    serde_json::Value::Null
                } else {
                    match existing {
                        serde_json::Value::Bool(_) => serde_json::Value::Bool(
                            value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                        ),
                        serde_json::Value::Number(_) => {
                            if let Ok(n) = value.parse::<u64>() {
                                serde_json::Value::Number(n.into())
                            } else if let Ok(n) = value.parse::<f64>() {
                                serde_json::Number::from_f64(n)
                                    .map(serde_json::Value::Number)
                                    .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                            } else {
                                return Err(invalid(format!("cannot parse '{value}' as number")));
                            }
                        }
                        // Unset optional: try a JSON literal, fall back to text.
                        serde_json::Value::Null if literal => serde_json::from_str(value)
                            .unwrap_or_else(|_| serde_json::Value::String(value.into())),
                        _ => serde_json::Value::String(value.into()),
                    }
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                if let Err(e) = cfg.validate() {
                    tracing::warn!(path = %path.display(), error = %e, "config has invalid values");
                }
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value in memory by dot-separated key. `none` clears
    /// an optional value. Call [`Config::save`] to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let updated = match self.with_value(key, value, true) {
            Ok(updated) => updated,
            // A literal like `1234` does not fit an optional text field.
            Err(_) => self.with_value(key, value, false)?,
        };
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn with_value(&self, key: &str, value: &str, literal: bool) -> Result<Config> {
        let mut json = serde_json::to_value(self)?;
        Self::set_json_value_by_path(&mut json, key, value, literal)?;
        let updated = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(updated)
    }

    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if find_timezone(&self.clock.timezone).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "clock.timezone".into(),
                message: format!("unsupported timezone '{}'", self.clock.timezone),
            });
        }
        if !(0.0..=1.0).contains(&self.alarm.volume) {
            return Err(ConfigError::InvalidValue {
                key: "alarm.volume".into(),
                message: format!("{} is outside 0.0..=1.0", self.alarm.volume),
            });
        }
        if self.alarm.repeat_count == 0 {
            return Err(ConfigError::InvalidValue {
                key: "alarm.repeat_count".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Alarm settings derived from the `[alarm]` section.
    pub fn alarm_settings(&self) -> AlarmSettings {
        let sound = match &self.alarm.custom_sound {
            Some(path) => AlarmSound::Custom(PathBuf::from(path)),
            None => AlarmSound::default(),
        };
        AlarmSettings::new(
            self.alarm.volume as f32,
            self.alarm.repeat_count,
            self.alarm.gap_ms,
            sound,
        )
    }
}
