//! Encoding and matching policy, read from TOML.
//!
//! The defaults ship inside the crate as `default_settings.toml`. A binary
//! that wants other values passes its TOML to [`init_custom`] once at startup;
//! after that every caller reads the same [`Settings`] through [`settings`].

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// TOML installed by the embedding binary in place of the defaults.
static OVERRIDE: OnceLock<String> = OnceLock::new();
static LOADED: OnceLock<Settings> = OnceLock::new();

/// Replace the embedded defaults with `toml_content`.
///
/// The text is validated before it is installed. Only one override is
/// accepted, and only while [`settings`] has not been read yet.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    if LOADED.get().is_some() {
        return Err(SettingsError::AlreadyLoaded);
    }
    parse_settings_toml(&toml_content)?;
    OVERRIDE
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyLoaded)
}

/// The active settings: the override if one was installed, else the defaults.
pub fn settings() -> &'static Settings {
    LOADED.get_or_init(|| {
        let source = OVERRIDE
            .get()
            .map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        // The override passed init_custom; the defaults passed build.rs.
        parse_settings_toml(source).unwrap_or_else(|e| panic!("unusable settings: {e}"))
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("malformed settings TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    #[error("settings were already loaded")]
    AlreadyLoaded,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub encoding: EncodingSettings,
    pub matching: MatchingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncodingSettings {
    /// 0 means no limit.
    pub max_length: usize,
}

impl EncodingSettings {
    pub fn limit(&self) -> Option<usize> {
        (self.max_length > 0).then_some(self.max_length)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub max_length: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str)?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.matching.max_length == 0 {
        return Err(SettingsError::Invalid {
            field: "matching.max_length",
            reason: "must be positive",
        });
    }
    Ok(())
}
