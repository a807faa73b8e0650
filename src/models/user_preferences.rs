use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt::Display, str::FromStr};

use crate::error::{AppError, AppResult};

/// Text size used when rendering cards and lists
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FromStr for TextSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(TextSize::Small),
            "medium" => Ok(TextSize::Medium),
            "large" => Ok(TextSize::Large),
            other => Err(AppError::invalid_field(
                "text_size",
                format!("`{}` is not one of small, medium, large", other),
            )),
        }
    }
}

impl Display for TextSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextSize::Small => write!(f, "small"),
            TextSize::Medium => write!(f, "medium"),
            TextSize::Large => write!(f, "large"),
        }
    }
}

/// Display preferences for one user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserPreferences {
    /// Dark theme toggle
    pub theme_dark: bool,
    /// Card and list text size
    pub text_size: TextSize,
    /// Voice command support toggle
    pub voice_command: bool,
}

impl UserPreferences {
    /// Creates preferences with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a validated partial update
    pub fn apply(&mut self, patch: &PreferencesPatch) {
        if let Some(theme_dark) = patch.theme_dark {
            self.theme_dark = theme_dark;
        }
        if let Some(text_size) = patch.text_size {
            self.text_size = text_size;
        }
        if let Some(voice_command) = patch.voice_command {
            self.voice_command = voice_command;
        }
    }
}

/// Partial update of [`UserPreferences`]; `None` fields stay unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub theme_dark: Option<bool>,
    pub text_size: Option<TextSize>,
    pub voice_command: Option<bool>,
}

impl PreferencesPatch {
    /// Validates a raw JSON object into a patch
    ///
    /// The first bad field fails the whole patch, so nothing is applied from
    /// a request that carries any invalid value.
    pub fn from_json(raw: &Value) -> AppResult<Self> {
        let object = raw
            .as_object()
            .ok_or_else(|| AppError::InvalidInput("Expected a JSON object".to_string()))?;

        let mut patch = PreferencesPatch::default();
        for (field, value) in object {
            match field.as_str() {
                "theme_dark" => patch.theme_dark = Some(expect_bool(field, value)?),
                "voice_command" => patch.voice_command = Some(expect_bool(field, value)?),
                "text_size" => {
                    let raw = value
                        .as_str()
                        .ok_or_else(|| AppError::invalid_field(field, "expected a string"))?;
                    patch.text_size = Some(raw.parse()?);
                }
                _ => return Err(AppError::invalid_field(field, "unknown preference")),
            }
        }

        Ok(patch)
    }
}

fn expect_bool(field: &str, value: &Value) -> AppResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| AppError::invalid_field(field, "expected a boolean"))
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    Ok,
}

/// Result of a successful preferences update
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PreferencesUpdate {
    pub status: UpdateStatus,
    pub preferences: UserPreferences,
    pub message: String,
}

impl PreferencesUpdate {
    pub fn ok(preferences: UserPreferences) -> Self {
        Self {
            status: UpdateStatus::Ok,
            preferences,
            message: "Settings updated successfully.".to_string(),
        }
    }
}
