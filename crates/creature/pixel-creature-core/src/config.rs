//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rendering options. None of these affect the random draws, so a seed always
/// yields the same pixel layout whatever the config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Text placed before the name in the image's accessible label.
    pub label_prefix: String,
    pub animations: AnimationToggles,
}

/// Which animation directives are written into the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationToggles {
    pub wings: bool,
    pub blink: bool,
    pub bounce: bool,
}

impl Default for AnimationToggles {
    fn default() -> Self {
        Self {
            wings: true,
            blink: true,
            bounce: true,
        }
    }
}

impl AnimationToggles {
    /// Every directive disabled; handy for static thumbnails.
    pub const fn none() -> Self {
        Self {
            wings: false,
            blink: false,
            bounce: false,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            label_prefix: "Pixel creature".to_string(),
            animations: AnimationToggles::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
