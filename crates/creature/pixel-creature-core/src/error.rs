//! Error types surfaced by the creature crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}' (expected #rrggbb)")]
    InvalidHex(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("generator config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raised by the form workflow before the generator is ever invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("a name is required before generating")]
    EmptyName,
}

/// First failing rule of [`crate::record::CreatureDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("a creature name is required")]
    MissingName,
    #[error("generate the creature before saving it")]
    MissingDraw,
    #[error("owner id is missing")]
    MissingOwner,
}
