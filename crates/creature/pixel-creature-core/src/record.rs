//! Creature records as the surrounding app stores them, plus the draft
//! payload a creation form submits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DraftError;

pub const DEFAULT_LEVEL: u32 = 1;
pub const DEFAULT_OWNER_ID: &str = "pending-owner";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatureState {
    #[default]
    Happy,
    Sad,
    Angry,
    Hungry,
    Sleepy,
}

impl CreatureState {
    pub const ALL: [CreatureState; 5] = [
        CreatureState::Happy,
        CreatureState::Sad,
        CreatureState::Angry,
        CreatureState::Hungry,
        CreatureState::Sleepy,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            CreatureState::Happy => "😊",
            CreatureState::Sad => "😢",
            CreatureState::Angry => "😠",
            CreatureState::Hungry => "🍎",
            CreatureState::Sleepy => "😴",
        }
    }
}

/// Form payload; `draw` holds the generated SVG markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureDraft {
    pub name: String,
    pub draw: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub state: CreatureState,
    pub owner_id: String,
}

fn default_level() -> u32 {
    DEFAULT_LEVEL
}

impl CreatureDraft {
    /// Checks name, draw and owner id (all trimmed), in that order.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.draw.trim().is_empty() {
            return Err(DraftError::MissingDraw);
        }
        if self.owner_id.trim().is_empty() {
            return Err(DraftError::MissingOwner);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureRecord {
    pub id: String,
    pub name: String,
    pub draw: String,
    pub level: u32,
    pub state: CreatureState,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CreatureRecord {
    /// Validate `draft` and stamp it. The authenticated `session_owner_id`
    /// always replaces whatever owner the draft carried.
    pub fn from_draft(
        draft: CreatureDraft,
        id: impl Into<String>,
        session_owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, DraftError> {
        let draft = CreatureDraft {
            owner_id: session_owner_id.to_string(),
            ..draft
        };
        draft.validate()?;
        Ok(Self {
            id: id.into(),
            name: draft.name,
            draw: draft.draw,
            level: draft.level,
            state: draft.state,
            owner_id: draft.owner_id,
            created_at: now,
            updated_at: now,
        })
    }
}
