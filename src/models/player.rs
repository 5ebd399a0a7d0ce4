//! Player: identity plus display attributes.

use crate::models::tournament::BracketError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in match slots and advancement lookups).
pub type PlayerId = String;

/// A player entered in the bracket. Only `id` takes part in progression; the rest is display data.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Club rank label, e.g. "A" or "Pro".
    #[serde(default)]
    pub rank: String,
    /// Avatar URL or asset key.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Player {
    /// Create a player with the given id and name. Both are trimmed and must be non-empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, BracketError> {
        let id = id.into();
        let name = name.into();
        let id = id.trim();
        let name = name.trim();
        if id.is_empty() {
            return Err(BracketError::InvalidPlayer("player id must not be empty".to_string()));
        }
        if name.is_empty() {
            return Err(BracketError::InvalidPlayer(format!("player {id} has no name")));
        }
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            rank: String::new(),
            avatar: None,
        })
    }

    /// Create a player with a fresh random id.
    pub fn named(name: impl Into<String>) -> Result<Self, BracketError> {
        Self::new(Uuid::new_v4().to_string(), name)
    }

    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into().trim().to_string();
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        let avatar = avatar.into();
        let avatar = avatar.trim();
        self.avatar = (!avatar.is_empty()).then(|| avatar.to_string());
        self
    }
}
