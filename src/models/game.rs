//! Match record and the small value types it is built from.

use crate::models::player::Player;
use crate::models::tournament::BracketError;
use serde::{Deserialize, Serialize};

/// Unique identifier for a match; target of `next_match_id` edges.
pub type MatchId = String;

/// Race length used when no other is configured.
pub const DEFAULT_RACE_TO: u32 = 5;

/// One of the two player positions in a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    #[default]
    One,
    Two,
}

impl Slot {
    /// Even-indexed feeder matches fill slot one, odd-indexed fill slot two.
    pub fn for_feeder_index(index: usize) -> Self {
        if index % 2 == 0 {
            Slot::One
        } else {
            Slot::Two
        }
    }

    pub fn other(self) -> Self {
        match self {
            Slot::One => Slot::Two,
            Slot::Two => Slot::One,
        }
    }
}

/// Which ladder a match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Winners,
    LosersA,
    LosersB,
    SemiFinal,
    Final,
}

impl Stage {
    /// Prefix used when building match ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Stage::Winners => "W",
            Stage::LosersA => "LA",
            Stage::LosersB => "LB",
            Stage::SemiFinal => "SF",
            Stage::Final => "F",
        }
    }
}

/// Structured round position of a match. Round numbers start at 1 within each stage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub stage: Stage,
    pub number: u32,
}

impl Round {
    pub fn new(stage: Stage, number: u32) -> Self {
        Self { stage, number }
    }
}

/// Points per player. Absent on a match until play starts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    pub fn new(player1: u32, player2: u32) -> Self {
        Self { player1, player2 }
    }

    /// Slot with the higher score, or None on an exact tie.
    pub fn leader(&self) -> Option<Slot> {
        match self.player1.cmp(&self.player2) {
            std::cmp::Ordering::Greater => Some(Slot::One),
            std::cmp::Ordering::Less => Some(Slot::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Table assignment and match format. Display data only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    pub table: String,
    pub handicap: String,
    pub race_to: u32,
}

impl Default for GameInfo {
    fn default() -> Self {
        Self {
            table: "TBD".to_string(),
            handicap: "Even".to_string(),
            race_to: DEFAULT_RACE_TO,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// A single match in one of the bracket sets.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// Display name ("WINNER ROUND 1", "LOSERS A FINAL", ...). Never parsed.
    pub label: String,
    pub round: Round,
    pub player1: Option<Player>,
    pub player2: Option<Player>,
    /// None until play starts.
    pub score: Option<Score>,
    pub game_info: GameInfo,
    pub status: MatchStatus,
    /// Match this one feeds; None for the last match of a set.
    pub next_match_id: Option<MatchId>,
}

impl GameMatch {
    /// An empty pending match.
    pub fn new(id: impl Into<MatchId>, label: impl Into<String>, round: Round) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            round,
            player1: None,
            player2: None,
            score: None,
            game_info: GameInfo::default(),
            status: MatchStatus::Pending,
            next_match_id: None,
        }
    }

    pub fn with_next(mut self, next_match_id: impl Into<MatchId>) -> Self {
        self.next_match_id = Some(next_match_id.into());
        self
    }

    pub fn with_players(mut self, player1: Player, player2: Player) -> Self {
        self.player1 = Some(player1);
        self.player2 = Some(player2);
        self
    }

    pub fn player(&self, slot: Slot) -> Option<&Player> {
        match slot {
            Slot::One => self.player1.as_ref(),
            Slot::Two => self.player2.as_ref(),
        }
    }

    pub fn player_mut(&mut self, slot: Slot) -> &mut Option<Player> {
        match slot {
            Slot::One => &mut self.player1,
            Slot::Two => &mut self.player2,
        }
    }

    /// Slot currently holding the given player, if any.
    pub fn slot_of(&self, player_id: &str) -> Option<Slot> {
        [Slot::One, Slot::Two]
            .into_iter()
            .find(|&slot| self.player(slot).is_some_and(|p| p.id == player_id))
    }

    pub fn has_both_players(&self) -> bool {
        self.player1.is_some() && self.player2.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Winning slot of a completed match with a non-tied score.
    pub fn winner_slot(&self) -> Option<Slot> {
        if !self.is_completed() {
            return None;
        }
        self.score.as_ref().and_then(Score::leader)
    }

    /// Winner of a completed, resolvable match.
    pub fn winner(&self) -> Option<&Player> {
        self.winner_slot().and_then(|slot| self.player(slot))
    }

    /// Loser of a completed, resolvable match.
    pub fn loser(&self) -> Option<&Player> {
        self.winner_slot().and_then(|slot| self.player(slot.other()))
    }

    /// Like [`GameMatch::winner`], but says why there is no winner yet.
    /// Ties are rejected here so they never reach advancement.
    pub fn resolve_winner(&self) -> Result<&Player, BracketError> {
        if !self.is_completed() {
            return Err(BracketError::NotCompleted(self.id.clone()));
        }
        let score = self
            .score
            .as_ref()
            .ok_or_else(|| BracketError::NotCompleted(self.id.clone()))?;
        let slot = score
            .leader()
            .ok_or_else(|| BracketError::UnresolvedScore(self.id.clone()))?;
        self.player(slot)
            .ok_or_else(|| BracketError::EmptySlot(self.id.clone()))
    }
}
