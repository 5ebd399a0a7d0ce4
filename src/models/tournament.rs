//! Tournament aggregate, its phase, and the engine error type.

use crate::models::game::{GameMatch, MatchId};
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur while building or scoring a bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Entrant count is not a supported bracket size.
    InvalidBracketSize(usize),
    /// The same player id was entered twice.
    DuplicatePlayer(PlayerId),
    /// A player record is missing a required field.
    InvalidPlayer(String),
    /// Two matches in one set share an id.
    DuplicateMatch(MatchId),
    /// A `next_match_id` points at a match that is not in the same set.
    DanglingReference { match_id: MatchId, next_match_id: MatchId },
    MatchNotFound(MatchId),
    /// Tied score where a winner is required.
    UnresolvedScore(MatchId),
    /// Match has not been completed yet.
    NotCompleted(MatchId),
    /// Match is already completed; its result has flowed downstream.
    MatchAlreadyCompleted(MatchId),
    /// Match does not have both players yet.
    EmptySlot(MatchId),
    /// Semi-final stage match scored before both winners semi-finals and both
    /// losers branch finals are decided.
    SemiFinalNotReady(MatchId),
    /// Player list could not be read.
    Import(String),
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::InvalidBracketSize(n) => {
                write!(f, "Unsupported bracket size {} (need a power of two)", n)
            }
            BracketError::DuplicatePlayer(id) => write!(f, "Player {} entered more than once", id),
            BracketError::InvalidPlayer(msg) => write!(f, "Invalid player: {}", msg),
            BracketError::DuplicateMatch(id) => write!(f, "Match id {} is used twice", id),
            BracketError::DanglingReference { match_id, next_match_id } => {
                write!(f, "Match {} feeds unknown match {}", match_id, next_match_id)
            }
            BracketError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            BracketError::UnresolvedScore(id) => write!(f, "Match {} is tied; no winner yet", id),
            BracketError::NotCompleted(id) => write!(f, "Match {} is not completed", id),
            BracketError::MatchAlreadyCompleted(id) => {
                write!(f, "Match {} is already completed", id)
            }
            BracketError::EmptySlot(id) => write!(f, "Match {} is still waiting for players", id),
            BracketError::SemiFinalNotReady(id) => {
                write!(f, "Match {} cannot start before the semi-final stage is ready", id)
            }
            BracketError::Import(msg) => write!(f, "Could not import players: {}", msg),
        }
    }
}

impl std::error::Error for BracketError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Which generated set a match lives in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketSet {
    Winners,
    Losers,
    SemiFinals,
}

/// Coarse progress of a tournament, derived from its matches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    /// Winners bracket and losers branches are still being played.
    #[default]
    Brackets,
    /// All four semi-final prerequisites are done; semi-finals and final in play.
    SemiFinals,
    /// Final is decided.
    Completed,
}

/// A full double-elimination tournament: entrants plus the three generated match sets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Entrants in seeding order.
    pub players: Vec<Player>,
    pub winners: Vec<GameMatch>,
    /// Losers branch A followed by losers branch B.
    pub losers: Vec<GameMatch>,
    /// Two semi-finals followed by the final.
    pub semi_finals: Vec<GameMatch>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    /// Assemble a tournament from already generated match sets.
    pub fn new(
        name: impl Into<String>,
        players: Vec<Player>,
        winners: Vec<GameMatch>,
        losers: Vec<GameMatch>,
        semi_finals: Vec<GameMatch>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players,
            winners,
            losers,
            semi_finals,
            created_at: now,
            updated_at: now,
        }
    }

    /// Which set holds the match with this id.
    pub fn set_of(&self, match_id: &str) -> Option<BracketSet> {
        [
            (BracketSet::Winners, &self.winners),
            (BracketSet::Losers, &self.losers),
            (BracketSet::SemiFinals, &self.semi_finals),
        ]
        .into_iter()
        .find(|(_, set)| set.iter().any(|m| m.id == match_id))
        .map(|(kind, _)| kind)
    }

    pub fn find_match(&self, match_id: &str) -> Option<&GameMatch> {
        self.winners
            .iter()
            .chain(self.losers.iter())
            .chain(self.semi_finals.iter())
            .find(|m| m.id == match_id)
    }

    pub fn matches(&self, set: BracketSet) -> &[GameMatch] {
        match set {
            BracketSet::Winners => &self.winners,
            BracketSet::Losers => &self.losers,
            BracketSet::SemiFinals => &self.semi_finals,
        }
    }

    /// Replace one set wholesale and bump `updated_at`.
    pub fn replace(&mut self, set: BracketSet, matches: Vec<GameMatch>) {
        match set {
            BracketSet::Winners => self.winners = matches,
            BracketSet::Losers => self.losers = matches,
            BracketSet::SemiFinals => self.semi_finals = matches,
        }
        self.updated_at = Utc::now();
    }
}
