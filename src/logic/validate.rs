//! Construction-time checks on a generated match set.

use crate::models::{BracketError, GameMatch};
use std::collections::HashSet;

/// Reject duplicate ids and `next_match_id` edges leaving the set.
pub fn validate_bracket(matches: &[GameMatch]) -> Result<(), BracketError> {
    let mut ids = HashSet::with_capacity(matches.len());
    for m in matches {
        if !ids.insert(m.id.as_str()) {
            return Err(BracketError::DuplicateMatch(m.id.clone()));
        }
    }
    for m in matches {
        if let Some(next) = &m.next_match_id {
            if !ids.contains(next.as_str()) {
                return Err(BracketError::DanglingReference {
                    match_id: m.id.clone(),
                    next_match_id: next.clone(),
                });
            }
        }
    }
    Ok(())
}
