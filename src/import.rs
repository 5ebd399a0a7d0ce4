//! Player list import from CSV (`id,name,rank,avatar`; only `name` is required).

use crate::models::{BracketError, Player};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PlayerRow {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    rank: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

/// Read players in file order. Rows without an id get a random one.
pub fn players_from_csv<R: Read>(reader: R) -> Result<Vec<Player>, BracketError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut players = Vec::new();
    for row in rdr.deserialize::<PlayerRow>() {
        let row = row.map_err(|e| BracketError::Import(e.to_string()))?;
        let player = match row.id.filter(|id| !id.is_empty()) {
            Some(id) => Player::new(id, row.name)?,
            None => Player::named(row.name)?,
        };
        let player = match row.rank {
            Some(rank) => player.with_rank(rank),
            None => player,
        };
        let player = match row.avatar {
            Some(avatar) => player.with_avatar(avatar),
            None => player,
        };
        players.push(player);
    }
    Ok(players)
}
