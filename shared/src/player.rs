//! Player identifiers and public views.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::PlayerStatus;

/// Unique identifier for a seat at the table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PlayerId(pub usize);

impl From<usize> for PlayerId {
    fn from(v: usize) -> Self {
        PlayerId(v)
    }
}

impl From<PlayerId> for usize {
    fn from(player_id: PlayerId) -> Self {
        player_id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public view of one seat as included in hand notifications.
///
/// The engine broadcasts full hands, face-down card included, the way the
/// original table server did; concealment is a transport concern.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub stack: u32,
    /// Chips committed to the round so far.
    pub committed: u32,
    pub cards: Vec<Card>,
    pub status: PlayerStatus,
}
