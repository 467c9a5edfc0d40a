//! Notification payloads broadcast by the round engine.

use serde::{Deserialize, Serialize};

use crate::game::PlayerStatus;
use crate::player::{PlayerId, PlayerPublic};

/// Snapshot of all currently known hands plus table state, sent after every
/// card dealt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableView {
    pub players: Vec<PlayerPublic>,
    pub pot: u32,
    pub street: u8,
    pub to_act: Option<PlayerId>,
}

/// Pot total and acting player's status, sent after every commitment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PotStatus {
    pub player_id: PlayerId,
    pub total_pot: u32,
    pub status: PlayerStatus,
}

/// One seat's stack at the end of the round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FinalStack {
    pub player_id: PlayerId,
    pub name: String,
    pub stack: u32,
}

/// Terminal round report: tie-aware winner list in pot order plus every
/// final stack.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EndOfRound {
    pub winners: Vec<PlayerId>,
    pub stacks: Vec<FinalStack>,
}
