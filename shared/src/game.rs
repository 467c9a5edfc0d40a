//! Betting status, ranges, and the typed action/event log.

use serde::{Deserialize, Serialize};

use crate::hand::HandResult;
use crate::player::PlayerId;

/// Betting status of a seated player. Exactly one value holds at any
/// instant; `AllIn` is terminal for voluntary action but the player stays
/// eligible at showdown unless folded.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    Betting,
    Folded,
    AllIn,
}

/// Inclusive range of chips a player may commit on their turn.
///
/// `call` is the amount needed to match the standing bet; `cap` is the most
/// that may be committed. Folding and going all-in are always legal on top
/// of the range.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetRange {
    pub call: u32,
    pub cap: u32,
}

impl BetRange {
    pub fn contains(&self, amount: u32) -> bool {
        amount >= self.call && amount <= self.cap
    }
}

/// Player-side action kinds used in the event log.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    Ante(u32),
    BringIn(u32),
    StandPat,
    Bet(u32),
    AllIn(u32),
    Fold,
}

/// Game-level events (dealing, removals, showdown, pot awards).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GameAction {
    StreetStarted { street: u8 },
    DealtCard { player_id: PlayerId, face_up: bool },
    PlayerRemoved { player_id: PlayerId },
    Showdown { results: Vec<HandResult> },
    PotAwarded { winners: Vec<PlayerId>, amount: u32 },
}

/// A single recorded action/event in the round — the canonical, typed
/// source-of-truth for logs and UIs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ActionEvent {
    PlayerAction {
        player_id: PlayerId,
        action: ActionKind,
    },
    GameAction(GameAction),
}

impl ActionEvent {
    /// Helper to create a PlayerAction event from a player id + ActionKind
    pub fn player(player_id: PlayerId, action: ActionKind) -> Self {
        ActionEvent::PlayerAction { player_id, action }
    }

    /// Helper to create a GameAction event
    pub fn game(action: GameAction) -> Self {
        ActionEvent::GameAction(action)
    }
}
