//! Round state: stakes, seats, streets, and the event log.

use serde::{Deserialize, Serialize};
use stud_shared::{
    ActionEvent, Card, PlayerId, PlayerPublic, PlayerStatus, TableView,
};

/// First betting street. Streets double as hand-size targets: on street
/// `s` every live player holds `s` cards.
pub const FIRST_STREET: u8 = 2;
/// Last betting street (five cards).
pub const LAST_STREET: u8 = 5;

/// Upper bound on the recent-event log kept per round.
const MAX_EVENTS: usize = 256;

/// Table stakes for a fixed-limit five-card-stud round.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Stakes {
    /// Small bet unit; also sets the ante at a quarter of it.
    pub low_bet: u32,
    /// Forced opening bet on the first street.
    pub bring_in: u32,
    /// Raises allowed per street before betting locks to calls.
    pub max_raises: u32,
    /// Per-turn reply deadline in milliseconds.
    pub turn_timeout_ms: u64,
}

impl Default for Stakes {
    fn default() -> Self {
        Stakes {
            low_bet: 10,
            bring_in: 2,
            max_raises: 3,
            turn_timeout_ms: 30_000,
        }
    }
}

impl Stakes {
    /// Ante per player, a quarter of the low bet rounded down.
    pub fn ante(&self) -> u32 {
        self.low_bet / 4
    }

    pub fn turn_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.turn_timeout_ms)
    }
}

/// One seat in the round.
#[derive(Clone, Debug)]
pub struct RoundPlayer {
    pub id: PlayerId,
    pub name: String,
    pub stack: u32,
    /// Chips moved from the stack into the round so far.
    pub committed: u32,
    pub cards: Vec<Card>,
    pub status: PlayerStatus,
    /// Scratch flag used while splitting a single pot.
    pub winner: bool,
}

impl RoundPlayer {
    pub fn new(id: PlayerId, name: impl Into<String>, stack: u32) -> Self {
        RoundPlayer {
            id,
            name: name.into(),
            stack,
            committed: 0,
            cards: Vec::new(),
            status: PlayerStatus::Betting,
            winner: false,
        }
    }

    pub fn is_betting(&self) -> bool {
        self.status == PlayerStatus::Betting
    }

    pub fn is_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }

    pub fn is_all_in(&self) -> bool {
        self.status == PlayerStatus::AllIn
    }

    /// Move up to `amount` chips from stack to committed, clamped at the
    /// stack. Returns what was actually paid.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let pay = amount.min(self.stack);
        self.stack -= pay;
        self.committed += pay;
        pay
    }

    pub(crate) fn public(&self) -> PlayerPublic {
        PlayerPublic {
            id: self.id,
            name: self.name.clone(),
            stack: self.stack,
            committed: self.committed,
            cards: self.cards.clone(),
            status: self.status,
        }
    }
}

/// A single round of five-card stud from antes to settlement.
pub struct Round {
    pub stakes: Stakes,
    pub players: Vec<RoundPlayer>,
    /// Current street, equal to the live hand size (2..=5).
    pub street: u8,
    /// Raises taken on the current street.
    pub raises: u32,
    /// Seat index that opens the current street.
    pub starting: usize,
    pub pots: Vec<crate::game::Pot>,
    pub events: Vec<ActionEvent>,
    /// Winners of each pot in award order, deduplicated.
    pub winner_ids: Vec<PlayerId>,
}

impl Round {
    pub fn new(players: Vec<RoundPlayer>, stakes: Stakes) -> Self {
        Round {
            stakes,
            players,
            street: FIRST_STREET,
            raises: 0,
            starting: 0,
            pots: Vec::new(),
            events: Vec::new(),
            winner_ids: Vec::new(),
        }
    }

    /// Everything committed so far, across all seats.
    pub fn total_pot(&self) -> u32 {
        self.players.iter().map(|p| p.committed).sum()
    }

    /// Snapshot for broadcast. Hands are sent in full; concealment of the
    /// face-down card is left to the transport.
    pub fn public(&self, to_act: Option<PlayerId>) -> TableView {
        TableView {
            players: self.players.iter().map(|p| p.public()).collect(),
            pot: self.total_pot(),
            street: self.street,
            to_act,
        }
    }

    pub fn log(&mut self, event: ActionEvent) {
        self.events.push(event);
        if self.events.len() > MAX_EVENTS {
            let drop = self.events.len() - MAX_EVENTS;
            self.events.drain(0..drop);
        }
    }

    pub(crate) fn betting_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_betting()).count()
    }

    /// True when at most one player can still make a voluntary bet.
    pub(crate) fn only_one_betting(&self) -> bool {
        self.betting_count() <= 1
    }

    /// True when every still-betting player has matched the standing bet.
    pub(crate) fn no_more_calls(&self) -> bool {
        let target = self.call_target();
        self.players
            .iter()
            .filter(|p| p.is_betting())
            .all(|p| p.committed == target)
    }

    /// Highest commitment among non-folded seats; what callers must match.
    pub(crate) fn call_target(&self) -> u32 {
        self.players
            .iter()
            .filter(|p| !p.is_folded())
            .map(|p| p.committed)
            .max()
            .unwrap_or(0)
    }
}
