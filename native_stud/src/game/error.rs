//! Round-engine error conditions.

use stud_shared::PlayerId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoundError {
    /// A seat cannot cover the ante and is removed before the deal.
    #[error("player {0} cannot cover the ante of {1}")]
    InsufficientFunds(PlayerId, u32),

    /// A live hand does not hold the card count its street requires.
    #[error("player {player} holds {held} cards on street {street}")]
    HandSizeViolation {
        player: PlayerId,
        held: usize,
        street: u8,
    },

    /// The deck ran out mid-deal.
    #[error("deck exhausted while dealing street {0}")]
    DeckExhausted(u8),
}
