//! Shared data types for the five-card-stud table engine.
//!
//! Everything here is plain serde-serializable data: cards, player views,
//! betting ranges, the typed action/event log, hand-rank values and the
//! notification payloads the engine broadcasts to seated players.

pub mod cards;
pub mod game;
pub mod hand;
pub mod messages;
pub mod player;

pub use cards::{Card, CardRank, CardSuit};
pub use game::{ActionEvent, ActionKind, BetRange, GameAction, PlayerStatus};
pub use hand::{HandRank, HandRankCategory, HandResult};
pub use messages::{EndOfRound, FinalStack, PotStatus, TableView};
pub use player::{PlayerId, PlayerPublic};
