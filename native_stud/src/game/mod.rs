//! The round engine: state, dealing, betting, pots, and showdown.

mod betting;
mod dealing;
mod engine;
mod error;
mod flow;
mod pots;
mod showdown;

pub use engine::{Round, RoundPlayer, Stakes, FIRST_STREET, LAST_STREET};
pub use error::RoundError;
pub use pots::Pot;
