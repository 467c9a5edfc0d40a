pub mod cards;
pub mod evaluation;

pub use cards::{DeckSource, StandardDeck};
pub use evaluation::{rank_exposed, CompareHands, ExposedEval};
