//! Deck abstraction and the standard shuffled 52-card deck.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use stud_shared::Card;

/// Source of cards for a round. The engine only ever takes the top card;
/// a scripted implementation makes dealing deterministic in tests.
pub trait DeckSource: Send {
    /// Remove and return the top card, or `None` when the deck is empty.
    fn draw_top(&mut self) -> Option<Card>;

    /// Number of cards left.
    fn remaining(&self) -> usize;
}

/// A standard 52-card deck dealt from the front.
pub struct StandardDeck {
    cards: VecDeque<Card>,
}

impl StandardDeck {
    /// Fresh deck in uniformly random order.
    pub fn shuffled() -> Self {
        let mut cards: Vec<Card> = (0..52).map(Card).collect();
        cards.shuffle(&mut rand::rng());
        StandardDeck {
            cards: cards.into(),
        }
    }

    /// Deck dealing the given cards front to back. Used to pin deals in
    /// tests and replays.
    pub fn from_order(cards: Vec<Card>) -> Self {
        StandardDeck {
            cards: cards.into(),
        }
    }
}

impl DeckSource for StandardDeck {
    fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_deck_has_52_unique_cards() {
        let mut deck = StandardDeck::shuffled();
        assert_eq!(deck.remaining(), 52);
        let mut seen = std::collections::HashSet::new();
        while let Some(card) = deck.draw_top() {
            assert!(seen.insert(card.0));
        }
        assert_eq!(seen.len(), 52);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn ordered_deck_deals_front_to_back() {
        let mut deck = StandardDeck::from_order(vec![Card(3), Card(17), Card(44)]);
        assert_eq!(deck.draw_top(), Some(Card(3)));
        assert_eq!(deck.draw_top(), Some(Card(17)));
        assert_eq!(deck.draw_top(), Some(Card(44)));
        assert_eq!(deck.draw_top(), None);
    }
}
