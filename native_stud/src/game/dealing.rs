//! Antes, seat removal, and card dealing.

use stud_shared::{ActionEvent, ActionKind, GameAction, PlayerStatus};
use tracing::{debug, warn};

use crate::game::engine::{Round, FIRST_STREET};
use crate::game::error::RoundError;
use crate::poker::DeckSource;
use crate::session::Broadcast;

impl Round {
    /// Remove seats that cannot cover the ante, then collect antes and
    /// deal every remaining player their face-down card.
    pub(crate) fn post_antes(
        &mut self,
        deck: &mut dyn DeckSource,
        broadcast: &mut dyn Broadcast,
    ) -> Result<(), RoundError> {
        let ante = self.stakes.ante();

        // Mark first, compact once. Removal is not a fold: the seat leaves
        // the round entirely and contributes nothing.
        let removed: Vec<_> = self
            .players
            .iter()
            .filter(|p| p.stack < ante)
            .map(|p| p.id)
            .collect();
        for id in removed {
            warn!(
                player = %id,
                "{}",
                RoundError::InsufficientFunds(id, ante)
            );
            self.log(ActionEvent::game(GameAction::PlayerRemoved {
                player_id: id,
            }));
        }
        self.players.retain(|p| p.stack >= ante);

        for seat in 0..self.players.len() {
            let paid = self.players[seat].commit(ante);
            let id = self.players[seat].id;
            self.log(ActionEvent::player(id, ActionKind::Ante(paid)));

            let card = deck.draw_top().ok_or(RoundError::DeckExhausted(FIRST_STREET))?;
            self.players[seat].cards.push(card);
            self.log(ActionEvent::game(GameAction::DealtCard {
                player_id: id,
                face_up: false,
            }));
            broadcast.hands(&self.public(None));
        }
        debug!(players = self.players.len(), pot = self.total_pot(), "antes posted");
        Ok(())
    }

    /// Deal one card to every seat still in the round. The first card of a
    /// hand is face down; all later cards are face up. Folded and all-in
    /// seats keep receiving cards, matching live-table dealing.
    pub(crate) fn deal_street(&mut self, deck: &mut dyn DeckSource, broadcast: &mut dyn Broadcast) -> Result<(), RoundError> {
        self.log(ActionEvent::game(GameAction::StreetStarted {
            street: self.street,
        }));

        for seat in 0..self.players.len() {
            let face_up = !self.players[seat].cards.is_empty();
            let card = deck
                .draw_top()
                .ok_or(RoundError::DeckExhausted(self.street))?;
            self.players[seat].cards.push(card);

            let held = self.players[seat].cards.len();
            if self.players[seat].status != PlayerStatus::Folded && held != self.street as usize {
                return Err(RoundError::HandSizeViolation {
                    player: self.players[seat].id,
                    held,
                    street: self.street,
                });
            }

            let id = self.players[seat].id;
            self.log(ActionEvent::game(GameAction::DealtCard {
                player_id: id,
                face_up,
            }));
            broadcast.hands(&self.public(None));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::engine::{RoundPlayer, Stakes};
    use crate::poker::StandardDeck;
    use crate::session::NullBroadcast;
    use stud_shared::{Card, PlayerId};

    fn seats(stacks: &[u32]) -> Vec<RoundPlayer> {
        stacks
            .iter()
            .enumerate()
            .map(|(i, &s)| RoundPlayer::new(PlayerId(i), format!("P{i}"), s))
            .collect()
    }

    #[test]
    fn short_stacks_are_removed_not_folded() {
        let mut round = Round::new(seats(&[100, 1, 100]), Stakes::default());
        let mut deck = StandardDeck::shuffled();
        let mut sink = NullBroadcast;
        round.post_antes(&mut deck, &mut sink).unwrap();

        assert_eq!(round.players.len(), 2);
        assert!(round.players.iter().all(|p| p.id != PlayerId(1)));
        assert!(round
            .events
            .iter()
            .any(|e| matches!(e, stud_shared::ActionEvent::GameAction(GameAction::PlayerRemoved { player_id }) if *player_id == PlayerId(1))));
        // Each survivor paid the ante and holds one face-down card.
        for p in &round.players {
            assert_eq!(p.committed, 2);
            assert_eq!(p.cards.len(), 1);
        }
    }

    #[test]
    fn folded_seats_still_receive_cards() {
        let mut round = Round::new(seats(&[100, 100]), Stakes::default());
        let mut deck = StandardDeck::shuffled();
        let mut sink = NullBroadcast;
        round.post_antes(&mut deck, &mut sink).unwrap();
        round.players[1].status = PlayerStatus::Folded;

        round.deal_street(&mut deck, &mut sink).unwrap();
        assert_eq!(round.players[0].cards.len(), 2);
        assert_eq!(round.players[1].cards.len(), 2);
    }

    #[test]
    fn exhausted_deck_is_an_error() {
        let mut round = Round::new(seats(&[100, 100]), Stakes::default());
        let mut deck = StandardDeck::from_order(vec![Card(0)]);
        let mut sink = NullBroadcast;
        let err = round.post_antes(&mut deck, &mut sink).unwrap_err();
        assert!(matches!(err, RoundError::DeckExhausted(2)));
    }
}
