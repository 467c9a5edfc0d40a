//! Showdown: rank the live hands and pay out every pot.

use std::cmp::Ordering;

use stud_shared::{ActionEvent, GameAction, HandResult};
use tracing::info;

use crate::game::engine::Round;
use crate::poker::{rank_exposed, CompareHands};

impl Round {
    /// Rank every non-folded hand, then award each pot to the best among
    /// its eligible seats, splitting ties evenly. Odd chips go one per
    /// winner starting from the lowest seat.
    pub(crate) fn distribute_pots(&mut self, compare: &dyn CompareHands) {
        let results: Vec<HandResult> = self
            .players
            .iter()
            .filter(|p| !p.is_folded())
            .map(|p| HandResult {
                player_id: p.id,
                rank: rank_exposed(&p.cards, 5),
            })
            .collect();
        self.log(ActionEvent::game(GameAction::Showdown { results }));

        let pots = std::mem::take(&mut self.pots);
        for pot in &pots {
            let Some(&first) = pot.eligible.first() else {
                continue;
            };

            let mut best = first;
            for &seat in &pot.eligible[1..] {
                let ord = compare.compare(
                    &self.players[seat].cards,
                    &self.players[best].cards,
                    5,
                );
                if ord == Ordering::Greater {
                    best = seat;
                }
            }

            let mut winners: Vec<usize> = pot
                .eligible
                .iter()
                .copied()
                .filter(|&seat| {
                    compare.compare(
                        &self.players[seat].cards,
                        &self.players[best].cards,
                        5,
                    ) == Ordering::Equal
                })
                .collect();
            winners.sort_unstable();

            let share = pot.total / winners.len() as u32;
            let mut remainder = pot.total % winners.len() as u32;
            for &seat in &winners {
                let mut award = share;
                if remainder > 0 {
                    award += 1;
                    remainder -= 1;
                }
                self.players[seat].stack += award;
                self.players[seat].winner = true;
            }

            let ids: Vec<_> = winners.iter().map(|&s| self.players[s].id).collect();
            info!(winners = ?ids, amount = pot.total, "pot awarded");
            self.log(ActionEvent::game(GameAction::PotAwarded {
                winners: ids.clone(),
                amount: pot.total,
            }));
            for id in ids {
                if !self.winner_ids.contains(&id) {
                    self.winner_ids.push(id);
                }
            }
            for &seat in &winners {
                self.players[seat].winner = false;
            }
        }
        self.pots = pots;
    }
}
