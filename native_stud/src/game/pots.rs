//! Side-pot construction from per-seat commitments.

use tracing::debug;

use crate::game::engine::Round;

/// One pot: its per-seat cap, chip total, and the seats eligible to win it.
#[derive(Clone, Debug)]
pub struct Pot {
    /// Per-seat contribution cap, `None` for the trailing uncapped pot.
    pub cap: Option<u32>,
    pub total: u32,
    /// Seat indices eligible at showdown, in commitment order.
    pub eligible: Vec<usize>,
}

impl Round {
    /// Split the committed chips into side pots. Each all-in commitment
    /// caps a pot; whatever is left lands in one uncapped pot. Folded
    /// seats contribute everywhere but are eligible nowhere, and a seat is
    /// only eligible for pots it actually put chips into.
    pub(crate) fn build_pots(&mut self) {
        let n = self.players.len();

        // Seats in ascending commitment order; the sort is stable, so
        // equal commitments keep seat order.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&i| self.players[i].committed);

        let mut remaining: Vec<u32> = self.players.iter().map(|p| p.committed).collect();
        let mut pots: Vec<Pot> = Vec::new();

        for &allin in &order {
            if !self.players[allin].is_all_in() || remaining[allin] == 0 {
                continue;
            }
            let cap = remaining[allin];
            let mut pot = Pot {
                cap: Some(cap),
                total: 0,
                eligible: Vec::new(),
            };
            for &seat in &order {
                let take = remaining[seat].min(cap);
                pot.total += take;
                remaining[seat] -= take;
                if take > 0 && !self.players[seat].is_folded() {
                    pot.eligible.push(seat);
                }
            }
            pots.push(pot);
        }

        // Whatever is left is the final uncapped pot.
        let mut last = Pot {
            cap: None,
            total: 0,
            eligible: Vec::new(),
        };
        for &seat in &order {
            let take = remaining[seat];
            last.total += take;
            remaining[seat] = 0;
            if take > 0 && !self.players[seat].is_folded() {
                last.eligible.push(seat);
            }
        }
        if last.total > 0 {
            if last.eligible.is_empty() {
                // Only folded seats overflowed every capped pot. Nobody is
                // left to win those chips, so they go back where they came
                // from.
                for seat in 0..n {
                    if !self.players[seat].is_folded() {
                        continue;
                    }
                    let swept: u32 = pots
                        .iter()
                        .filter_map(|p| p.cap)
                        .map(|cap| cap.min(self.players[seat].committed))
                        .sum::<u32>()
                        .min(self.players[seat].committed);
                    let refund = (self.players[seat].committed - swept).min(last.total);
                    self.players[seat].stack += refund;
                    self.players[seat].committed -= refund;
                    last.total -= refund;
                    if last.total == 0 {
                        break;
                    }
                }
            } else {
                pots.push(last);
            }
        }

        let spread: u32 = pots.iter().map(|p| p.total).sum();
        debug_assert_eq!(spread, self.total_pot());
        debug!(pots = pots.len(), total = spread, "pots built");
        self.pots = pots;
    }
}
