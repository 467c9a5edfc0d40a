//! Per-turn betting rules: legal ranges, reply parsing, and applying
//! decisions to the round.

use stud_shared::{ActionEvent, ActionKind, BetRange, PlayerStatus};

use crate::game::engine::{Round, FIRST_STREET};

/// What a reply resolved to once validated against the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Decision {
    StandPat,
    Fold,
    Commit(u32),
}

impl Round {
    /// Legal betting range for the seat acting at `offset` seats past the
    /// street's starting player, on betting pass `pass` (1-based).
    pub(crate) fn bet_range(&self, seat: usize, pass: u32, offset: usize) -> BetRange {
        let call = self.call_target() - self.players[seat].committed;

        // The street opener's first turn of the round is the forced
        // bring-in: exactly that amount, no other choice but fold.
        if self.street == FIRST_STREET && pass == 1 && offset == 0 {
            return BetRange {
                call: self.stakes.bring_in,
                cap: self.stakes.bring_in,
            };
        }

        // Raise cap reached: the only bet left is a flat call.
        if self.raises >= self.stakes.max_raises {
            return BetRange { call, cap: call };
        }

        let limit = match self.street {
            // The seat right after the bring-in may complete only up to
            // the low bet in total.
            FIRST_STREET if pass == 1 && offset == 1 => {
                self.stakes.low_bet - self.stakes.bring_in
            }
            FIRST_STREET | 3 => self.stakes.low_bet,
            _ => 2 * self.stakes.low_bet,
        };
        BetRange {
            call,
            cap: call + limit,
        }
    }

    /// Validate a raw reply against the range. `None` means the reply is
    /// malformed and must be re-requested. `-1` folds, `0` stands pat when
    /// nothing is owed, and a positive amount commits chips; any amount at
    /// or above the stack is the always-legal all-in.
    pub(crate) fn parse_reply(&self, seat: usize, range: BetRange, reply: i64) -> Option<Decision> {
        if reply == -1 {
            return Some(Decision::Fold);
        }
        if reply == 0 {
            return if range.call == 0 {
                Some(Decision::StandPat)
            } else {
                None
            };
        }
        if reply < 0 {
            return None;
        }

        let amount = u32::try_from(reply).unwrap_or(u32::MAX);
        let stack = self.players[seat].stack;
        if stack > 0 && amount >= stack {
            return Some(Decision::Commit(amount));
        }
        if range.contains(amount) {
            return Some(Decision::Commit(amount));
        }
        None
    }

    /// Apply a validated decision: move chips, update status, count the
    /// raise, and log the action.
    pub(crate) fn apply_decision(
        &mut self,
        seat: usize,
        range: BetRange,
        decision: Decision,
        is_bring_in: bool,
    ) {
        let id = self.players[seat].id;
        match decision {
            Decision::Fold => {
                self.players[seat].status = PlayerStatus::Folded;
                self.log(ActionEvent::player(id, ActionKind::Fold));
            }
            Decision::StandPat => {
                self.log(ActionEvent::player(id, ActionKind::StandPat));
            }
            Decision::Commit(amount) => {
                // Raises count by intent, before any all-in clamp. The
                // forced bring-in never counts as a raise.
                if !is_bring_in && amount > range.call {
                    self.raises += 1;
                }
                let paid = self.players[seat].commit(amount);
                if self.players[seat].stack == 0 {
                    self.players[seat].status = PlayerStatus::AllIn;
                    self.log(ActionEvent::player(id, ActionKind::AllIn(paid)));
                } else if is_bring_in {
                    self.log(ActionEvent::player(id, ActionKind::BringIn(paid)));
                } else {
                    self.log(ActionEvent::player(id, ActionKind::Bet(paid)));
                }
            }
        }
    }

    /// Reset per-street counters and advance to the next street.
    pub(crate) fn finish_street(&mut self) {
        self.raises = 0;
        self.starting = 0;
        self.street += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::engine::{RoundPlayer, Stakes};
    use stud_shared::PlayerId;

    fn round(stacks: &[u32]) -> Round {
        let players = stacks
            .iter()
            .enumerate()
            .map(|(i, &s)| RoundPlayer::new(PlayerId(i), format!("P{i}"), s))
            .collect();
        Round::new(players, Stakes::default())
    }

    #[test]
    fn bring_in_is_forced() {
        let round = round(&[100, 100, 100]);
        let range = round.bet_range(0, 1, 0);
        assert_eq!(range, BetRange { call: 2, cap: 2 });
    }

    #[test]
    fn second_actor_completes_to_the_low_bet() {
        let mut r = round(&[100, 100, 100]);
        r.players[0].commit(2); // bring-in posted
        let range = r.bet_range(1, 1, 1);
        // Owes 2, may add up to low_bet - bring_in on top.
        assert_eq!(range, BetRange { call: 2, cap: 10 });
    }

    #[test]
    fn street_limits_double_on_later_streets() {
        let mut r = round(&[100, 100]);
        r.street = 3;
        assert_eq!(r.bet_range(0, 1, 0).cap, 10);
        r.street = 4;
        assert_eq!(r.bet_range(0, 1, 0).cap, 20);
        r.street = 5;
        assert_eq!(r.bet_range(0, 1, 0).cap, 20);
    }

    #[test]
    fn raise_cap_locks_range_to_the_call() {
        let mut r = round(&[100, 100]);
        r.street = 3;
        r.raises = r.stakes.max_raises;
        r.players[1].commit(10);
        let range = r.bet_range(0, 2, 0);
        assert_eq!(range, BetRange { call: 10, cap: 10 });
    }

    #[test]
    fn parse_rejects_stand_pat_when_chips_are_owed() {
        let r = round(&[100, 100]);
        let range = BetRange { call: 5, cap: 15 };
        assert_eq!(r.parse_reply(0, range, 0), None);
        assert_eq!(r.parse_reply(0, range, -1), Some(Decision::Fold));
        assert_eq!(r.parse_reply(0, range, 5), Some(Decision::Commit(5)));
        assert_eq!(r.parse_reply(0, range, 4), None);
        assert_eq!(r.parse_reply(0, range, 16), None);
        assert_eq!(r.parse_reply(0, range, -7), None);
    }

    #[test]
    fn oversized_reply_is_all_in_when_it_covers_the_stack() {
        let r = round(&[30, 100]);
        let range = BetRange { call: 5, cap: 15 };
        // 30 is outside the range but equals the stack.
        assert_eq!(r.parse_reply(0, range, 30), Some(Decision::Commit(30)));
        assert_eq!(r.parse_reply(0, range, 1_000_000), Some(Decision::Commit(1_000_000)));
        // Same reply from a deep stack stays malformed.
        assert_eq!(r.parse_reply(1, range, 30), None);
    }

    #[test]
    fn raises_count_by_intent_and_bring_in_is_exempt() {
        let mut r = round(&[100, 100, 100]);
        let bring = r.bet_range(0, 1, 0);
        r.apply_decision(0, bring, Decision::Commit(2), true);
        assert_eq!(r.raises, 0);

        let range = r.bet_range(1, 1, 1);
        r.apply_decision(1, range, Decision::Commit(10), false);
        assert_eq!(r.raises, 1);

        let range = r.bet_range(2, 1, 2);
        r.apply_decision(2, range, Decision::Commit(10), false);
        assert_eq!(r.raises, 1);
    }

    #[test]
    fn short_stack_commit_clamps_and_goes_all_in() {
        let mut r = round(&[8, 100]);
        r.players[1].commit(20);
        let range = BetRange { call: 20, cap: 30 };
        r.apply_decision(0, range, Decision::Commit(20), false);
        assert_eq!(r.players[0].stack, 0);
        assert_eq!(r.players[0].committed, 8);
        assert!(r.players[0].is_all_in());
        // A clamped call is not a raise.
        assert_eq!(r.raises, 0);
    }
}
