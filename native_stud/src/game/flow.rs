//! Round orchestration: street loop, turn order, and prompting.

use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use stud_shared::{BetRange, EndOfRound, FinalStack, PotStatus};
use tracing::{error, info, warn};

use crate::game::betting::Decision;
use crate::game::engine::{Round, FIRST_STREET, LAST_STREET};
use crate::poker::CompareHands;
use crate::session::Session;

/// Replies a seat gets per turn before it is folded for unresponsiveness.
const MAX_ACTION_ATTEMPTS: u32 = 3;

impl Round {
    /// Play the round to completion: antes, four streets of dealing and
    /// betting, pots, showdown, and settlement. Consumes the round's
    /// single play; calling twice is an error.
    pub async fn play(&mut self, session: &mut Session<'_>) -> Result<EndOfRound> {
        if self.street != FIRST_STREET {
            bail!("round already played");
        }

        self.post_antes(session.deck, session.broadcast)?;
        let chips_total: u32 = self.players.iter().map(|p| p.stack + p.committed).sum();

        loop {
            if self.only_one_betting() {
                break;
            }
            self.deal_street(session.deck, session.broadcast)?;
            self.betting_street(session).await;
            if self.street > LAST_STREET {
                break;
            }
        }

        self.build_pots();
        self.distribute_pots(session.compare);

        let after: u32 = self.players.iter().map(|p| p.stack).sum();
        if after != chips_total {
            error!(before = chips_total, after, "chip total drifted during the round");
        }

        let mut stacks = Vec::with_capacity(self.players.len());
        for p in &self.players {
            session
                .store
                .save(&p.name, p.stack)
                .with_context(|| format!("saving stack for {}", p.name))?;
            stacks.push(FinalStack {
                player_id: p.id,
                name: p.name.clone(),
                stack: p.stack,
            });
        }

        let end = EndOfRound {
            winners: self.winner_ids.clone(),
            stacks,
        };
        session.broadcast.round_end(&end);
        info!(street = self.street, winners = ?end.winners, "round settled");
        Ok(end)
    }

    /// Run one street of betting: repeated passes over the seats until
    /// every live bet is matched or only one player can still act.
    async fn betting_street(&mut self, session: &mut Session<'_>) {
        self.starting = self.find_starting_player(session.compare);
        let n = self.players.len();

        let mut pass: u32 = 1;
        loop {
            for offset in 0..n {
                // The opening pass always completes so everyone gets a
                // turn; afterwards the street ends as soon as bets match.
                if pass != 1 && (self.no_more_calls() || self.only_one_betting()) {
                    self.finish_street();
                    return;
                }
                let seat = (self.starting + offset) % n;
                if !self.players[seat].is_betting() {
                    continue;
                }

                let range = self.bet_range(seat, pass, offset);
                let is_bring_in =
                    self.street == FIRST_STREET && pass == 1 && offset == 0;
                let decision = self.prompt(session, seat, range).await;
                self.apply_decision(seat, range, decision, is_bring_in);

                session.broadcast.pot_status(&PotStatus {
                    player_id: self.players[seat].id,
                    total_pot: self.total_pot(),
                    status: self.players[seat].status,
                });
            }
            if pass != 1 && (self.no_more_calls() || self.only_one_betting()) {
                self.finish_street();
                return;
            }
            pass += 1;
        }
    }

    /// Ask one seat to act, re-requesting on malformed or failed replies
    /// and folding the seat on timeout or after too many bad attempts.
    async fn prompt(
        &self,
        session: &mut Session<'_>,
        seat: usize,
        range: BetRange,
    ) -> Decision {
        let id = self.players[seat].id;
        for attempt in 1..=MAX_ACTION_ATTEMPTS {
            let reply = tokio::time::timeout(
                self.stakes.turn_timeout(),
                session.actions.request_action(id, range),
            )
            .await;
            match reply {
                Err(_) => {
                    warn!(player = %id, "turn timed out, folding");
                    return Decision::Fold;
                }
                Ok(Err(e)) => {
                    warn!(player = %id, attempt, "action request failed: {e:#}");
                }
                Ok(Ok(raw)) => match self.parse_reply(seat, range, raw) {
                    Some(decision) => return decision,
                    None => {
                        warn!(player = %id, attempt, raw, "malformed action, re-requesting");
                    }
                },
            }
        }
        warn!(player = %id, "no usable reply, folding");
        Decision::Fold
    }

    /// Pick the street's opening seat. On the first street the worst
    /// exposed card brings it in; later streets are opened by the best
    /// exposed hand among seats still able to bet. Ties keep the earliest
    /// seat.
    pub(crate) fn find_starting_player(&self, compare: &dyn CompareHands) -> usize {
        if self.street == FIRST_STREET {
            let mut worst = 0;
            for seat in 1..self.players.len() {
                if compare.compare(
                    &self.players[seat].cards,
                    &self.players[worst].cards,
                    1,
                ) == Ordering::Less
                {
                    worst = seat;
                }
            }
            return worst;
        }

        let visible = (self.street - 1) as usize;
        let mut best: Option<usize> = None;
        for seat in 0..self.players.len() {
            if !self.players[seat].is_betting() {
                continue;
            }
            match best {
                None => best = Some(seat),
                Some(b) => {
                    if compare.compare(
                        &self.players[seat].cards,
                        &self.players[b].cards,
                        visible,
                    ) == Ordering::Greater
                    {
                        best = Some(seat);
                    }
                }
            }
        }
        best.unwrap_or(0)
    }
}
