//! Collaborator seams a running round talks through.
//!
//! The engine never owns its I/O: turn prompts, notifications, the user
//! store, the deck, and hand comparison all arrive as trait objects so a
//! round can run against bots, scripts, or a real transport unchanged.

use std::collections::{HashMap, VecDeque};

use anyhow::{bail, Result};
use async_trait::async_trait;
use stud_shared::{BetRange, EndOfRound, PlayerId, PotStatus, TableView};

use crate::bot::SimpleBot;
use crate::poker::{CompareHands, DeckSource};

/// Supplies each player's reply when prompted to act.
///
/// The reply protocol matches the wire format: `-1` folds, `0` stands pat,
/// and any other value is a chip amount to commit.
#[async_trait]
pub trait ActionSource: Send {
    async fn request_action(&mut self, player: PlayerId, range: BetRange) -> Result<i64>;
}

/// Receives round notifications. Implementations must not block the round.
pub trait Broadcast: Send {
    /// Full hand snapshot, sent after every card dealt.
    fn hands(&mut self, view: &TableView);
    /// Pot total and acting player's status, sent after every commitment.
    fn pot_status(&mut self, update: &PotStatus);
    fn round_end(&mut self, end: &EndOfRound);
}

/// Durable stack storage keyed by player name.
pub trait UserStore: Send {
    fn load(&mut self, name: &str) -> Result<u32>;
    fn save(&mut self, name: &str, stack: u32) -> Result<()>;
}

/// Everything one round needs from the outside world.
pub struct Session<'a> {
    pub actions: &'a mut dyn ActionSource,
    pub broadcast: &'a mut dyn Broadcast,
    pub store: &'a mut dyn UserStore,
    pub deck: &'a mut dyn DeckSource,
    pub compare: &'a dyn CompareHands,
}

/// In-memory user store for bot tables and tests.
#[derive(Default)]
pub struct MemoryStore {
    stacks: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn seed(&mut self, name: impl Into<String>, stack: u32) {
        self.stacks.insert(name.into(), stack);
    }
}

impl UserStore for MemoryStore {
    fn load(&mut self, name: &str) -> Result<u32> {
        match self.stacks.get(name) {
            Some(&stack) => Ok(stack),
            None => bail!("unknown user: {name}"),
        }
    }

    fn save(&mut self, name: &str, stack: u32) -> Result<()> {
        self.stacks.insert(name.to_string(), stack);
        Ok(())
    }
}

/// Action source answering every prompt from one bot policy.
pub struct BotSource {
    bot: SimpleBot,
}

impl BotSource {
    pub fn new(bot: SimpleBot) -> Self {
        BotSource { bot }
    }
}

#[async_trait]
impl ActionSource for BotSource {
    async fn request_action(&mut self, player: PlayerId, range: BetRange) -> Result<i64> {
        let reply = self.bot.decide(range);
        tracing::debug!(%player, call = range.call, cap = range.cap, reply, "bot action");
        Ok(reply)
    }
}

/// Action source replaying a fixed list of replies; errors once drained.
/// Test plumbing for pinned betting sequences.
pub struct ScriptedSource {
    replies: VecDeque<i64>,
}

impl ScriptedSource {
    pub fn new(replies: Vec<i64>) -> Self {
        ScriptedSource {
            replies: replies.into(),
        }
    }
}

#[async_trait]
impl ActionSource for ScriptedSource {
    async fn request_action(&mut self, player: PlayerId, _range: BetRange) -> Result<i64> {
        match self.replies.pop_front() {
            Some(reply) => Ok(reply),
            None => bail!("script exhausted at player {player}"),
        }
    }
}

/// Broadcast sink that drops everything.
#[derive(Default)]
pub struct NullBroadcast;

impl Broadcast for NullBroadcast {
    fn hands(&mut self, _view: &TableView) {}
    fn pot_status(&mut self, _update: &PotStatus) {}
    fn round_end(&mut self, _end: &EndOfRound) {}
}
