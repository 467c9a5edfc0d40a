use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use native_stud::bot::SimpleBot;
use native_stud::cli::TableCli;
use native_stud::config::TableConfig;
use native_stud::game::{Round, RoundPlayer};
use native_stud::poker::{ExposedEval, StandardDeck};
use native_stud::pretty::PrettyBroadcast;
use native_stud::session::{BotSource, MemoryStore, Session, UserStore};
use stud_shared::PlayerId;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = TableCli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("native_stud=info,warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.debug)
        .init();

    let config = TableConfig::load_or_create_with_override(&cli.config, cli.bots)
        .context("loading table config")?;
    config.validate()?;

    let mut store = MemoryStore::default();
    let names: Vec<String> = (1..=config.bots).map(|i| format!("Bot {i}")).collect();
    for name in &names {
        store.seed(name.clone(), config.starting_stack);
    }

    let mut actions = BotSource::new(SimpleBot::default());
    let mut broadcast = PrettyBroadcast;
    let compare = ExposedEval;

    for hand in 1..=cli.hands {
        // Seat everyone who still has chips.
        let mut players = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let stack = store.load(name)?;
            if stack > 0 {
                players.push(RoundPlayer::new(PlayerId(i), name.clone(), stack));
            }
        }
        if players.len() < 2 {
            tracing::info!(hand, "not enough funded players left, stopping");
            break;
        }

        let mut deck = StandardDeck::shuffled();
        let mut round = Round::new(players, config.stakes);
        let mut session = Session {
            actions: &mut actions,
            broadcast: &mut broadcast,
            store: &mut store,
            deck: &mut deck,
            compare: &compare,
        };
        round
            .play(&mut session)
            .await
            .with_context(|| format!("playing hand {hand}"))?;

        if let Ok(log) = serde_json::to_string(&round.events) {
            tracing::debug!(hand, events = %log, "round event log");
        }
    }

    Ok(())
}
