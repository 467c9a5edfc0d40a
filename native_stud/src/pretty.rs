//! Terminal rendering for table state. All printing is confined here.

use owo_colors::OwoColorize;
use stud_shared::{Card, EndOfRound, PlayerStatus, PotStatus, TableView};

use crate::session::Broadcast;

/// Render a card with red suits in red.
pub fn card_str(card: Card) -> String {
    let text = card.to_string();
    if card.is_red() {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

fn status_str(status: PlayerStatus) -> &'static str {
    match status {
        PlayerStatus::Betting => "",
        PlayerStatus::Folded => " (folded)",
        PlayerStatus::AllIn => " (all in)",
    }
}

/// Render the full table snapshot, one line per seat.
pub fn table_str(view: &TableView) -> String {
    let mut out = format!(
        "street {} | pot {}\n",
        view.street.bold(),
        view.pot.yellow()
    );
    for p in &view.players {
        let cards: Vec<String> = p.cards.iter().map(|&c| card_str(c)).collect();
        let marker = if view.to_act == Some(p.id) { "→ " } else { "  " };
        out.push_str(&format!(
            "{}{}: {} [{}] stack {} in {}{}\n",
            marker,
            p.name.bold(),
            p.id,
            cards.join(" "),
            p.stack,
            p.committed,
            status_str(p.status),
        ));
    }
    out
}

pub fn pot_status_str(update: &PotStatus) -> String {
    format!(
        "player {} acted | pot {}{}",
        update.player_id,
        update.total_pot.yellow(),
        status_str(update.status),
    )
}

pub fn round_end_str(end: &EndOfRound) -> String {
    let winners: Vec<String> = end.winners.iter().map(|w| w.to_string()).collect();
    let mut out = format!("winners: {}\n", winners.join(", ").green().bold());
    for s in &end.stacks {
        out.push_str(&format!("  {}: {}\n", s.name, s.stack));
    }
    out
}

/// Broadcast sink that prints every notification to stdout.
#[derive(Default)]
pub struct PrettyBroadcast;

impl Broadcast for PrettyBroadcast {
    fn hands(&mut self, view: &TableView) {
        println!("{}", table_str(view));
    }

    fn pot_status(&mut self, update: &PotStatus) {
        println!("{}", pot_status_str(update));
    }

    fn round_end(&mut self, end: &EndOfRound) {
        println!("{}", round_end_str(end));
    }
}
