//! Full-round scenarios with pinned decks and scripted replies.

use native_stud::game::{Round, RoundPlayer, Stakes};
use native_stud::poker::{ExposedEval, StandardDeck};
use native_stud::session::{MemoryStore, NullBroadcast, ScriptedSource, Session};
use stud_shared::{Card, CardRank, CardSuit, PlayerId};

fn card(rank: CardRank, suit: CardSuit) -> Card {
    Card::new(rank, suit)
}

fn seats(stacks: &[u32]) -> Vec<RoundPlayer> {
    stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| RoundPlayer::new(PlayerId(i), format!("P{i}"), s))
        .collect()
}

#[tokio::test]
async fn fold_out_awards_the_pot_without_showdown() {
    // Deal order: three face-down cards, then the street-two up cards.
    // Seat 1 shows the lowest up card and posts the bring-in; the other
    // two fold to it.
    let mut deck = StandardDeck::from_order(vec![
        card(CardRank::Five, CardSuit::Clubs),
        card(CardRank::Nine, CardSuit::Diamonds),
        card(CardRank::Seven, CardSuit::Spades),
        card(CardRank::King, CardSuit::Diamonds),
        card(CardRank::Two, CardSuit::Clubs),
        card(CardRank::Queen, CardSuit::Hearts),
    ]);
    let mut actions = ScriptedSource::new(vec![2, -1, -1]);
    let mut broadcast = NullBroadcast;
    let mut store = MemoryStore::default();
    let compare = ExposedEval;

    let mut round = Round::new(seats(&[100, 100, 100]), Stakes::default());
    let mut session = Session {
        actions: &mut actions,
        broadcast: &mut broadcast,
        store: &mut store,
        deck: &mut deck,
        compare: &compare,
    };
    let end = round.play(&mut session).await.unwrap();

    assert_eq!(end.winners, vec![PlayerId(1)]);
    let stacks: Vec<u32> = round.players.iter().map(|p| p.stack).collect();
    assert_eq!(stacks, vec![98, 104, 98]);
    assert_eq!(stacks.iter().sum::<u32>(), 300);
}

#[tokio::test]
async fn three_way_tie_splits_the_pot_at_showdown() {
    // Every seat ends with ace-king-queen-jack-nine, no flush, no
    // straight. Street two is called around; later streets check through.
    let mut deck = StandardDeck::from_order(vec![
        // face-down cards
        card(CardRank::Ace, CardSuit::Clubs),
        card(CardRank::Ace, CardSuit::Diamonds),
        card(CardRank::Ace, CardSuit::Hearts),
        // street 2
        card(CardRank::King, CardSuit::Diamonds),
        card(CardRank::King, CardSuit::Hearts),
        card(CardRank::King, CardSuit::Spades),
        // street 3
        card(CardRank::Queen, CardSuit::Hearts),
        card(CardRank::Queen, CardSuit::Spades),
        card(CardRank::Queen, CardSuit::Clubs),
        // street 4
        card(CardRank::Jack, CardSuit::Spades),
        card(CardRank::Jack, CardSuit::Clubs),
        card(CardRank::Jack, CardSuit::Diamonds),
        // street 5
        card(CardRank::Nine, CardSuit::Clubs),
        card(CardRank::Nine, CardSuit::Diamonds),
        card(CardRank::Nine, CardSuit::Hearts),
    ]);
    let mut replies = vec![2, 2, 2]; // bring-in called around
    replies.extend([0, 0, 0]); // street 3 checks
    replies.extend([0, 0, 0]); // street 4
    replies.extend([0, 0, 0]); // street 5
    let mut actions = ScriptedSource::new(replies);
    let mut broadcast = NullBroadcast;
    let mut store = MemoryStore::default();
    let compare = ExposedEval;

    let mut round = Round::new(seats(&[100, 100, 100]), Stakes::default());
    let mut session = Session {
        actions: &mut actions,
        broadcast: &mut broadcast,
        store: &mut store,
        deck: &mut deck,
        compare: &compare,
    };
    let end = round.play(&mut session).await.unwrap();

    assert_eq!(
        end.winners,
        vec![PlayerId(0), PlayerId(1), PlayerId(2)]
    );
    // 12 chips split three ways, no remainder.
    let stacks: Vec<u32> = round.players.iter().map(|p| p.stack).collect();
    assert_eq!(stacks, vec![100, 100, 100]);
}

#[tokio::test]
async fn all_in_short_stack_wins_a_capped_pot() {
    // Seat 2 brings it in, seat 0 completes to 10, seat 1 shoves its
    // remaining 58 holding a pair of aces, seat 2 folds, seat 0 calls.
    let mut deck = StandardDeck::from_order(vec![
        card(CardRank::Seven, CardSuit::Clubs),
        card(CardRank::Ace, CardSuit::Spades),
        card(CardRank::Nine, CardSuit::Clubs),
        card(CardRank::King, CardSuit::Clubs),
        card(CardRank::Ace, CardSuit::Hearts),
        card(CardRank::Two, CardSuit::Diamonds),
    ]);
    let mut actions = ScriptedSource::new(vec![2, 10, 58, -1, 48]);
    let mut broadcast = NullBroadcast;
    let mut store = MemoryStore::default();
    let compare = ExposedEval;

    let mut round = Round::new(seats(&[100, 60, 100]), Stakes::default());
    let mut session = Session {
        actions: &mut actions,
        broadcast: &mut broadcast,
        store: &mut store,
        deck: &mut deck,
        compare: &compare,
    };
    let end = round.play(&mut session).await.unwrap();

    assert_eq!(end.winners, vec![PlayerId(1)]);
    let stacks: Vec<u32> = round.players.iter().map(|p| p.stack).collect();
    assert_eq!(stacks, vec![40, 124, 96]);
    assert_eq!(stacks.iter().sum::<u32>(), 260);
}

#[tokio::test]
async fn settlement_persists_final_stacks() {
    let mut deck = StandardDeck::from_order(vec![
        card(CardRank::Five, CardSuit::Clubs),
        card(CardRank::Nine, CardSuit::Diamonds),
        card(CardRank::Two, CardSuit::Clubs),
        card(CardRank::King, CardSuit::Diamonds),
    ]);
    let mut actions = ScriptedSource::new(vec![2, -1]);
    let mut broadcast = NullBroadcast;
    let mut store = MemoryStore::default();
    let compare = ExposedEval;

    let mut round = Round::new(seats(&[100, 100]), Stakes::default());
    let mut session = Session {
        actions: &mut actions,
        broadcast: &mut broadcast,
        store: &mut store,
        deck: &mut deck,
        compare: &compare,
    };
    let end = round.play(&mut session).await.unwrap();

    assert_eq!(end.stacks.len(), 2);
    // The store holds the same numbers the report does.
    use native_stud::session::UserStore;
    for s in &end.stacks {
        assert_eq!(store.load(&s.name).unwrap(), s.stack);
    }
}

#[tokio::test]
async fn playing_a_round_twice_is_an_error() {
    let mut deck = StandardDeck::from_order(vec![
        card(CardRank::Five, CardSuit::Clubs),
        card(CardRank::Nine, CardSuit::Diamonds),
        card(CardRank::Two, CardSuit::Clubs),
        card(CardRank::King, CardSuit::Diamonds),
    ]);
    let mut actions = ScriptedSource::new(vec![2, -1, 2, -1]);
    let mut broadcast = NullBroadcast;
    let mut store = MemoryStore::default();
    let compare = ExposedEval;

    let mut round = Round::new(seats(&[100, 100]), Stakes::default());
    let mut session = Session {
        actions: &mut actions,
        broadcast: &mut broadcast,
        store: &mut store,
        deck: &mut deck,
        compare: &compare,
    };
    round.play(&mut session).await.unwrap();
    assert!(round.play(&mut session).await.is_err());
}
