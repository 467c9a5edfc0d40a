//! Hand evaluation over the exposed suffix of a stud hand.
//!
//! Cards are held in deal order with the face-down card first, so the
//! exposed portion at visibility `v` is the last `v` cards. Evaluation
//! works for 1 through 5 cards; straights and flushes only exist at 5.

use std::cmp::Ordering;

use stud_shared::{Card, HandRank, HandRankCategory};

/// Comparison seam used by turn-order selection and showdown.
pub trait CompareHands: Send + Sync {
    /// Compare two hands by their exposed suffix of `visible` cards.
    fn compare(&self, a: &[Card], b: &[Card], visible: usize) -> Ordering;
}

/// Standard high-hand comparison on the exposed cards.
pub struct ExposedEval;

impl CompareHands for ExposedEval {
    fn compare(&self, a: &[Card], b: &[Card], visible: usize) -> Ordering {
        rank_exposed(a, visible).cmp(&rank_exposed(b, visible))
    }
}

/// Rank the last `min(visible, len)` cards of a hand.
pub fn rank_exposed(cards: &[Card], visible: usize) -> HandRank {
    let shown = visible.min(cards.len());
    rank_cards(&cards[cards.len() - shown..])
}

/// Numeric rank with ace high (2..=14).
fn rank_value_high(card: Card) -> u8 {
    let r = card.0 % 13;
    if r == 0 {
        14
    } else {
        r + 1
    }
}

/// Highest rank appearing exactly `n` times, if any.
fn find_kind(counts: &[u8; 15], n: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&v| counts[v as usize] == n)
}

/// Distinct ranks not in `used`, highest first, at most `n` of them.
fn kickers(values: &[u8], used: &[u8], n: usize) -> Vec<u8> {
    let mut ks: Vec<u8> = values
        .iter()
        .copied()
        .filter(|v| !used.contains(v))
        .collect();
    ks.sort_unstable_by(|a, b| b.cmp(a));
    ks.dedup();
    ks.truncate(n);
    ks
}

/// Rank an exposed hand of 1 to 5 cards.
fn rank_cards(cards: &[Card]) -> HandRank {
    if cards.is_empty() {
        return HandRank {
            category: HandRankCategory::HighCard,
            tiebreakers: Vec::new(),
        };
    }

    let values: Vec<u8> = cards.iter().map(|&c| rank_value_high(c)).collect();
    let mut counts = [0u8; 15];
    for &v in &values {
        counts[v as usize] += 1;
    }

    // Straights and flushes require the full five cards.
    let is_flush = cards.len() == 5 && cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight_high = if cards.len() == 5 {
        let mut sorted = values.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() == 5 && sorted[4] - sorted[0] == 4 {
            Some(sorted[4])
        } else if sorted == [2, 3, 4, 5, 14] {
            // Wheel: the ace plays low and the five is the high card.
            Some(5)
        } else {
            None
        }
    } else {
        None
    };

    if is_flush {
        if let Some(high) = straight_high {
            return HandRank {
                category: HandRankCategory::StraightFlush,
                tiebreakers: vec![high],
            };
        }
    }

    if let Some(quad) = find_kind(&counts, 4) {
        let mut tb = vec![quad];
        tb.extend(kickers(&values, &[quad], 1));
        return HandRank {
            category: HandRankCategory::FourKind,
            tiebreakers: tb,
        };
    }

    if let Some(trips) = find_kind(&counts, 3) {
        let pair = (2..=14u8)
            .rev()
            .find(|&v| v != trips && counts[v as usize] >= 2);
        if let Some(pair) = pair {
            return HandRank {
                category: HandRankCategory::FullHouse,
                tiebreakers: vec![trips, pair],
            };
        }
    }

    if is_flush {
        let mut tb = values.clone();
        tb.sort_unstable_by(|a, b| b.cmp(a));
        return HandRank {
            category: HandRankCategory::Flush,
            tiebreakers: tb,
        };
    }

    if let Some(high) = straight_high {
        return HandRank {
            category: HandRankCategory::Straight,
            tiebreakers: vec![high],
        };
    }

    if let Some(trips) = find_kind(&counts, 3) {
        let mut tb = vec![trips];
        tb.extend(kickers(&values, &[trips], 2));
        return HandRank {
            category: HandRankCategory::ThreeKind,
            tiebreakers: tb,
        };
    }

    let mut pairs: Vec<u8> = (2..=14u8)
        .rev()
        .filter(|&v| counts[v as usize] == 2)
        .collect();
    if pairs.len() >= 2 {
        pairs.truncate(2);
        let mut tb = pairs.clone();
        tb.extend(kickers(&values, &pairs, 1));
        return HandRank {
            category: HandRankCategory::TwoPair,
            tiebreakers: tb,
        };
    }
    if pairs.len() == 1 {
        let mut tb = vec![pairs[0]];
        tb.extend(kickers(&values, &pairs, 3));
        return HandRank {
            category: HandRankCategory::Pair,
            tiebreakers: tb,
        };
    }

    let mut tb = values;
    tb.sort_unstable_by(|a, b| b.cmp(a));
    tb.dedup();
    tb.truncate(5);
    HandRank {
        category: HandRankCategory::HighCard,
        tiebreakers: tb,
    }
}
