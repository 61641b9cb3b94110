use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, all_suits, Card, Rank};

/// Hand categories in strictly increasing strength order.
///
/// The set is deliberately reduced: full houses, quads, and straight
/// flushes are not modeled, and tiebreaks carry a single rank rather than
/// full kicker ordering. Callers comparing hands get exactly this
/// granularity and no more.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    ThreeOfAKind = 2,
    Straight = 3,
    Flush = 4,
}

/// The result of evaluating a card pool: category plus a single tiebreak
/// rank. Derived ordering compares category first, then tiebreak, which is
/// the total order the showdown uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandValue {
    pub category: Category,
    pub tiebreak: Rank,
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Category::HighCard => write!(f, "High Card ({})", self.tiebreak),
            Category::Pair => write!(f, "Pair of {}s", self.tiebreak),
            Category::ThreeOfAKind => write!(f, "Three of a Kind ({}s)", self.tiebreak),
            Category::Straight => write!(f, "Straight ({} high)", self.tiebreak),
            Category::Flush => write!(f, "Flush ({} high)", self.tiebreak),
        }
    }
}

/// Evaluates a pool of cards (hole + community) into a [`HandValue`].
///
/// Pure and order-independent: permuting the pool yields the same result.
/// Checks run in descending strength order and return on the first match.
///
/// Two behavioral quirks are intentional and load-bearing for parity with
/// the reference behavior:
/// - The flush check scans suits in enumeration order and reports the
///   first suit with five or more cards, not necessarily the suit holding
///   the highest card.
/// - Trips and pair checks report the first qualifying rank in ascending
///   enumeration order when several ranks qualify.
pub fn evaluate(pool: &[Card]) -> HandValue {
    debug_assert!(!pool.is_empty(), "cannot evaluate an empty pool");

    if let Some(high) = flush_high(pool) {
        return HandValue {
            category: Category::Flush,
            tiebreak: high,
        };
    }
    if let Some(high) = straight_high(pool) {
        return HandValue {
            category: Category::Straight,
            tiebreak: high,
        };
    }
    if let Some(r) = first_rank_with_count(pool, 3) {
        return HandValue {
            category: Category::ThreeOfAKind,
            tiebreak: r,
        };
    }
    if let Some(r) = first_rank_with_count(pool, 2) {
        return HandValue {
            category: Category::Pair,
            tiebreak: r,
        };
    }
    let high = pool
        .iter()
        .map(|c| c.rank)
        .max()
        .unwrap_or(Rank::Two);
    HandValue {
        category: Category::HighCard,
        tiebreak: high,
    }
}

/// First suit in enumeration order holding five or more cards; tiebreak is
/// the highest rank within that suit.
fn flush_high(pool: &[Card]) -> Option<Rank> {
    for suit in all_suits() {
        let mut count = 0;
        let mut high: Option<Rank> = None;
        for c in pool.iter().filter(|c| c.suit == suit) {
            count += 1;
            high = Some(high.map_or(c.rank, |h| h.max(c.rank)));
        }
        if count >= 5 {
            return high;
        }
    }
    None
}

/// Scans the sorted distinct ranks for five consecutive values and returns
/// the top rank of the highest run. Falls back to the wheel (A-2-3-4-5,
/// reported as Five high) when the general scan finds nothing.
fn straight_high(pool: &[Card]) -> Option<Rank> {
    let mut vals: Vec<u8> = pool.iter().map(|c| c.rank as u8).collect();
    vals.sort_unstable();
    vals.dedup();

    let mut best: Option<u8> = None;
    if vals.len() >= 5 {
        for w in vals.windows(5) {
            // distinct sorted values: a window is a straight exactly when
            // it spans four
            if w[4] - w[0] == 4 {
                best = Some(w[4]);
            }
        }
    }
    if let Some(high) = best {
        return Some(Rank::from_u8(high));
    }

    let has = |v: u8| vals.binary_search(&v).is_ok();
    if has(14) && has(2) && has(3) && has(4) && has(5) {
        return Some(Rank::Five);
    }
    None
}

fn first_rank_with_count(pool: &[Card], wanted: usize) -> Option<Rank> {
    all_ranks()
        .into_iter()
        .find(|&r| pool.iter().filter(|c| c.rank == r).count() >= wanted)
}
