// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking and comparison.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use showdown_cards::Card;

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The caller supplied other than the required number of cards.
    #[error("expected {expected} cards, got {actual}")]
    WrongCardCount {
        /// The required number of cards.
        expected: usize,
        /// The number of cards supplied.
        actual: usize,
    },
}

/// The nine hand categories, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No made hand, ranked by its cards.
    HighCard,
    /// One rank appears twice.
    OnePair,
    /// Two ranks appear twice.
    TwoPair,
    /// One rank appears three times.
    ThreeOfAKind,
    /// Five consecutive ranks, ace playing low in the wheel.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// One rank appears four times.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl HandCategory {
    /// The lowercase category label.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::OnePair => "one pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The ranking of a five cards hand.
///
/// Rankings order by category first, then by the tiebreak rank values element
/// by element; the five cards of the best hand do not take part in the order.
#[derive(Debug, Clone)]
pub struct HandRank {
    category: HandCategory,
    tiebreak: Vec<u8>,
    best_five: [Card; 5],
}

impl HandRank {
    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tiebreak rank values, semantics depend on the category.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak
    }

    /// The five cards making the hand.
    pub fn best_five(&self) -> &[Card; 5] {
        &self.best_five
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            self.tiebreak
                .iter()
                .zip(other.tiebreak.iter())
                .map(|(a, b)| a.cmp(b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRank {}

/// Ranks a five cards hand.
///
/// Categories are checked strongest first, a hand can only satisfy one. Rank
/// values run from 2 for the deuce to 14 for the ace; the ace plays low only
/// in the wheel straight whose reported high card is 5.
pub fn evaluate_5(cards: &[Card; 5]) -> HandRank {
    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    let mut ranks = [0u8; 5];

    for (slot, card) in cards.iter().enumerate() {
        let value = card.rank().value();
        ranks[slot] = value;
        rank_counts[value as usize] += 1;
        suit_counts[card.suit() as usize] += 1;
    }

    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = suit_counts.contains(&5);
    let straight = straight_high(&ranks);

    let (category, tiebreak) = if let (true, Some(high)) = (is_flush, straight) {
        (HandCategory::StraightFlush, vec![high])
    } else if let Some((quad, kicker)) = four_of_a_kind(&rank_counts) {
        (HandCategory::FourOfAKind, vec![quad, kicker])
    } else if let Some((trip, pair)) = full_house(&rank_counts) {
        (HandCategory::FullHouse, vec![trip, pair])
    } else if is_flush {
        (HandCategory::Flush, ranks.to_vec())
    } else if let Some(high) = straight {
        (HandCategory::Straight, vec![high])
    } else if let Some((trip, k1, k2)) = three_of_a_kind(&rank_counts) {
        (HandCategory::ThreeOfAKind, vec![trip, k1, k2])
    } else if let Some((high, low, kicker)) = two_pair(&rank_counts) {
        (HandCategory::TwoPair, vec![high, low, kicker])
    } else if let Some((pair, k1, k2, k3)) = one_pair(&rank_counts) {
        (HandCategory::OnePair, vec![pair, k1, k2, k3])
    } else {
        (HandCategory::HighCard, ranks.to_vec())
    };

    HandRank {
        category,
        tiebreak,
        best_five: *cards,
    }
}

/// Ranks the best five cards hand out of exactly seven cards.
///
/// Evaluates all 21 five cards subsets and returns the highest ranking; when
/// subsets tie for best any one of them may be the reported five cards.
pub fn evaluate_7(cards: &[Card]) -> Result<HandRank, EvalError> {
    if cards.len() != 7 {
        return Err(EvalError::WrongCardCount {
            expected: 7,
            actual: cards.len(),
        });
    }

    // First subset skips positions 0 and 1.
    let mut hand = [cards[2], cards[3], cards[4], cards[5], cards[6]];
    let mut best = evaluate_5(&hand);

    for skip1 in 0..7 {
        for skip2 in (skip1 + 1)..7 {
            if skip1 == 0 && skip2 == 1 {
                continue;
            }

            let mut slot = 0;
            for (pos, &card) in cards.iter().enumerate() {
                if pos != skip1 && pos != skip2 {
                    hand[slot] = card;
                    slot += 1;
                }
            }

            let rank = evaluate_5(&hand);
            if rank > best {
                best = rank;
            }
        }
    }

    Ok(best)
}

/// The straight high card for 5 ranks sorted descending, 5 for the wheel.
fn straight_high(ranks: &[u8; 5]) -> Option<u8> {
    if ranks.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }

    if ranks[0] - ranks[4] == 4 {
        Some(ranks[0])
    } else if ranks == &[14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

fn four_of_a_kind(counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = highest_with_count(counts, 4)?;
    let kicker = highest_with_count(counts, 1)?;
    Some((quad, kicker))
}

fn full_house(counts: &[u8; 15]) -> Option<(u8, u8)> {
    // Highest trip wins, inert with 5 cards but kept for the general rule.
    let trip = highest_with_count(counts, 3)?;
    let pair = (2..=14u8)
        .rev()
        .find(|&v| counts[v as usize] >= 2 && v != trip)?;
    Some((trip, pair))
}

fn three_of_a_kind(counts: &[u8; 15]) -> Option<(u8, u8, u8)> {
    let trip = highest_with_count(counts, 3)?;
    let mut kickers = singles(counts);
    Some((trip, kickers.next()?, kickers.next()?))
}

fn two_pair(counts: &[u8; 15]) -> Option<(u8, u8, u8)> {
    let mut pairs = (2..=14u8).rev().filter(|&v| counts[v as usize] == 2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    let kicker = highest_with_count(counts, 1)?;
    Some((high, low, kicker))
}

fn one_pair(counts: &[u8; 15]) -> Option<(u8, u8, u8, u8)> {
    let pair = highest_with_count(counts, 2)?;
    let mut kickers = singles(counts);
    Some((pair, kickers.next()?, kickers.next()?, kickers.next()?))
}

fn highest_with_count(counts: &[u8; 15], count: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&v| counts[v as usize] == count)
}

/// Ranks appearing exactly once, highest first.
fn singles(counts: &[u8; 15]) -> impl Iterator<Item = u8> + '_ {
    (2..=14u8).rev().filter(|&v| counts[v as usize] == 1)
}
