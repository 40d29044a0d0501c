// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Poker deck definitions.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// Deck invariant errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// A removal did not account for every requested card.
    #[error("failed to remove cards from deck")]
    Integrity,
}

/// A cards deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the full deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// The cards in this deck in order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns this deck minus every card in `remove`.
    ///
    /// Fails with [DeckError::Integrity] unless exactly `remove.len()` cards
    /// leave the deck, that is when a requested card is not in the deck or
    /// the removal list repeats a card.
    pub fn remove_cards(&self, remove: &[Card]) -> Result<Deck, DeckError> {
        let mut marked = [false; Self::SIZE];
        for card in remove {
            marked[card.index()] = true;
        }

        let cards = self
            .cards
            .iter()
            .copied()
            .filter(|card| !marked[card.index()])
            .collect::<Vec<_>>();

        if self.cards.len() - cards.len() != remove.len() {
            return Err(DeckError::Integrity);
        }

        Ok(Deck { cards })
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
