// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker cards types.
//!
//! This crate defines the card value types and parsing from the canonical
//! 2-character token, suit letter followed by rank letter:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = "HA".parse::<Card>().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//! assert_eq!(ah.to_string(), "HA");
//! ```
//!
//! and a [Deck] type for building the 52 cards deck, shuffling, and removing
//! known cards:
//!
//! ```
//! # use showdown_cards::{parse_cards, Deck};
//! let known = parse_cards(&["HA", "HK"]).unwrap();
//! let deck = Deck::default().remove_cards(&known).unwrap();
//! assert_eq!(deck.count(), 50);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
mod deck;

pub use cards::{parse_cards, Card, ParseError, Rank, Suit};
pub use deck::{Deck, DeckError};
