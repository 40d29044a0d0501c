// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Evaluates the best 5 cards hand out of a 7 cards hand by ranking all 21
//! five cards subsets, and estimates the win probability of a hole hand by
//! Monte Carlo simulation against opponents dealt from the remaining deck.
//!
//! To rank a hand parse its cards and evaluate them:
//!
//! ```
//! # use showdown_eval::*;
//! # use showdown_cards::parse_cards;
//! let cards = parse_cards(&["H9", "HT", "HJ", "HQ", "HK", "C2", "D3"]).unwrap();
//! let rank = evaluate_7(&cards).unwrap();
//! assert_eq!(rank.category(), HandCategory::StraightFlush);
//! ```
//!
//! [HandRank] values are totally ordered, category first then tiebreak ranks,
//! and that order is the single comparison used for winner determination.
//!
//! The **`parallel`** feature adds `equity::par_estimate_equity` that splits
//! the simulation trials across worker threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub mod eval;

pub use equity::{estimate_equity, estimate_equity_with, EquityError};
pub use eval::{evaluate_5, evaluate_7, EvalError, HandCategory, HandRank};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
