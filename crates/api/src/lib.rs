// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown evaluator call contracts.
//!
//! The typed request and response surface a service layer marshals to and
//! from the wire: best hand evaluation, heads up comparison, and win
//! probability estimation. The types serialize with the JSON field names of
//! the public payloads (`bestHand`, `winProbability`).
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod contracts;

pub use contracts::{
    best_hand, heads_up, odds, ApiError, BestHandRequest, BestHandResponse, HeadsUpRequest,
    HeadsUpResponse, OddsRequest, OddsResponse,
};
