// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! The best hand, heads up, and odds contracts.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use showdown_cards::{parse_cards, Card, ParseError};
use showdown_eval::{estimate_equity, evaluate_7, EquityError, EvalError, HandRank};

/// Contract errors, each maps a validation or evaluation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A hand list had the wrong number of cards.
    #[error("{what} must have {expected} cards")]
    WrongCardCount {
        /// The list that failed validation.
        what: &'static str,
        /// The required number of cards.
        expected: usize,
    },
    /// A card token failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Hand evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// Equity estimation failed.
    #[error(transparent)]
    Equity(#[from] EquityError),
}

/// Input for best hand evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestHandRequest {
    /// The two hole card tokens.
    pub hole: Vec<String>,
    /// The five community card tokens.
    pub community: Vec<String>,
}

/// The best five cards hand and its ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestHandResponse {
    /// The tokens of the best five cards.
    pub best_hand: Vec<String>,
    /// The lowercase category label.
    pub category: String,
    /// The tiebreak rank values.
    pub tiebreak: Vec<u8>,
}

impl From<&HandRank> for BestHandResponse {
    fn from(rank: &HandRank) -> Self {
        Self {
            best_hand: rank.best_five().iter().map(Card::to_string).collect(),
            category: rank.category().name().to_string(),
            tiebreak: rank.tiebreak().to_vec(),
        }
    }
}

/// Input for a heads up comparison of two hands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadsUpRequest {
    /// The first hand.
    pub hand1: BestHandRequest,
    /// The second hand.
    pub hand2: BestHandRequest,
}

/// The outcome of a heads up comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadsUpResponse {
    /// The first hand evaluation.
    pub hand1: BestHandResponse,
    /// The second hand evaluation.
    pub hand2: BestHandResponse,
    /// `"hand1"`, `"hand2"`, or `"tie"`.
    pub winner: String,
    /// Human readable outcome.
    pub outcome: String,
}

/// Input for win probability estimation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsRequest {
    /// The two hole card tokens.
    pub hole: Vec<String>,
    /// The 0, 3, 4, or 5 known community card tokens.
    pub community: Vec<String>,
    /// Number of players at the table, hero included.
    pub players: i64,
    /// Number of simulation trials.
    pub simulations: i64,
}

/// The estimated win probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsResponse {
    /// Hero equity in [0, 1].
    pub win_probability: f64,
}

/// Evaluates the best five cards hand from 2 hole and 5 community tokens.
pub fn best_hand(req: &BestHandRequest) -> Result<BestHandResponse, ApiError> {
    let rank = rank_hand(req)?;
    Ok(BestHandResponse::from(&rank))
}

/// Compares two hands and reports both evaluations and the winner.
pub fn heads_up(req: &HeadsUpRequest) -> Result<HeadsUpResponse, ApiError> {
    let rank1 = rank_hand(&req.hand1)?;
    let rank2 = rank_hand(&req.hand2)?;

    let (winner, outcome) = match rank1.cmp(&rank2) {
        Ordering::Greater => ("hand1", "hand1 wins"),
        Ordering::Less => ("hand2", "hand2 wins"),
        Ordering::Equal => ("tie", "tie"),
    };

    Ok(HeadsUpResponse {
        hand1: BestHandResponse::from(&rank1),
        hand2: BestHandResponse::from(&rank2),
        winner: winner.to_string(),
        outcome: outcome.to_string(),
    })
}

/// Estimates the hero win probability by Monte Carlo simulation.
pub fn odds(req: &OddsRequest) -> Result<OddsResponse, ApiError> {
    let hole = parse_cards(&req.hole)?;
    let community = parse_cards(&req.community)?;

    let players = usize::try_from(req.players).map_err(|_| EquityError::InvalidPlayerCount)?;
    let simulations =
        usize::try_from(req.simulations).map_err(|_| EquityError::InvalidSimulationCount)?;

    let win_probability = estimate_equity(&hole, &community, players, simulations)?;
    Ok(OddsResponse { win_probability })
}

fn rank_hand(req: &BestHandRequest) -> Result<HandRank, ApiError> {
    if req.hole.len() != 2 {
        return Err(ApiError::WrongCardCount {
            what: "hole",
            expected: 2,
        });
    }

    if req.community.len() != 5 {
        return Err(ApiError::WrongCardCount {
            what: "community",
            expected: 5,
        });
    }

    let mut tokens = req.hole.clone();
    tokens.extend_from_slice(&req.community);

    let cards = parse_cards(&tokens)?;
    Ok(evaluate_7(&cards)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn best_hand_straight_flush() {
        let req = BestHandRequest {
            hole: strings(&["H9", "HT"]),
            community: strings(&["HJ", "HQ", "HK", "C2", "D3"]),
        };

        let resp = best_hand(&req).unwrap();
        assert_eq!(resp.category, "straight flush");
        assert_eq!(resp.tiebreak, vec![13]);

        let mut best = resp.best_hand.clone();
        best.sort();
        assert_eq!(best, strings(&["H9", "HJ", "HK", "HQ", "HT"]));
    }

    #[test]
    fn best_hand_validates_counts() {
        let req = BestHandRequest {
            hole: strings(&["H9"]),
            community: strings(&["HJ", "HQ", "HK", "C2", "D3"]),
        };
        assert_eq!(
            best_hand(&req),
            Err(ApiError::WrongCardCount {
                what: "hole",
                expected: 2
            })
        );

        let req = BestHandRequest {
            hole: strings(&["H9", "HT"]),
            community: strings(&["HJ", "HQ", "HK", "C2"]),
        };
        assert_eq!(
            best_hand(&req),
            Err(ApiError::WrongCardCount {
                what: "community",
                expected: 5
            })
        );
    }

    #[test]
    fn best_hand_rejects_duplicates_across_lists() {
        let req = BestHandRequest {
            hole: strings(&["H9", "HT"]),
            community: strings(&["H9", "HQ", "HK", "C2", "D3"]),
        };
        assert_eq!(
            best_hand(&req),
            Err(ApiError::Parse(ParseError::DuplicateCard("H9".to_string())))
        );
    }

    #[test]
    fn best_hand_response_field_names() {
        let req = BestHandRequest {
            hole: strings(&["H9", "HT"]),
            community: strings(&["HJ", "HQ", "HK", "C2", "D3"]),
        };

        let value = serde_json::to_value(best_hand(&req).unwrap()).unwrap();
        assert!(value.get("bestHand").is_some());
        assert!(value.get("category").is_some());
        assert!(value.get("tiebreak").is_some());
    }

    #[test]
    fn heads_up_picks_the_winner() {
        let req = HeadsUpRequest {
            hand1: BestHandRequest {
                hole: strings(&["H9", "HT"]),
                community: strings(&["HJ", "HQ", "HK", "C2", "D3"]),
            },
            hand2: BestHandRequest {
                hole: strings(&["S9", "ST"]),
                community: strings(&["SA", "DQ", "DK", "C5", "D6"]),
            },
        };

        let resp = heads_up(&req).unwrap();
        assert_eq!(resp.winner, "hand1");
        assert_eq!(resp.outcome, "hand1 wins");
        assert_eq!(resp.hand1.category, "straight flush");

        let swapped = HeadsUpRequest {
            hand1: req.hand2.clone(),
            hand2: req.hand1.clone(),
        };
        let resp = heads_up(&swapped).unwrap();
        assert_eq!(resp.winner, "hand2");
        assert_eq!(resp.outcome, "hand2 wins");
    }

    #[test]
    fn heads_up_reports_ties() {
        // Both hands play the same board royal flush.
        let board = strings(&["HA", "HK", "HQ", "HJ", "HT"]);
        let req = HeadsUpRequest {
            hand1: BestHandRequest {
                hole: strings(&["C2", "D3"]),
                community: board.clone(),
            },
            hand2: BestHandRequest {
                hole: strings(&["S5", "D8"]),
                community: board,
            },
        };

        let resp = heads_up(&req).unwrap();
        assert_eq!(resp.winner, "tie");
        assert_eq!(resp.outcome, "tie");
        assert_eq!(resp.hand1.tiebreak, resp.hand2.tiebreak);
    }

    #[test]
    fn odds_validates_players_and_simulations() {
        let req = OddsRequest {
            hole: strings(&["HA", "SA"]),
            community: vec![],
            players: 1,
            simulations: 100,
        };
        assert_eq!(
            odds(&req),
            Err(ApiError::Equity(EquityError::InvalidPlayerCount))
        );

        let req = OddsRequest {
            hole: strings(&["HA", "SA"]),
            community: vec![],
            players: 2,
            simulations: 0,
        };
        assert_eq!(
            odds(&req),
            Err(ApiError::Equity(EquityError::InvalidSimulationCount))
        );

        let req = OddsRequest {
            hole: strings(&["HA", "SA"]),
            community: vec![],
            players: -3,
            simulations: 100,
        };
        assert_eq!(
            odds(&req),
            Err(ApiError::Equity(EquityError::InvalidPlayerCount))
        );
    }

    #[test]
    fn odds_returns_probability_with_wire_field_name() {
        let req = OddsRequest {
            hole: strings(&["HA", "HK"]),
            community: strings(&["HQ", "HJ", "HT"]),
            players: 2,
            simulations: 200,
        };

        let resp = odds(&req).unwrap();
        assert_eq!(resp.win_probability, 1.0);

        let value = serde_json::to_value(&resp).unwrap();
        assert!(value.get("winProbability").is_some());
    }
}
