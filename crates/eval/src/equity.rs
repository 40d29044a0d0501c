// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo win probability estimation.
use rand::prelude::*;
use std::cmp::Ordering;

use showdown_cards::{Card, Deck, DeckError};

use crate::eval::{evaluate_7, EvalError};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_estimate_equity;

/// Equity estimation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EquityError {
    /// The hole hand does not have exactly 2 cards.
    #[error("hole must have 2 cards")]
    InvalidHoleSize,
    /// The community cards are not 0, 3, 4, or 5.
    #[error("community must have 0, 3, 4, or 5 cards")]
    InvalidCommunitySize,
    /// Fewer than 2 players.
    #[error("players must be >= 2")]
    InvalidPlayerCount,
    /// A non positive number of simulation trials.
    #[error("simulations must be > 0")]
    InvalidSimulationCount,
    /// The known cards could not be removed from a fresh deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A simulated hand failed to evaluate.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Estimates the hero win probability, seeding from OS entropy.
///
/// Every call draws a fresh generator so repeated calls do not reproduce the
/// same trial sequence; use [estimate_equity_with] to inject a seeded
/// generator for deterministic runs.
pub fn estimate_equity(
    hole: &[Card],
    community: &[Card],
    players: usize,
    simulations: usize,
) -> Result<f64, EquityError> {
    let mut rng = SmallRng::from_os_rng();
    estimate_equity_with(hole, community, players, simulations, &mut rng)
}

/// Estimates the hero win probability with a caller provided generator.
///
/// Runs `simulations` independent trials; each trial shuffles the deck of
/// unseen cards, completes the 5 cards board, deals 2 cards to each of the
/// `players - 1` opponents, and ranks every 7 cards hand. The hero scores
/// 1 for an outright win and `1 / winners` for a tie for best, and the
/// returned probability is the mean score over all trials.
pub fn estimate_equity_with<R: Rng>(
    hole: &[Card],
    community: &[Card],
    players: usize,
    simulations: usize,
    rng: &mut R,
) -> Result<f64, EquityError> {
    let table = Table::new(hole, community, players, simulations)?;
    let score = table.run_trials(simulations, rng)?;
    Ok(score / simulations as f64)
}

/// The validated inputs of one estimation call.
pub(crate) struct Table {
    hole: [Card; 2],
    community: Vec<Card>,
    unseen: Vec<Card>,
    opponents: usize,
}

impl Table {
    /// Validates the call inputs and builds the deck of unseen cards.
    pub(crate) fn new(
        hole: &[Card],
        community: &[Card],
        players: usize,
        simulations: usize,
    ) -> Result<Self, EquityError> {
        let hole: [Card; 2] = hole
            .try_into()
            .map_err(|_| EquityError::InvalidHoleSize)?;

        if !matches!(community.len(), 0 | 3 | 4 | 5) {
            return Err(EquityError::InvalidCommunitySize);
        }

        if players < 2 {
            return Err(EquityError::InvalidPlayerCount);
        }

        if simulations == 0 {
            return Err(EquityError::InvalidSimulationCount);
        }

        let mut known = Vec::with_capacity(2 + community.len());
        known.extend_from_slice(&hole);
        known.extend_from_slice(community);

        let unseen = Deck::default().remove_cards(&known)?.into_iter().collect::<Vec<_>>();

        // The unseen cards must cover the board and every opponent hole.
        let opponents = players - 1;
        if 5 - community.len() + opponents * 2 > unseen.len() {
            return Err(EquityError::InvalidPlayerCount);
        }

        Ok(Self {
            hole,
            community: community.to_vec(),
            unseen,
            opponents,
        })
    }

    /// Runs `trials` independent deals and returns the total hero score.
    pub(crate) fn run_trials<R: Rng>(&self, trials: usize, rng: &mut R) -> Result<f64, EquityError> {
        let mut shuffled = self.unseen.clone();
        let mut seven = [self.hole[0]; 7];
        let mut score = 0.0;

        for _ in 0..trials {
            shuffled.shuffle(rng);
            let mut next = 0;

            // Complete the board from the front of the shuffled deck.
            seven[..2].copy_from_slice(&self.hole);
            seven[2..2 + self.community.len()].copy_from_slice(&self.community);
            for slot in 2 + self.community.len()..7 {
                seven[slot] = shuffled[next];
                next += 1;
            }

            let hero = evaluate_7(&seven)?;
            let mut best = hero.clone();
            let mut winners = 1;

            for _ in 0..self.opponents {
                // Opponents share the board, only the hole cards change.
                seven[0] = shuffled[next];
                seven[1] = shuffled[next + 1];
                next += 2;

                let opponent = evaluate_7(&seven)?;
                match opponent.cmp(&best) {
                    Ordering::Greater => {
                        best = opponent;
                        winners = 1;
                    }
                    Ordering::Equal => winners += 1,
                    Ordering::Less => (),
                }
            }

            if hero == best {
                score += 1.0 / winners as f64;
            }
        }

        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::parse_cards;

    fn seeded() -> SmallRng {
        SmallRng::seed_from_u64(8654)
    }

    #[test]
    fn rejects_invalid_hole_size() {
        let hole = parse_cards(&["HA"]).unwrap();
        let result = estimate_equity_with(&hole, &[], 2, 100, &mut seeded());
        assert_eq!(result, Err(EquityError::InvalidHoleSize));
    }

    #[test]
    fn rejects_invalid_community_size() {
        let hole = parse_cards(&["HA", "SK"]).unwrap();
        let community = parse_cards(&["C2"]).unwrap();
        let result = estimate_equity_with(&hole, &community, 2, 100, &mut seeded());
        assert_eq!(result, Err(EquityError::InvalidCommunitySize));
    }

    #[test]
    fn rejects_invalid_player_count() {
        let hole = parse_cards(&["HA", "SK"]).unwrap();
        let result = estimate_equity_with(&hole, &[], 1, 100, &mut seeded());
        assert_eq!(result, Err(EquityError::InvalidPlayerCount));
    }

    #[test]
    fn rejects_invalid_simulation_count() {
        let hole = parse_cards(&["HA", "SK"]).unwrap();
        let result = estimate_equity_with(&hole, &[], 2, 0, &mut seeded());
        assert_eq!(result, Err(EquityError::InvalidSimulationCount));
    }

    #[test]
    fn rejects_duplicate_known_cards() {
        let hole = parse_cards(&["HA", "SK"]).unwrap();
        let community = parse_cards(&["HA", "C2", "D3"]).unwrap();
        let result = estimate_equity_with(&hole, &community, 2, 100, &mut seeded());
        assert_eq!(result, Err(EquityError::Deck(DeckError::Integrity)));
    }

    #[test]
    fn rejects_players_beyond_deck_capacity() {
        let hole = parse_cards(&["HA", "SK"]).unwrap();
        // 45 unseen cards after the board, room for 22 opponents.
        let result = estimate_equity_with(&hole, &[], 25, 100, &mut seeded());
        assert_eq!(result, Err(EquityError::InvalidPlayerCount));
    }

    #[test]
    fn pocket_aces_heads_up_equity() {
        let hole = parse_cards(&["HA", "SA"]).unwrap();
        let equity = estimate_equity_with(&hole, &[], 2, 20_000, &mut seeded()).unwrap();

        // Known heads up pocket aces equity is ~0.85.
        assert!((equity - 0.85).abs() < 0.02, "equity={equity}");
    }

    #[test]
    fn made_nuts_wins_every_trial() {
        // Hero holds a royal flush on the full board.
        let hole = parse_cards(&["HA", "HK"]).unwrap();
        let community = parse_cards(&["HQ", "HJ", "HT", "C2", "D3"]).unwrap();
        let equity = estimate_equity_with(&hole, &community, 4, 500, &mut seeded()).unwrap();
        assert_eq!(equity, 1.0);
    }

    #[test]
    fn board_nuts_split_evenly() {
        // The royal flush is on the board so every player ties for best.
        let hole = parse_cards(&["C2", "D7"]).unwrap();
        let community = parse_cards(&["HA", "HK", "HQ", "HJ", "HT"]).unwrap();
        let equity = estimate_equity_with(&hole, &community, 4, 500, &mut seeded()).unwrap();
        assert_eq!(equity, 0.25);
    }

    #[test]
    fn seeded_runs_are_deterministic() {
        let hole = parse_cards(&["HA", "SK"]).unwrap();
        let community = parse_cards(&["C2", "D7", "SJ"]).unwrap();

        let mut rng = SmallRng::seed_from_u64(42);
        let first = estimate_equity_with(&hole, &community, 3, 2_000, &mut rng).unwrap();

        let mut rng = SmallRng::seed_from_u64(42);
        let second = estimate_equity_with(&hole, &community, 3, 2_000, &mut rng).unwrap();

        assert_eq!(first, second);
        assert!((0.0..=1.0).contains(&first));
    }
}
