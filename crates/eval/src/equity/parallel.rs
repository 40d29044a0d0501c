// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Parallel equity estimation.
use rand::prelude::*;
use std::thread;

use showdown_cards::Card;

use super::{EquityError, Table};

/// Estimates the hero win probability splitting trials across tasks.
///
/// Each task runs its share of the trials with its own OS entropy seeded
/// generator and scratch buffers; the per task scores are summed at the end
/// so the result does not depend on task scheduling. Semantics match
/// [estimate_equity](super::estimate_equity).
///
/// Panics if `num_tasks` is zero.
pub fn par_estimate_equity(
    hole: &[Card],
    community: &[Card],
    players: usize,
    simulations: usize,
    num_tasks: usize,
) -> Result<f64, EquityError> {
    assert!(num_tasks > 0);

    let table = Table::new(hole, community, players, simulations)?;

    let results = thread::scope(|s| {
        let mut handles = Vec::with_capacity(num_tasks);
        for task_id in 0..num_tasks {
            // Spread the remainder over the first tasks to keep the total exact.
            let trials = simulations / num_tasks + usize::from(task_id < simulations % num_tasks);
            let table = &table;
            handles.push(s.spawn(move || {
                let mut rng = SmallRng::from_os_rng();
                table.run_trials(trials, &mut rng)
            }));
        }

        handles
            .into_iter()
            .map(|h| h.join().expect("equity task panicked"))
            .collect::<Vec<_>>()
    });

    let mut score = 0.0;
    for result in results {
        score += result?;
    }

    Ok(score / simulations as f64)
}
