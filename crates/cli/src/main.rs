// Copyright (C) 2025 Showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use showdown_api::{BestHandRequest, HeadsUpRequest, OddsRequest};

#[derive(Debug, Parser)]
#[command(about = "Texas Hold'em showdown evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate the best five cards hand from hole and community cards.
    BestHand {
        /// The two hole card tokens.
        #[clap(long, num_args = 2)]
        hole: Vec<String>,
        /// The five community card tokens.
        #[clap(long, num_args = 5)]
        community: Vec<String>,
    },
    /// Compare two hands and report the winner.
    HeadsUp {
        /// The first hand hole card tokens.
        #[clap(long, num_args = 2)]
        hole1: Vec<String>,
        /// The first hand community card tokens.
        #[clap(long, num_args = 5)]
        community1: Vec<String>,
        /// The second hand hole card tokens.
        #[clap(long, num_args = 2)]
        hole2: Vec<String>,
        /// The second hand community card tokens.
        #[clap(long, num_args = 5)]
        community2: Vec<String>,
    },
    /// Estimate the hole hand win probability by simulation.
    Odds {
        /// The two hole card tokens.
        #[clap(long, num_args = 2)]
        hole: Vec<String>,
        /// The known community card tokens, 0, 3, 4, or 5.
        #[clap(long, num_args = 0..=5)]
        community: Vec<String>,
        /// Number of players at the table, hero included.
        #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=23))]
        players: u8,
        /// Number of simulation trials.
        #[clap(long, default_value_t = 10_000, value_parser = clap::value_parser!(u32).range(1..))]
        simulations: u32,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Command::BestHand { hole, community } => {
            let resp = showdown_api::best_hand(&BestHandRequest { hole, community })?;
            serde_json::to_string_pretty(&resp)?
        }
        Command::HeadsUp {
            hole1,
            community1,
            hole2,
            community2,
        } => {
            let resp = showdown_api::heads_up(&HeadsUpRequest {
                hand1: BestHandRequest {
                    hole: hole1,
                    community: community1,
                },
                hand2: BestHandRequest {
                    hole: hole2,
                    community: community2,
                },
            })?;
            serde_json::to_string_pretty(&resp)?
        }
        Command::Odds {
            hole,
            community,
            players,
            simulations,
        } => {
            info!("running {simulations} trials against {} opponents", players - 1);
            let resp = showdown_api::odds(&OddsRequest {
                hole,
                community,
                players: players as i64,
                simulations: simulations as i64,
            })?;
            serde_json::to_string_pretty(&resp)?
        }
    };

    println!("{output}");
    Ok(())
}
