//! Command-line argument definitions for the `felt` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "felt",
    version,
    about = "Interactive poker rounds (Hold'em and Omaha) on the terminal"
)]
pub struct FeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactive rounds against auto-calling opponents
    Play {
        /// Game variant: holdem or omaha
        #[arg(long, default_value = "holdem")]
        variant: String,
        /// Number of opponents at the table (1-7)
        #[arg(long, default_value_t = 2)]
        opponents: usize,
        /// RNG seed for a reproducible deck
        #[arg(long)]
        seed: Option<u64>,
        /// Number of rounds to play
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// Append round records to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Deal one full round to the river and show the showdown
    Deal {
        /// Game variant: holdem or omaha
        #[arg(long, default_value = "holdem")]
        variant: String,
        /// Number of opponents at the table (1-7)
        #[arg(long, default_value_t = 2)]
        opponents: usize,
        /// RNG seed for a reproducible deck
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
