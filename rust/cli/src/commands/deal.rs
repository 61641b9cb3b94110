//! Deal command handler: one non-interactive round for inspection.
//!
//! Deals a full round to the river with no betting beyond the blinds,
//! prints every seat's hole cards, the board, and the showdown result.
//! Seeded runs are fully deterministic.

use std::io::Write;

use felt_engine::round::{Round, Street, Variant};

use crate::error::CliError;
use crate::formatters::format_cards;

pub fn handle_deal_command(
    variant: &str,
    opponents: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let variant: Variant = variant.parse()?;
    let seed = seed.unwrap_or_else(rand::random);

    let mut round = Round::new(variant, opponents, Some(seed))?;
    round.start_round()?;
    round.advance_street(Street::Flop)?;
    round.advance_street(Street::Turn)?;
    round.advance_street(Street::River)?;

    writeln!(out, "deal: variant={} seed={}", variant, seed)?;
    for p in round.participants() {
        writeln!(out, "{}: [{}]", p.name(), format_cards(p.hole_cards()))?;
    }
    writeln!(out, "Board: [{}]", format_cards(round.community()))?;
    match round.determine_winner()? {
        Some(w) => writeln!(out, "Winner: {} with {}", w.name, w.hand)?,
        None => writeln!(out, "No winner")?,
    }
    Ok(())
}
