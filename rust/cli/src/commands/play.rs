//! # Play Command
//!
//! Interactive poker rounds on the terminal. The human always sits in
//! seat 0 and posts the small blind; opponents use a placeholder policy
//! that calls every street. Rounds run preflop through river, finish with
//! a showdown, and can be appended to a JSONL round history.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use felt_engine::logger::{ActionRecord, RoundLogger, RoundRecord, WinnerInfo};
use felt_engine::round::{Action, Round, Street, Variant};

use crate::config;
use crate::error::CliError;
use crate::formatters::format_table;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_player_action, ParseResult};

/// Handle the play command: interactive poker gameplay.
///
/// # Arguments
///
/// * `variant` - Game variant name ("holdem" or "omaha")
/// * `opponents` - Number of opponents (1-7)
/// * `seed` - RNG seed; falls back to config, then OS entropy
/// * `rounds` - Number of rounds to play (must be >= 1)
/// * `log` - Optional JSONL path for round records
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player actions
///
/// # Errors
///
/// Returns `CliError` if the variant or opponent count is invalid, the
/// configuration cannot be loaded, the log file cannot be created, or an
/// I/O error occurs. A blind poster running out of chips ends the session
/// normally with a message rather than an error.
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    variant: &str,
    opponents: usize,
    seed: Option<u64>,
    rounds: u32,
    log: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let variant: Variant = variant.parse()?;
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match log {
        Some(path) => Some(RoundLogger::create(&path)?),
        None => None,
    };

    ui::display_warning(
        err,
        "Opponents use a placeholder policy that always calls. Use for demo purposes only.",
    )?;
    writeln!(
        out,
        "play: variant={} opponents={} seed={}",
        variant, opponents, seed
    )?;

    let mut round = Round::with_stakes(variant, opponents, Some(seed), cfg.stakes())?;

    let mut quit_requested = false;
    for round_no in 1..=rounds {
        if quit_requested {
            break;
        }
        writeln!(out, "Round {}", round_no)?;
        if let Err(e) = round.start_round() {
            // a blind poster is out of chips; the session is over
            writeln!(out, "Cannot start round: {}", e)?;
            break;
        }
        write!(out, "{}", format_table(&round, false))?;

        let mut actions: Vec<ActionRecord> = Vec::new();
        loop {
            let street = round.street();
            quit_requested =
                !run_betting(&mut round, street, &mut actions, out, err, stdin)?;
            if quit_requested {
                break;
            }
            match street.successor() {
                Some(next) => {
                    round.advance_street(next)?;
                    writeln!(out, "--- {} ---", next)?;
                    write!(out, "{}", format_table(&round, false))?;
                }
                None => break,
            }
        }
        if quit_requested {
            break;
        }

        let showdown = round.determine_winner()?;
        write!(out, "{}", format_table(&round, true))?;
        match &showdown {
            Some(w) => writeln!(out, "Winner: {} with {}", w.name, w.hand)?,
            None => writeln!(out, "No winner: every seat folded")?,
        }

        if let Some(logger) = &mut logger {
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed,
                variant,
                actions: std::mem::take(&mut actions),
                community: round.community().to_vec(),
                pot: round.pot(),
                winner: showdown.map(|w| WinnerInfo {
                    seat: w.seat,
                    name: w.name,
                    hand: w.hand,
                }),
                ts: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out, "Session over.")?;
    Ok(())
}

/// Runs one street of betting: prompts seat 0, then lets every active
/// opponent call. Returns `Ok(false)` when the user asked to quit.
fn run_betting(
    round: &mut Round,
    street: Street,
    actions: &mut Vec<ActionRecord>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    if round.participants()[0].is_active() {
        loop {
            write!(out, "Your action (fold/call/raise N, q to quit): ")?;
            out.flush()?;
            let Some(line) = read_stdin_line(stdin) else {
                return Ok(false); // EOF counts as quit
            };
            match parse_player_action(&line) {
                ParseResult::Quit => return Ok(false),
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                }
                ParseResult::Action(action) => match round.apply_action(0, action) {
                    Ok(()) => {
                        actions.push(ActionRecord {
                            seat: 0,
                            street,
                            action,
                        });
                        break;
                    }
                    Err(e) => {
                        ui::write_error(err, &e.to_string())?;
                    }
                },
            }
        }
    }
    for seat in 1..round.participants().len() {
        if !round.participants()[seat].is_active() {
            continue;
        }
        round.apply_action(seat, Action::Call)?;
        actions.push(ActionRecord {
            seat,
            street,
            action: Action::Call,
        });
    }
    Ok(true)
}
