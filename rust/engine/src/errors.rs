use thiserror::Error;

use crate::round::Street;

/// Errors surfaced by the round engine and its collaborators.
///
/// Every variant is terminal for the attempted operation and non-fatal to
/// the process. Operations are atomic: a failed call leaves deck, pot, and
/// participant state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No cards left in the deck")]
    EmptyDeck,
    #[error("Insufficient chips: needed {needed}, available {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("{name} is not active in this round")]
    InactiveParticipant { name: String },
    #[error("Invalid action: {input:?} (choose 'call', 'raise', or 'fold')")]
    InvalidAction { input: String },
    #[error("Raise to {amount} must exceed the current table bet of {table_bet}")]
    InvalidRaise { amount: u32, table_bet: u32 },
    #[error("Cannot advance from {from:?} to {to:?}")]
    InvalidStreetTransition { from: Street, to: Street },
    #[error("Showdown requires the river; current street is {street:?}")]
    PrematureShowdown { street: Street },
    #[error("Invalid game variant: {input:?} (choose 'holdem' or 'omaha')")]
    InvalidVariant { input: String },
    #[error("Number of opponents must be between 1 and 7, got {count}")]
    InvalidOpponentCount { count: usize },
    #[error("No seat at index {seat}")]
    InvalidSeat { seat: usize },
}
