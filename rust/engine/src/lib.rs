//! # felt-engine: Poker Round Engine Core
//!
//! A single-threaded, synchronous poker round engine for Texas Hold'em and
//! Omaha. Provides card dealing, a betting state machine across streets,
//! showdown resolution, and JSONL round logging with reproducible RNG.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling and drawing with ChaCha20 RNG
//! - [`round`] - The betting round state machine (preflop through showdown)
//! - [`hand`] - Hand evaluation over a pool of hole + community cards
//! - [`participant`] - Per-seat state: stack, hole cards, commitments
//! - [`logger`] - Round record serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::round::{Action, Round, Street, Variant};
//!
//! let mut round = Round::new(Variant::Holdem, 2, Some(42)).unwrap();
//! round.start_round().unwrap();
//!
//! // Everyone calls preflop, then the flop comes down.
//! round.apply_action(0, Action::Call).unwrap();
//! round.advance_street(Street::Flop).unwrap();
//! assert_eq!(round.community().len(), 3);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible from a seed:
//!
//! ```rust
//! use felt_engine::deck::Deck;
//!
//! // Same seed produces the same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_engine::hand::{evaluate, Category};
//!
//! let pool = [
//!     Card { suit: Suit::Hearts, rank: Rank::Two },
//!     Card { suit: Suit::Hearts, rank: Rank::Three },
//!     Card { suit: Suit::Hearts, rank: Rank::Four },
//!     Card { suit: Suit::Hearts, rank: Rank::Five },
//!     Card { suit: Suit::Clubs, rank: Rank::Six },
//!     Card { suit: Suit::Spades, rank: Rank::Nine },
//!     Card { suit: Suit::Diamonds, rank: Rank::King },
//! ];
//! assert_eq!(evaluate(&pool).category, Category::Straight);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod participant;
pub mod round;
