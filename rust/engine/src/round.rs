use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, HandValue};
use crate::participant::{Participant, BIG_BLIND, SMALL_BLIND, STARTING_CHIPS};

/// Game variant, fixing the number of hole cards dealt per seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    /// Texas Hold'em: 2 hole cards
    Holdem,
    /// Omaha: 4 hole cards
    Omaha,
}

impl Variant {
    pub fn hole_card_count(&self) -> usize {
        match self {
            Variant::Holdem => 2,
            Variant::Omaha => 4,
        }
    }
}

impl FromStr for Variant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "holdem" | "hold'em" => Ok(Variant::Holdem),
            "omaha" => Ok(Variant::Omaha),
            _ => Err(GameError::InvalidVariant {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Holdem => write!(f, "Holdem"),
            Variant::Omaha => write!(f, "Omaha"),
        }
    }
}

/// A betting street. Transitions run strictly forward; [`Street::successor`]
/// is the only legal next state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn successor(&self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "preflop"),
            Street::Flop => write!(f, "flop"),
            Street::Turn => write!(f, "turn"),
            Street::River => write!(f, "river"),
        }
    }
}

/// A betting action. Raise carries the absolute target total bet for the
/// street, not a delta on top of the table bet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Call,
    Raise(u32),
}

/// Chip parameters for a table. Defaults match the classic 10/20 structure
/// with 1,000-chip stacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stakes {
    pub starting_chips: u32,
    pub small_blind: u32,
    pub big_blind: u32,
}

impl Default for Stakes {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
        }
    }
}

/// The winning seat at showdown, with the hand that won it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Showdown {
    pub seat: usize,
    pub name: String,
    pub hand: HandValue,
}

/// The betting round engine: owns the deck, the seats, the community
/// cards, and the pot, and drives the street state machine from preflop to
/// showdown.
///
/// Seat 0 is the primary seat and posts the small blind; seat 1 posts the
/// big blind. A round is single-threaded and synchronous: every operation
/// runs to completion or fails before the next is accepted, and a failed
/// operation leaves all state unchanged.
///
/// # Examples
///
/// ```
/// use felt_engine::round::{Action, Round, Street, Variant};
///
/// let mut round = Round::new(Variant::Holdem, 2, Some(42)).unwrap();
/// round.start_round().unwrap();
/// assert_eq!(round.street(), Street::Preflop);
/// assert_eq!(round.pot(), 30); // small blind 10 + big blind 20
///
/// round.apply_action(0, Action::Call).unwrap();
/// round.advance_street(Street::Flop).unwrap();
/// assert_eq!(round.community().len(), 3);
/// ```
#[derive(Debug)]
pub struct Round {
    variant: Variant,
    deck: Deck,
    participants: Vec<Participant>,
    community: Vec<Card>,
    pot: u32,
    street: Street,
    table_bet: u32,
    stakes: Stakes,
    seed: u64,
}

impl Round {
    /// Builds a table with the primary seat plus `opponent_count` opponents
    /// at default stakes. The seed feeds the deck's RNG; `None` draws one
    /// from OS entropy.
    pub fn new(
        variant: Variant,
        opponent_count: usize,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        Self::with_stakes(variant, opponent_count, seed, Stakes::default())
    }

    pub fn with_stakes(
        variant: Variant,
        opponent_count: usize,
        seed: Option<u64>,
        stakes: Stakes,
    ) -> Result<Self, GameError> {
        if !(1..=7).contains(&opponent_count) {
            return Err(GameError::InvalidOpponentCount {
                count: opponent_count,
            });
        }
        let seed = seed.unwrap_or_else(rand::random);
        let mut participants = Vec::with_capacity(opponent_count + 1);
        participants.push(Participant::new("You", stakes.starting_chips));
        for i in 1..=opponent_count {
            participants.push(Participant::new(
                format!("Opponent {}", i),
                stakes.starting_chips,
            ));
        }
        Ok(Self {
            variant,
            deck: Deck::new_with_seed(seed),
            participants,
            community: Vec::with_capacity(5),
            pot: 0,
            street: Street::Preflop,
            table_bet: 0,
            stakes,
            seed,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    /// The amount every active seat must match to stay in the street.
    pub fn table_bet(&self) -> u32 {
        self.table_bet
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }
    pub fn stakes(&self) -> Stakes {
        self.stakes
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Starts a fresh round: reshuffled deck, empty pot and board, all
    /// seats reset, hole cards dealt to every seat before any betting, and
    /// blinds posted from seats 0 and 1.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::InsufficientChips`] if a blind poster cannot
    /// cover the blind; there is no partial or all-in blind handling.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        self.deck.reset();
        self.deck.shuffle();
        self.pot = 0;
        self.community.clear();
        self.street = Street::Preflop;
        self.table_bet = self.stakes.big_blind;
        for p in &mut self.participants {
            p.reset_for_round();
        }
        self.deal_hole_cards()?;
        self.post_blinds()
    }

    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        let per_seat = self.variant.hole_card_count();
        for i in 0..self.participants.len() {
            for _ in 0..per_seat {
                let card = self.deck.draw()?;
                self.participants[i].receive_card(card);
            }
        }
        Ok(())
    }

    fn post_blinds(&mut self) -> Result<(), GameError> {
        let sb = self.stakes.small_blind;
        let bb = self.stakes.big_blind;
        self.pot += self.participants[0].commit_bet(sb)?;
        self.pot += self.participants[1].commit_bet(bb)?;
        Ok(())
    }

    /// Applies a betting action for the given seat.
    ///
    /// - `Fold` drops the seat from the round; the pot is unchanged.
    /// - `Call` commits the difference up to the table bet, or does nothing
    ///   if the seat has already matched it.
    /// - `Raise(amount)` treats `amount` as the absolute street total: it
    ///   must exceed the table bet, the seat commits the increment over its
    ///   current committed amount, and the table bet moves to `amount`.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidSeat`] for an out-of-range index,
    /// [`GameError::InactiveParticipant`] for a folded seat,
    /// [`GameError::InvalidRaise`] when the raise target does not exceed
    /// the table bet, and [`GameError::InsufficientChips`] when the stack
    /// cannot cover the commitment. Validation happens before any
    /// mutation, so a failed action changes nothing.
    pub fn apply_action(&mut self, seat: usize, action: Action) -> Result<(), GameError> {
        let participant = self
            .participants
            .get(seat)
            .ok_or(GameError::InvalidSeat { seat })?;
        if !participant.is_active() {
            return Err(GameError::InactiveParticipant {
                name: participant.name().to_string(),
            });
        }
        match action {
            Action::Fold => {
                self.participants[seat].fold();
            }
            Action::Call => {
                let committed = self.participants[seat].committed();
                let call_amount = self.table_bet.saturating_sub(committed);
                if call_amount > 0 {
                    self.pot += self.participants[seat].commit_bet(call_amount)?;
                }
            }
            Action::Raise(amount) => {
                if amount <= self.table_bet {
                    return Err(GameError::InvalidRaise {
                        amount,
                        table_bet: self.table_bet,
                    });
                }
                let increment = amount - self.participants[seat].committed();
                self.pot += self.participants[seat].commit_bet(increment)?;
                self.table_bet = amount;
            }
        }
        Ok(())
    }

    /// Moves to the next street, dealing 3 community cards on the flop and
    /// 1 on the turn and river, then opening fresh betting: table bet and
    /// every seat's committed amount reset to zero.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidStreetTransition`] unless `target` is the exact
    /// successor of the current street, and [`GameError::EmptyDeck`] if
    /// the deck runs dry (impossible at 52 cards and at most 8 seats, but
    /// handled).
    pub fn advance_street(&mut self, target: Street) -> Result<(), GameError> {
        if self.street.successor() != Some(target) {
            return Err(GameError::InvalidStreetTransition {
                from: self.street,
                to: target,
            });
        }
        let deal_count = match target {
            Street::Flop => 3,
            _ => 1,
        };
        for _ in 0..deal_count {
            let card = self.deck.draw()?;
            self.community.push(card);
        }
        self.street = target;
        self.table_bet = 0;
        for p in &mut self.participants {
            p.reset_for_street();
        }
        Ok(())
    }

    /// Resolves the showdown: evaluates every still-active seat's hole
    /// cards plus the board and returns the strongest hand. Ties go to the
    /// earliest seat holding the exact same (category, tiebreak) pair;
    /// `None` means nobody is left active.
    ///
    /// # Errors
    ///
    /// [`GameError::PrematureShowdown`] unless the round is on the river.
    pub fn determine_winner(&self) -> Result<Option<Showdown>, GameError> {
        if self.street != Street::River {
            return Err(GameError::PrematureShowdown {
                street: self.street,
            });
        }
        let mut best: Option<Showdown> = None;
        for (seat, p) in self.participants.iter().enumerate() {
            if !p.is_active() {
                continue;
            }
            let mut pool: Vec<Card> = p.hole_cards().to_vec();
            pool.extend_from_slice(&self.community);
            let hand = evaluate(&pool);
            let beats = best.as_ref().map_or(true, |b| hand > b.hand);
            if beats {
                best = Some(Showdown {
                    seat,
                    name: p.name().to_string(),
                    hand,
                });
            }
        }
        Ok(best)
    }
}
