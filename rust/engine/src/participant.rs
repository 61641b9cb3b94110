use crate::cards::Card;
use crate::errors::GameError;

/// Default starting chip stack for each participant
pub const STARTING_CHIPS: u32 = 1_000;
/// Default small blind, posted by seat 0 at round start
pub const SMALL_BLIND: u32 = 10;
/// Default big blind, posted by seat 1 at round start
pub const BIG_BLIND: u32 = 20;

/// Per-seat mutable state owned by the round engine: chip stack, hole
/// cards, active flag, and the amount committed during the current street.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    chips: u32,
    hole: Vec<Card>,
    active: bool,
    committed: u32,
}

impl Participant {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            hole: Vec::with_capacity(4),
            active: true,
            committed: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    /// Chips placed into the pot during the current street only.
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    /// Appends a card to the hole. Duplicate prevention is the deck's job
    /// as the sole card source.
    pub fn receive_card(&mut self, card: Card) {
        self.hole.push(card);
    }

    /// Debits the stack and credits the committed amount in one step,
    /// returning the amount so the caller can update the pot. Fails with
    /// [`GameError::InsufficientChips`] before any state changes.
    pub fn commit_bet(&mut self, amount: u32) -> Result<u32, GameError> {
        if amount > self.chips {
            return Err(GameError::InsufficientChips {
                needed: amount,
                available: self.chips,
            });
        }
        self.chips -= amount;
        self.committed += amount;
        Ok(amount)
    }

    /// Drops out of the round. Permanent until the next round reset.
    pub fn fold(&mut self) {
        self.active = false;
        self.hole.clear();
        self.committed = 0;
    }

    /// Zeroes the committed amount at a street transition; hand and active
    /// flag are untouched.
    pub fn reset_for_street(&mut self) {
        self.committed = 0;
    }

    /// Fresh state for a new round, before any cards are dealt.
    pub fn reset_for_round(&mut self) {
        self.active = true;
        self.committed = 0;
        self.hole.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    #[test]
    fn commit_bet_moves_chips_to_committed() {
        let mut p = Participant::new("You", 1_000);
        let posted = p.commit_bet(150).unwrap();
        assert_eq!(posted, 150);
        assert_eq!(p.chips(), 850);
        assert_eq!(p.committed(), 150);
    }

    #[test]
    fn overdrawn_bet_leaves_state_untouched() {
        let mut p = Participant::new("You", 100);
        let err = p.commit_bet(101).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientChips {
                needed: 101,
                available: 100
            }
        );
        assert_eq!(p.chips(), 100);
        assert_eq!(p.committed(), 0);
    }

    #[test]
    fn fold_clears_hand_and_deactivates() {
        let mut p = Participant::new("Opponent 1", 1_000);
        p.receive_card(Card {
            suit: Suit::Spades,
            rank: Rank::Ace,
        });
        p.commit_bet(20).unwrap();
        p.fold();
        assert!(!p.is_active());
        assert!(p.hole_cards().is_empty());
        assert_eq!(p.committed(), 0);
        // chips already bet stay gone
        assert_eq!(p.chips(), 980);
    }

    #[test]
    fn street_reset_only_zeroes_committed() {
        let mut p = Participant::new("You", 1_000);
        p.receive_card(Card {
            suit: Suit::Clubs,
            rank: Rank::Two,
        });
        p.commit_bet(40).unwrap();
        p.reset_for_street();
        assert_eq!(p.committed(), 0);
        assert_eq!(p.hole_cards().len(), 1);
        assert!(p.is_active());
    }

    #[test]
    fn round_reset_reactivates_and_clears_hand() {
        let mut p = Participant::new("You", 1_000);
        p.receive_card(Card {
            suit: Suit::Clubs,
            rank: Rank::Two,
        });
        p.fold();
        p.reset_for_round();
        assert!(p.is_active());
        assert!(p.hole_cards().is_empty());
        assert_eq!(p.committed(), 0);
    }
}
