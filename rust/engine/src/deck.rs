use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The exclusive source of cards for a round. Cards leave the deck one-way
/// via [`Deck::draw`] and only return through a full [`Deck::reset`], which
/// is what keeps hole cards, community cards, and the deck duplicate-free.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Rebuilds the canonical 52-card set, discarding any draw history.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    /// Fisher-Yates over whatever cards remain; drawn cards stay gone.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_shrinks_deck_by_one() {
        let mut d = Deck::new_with_seed(7);
        assert_eq!(d.remaining(), 52);
        d.draw().unwrap();
        assert_eq!(d.remaining(), 51);
    }

    #[test]
    fn empty_deck_fails_to_draw() {
        let mut d = Deck::new_with_seed(7);
        for _ in 0..52 {
            d.draw().unwrap();
        }
        assert_eq!(d.draw(), Err(GameError::EmptyDeck));
    }

    #[test]
    fn shuffle_keeps_remaining_cards() {
        let mut d = Deck::new_with_seed(7);
        let drawn: Vec<_> = (0..10).map(|_| d.draw().unwrap()).collect();
        d.shuffle();
        assert_eq!(d.remaining(), 42);
        // none of the drawn cards may reappear
        for _ in 0..42 {
            let c = d.draw().unwrap();
            assert!(!drawn.contains(&c));
        }
    }
}
