use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck consumed from the end.
///
/// The deck owns its RNG, so a deck built from a seed replays the same
/// sequence of shuffles hand after hand.
///
/// # Examples
///
/// ```
/// use pokersim_engine::deck::Deck;
///
/// let mut d1 = Deck::new_with_seed(42);
/// let mut d2 = Deck::new_with_seed(42);
/// d1.shuffle();
/// d2.shuffle();
/// assert_eq!(d1.deal_card(), d2.deal_card());
/// assert_eq!(d1.remaining(), 51);
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Restores all 52 cards and permutes them.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn draw(&mut self) -> Result<Card, GameError> {
        self.deal_card().ok_or(GameError::DeckExhausted)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
