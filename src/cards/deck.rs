use super::card::Card;
use crate::error::EngineError;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A shuffled, dealable sequence of the 52 standard cards.
///
/// The shuffle is a seeded Fisher-Yates permutation over `rand::rngs::SmallRng`, never the
/// platform thread-local RNG, so that `(seed, sequence of actions)` fully determines every card
/// dealt in a hand (see SPEC_FULL.md §4.1 / §9).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(seed: u64) -> Self {
        let mut cards: Vec<Card> = (0..52u8).map(Card::from).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::fisher_yates(&mut cards, &mut rng);
        Self { cards }
    }

    fn fisher_yates(cards: &mut [Card], rng: &mut SmallRng) {
        use rand::Rng;
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn deal_one(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::DeckExhausted)
    }

    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        (0..n).map(|_| self.deal_one()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_fifty_two_distinct_cards() {
        let deck = Deck::new(42);
        assert_eq!(deck.len(), 52);
        let mut seen = std::collections::HashSet::new();
        for c in &deck.cards {
            assert!(seen.insert(*c), "duplicate card in fresh deck");
        }
    }

    #[test]
    fn same_seed_same_permutation() {
        let a = Deck::new(7).cards;
        let b = Deck::new(7).cards;
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_permutation() {
        let a = Deck::new(1).cards;
        let b = Deck::new(2).cards;
        assert_ne!(a, b);
    }

    #[test]
    fn deal_shrinks_monotonically_and_exhausts() {
        let mut deck = Deck::new(3);
        for expected in (0..52).rev() {
            assert_eq!(deck.len(), expected + 1);
            deck.deal_one().unwrap();
        }
        assert!(deck.is_empty());
        assert!(matches!(deck.deal_one(), Err(EngineError::DeckExhausted)));
    }

    #[test]
    fn deal_n_removes_that_many_cards() {
        let mut deck = Deck::new(9);
        let hand = deck.deal_n(5).unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(deck.len(), 47);
    }
}
