use super::card::Card;
use super::street::Street;
use std::fmt::{Display, Formatter, Result};

/// The shared community cards, 0/3/4/5 long depending on street.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Board(Vec<Card>);

impl Board {
    pub const fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards);
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn street(&self) -> Street {
        match self.0.len() {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            5 => Street::River,
            n => panic!("board holds an impossible card count: {n}"),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for card in &self.0 {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    #[test]
    fn street_tracks_card_count() {
        let mut board = Board::empty();
        assert_eq!(board.street(), Street::Preflop);
        board.extend([
            Card::new(Rank::Two, Suit::Club),
            Card::new(Rank::Three, Suit::Club),
            Card::new(Rank::Four, Suit::Club),
        ]);
        assert_eq!(board.street(), Street::Flop);
        board.extend([Card::new(Rank::Five, Suit::Club)]);
        assert_eq!(board.street(), Street::Turn);
        board.extend([Card::new(Rank::Six, Suit::Club)]);
        assert_eq!(board.street(), Street::River);
    }
}
