use super::rank::Rank;

/// A poker hand's category, together with the ranks that define it.
///
/// Declaration order is total order: later variants beat earlier ones under the derived `Ord`,
/// exactly mirroring the real-money ranking of hand categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Ranking {
    HighCard(Rank),
    OnePair(Rank),
    TwoPair(Rank, Rank),
    ThreeOfAKind(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank, Rank),
    FourOfAKind(Rank),
    StraightFlush(Rank),
}

impl Ranking {
    /// how many additional kicker ranks (beyond what's already encoded here) are needed to fully
    /// break ties between two hands of this category
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOfAKind(_) => 2,
            Ranking::Flush(_) => 4,
            Ranking::FourOfAKind(_) | Ranking::TwoPair(_, _) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ranking::HighCard(_) => "High Card",
            Ranking::OnePair(_) => "One Pair",
            Ranking::TwoPair(_, _) => "Two Pair",
            Ranking::ThreeOfAKind(_) => "Three of a Kind",
            Ranking::Straight(_) => "Straight",
            Ranking::Flush(_) => "Flush",
            Ranking::FullHouse(_, _) => "Full House",
            Ranking::FourOfAKind(_) => "Four of a Kind",
            Ranking::StraightFlush(_) => "Straight Flush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "{:<16}{}", self.label(), r),
            Ranking::OnePair(r) => write!(f, "{:<16}{}", self.label(), r),
            Ranking::ThreeOfAKind(r) => write!(f, "{:<16}{}", self.label(), r),
            Ranking::Straight(r) => write!(f, "{:<16}{}", self.label(), r),
            Ranking::Flush(r) => write!(f, "{:<16}{}", self.label(), r),
            Ranking::FourOfAKind(r) => write!(f, "{:<16}{}", self.label(), r),
            Ranking::StraightFlush(r) => write!(f, "{:<16}{}", self.label(), r),
            Ranking::TwoPair(hi, lo) => write!(f, "{:<16}{}{}", self.label(), hi, lo),
            Ranking::FullHouse(hi, lo) => write!(f, "{:<16}{}{}", self.label(), hi, lo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_order_correctly() {
        assert!(Ranking::HighCard(Rank::Ace) < Ranking::OnePair(Rank::Two));
        assert!(Ranking::OnePair(Rank::Ace) < Ranking::TwoPair(Rank::Two, Rank::Three));
        assert!(Ranking::FullHouse(Rank::Two, Rank::Three) < Ranking::FourOfAKind(Rank::Two));
        assert!(Ranking::FourOfAKind(Rank::Two) < Ranking::StraightFlush(Rank::Two));
    }

    #[test]
    fn same_category_orders_by_primary_rank() {
        assert!(Ranking::OnePair(Rank::Two) < Ranking::OnePair(Rank::Ace));
    }
}
