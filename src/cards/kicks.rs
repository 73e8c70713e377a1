use super::rank::Rank;

/// The ranks that break a tie between two hands of the same `Ranking` category, always stored
/// highest-first. Compares lexicographically, which is exactly rank-by-rank tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default, serde::Serialize, serde::Deserialize)]
pub struct Kickers(Vec<Rank>);

impl Kickers {
    pub fn new(mut ranks: Vec<Rank>) -> Self {
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Self(ranks)
    }
    pub fn none() -> Self {
        Self(Vec::new())
    }
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in &self.0 {
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_descending() {
        let k = Kickers::new(vec![Rank::Two, Rank::Ace, Rank::Jack]);
        assert_eq!(k.ranks(), &[Rank::Ace, Rank::Jack, Rank::Two]);
    }

    #[test]
    fn higher_kicker_wins() {
        let a = Kickers::new(vec![Rank::King]);
        let b = Kickers::new(vec![Rank::Queen]);
        assert!(a > b);
    }
}
