use super::kicks::Kickers;
use super::ranking::Ranking;

/// A total-ordered hand strength: if `strength(A) > strength(B)` then A beats B at showdown.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn new(value: Ranking, kicks: Kickers) -> Self {
        debug_assert_eq!(value.n_kickers(), kicks.ranks().len());
        Self { value, kicks }
    }
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> &Kickers {
        &self.kicks
    }
    pub fn category_label(&self) -> &'static str {
        self.value.label()
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}
