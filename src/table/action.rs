use crate::Chips;

/// A caller-facing decision. Blind posting is an internal step of `start_hand`, not a variant
/// here — callers never construct a blind action themselves (SPEC_FULL.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Total amount the seat's contribution should reach this round, not an increment.
    Raise(Chips),
    AllIn,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Raise(_) => "raise",
            Action::AllIn => "all-in",
        }
    }
}

impl std::fmt::Display for Action {
    #[cfg(not(feature = "pretty"))]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Raise(total) => write!(f, "raise to {total}"),
            other => write!(f, "{}", other.label()),
        }
    }

    #[cfg(feature = "pretty")]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Call => write!(f, "{}", "CALL".yellow()),
            Action::Raise(total) => write!(f, "{}", format!("RAISE {total}").green()),
            Action::AllIn => write!(f, "{}", "ALL-IN".magenta()),
        }
    }
}
