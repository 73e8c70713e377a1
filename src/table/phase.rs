use crate::cards::Street;

/// A lifecycle phase of one hand. Distinct from `Street`, which only covers the four betting
/// rounds: `Phase` also models the pre-hand and post-hand bookends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Init,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Finished,
}

/// An event the transition table reacts to, distinct from `crate::table::event::Event` (the
/// append-only audit record). This is the internal trigger that drives `Phase` forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    HandStart,
    BettingRoundComplete,
    HandAutoFinish,
    ShowdownComplete,
}

impl Phase {
    pub fn is_betting_phase(&self) -> bool {
        matches!(self, Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River)
    }

    pub fn street(&self) -> Option<Street> {
        match self {
            Phase::PreFlop => Some(Street::Preflop),
            Phase::Flop => Some(Street::Flop),
            Phase::Turn => Some(Street::Turn),
            Phase::River => Some(Street::River),
            _ => None,
        }
    }

    /// Direct lookup against the transition table (SPEC_FULL.md §4.5). Returns `None` if the
    /// trigger is irrelevant in this phase.
    pub fn defined_next_phase(&self, trigger: Trigger) -> Option<Phase> {
        use Phase::*;
        use Trigger::*;
        match (self, trigger) {
            (Init, HandStart) => Some(PreFlop),
            (Finished, HandStart) => Some(PreFlop),
            (PreFlop, BettingRoundComplete) => Some(Flop),
            (Flop, BettingRoundComplete) => Some(Turn),
            (Turn, BettingRoundComplete) => Some(River),
            (River, BettingRoundComplete) => Some(Showdown),
            (Showdown, BettingRoundComplete) => Some(Finished),
            (PreFlop | Flop | Turn | River, HandAutoFinish) => Some(Finished),
            (Showdown, ShowdownComplete) => Some(Finished),
            _ => None,
        }
    }

    /// Phases reachable from here given how many seats remain in the hand. With at most one
    /// contesting seat, `FINISHED` is the only reachable phase regardless of street.
    pub fn possible_next_phases(&self, non_folded_seats: usize) -> Vec<Phase> {
        if non_folded_seats <= 1 {
            return vec![Phase::Finished];
        }
        match self {
            Phase::Init => vec![Phase::PreFlop],
            Phase::PreFlop => vec![Phase::Flop, Phase::Finished],
            Phase::Flop => vec![Phase::Turn, Phase::Finished],
            Phase::Turn => vec![Phase::River, Phase::Finished],
            Phase::River => vec![Phase::Showdown, Phase::Finished],
            Phase::Showdown => vec![Phase::Finished],
            Phase::Finished => vec![Phase::PreFlop],
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            Phase::Init => "init",
            Phase::PreFlop => "pre-flop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
            Phase::Finished => "finished",
        };
        write!(f, "{label}")
    }
}
