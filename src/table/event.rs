use crate::cards::{Card, Rank, Street};
use crate::{Chips, GameId, SeatId};
use super::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlindKind {
    Small,
    Big,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SidePotSummary {
    pub amount: Chips,
    pub eligible_seats: Vec<SeatId>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WinnerSummary {
    pub seat: SeatId,
    pub amount: Chips,
    pub category: String,
    pub kickers: Vec<Rank>,
}

/// One entry in the append-only audit log. Every command appends one or more of these and hands
/// the fresh batch back to the caller alongside the new snapshot (SPEC_FULL.md §4.9 / §6).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Event {
    HandStarted { game_id: GameId, hand_index: u64, button_seat: SeatId },
    BlindPosted { seat: SeatId, kind: BlindKind, amount: Chips },
    HoleCardsDealt { seat: SeatId },
    CommunityDealt { street: Street, cards: Vec<Card> },
    ActionApplied { seat: SeatId, bet_type: Action, amount: Chips, resulting_current_bet: Chips },
    BettingRoundCompleted { street: Street },
    SidePotsComputed { pots: Vec<SidePotSummary> },
    HandResult { winners: Vec<WinnerSummary> },
    HandFinished { hand_index: u64 },
}
