use crate::cards::Hole;
use crate::SeatId;

/// A seat's lifecycle status within the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SeatStatus {
    /// In the hand, able to act.
    Active,
    /// Folded this hand; ineligible for any pot.
    Folded,
    /// Has no chips left to act with but is still eligible for pots up to its contribution.
    AllIn,
    /// Has zero chips and sits out of future hands until re-bought (out of scope here).
    Out,
}

/// A fixed-field seat record. Per SPEC_FULL.md §9, seats hold identity and status only — chip
/// balances live exclusively in the `ChipLedger`, addressed by `id`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub status: SeatStatus,
    pub hole: Option<Hole>,
}

impl Seat {
    pub fn new(id: SeatId) -> Self {
        Self { id, status: SeatStatus::Active, hole: None }
    }

    pub fn is_active(&self) -> bool {
        self.status == SeatStatus::Active
    }
    pub fn is_folded(&self) -> bool {
        self.status == SeatStatus::Folded
    }
    pub fn is_out(&self) -> bool {
        self.status == SeatStatus::Out
    }
    /// still holds a claim on the pot: active or all-in, not folded and not sitting out
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, SeatStatus::Active | SeatStatus::AllIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_seat_is_active_with_no_hole_cards() {
        let seat = Seat::new(3);
        assert!(seat.is_active());
        assert!(seat.hole.is_none());
    }
}
