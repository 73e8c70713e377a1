use crate::error::EngineError;
use crate::Chips;
use std::collections::HashMap;

/// Authoritative per-seat chip accounting for one table.
///
/// `balance` is chips a seat may still act with; `frozen` is chips already committed to the
/// current hand's pot. `freeze` moves chips from the former to the latter; `settle_hand` is the
/// only way chips leave the frozen pool, and does so atomically across every seat at once
/// (SPEC_FULL.md §4.2). Mirrors the teacher's `Casino`-style "validate the whole batch before
/// committing any of it" approach to shared mutable state.
#[derive(Debug, Clone, Default)]
pub struct ChipLedger {
    balance: HashMap<usize, Chips>,
    frozen: HashMap<usize, Chips>,
    total_chips: Chips,
}

impl ChipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats a player with a starting stack. Replaces any existing balance for that seat id.
    /// Re-seating an existing seat id adjusts the tracked conservation total by the difference.
    pub fn seat(&mut self, seat: usize, stack: Chips) {
        let previous = self.balance.get(&seat).copied().unwrap_or(0)
            + self.frozen.get(&seat).copied().unwrap_or(0);
        self.total_chips += stack - previous;
        self.balance.insert(seat, stack);
        self.frozen.insert(seat, 0);
    }

    pub fn balance(&self, seat: usize) -> Result<Chips, EngineError> {
        self.balance.get(&seat).copied().ok_or(EngineError::UnknownSeat(seat))
    }

    pub fn total_frozen(&self, seat: usize) -> Result<Chips, EngineError> {
        self.frozen.get(&seat).copied().ok_or(EngineError::UnknownSeat(seat))
    }

    pub fn seats(&self) -> impl Iterator<Item = usize> + '_ {
        self.balance.keys().copied()
    }

    /// Moves `amount` chips from `seat`'s balance into its frozen pool. `reason` is carried only
    /// for the trace log, the way the teacher tags its own state mutations for replay debugging.
    pub fn freeze(&mut self, seat: usize, amount: Chips, reason: &str) -> Result<(), EngineError> {
        if amount <= 0 {
            let err = EngineError::InvalidArgument(format!("freeze amount must be positive, got {amount}"));
            log::warn!("{err}");
            return Err(err);
        }
        let balance = self.balance(seat)?;
        if balance < amount {
            let err = EngineError::InsufficientChips { seat, requested: amount, available: balance };
            log::warn!("{err}");
            return Err(err);
        }
        *self.balance.get_mut(&seat).unwrap() -= amount;
        *self.frozen.get_mut(&seat).unwrap() += amount;
        log::trace!("seat {seat} froze {amount} chips ({reason})");
        Ok(())
    }

    /// Applies a map of signed deltas to seat balances and clears every seat's frozen pool to
    /// zero. Validates the whole batch against a cloned view first: either every delta applies or
    /// none does, and the deltas must sum to zero. A negative delta against a seat that never
    /// froze anything this hand is rejected even if the resulting balance would stay non-negative
    /// — it can only mean a transaction map built from the wrong hand's contributions.
    pub fn settle_hand(&mut self, transactions: &HashMap<usize, Chips>) -> Result<(), EngineError> {
        let sum: Chips = transactions.values().sum();
        if sum != 0 {
            let err = EngineError::SettlementFailure(format!("transaction deltas sum to {sum}, expected 0"));
            log::warn!("{err}");
            return Err(err);
        }
        for (&seat, &delta) in transactions {
            if delta < 0 && self.frozen.get(&seat).copied().unwrap_or(0) == 0 {
                let err = EngineError::SettlementFailure(format!(
                    "seat {seat} has a negative delta but no prior freeze this hand"
                ));
                log::warn!("{err}");
                return Err(err);
            }
        }
        let mut trial = self.balance.clone();
        for (&seat, &delta) in transactions {
            let entry = trial.get_mut(&seat).ok_or(EngineError::UnknownSeat(seat))?;
            *entry += delta;
            if *entry < 0 {
                let err = EngineError::SettlementFailure(format!("seat {seat} would go negative ({entry})"));
                log::warn!("{err}");
                return Err(err);
            }
        }
        self.balance = trial;
        for frozen in self.frozen.values_mut() {
            *frozen = 0;
        }
        debug_assert!(self.is_conserved(), "chip conservation violated after settle_hand");
        Ok(())
    }

    fn is_conserved(&self) -> bool {
        let total: Chips = self.balance.values().sum::<Chips>() + self.frozen.values().sum::<Chips>();
        self.total_chips == total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_of(stacks: &[(usize, Chips)]) -> ChipLedger {
        let mut l = ChipLedger::new();
        for &(seat, stack) in stacks {
            l.seat(seat, stack);
        }
        l
    }

    #[test]
    fn freeze_moves_chips_from_balance_to_frozen() {
        let mut l = ledger_of(&[(0, 100)]);
        l.freeze(0, 30, "call").unwrap();
        assert_eq!(l.balance(0).unwrap(), 70);
        assert_eq!(l.total_frozen(0).unwrap(), 30);
    }

    #[test]
    fn freeze_rejects_insufficient_balance() {
        let mut l = ledger_of(&[(0, 10)]);
        assert!(matches!(
            l.freeze(0, 20, "raise"),
            Err(EngineError::InsufficientChips { seat: 0, requested: 20, available: 10 })
        ));
    }

    #[test]
    fn settle_hand_clears_frozen_and_applies_deltas() {
        let mut l = ledger_of(&[(0, 100), (1, 100)]);
        l.freeze(0, 40, "call").unwrap();
        l.freeze(1, 40, "call").unwrap();
        let mut txn = HashMap::new();
        txn.insert(0, -40);
        txn.insert(1, 40);
        l.settle_hand(&txn).unwrap();
        assert_eq!(l.balance(0).unwrap(), 60);
        assert_eq!(l.balance(1).unwrap(), 140);
        assert_eq!(l.total_frozen(0).unwrap(), 0);
        assert_eq!(l.total_frozen(1).unwrap(), 0);
    }

    #[test]
    fn settle_hand_rejects_nonzero_sum() {
        let mut l = ledger_of(&[(0, 100), (1, 100)]);
        let mut txn = HashMap::new();
        txn.insert(0, -10);
        txn.insert(1, 5);
        assert!(matches!(l.settle_hand(&txn), Err(EngineError::SettlementFailure(_))));
    }

    #[test]
    fn settle_hand_is_all_or_nothing_on_negative_balance() {
        let mut l = ledger_of(&[(0, 10), (1, 100)]);
        l.freeze(0, 10, "call").unwrap();
        let mut txn = HashMap::new();
        txn.insert(0, -20);
        txn.insert(1, 20);
        assert!(l.settle_hand(&txn).is_err());
        assert_eq!(l.balance(0).unwrap(), 0, "failed settlement must not mutate state");
        assert_eq!(l.balance(1).unwrap(), 100);
    }

    #[test]
    fn settle_hand_rejects_a_negative_delta_against_a_seat_that_never_froze() {
        let mut l = ledger_of(&[(0, 100), (1, 100)]);
        l.freeze(1, 20, "call").unwrap();
        let mut txn = HashMap::new();
        txn.insert(0, -20);
        txn.insert(1, 20);
        assert!(matches!(l.settle_hand(&txn), Err(EngineError::SettlementFailure(_))));
        assert_eq!(l.balance(0).unwrap(), 100, "failed settlement must not mutate state");
    }
}
