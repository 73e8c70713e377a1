use super::pot::{build_side_pots, SidePot};
use crate::cards::{evaluator, Board, Hole, Strength};
use crate::{Chips, EngineError, SeatId};
use std::collections::HashMap;

/// One seat's award at the end of a hand: amount won plus the hand it was won with (for seats
/// that reached showdown; a walkover winner has no evaluated hand).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HandResult {
    pub seat: SeatId,
    pub amount: Chips,
    pub category: String,
    pub kickers: Vec<crate::cards::Rank>,
}

/// The outcome of one atomic settlement: the ledger transaction map (already applied by the
/// caller), the side pots that produced it, and the per-seat awards.
pub struct Settlement {
    pub transactions: HashMap<SeatId, Chips>,
    pub pots: Vec<SidePot>,
    pub results: Vec<HandResult>,
}

/// Builds the full settlement for a showdown: side pots, evaluator comparisons, equal splits with
/// the odd-chip remainder going to the first eligible winner clockwise from the button
/// (SPEC_FULL.md §4.7). Does not touch the ledger; the caller applies `transactions` via
/// `ChipLedger::settle_hand` as the single mutation point.
pub fn settle_showdown(
    contributions: &HashMap<SeatId, Chips>,
    contesting_seats: &[SeatId],
    holes: &HashMap<SeatId, Hole>,
    board: &Board,
    button_seat: SeatId,
    clockwise_order: &[SeatId],
) -> Result<Settlement, EngineError> {
    let (pots, refunds) = build_side_pots(contributions);
    let mut transactions: HashMap<SeatId, Chips> = HashMap::new();
    for (&seat, &amount) in contributions {
        *transactions.entry(seat).or_insert(0) -= amount;
    }
    for (&seat, &amount) in &refunds {
        *transactions.entry(seat).or_insert(0) += amount;
    }

    let mut awards: HashMap<SeatId, (Chips, Strength)> = HashMap::new();
    for pot in &pots {
        let contenders: Vec<SeatId> =
            pot.eligible.iter().copied().filter(|s| contesting_seats.contains(s)).collect();
        if contenders.is_empty() {
            return Err(EngineError::SettlementFailure(
                "a side pot has no contesting seat eligible to win it".into(),
            ));
        }
        let strengths: HashMap<SeatId, Strength> = contenders
            .iter()
            .map(|&seat| {
                let hole = holes.get(&seat).expect("contesting seat must have hole cards");
                let mut cards: Vec<_> = hole.cards().to_vec();
                cards.extend(board.cards());
                (seat, evaluator::evaluate(&cards))
            })
            .collect();
        let best = strengths.values().max().cloned().expect("at least one contender");
        let mut winners: Vec<SeatId> =
            contenders.iter().copied().filter(|s| strengths[s] == best).collect();
        winners.sort_unstable();

        let share = pot.amount / winners.len() as Chips;
        let remainder = pot.amount % winners.len() as Chips;
        let bonus_seat = first_clockwise_from_button(&winners, button_seat, clockwise_order);
        for &seat in &winners {
            let bonus = if seat == bonus_seat { remainder } else { 0 };
            let entry = awards.entry(seat).or_insert((0, best.clone()));
            entry.0 += share + bonus;
        }
    }

    for (&seat, &(amount, _)) in &awards {
        *transactions.entry(seat).or_insert(0) += amount;
    }

    let mut results: Vec<HandResult> = awards
        .into_iter()
        .map(|(seat, (amount, strength))| HandResult {
            seat,
            amount,
            category: strength.category_label().to_string(),
            kickers: strength.kickers().ranks().to_vec(),
        })
        .collect();
    results.sort_unstable_by_key(|r| r.seat);

    Ok(Settlement { transactions, pots, results })
}

/// The walkover path: every seat but one has folded. The sole contester collects everything that
/// was wagered, with no evaluator call and no side-pot split.
pub fn settle_walkover(
    contributions: &HashMap<SeatId, Chips>,
    winner: SeatId,
) -> Settlement {
    let mut transactions: HashMap<SeatId, Chips> = HashMap::new();
    let mut pot_total: Chips = 0;
    for (&seat, &amount) in contributions {
        *transactions.entry(seat).or_insert(0) -= amount;
        pot_total += amount;
    }
    *transactions.entry(winner).or_insert(0) += pot_total;
    Settlement {
        transactions,
        pots: vec![SidePot { amount: pot_total, eligible: vec![winner] }],
        results: vec![HandResult {
            seat: winner,
            amount: pot_total,
            category: "uncontested".to_string(),
            kickers: Vec::new(),
        }],
    }
}

fn first_clockwise_from_button(winners: &[SeatId], button_seat: SeatId, order: &[SeatId]) -> SeatId {
    let start = order.iter().position(|&s| s == button_seat).unwrap_or(0);
    for offset in 1..=order.len() {
        let idx = (start + offset) % order.len();
        let seat = order[idx];
        if winners.contains(&seat) {
            return seat;
        }
    }
    winners[0]
}
