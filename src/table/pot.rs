use crate::{Chips, SeatId};
use std::collections::HashMap;

/// One contested pot: an amount and the seats eligible to win it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SidePot {
    pub amount: Chips,
    pub eligible: Vec<SeatId>,
}

/// Partitions per-hand contributions into side pots plus any lone-contributor refund, following
/// the layer-by-layer construction in SPEC_FULL.md §4.6 (grounded directly on the Python
/// original's `calculate_side_pots`).
pub fn build_side_pots(contributions: &HashMap<SeatId, Chips>) -> (Vec<SidePot>, HashMap<SeatId, Chips>) {
    let mut entries: Vec<(SeatId, Chips)> =
        contributions.iter().filter(|&(_, &amount)| amount > 0).map(|(&s, &a)| (s, a)).collect();
    entries.sort_unstable_by_key(|&(seat, amount)| (amount, seat));

    let mut pots = Vec::new();
    let mut refunds = HashMap::new();
    let mut prev: Chips = 0;
    let mut active = entries.len();

    for i in 0..entries.len() {
        let (seat, amount) = entries[i];
        if amount == prev {
            active -= 1;
            continue;
        }
        if active <= 1 {
            refunds.insert(seat, amount - prev);
            break;
        }
        let mut eligible: Vec<SeatId> = entries[i..]
            .iter()
            .filter(|&&(_, a)| a >= amount)
            .map(|&(s, _)| s)
            .collect();
        eligible.sort_unstable();
        eligible.dedup();
        pots.push(SidePot { amount: (amount - prev) * active as Chips, eligible });
        prev = amount;
        active -= 1;
    }

    (pots, refunds)
}
