use super::action::Action;
use super::context::GameContext;
use super::seat::SeatStatus;
use crate::{Chips, EngineError, SeatId};

/// What a seat may legally do right now, per SPEC_FULL.md §4.4. A pure query: computing it never
/// mutates `GameContext`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PermissibleActions {
    pub fold: bool,
    pub check: bool,
    pub call_amount: Option<Chips>,
    pub min_raise_to: Option<Chips>,
    pub max_raise_to: Option<Chips>,
    pub all_in: bool,
}

impl PermissibleActions {
    pub fn none() -> Self {
        Self { fold: false, check: false, call_amount: None, min_raise_to: None, max_raise_to: None, all_in: false }
    }
}

pub fn min_raise_increment(ctx: &GameContext) -> Chips {
    if ctx.last_raise_increment > 0 {
        ctx.last_raise_increment
    } else {
        ctx.config.big_blind
    }
}

pub fn permissible_actions(ctx: &GameContext, seat: SeatId) -> Result<PermissibleActions, EngineError> {
    let s = ctx.seat(seat)?;
    if !ctx.phase.is_betting_phase() || !s.is_active() {
        return Ok(PermissibleActions::none());
    }
    let balance = ctx.ledger.balance(seat)?;
    let contrib = ctx.round_contrib.get(&seat).copied().unwrap_or(0);
    let to_call = ctx.current_bet - contrib;

    let check = to_call == 0;
    let call_amount = if to_call > 0 && balance > 0 { Some(to_call.min(balance)) } else { None };

    let increment = min_raise_increment(ctx);
    let min_raise_to = ctx.current_bet + increment;
    let needed = min_raise_to - contrib;
    let can_raise = balance >= needed && needed > 0;
    let max_raise_to = contrib + balance;

    Ok(PermissibleActions {
        fold: true,
        check,
        call_amount,
        min_raise_to: can_raise.then_some(min_raise_to),
        max_raise_to: can_raise.then_some(max_raise_to),
        all_in: balance > 0,
    })
}

/// Clears `has_acted` for every seat still able to act this round, except `except`. Used whenever
/// a full raise (or a short all-in that qualifies as one) reopens the action.
fn reopen_action(ctx: &mut GameContext, except: SeatId) {
    let reopened: Vec<SeatId> = ctx
        .seats
        .iter()
        .filter(|s| s.id != except && s.is_active())
        .map(|s| s.id)
        .collect();
    for id in reopened {
        ctx.has_acted.insert(id, false);
    }
}

pub fn apply_action(ctx: &mut GameContext, seat: SeatId, action: Action) -> Result<(), EngineError> {
    if ctx.active_seat != Some(seat) {
        let err = EngineError::NotYourTurn { acting: ctx.active_seat.unwrap_or(usize::MAX), submitted_by: seat };
        log::warn!("{err}");
        return Err(err);
    }
    let permissible = permissible_actions(ctx, seat)?;
    let contrib_before = ctx.round_contrib.get(&seat).copied().unwrap_or(0);

    match action {
        Action::Fold => {
            ctx.seat_mut(seat)?.status = SeatStatus::Folded;
            ctx.has_acted.insert(seat, true);
        }
        Action::Check => {
            if !permissible.check {
                let err = EngineError::IllegalAction(format!(
                    "seat {seat} cannot check while {} is owed",
                    ctx.current_bet - contrib_before
                ));
                log::warn!("{err}");
                return Err(err);
            }
            ctx.has_acted.insert(seat, true);
        }
        Action::Call => {
            let amount = permissible.call_amount.ok_or_else(|| {
                let err = EngineError::IllegalAction(format!("seat {seat} has nothing to call"));
                log::warn!("{err}");
                err
            })?;
            ctx.ledger.freeze(seat, amount, "call")?;
            *ctx.round_contrib.entry(seat).or_insert(0) += amount;
            *ctx.hand_contrib.entry(seat).or_insert(0) += amount;
            ctx.has_acted.insert(seat, true);
            if ctx.ledger.balance(seat)? == 0 {
                ctx.seat_mut(seat)?.status = SeatStatus::AllIn;
            }
        }
        Action::Raise(total) => {
            let min_to = permissible.min_raise_to.ok_or_else(|| {
                let err = EngineError::IllegalAction(format!("seat {seat} does not have enough chips to raise"));
                log::warn!("{err}");
                err
            })?;
            let max_to = permissible.max_raise_to.unwrap_or(min_to);
            if total < min_to || total > max_to {
                let err = EngineError::IllegalAction(format!(
                    "raise to {total} is outside the permissible range [{min_to}, {max_to}]"
                ));
                log::warn!("{err}");
                return Err(err);
            }
            let to_freeze = total - contrib_before;
            ctx.ledger.freeze(seat, to_freeze, "raise")?;
            let increment = total - ctx.current_bet;
            ctx.current_bet = total;
            ctx.last_raise_increment = increment;
            ctx.round_contrib.insert(seat, total);
            *ctx.hand_contrib.entry(seat).or_insert(0) += to_freeze;
            ctx.has_acted.insert(seat, true);
            reopen_action(ctx, seat);
            if ctx.ledger.balance(seat)? == 0 {
                ctx.seat_mut(seat)?.status = SeatStatus::AllIn;
            }
        }
        Action::AllIn => {
            let balance = ctx.ledger.balance(seat)?;
            if balance <= 0 {
                let err = EngineError::IllegalAction(format!("seat {seat} has no chips to go all-in with"));
                log::warn!("{err}");
                return Err(err);
            }
            let increment_needed = min_raise_increment(ctx);
            ctx.ledger.freeze(seat, balance, "all-in")?;
            let new_contrib = contrib_before + balance;
            ctx.round_contrib.insert(seat, new_contrib);
            *ctx.hand_contrib.entry(seat).or_insert(0) += balance;
            ctx.seat_mut(seat)?.status = SeatStatus::AllIn;
            ctx.has_acted.insert(seat, true);
            if new_contrib > ctx.current_bet {
                let actual_increment = new_contrib - ctx.current_bet;
                let is_full_raise = actual_increment >= increment_needed;
                ctx.current_bet = new_contrib;
                if is_full_raise {
                    ctx.last_raise_increment = actual_increment;
                    reopen_action(ctx, seat);
                }
                // short all-in: current_bet still rises to match, but action does not reopen
                // and last_raise_increment is left unchanged (SPEC_FULL.md §9).
            }
        }
    }
    Ok(())
}

/// True iff every seat still able to act this round has acted and matched the current bet.
pub fn round_is_complete(ctx: &GameContext) -> bool {
    ctx.seats.iter().filter(|s| s.is_active()).all(|s| {
        ctx.has_acted.get(&s.id).copied().unwrap_or(false)
            && ctx.round_contrib.get(&s.id).copied().unwrap_or(0) == ctx.current_bet
    })
}
