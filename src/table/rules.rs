use super::betting::{permissible_actions, PermissibleActions};
use super::context::GameContext;
use super::phase::Phase;
use super::seat::SeatStatus;
use crate::{EngineError, SeatId};

/// Pure queries over a `GameContext`: never mutate, never consult hidden information
/// (SPEC_FULL.md §4.8). Thin wrappers kept separate from `betting`/`phase` so a host has one
/// place to call for "what can happen from here" without reaching into engine internals.
pub fn possible_next_phases(ctx: &GameContext) -> Vec<Phase> {
    let non_folded = ctx.seats.iter().filter(|s| !s.is_folded() && !s.is_out()).count();
    ctx.phase.possible_next_phases(non_folded)
}

pub fn permissible_actions_for(ctx: &GameContext, seat: SeatId) -> Result<PermissibleActions, EngineError> {
    permissible_actions(ctx, seat)
}
