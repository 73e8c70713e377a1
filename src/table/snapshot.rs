use super::context::GameContext;
use super::event::Event;
use super::phase::Phase;
use super::seat::SeatStatus;
use super::settlement::HandResult;
use crate::cards::{Board, Hole};
use crate::{Chips, GameId, SeatId};

/// A seat as seen from one viewer's perspective: hole cards are `None` unless the viewer is this
/// seat, or the hand has reached `Showdown`/`Finished` and this seat did not fold.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SeatView {
    pub id: SeatId,
    pub status: SeatStatus,
    pub balance: Chips,
    pub round_contribution: Chips,
    pub hand_contribution: Chips,
    pub hole: Option<Hole>,
}

/// An immutable, value-equal, redacted copy of the public portion of a `GameContext`. Produced on
/// demand for queries; never exposes an opponent's hole cards outside showdown (SPEC_FULL.md §3).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GameStateSnapshot {
    pub game_id: GameId,
    pub hand_index: u64,
    pub phase: Phase,
    pub board: Board,
    pub seats: Vec<SeatView>,
    pub current_bet: Chips,
    pub active_seat: Option<SeatId>,
    pub button_seat: SeatId,
    pub last_result: Vec<HandResult>,
    pub events: Vec<Event>,
}

impl GameStateSnapshot {
    pub fn build(ctx: &GameContext, viewer: Option<SeatId>, events: Vec<Event>) -> Self {
        let reveal_all = matches!(ctx.phase, Phase::Showdown | Phase::Finished);
        let seats = ctx
            .seats
            .iter()
            .map(|seat| {
                let visible = Some(seat.id) == viewer || (reveal_all && !seat.is_folded());
                SeatView {
                    id: seat.id,
                    status: seat.status,
                    balance: ctx.ledger.balance(seat.id).unwrap_or(0),
                    round_contribution: ctx.round_contrib.get(&seat.id).copied().unwrap_or(0),
                    hand_contribution: ctx.hand_contrib.get(&seat.id).copied().unwrap_or(0),
                    hole: if visible { seat.hole } else { None },
                }
            })
            .collect();
        Self {
            game_id: ctx.game_id,
            hand_index: ctx.hand_index,
            phase: ctx.phase,
            board: ctx.board.clone(),
            seats,
            current_bet: ctx.current_bet,
            active_seat: ctx.active_seat,
            button_seat: ctx.button_seat,
            last_result: ctx.last_result.clone(),
            events,
        }
    }
}
