//! A headless, deterministic Texas Hold'em engine.
//!
//! Given a shuffle seed and a sequence of player actions, drives a single table of no-limit
//! Hold'em through the full betting ladder and reports the resulting chip transfers. The crate
//! has no UI, no bot strategies, and no network transport: it is a library for a host process to
//! embed.

pub mod cards;
mod error;
pub mod ledger;
pub mod table;

pub use error::EngineError;
pub use table::engine::Engine;

/// Chip amounts. Signed so that transaction deltas (which can be negative) share one type with
/// balances.
pub type Chips = i64;
/// A seat's position at the table, stable for the table's lifetime.
pub type SeatId = usize;
/// A table identifier handed out by `Engine::create_game`.
pub type GameId = u64;

/// Parameters fixed at table creation. The engine has no external configuration file format: a
/// host constructs this directly, the way the teacher's own in-memory types are built from
/// explicit constructor arguments rather than a config loader.
///
/// `initial_stacks` holds one buy-in per seat, indexed by `SeatId` — seats are not required to
/// start with equal stacks.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TableConfig {
    pub num_seats: usize,
    pub initial_stacks: Vec<Chips>,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub shuffle_seed: u64,
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.num_seats < 2 {
            return Err(EngineError::InvalidArgument(format!(
                "num_seats must be at least 2, got {}",
                self.num_seats
            )));
        }
        if self.initial_stacks.len() != self.num_seats {
            return Err(EngineError::InvalidArgument(format!(
                "initial_stacks has {} entries, expected one per seat ({})",
                self.initial_stacks.len(),
                self.num_seats
            )));
        }
        if self.initial_stacks.iter().any(|&stack| stack <= 0) {
            return Err(EngineError::InvalidArgument("every seat's initial stack must be positive".into()));
        }
        if self.small_blind <= 0 || self.big_blind <= self.small_blind {
            return Err(EngineError::InvalidArgument(
                "big_blind must exceed small_blind, both positive".into(),
            ));
        }
        Ok(())
    }
}
