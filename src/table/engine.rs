use super::action::Action;
use super::betting::{permissible_actions, PermissibleActions};
use super::context::GameContext;
use super::snapshot::GameStateSnapshot;
use crate::cards::Deck;
use crate::{EngineError, GameId, SeatId, TableConfig};
use std::collections::HashMap;

/// One table: its aggregate context plus the deck/RNG state scoped to the hand currently in
/// progress. Owned exclusively by one `Engine` slot; never shared across tables.
struct Table {
    context: GameContext,
    deck: Deck,
}

/// The synchronous command surface a host drives, multiplexing `GameId`-addressed tables over a
/// plain map — the single-threaded counterpart to the teacher's `Casino { rooms: RwLock<HashMap<..>> }`
/// (SPEC_FULL.md §4.11). Introduces no concurrency of its own: one `Engine` per process is just as
/// valid as one per table, since every method call is synchronous start-to-finish.
#[derive(Default)]
pub struct Engine {
    tables: HashMap<GameId, Table>,
    next_id: GameId,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_game(&mut self, config: TableConfig) -> Result<GameId, EngineError> {
        config.validate()?;
        self.next_id += 1;
        let id = self.next_id;
        let context = GameContext::new(id, config.clone());
        let deck = Deck::new(config.shuffle_seed);
        self.tables.insert(id, Table { context, deck });
        log::debug!("created table {id} with {} seats", config.num_seats);
        Ok(id)
    }

    fn table_mut(&mut self, id: GameId) -> Result<&mut Table, EngineError> {
        self.tables.get_mut(&id).ok_or(EngineError::UnknownGame(id))
    }
    fn table(&self, id: GameId) -> Result<&Table, EngineError> {
        self.tables.get(&id).ok_or(EngineError::UnknownGame(id))
    }

    pub fn start_hand(&mut self, id: GameId) -> Result<GameStateSnapshot, EngineError> {
        let table = self.table_mut(id)?;
        let events = table.context.start_hand(&mut table.deck)?;
        Ok(GameStateSnapshot::build(&table.context, None, events))
    }

    pub fn apply_action(&mut self, id: GameId, seat: SeatId, action: Action) -> Result<GameStateSnapshot, EngineError> {
        let table = self.table_mut(id)?;
        let events = table.context.apply_action(&mut table.deck, seat, action)?;
        Ok(GameStateSnapshot::build(&table.context, None, events))
    }

    pub fn end_hand(&mut self, id: GameId) -> Result<GameStateSnapshot, EngineError> {
        let table = self.table_mut(id)?;
        let events = table.context.end_hand()?;
        Ok(GameStateSnapshot::build(&table.context, None, events))
    }

    pub fn query_permissible_actions(&self, id: GameId, seat: SeatId) -> Result<PermissibleActions, EngineError> {
        let table = self.table(id)?;
        permissible_actions(&table.context, seat)
    }

    pub fn query_snapshot(&self, id: GameId) -> Result<GameStateSnapshot, EngineError> {
        let table = self.table(id)?;
        Ok(GameStateSnapshot::build(&table.context, None, Vec::new()))
    }

    pub fn query_snapshot_for(&self, id: GameId, seat: SeatId) -> Result<GameStateSnapshot, EngineError> {
        let table = self.table(id)?;
        table.context.seat(seat)?;
        Ok(GameStateSnapshot::build(&table.context, Some(seat), Vec::new()))
    }
}
