pub mod action;
pub mod betting;
pub mod context;
pub mod engine;
pub mod event;
pub mod phase;
pub mod pot;
pub mod rules;
pub mod seat;
pub mod settlement;
pub mod snapshot;

pub use action::Action;
pub use context::GameContext;
pub use engine::Engine;
pub use event::Event;
pub use phase::Phase;
pub use pot::SidePot;
pub use seat::{Seat, SeatStatus};
pub use settlement::HandResult;
pub use snapshot::GameStateSnapshot;
