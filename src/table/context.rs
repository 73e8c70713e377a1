use super::action::Action;
use super::betting;
use super::event::{BlindKind, Event, SidePotSummary, WinnerSummary};
use super::phase::{Phase, Trigger};
use super::seat::{Seat, SeatStatus};
use super::settlement::{settle_showdown, settle_walkover, HandResult};
use crate::cards::{Board, Deck, Hole};
use crate::ledger::ChipLedger;
use crate::{Chips, EngineError, GameId, SeatId, TableConfig};
use std::collections::HashMap;

/// The aggregate mutable root for one table across hands: phase, seats, ledger, community
/// cards, per-round and per-hand betting state, and the append-only event log (SPEC_FULL.md §3).
/// Owns everything except the `Deck`, which the owning `Table` (see `engine.rs`) scopes to the
/// current hand and passes in whenever a card needs to be dealt.
pub struct GameContext {
    pub(crate) game_id: GameId,
    pub(crate) config: TableConfig,
    pub(crate) phase: Phase,
    pub(crate) seats: Vec<Seat>,
    pub(crate) ledger: ChipLedger,
    pub(crate) board: Board,
    pub(crate) button_seat: SeatId,
    pub(crate) active_seat: Option<SeatId>,
    pub(crate) current_bet: Chips,
    pub(crate) last_raise_increment: Chips,
    pub(crate) round_contrib: HashMap<SeatId, Chips>,
    pub(crate) hand_contrib: HashMap<SeatId, Chips>,
    pub(crate) has_acted: HashMap<SeatId, bool>,
    pub(crate) hand_index: u64,
    pub(crate) events: Vec<Event>,
    pub(crate) last_result: Vec<HandResult>,
}

impl GameContext {
    pub fn new(game_id: GameId, config: TableConfig) -> Self {
        let mut ledger = ChipLedger::new();
        let seats = (0..config.num_seats)
            .map(|id| {
                ledger.seat(id, config.initial_stacks[id]);
                Seat::new(id)
            })
            .collect();
        Self {
            game_id,
            config,
            phase: Phase::Init,
            seats,
            ledger,
            board: Board::empty(),
            button_seat: 0,
            active_seat: None,
            current_bet: 0,
            last_raise_increment: 0,
            round_contrib: HashMap::new(),
            hand_contrib: HashMap::new(),
            has_acted: HashMap::new(),
            hand_index: 0,
            events: Vec::new(),
            last_result: Vec::new(),
        }
    }

    pub fn seat(&self, id: SeatId) -> Result<&Seat, EngineError> {
        self.seats.get(id).ok_or(EngineError::UnknownSeat(id))
    }
    pub fn seat_mut(&mut self, id: SeatId) -> Result<&mut Seat, EngineError> {
        self.seats.get_mut(id).ok_or(EngineError::UnknownSeat(id))
    }
    pub fn log(&self) -> &[Event] {
        &self.events
    }

    fn clockwise_ids(&self) -> Vec<SeatId> {
        (0..self.seats.len()).collect()
    }

    fn next_seat_clockwise(&self, from: SeatId, predicate: impl Fn(&Seat) -> bool) -> Option<SeatId> {
        let n = self.seats.len();
        for offset in 1..=n {
            let id = (from + offset) % n;
            if predicate(&self.seats[id]) {
                return Some(id);
            }
        }
        None
    }

    fn active_seats_clockwise_from(&self, from: SeatId) -> Vec<SeatId> {
        let n = self.seats.len();
        (1..=n).map(|offset| (from + offset) % n).filter(|&id| !self.seats[id].is_out()).collect()
    }

    /// Seat positions for the next hand: small blind, big blind, first preflop actor. Heads-up
    /// follows the standard special case — the button posts the small blind and acts first
    /// preflop (SPEC_FULL.md §9).
    fn blind_positions(&self) -> Result<(SeatId, SeatId, SeatId), EngineError> {
        let active_count = self.seats.iter().filter(|s| !s.is_out()).count();
        if active_count == 2 {
            let sb = self.button_seat;
            let bb = self
                .next_seat_clockwise(sb, |s| !s.is_out())
                .ok_or_else(|| EngineError::GameNotStartable("no second active seat".into()))?;
            Ok((sb, bb, sb))
        } else {
            let sb = self
                .next_seat_clockwise(self.button_seat, |s| !s.is_out())
                .ok_or_else(|| EngineError::GameNotStartable("no active seat clockwise of the button".into()))?;
            let bb = self
                .next_seat_clockwise(sb, |s| !s.is_out())
                .ok_or_else(|| EngineError::GameNotStartable("no active seat clockwise of the small blind".into()))?;
            let first = self
                .next_seat_clockwise(bb, |s| !s.is_out())
                .ok_or_else(|| EngineError::GameNotStartable("no active seat clockwise of the big blind".into()))?;
            Ok((sb, bb, first))
        }
    }

    fn post_blind(&mut self, seat: SeatId, amount: Chips, kind: BlindKind, batch: &mut Vec<Event>) -> Result<(), EngineError> {
        if amount > 0 {
            let reason = match kind {
                BlindKind::Small => "small blind",
                BlindKind::Big => "big blind",
            };
            self.ledger.freeze(seat, amount, reason)?;
        }
        self.round_contrib.insert(seat, amount);
        self.hand_contrib.insert(seat, amount);
        if self.ledger.balance(seat)? == 0 {
            self.seat_mut(seat)?.status = SeatStatus::AllIn;
        }
        batch.push(Event::BlindPosted { seat, kind, amount });
        Ok(())
    }

    /// Deals a fresh hand: resets per-hand state, deals hole cards, posts blinds, and puts the
    /// first actor on the clock. Fails with `GameNotStartable` when fewer than two seats remain
    /// able to play (Scenario F).
    pub fn start_hand(&mut self, deck: &mut Deck) -> Result<Vec<Event>, EngineError> {
        if !matches!(self.phase, Phase::Init | Phase::Finished) {
            return Err(EngineError::InvalidPhase {
                expected: "init or finished".into(),
                found: self.phase.to_string(),
            });
        }
        let active_count = self.seats.iter().filter(|s| !s.is_out()).count();
        if active_count < 2 {
            return Err(EngineError::GameNotStartable(format!("only {active_count} seat(s) remain active")));
        }

        self.hand_index += 1;
        self.board.clear();
        self.round_contrib.clear();
        self.hand_contrib.clear();
        self.has_acted.clear();
        self.current_bet = 0;
        self.last_raise_increment = 0;
        self.last_result.clear();
        for seat in self.seats.iter_mut() {
            seat.hole = None;
            if !seat.is_out() {
                seat.status = SeatStatus::Active;
            }
        }

        let mut batch = Vec::new();
        *deck = Deck::new(self.config.shuffle_seed.wrapping_add(self.hand_index));

        for id in self.active_seats_clockwise_from(self.button_seat) {
            let cards = deck.deal_n(2)?;
            self.seats[id].hole = Some(Hole::new(cards[0], cards[1]));
            batch.push(Event::HoleCardsDealt { seat: id });
        }

        let (sb_seat, bb_seat, first_actor) = self.blind_positions()?;
        let sb_amount = self.config.small_blind.min(self.ledger.balance(sb_seat)?);
        self.post_blind(sb_seat, sb_amount, BlindKind::Small, &mut batch)?;
        let bb_amount = self.config.big_blind.min(self.ledger.balance(bb_seat)?);
        self.post_blind(bb_seat, bb_amount, BlindKind::Big, &mut batch)?;

        self.current_bet = bb_amount;
        self.last_raise_increment = self.config.big_blind;
        self.active_seat = Some(first_actor);
        self.phase = Phase::PreFlop;
        batch.push(Event::HandStarted {
            game_id: self.game_id,
            hand_index: self.hand_index,
            button_seat: self.button_seat,
        });
        log::trace!("hand {} started at table {}, button at seat {}", self.hand_index, self.game_id, self.button_seat);
        self.events.extend(batch.clone());
        Ok(batch)
    }

    /// Validates and applies one seat's decision, then drives the phase state machine forward as
    /// far as it can go without further caller input (dealing streets, settling at showdown or on
    /// a walkover).
    pub fn apply_action(&mut self, deck: &mut Deck, seat: SeatId, action: Action) -> Result<Vec<Event>, EngineError> {
        betting::apply_action(self, seat, action)?;
        let mut batch = Vec::new();
        let amount = self.round_contrib.get(&seat).copied().unwrap_or(0);
        batch.push(Event::ActionApplied { seat, bet_type: action, amount, resulting_current_bet: self.current_bet });
        log::trace!("seat {seat} applied {action} in hand {}", self.hand_index);
        self.advance_after_action(deck, &mut batch)?;
        self.events.extend(batch.clone());
        Ok(batch)
    }

    /// Idempotent: a no-op once `Finished` has already been reached, since every hand finalizes
    /// itself as soon as it has enough information to do so.
    pub fn end_hand(&mut self) -> Result<Vec<Event>, EngineError> {
        if self.phase == Phase::Finished {
            return Ok(Vec::new());
        }
        Err(EngineError::InvalidPhase { expected: "finished".into(), found: self.phase.to_string() })
    }

    fn reset_round(&mut self) {
        self.round_contrib.clear();
        self.has_acted.clear();
        self.current_bet = 0;
        self.last_raise_increment = 0;
    }

    fn advance_after_action(&mut self, deck: &mut Deck, batch: &mut Vec<Event>) -> Result<(), EngineError> {
        loop {
            let contesting: Vec<SeatId> = self
                .seats
                .iter()
                .filter(|s| s.is_in_hand())
                .map(|s| s.id)
                .collect();
            if contesting.len() <= 1 {
                self.run_walkover(contesting.first().copied(), batch)?;
                return Ok(());
            }
            if !betting::round_is_complete(self) {
                self.active_seat = self.next_actor();
                return Ok(());
            }

            if let Some(street) = self.phase.street() {
                batch.push(Event::BettingRoundCompleted { street });
            }
            let next = self.phase.defined_next_phase(Trigger::BettingRoundComplete).ok_or_else(|| {
                EngineError::InvalidPhase { expected: "a phase with a defined successor".into(), found: self.phase.to_string() }
            })?;
            self.enter_phase(next, deck, batch)?;
            if self.phase == Phase::Finished {
                return Ok(());
            }
            if self.seats.iter().any(|s| s.is_active()) {
                self.active_seat = self.next_seat_clockwise(self.button_seat, |s| s.is_active());
                return Ok(());
            }
            // nobody left can act (every remaining contester is all-in): keep auto-dealing
        }
    }

    fn enter_phase(&mut self, phase: Phase, deck: &mut Deck, batch: &mut Vec<Event>) -> Result<(), EngineError> {
        self.phase = phase;
        match phase {
            Phase::Flop => {
                let cards = deck.deal_n(3)?;
                batch.push(Event::CommunityDealt { street: crate::cards::Street::Flop, cards: cards.clone() });
                self.board.extend(cards);
                self.reset_round();
            }
            Phase::Turn => {
                let cards = deck.deal_n(1)?;
                batch.push(Event::CommunityDealt { street: crate::cards::Street::Turn, cards: cards.clone() });
                self.board.extend(cards);
                self.reset_round();
            }
            Phase::River => {
                let cards = deck.deal_n(1)?;
                batch.push(Event::CommunityDealt { street: crate::cards::Street::River, cards: cards.clone() });
                self.board.extend(cards);
                self.reset_round();
            }
            Phase::Showdown => {
                self.run_showdown(batch)?;
                self.enter_finished(batch);
            }
            Phase::Finished => self.enter_finished(batch),
            Phase::PreFlop | Phase::Init => {
                unreachable!("PreFlop/Init are only entered via start_hand")
            }
        }
        Ok(())
    }

    fn next_actor(&self) -> Option<SeatId> {
        let start = self.active_seat.unwrap_or(self.button_seat);
        self.next_seat_clockwise(start, |s| {
            s.is_active()
                && (!self.has_acted.get(&s.id).copied().unwrap_or(false)
                    || self.round_contrib.get(&s.id).copied().unwrap_or(0) != self.current_bet)
        })
    }

    fn run_showdown(&mut self, batch: &mut Vec<Event>) -> Result<(), EngineError> {
        let contesting: Vec<SeatId> = self
            .seats
            .iter()
            .filter(|s| s.is_in_hand())
            .map(|s| s.id)
            .collect();
        let holes: HashMap<SeatId, Hole> =
            contesting.iter().filter_map(|&id| self.seats[id].hole.map(|h| (id, h))).collect();
        let order = self.clockwise_ids();
        let settlement =
            settle_showdown(&self.hand_contrib, &contesting, &holes, &self.board, self.button_seat, &order)?;
        self.ledger.settle_hand(&settlement.transactions)?;
        batch.push(Event::SidePotsComputed {
            pots: settlement
                .pots
                .iter()
                .map(|p| SidePotSummary { amount: p.amount, eligible_seats: p.eligible.clone() })
                .collect(),
        });
        batch.push(Event::HandResult {
            winners: settlement
                .results
                .iter()
                .map(|r| WinnerSummary { seat: r.seat, amount: r.amount, category: r.category.clone(), kickers: r.kickers.clone() })
                .collect(),
        });
        log::debug!("hand {} settled at showdown with {} pot(s)", self.hand_index, settlement.pots.len());
        self.last_result = settlement.results;
        Ok(())
    }

    fn run_walkover(&mut self, winner: Option<SeatId>, batch: &mut Vec<Event>) -> Result<(), EngineError> {
        let winner = winner.ok_or_else(|| {
            EngineError::SettlementFailure("no contesting seat remains to collect the pot".into())
        })?;
        let settlement = settle_walkover(&self.hand_contrib, winner);
        self.ledger.settle_hand(&settlement.transactions)?;
        batch.push(Event::HandResult {
            winners: settlement
                .results
                .iter()
                .map(|r| WinnerSummary { seat: r.seat, amount: r.amount, category: r.category.clone(), kickers: r.kickers.clone() })
                .collect(),
        });
        log::debug!("hand {} ended by walkover, seat {winner} collects the pot", self.hand_index);
        self.last_result = settlement.results;
        self.active_seat = None;
        self.enter_finished(batch);
        Ok(())
    }

    fn enter_finished(&mut self, batch: &mut Vec<Event>) {
        for seat in self.seats.iter_mut() {
            let balance = self.ledger.balance(seat.id).unwrap_or(0);
            if balance == 0 && !seat.is_out() {
                seat.status = SeatStatus::Out;
            }
        }
        self.button_seat = self.next_seat_clockwise(self.button_seat, |s| !s.is_out()).unwrap_or(self.button_seat);
        self.board.clear();
        for seat in self.seats.iter_mut() {
            seat.hole = None;
        }
        self.round_contrib.clear();
        self.has_acted.clear();
        self.active_seat = None;
        self.phase = Phase::Finished;
        batch.push(Event::HandFinished { hand_index: self.hand_index });
        log::trace!("hand {} finished, button rotates to seat {}", self.hand_index, self.button_seat);
    }
}
