/// Everything that can go wrong inside the engine, handed back to the caller instead of panicking.
///
/// Kept as a plain hand-written enum rather than a `thiserror`-derived one: there is no
/// `#[from]` wrapping to do here, every variant is raised explicitly at its call site, and the
/// `Display` text is part of the host-facing contract (SPEC_FULL.md §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A caller passed a structurally invalid argument (e.g. zero seats, a negative raise).
    InvalidArgument(String),
    /// The requested operation doesn't apply to the game's current `Phase`.
    InvalidPhase { expected: String, found: String },
    /// An action was submitted by a seat that is not the one currently on the clock.
    NotYourTurn { acting: usize, submitted_by: usize },
    /// The action is structurally legal but not currently permissible (e.g. a check when facing a bet).
    IllegalAction(String),
    /// A bet or raise requires more chips than the seat has available.
    InsufficientChips { seat: usize, requested: i64, available: i64 },
    /// The deck ran out of cards; only reachable if more than 52 cards are dealt in one hand.
    DeckExhausted,
    /// A settlement transaction failed the zero-sum conservation check.
    SettlementFailure(String),
    /// A query or action named a `GameId` the engine doesn't know about.
    UnknownGame(u64),
    /// A query or action named a seat that doesn't exist at this table.
    UnknownSeat(usize),
    /// A hand can't be started in the table's current state (e.g. fewer than two active seats).
    GameNotStartable(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EngineError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            EngineError::InvalidPhase { expected, found } => {
                write!(f, "expected phase {expected}, found {found}")
            }
            EngineError::NotYourTurn { acting, submitted_by } => write!(
                f,
                "seat {submitted_by} acted out of turn, seat {acting} is on the clock"
            ),
            EngineError::IllegalAction(msg) => write!(f, "illegal action: {msg}"),
            EngineError::InsufficientChips { seat, requested, available } => write!(
                f,
                "seat {seat} requested {requested} chips but only has {available}"
            ),
            EngineError::DeckExhausted => write!(f, "deck exhausted"),
            EngineError::SettlementFailure(msg) => write!(f, "settlement failed: {msg}"),
            EngineError::UnknownGame(id) => write!(f, "unknown game {id}"),
            EngineError::UnknownSeat(id) => write!(f, "unknown seat {id}"),
            EngineError::GameNotStartable(msg) => write!(f, "game not startable: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
