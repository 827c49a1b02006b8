//! # roundcraft
//!
//! A two-player turn-based game engine with pluggable rules objects.
//!
//! ## Design Principles
//!
//! 1. **Rules-Agnostic Engine**: The round loop never interprets game
//!    rules. Everything game-specific flows through the `Ruler` contract.
//!
//! 2. **Loud Defaults**: Every `Ruler` operation defaults to an error.
//!    A rules object that forgets to conform fails at the call site, not
//!    silently.
//!
//! 3. **Narrow I/O Seams**: Players talk to the outside world only through
//!    `Presenter` and `InputSource`, so every interactive flow is
//!    scriptable in tests.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player maps, scoreboard, RNG, errors
//! - `ruler`: The `Ruler` contract every rules object conforms to
//! - `round`: `RoundCrafter`, the cyclic turn driver
//! - `grid`: Tic-tac-toe on an n×n board, with suggestion heuristics
//! - `cards`: Twenty-one with deal protocol and bust arbitration
//! - `moves`: Rock-paper-scissors move model and duel scoring
//! - `present`: Console and scripted presenters, message templating
//! - `session`: Contests of repeated rounds to a target win count

pub mod cards;
pub mod core;
pub mod grid;
pub mod moves;
pub mod present;
pub mod round;
pub mod ruler;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, PlayerId, PlayerMap, Scoreboard};

pub use crate::ruler::Ruler;

pub use crate::round::{Player, RoundCrafter, TurnRecord};

pub use crate::grid::{Board, GridBot, GridHuman, GridRuler, Marker, Tile};

pub use crate::cards::{Card, Dealer, Deck, DeckRuler, Gambler, Hand, Rank, SeatKind, Suit, TableChoice};

pub use crate::moves::{Duel, Move, Outcome};

pub use crate::present::{Console, InputSource, MessageCatalog, Presenter, RenderContext, Script, Transcript};

pub use crate::session::{Contest, RoundReport};
