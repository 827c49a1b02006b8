//! Engine error taxonomy.
//!
//! Three kinds of failure exist in the engine, and only one is an error the
//! caller can react to at runtime:
//!
//! - An invalid interactive answer never becomes an `EngineError`; the
//!   prompting player re-asks locally.
//! - A round ending without a winner is a first-class outcome
//!   (`play()` returns `Ok(None)`), not an error.
//! - Everything below is a wiring or programmer error and is surfaced
//!   immediately instead of being swallowed.

use thiserror::Error;

/// Errors surfaced by rulers, players, and the round engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A ruler was asked for a capability it does not implement.
    ///
    /// Partial rulers are legal; calling a missing operation is not a
    /// runtime condition but a wiring bug, so it aborts the round.
    #[error("{ruler} does not support `{operation}`")]
    Unsupported {
        ruler: &'static str,
        operation: &'static str,
    },

    /// A choice named a tile outside the board.
    #[error("tile {tile} is out of bounds for a {n}x{n} board")]
    TileOutOfBounds { tile: usize, n: usize },

    /// A choice named a tile that already carries a marker.
    #[error("tile {tile} is already marked")]
    TileTaken { tile: usize },

    /// A suggestion was requested with no unmarked tile remaining.
    #[error("no unmarked tile remains to suggest")]
    BoardFull,

    /// A hit was applied with no cards left in the deck.
    #[error("the deck is out of cards")]
    DeckEmpty,

    /// A template key was rendered that the catalog does not hold.
    #[error("no message template named `{key}`")]
    MissingTemplate { key: String },

    /// The input collaborator failed (closed stream, broken pipe).
    #[error("input unavailable: {0}")]
    Input(#[from] std::io::Error),
}

impl EngineError {
    /// Shorthand for the loud not-implemented signal.
    #[must_use]
    pub fn unsupported(ruler: &'static str, operation: &'static str) -> Self {
        Self::Unsupported { ruler, operation }
    }
}
