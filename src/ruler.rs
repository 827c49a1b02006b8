//! The ruler capability contract.
//!
//! A `Ruler` is the rules-and-state object a round consults: it owns the
//! board or the deck, applies committed choices, and answers the win and
//! exhaustion questions. The round engine is generic over it and touches
//! game state through nothing else.
//!
//! Every operation has a default body that fails with
//! [`EngineError::Unsupported`]. A ruler that only speaks part of the
//! contract can still drive the engine; calling a missing capability is a
//! wiring bug and aborts loudly instead of silently no-opping.

use crate::core::{EngineError, PlayerId};
use crate::present::Presenter;

/// Capability interface between the round engine and a game's rules.
pub trait Ruler {
    /// The unit a player submits per move: a tile for grid games, a
    /// hit-or-stay for card games.
    type Choice: Clone + std::fmt::Debug;

    /// Ruler name used in unsupported-capability errors.
    fn name(&self) -> &'static str;

    /// Push a human-viewable snapshot of the current state.
    ///
    /// Must not mutate game state.
    fn render(&self, _presenter: &mut dyn Presenter) -> Result<(), EngineError> {
        Err(EngineError::unsupported(self.name(), "render"))
    }

    /// Are further moves impossible?
    ///
    /// `scope` of `Some(player)` asks relative to that player (card games
    /// end once their designated last actor has acted); `None` asks
    /// globally (board full).
    fn is_exhausted(&self, _scope: Option<PlayerId>) -> Result<bool, EngineError> {
        Err(EngineError::unsupported(self.name(), "is_exhausted"))
    }

    /// Did this player's most recent committed choice produce a winning
    /// configuration right now?
    ///
    /// Recomputed fresh on every call; implementations must not cache.
    fn caused_win(&self, _player: PlayerId) -> Result<bool, EngineError> {
        Err(EngineError::unsupported(self.name(), "caused_win"))
    }

    /// Commit a player's choice into ruler-owned state.
    ///
    /// This is the only write path into the board or the deck.
    fn apply_choice(&mut self, _player: PlayerId, _choice: Self::Choice) -> Result<(), EngineError> {
        Err(EngineError::unsupported(self.name(), "apply_choice"))
    }

    /// The currently legal choice set.
    fn available_choices(&self) -> Result<Vec<Self::Choice>, EngineError> {
        Err(EngineError::unsupported(self.name(), "available_choices"))
    }

    /// Heuristic pick for non-interactive players.
    fn suggest(&mut self, _player: PlayerId) -> Result<Self::Choice, EngineError> {
        Err(EngineError::unsupported(self.name(), "suggest"))
    }
}
