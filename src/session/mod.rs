//! The contest layer: repeated rounds over a persistent scoreboard.
//!
//! A [`Contest`] owns the seats and the cumulative scores; each call to
//! `play_round` drives one fresh round and returns its aftermath. Rounds
//! the engine ends without a winner may still be awarded afterwards
//! through [`Contest::award`] once the ruler's own arbitration has been
//! consulted.

use crate::core::{EngineError, PlayerId, Scoreboard};
use crate::present::Presenter;
use crate::round::{Player, RoundCrafter};
use crate::ruler::Ruler;

/// Aftermath of one round.
pub struct RoundReport<R: Ruler> {
    /// Winner found by the engine's per-move check, if any.
    pub winner: Option<PlayerId>,
    /// Number of turns the round ran.
    pub turns: u32,
    /// Final ruler state, for game-specific aftermath queries.
    pub ruler: R,
}

/// Repeated rounds to a target win count.
pub struct Contest<R: Ruler> {
    players: Vec<Box<dyn Player<R>>>,
    scores: Scoreboard,
    target: u32,
}

impl<R: Ruler> Contest<R> {
    /// Set up a contest; the champion is the first seat to `target` round
    /// wins.
    #[must_use]
    pub fn new(players: Vec<Box<dyn Player<R>>>, target: u32) -> Self {
        assert!(target > 0, "Target must be at least 1 win");
        let scores = Scoreboard::new(players.len());
        Self {
            players,
            scores,
            target,
        }
    }

    /// Play one round on a fresh ruler, crediting an engine-found winner.
    pub fn play_round(
        &mut self,
        ruler: R,
        presenter: &mut dyn Presenter,
    ) -> Result<RoundReport<R>, EngineError> {
        let mut round = RoundCrafter::new(ruler, &mut self.players);
        let winner = round.play(presenter, &mut self.scores)?;
        let turns = round.turns_taken();
        Ok(RoundReport {
            winner,
            turns,
            ruler: round.into_ruler(),
        })
    }

    /// Credit a seat decided outside the engine (a ruler's fallback
    /// arbitration after a no-winner round).
    pub fn award(&mut self, player: PlayerId) {
        self.scores.credit(player);
    }

    /// Cumulative scores across rounds.
    #[must_use]
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// The first seat to have reached the target win count, if any.
    #[must_use]
    pub fn champion(&self) -> Option<PlayerId> {
        self.scores.leader_at(self.target)
    }

    /// Display name of a seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        self.players[player.index()].name()
    }
}
