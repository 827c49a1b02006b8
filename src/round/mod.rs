//! The round engine: cyclic turn driver over a ruler and a seat list.
//!
//! `RoundCrafter::play` alternates players until the moving player caused a
//! win or the ruler reports exhaustion, checking both after every single
//! turn rather than per full cycle. It never interprets game rules itself;
//! everything game-specific flows through the [`Ruler`] contract and the
//! [`Player`] seam.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EngineError, PlayerId, Scoreboard};
use crate::present::Presenter;
use crate::ruler::Ruler;

/// A seat at the table: something that can take one turn.
///
/// A "turn" may commit several choices (a card player hits repeatedly); the
/// engine treats it as one unit and re-checks terminal conditions after it.
pub trait Player<R: Ruler> {
    /// Seat ID; must match this player's position in the round's seat list.
    fn id(&self) -> PlayerId;

    /// Display name.
    fn name(&self) -> &str;

    /// Should the engine render the field before this player's turn?
    ///
    /// Players that render mid-turn (card players peeking after each hit)
    /// leave this false.
    fn wants_display(&self) -> bool {
        false
    }

    /// Take one turn, committing choices through the ruler.
    fn take_turn(
        &mut self,
        ruler: &mut R,
        presenter: &mut dyn Presenter,
    ) -> Result<(), EngineError>;
}

/// One entry of a round's turn history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who moved.
    pub player: PlayerId,
    /// 1-based turn number within the round.
    pub turn: u32,
}

/// Drives a single round to completion.
///
/// Construct fresh per round: `play` mutates the ruler through each
/// player's moves and is not idempotent.
pub struct RoundCrafter<'a, R: Ruler> {
    ruler: R,
    players: &'a mut [Box<dyn Player<R>>],
    cursor: usize,
    winner: Option<PlayerId>,
    history: Vector<TurnRecord>,
    turn: u32,
}

impl<'a, R: Ruler> RoundCrafter<'a, R> {
    /// Wrap a ruler and a seat list into a playable round.
    ///
    /// Seat order is rotation order; each player's `id()` must equal its
    /// index in `players`.
    #[must_use]
    pub fn new(ruler: R, players: &'a mut [Box<dyn Player<R>>]) -> Self {
        assert!(!players.is_empty(), "A round needs at least one player");
        debug_assert!(players
            .iter()
            .enumerate()
            .all(|(i, p)| p.id().index() == i));

        Self {
            ruler,
            players,
            cursor: 0,
            winner: None,
            history: Vector::new(),
            turn: 0,
        }
    }

    /// Run the round until a win or exhaustion.
    ///
    /// Returns the winner, or `None` for the tie path. A winner's seat is
    /// credited on `scores` exactly once. The final state is rendered once
    /// after the loop exits, win or tie.
    pub fn play(
        &mut self,
        presenter: &mut dyn Presenter,
        scores: &mut Scoreboard,
    ) -> Result<Option<PlayerId>, EngineError> {
        loop {
            let mover = {
                let player = &mut self.players[self.cursor];
                if player.wants_display() {
                    self.ruler.render(presenter)?;
                }
                player.take_turn(&mut self.ruler, presenter)?;
                player.id()
            };

            self.turn += 1;
            self.history.push_back(TurnRecord {
                player: mover,
                turn: self.turn,
            });

            // Terminal checks run after every individual move and only
            // against the player who just moved.
            if self.ruler.caused_win(mover)? {
                debug!(%mover, turn = self.turn, "round won");
                self.winner = Some(mover);
                break;
            }
            if self.ruler.is_exhausted(Some(mover))? {
                debug!(%mover, turn = self.turn, "round exhausted");
                break;
            }

            self.cursor = (self.cursor + 1) % self.players.len();
        }

        self.ruler.render(presenter)?;

        if let Some(winner) = self.winner {
            scores.credit(winner);
        }
        Ok(self.winner)
    }

    /// The round winner, absent on the tie path.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// The ruler with its final state; rulers expose game-specific
    /// aftermath queries (fallback winner, tie) the engine does not model.
    #[must_use]
    pub fn ruler(&self) -> &R {
        &self.ruler
    }

    /// Consume the round, yielding the final ruler state.
    #[must_use]
    pub fn into_ruler(self) -> R {
        self.ruler
    }

    /// Turn history in move order.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Number of turns taken so far.
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::Transcript;

    /// Minimal counting ruler: each applied choice adds to a shared total;
    /// a seat wins by pushing the total to exactly the target, the round
    /// exhausts once the total reaches or passes it.
    struct CountRuler {
        total: u32,
        target: u32,
        last: Option<(PlayerId, u32)>,
    }

    impl CountRuler {
        fn new(target: u32) -> Self {
            Self {
                total: 0,
                target,
                last: None,
            }
        }
    }

    impl Ruler for CountRuler {
        type Choice = u32;

        fn name(&self) -> &'static str {
            "CountRuler"
        }

        fn render(&self, presenter: &mut dyn Presenter) -> Result<(), EngineError> {
            presenter.show(&format!("total: {}", self.total));
            Ok(())
        }

        fn is_exhausted(&self, _scope: Option<PlayerId>) -> Result<bool, EngineError> {
            Ok(self.total >= self.target)
        }

        fn caused_win(&self, player: PlayerId) -> Result<bool, EngineError> {
            Ok(self.total == self.target && self.last.map(|(p, _)| p) == Some(player))
        }

        fn apply_choice(&mut self, player: PlayerId, amount: u32) -> Result<(), EngineError> {
            self.total += amount;
            self.last = Some((player, amount));
            Ok(())
        }
    }

    /// Seat that always adds a fixed amount.
    struct FixedAdder {
        id: PlayerId,
        amount: u32,
    }

    impl Player<CountRuler> for FixedAdder {
        fn id(&self) -> PlayerId {
            self.id
        }

        fn name(&self) -> &str {
            "adder"
        }

        fn take_turn(
            &mut self,
            ruler: &mut CountRuler,
            _presenter: &mut dyn Presenter,
        ) -> Result<(), EngineError> {
            ruler.apply_choice(self.id, self.amount)
        }
    }

    fn seats(amounts: &[u32]) -> Vec<Box<dyn Player<CountRuler>>> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| {
                Box::new(FixedAdder {
                    id: PlayerId::new(i as u8),
                    amount,
                }) as Box<dyn Player<CountRuler>>
            })
            .collect()
    }

    #[test]
    fn test_win_stops_round_and_credits_once() {
        // 1+1+1 = 3: seat 0 lands the target on turn 3
        let mut players = seats(&[1, 1]);
        let mut scores = Scoreboard::new(2);
        let mut transcript = Transcript::new();

        let mut round = RoundCrafter::new(CountRuler::new(3), &mut players);
        let winner = round.play(&mut transcript, &mut scores).unwrap();

        assert_eq!(winner, Some(PlayerId::new(0)));
        assert_eq!(round.turns_taken(), 3);
        assert_eq!(scores.wins(PlayerId::new(0)), 1);
        assert_eq!(scores.wins(PlayerId::new(1)), 0);
    }

    #[test]
    fn test_exhaustion_leaves_winner_unset() {
        // 2+2 overshoots a target of 3 without ever hitting it
        let mut players = seats(&[2, 2]);
        let mut scores = Scoreboard::new(2);
        let mut transcript = Transcript::new();

        let mut round = RoundCrafter::new(CountRuler::new(3), &mut players);
        let winner = round.play(&mut transcript, &mut scores).unwrap();

        assert_eq!(winner, None);
        assert_eq!(round.winner(), None);
        assert_eq!(scores.wins(PlayerId::new(0)), 0);
        assert_eq!(scores.wins(PlayerId::new(1)), 0);
    }

    #[test]
    fn test_rotation_is_cyclic_in_seat_order() {
        let mut players = seats(&[1, 1]);
        let mut scores = Scoreboard::new(2);
        let mut transcript = Transcript::new();

        let mut round = RoundCrafter::new(CountRuler::new(4), &mut players);
        round.play(&mut transcript, &mut scores).unwrap();

        let movers: Vec<_> = round.history().iter().map(|r| r.player.index()).collect();
        assert_eq!(movers, vec![0, 1, 0, 1]);
        let turns: Vec<_> = round.history().iter().map(|r| r.turn).collect();
        assert_eq!(turns, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_final_state_rendered_once_after_loop() {
        let mut players = seats(&[3]);
        let mut scores = Scoreboard::new(1);
        let mut transcript = Transcript::new();

        let mut round = RoundCrafter::new(CountRuler::new(3), &mut players);
        round.play(&mut transcript, &mut scores).unwrap();

        assert_eq!(transcript.lines(), &["total: 3"]);
    }

    #[test]
    fn test_win_checked_before_exhaustion() {
        // A move that both lands the target and would exhaust next check
        // still counts as a win for the mover.
        let mut players = seats(&[3]);
        let mut scores = Scoreboard::new(1);
        let mut transcript = Transcript::new();

        let mut round = RoundCrafter::new(CountRuler::new(3), &mut players);
        let winner = round.play(&mut transcript, &mut scores).unwrap();
        assert_eq!(winner, Some(PlayerId::new(0)));
    }
}
