//! Rock-paper-scissors move model.
//!
//! A `Move` is a tagged value from a small fixed set; the beat relation is a
//! single variant-by-variant outcome table rather than per-variant
//! comparison methods, so there is no double dispatch and no ambiguity
//! about which side's comparison runs.
//!
//! Two published move sets exist: the classic three-element game and the
//! extended lizard/spock variant. Comparison works across either set since
//! the table covers all five variants.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId, Scoreboard};

/// One throw in a rock-paper-scissors round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

/// Result of comparing two moves, from the first mover's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same comparison seen from the other side.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

use Outcome::{Draw, Lose, Win};

/// Outcome table, indexed `[mover][opponent]`.
///
/// Rock crushes scissors and lizard; paper covers rock and disproves spock;
/// scissors cut paper and decapitate lizard; lizard eats paper and poisons
/// spock; spock smashes scissors and vaporizes rock.
const OUTCOMES: [[Outcome; 5]; 5] = [
    // vs:      Rock  Paper Scissors Lizard Spock
    /* Rock */ [Draw, Lose, Win, Win, Lose],
    /* Paper */ [Win, Draw, Lose, Lose, Win],
    /* Scissors */ [Lose, Win, Draw, Win, Lose],
    /* Lizard */ [Lose, Win, Lose, Draw, Win],
    /* Spock */ [Win, Lose, Win, Lose, Draw],
];

impl Move {
    /// The classic three-move game.
    pub const CLASSIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The extended five-move variant.
    pub const EXTENDED: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    const fn table_index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
            Move::Lizard => 3,
            Move::Spock => 4,
        }
    }

    /// Compare this move against another.
    #[must_use]
    pub fn against(self, other: Move) -> Outcome {
        OUTCOMES[self.table_index()][other.table_index()]
    }

    /// Does this move beat the other outright?
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.against(other) == Win
    }

    /// Pick a uniformly random move from a move set.
    ///
    /// Panics if `set` is empty; both published sets are non-empty.
    #[must_use]
    pub fn random(set: &[Move], rng: &mut GameRng) -> Move {
        *rng.choose(set).expect("move set must not be empty")
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Move {
    type Err = UnknownMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "sc" => Ok(Move::Scissors),
            "lizard" | "l" => Ok(Move::Lizard),
            "spock" | "sp" => Ok(Move::Spock),
            other => Err(UnknownMove(other.to_string())),
        }
    }
}

/// Parse failure for an interactive answer; callers re-prompt on this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMove(pub String);

impl std::fmt::Display for UnknownMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` is not a known move", self.0)
    }
}

impl std::error::Error for UnknownMove {}

/// Two-seat scorekeeper for a sequence of simultaneous throws.
///
/// Unlike board and card games the two picks land at once, so there is no
/// round engine involved: the duel just arbitrates each pair of moves and
/// credits the winner.
#[derive(Clone, Debug)]
pub struct Duel {
    scores: Scoreboard,
}

impl Default for Duel {
    fn default() -> Self {
        Self::new()
    }
}

impl Duel {
    /// Seat 0 throws first in `resolve`; outcomes are from its perspective.
    pub const FIRST: PlayerId = PlayerId::new(0);
    pub const SECOND: PlayerId = PlayerId::new(1);

    #[must_use]
    pub fn new() -> Self {
        Self {
            scores: Scoreboard::new(2),
        }
    }

    /// Arbitrate one pair of throws, crediting the winner (if any).
    pub fn resolve(&mut self, first: Move, second: Move) -> Outcome {
        let outcome = first.against(second);
        match outcome {
            Win => self.scores.credit(Self::FIRST),
            Lose => self.scores.credit(Self::SECOND),
            Draw => {}
        }
        outcome
    }

    /// Wins so far for a seat.
    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        self.scores.wins(player)
    }

    /// The first seat to reach `target` wins, if any.
    #[must_use]
    pub fn champion_at(&self, target: u32) -> Option<PlayerId> {
        self.scores.leader_at(target)
    }
}
