//! Grid-game seats: the interactive human and the heuristic bot.

use super::ruler::GridRuler;
use super::tile::Tile;
use crate::core::{EngineError, GameRng, PlayerId};
use crate::present::{InputSource, Presenter};
use crate::round::Player;
use crate::ruler::Ruler;

/// Default name pool for bot seats.
const BOT_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];

/// Interactive grid player: prompts for a tile number and re-prompts until
/// the answer names an unmarked tile.
pub struct GridHuman {
    id: PlayerId,
    name: String,
    input: Box<dyn InputSource>,
}

impl GridHuman {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, input: Box<dyn InputSource>) -> Self {
        Self {
            id,
            name: name.into(),
            input,
        }
    }
}

impl Player<GridRuler> for GridHuman {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn wants_display(&self) -> bool {
        true
    }

    fn take_turn(
        &mut self,
        ruler: &mut GridRuler,
        presenter: &mut dyn Presenter,
    ) -> Result<(), EngineError> {
        let available = ruler.available_choices()?;
        let listing = available
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        // Re-prompt until valid; only a dead input stream escapes the loop.
        loop {
            let answer = self
                .input
                .answer(&format!("{}, choose a square ({listing}):", self.name))?;

            match answer.trim().parse::<usize>() {
                Ok(number) if available.contains(&Tile(number)) => {
                    return ruler.apply_choice(self.id, Tile(number));
                }
                _ => presenter.show("Sorry, that's not a valid square."),
            }
        }
    }
}

/// Non-interactive grid player driven by the ruler's suggestion heuristic.
pub struct GridBot {
    id: PlayerId,
    name: String,
}

impl GridBot {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// A bot with a name picked from the default pool.
    #[must_use]
    pub fn anonymous(id: PlayerId, rng: &mut GameRng) -> Self {
        let name = *rng.choose(&BOT_NAMES).expect("name pool is non-empty");
        Self::new(id, name)
    }
}

impl Player<GridRuler> for GridBot {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn take_turn(
        &mut self,
        ruler: &mut GridRuler,
        _presenter: &mut dyn Presenter,
    ) -> Result<(), EngineError> {
        let tile = ruler.suggest(self.id)?;
        ruler.apply_choice(self.id, tile)
    }
}
