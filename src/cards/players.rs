//! Card-game seats: the interactive gambler and the threshold dealer.

use super::ruler::{DeckRuler, TableChoice};
use crate::core::{EngineError, PlayerId};
use crate::present::{InputSource, Presenter};
use crate::round::Player;
use crate::ruler::Ruler;

/// Interactive twenty-one player.
///
/// One turn is a hit loop: reveal own cards, show the table, ask
/// hit-or-stay, and keep hitting until a stay or a bust. A busted gambler
/// takes no further action on later turns.
pub struct Gambler {
    id: PlayerId,
    name: String,
    input: Box<dyn InputSource>,
}

impl Gambler {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, input: Box<dyn InputSource>) -> Self {
        Self {
            id,
            name: name.into(),
            input,
        }
    }

    fn wants_hit(&mut self, presenter: &mut dyn Presenter) -> Result<bool, EngineError> {
        loop {
            let answer = self.input.answer(&format!("{}, (h)it or (s)tay?", self.name))?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "h" | "hit" => return Ok(true),
                "s" | "stay" => return Ok(false),
                _ => presenter.show("Please answer h or s."),
            }
        }
    }
}

impl Player<DeckRuler> for Gambler {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn take_turn(
        &mut self,
        ruler: &mut DeckRuler,
        presenter: &mut dyn Presenter,
    ) -> Result<(), EngineError> {
        loop {
            if ruler.is_busted(self.id) {
                return Ok(());
            }

            ruler.reveal(self.id);
            ruler.render(presenter)?;

            if !self.wants_hit(presenter)? {
                return ruler.apply_choice(self.id, TableChoice::Stay);
            }
            ruler.apply_choice(self.id, TableChoice::Hit)?;
        }
    }
}

/// House player: reveals its hole card, then hits until its score clears
/// the fixed stay threshold (or it busts).
pub struct Dealer {
    id: PlayerId,
    name: String,
}

impl Dealer {
    /// The dealer stays once its score strictly exceeds this.
    pub const STAY_THRESHOLD: u32 = 16;

    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The fixed stay rule, exposed for direct testing.
    #[must_use]
    pub fn stays_at(score: u32) -> bool {
        score > Self::STAY_THRESHOLD
    }
}

impl Player<DeckRuler> for Dealer {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn take_turn(
        &mut self,
        ruler: &mut DeckRuler,
        presenter: &mut dyn Presenter,
    ) -> Result<(), EngineError> {
        ruler.reveal(self.id);

        loop {
            if ruler.is_busted(self.id) {
                return Ok(());
            }
            if Self::stays_at(ruler.score(self.id)) {
                return ruler.apply_choice(self.id, TableChoice::Stay);
            }
            ruler.apply_choice(self.id, TableChoice::Hit)?;
        }
        // Final table state is rendered by the round engine.
    }
}
