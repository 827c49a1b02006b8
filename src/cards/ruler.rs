//! Deck ruler: the card-game conformance of the [`Ruler`] contract.
//!
//! Owns the deck and every seat's hand, runs the deal protocol, applies
//! hits, and arbitrates bust/score outcomes. It deliberately leaves
//! `suggest` unimplemented: the dealer's fixed stay threshold lives in the
//! dealer player, not in the rules, so asking this ruler for a suggestion
//! is a wiring bug and fails loudly through the trait default.

use tracing::debug;

use super::card::Card;
use super::deck::Deck;
use super::hand::Hand;
use crate::core::{EngineError, GameRng, PlayerId, PlayerMap};
use crate::present::Presenter;
use crate::ruler::Ruler;

/// What a seat is at the table.
///
/// A dealer seat receives its first card face-down and is the designated
/// last actor of the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatKind {
    Gambler,
    Dealer,
}

/// A card player's per-move choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableChoice {
    /// Draw the top card into the mover's hand.
    Hit,
    /// Stop drawing; applying this changes nothing.
    Stay,
}

/// Rules/state object for twenty-one.
#[derive(Clone, Debug)]
pub struct DeckRuler {
    deck: Deck,
    hands: PlayerMap<Hand>,
    seats: PlayerMap<SeatKind>,
}

impl DeckRuler {
    /// Shuffle a fresh 52-card deck and deal the opening hands.
    pub fn new(seats: &[SeatKind], rng: &mut GameRng) -> Result<Self, EngineError> {
        Self::with_deck(seats, Deck::shuffled(rng))
    }

    /// Build over a prepared deck (stacked decks for tests and examples),
    /// then deal.
    pub fn with_deck(seats: &[SeatKind], deck: Deck) -> Result<Self, EngineError> {
        let count = seats.len();
        let mut ruler = Self {
            deck,
            hands: PlayerMap::with_default(count),
            seats: PlayerMap::new(count, |p| seats[p.index()]),
        };
        ruler.deal()?;
        Ok(ruler)
    }

    /// Opening deal, in seat order: dealer seats get one hidden then one
    /// visible card; gambler seats get two visible cards.
    fn deal(&mut self) -> Result<(), EngineError> {
        for player in self.seats.player_ids().collect::<Vec<_>>() {
            match self.seats[player] {
                SeatKind::Dealer => {
                    let mut hole = self.draw()?;
                    hole.hidden = true;
                    self.hands[player].add(hole);
                    let up = self.draw()?;
                    self.hands[player].add(up);
                }
                SeatKind::Gambler => {
                    for _ in 0..2 {
                        let card = self.draw()?;
                        self.hands[player].add(card);
                    }
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<Card, EngineError> {
        self.deck.take_one().ok_or(EngineError::DeckEmpty)
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// A seat's ace-adjusted score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.hands[player].score()
    }

    #[must_use]
    pub fn is_busted(&self, player: PlayerId) -> bool {
        self.hands[player].is_busted()
    }

    #[must_use]
    pub fn someone_busted(&self) -> bool {
        self.hands.iter().any(|(_, hand)| hand.is_busted())
    }

    /// Is this seat the designated last actor?
    #[must_use]
    pub fn is_last_actor(&self, player: PlayerId) -> bool {
        self.seats[player] == SeatKind::Dealer
    }

    /// Turn a seat's hidden cards face-up (start of their own turn, or the
    /// showdown).
    pub fn reveal(&mut self, player: PlayerId) {
        self.hands[player].reveal_all();
    }

    /// Do all seats hold the same score?
    ///
    /// Callers must consult this before trusting [`DeckRuler::winner`]:
    /// the fallback keeps the first seat on ties instead of reporting the
    /// absence of a winner.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        let first = self.score(PlayerId::new(0));
        self.hands.player_ids().all(|p| self.score(p) == first)
    }

    /// Aftermath winner for rounds the engine ended without a `caused_win`.
    ///
    /// If anyone busted: the first non-busted seat (none when all busted).
    /// Otherwise the strictly highest score, keeping the first seat
    /// encountered on equal scores; check [`DeckRuler::is_tie`] first.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.someone_busted() {
            return self.hands.player_ids().find(|&p| !self.is_busted(p));
        }

        let mut best = PlayerId::new(0);
        for player in self.hands.player_ids() {
            if self.score(player) > self.score(best) {
                best = player;
            }
        }
        Some(best)
    }
}

impl Ruler for DeckRuler {
    type Choice = TableChoice;

    fn name(&self) -> &'static str {
        "DeckRuler"
    }

    fn render(&self, presenter: &mut dyn Presenter) -> Result<(), EngineError> {
        // A bust ends the round on the spot, before the remaining seats
        // get a turn to reveal themselves; the showdown render exposes
        // every card instead.
        let showdown = self.someone_busted();
        for (player, hand) in self.hands.iter() {
            let cards = hand
                .cards()
                .iter()
                .map(|&card| {
                    let mut card = card;
                    if showdown {
                        card.hidden = false;
                    }
                    card.to_string()
                })
                .collect::<Vec<_>>()
                .join("  ");
            let role = match self.seats[player] {
                SeatKind::Dealer => "Dealer",
                SeatKind::Gambler => "Gambler",
            };
            presenter.show(&format!("{role} ({player}):  {cards}"));
        }
        Ok(())
    }

    /// Exhausted once anyone busted, or once the scope player is the
    /// designated last actor (their turn ends the round).
    fn is_exhausted(&self, scope: Option<PlayerId>) -> Result<bool, EngineError> {
        let last_acted = scope.is_some_and(|p| self.is_last_actor(p));
        Ok(self.someone_busted() || last_acted)
    }

    /// Only the last actor can win through the engine's per-move check:
    /// nobody busted and their score strictly beats every other seat.
    fn caused_win(&self, player: PlayerId) -> Result<bool, EngineError> {
        if !self.is_last_actor(player) || self.is_busted(player) {
            return Ok(false);
        }

        let own = self.score(player);
        let beats_all = self
            .hands
            .player_ids()
            .filter(|&other| other != player)
            .all(|other| own > self.score(other));
        Ok(!self.someone_busted() && beats_all)
    }

    fn apply_choice(&mut self, player: PlayerId, choice: TableChoice) -> Result<(), EngineError> {
        match choice {
            TableChoice::Hit => {
                let card = self.draw()?;
                self.hands[player].add(card);
                debug!(%player, %card, score = self.score(player), "hit");
            }
            TableChoice::Stay => {
                debug!(%player, score = self.score(player), "stay");
            }
        }
        Ok(())
    }

    fn available_choices(&self) -> Result<Vec<TableChoice>, EngineError> {
        if self.deck.is_empty() {
            Ok(vec![TableChoice::Stay])
        } else {
            Ok(vec![TableChoice::Hit, TableChoice::Stay])
        }
    }

    // suggest: intentionally unsupported; see module docs.
}
