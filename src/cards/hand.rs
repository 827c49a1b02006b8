//! A player's cards and the ace-adjusted score.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank};

/// The bust line for twenty-one.
pub const BUST_THRESHOLD: u32 = 21;

/// An ordered sequence of dealt cards.
///
/// Scoring is pure: it depends only on the current contents, so it is
/// recomputed on every query rather than cached.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    // Hands in twenty-one rarely pass eight cards; stay inline.
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dealt card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ace-adjusted score: the value sum, with aces dropped from 11 to 1
    /// one at a time while the sum stays above the bust line.
    #[must_use]
    pub fn score(&self) -> u32 {
        let mut sum: u32 = self.cards.iter().map(|c| c.value()).sum();
        let mut aces = self.cards.iter().filter(|c| c.rank == Rank::Ace).count();

        while sum > BUST_THRESHOLD && aces > 0 {
            sum -= 10;
            aces -= 1;
        }
        sum
    }

    /// A hand busts once its score exceeds the bust line.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score() > BUST_THRESHOLD
    }

    /// Turn every hidden card face-up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.hidden = false;
        }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
