//! The draw pile.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// A stack of cards drawn from the top.
///
/// The standard constructor builds the full 52-card set and shuffles it
/// exactly once; after that the order never changes, only shrinks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    // Top of the stack is the end of the vec.
    cards: Vec<Card>,
}

impl Deck {
    /// Full 52-card deck, uniformly shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// A deck with a fixed order; draws pop from the end of `cards`.
    ///
    /// For deterministic tests and worked examples.
    #[must_use]
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return the top card.
    #[must_use]
    pub fn take_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_deck_has_52_distinct_cards() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(&mut rng);

        assert_eq!(deck.remaining(), 52);

        let mut seen = HashSet::new();
        while let Some(card) = deck.take_one() {
            assert!(seen.insert((card.suit, card.rank)), "duplicate {card}");
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let order = |seed| {
            let mut rng = GameRng::new(seed);
            let mut deck = Deck::shuffled(&mut rng);
            std::iter::from_fn(|| deck.take_one()).collect::<Vec<_>>()
        };

        assert_eq!(order(7), order(7));
        assert_ne!(order(7), order(8));
    }

    #[test]
    fn test_stacked_draws_from_the_end() {
        let mut deck = Deck::stacked(vec![
            Card::new(Suit::Clubs, Rank::Two),
            Card::new(Suit::Clubs, Rank::Three),
        ]);

        assert_eq!(deck.take_one().unwrap().rank, Rank::Three);
        assert_eq!(deck.take_one().unwrap().rank, Rank::Two);
        assert_eq!(deck.take_one(), None);
        assert!(deck.is_empty());
    }
}
