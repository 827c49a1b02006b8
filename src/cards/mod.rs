//! Twenty-one: cards, decks, hands, the table ruler, and its players.

pub mod card;
pub mod deck;
pub mod hand;
pub mod players;
pub mod ruler;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::{Hand, BUST_THRESHOLD};
pub use players::{Dealer, Gambler};
pub use ruler::{DeckRuler, SeatKind, TableChoice};
