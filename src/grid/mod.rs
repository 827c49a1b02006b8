//! Marker-grid games: tiles, the board, the grid ruler, and its players.

pub mod board;
pub mod players;
pub mod ruler;
pub mod tile;

pub use board::{Board, Line, Marker};
pub use players::{GridBot, GridHuman};
pub use ruler::GridRuler;
pub use tile::Tile;
