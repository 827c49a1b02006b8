//! Grid ruler: the board-game conformance of the [`Ruler`] contract.

use tracing::debug;

use super::board::{Board, Marker};
use super::tile::Tile;
use crate::core::{EngineError, GameRng, PlayerId, PlayerMap};
use crate::present::Presenter;
use crate::ruler::Ruler;

/// Rules/state object for marker-grid games.
///
/// Owns the board, each seat's marker, and each seat's last committed tile
/// (the anchor for `caused_win`). Players submit tiles through
/// `apply_choice` and never touch the board directly.
#[derive(Clone, Debug)]
pub struct GridRuler {
    board: Board,
    markers: PlayerMap<Marker>,
    last_tile: PlayerMap<Option<Tile>>,
    rng: GameRng,
}

impl GridRuler {
    /// Create a ruler for an n×n board with one marker per seat.
    #[must_use]
    pub fn new(n: usize, markers: &[Marker], rng: GameRng) -> Self {
        let seats = markers.len();
        let markers = PlayerMap::new(seats, |p| markers[p.index()]);
        Self {
            board: Board::new(n),
            markers,
            last_tile: PlayerMap::with_default(seats),
            rng,
        }
    }

    /// The classic 3×3 two-seat setup with X moving first.
    #[must_use]
    pub fn classic(rng: GameRng) -> Self {
        Self::new(3, &[Marker('X'), Marker('O')], rng)
    }

    /// Read access to the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The marker a seat writes.
    #[must_use]
    pub fn marker_of(&self, player: PlayerId) -> Marker {
        self.markers[player]
    }

    fn field_lines(&self) -> Vec<String> {
        let n = self.board.n();
        let mut out = Vec::with_capacity(2 * n - 1);
        for row in 0..n {
            let cells: Vec<String> = (0..n)
                .map(|col| {
                    let tile = Tile::from_row_col(row, col, n);
                    match self.board.marker_at(tile) {
                        Some(marker) => format!(" {marker} "),
                        None => "   ".to_string(),
                    }
                })
                .collect();
            out.push(cells.join("|"));
            if row + 1 < n {
                out.push(vec!["---"; n].join("+"));
            }
        }
        out
    }
}

impl Ruler for GridRuler {
    type Choice = Tile;

    fn name(&self) -> &'static str {
        "GridRuler"
    }

    fn render(&self, presenter: &mut dyn Presenter) -> Result<(), EngineError> {
        for line in self.field_lines() {
            presenter.show(&line);
        }
        Ok(())
    }

    fn is_exhausted(&self, _scope: Option<PlayerId>) -> Result<bool, EngineError> {
        Ok(self.board.is_full())
    }

    fn caused_win(&self, player: PlayerId) -> Result<bool, EngineError> {
        let Some(tile) = self.last_tile[player] else {
            return Ok(false);
        };
        Ok(self.board.tile_completed_win(tile, self.markers[player]))
    }

    fn apply_choice(&mut self, player: PlayerId, tile: Tile) -> Result<(), EngineError> {
        self.board.mark(tile, self.markers[player])?;
        self.last_tile[player] = Some(tile);
        debug!(%player, %tile, marker = %self.markers[player], "marked tile");
        Ok(())
    }

    fn available_choices(&self) -> Result<Vec<Tile>, EngineError> {
        Ok(self.board.unmarked())
    }

    fn suggest(&mut self, player: PlayerId) -> Result<Tile, EngineError> {
        self.board
            .suggest(self.markers[player], &mut self.rng)
            .ok_or(EngineError::BoardFull)
    }
}
