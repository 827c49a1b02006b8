//! Square marker board: line enumeration, win detection, move suggestion.
//!
//! The board holds `n * n` cells, each empty or bearing one player's
//! marker. Win detection and the suggestion heuristic both walk the fixed
//! line enumeration {rows, columns, main diagonal, secondary diagonal},
//! 2n+2 lines in total, and take the first qualifying line.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::Tile;
use crate::core::{EngineError, GameRng};

/// The symbol a player writes into a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker(pub char);

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row, column, or diagonal. Inline up to 5 cells, so boards up to 5×5
/// enumerate lines without heap traffic.
pub type Line = SmallVec<[Tile; 5]>;

/// An n×n board of markable cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    n: usize,
    cells: Vec<Option<Marker>>,
}

impl Board {
    /// Create an empty n×n board.
    #[must_use]
    pub fn new(n: usize) -> Self {
        assert!(n >= 2, "A board needs at least 2 rows");
        Self {
            n,
            cells: vec![None; n * n],
        }
    }

    /// Rows/columns per side.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total number of tiles.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n * self.n
    }

    /// Marker at a tile, or `None` for an empty cell.
    ///
    /// Panics on an out-of-board tile; callers hold validated tiles.
    #[must_use]
    pub fn marker_at(&self, tile: Tile) -> Option<Marker> {
        assert!(tile.is_valid(self.n), "tile {tile} outside {0}x{0} board", self.n);
        self.cells[tile.flat_index()]
    }

    /// Write a marker into an empty cell.
    pub fn mark(&mut self, tile: Tile, marker: Marker) -> Result<(), EngineError> {
        if !tile.is_valid(self.n) {
            return Err(EngineError::TileOutOfBounds {
                tile: tile.0,
                n: self.n,
            });
        }
        let cell = &mut self.cells[tile.flat_index()];
        if cell.is_some() {
            return Err(EngineError::TileTaken { tile: tile.0 });
        }
        *cell = Some(marker);
        Ok(())
    }

    /// All unmarked tiles in ascending order.
    #[must_use]
    pub fn unmarked(&self) -> Vec<Tile> {
        (1..=self.size())
            .map(Tile)
            .filter(|&t| self.marker_at(t).is_none())
            .collect()
    }

    /// True once no unmarked tile remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All lines in the fixed enumeration order:
    /// rows, then columns, then main diagonal, then secondary diagonal.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        let n = self.n;
        let mut lines = Vec::with_capacity(2 * n + 2);

        for row in 0..n {
            lines.push((0..n).map(|col| Tile::from_row_col(row, col, n)).collect());
        }
        for col in 0..n {
            lines.push((0..n).map(|row| Tile::from_row_col(row, col, n)).collect());
        }
        lines.push((0..n).map(|i| Tile::from_row_col(i, i, n)).collect());
        lines.push((0..n).map(|i| Tile::from_row_col(i, n - 1 - i, n)).collect());

        lines
    }

    /// Lines passing through a tile.
    #[must_use]
    pub fn lines_through(&self, tile: Tile) -> Vec<Line> {
        self.lines()
            .into_iter()
            .filter(|line| line.contains(&tile))
            .collect()
    }

    /// Is every cell of `line` held by `marker`?
    #[must_use]
    pub fn line_won_by(&self, line: &Line, marker: Marker) -> bool {
        line.iter().all(|&t| self.marker_at(t) == Some(marker))
    }

    /// Does any line through `tile` belong entirely to `marker`?
    #[must_use]
    pub fn tile_completed_win(&self, tile: Tile, marker: Marker) -> bool {
        self.lines_through(tile)
            .iter()
            .any(|line| self.line_won_by(line, marker))
    }

    // === Suggestion heuristic ===

    /// Pick a move for `marker`, in strict priority order:
    /// winning move, then block, then positional default.
    ///
    /// `None` only when the board is full.
    #[must_use]
    pub fn suggest(&self, marker: Marker, rng: &mut GameRng) -> Option<Tile> {
        self.winning_move(marker)
            .or_else(|| self.defensive_move(marker))
            .or_else(|| self.positional_move(rng))
    }

    /// The empty cell of the first line one move short of a win for `marker`.
    #[must_use]
    pub fn winning_move(&self, marker: Marker) -> Option<Tile> {
        self.lines().into_iter().find_map(|line| {
            let empty = self.single_empty(&line)?;
            let ours = line
                .iter()
                .filter(|&&t| self.marker_at(t) == Some(marker))
                .count();
            (ours == line.len() - 1).then_some(empty)
        })
    }

    /// The empty cell of the first line one move short of a win for a
    /// marker that is not `marker`, blocking an imminent loss.
    #[must_use]
    pub fn defensive_move(&self, marker: Marker) -> Option<Tile> {
        self.lines().into_iter().find_map(|line| {
            let empty = self.single_empty(&line)?;
            let marked: SmallVec<[Marker; 5]> =
                line.iter().filter_map(|&t| self.marker_at(t)).collect();
            let uniform_theirs =
                marked.iter().all(|&m| m == marked[0]) && marked[0] != marker;
            uniform_theirs.then_some(empty)
        })
    }

    /// Center if empty, else a random empty corner, else any random empty
    /// tile. `None` only on a full board.
    #[must_use]
    pub fn positional_move(&self, rng: &mut GameRng) -> Option<Tile> {
        if let Some(center) = self.center() {
            if self.marker_at(center).is_none() {
                return Some(center);
            }
        }

        let open_corners: SmallVec<[Tile; 4]> = self
            .corners()
            .into_iter()
            .filter(|&t| self.marker_at(t).is_none())
            .collect();
        if let Some(&corner) = rng.choose(&open_corners) {
            return Some(corner);
        }

        rng.choose(&self.unmarked()).copied()
    }

    /// The center tile; exists only for odd n.
    #[must_use]
    pub fn center(&self) -> Option<Tile> {
        (self.n % 2 == 1).then(|| {
            let mid = self.n / 2;
            Tile::from_row_col(mid, mid, self.n)
        })
    }

    /// The four corner tiles: {1, n, size-n+1, size}.
    #[must_use]
    pub fn corners(&self) -> [Tile; 4] {
        [
            Tile(1),
            Tile(self.n),
            Tile(self.size() - self.n + 1),
            Tile(self.size()),
        ]
    }

    fn single_empty(&self, line: &Line) -> Option<Tile> {
        let mut empties = line.iter().filter(|&&t| self.marker_at(t).is_none());
        let first = *empties.next()?;
        empties.next().is_none().then_some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Marker = Marker('X');
    const O: Marker = Marker('O');

    fn board_with(n: usize, marks: &[(usize, Marker)]) -> Board {
        let mut board = Board::new(n);
        for &(tile, marker) in marks {
            board.mark(Tile(tile), marker).unwrap();
        }
        board
    }

    #[test]
    fn test_mark_and_read_back() {
        let mut board = Board::new(3);
        assert_eq!(board.marker_at(Tile(5)), None);

        board.mark(Tile(5), X).unwrap();
        assert_eq!(board.marker_at(Tile(5)), Some(X));
    }

    #[test]
    fn test_mark_rejects_taken_and_out_of_bounds() {
        let mut board = Board::new(3);
        board.mark(Tile(1), X).unwrap();

        assert!(matches!(
            board.mark(Tile(1), O),
            Err(EngineError::TileTaken { tile: 1 })
        ));
        assert!(matches!(
            board.mark(Tile(10), O),
            Err(EngineError::TileOutOfBounds { tile: 10, n: 3 })
        ));
    }

    #[test]
    fn test_line_count_is_2n_plus_2() {
        for n in 2..=5 {
            assert_eq!(Board::new(n).lines().len(), 2 * n + 2);
        }
    }

    #[test]
    fn test_lines_through_center_and_corner() {
        let board = Board::new(3);
        // Center sits on a row, a column, and both diagonals
        assert_eq!(board.lines_through(Tile(5)).len(), 4);
        // A corner sits on a row, a column, and one diagonal
        assert_eq!(board.lines_through(Tile(1)).len(), 3);
        // An edge cell sits on just a row and a column
        assert_eq!(board.lines_through(Tile(2)).len(), 2);
    }

    #[test]
    fn test_win_detection_each_line_kind() {
        // Row
        let board = board_with(3, &[(4, X), (5, X), (6, X)]);
        assert!(board.tile_completed_win(Tile(5), X));
        assert!(!board.tile_completed_win(Tile(5), O));

        // Column
        let board = board_with(3, &[(2, O), (5, O), (8, O)]);
        assert!(board.tile_completed_win(Tile(8), O));

        // Main diagonal
        let board = board_with(3, &[(1, X), (5, X), (9, X)]);
        assert!(board.tile_completed_win(Tile(9), X));

        // Secondary diagonal
        let board = board_with(3, &[(3, X), (5, X), (7, X)]);
        assert!(board.tile_completed_win(Tile(7), X));
    }

    #[test]
    fn test_no_win_on_empty_or_mixed_line() {
        let board = Board::new(3);
        assert!(!board.tile_completed_win(Tile(1), X));

        let board = board_with(3, &[(1, X), (2, O), (3, X)]);
        assert!(!board.tile_completed_win(Tile(2), O));
    }

    #[test]
    fn test_winning_move_found() {
        // X on 1 and 2; 3 completes the top row
        let board = board_with(3, &[(1, X), (2, X), (5, O)]);
        assert_eq!(board.winning_move(X), Some(Tile(3)));
    }

    #[test]
    fn test_winning_move_ignores_mixed_line() {
        // Top row has one empty cell but mixed markers
        let board = board_with(3, &[(1, X), (2, O)]);
        assert_eq!(board.winning_move(X), None);
    }

    #[test]
    fn test_defensive_move_blocks_opponent() {
        // O threatens the first column; X must block at 7
        let board = board_with(3, &[(1, O), (4, O), (5, X)]);
        assert_eq!(board.defensive_move(X), Some(Tile(7)));
        // From O's own perspective this is a winning move, not a block
        assert_eq!(board.defensive_move(O), None);
    }

    #[test]
    fn test_positional_prefers_center() {
        let board = board_with(3, &[(1, X)]);
        let mut rng = GameRng::new(0);
        assert_eq!(board.positional_move(&mut rng), Some(Tile(5)));
    }

    #[test]
    fn test_positional_falls_back_to_corner() {
        let board = board_with(3, &[(5, X)]);
        let mut rng = GameRng::new(0);
        let pick = board.positional_move(&mut rng).unwrap();
        assert!(board.corners().contains(&pick), "{pick} not a corner");
    }

    #[test]
    fn test_positional_falls_back_to_any_empty() {
        // Center and all corners taken; only edges remain
        let board = board_with(
            3,
            &[(5, X), (1, X), (3, O), (7, O), (9, X)],
        );
        let mut rng = GameRng::new(0);
        let pick = board.positional_move(&mut rng).unwrap();
        assert!([Tile(2), Tile(4), Tile(6), Tile(8)].contains(&pick));
    }

    #[test]
    fn test_suggest_priority_win_over_block() {
        // X can win at 3; O threatens at 7. Winning move comes first.
        let board = board_with(3, &[(1, X), (2, X), (4, O), (5, O)]);
        let mut rng = GameRng::new(0);
        assert_eq!(board.suggest(X, &mut rng), Some(Tile(3)));
        // O's view: completing its own line outranks blocking X
        assert_eq!(board.suggest(O, &mut rng), Some(Tile(6)));
    }

    #[test]
    fn test_suggest_none_only_when_full() {
        let mut board = Board::new(2);
        let mut rng = GameRng::new(1);
        for tile in [1, 2, 3] {
            board.mark(Tile(tile), X).unwrap();
        }
        assert!(board.suggest(O, &mut rng).is_some());
        board.mark(Tile(4), O).unwrap();
        assert!(board.is_full());
        assert_eq!(board.suggest(O, &mut rng), None);
    }

    #[test]
    fn test_corners_for_sizes() {
        assert_eq!(
            Board::new(3).corners(),
            [Tile(1), Tile(3), Tile(7), Tile(9)]
        );
        assert_eq!(
            Board::new(5).corners(),
            [Tile(1), Tile(5), Tile(21), Tile(25)]
        );
    }

    #[test]
    fn test_center_only_for_odd_n() {
        assert_eq!(Board::new(3).center(), Some(Tile(5)));
        assert_eq!(Board::new(5).center(), Some(Tile(13)));
        assert_eq!(Board::new(4).center(), None);
    }

    #[test]
    fn test_five_by_five_win_detection_each_line_kind() {
        // Row 2
        let mut board = Board::new(5);
        for t in 6..=10 {
            board.mark(Tile(t), X).unwrap();
        }
        assert!(board.tile_completed_win(Tile(8), X));

        // Column 3
        let mut board = Board::new(5);
        for t in [3, 8, 13, 18, 23] {
            board.mark(Tile(t), O).unwrap();
        }
        assert!(board.tile_completed_win(Tile(23), O));

        // Main diagonal
        let mut board = Board::new(5);
        for t in [1, 7, 13, 19, 25] {
            board.mark(Tile(t), X).unwrap();
        }
        assert!(board.tile_completed_win(Tile(13), X));

        // Secondary diagonal
        let mut board = Board::new(5);
        for t in [5, 9, 13, 17, 21] {
            board.mark(Tile(t), X).unwrap();
        }
        assert!(board.tile_completed_win(Tile(21), X));
    }
}
