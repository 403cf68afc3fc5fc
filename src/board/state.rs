//! Board state and constant-time attack tracking

use super::{BoardError, Coordinate};
use std::fmt;

/// Largest board accepted anywhere in the crate
pub const MAX_BOARD_SIZE: usize = 1024;

/// Check that `size` describes a board that can be built and drawn
pub fn check_board_size(size: usize) -> Result<(), BoardError> {
    if size < 1 {
        return Err(BoardError::InvalidSize { size });
    }
    if size > MAX_BOARD_SIZE {
        return Err(BoardError::TooLarge {
            size,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

/// An NxN board holding the queens placed so far.
///
/// Rows, columns and both diagonal families are tracked as occupancy flags,
/// so asking whether a square is attacked never looks at the queens themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    occupied_rows: Vec<bool>,
    occupied_cols: Vec<bool>,
    occupied_main_diag: Vec<bool>,
    occupied_anti_diag: Vec<bool>,
    placed_queens: Vec<Coordinate>,
}

impl Board {
    /// Create an empty board
    pub fn new(size: usize) -> Result<Self, BoardError> {
        check_board_size(size)?;

        let diagonals = 2 * size - 1;
        Ok(Self {
            size,
            occupied_rows: vec![false; size],
            occupied_cols: vec![false; size],
            occupied_main_diag: vec![false; diagonals],
            occupied_anti_diag: vec![false; diagonals],
            placed_queens: Vec::with_capacity(size),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a queen at `coord` would be unattacked by every queen on the board
    #[inline]
    pub fn is_valid(&self, coord: Coordinate) -> bool {
        coord.in_bounds(self.size)
            && !(self.occupied_rows[coord.y]
                | self.occupied_cols[coord.x]
                | self.occupied_main_diag[coord.main_diagonal()]
                | self.occupied_anti_diag[coord.anti_diagonal(self.size)])
    }

    /// Place a queen. The caller must have checked [`Board::is_valid`] first.
    #[inline]
    pub fn place(&mut self, coord: Coordinate) {
        debug_assert!(self.is_valid(coord), "queen placed on attacked square {coord}");
        self.mark(coord, true);
        self.placed_queens.push(coord);
    }

    /// Remove the most recently placed queen, or `None` on an empty board
    pub fn clear_last(&mut self) -> Option<Coordinate> {
        let coord = self.placed_queens.pop()?;
        self.mark(coord, false);
        Some(coord)
    }

    fn mark(&mut self, coord: Coordinate, occupied: bool) {
        self.occupied_rows[coord.y] = occupied;
        self.occupied_cols[coord.x] = occupied;
        self.occupied_main_diag[coord.main_diagonal()] = occupied;
        self.occupied_anti_diag[coord.anti_diagonal(self.size)] = occupied;
    }

    pub fn queen_count(&self) -> usize {
        self.placed_queens.len()
    }

    /// True once every row holds a queen
    pub fn is_full(&self) -> bool {
        self.placed_queens.len() == self.size
    }

    /// Queens in placement order
    pub fn queens(&self) -> &[Coordinate] {
        &self.placed_queens
    }

    pub fn render(&self) -> String {
        render_queens(self.size, &self.placed_queens)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Draw a `size`x`size` grid with `Q` on each queen and `.` elsewhere.
///
/// Cells in a row are separated by single spaces and every row ends with a newline.
pub fn render_queens(size: usize, queens: &[Coordinate]) -> String {
    if size == 0 {
        return String::new();
    }

    let mut grid = vec![false; size * size];
    for queen in queens.iter().filter(|q| q.in_bounds(size)) {
        grid[queen.y * size + queen.x] = true;
    }

    let mut output = String::with_capacity(size * size * 2);
    for row in grid.chunks(size) {
        for (col, &occupied) in row.iter().enumerate() {
            if col > 0 {
                output.push(' ');
            }
            output.push(if occupied { 'Q' } else { '.' });
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.queen_count(), 0);
        assert!(!board.is_full());
        assert!(board.is_valid(Coordinate::new(0, 0)));
        assert!(board.is_valid(Coordinate::new(3, 3)));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(Board::new(MAX_BOARD_SIZE).is_ok());
        assert_eq!(
            Board::new(MAX_BOARD_SIZE + 1),
            Err(BoardError::TooLarge {
                size: MAX_BOARD_SIZE + 1,
                max: MAX_BOARD_SIZE
            })
        );
    }

    #[test]
    fn test_render_zero_size_is_empty() {
        assert_eq!(render_queens(0, &[]), "");
    }

    #[test]
    fn test_place_marks_all_lines() {
        let mut board = Board::new(5).unwrap();
        board.place(Coordinate::new(2, 2));

        assert!(!board.is_valid(Coordinate::new(2, 0))); // column
        assert!(!board.is_valid(Coordinate::new(0, 2))); // row
        assert!(!board.is_valid(Coordinate::new(0, 0))); // x - y diagonal
        assert!(!board.is_valid(Coordinate::new(4, 0))); // x + y diagonal
        assert!(!board.is_valid(Coordinate::new(3, 1)));
        assert!(board.is_valid(Coordinate::new(3, 0)));
        assert!(board.is_valid(Coordinate::new(0, 1)));
    }

    #[test]
    fn test_out_of_bounds_is_never_valid() {
        let board = Board::new(3).unwrap();
        assert!(!board.is_valid(Coordinate::new(3, 0)));
        assert!(!board.is_valid(Coordinate::new(0, 3)));
    }

    #[test]
    fn test_clear_last_restores_state() {
        let mut board = Board::new(4).unwrap();
        let empty = board.clone();

        board.place(Coordinate::new(1, 0));
        board.place(Coordinate::new(3, 1));
        assert_eq!(board.queen_count(), 2);

        assert_eq!(board.clear_last(), Some(Coordinate::new(3, 1)));
        assert!(board.is_valid(Coordinate::new(3, 1)));
        assert_eq!(board.clear_last(), Some(Coordinate::new(1, 0)));
        assert_eq!(board, empty);
    }

    #[test]
    fn test_clear_last_on_empty_board() {
        let mut board = Board::new(2).unwrap();
        assert_eq!(board.clear_last(), None);
        assert_eq!(board.clear_last(), None);
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(4).unwrap();
        for (x, y) in [(1, 0), (3, 1), (0, 2), (2, 3)] {
            board.place(Coordinate::new(x, y));
        }
        assert!(board.is_full());
        assert_eq!(
            board.render(),
            ". Q . .\n. . . Q\nQ . . .\n. . Q .\n"
        );
        assert_eq!(board.to_string(), board.render());
    }

    #[test]
    fn test_render_empty_single_square() {
        let board = Board::new(1).unwrap();
        assert_eq!(board.render(), ".\n");
    }
}
