//! Iterative backtracking search over a single working board

use super::Solution;
use crate::board::{Board, BoardError, Coordinate};
use std::time::{Duration, Instant};

/// Timeout is only checked every this many steps
const CLOCK_CHECK_INTERVAL: u64 = 1024;

/// Optional bounds on a search. The default is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_solutions: Option<usize>,
    pub max_steps: Option<u64>,
    pub timeout: Option<Duration>,
}

/// Why the search loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every placement was explored
    Exhausted,
    SolutionLimit,
    StepLimit,
    Timeout,
}

impl Termination {
    pub fn is_complete(self) -> bool {
        self == Termination::Exhausted
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    pub steps: u64,
    pub placements: u64,
    pub backtracks: u64,
    pub elapsed: Duration,
}

/// Everything a finished search produced
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub solutions: Vec<Solution>,
    pub statistics: SearchStatistics,
    pub termination: Termination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Filling,
    Backtracking,
}

/// Next square the filling mode will try
#[derive(Debug, Clone, Copy)]
struct Cursor {
    row: usize,
    col: usize,
}

/// Enumerates every placement of N mutually non-attacking queens, one per row.
///
/// The engine owns one [`Board`] and alternates between filling rows top to
/// bottom and backtracking the last placed queen to its next free column.
/// The loop ends when backtracking finds the board already empty.
pub struct SearchEngine {
    board: Board,
    limits: SearchLimits,
}

impl SearchEngine {
    pub fn new(size: usize, limits: SearchLimits) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            limits,
        })
    }

    /// Run the search to completion or until a limit is hit
    pub fn run(mut self) -> SearchOutcome {
        let start_time = Instant::now();
        let mut solutions = Vec::new();
        let mut statistics = SearchStatistics::default();
        let mut mode = Mode::Filling;
        let mut cursor = Cursor { row: 0, col: 0 };

        log::debug!("Starting search on {0}x{0} board", self.board.size());

        let termination = loop {
            if let Some(reason) = self.limit_reached(&statistics, start_time) {
                break reason;
            }
            statistics.steps += 1;

            match mode {
                Mode::Filling => {
                    match find_next_valid_column(&self.board, cursor.row, cursor.col) {
                        Some(col) => {
                            mode = self.place_and_advance(
                                Coordinate::new(col, cursor.row),
                                &mut cursor,
                                &mut solutions,
                                &mut statistics,
                            );
                        }
                        None => mode = Mode::Backtracking,
                    }
                }
                Mode::Backtracking => {
                    let Some(last) = self.board.clear_last() else {
                        break Termination::Exhausted;
                    };
                    statistics.backtracks += 1;

                    if let Some(col) = find_next_valid_column(&self.board, last.y, last.x + 1) {
                        mode = self.place_and_advance(
                            Coordinate::new(col, last.y),
                            &mut cursor,
                            &mut solutions,
                            &mut statistics,
                        );
                    }
                }
            }

            if matches!(self.limits.max_solutions, Some(max) if solutions.len() >= max) {
                break Termination::SolutionLimit;
            }
        };

        statistics.elapsed = start_time.elapsed();
        log::debug!(
            "Search finished ({:?}): {} solutions, {} steps, {} placements, {} backtracks \
             in {:.3}s",
            termination,
            solutions.len(),
            statistics.steps,
            statistics.placements,
            statistics.backtracks,
            statistics.elapsed.as_secs_f64()
        );

        SearchOutcome {
            solutions,
            statistics,
            termination,
        }
    }

    /// Place a queen and decide which mode follows.
    ///
    /// A full board is snapshotted and sent back to backtracking; otherwise
    /// filling resumes at the start of the next row.
    fn place_and_advance(
        &mut self,
        coord: Coordinate,
        cursor: &mut Cursor,
        solutions: &mut Vec<Solution>,
        statistics: &mut SearchStatistics,
    ) -> Mode {
        self.board.place(coord);
        statistics.placements += 1;

        if self.board.is_full() {
            solutions.push(Solution::from_board(&self.board));
            log::trace!("Solution {} found", solutions.len());
            Mode::Backtracking
        } else {
            *cursor = Cursor {
                row: coord.y + 1,
                col: 0,
            };
            Mode::Filling
        }
    }

    fn limit_reached(
        &self,
        statistics: &SearchStatistics,
        start_time: Instant,
    ) -> Option<Termination> {
        if matches!(self.limits.max_steps, Some(max) if statistics.steps >= max) {
            return Some(Termination::StepLimit);
        }

        if let Some(timeout) = self.limits.timeout {
            if statistics.steps % CLOCK_CHECK_INTERVAL == 0 && start_time.elapsed() >= timeout {
                return Some(Termination::Timeout);
            }
        }

        None
    }
}

/// First column at or after `start_column` in `row` where a queen would be safe
pub fn find_next_valid_column(board: &Board, row: usize, start_column: usize) -> Option<usize> {
    (start_column..board.size()).find(|&col| board.is_valid(Coordinate::new(col, row)))
}

/// Enumerate every solution for an NxN board without limits
pub fn enumerate_solutions(size: usize) -> Result<Vec<Solution>, BoardError> {
    Ok(SearchEngine::new(size, SearchLimits::default())?.run().solutions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(solution: &Solution) -> Vec<usize> {
        solution.columns_by_row().into_iter().flatten().collect()
    }

    #[test]
    fn test_known_solution_counts() {
        let expected = [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
        for (size, count) in expected {
            let solutions = enumerate_solutions(size).unwrap();
            assert_eq!(solutions.len(), count, "board size {}", size);
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            SearchEngine::new(0, SearchLimits::default()),
            Err(BoardError::InvalidSize { size: 0 })
        ));
    }

    #[test]
    fn test_single_square() {
        let solutions = enumerate_solutions(1).unwrap();
        assert_eq!(solutions[0].queens(), &[Coordinate::new(0, 0)]);
    }

    #[test]
    fn test_discovery_order_four() {
        let solutions = enumerate_solutions(4).unwrap();
        assert_eq!(columns(&solutions[0]), vec![1, 3, 0, 2]);
        assert_eq!(columns(&solutions[1]), vec![2, 0, 3, 1]);
    }

    #[test]
    fn test_first_solution_eight() {
        let solutions = enumerate_solutions(8).unwrap();
        assert_eq!(columns(&solutions[0]), vec![0, 4, 7, 5, 2, 6, 1, 3]);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(enumerate_solutions(7).unwrap(), enumerate_solutions(7).unwrap());
    }

    #[test]
    fn test_solutions_are_bijections_without_attacks() {
        for size in 1..=8 {
            for solution in enumerate_solutions(size).unwrap() {
                assert_eq!(solution.queen_count(), size);

                let mut rows = vec![false; size];
                let mut cols = vec![false; size];
                for queen in solution.queens() {
                    assert!(!rows[queen.y] && !cols[queen.x]);
                    rows[queen.y] = true;
                    cols[queen.x] = true;
                }

                let queens = solution.queens();
                for (i, a) in queens.iter().enumerate() {
                    for b in &queens[i + 1..] {
                        assert_ne!(a.main_diagonal(), b.main_diagonal());
                        assert_ne!(a.anti_diagonal(size), b.anti_diagonal(size));
                    }
                }
            }
        }
    }

    #[test]
    fn test_queens_placed_in_row_order() {
        for solution in enumerate_solutions(6).unwrap() {
            let rows: Vec<_> = solution.queens().iter().map(|q| q.y).collect();
            assert_eq!(rows, (0..6).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_solution_limit() {
        let limits = SearchLimits {
            max_solutions: Some(3),
            ..Default::default()
        };
        let outcome = SearchEngine::new(8, limits).unwrap().run();
        assert_eq!(outcome.termination, Termination::SolutionLimit);
        assert_eq!(outcome.solutions.len(), 3);
        assert_eq!(outcome.solutions[..], enumerate_solutions(8).unwrap()[..3]);
    }

    #[test]
    fn test_step_limit() {
        let limits = SearchLimits {
            max_steps: Some(5),
            ..Default::default()
        };
        let outcome = SearchEngine::new(8, limits).unwrap().run();
        assert_eq!(outcome.termination, Termination::StepLimit);
        assert_eq!(outcome.statistics.steps, 5);
        assert!(outcome.solutions.is_empty());
    }

    #[test]
    fn test_zero_timeout_stops_immediately() {
        let limits = SearchLimits {
            timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        let outcome = SearchEngine::new(8, limits).unwrap().run();
        assert_eq!(outcome.termination, Termination::Timeout);
        assert_eq!(outcome.statistics.steps, 0);
    }

    #[test]
    fn test_timeout_fires_on_clock_check() {
        let limits = SearchLimits {
            timeout: Some(Duration::from_millis(1)),
            ..Default::default()
        };
        let outcome = SearchEngine::new(14, limits).unwrap().run();

        assert_eq!(outcome.termination, Termination::Timeout);
        assert!(outcome.statistics.steps > 0);
        assert_eq!(outcome.statistics.steps % CLOCK_CHECK_INTERVAL, 0);
        assert!(outcome.statistics.elapsed >= Duration::from_millis(1));
    }

    #[test]
    fn test_exhausted_with_no_solutions() {
        let outcome = SearchEngine::new(3, SearchLimits::default()).unwrap().run();
        assert!(outcome.termination.is_complete());
        assert!(outcome.solutions.is_empty());
        assert!(outcome.statistics.backtracks > 0);
    }

    #[test]
    fn test_find_next_valid_column() {
        let mut board = Board::new(4).unwrap();
        board.place(Coordinate::new(1, 0));

        assert_eq!(find_next_valid_column(&board, 1, 0), Some(3));
        assert_eq!(find_next_valid_column(&board, 2, 0), Some(0));
        assert_eq!(find_next_valid_column(&board, 2, 1), Some(2));
        assert_eq!(find_next_valid_column(&board, 1, 4), None);

        board.place(Coordinate::new(3, 1));
        assert_eq!(find_next_valid_column(&board, 2, 1), None);
    }
}
