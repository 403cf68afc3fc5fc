//! N-Queens solver with collinearity filtering
//!
//! Enumerates every placement of N non-attacking queens on an NxN board with an
//! iterative backtracking search, then drops placements where any three queens
//! lie on one straight line.

pub mod board;
pub mod config;
pub mod filter;
pub mod search;
pub mod utils;

pub use board::{Board, BoardError, Coordinate};
pub use config::Settings;
pub use search::{QueensProblem, SolveReport, Solution};

use anyhow::Result;

/// Main entry point for solving a configured N-Queens problem
pub fn solve_queens(settings: Settings) -> Result<SolveReport> {
    QueensProblem::new(settings)?.solve()
}
