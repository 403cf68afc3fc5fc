//! Backtracking search, solution snapshots and validation

pub mod engine;
pub mod problem;
pub mod solution;
pub mod validator;

pub use engine::{
    enumerate_solutions, find_next_valid_column, SearchEngine, SearchLimits, SearchOutcome,
    SearchStatistics, Termination,
};
pub use problem::{QueensProblem, SolveReport};
pub use solution::{Solution, SolutionSummary};
pub use validator::{SolutionValidator, ValidationResult, Violation};
