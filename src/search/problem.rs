//! N-Queens problem definition: search followed by filtering

use super::{SearchEngine, SearchStatistics, Solution, Termination};
use crate::config::Settings;
use crate::filter::strip_collinear_triplets;
use anyhow::{Context, Result};
use std::fmt;

/// Represents one configured N-Queens run
pub struct QueensProblem {
    settings: Settings,
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub size: usize,
    /// Solutions found by the search before filtering
    pub raw_solution_count: usize,
    /// Surviving solutions, in discovery order
    pub solutions: Vec<Solution>,
    pub removed_collinear: usize,
    pub statistics: SearchStatistics,
    pub termination: Termination,
}

impl QueensProblem {
    /// Create a new problem from settings
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("Invalid solver settings")?;
        Ok(Self { settings })
    }

    /// Run the search and the configured filters
    pub fn solve(&self) -> Result<SolveReport> {
        let size = self.settings.board.size;
        let engine = SearchEngine::new(size, self.settings.search_limits())
            .context("Failed to set up the board")?;

        log::info!("Searching for {0}-queens placements on a {0}x{0} board", size);
        let outcome = engine.run();
        let raw_solution_count = outcome.solutions.len();

        if !outcome.termination.is_complete() {
            log::warn!(
                "Search stopped early ({:?}) after {} steps; results are partial",
                outcome.termination,
                outcome.statistics.steps
            );
        }

        let solutions = if self.settings.filter.strip_collinear {
            strip_collinear_triplets(outcome.solutions)
        } else {
            outcome.solutions
        };
        let removed_collinear = raw_solution_count - solutions.len();

        log::info!(
            "Found {} placements, {} removed for collinear queens, {} remaining",
            raw_solution_count,
            removed_collinear,
            solutions.len()
        );

        Ok(SolveReport {
            size,
            raw_solution_count,
            solutions,
            removed_collinear,
            statistics: outcome.statistics,
            termination: outcome.termination,
        })
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Board: {0}x{0}", self.size)?;
        writeln!(f, "  Termination: {:?}", self.termination)?;
        writeln!(f, "  Steps: {}", self.statistics.steps)?;
        writeln!(f, "  Placements: {}", self.statistics.placements)?;
        writeln!(f, "  Backtracks: {}", self.statistics.backtracks)?;
        writeln!(f, "  Raw solutions: {}", self.raw_solution_count)?;
        writeln!(f, "  Removed (collinear): {}", self.removed_collinear)?;
        writeln!(f, "  Search time: {:.3}s", self.statistics.elapsed.as_secs_f64())?;
        Ok(())
    }
}
