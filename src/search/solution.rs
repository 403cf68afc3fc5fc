//! Solution snapshots

use crate::board::{check_board_size, render_queens, Board, BoardError, Coordinate};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete placement of `size` queens, copied out of the working board.
///
/// Only the queen list is kept; occupancy can always be rebuilt from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSolution")]
pub struct Solution {
    size: usize,
    queens: Vec<Coordinate>,
}

/// Unchecked form read from disk
#[derive(Deserialize)]
struct RawSolution {
    size: usize,
    queens: Vec<Coordinate>,
}

impl TryFrom<RawSolution> for Solution {
    type Error = BoardError;

    fn try_from(raw: RawSolution) -> Result<Self, Self::Error> {
        check_board_size(raw.size)?;
        Ok(Self {
            size: raw.size,
            queens: raw.queens,
        })
    }
}

/// Compact description of a solution for summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub index: usize,
    pub size: usize,
    /// Column of the queen in each row, top to bottom
    pub columns: Vec<usize>,
}

impl Solution {
    pub fn new(size: usize, queens: Vec<Coordinate>) -> Self {
        Self { size, queens }
    }

    /// Copy the queens currently on `board`
    pub fn from_board(board: &Board) -> Self {
        Self {
            size: board.size(),
            queens: board.queens().to_vec(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Queens in the order they were placed
    pub fn queens(&self) -> &[Coordinate] {
        &self.queens
    }

    pub fn queen_count(&self) -> usize {
        self.queens.len()
    }

    /// Column holding the queen of each row, or `None` for an empty row
    pub fn columns_by_row(&self) -> Vec<Option<usize>> {
        let mut columns = vec![None; self.size];
        for queen in self.queens.iter().filter(|q| q.in_bounds(self.size)) {
            columns[queen.y] = Some(queen.x);
        }
        columns
    }

    pub fn render(&self) -> String {
        render_queens(self.size, &self.queens)
    }

    pub fn summary(&self, index: usize) -> SolutionSummary {
        SolutionSummary {
            index,
            size: self.size,
            columns: self.columns_by_row().into_iter().flatten().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read solution file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse solution file: {}", path.display()))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
