//! Independent verification of solutions
//!
//! Re-derives every constraint from the queen list alone, without the board's
//! occupancy flags or the collinearity filter.

use super::Solution;
use crate::board::Coordinate;
use std::fmt;

/// Checks solutions against the full set of placement rules
#[derive(Debug, Clone)]
pub struct SolutionValidator {
    /// Also reject solutions with three queens on one line
    check_collinear: bool,
}

/// The line two attacking queens share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackLine {
    Row,
    Column,
    Diagonal,
}

/// A single broken rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    QueenCount { expected: usize, actual: usize },
    OutOfBounds { queen: Coordinate },
    Attacking { first: Coordinate, second: Coordinate, line: AttackLine },
    Collinear { points: [Coordinate; 3] },
}

/// Result of solution validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

impl SolutionValidator {
    pub fn new(check_collinear: bool) -> Self {
        Self { check_collinear }
    }

    pub fn validate(&self, solution: &Solution) -> ValidationResult {
        let size = solution.size();
        let queens = solution.queens();
        let mut violations = Vec::new();

        if queens.len() != size {
            violations.push(Violation::QueenCount {
                expected: size,
                actual: queens.len(),
            });
        }

        for &queen in queens {
            if queen.x >= size || queen.y >= size {
                violations.push(Violation::OutOfBounds { queen });
            }
        }

        for (i, &first) in queens.iter().enumerate() {
            for &second in &queens[i + 1..] {
                if let Some(line) = attack_line(first, second) {
                    violations.push(Violation::Attacking { first, second, line });
                }
            }
        }

        if self.check_collinear {
            violations.extend(collinear_violations(queens));
        }

        ValidationResult {
            is_valid: violations.is_empty(),
            violations,
        }
    }

    /// Validate every solution, returning the index and result of each failure
    pub fn validate_all(&self, solutions: &[Solution]) -> Vec<(usize, ValidationResult)> {
        solutions
            .iter()
            .enumerate()
            .map(|(i, solution)| (i, self.validate(solution)))
            .filter(|(_, result)| !result.is_valid)
            .collect()
    }
}

impl Default for SolutionValidator {
    fn default() -> Self {
        Self::new(true)
    }
}

fn attack_line(a: Coordinate, b: Coordinate) -> Option<AttackLine> {
    if a.y == b.y {
        Some(AttackLine::Row)
    } else if a.x == b.x {
        Some(AttackLine::Column)
    } else if a.x.abs_diff(b.x) == a.y.abs_diff(b.y) {
        Some(AttackLine::Diagonal)
    } else {
        None
    }
}

fn collinear_violations(queens: &[Coordinate]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let n = queens.len();

    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let (a, b, c) = (queens[i], queens[j], queens[k]);
                // Zero cross product of (b - a) and (c - a)
                let cross = (b.x as i64 - a.x as i64) * (c.y as i64 - a.y as i64)
                    - (b.y as i64 - a.y as i64) * (c.x as i64 - a.x as i64);
                if cross == 0 {
                    violations.push(Violation::Collinear { points: [a, b, c] });
                }
            }
        }
    }

    violations
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::QueenCount { expected, actual } => {
                write!(f, "expected {} queens, found {}", expected, actual)
            }
            Violation::OutOfBounds { queen } => write!(f, "queen {} is off the board", queen),
            Violation::Attacking { first, second, line } => {
                write!(f, "queens {} and {} share a {:?}", first, second, line)
            }
            Violation::Collinear { points: [a, b, c] } => {
                write!(f, "queens {}, {} and {} are collinear", a, b, c)
            }
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Result: {}", if self.is_valid { "VALID" } else { "INVALID" })?;
        if !self.violations.is_empty() {
            writeln!(f, "Violations: {}", self.violations.len())?;
            for violation in self.violations.iter().take(10) {
                writeln!(f, "  - {}", violation)?;
            }
            if self.violations.len() > 10 {
                writeln!(f, "  ... and {} more", self.violations.len() - 10)?;
            }
        }
        Ok(())
    }
}
