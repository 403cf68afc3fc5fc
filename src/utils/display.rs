//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::search::Solution;
use anyhow::{Context, Result};
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// One-line count of surviving solutions
    pub fn format_summary(solutions: &[Solution]) -> String {
        match solutions.len() {
            0 => "No solutions found".to_string(),
            1 => "Found 1 solution".to_string(),
            n => format!("Found {} solutions", n),
        }
    }

    /// Header and board for one solution, numbered from 1
    pub fn format_solution(number: usize, solution: &Solution) -> String {
        format!("Solution {}:\n{}", number, solution.render())
    }

    /// Every solution, separated by blank lines, in the given order
    pub fn format_solutions(solutions: &[Solution]) -> String {
        solutions
            .iter()
            .enumerate()
            .map(|(i, solution)| Self::format_solution(i + 1, solution))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Save solutions to files based on output format
    pub fn save_solutions<P: AsRef<Path>>(
        solutions: &[Solution],
        output_dir: P,
        format: OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                for (i, solution) in solutions.iter().enumerate() {
                    let filepath = output_dir.join(format!("solution_{:03}.txt", i + 1));
                    std::fs::write(&filepath, solution.render())
                        .with_context(|| format!("Failed to write {}", filepath.display()))?;
                }
            }
            OutputFormat::Json => {
                for (i, solution) in solutions.iter().enumerate() {
                    let filepath = output_dir.join(format!("solution_{:03}.json", i + 1));
                    solution
                        .save_to_file(&filepath)
                        .with_context(|| format!("Failed to write {}", filepath.display()))?;
                }

                let summary_path = output_dir.join("solutions_summary.json");
                let summaries: Vec<_> = solutions
                    .iter()
                    .enumerate()
                    .map(|(i, s)| s.summary(i + 1))
                    .collect();
                let summary_json = serde_json::to_string_pretty(&summaries)?;
                std::fs::write(&summary_path, summary_json)
                    .with_context(|| format!("Failed to write {}", summary_path.display()))?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::enumerate_solutions;
    use tempfile::tempdir;

    #[test]
    fn test_summary_line() {
        assert_eq!(SolutionFormatter::format_summary(&[]), "No solutions found");
        assert_eq!(
            SolutionFormatter::format_summary(&enumerate_solutions(1).unwrap()),
            "Found 1 solution"
        );
        assert_eq!(
            SolutionFormatter::format_summary(&enumerate_solutions(4).unwrap()),
            "Found 2 solutions"
        );
    }

    #[test]
    fn test_solutions_separated_by_blank_lines() {
        let text = SolutionFormatter::format_solutions(&enumerate_solutions(4).unwrap());
        assert_eq!(
            text,
            "Solution 1:\n. Q . .\n. . . Q\nQ . . .\n. . Q .\n\n\
             Solution 2:\n. . Q .\nQ . . .\n. . . Q\n. Q . .\n"
        );
    }

    #[test]
    fn test_save_text() {
        let dir = tempdir().unwrap();
        let solutions = enumerate_solutions(4).unwrap();
        SolutionFormatter::save_solutions(&solutions, dir.path(), OutputFormat::Text).unwrap();

        let first = std::fs::read_to_string(dir.path().join("solution_001.txt")).unwrap();
        assert_eq!(first, solutions[0].render());
        assert!(dir.path().join("solution_002.txt").exists());
        assert!(!dir.path().join("solution_003.txt").exists());
    }

    #[test]
    fn test_save_json() {
        let dir = tempdir().unwrap();
        let solutions = enumerate_solutions(4).unwrap();
        SolutionFormatter::save_solutions(&solutions, dir.path(), OutputFormat::Json).unwrap();

        let loaded = Solution::load_from_file(dir.path().join("solution_002.json")).unwrap();
        assert_eq!(loaded, solutions[1]);
        assert!(dir.path().join("solutions_summary.json").exists());
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}
