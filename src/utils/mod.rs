//! Output helpers

pub mod display;

pub use display::{Color, ColorOutput, SolutionFormatter};
