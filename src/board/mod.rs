//! Board and constraint model

pub mod coord;
pub mod error;
pub mod state;

pub use coord::Coordinate;
pub use error::BoardError;
pub use state::{check_board_size, render_queens, Board, MAX_BOARD_SIZE};
