mod board;
mod cell;
mod error;
mod game_result;
mod move_gen;
mod moves;
mod notation;
mod player;
mod wins;

pub use arrayvec;
pub use board::{Board, CELLS, N};
pub use cell::Cell;
pub use error::*;
pub use game_result::Outcome;
pub use move_gen::{perf_count, Actions};
pub use moves::Move;
pub use player::Player;
