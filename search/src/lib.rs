// Full-depth minimax over the tic-tac-toe game tree.
// X maximizes the utility of the final position, O minimizes it.

mod minimax;

pub use minimax::{max_value, min_value, minimax, solve, Solution, Value};
