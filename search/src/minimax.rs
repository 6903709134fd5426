use log::debug;
use tictactoe::{Board, Move, Player};

/// Utility of a position under perfect play, `-1..=1`.
pub type Value = i8;

const WIN: Value = 1;
const LOSS: Value = -1;

/// What the search found for a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Utility reached with perfect play from both sides.
    pub value: Value,
    /// `None` only when the position is already finished.
    pub best_move: Option<Move>,
    /// Positions visited, the root included.
    pub nodes: u64,
}

/// Every board reachable in one move, paired with the move played.
fn children(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    board.actions().into_iter().filter_map(move |square| {
        let next = board.result(square);
        // `actions` only yields empty squares on the board.
        debug_assert!(next.is_ok(), "generated illegal move {square} on {board}");
        next.ok().map(|next| (square, next))
    })
}

#[derive(Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn max_value(&mut self, board: &Board) -> (Value, Option<Move>) {
        self.nodes += 1;
        if board.terminal() {
            return (board.utility(), None);
        }

        let mut best = (Value::MIN, None);
        for (square, next) in children(board) {
            let (value, _) = self.min_value(&next);
            if value > best.0 {
                best = (value, Some(square));
                // Nothing beats a forced win.
                if value == WIN {
                    break;
                }
            }
        }
        best
    }

    fn min_value(&mut self, board: &Board) -> (Value, Option<Move>) {
        self.nodes += 1;
        if board.terminal() {
            return (board.utility(), None);
        }

        let mut best = (Value::MAX, None);
        for (square, next) in children(board) {
            let (value, _) = self.max_value(&next);
            if value < best.0 {
                best = (value, Some(square));
                if value == LOSS {
                    break;
                }
            }
        }
        best
    }
}

/// Search the whole game tree below `board`.
///
/// Moves are tried in row-major order and ties keep the first move found.
pub fn solve(board: &Board) -> Solution {
    let mut search = Minimax::default();
    let (value, best_move) = match board.player() {
        Player::X => search.max_value(board),
        Player::O => search.min_value(board),
    };
    let solution = Solution {
        value,
        best_move,
        nodes: search.nodes,
    };
    debug!(
        "solved {board}: {} to move, best move {:?}, value {value}, {} nodes",
        board.player(),
        best_move,
        solution.nodes
    );
    solution
}

/// The optimal move for the player to move, or `None` if the game is over.
pub fn minimax(board: &Board) -> Option<Move> {
    if board.terminal() {
        return None;
    }
    solve(board).best_move
}

/// Best value and move for `X` to move on `board`.
pub fn max_value(board: &Board) -> (Value, Option<Move>) {
    Minimax::default().max_value(board)
}

/// Best value and move for `O` to move on `board`.
pub fn min_value(board: &Board) -> (Value, Option<Move>) {
    Minimax::default().min_value(board)
}

#[cfg(test)]
mod tests {
    use tictactoe::{Board, Move};

    use super::{children, max_value, min_value, minimax, solve};

    fn tree_size(board: &Board) -> u64 {
        if board.terminal() {
            return 1;
        }
        1 + board
            .actions()
            .into_iter()
            .map(|square| tree_size(&board.result(square).unwrap()))
            .sum::<u64>()
    }

    #[test]
    fn terminal_board_has_no_move() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(minimax(&board), None);
        let solution = solve(&board);
        assert_eq!(solution.value, 1);
        assert_eq!(solution.best_move, None);
        assert_eq!(solution.nodes, 1);
    }

    #[test]
    fn evaluators_return_utility_on_leaves() {
        let draw: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(max_value(&draw), (0, None));
        assert_eq!(min_value(&draw), (0, None));
    }

    #[test]
    fn completes_own_row() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(minimax(&board), Some(Move::new(0, 2)));
        assert_eq!(solve(&board).value, 1);
    }

    #[test]
    fn o_completes_own_row() {
        let board: Board = "XX./OO./X..".parse().unwrap();
        assert_eq!(minimax(&board), Some(Move::new(1, 2)));
        assert_eq!(solve(&board).value, -1);
    }

    #[test]
    fn win_short_circuit_skips_siblings() {
        // (0, 2) wins on the first legal move tried, so no sibling is expanded.
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(solve(&board).nodes, 2);
    }

    #[test]
    fn ties_keep_first_move() {
        // Every move draws from here, so the first empty square is kept.
        let board: Board = "XOX/O.X/..O".parse().unwrap();
        let solution = solve(&board);
        assert_eq!(solution.value, 0);
        assert_eq!(solution.best_move, Some(Move::new(1, 1)));
    }

    #[test]
    fn children_follow_actions() {
        for notation in [".../.../...", "XOX/O.X/..O", "X.O/.X./O..", "XOX/XOO/OXX"] {
            let board: Board = notation.parse().unwrap();
            let squares: Vec<Move> = children(&board).map(|(square, _)| square).collect();
            assert_eq!(squares, board.actions().to_vec());
            for (square, next) in children(&board) {
                assert_eq!(next, board.result(square).unwrap());
            }
        }
    }

    #[test]
    fn expands_every_reply_without_a_forced_result() {
        // Every continuation draws, so no reply is cut off.
        let board: Board = "XOX/O.X/..O".parse().unwrap();
        assert_eq!(solve(&board).nodes, tree_size(&board));
        assert_eq!(tree_size(&board), 16);
    }
}
