use arrayvec::ArrayVec;

use crate::{Board, Cell, Move, PlayError, PlayResult, CELLS};

/// Legal moves of a position. Never more than one per square.
pub type Actions = ArrayVec<Move, CELLS>;

impl Board {
    /// All empty squares, in row-major order.
    pub fn actions(&self) -> Actions {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(square, _)| square)
            .collect()
    }

    /// The board after the player to move marks `square`.
    ///
    /// `self` is left untouched.
    pub fn result(&self, square: Move) -> PlayResult<Board> {
        let Move { row, column } = square;
        match self.get(square) {
            None => Err(PlayError::OutOfBounds { row, column }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.set(square, self.player().into());
                Ok(next)
            }
            Some(_) => Err(PlayError::AlreadyOccupied { row, column }),
        }
    }
}

/// Count the move sequences of length `depth` starting at `board`.
/// Finished games count as a single leaf.
pub fn perf_count(board: Board, depth: usize) -> usize {
    if depth == 0 || board.terminal() {
        1
    } else if depth == 1 {
        board.actions().len()
    } else {
        board
            .actions()
            .into_iter()
            .filter_map(|square| board.result(square).ok())
            .map(|next| perf_count(next, depth - 1))
            .sum()
    }
}
