use std::ops::Index;

use crate::{Cell, Move, Player};

/// Width and height of the board.
pub const N: usize = 3;
/// Number of squares on the board.
pub const CELLS: usize = N * N;

/// A tic-tac-toe position.
///
/// Boards are plain values: applying a move with [`Board::result`] returns a
/// new board and leaves the original untouched. Whose turn it is comes from
/// the mark counts, so it is never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) data: [[Cell; N]; N],
}

impl Index<Move> for Board {
    type Output = Cell;

    fn index(&self, index: Move) -> &Self::Output {
        self.data.index(index.row).index(index.column)
    }
}

impl From<[[Cell; N]; N]> for Board {
    fn from(data: [[Cell; N]; N]) -> Self {
        Board { data }
    }
}

impl Board {
    /// The empty starting position.
    pub fn initial_state() -> Self {
        Self::default()
    }

    pub fn get(&self, index: Move) -> Option<Cell> {
        if index.on_board() {
            Some(self[index])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, index: Move, cell: Cell) {
        self.data[index.row][index.column] = cell;
    }

    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.data.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, &cell)| (Move::new(row, column), cell))
        })
    }

    /// Count the cells holding exactly `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.data.iter().flatten().filter(|&&c| c == cell).count()
    }

    pub fn full(&self) -> bool {
        !self.data.iter().flatten().any(|c| c.is_empty())
    }

    pub fn empty(&self) -> bool {
        self.data.iter().flatten().all(|c| c.is_empty())
    }

    /// The player whose turn it is.
    ///
    /// `X` moves whenever both sides have made the same number of marks.
    /// Boards where the counts differ by more than one are not reachable
    /// and are not rejected here.
    pub fn player(&self) -> Player {
        if self.count(Cell::X) == self.count(Cell::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Multi-line grid for showing the position to a person.
    pub fn pretty(&self) -> String {
        let mut out = String::from("    0   1   2\n");
        for (row, cells) in self.data.iter().enumerate() {
            if row > 0 {
                out.push_str("   ---+---+---\n");
            }
            out.push_str(&format!("{row} "));
            for (column, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => ' ',
                    other => other.symbol(),
                };
                out.push_str(&format!(" {symbol} "));
                if column + 1 < N {
                    out.push('|');
                }
            }
            out.push('\n');
        }
        out
    }
}
