use thiserror::Error;

/// A move that cannot be applied to a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum PlayError {
    #[error("({row}, {column}) is not on the board")]
    OutOfBounds { row: usize, column: usize },
    #[error("cannot play at ({row}, {column}) because it is already occupied")]
    AlreadyOccupied { row: usize, column: usize },
}

/// Text that does not describe a board, move or player.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} rows but found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell symbol {0:?}")]
    Symbol(char),
    #[error("could not read a move from {0:?}, expected \"row,column\"")]
    Move(String),
    #[error("unknown player {0:?}, expected \"x\" or \"o\"")]
    Player(String),
}

pub type PlayResult<T> = Result<T, PlayError>;
