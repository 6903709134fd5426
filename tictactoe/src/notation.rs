use std::{fmt::Display, str::FromStr};

use crate::{Board, Cell, ParseError, N};

/// Rows from top to bottom separated by `/`, e.g. `XX./OO./...`.
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.data.iter().enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the notation written by `Display`. `_` and `-` are accepted for
/// empty squares and whitespace is ignored. Positions are not checked for
/// reachability.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != N {
            return Err(ParseError::RowCount {
                expected: N,
                found: rows.len(),
            });
        }

        let mut board = Board::default();
        for (row, text) in rows.into_iter().enumerate() {
            let cells = text
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| Cell::from_symbol(c).ok_or(ParseError::Symbol(c)))
                .collect::<Result<Vec<_>, _>>()?;
            board.data[row] = cells
                .try_into()
                .map_err(|cells: Vec<Cell>| ParseError::ColumnCount {
                    row,
                    expected: N,
                    found: cells.len(),
                })?;
        }
        Ok(board)
    }
}
