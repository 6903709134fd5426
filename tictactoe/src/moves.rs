use std::{fmt::Display, str::FromStr};

use crate::{ParseError, N};

/// Coordinates of a square, both in `0..3` for a legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub const fn new(row: usize, column: usize) -> Self {
        Move { row, column }
    }

    /// Get whether both coordinates are on the board.
    pub fn on_board(self) -> bool {
        self.row < N && self.column < N
    }

    pub fn is_corner(self) -> bool {
        self.row != 1 && self.column != 1
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, column): (usize, usize)) -> Self {
        Move { row, column }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Accepts `"r,c"`, `"r c"` or `"rc"`.
    /// Out of range coordinates parse fine and are rejected when played.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .filter(|c| !(c.is_whitespace() || *c == ','))
            .map(|c| c.to_digit(10).map(|d| d as usize))
            .collect::<Option<Vec<_>>>();
        match digits.as_deref() {
            Some(&[row, column]) => Ok(Move { row, column }),
            _ => Err(ParseError::Move(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Move;

    #[test]
    fn parse_formats() {
        assert_eq!("0,2".parse(), Ok(Move::new(0, 2)));
        assert_eq!("1 2".parse(), Ok(Move::new(1, 2)));
        assert_eq!("21\n".parse(), Ok(Move::new(2, 1)));
        assert_eq!(" 2 , 0 ".parse(), Ok(Move::new(2, 0)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Move>().is_err());
        assert!("1".parse::<Move>().is_err());
        assert!("1,2,0".parse::<Move>().is_err());
        assert!("a1".parse::<Move>().is_err());
    }

    #[test]
    fn out_of_range_still_parses() {
        let m: Move = "3,0".parse().unwrap();
        assert!(!m.on_board());
    }

    #[test]
    fn display_round_trips() {
        let m = Move::new(1, 0);
        assert_eq!(m.to_string().parse(), Ok(m));
    }
}
