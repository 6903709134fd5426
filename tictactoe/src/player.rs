use std::{fmt::Display, str::FromStr};

use crate::ParseError;

/// One of the two sides. `X` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(ParseError::Player(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn next_alternates() {
        assert_eq!(Player::X.next(), Player::O);
        assert_eq!(Player::O.next(), Player::X);
        assert_eq!(Player::X.next().next(), Player::X);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("x".parse(), Ok(Player::X));
        assert_eq!(" O ".parse(), Ok(Player::O));
        assert!("z".parse::<Player>().is_err());
    }
}
