use crate::{Board, Move, Outcome, Player, N};

impl Board {
    /// The player owning a completed line, if any.
    ///
    /// Rows are checked first, then columns, then the main diagonal and
    /// finally the anti-diagonal. The first completed line decides.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        let rows = (0..N).map(|r| [(r, 0), (r, 1), (r, 2)]);
        let columns = (0..N).map(|c| [(0, c), (1, c), (2, c)]);
        let diagonals = [[(0, 0), (1, 1), (2, 2)], [(0, 2), (1, 1), (2, 0)]];
        rows.chain(columns)
            .chain(diagonals)
            .find_map(|line| self.line_owner(line))
    }

    fn line_owner(&self, line: [(usize, usize); N]) -> Option<Player> {
        let [first, rest @ ..] = line.map(|square| self[Move::from(square)]);
        if rest.iter().all(|&cell| cell == first) {
            first.mark()
        } else {
            None
        }
    }

    /// Whether the game is over, either by a completed line or a full board.
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.full()
    }

    /// The result of the game, or `None` while it is still going.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(player) => Some(Outcome::Winner(player)),
            None if self.full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// `1` if `X` won, `-1` if `O` won, `0` otherwise.
    ///
    /// Only meaningful on a [`terminal`](Board::terminal) board. Calling it on
    /// an ongoing game is a bug in the caller; debug builds panic, release
    /// builds report `0` since no line is complete.
    pub fn utility(&self) -> i8 {
        debug_assert!(self.terminal(), "utility of an unfinished game:\n{}", self.pretty());
        match self.winner() {
            Some(player) => Outcome::Winner(player).utility(),
            None => Outcome::Draw.utility(),
        }
    }
}
