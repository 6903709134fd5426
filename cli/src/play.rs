use std::io::{self, BufRead, Write};

use log::{info, warn};
use search::minimax;
use tictactoe::{Board, Move, Outcome, Player};

/// Run one game from `board` until it is over.
///
/// `human` picks the side read from `input`; every other turn is played by
/// the engine. Invalid moves are reported and asked for again.
pub fn play<R, W>(
    mut board: Board,
    human: Option<Player>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    info!("new game from {board}, human plays {human:?}");
    loop {
        writeln!(output, "{}", board.pretty())?;
        if let Some(outcome) = board.outcome() {
            match outcome {
                Outcome::Winner(player) => writeln!(output, "{player} wins")?,
                Outcome::Draw => writeln!(output, "Draw")?,
            }
            info!("game over at {board}: {outcome:?}");
            return Ok(outcome);
        }

        board = if human == Some(board.player()) {
            human_turn(&board, input, output)?
        } else {
            engine_turn(&board, output)?
        };
    }
}

fn engine_turn<W: Write>(board: &Board, output: &mut W) -> io::Result<Board> {
    let square = minimax(board).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no move to play on finished game {board}"),
        )
    })?;
    writeln!(output, "{} plays {square}", board.player())?;
    info!("engine played {square}");
    board
        .result(square)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn human_turn<R, W>(board: &Board, input: &mut R, output: &mut W) -> io::Result<Board>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{} to move (row,column): ", board.player())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game ended",
            ));
        }

        let next = line
            .parse::<Move>()
            .map_err(|e| e.to_string())
            .and_then(|square| board.result(square).map_err(|e| e.to_string()));
        match next {
            Ok(next) => {
                info!("human played {}", line.trim());
                return Ok(next);
            }
            Err(message) => {
                warn!("rejected human move {:?}: {message}", line.trim());
                writeln!(output, "{message}")?;
            }
        }
    }
}
