use tictactoe::*;

#[test]
fn perft_initial_state() {
    let board = Board::initial_state();
    assert_eq!(perf_count(board, 0), 1);
    assert_eq!(perf_count(board, 1), 9);
    assert_eq!(perf_count(board, 2), 72);
    assert_eq!(perf_count(board, 3), 504);
    assert_eq!(perf_count(board, 4), 3_024);
    assert_eq!(perf_count(board, 5), 15_120);
    // 1440 games are already won by X after five plies.
    assert_eq!(perf_count(board, 6), 56_160);
}

#[test]
fn all_games() {
    assert_eq!(perf_count(Board::initial_state(), 9), 255_168);
}

#[test]
fn perft_terminal_board() -> Result<(), ParseError> {
    let board: Board = "XXX/OO./...".parse()?;
    assert_eq!(perf_count(board, 3), 1);
    Ok(())
}

#[test]
fn perft_midgame() -> Result<(), ParseError> {
    let board: Board = "XOX/.O./O.X".parse()?;
    assert_eq!(board.actions().len(), 3);
    assert_eq!(perf_count(board, 1), 3);
    Ok(())
}
