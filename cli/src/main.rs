use std::io;

use clap::Parser;

use crate::{cli::Args, play::play};

mod cli;
mod play;

fn main() -> io::Result<()> {
    let args = Args::parse();
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, args.log_level)?,
        None => simple_logging::log_to_stderr(args.log_level),
    }

    let board = args.position.unwrap_or_default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(board, args.human, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
