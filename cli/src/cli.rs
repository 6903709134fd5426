use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use tictactoe::{Board, Player};

/// Play tic-tac-toe against a perfect opponent
#[derive(Parser)]
pub struct Args {
    /// Side to play as, leave out to watch the engine play itself
    #[clap(long)]
    pub human: Option<Player>,
    /// Starting position, rows separated by '/' (e.g. "XX./OO./...")
    #[clap(short, long)]
    pub position: Option<Board>,
    /// Write logs to this file instead of stderr
    #[clap(short, long)]
    pub log_file: Option<PathBuf>,
    /// Most verbose log level to emit
    #[clap(short = 'v', long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}
