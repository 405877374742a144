//! Gomoku GTP binary
//!
//! Reads GTP commands from stdin and writes responses to stdout; diagnostics
//! go to stderr so they never corrupt the protocol stream.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::{Engine, GameState, GtpConnection, DEFAULT_SIZE};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Gomoku engine speaking the Go Text Protocol")]
struct Args {
    /// Initial board size (2..=25)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Log debug events to stderr (otherwise RUST_LOG applies)
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let game = GameState::new(args.size)?;
    let mut connection = GtpConnection::new(game, Engine::new(), io::stdout());
    connection.run(io::stdin().lock())?;
    Ok(())
}
