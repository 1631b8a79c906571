use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use minesweep_core::{Game, SampleBoard};

mod load;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board file to play (must end in .swp), a sample board is played when omitted
    board: Option<PathBuf>,

    /// Sample board to play when no file is given
    #[arg(short, long, default_value_t = 1)]
    example: u32,

    /// Print the final board as JSON once the session ends
    #[arg(long)]
    json: bool,
}

fn banner() -> String {
    format!("Minesweeper 2030 (version: {})", env!("CARGO_PKG_VERSION"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
    log::debug!("args: {:?}", args);

    println!("{}", banner());

    let board = match &args.board {
        Some(path) => load::load_from_path(path)?,
        None => {
            println!("no file passed in, playing sample board...");
            SampleBoard::find(args.example)
                .with_context(|| format!("no sample board numbered {}", args.example))?
                .board()
        }
    };

    let mut game = Game::new(board);
    let end = session::play(
        &mut game,
        io::stdin().lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    log::debug!("Session ended: {:?}", end);

    if args.json {
        println!("{}", serde_json::to_string_pretty(game.board())?);
    }

    Ok(())
}
