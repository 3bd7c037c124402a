use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

use detective_quest::{
    BANNER, CLOSING, Room, build_mansion, load_map_from_file, release, run,
};

/// Walk the mansion room by room, choosing left or right until you leave or
/// reach a dead end.
#[derive(Parser, Debug)]
#[command(name = "detective_quest", version, about)]
struct Cli {
    /// TOML map file to explore instead of the built-in mansion
    map: Option<PathBuf>,

    /// Validate the map, print a summary and exit without exploring
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so the game transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("detective_quest=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let map: Room = match &cli.map {
        Some(path) => match load_map_from_file(path) {
            Ok(root) => root,
            Err(e) => {
                eprintln!("Failed to load map file '{}': {e}", path.display());
                std::process::exit(1);
            }
        },
        None => build_mansion(),
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if cli.check {
        writeln!(stdout, "{}", map.summary())?;
        return Ok(());
    }

    writeln!(stdout, "{}", BANNER)?;

    let stdin = io::stdin();
    let expedition = run(&map, stdin.lock(), &mut stdout).context("console I/O failed")?;
    info!(ending = ?expedition.ending, rooms = expedition.trail.len(), "exploration finished");

    let mut released = 0usize;
    release(map, &mut |name| {
        released += 1;
        trace!(room = name, "released");
    });
    info!(released, "map released");

    writeln!(stdout, "{}", CLOSING)?;
    Ok(())
}
