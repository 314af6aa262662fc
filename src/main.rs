use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use escape_room::engine::{CLEAR_SCREEN, Output};
use escape_room::world::{self, World};
use escape_room::GameState;
use tracing::warn;

/// Escape the room: type `[action] [object]` or `use [item] [object]`.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML world file to play instead of the built-in room
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Do not clear the terminal before each redraw
    #[arg(long)]
    no_clear: bool,

    /// Validate the world and exit
    #[arg(long)]
    check: bool,
}

fn flush_output(out: &Output, clear: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if clear {
        stdout.write_all(CLEAR_SCREEN.as_bytes())?;
    }
    writeln!(stdout, "{}", out)?;
    stdout.flush()
}

fn load_world(args: &Args) -> anyhow::Result<World> {
    match &args.world {
        Some(path) => world::load_world_from_file(path)
            .with_context(|| format!("Failed to load world file '{}'", path.display())),
        None => world::default_world().context("Failed to load the built-in world"),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let world = load_world(&args)?;

    let problems = world::validate_world(&world);

    if args.check {
        if problems.is_empty() {
            println!("World '{}' is valid.", world.id);
            return Ok(());
        }
        for p in &problems {
            eprintln!("error: {}", p);
        }
        anyhow::bail!("world '{}' has {} problem(s)", world.id, problems.len());
    }
    if !problems.is_empty() {
        for p in &problems {
            warn!(world = %world.id, "{}", p);
        }
        anyhow::bail!(
            "world '{}' failed validation (run with --check for details)",
            world.id
        );
    }

    let clear = !args.no_clear;
    let mut state = GameState::new(world)?;
    flush_output(&state.initialize(), clear)?;

    // One line in, one full redraw out, until stdin closes.
    let mut stdin = io::stdin().lock();
    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        if stdin.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // undecodable bytes become U+FFFD instead of ending the game
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("input line was not valid UTF-8");
        }

        let out = state.step(&line);
        flush_output(&out, clear)?;
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}
