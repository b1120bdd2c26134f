use std::thread::sleep;
use std::time::Duration;

use anyhow::ensure;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use snake::game::GameState;
use snake::input::coalesce;
use snake::render;
use snake::term::Term;
use snake::GridInt;

const TICK_INTERVAL_MS: u64 = 150;
const MIN_GRID_SIZE: GridInt = 8;

#[derive(Parser)]
#[command(author, version, about = "Classic snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 20)]
    width: GridInt,

    /// Grid height in cells
    #[arg(long, default_value_t = 20)]
    height: GridInt,

    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g. --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    ensure!(
        cli.width >= MIN_GRID_SIZE && cli.height >= MIN_GRID_SIZE,
        "grid must be at least {0}x{0} cells",
        MIN_GRID_SIZE
    );

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    };

    let mut state = GameState::new(cli.width, cli.height, &mut rng);
    let mut term = Term::new();
    term.setup()?;

    // Restore the terminal before surfacing any I/O error from the loop.
    let res = run(&mut state, &mut term, &mut rng);
    term.restore()?;
    res?;

    println!("Final score: {}", state.score());
    Ok(())
}

fn run(state: &mut GameState, term: &mut Term, rng: &mut SmallRng) -> anyhow::Result<()> {
    while !state.is_over() {
        // At most one steer per tick: the queue collapses to the last
        // press, so key mashing cannot chain into a reversal.
        let input = coalesce(&term.pending_keys()?);

        // A quit key ends the game before the snake moves again.
        if input.quit {
            state.quit();
            break;
        }

        if let Some(dir) = input.steer {
            state.steer(dir);
        }

        state.tick(rng);
        term.draw_frame(&render::frame(state))?;
        sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }

    let mut frame = render::frame(state);
    frame.push_str("\r\nGame over! Press any key to exit...");
    term.draw_frame(&frame)?;
    term.wait_key()?;

    Ok(())
}
