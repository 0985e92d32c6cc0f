#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use blockfill::{
    cli, init_logging, ui, GameEngine, RandomShapes, Session, SessionConfig,
    DEFAULT_PLACEMENT_DELAY_MS, DEFAULT_TICK_INTERVAL_MS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::sync::watch;
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Shapes drop onto the board by themselves; click the cells of completed
/// rows to clear them. Clicking any other block ends the game.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Milliseconds between automatic placements.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,
    /// Milliseconds between choosing a placement and committing it.
    #[arg(long, default_value_t = DEFAULT_PLACEMENT_DELAY_MS)]
    delay_ms: u64,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let config = SessionConfig {
        tick_interval: Duration::from_millis(cli.tick_ms.max(1)),
        placement_delay: Duration::from_millis(cli.delay_ms),
    };

    let engine = GameEngine::new(RandomShapes::new(rng));
    let (session, handle) = Session::new(engine, config);

    let renderer = tokio::spawn(render_loop(handle.updates()));
    let reader = handle.clone();
    std::thread::spawn(move || {
        if let Err(e) = cli::read_commands(reader) {
            log::warn!("input closed: {}", e);
        }
    });
    drop(handle);

    let final_snapshot = session.run().await?;
    renderer.abort();

    println!("{}", ui::render_status(&final_snapshot));
    println!("Final Score: {}", final_snapshot.score);
    Ok(())
}

#[cfg(feature = "std")]
async fn render_loop(mut updates: watch::Receiver<blockfill::GameSnapshot>) {
    loop {
        let snapshot = *updates.borrow_and_update();
        print!("\x1b[2J\x1b[H{}", ui::render(&snapshot));
        println!("Enter a cell (e.g. A5 or `5 1`), `reset` or `quit`:");
        if updates.changed().await.is_err() {
            break;
        }
    }
}
