use blockfill::{sim::run_headless, GameEngine, RandomShapes};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Upper bound on ticks when none is given; games end long before this.
const DEFAULT_MAX_TICKS: u32 = 10_000;

fn main() -> anyhow::Result<()> {
    blockfill::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [max_ticks]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let max_ticks: u32 = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_MAX_TICKS,
    };

    let mut engine = GameEngine::new(RandomShapes::new(SmallRng::seed_from_u64(seed)));
    let report = run_headless(&mut engine, max_ticks)?;

    let result = json!({
        "seed": seed,
        "score": report.score,
        "placements": report.placements,
        "ticks": report.ticks,
        "reason": report.reason,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
