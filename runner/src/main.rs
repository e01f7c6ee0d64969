mod config;
mod pilot;

use clap::Parser;
use snake_core::{log, logger, SnakeSimulation};

use config::load_or_default;
use pilot::Pilot;

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    /// YAML config file; defaults are used when absent.
    #[arg(long)]
    config: Option<String>,

    /// RNG seed; a random seed is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides the configured frame budget.
    #[arg(long)]
    frames: Option<u64>,

    /// Overrides the configured per-frame delta, in seconds.
    #[arg(long)]
    frame_dt: Option<f32>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = load_or_default(args.config.as_deref())?;
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if let Some(frame_dt) = args.frame_dt {
        config.frame_dt = frame_dt;
    }
    if config.frame_dt <= 0.0 {
        return Err("Frame delta must be positive".into());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut sim = SnakeSimulation::create(&config.simulation, seed)?;

    log!(
        "Starting on a {0}x{0} grid, seed {1}, {2} frame(s) at dt {3:.4}",
        config.simulation.grid_size,
        seed,
        config.frames,
        config.frame_dt
    );

    let mut games: u64 = 1;
    let mut best_score = 0.0f32;

    for _ in 0..config.frames {
        if sim.is_game_over() {
            best_score = best_score.max(sim.score());
            sim.reset();
            games += 1;
            continue;
        }
        sim.set_direction(Pilot::choose_direction(&sim));
        sim.step(config.frame_dt);
    }
    best_score = best_score.max(sim.score());

    log!(
        "Finished: {} game(s), best score {:.1}, last snake length {}",
        games,
        best_score,
        sim.length()
    );

    Ok(())
}
