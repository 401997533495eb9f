//! schelling — runs the segregation model end to end.
//!
//! ```text
//! schelling [CONFIG_JSON] [OUTPUT_DIR]
//! ```
//!
//! With no arguments the reference run is used (20×20 torus, 200 agents,
//! preference 3, 10 iterations, seed 42).  Progress is logged through
//! `tracing`; set `RUST_LOG=debug` to also see the grid after each iteration.
//! When `OUTPUT_DIR` is given, per-iteration summaries and grid snapshots are
//! written there as CSV.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use seg_core::{SimConfig, SimRng};
use seg_output::{CsvWriter, ProgressObserver, SimOutputObserver, Tee, render_ascii};
use seg_sim::{SimObserver, WorldBuilder};

/// Offsets for the two RNG streams derived from the master seed.
const PLACEMENT_STREAM: u64 = 1;
const ITERATION_STREAM: u64 = 2;

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let config = match path {
        Some(p) => SimConfig::from_json_path(p)
            .with_context(|| format!("loading config from {}", p.display()))?,
        None => SimConfig::default(),
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run<O: SimObserver>(config: SimConfig, observer: &mut O) -> Result<seg_sim::World> {
    let mut root = SimRng::new(config.seed);
    let mut placement_rng = root.child(PLACEMENT_STREAM);
    let mut iteration_rng = root.child(ITERATION_STREAM);

    let mut world = WorldBuilder::new(config).build(&mut placement_rng)?;
    info!(
        happy = world.happy_count(),
        total = world.agents().count,
        "initial placement done"
    );
    world.run(&mut iteration_rng, observer)?;
    Ok(world)
}

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args_os().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map(PathBuf::from);

    let config = load_config(config_path.as_deref())?;
    info!(
        width = config.width,
        height = config.height,
        agents = config.agent_count,
        same_preference = config.same_preference,
        iterations = config.iterations,
        seed = config.seed,
        "starting segregation model"
    );

    let t0 = Instant::now();
    let world = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let writer = CsvWriter::new(&dir)?;
            let mut obs = Tee(ProgressObserver::new().with_grid(), SimOutputObserver::new(writer, 1));
            let world = run(config, &mut obs)?;
            if let Some(e) = obs.1.take_error() {
                warn!(error = %e, "output error");
            }
            info!(dir = %dir.display(), "CSV output written");
            world
        }
        None => run(config, &mut ProgressObserver::new().with_grid())?,
    };

    info!(elapsed_secs = t0.elapsed().as_secs_f64(), "done");
    println!("{}", render_ascii(world.view()));
    Ok(())
}
