use bbsim::{load_scenario, Scenario};
use bbsim::bench_update;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless driver for the bouncing-ball engine")]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, default_value = "three_balls.yaml")]
    file_name: String,

    /// Override the number of frames from the scenario
    #[arg(long)]
    frames: Option<usize>,

    /// Time engine updates for growing body counts instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// Log every frame
    #[arg(short, long)]
    verbose: bool,
}

// resolve here to keep main clean
fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.is_file() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    SimpleLogger::new().with_level(level).init()?;

    if args.bench {
        bench_update();
        return Ok(());
    }

    let path = scenario_path(&args.file_name);
    let cfg = load_scenario(&path).with_context(|| format!("loading {}", path.display()))?;
    let mut scenario = Scenario::build_scenario(cfg).context("building scenario")?;
    if let Some(frames) = args.frames {
        scenario.run.frames = frames;
    }

    let summary = scenario.run();

    info!(
        "done: {} frames, t = {:.3} s, mechanical energy {:.6} -> {:.6}, momentum ({:.6}, {:.6}) -> ({:.6}, {:.6})",
        summary.frames,
        summary.t,
        summary.initial_energy,
        summary.final_energy,
        summary.initial_momentum.x,
        summary.initial_momentum.y,
        summary.final_momentum.x,
        summary.final_momentum.y
    );

    Ok(())
}
