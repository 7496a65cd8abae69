use gravsim::{bench_step, bench_substep};
use gravsim::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Override the frame count from the scenario file.
    #[arg(long)]
    frames: Option<u64>,

    /// Run the step benchmarks instead of a scenario.
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_substep();
        return Ok(());
    }

    let cfg = load_scenario_from_yaml(&args.file_name)?;
    let frames = args.frames.or(cfg.parameters.frames).unwrap_or(100);
    let scenario = Scenario::build_scenario(cfg)?;

    let time_scale = scenario.parameters.time_scale;
    let mut system = scenario.system;
    let mut total_pairs = 0usize;

    for frame in 0..frames {
        let (next, events) = scenario.stepper.update_physics(time_scale, &system);
        if !events.is_empty() {
            total_pairs += events.len();
            println!(
                "frame {frame}: {} collision pair(s), {} bodies remain",
                events.len(),
                next.bodies.len()
            );
        }
        system = next;
    }

    println!(
        "t = {:.3}, {} bodies, {} collision pair(s) total",
        system.t,
        system.bodies.len(),
        total_pairs
    );
    for (i, b) in system.bodies.iter().enumerate() {
        let x = b.position();
        println!(
            "  body {i}: m = {:.4e} kg, x = [{:.4e}, {:.4e}, {:.4e}], |v| = {:.4e} m/s",
            b.mass(),
            x.x,
            x.y,
            x.z,
            b.velocity().norm()
        );
    }

    Ok(())
}
