use anyhow::{Context, Result};
use brt_sim::simulation::{run_occupancy, OccupancyTrajectory};
use std::fs;
use tracing::info;

use crate::args::OccupancyArgs;
use crate::defaults;

pub fn run_occupancy_model(args: &OccupancyArgs) -> Result<()> {
    println!("🧫 brt - Module Occupancy Model");
    println!("============================================\n");

    let config = args.resolve_config();
    println!("  • Beta: {} [--beta]", config.beta);
    println!("  • Mu: {:.2e} [--mu]", config.mu);
    println!("  • Phi: {:.2e} [--phi]", config.phi);
    println!("  • Lineages: {} [--lineages]", config.lineages);
    println!(
        "  • Time Grid: 0..{} in {} points [--t-max, --steps]",
        config.t_max, config.steps
    );
    println!("  • Random Seed: {} [--seed]\n", config.seed);

    let trajectory = run_occupancy(&config).context("Invalid occupancy parameters")?;

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let path = args.output.join(defaults::OCCUPANCY_FILE);
    fs::write(&path, occupancy_table(&trajectory))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), points = trajectory.len(), "Wrote occupancy trajectory");

    if let Some(last) = trajectory.mean_occupancy.last() {
        println!("✓ Final mean occupancy: {last:.4}");
    }
    println!("✓ Trajectory written to: {}", path.display());

    Ok(())
}

fn occupancy_table(trajectory: &OccupancyTrajectory) -> String {
    let mut content = String::from("# Time\tOccupancy\n");
    for (time, occupancy) in trajectory.points() {
        content.push_str(&format!("{time:.18e}\t{occupancy:.18e}\n"));
    }
    content
}
