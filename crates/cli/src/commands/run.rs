use anyhow::{Context, Result};
use brt_analysis::{summarize, with_relative_index, ScenarioSummary};
use brt_sim::evolution::Scenario;
use brt_sim::{run_simulation, SimulationConfig, SimulationResult};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::args::RunArgs;
use crate::defaults;
use crate::plot::{diversity_figure, Series};
use crate::printing::{print_parameters, print_summary_table};

pub fn run_sweep(args: &RunArgs) -> Result<()> {
    println!("🧬 brt - Running Scenario Sweep");
    println!("============================================\n");

    let base = args.resolve_config()?;
    let scenarios = args.scenarios();
    let seeds = args.replicate_seeds()?;
    let reps = seeds.len();
    print_parameters(&base, &scenarios, &seeds);

    let jobs: Vec<SimulationConfig> = scenarios
        .iter()
        .flat_map(|&scenario| {
            let base = &base;
            seeds.iter().map(move |&seed| SimulationConfig {
                seed,
                scenario,
                ..base.clone()
            })
        })
        .collect();
    info!(runs = jobs.len(), "Starting sweep");

    let pb = if args.progress {
        let pb = ProgressBar::new(jobs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Order of results follows `jobs`: scenario-major, then replicate
    let results: Vec<SimulationResult> = jobs
        .par_iter()
        .map(|config| {
            let result = run_simulation(config);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            result
        })
        .collect::<Result<_, _>>()
        .context("Simulation failed")?;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let raw_dir = args.output.join(defaults::RAW_DIR);
    fs::create_dir_all(&raw_dir)
        .with_context(|| format!("Failed to create {}", raw_dir.display()))?;

    let mut summaries = Vec::with_capacity(scenarios.len());
    for (i, &scenario) in scenarios.iter().enumerate() {
        let runs = &results[i * reps..(i + 1) * reps];
        for (r, result) in runs.iter().enumerate() {
            let path = raw_dir.join(format!("{scenario}_rep{r}_diversity.csv"));
            write_file(&path, &diversity_csv(&result.diversity_ts))?;
        }
        summaries.push(summarize(scenario, runs));
    }
    with_relative_index(&mut summaries);

    let summary_path = args.output.join(defaults::SUMMARY_FILE);
    write_file(&summary_path, &summary_csv(&summaries))?;
    print_summary_table(&summaries);

    if !args.no_figure {
        let last_run = |target: Scenario| {
            scenarios
                .iter()
                .position(|&s| s == target)
                .filter(|_| reps > 0)
                .map(|i| results[(i + 1) * reps - 1].diversity_ts.as_slice())
        };
        match (last_run(Scenario::BrtFull), last_run(Scenario::Classical)) {
            (Some(brt), Some(classical)) => {
                let path = args.output.join(defaults::FIGURE_FILE);
                let series = [
                    Series {
                        label: Scenario::BrtFull.label(),
                        diversity: brt,
                    },
                    Series {
                        label: Scenario::Classical.label(),
                        diversity: classical,
                    },
                ];
                diversity_figure(&path, &series)
                    .with_context(|| format!("Failed to draw {}", path.display()))?;
                println!("\n✓ Figure saved to: {}", path.display());
            }
            _ => debug!("Figure needs both brt_full and classical runs, skipping"),
        }
    }

    println!("✓ Summary saved to: {}", summary_path.display());
    println!("✓ Raw diversity series saved to: {}", raw_dir.display());

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn diversity_csv(diversity_ts: &[usize]) -> String {
    let mut content = String::from("generation,diversity_alive_lineages\n");
    for (generation, diversity) in diversity_ts.iter().enumerate() {
        content.push_str(&format!("{generation},{diversity}\n"));
    }
    content
}

/// NaN is written as an empty field.
fn csv_number(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{value:?}")
    }
}

fn summary_csv(summaries: &[ScenarioSummary]) -> String {
    let mut content = String::from(
        "scenario,recovery_time_median_gens,CI95_low,CI95_high,innovation_total_median,novel_traits_index_relative\n",
    );
    for s in summaries {
        content.push_str(&format!(
            "{},{},{},{},{},{}\n",
            s.scenario,
            csv_number(s.recovery_time_median_gens),
            csv_number(s.ci95_low),
            csv_number(s.ci95_high),
            csv_number(s.innovation_total_median),
            csv_number(s.novel_traits_index_relative),
        ));
    }
    content
}
