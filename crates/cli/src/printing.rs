use brt_analysis::ScenarioSummary;
use brt_sim::evolution::Scenario;
use brt_sim::SimulationConfig;

pub fn print_parameters(config: &SimulationConfig, scenarios: &[Scenario], seeds: &[u64]) {
    println!("📋 Sweep Configuration");
    let names: Vec<&str> = scenarios.iter().map(|s| s.as_str()).collect();
    println!("  • Scenarios: {} [--scenario]", names.join(", "));
    println!("  • Replicates: {} [-r, --reps]", seeds.len());
    match (seeds.first(), seeds.last()) {
        (Some(first), Some(last)) => println!("  • Seeds: {first}..={last} [--base-seed]"),
        _ => println!("  • Seeds: none [--base-seed]"),
    }
    println!(
        "  • Generations: {} [-g, --generations]",
        config.generations
    );
    println!(
        "  • Lineages: {} [-n, --n-lineages]",
        config.n_lineages
    );

    println!("\n☄️  Extinction");
    println!(
        "  • Period: every {} generations [--extinction-period]",
        config.extinction_period
    );
    println!(
        "  • Fraction: {:.2} [--extinction-fraction]",
        config.extinction_fraction
    );
    println!(
        "  • Policy: {} [--extinction-policy]",
        config.extinction_policy
    );
    println!(
        "  • Recolonization Rate: {:.2} [--recolonization-rate]",
        config.recolonization_rate
    );

    println!("\n🔀 Trait Operators");
    println!("  • HGT Rate: {:.3} [--hgt-rate]", config.hgt_rate);
    println!(
        "  • Compatibility Tau: {:.2} [--compatibility-tau]",
        config.compatibility_tau
    );
    println!("  • Cryptic Size: {} [--cryptic-size]", config.cryptic_size);
    println!(
        "  • Trait Space: {} (gene pool space {})",
        config.trait_space, config.pool_size
    );
    println!();
}

fn cell(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.2}")
    }
}

pub fn print_summary_table(summaries: &[ScenarioSummary]) {
    println!("\n📊 Summary");
    println!("{}", "=".repeat(82));
    println!(
        "{:<14} {:>12} {:>10} {:>10} {:>16} {:>14}",
        "scenario", "recovery", "CI95_low", "CI95_high", "innovation", "relative"
    );
    for s in summaries {
        println!(
            "{:<14} {:>12} {:>10} {:>10} {:>16} {:>14}",
            s.scenario.as_str(),
            cell(s.recovery_time_median_gens),
            cell(s.ci95_low),
            cell(s.ci95_high),
            cell(s.innovation_total_median),
            cell(s.novel_traits_index_relative),
        );
    }
}
