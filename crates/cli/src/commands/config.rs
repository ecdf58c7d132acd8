use anyhow::{Context, Result};
use brt_sim::SimulationConfig;

pub fn print_default_config() -> Result<()> {
    let json = SimulationConfig::default()
        .to_json()
        .context("Failed to serialize default configuration")?;
    println!("{json}");
    Ok(())
}
