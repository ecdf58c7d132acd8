//! Shared default values for the driver.
//! The sweep defaults differ from the library defaults: a sweep runs several
//! replicates per scenario, so the population is smaller.

pub const OUTPUT_DIR: &str = "results";
pub const RAW_DIR: &str = "raw";
pub const SUMMARY_FILE: &str = "summary_table.csv";
pub const FIGURE_FILE: &str = "figure2a_like.svg";
pub const OCCUPANCY_FILE: &str = "module_occupancy.txt";

pub const GENERATIONS: usize = 800;
pub const REPS: usize = 3;
pub const N_LINEAGES: usize = 400;
pub const BASE_SEED: u64 = 100;

// Used when RUST_LOG is unset
pub const LOG_FILTER: &str = "brt_cli=info,brt_sim=warn";
