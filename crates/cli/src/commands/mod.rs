pub mod config;
pub mod occupancy;
pub mod run;
