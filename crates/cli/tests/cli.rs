use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SUMMARY_HEADER: &str = "scenario,recovery_time_median_gens,CI95_low,CI95_high,innovation_total_median,novel_traits_index_relative";

fn brt() -> Command {
    Command::cargo_bin("brt").unwrap()
}

#[test]
fn test_run_writes_artifacts() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("results");

    brt()
        .arg("run")
        .arg("--output")
        .arg(&out)
        .args(["--generations", "40", "--reps", "2", "--n-lineages", "30"])
        .args(["--extinction-period", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary"));

    let summary = fs::read_to_string(out.join("summary_table.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], SUMMARY_HEADER);
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("classical,"));
    assert!(lines[4].starts_with("brt_full,"));

    for scenario in ["classical", "cryptic_only", "hgt_only", "brt_full"] {
        for rep in 0..2 {
            let path = out.join(format!("raw/{scenario}_rep{rep}_diversity.csv"));
            let csv = fs::read_to_string(&path).unwrap();
            assert!(csv.starts_with("generation,diversity_alive_lineages\n0,30\n"));
            assert_eq!(csv.lines().count(), 41);
        }
    }

    let figure = fs::read_to_string(out.join("figure2a_like.svg")).unwrap();
    assert!(figure.contains("<svg"));
}

#[test]
fn test_run_is_reproducible() {
    let temp = tempdir().unwrap();
    let run = |dir: &std::path::Path| {
        brt()
            .arg("run")
            .arg("--output")
            .arg(dir)
            .args(["--generations", "30", "--reps", "2", "--n-lineages", "25"])
            .args(["--extinction-period", "10", "--no-figure"])
            .args(["--scenario", "brt_full"])
            .assert()
            .success();
        fs::read_to_string(dir.join("summary_table.csv")).unwrap()
    };

    let a = run(&temp.path().join("a"));
    let b = run(&temp.path().join("b"));
    assert_eq!(a, b);
}

#[test]
fn test_scenario_subset_and_no_figure() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("subset");

    brt()
        .arg("run")
        .arg("--output")
        .arg(&out)
        .args(["--generations", "20", "--reps", "1", "--n-lineages", "20"])
        .args(["--scenario", "hgt_only", "--scenario", "classical"])
        .arg("--no-figure")
        .assert()
        .success();

    let summary = fs::read_to_string(out.join("summary_table.csv")).unwrap();
    let scenarios: Vec<&str> = summary
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(scenarios, vec!["classical", "hgt_only"]);
    assert!(!out.join("figure2a_like.svg").exists());
    assert!(out.join("raw/hgt_only_rep0_diversity.csv").exists());
    assert!(!out.join("raw/brt_full_rep0_diversity.csv").exists());
}

#[test]
fn test_run_with_config_file() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "n_lineages": 12, "generations": 15, "extinction_period": 5 }"#,
    )
    .unwrap();
    let out = temp.path().join("from_config");

    brt()
        .arg("run")
        .arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg(&out)
        .args(["--reps", "1", "--scenario", "classical", "--no-figure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lineages: 12"));

    let csv = fs::read_to_string(out.join("raw/classical_rep0_diversity.csv")).unwrap();
    assert_eq!(csv.lines().count(), 16);
}

#[test]
fn test_invalid_fraction_fails() {
    let temp = tempdir().unwrap();

    brt()
        .arg("run")
        .arg("--output")
        .arg(temp.path())
        .args(["--extinction-fraction", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid probability"));
}

#[test]
fn test_base_seed_overflow_fails() {
    let temp = tempdir().unwrap();

    brt()
        .arg("run")
        .arg("--output")
        .arg(temp.path())
        .args(["--base-seed", "18446744073709551615", "--reps", "2"])
        .args(["--generations", "5", "--n-lineages", "5", "--no-figure"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Seed range overflows"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_max_base_seed_single_replicate() {
    let temp = tempdir().unwrap();

    brt()
        .arg("run")
        .arg("--output")
        .arg(temp.path())
        .args(["--base-seed", "18446744073709551615", "--reps", "1"])
        .args(["--generations", "5", "--n-lineages", "5", "--no-figure"])
        .args(["--scenario", "classical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("18446744073709551615..=18446744073709551615"));
}

#[test]
fn test_unknown_scenario_fails() {
    brt()
        .args(["run", "--scenario", "lamarck"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown scenario"));
}

#[test]
fn test_config_prints_defaults() {
    brt()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"n_lineages\": 500"))
        .stdout(predicate::str::contains("\"scenario\": \"classical\""));
}

#[test]
fn test_occupancy_writes_trajectory() {
    let temp = tempdir().unwrap();

    brt()
        .arg("occupancy")
        .arg("--output")
        .arg(temp.path())
        .args(["--lineages", "100", "--steps", "20", "--t-max", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final mean occupancy"));

    let table = fs::read_to_string(temp.path().join("module_occupancy.txt")).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "# Time\tOccupancy");
    assert_eq!(lines.len(), 21);
}

#[test]
fn test_occupancy_rejects_negative_rate() {
    let temp = tempdir().unwrap();

    brt()
        .arg("occupancy")
        .arg("--output")
        .arg(temp.path())
        .args(["--mu=-0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rate for mu"));
}
