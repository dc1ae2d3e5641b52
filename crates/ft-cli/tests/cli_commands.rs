#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate has no public API to document

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GROUP_HEADER: &str = "group_id,group_size,start_percent,stop_percent,center_north,\
                            center_east,center_down,spread_std,mean_travel_distance,\
                            travel_std,category";

/// One group of two objects active over the first half of the run.
fn single_group_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("groups.csv"),
        format!("{GROUP_HEADER}\n1,2,0,50,100.0,50.0,0.0,5.0,20.0,2.0,1\n"),
    )
    .unwrap();
    dir
}

/// Three partially overlapping groups across the full run.
fn three_group_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("groups.csv"),
        format!(
            "{GROUP_HEADER}\n\
             1,5,0,40,100.0,50.0,0.0,10.0,50.0,5.0,1\n\
             2,3,30,70,200.0,-30.0,-5.0,15.0,30.0,3.0,2\n\
             3,4,60,100,150.0,80.0,-2.0,8.0,40.0,4.0,3\n"
        ),
    )
    .unwrap();
    dir
}

fn roster_of(dir: &TempDir) -> String {
    dir.path().join("groups.csv").display().to_string()
}

fn ft() -> Command {
    Command::cargo_bin("ft").unwrap()
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_a_valid_roster() {
    let dir = three_group_dir();
    ft().args(["validate", &roster_of(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("validation checks passed"))
        .stdout(predicate::str::contains("Total objects:    12"));
}

#[test]
fn validate_minutes_prints_absolute_schedule() {
    let dir = single_group_dir();
    ft().args(["validate", &roster_of(&dir), "--minutes", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0 - 60.0 min"));
}

#[test]
fn validate_rejects_six_groups() {
    let dir = TempDir::new().unwrap();
    let mut csv = format!("{GROUP_HEADER}\n");
    for id in 1..=6 {
        csv.push_str(&format!("{id},2,0,50,0.0,0.0,0.0,5.0,20.0,2.0,1\n"));
    }
    let path = dir.path().join("groups.csv");
    fs::write(&path, csv).unwrap();

    ft().args(["validate", &path.display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 5 groups allowed, got 6"));
}

#[test]
fn validate_rejects_bad_category() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("groups.csv");
    fs::write(
        &path,
        format!("{GROUP_HEADER}\n1,2,0,50,0.0,0.0,0.0,5.0,20.0,2.0,9\n"),
    )
    .unwrap();

    ft().args(["validate", &path.display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category must be 1, 2, or 3"));
}

#[test]
fn validate_reports_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("groups.csv");
    fs::write(&path, "group_id,group_size\n1,2\n").unwrap();

    ft().args(["validate", &path.display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column"));
}

#[test]
fn validate_reports_missing_file() {
    ft().args(["validate", "no_such_file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_file.csv"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_writes_the_output_bundle() {
    let dir = single_group_dir();
    let out = dir.path().join("results");

    ft().args([
        "simulate",
        &roster_of(&dir),
        "--points",
        "10",
        "--out-dir",
        &out.display().to_string(),
        "--prefix",
        "test",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("1 groups, 2 objects"));

    assert!(out.join("test_input_groups.csv").is_file());
    assert!(out.join("test_objects.csv").is_file());
    assert!(out.join("test_trajectories.csv").is_file());
    assert!(out.join("test_summary.json").is_file());

    // Header plus one row per object.
    let objects = fs::read_to_string(out.join("test_objects.csv")).unwrap();
    assert_eq!(objects.lines().count(), 3);

    // Both window boundaries are sampled for every object.
    let trajectories = fs::read_to_string(out.join("test_trajectories.csv")).unwrap();
    let zero_samples = trajectories
        .lines()
        .filter(|l| l.starts_with("1,1,1,0.0,"))
        .count();
    assert_eq!(zero_samples, 1);
    assert!(trajectories.lines().any(|l| l.starts_with("1,1,1,50.0,")));
    assert!(trajectories.lines().any(|l| l.starts_with("2,1,1,50.0,")));
}

#[test]
fn simulate_same_seed_is_reproducible() {
    let dir = single_group_dir();
    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");
    let out_c = dir.path().join("c");

    for (out, seed) in [(&out_a, "42"), (&out_b, "42"), (&out_c, "7")] {
        ft().args([
            "simulate",
            &roster_of(&dir),
            "--seed",
            seed,
            "--out-dir",
            &out.display().to_string(),
            "--prefix",
            "run",
        ])
        .assert()
        .success();
    }

    let a = fs::read_to_string(out_a.join("run_objects.csv")).unwrap();
    let b = fs::read_to_string(out_b.join("run_objects.csv")).unwrap();
    let c = fs::read_to_string(out_c.join("run_objects.csv")).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn simulate_rejects_invalid_batch_without_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("groups.csv");
    fs::write(
        &path,
        format!("{GROUP_HEADER}\n1,0,0,50,0.0,0.0,0.0,5.0,20.0,2.0,1\n"),
    )
    .unwrap();
    let out = dir.path().join("results");

    ft().args([
        "simulate",
        &path.display().to_string(),
        "--out-dir",
        &out.display().to_string(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("group_size must be positive"));

    assert!(!out.exists());
}

// ---------------------------------------------------------------------------
// timeline
// ---------------------------------------------------------------------------

#[test]
fn timeline_prints_matrix_overlaps_and_stats() {
    let dir = three_group_dir();
    ft().args(["timeline", &roster_of(&dir), "--points", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group 1"))
        .stdout(predicate::str::contains("Group 1 <-> Group 2"))
        .stdout(predicate::str::contains("Group 2 <-> Group 3"))
        .stdout(predicate::str::contains("max simultaneous: 2"));
}

#[test]
fn timeline_without_overlaps_says_so() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("groups.csv");
    fs::write(
        &path,
        format!(
            "{GROUP_HEADER}\n\
             1,2,0,40,0.0,0.0,0.0,5.0,20.0,2.0,1\n\
             2,2,50,100,0.0,0.0,0.0,5.0,20.0,2.0,1\n"
        ),
    )
    .unwrap();

    ft().args(["timeline", &path.display().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No overlapping groups."));
}

// ---------------------------------------------------------------------------
// convert (and the full pipeline)
// ---------------------------------------------------------------------------

#[test]
fn simulate_then_convert_end_to_end() {
    let dir = single_group_dir();
    let results = dir.path().join("results");

    ft().args([
        "simulate",
        &roster_of(&dir),
        "--points",
        "10",
        "--out-dir",
        &results.display().to_string(),
        "--prefix",
        "run",
    ])
    .assert()
    .success();

    let trajectories = results.join("run_trajectories.csv");
    let out = dir.path().join("trajectories");
    ft().args([
        "convert",
        &trajectories.display().to_string(),
        "--out-dir",
        &out.display().to_string(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Converted 2 entities"));

    // One file per object, exact header, FIELDS stays empty.
    for key in [1, 2] {
        let file = out.join("G").join(format!("G_{key}_.txt"));
        let content = fs::read_to_string(&file).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("FIELDS\tFRAME\tTIME\tPOS_N\tPOS_E\tPOS_D"));
        assert!(lines.clone().count() >= 2);
        for line in lines {
            assert!(line.starts_with('\t'));
        }
    }
    assert_eq!(fs::read_dir(out.join("G")).unwrap().count(), 2);

    let consolidated = fs::read_to_string(out.join("all_G_WORLD_ENTITIES.txt")).unwrap();
    assert_eq!(consolidated.matches("WORLD_ENTITY {").count(), 2);
    assert!(consolidated.contains("name = G_1"));
    assert!(consolidated.contains("name = G_2"));
    assert!(consolidated.contains("scale ="));
}

#[test]
fn convert_numbers_keys_across_multiple_tables() {
    let dir = TempDir::new().unwrap();
    write_trajectory_fixture(&dir.path().join("a.csv"), 1);
    write_trajectory_fixture(&dir.path().join("b.csv"), 2);
    let out = dir.path().join("out");

    ft().args([
        "convert",
        &dir.path().join("a.csv").display().to_string(),
        &dir.path().join("b.csv").display().to_string(),
        "--out-dir",
        &out.display().to_string(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Converted 2 entities from 2 tables"));

    assert!(out.join("G").join("G_1_.txt").is_file());
    assert!(out.join("G").join("G_2_.txt").is_file());
}

#[test]
fn convert_reports_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "object_id,group_id,category,north,east,down\n1,1,1,0,0,0\n").unwrap();

    ft().args(["convert", &path.display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("time_percent"));
}

fn write_trajectory_fixture(path: &Path, group_id: u32) {
    fs::write(
        path,
        format!(
            "object_id,group_id,category,time_percent,north,east,down\n\
             1,{group_id},1,0.0,100.0,50.0,0.0\n\
             1,{group_id},1,50.0,110.0,55.0,0.0\n"
        ),
    )
    .unwrap();
}
