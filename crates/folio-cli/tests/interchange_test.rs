use folio_testing::{TestWorld, fixtures};
use predicates::prelude::*;

#[test]
fn test_export_writes_a_timestamped_file() {
    let world = TestWorld::new();
    let out_dir = world.work_dir().join("exports");

    world
        .command()
        .args(["export", "--output-dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported portfolio to"));

    let entries: Vec<_> = std::fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].as_ref().unwrap().file_name();
    let name = name.to_string_lossy();
    assert!(name.starts_with("portfolio_") && name.ends_with(".json"));
}

#[test]
fn test_export_then_check_round_trips() {
    let world = TestWorld::new();
    let record = fixtures::sample_portfolio();
    let seed = fixtures::write_portfolio(world.work_dir(), "seed.json", &record).unwrap();
    let out_dir = world.work_dir().join("exports");

    world
        .command()
        .arg("export")
        .arg(&seed)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success();

    let exported = std::fs::read_dir(&out_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();

    // The re-exported file parses back to the same record.
    let original: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&seed).unwrap()).unwrap();
    let round_tripped: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&exported).unwrap()).unwrap();
    assert_eq!(original, round_tripped);

    world
        .command()
        .arg("check")
        .arg(&exported)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Jordan Reyes")
                .and(predicate::str::contains("3 skills"))
                .and(predicate::str::contains("2 experience"))
                .and(predicate::str::contains("1 projects"))
                .and(predicate::str::contains("minimal layout")),
        );
}

#[test]
fn test_configured_export_dir_is_used() {
    let world = TestWorld::new();
    let export_dir = world.work_dir().join("from-config");

    std::fs::write(
        world.data_dir().join("config.toml"),
        format!("[export]\ndir = \"{}\"\n", export_dir.display()),
    )
    .unwrap();

    world.command().arg("export").assert().success();

    assert_eq!(std::fs::read_dir(&export_dir).unwrap().count(), 1);
}

#[test]
fn test_check_rejects_malformed_files() {
    let world = TestWorld::new();
    let broken = fixtures::write_malformed(world.work_dir(), "broken.json").unwrap();

    world
        .command()
        .arg("check")
        .arg(&broken)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to import portfolio. Please check the file format.",
        ));
}

#[test]
fn test_check_reports_missing_files() {
    let world = TestWorld::new();

    world
        .command()
        .arg("check")
        .arg(world.work_dir().join("absent.json"))
        .assert()
        .failure();
}
