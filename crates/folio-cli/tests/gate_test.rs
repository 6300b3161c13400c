use folio_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_login_writes_the_session_flag() {
    let world = TestWorld::new();
    assert!(!world.session_flag().exists());

    world
        .command()
        .args(["login", "--email", "demo@example.com", "--password", "Password123!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as demo@example.com"));

    assert_eq!(
        std::fs::read_to_string(world.session_flag()).unwrap(),
        "portfolio_builder_token"
    );
}

#[test]
fn test_login_rejects_bad_email_shape() {
    let world = TestWorld::new();

    world
        .command()
        .args(["login", "--email", "not-an-email", "--password", "Password123!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid email address"));

    assert!(!world.session_flag().exists());
}

#[test]
fn test_login_reports_every_missing_password_criterion() {
    let world = TestWorld::new();

    world
        .command()
        .args(["login", "--email", "a@b.c", "--password", "weak"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Password must contain:")
                .and(predicate::str::contains("at least 8 characters"))
                .and(predicate::str::contains("one uppercase letter"))
                .and(predicate::str::contains("one number"))
                .and(predicate::str::contains("one special character")),
        );
}

#[test]
fn test_any_shape_valid_credentials_succeed() {
    // There is no credential store; the gate is a format check.
    let world = TestWorld::new();

    world
        .command()
        .args(["login", "--email", "whoever@wherever.tld", "--password", "Tot4lly?fake"])
        .assert()
        .success();
}

#[test]
fn test_logout_clears_the_flag_and_is_idempotent() {
    let world = TestWorld::new();
    world.login();
    assert!(world.session_flag().exists());

    world.command().arg("logout").assert().success();
    assert!(!world.session_flag().exists());

    world.command().arg("logout").assert().success();
}

#[test]
fn test_status_reflects_gate_state() {
    let world = TestWorld::new();

    world
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("logged out"));

    world.login();

    world
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("logged in"));
}

#[test]
fn test_data_dirs_are_isolated() {
    let world_a = TestWorld::new();
    let world_b = TestWorld::new();

    world_a.login();

    assert!(world_a.session_flag().exists());
    assert!(!world_b.session_flag().exists());
}
