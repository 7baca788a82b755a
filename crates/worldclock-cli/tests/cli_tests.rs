use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn wclock_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wclock").expect("Failed to find wclock binary");
    cmd.arg("--no-color");
    cmd
}

/// Helper function to run a command against the given database
fn run(temp_dir: &TempDir, args: &[&str]) -> assert_cmd::assert::Assert {
    let db_path = temp_dir.path().join("cli_test.db");
    wclock_cmd()
        .arg("--database-file")
        .arg(&db_path)
        .args(args)
        .assert()
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["list"])
        .success()
        .stdout(predicate::str::contains("# World Clock"))
        .stdout(predicate::str::contains("No cities in your world clock."));
}

#[test]
fn test_cli_default_command_is_list() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &[])
        .success()
        .stdout(predicate::str::contains("No cities in your world clock."));
}

#[test]
fn test_cli_add_city() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["add", "1"])
        .success()
        .stdout(predicate::str::contains("City Added"))
        .stdout(predicate::str::contains("Seoul added to world clock"));

    run(&temp_dir, &["list"])
        .success()
        .stdout(predicate::str::contains("0. **Seoul**"))
        .stdout(predicate::str::contains("Asia/Seoul"));
}

#[test]
fn test_cli_add_duplicate_city() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["add", "2"]).success();
    run(&temp_dir, &["add", "2"])
        .success()
        .stdout(predicate::str::contains("Already Added"))
        .stdout(predicate::str::contains("Tokyo is already in your world clock"));

    run(&temp_dir, &["list"])
        .success()
        .stdout(predicate::str::contains("0. **Tokyo**"))
        .stdout(predicate::str::contains("1. ").not());
}

#[test]
fn test_cli_add_unknown_city_fails() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["add", "99"])
        .failure()
        .stderr(predicate::str::contains("City with ID 99 not found"));
}

#[test]
fn test_cli_remove_city() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["add", "9"]).success();
    run(&temp_dir, &["remove", "9"])
        .success()
        .stdout(predicate::str::contains("City Removed"))
        .stdout(predicate::str::contains("London removed from world clock"));

    run(&temp_dir, &["list"])
        .success()
        .stdout(predicate::str::contains("No cities in your world clock."));
}

#[test]
fn test_cli_remove_unknown_city() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["remove", "9"])
        .success()
        .stdout(predicate::str::contains("City 9 is not in your world clock."));
}

#[test]
fn test_cli_move_city() {
    let temp_dir = create_cli_test_environment();

    for id in ["1", "2", "9"] {
        run(&temp_dir, &["add", id]).success();
    }

    run(&temp_dir, &["move", "0", "2"])
        .success()
        .stdout(predicate::str::contains("Moved city from position 0 to 2."))
        .stdout(predicate::str::contains("0. **Tokyo**"))
        .stdout(predicate::str::contains("1. **London**"))
        .stdout(predicate::str::contains("2. **Seoul**"));

    run(&temp_dir, &["list"])
        .success()
        .stdout(predicate::str::contains("2. **Seoul**"));
}

#[test]
fn test_cli_move_out_of_range() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["add", "1"]).success();
    run(&temp_dir, &["move", "0", "5"])
        .success()
        .stdout(predicate::str::contains("Nothing to move."));
    run(&temp_dir, &["move", "0", "0"])
        .success()
        .stdout(predicate::str::contains("Nothing to move."));
}

#[test]
fn test_cli_search_marks_added_cities() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["add", "2"]).success();
    run(&temp_dir, &["search", "TO"])
        .success()
        .stdout(predicate::str::contains("**Tokyo**, Japan (Asia/Tokyo) *(added)*"))
        .stdout(predicate::str::contains("**Toronto**, Canada (America/Toronto)\n"))
        .stdout(predicate::str::contains("Seoul").not());
}

#[test]
fn test_cli_search_without_query_lists_catalog() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["search"])
        .success()
        .stdout(predicate::str::contains("Seoul"))
        .stdout(predicate::str::contains("Moscow"));
}

#[test]
fn test_cli_search_no_match() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["search", "Atlantis"])
        .success()
        .stdout(predicate::str::contains("No matching cities."));
}

#[test]
fn test_cli_watch_stops_after_count() {
    let temp_dir = create_cli_test_environment();

    run(&temp_dir, &["add", "12"]).success();
    run(&temp_dir, &["watch", "--count", "1"])
        .success()
        .stdout(predicate::str::contains("# World Clock"))
        .stdout(predicate::str::contains("**Sydney**"));
}
