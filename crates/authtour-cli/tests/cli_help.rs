use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_flow_commands() {
    cargo_bin_cmd!("authtour")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("signup"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("whoami"));
}

#[test]
fn test_help_shows_about_line() {
    cargo_bin_cmd!("authtour")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Email authentication tutorial and live demo",
        ));
}

#[test]
fn test_signup_requires_email() {
    cargo_bin_cmd!("authtour")
        .args(["signup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("authtour")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set-url"));
}
