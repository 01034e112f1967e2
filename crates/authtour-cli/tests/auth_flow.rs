//! Integration tests for the one-shot auth flow commands against a mock
//! backend.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temp AUTHTOUR_HOME directory for test isolation.
fn temp_home() -> TempDir {
    TempDir::new().expect("create temp authtour home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn demo_user() -> serde_json::Value {
    serde_json::json!({
        "id": "u1",
        "email": "a@b.com",
        "is_verified": true,
        "created_at": "2024-01-01",
    })
}

#[tokio::test]
async fn test_signup_shows_fixed_text_and_never_echoes_code() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "password": "secret123",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Account created successfully! Use verification code: 12345",
            "user_id": "user_1",
            "verification_code": "12345",
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", server.uri())
        .args(["signup", "--email", "a@b.com", "--password", "secret123"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Account created! Check your email for verification code.",
        ))
        .stdout(predicate::str::contains("12345").not());
}

#[tokio::test]
async fn test_signup_rejection_prints_detail() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "User with this email already exists",
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", server.uri())
        .args(["signup", "--email", "a@b.com", "--password", "secret123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User with this email already exists"));
}

#[tokio::test]
async fn test_verify_success_and_wrong_code() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/verify-email"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "verification_code": "12345",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Email verified successfully! You can now log in.",
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/verify-email"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "verification_code": "99999",
        })))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "Invalid verification code",
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", server.uri())
        .args(["verify", "--email", "a@b.com", "--code", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email verified successfully"));

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", server.uri())
        .args(["verify", "--email", "a@b.com", "--code", "99999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid verification code"));
}

#[tokio::test]
async fn test_login_stores_token_under_fixed_key() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-abc",
            "token_type": "bearer",
            "user": demo_user(),
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", server.uri())
        .args(["login", "--email", "a@b.com", "--password", "secret123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as a@b.com"));

    let session = fs::read_to_string(home.path().join("session.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&session).unwrap();
    assert_eq!(json["token"], "tok-abc");
}

#[tokio::test]
async fn test_login_rejection_prints_detail() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Invalid email or password",
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", server.uri())
        .args(["login", "--email", "a@b.com", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"));

    assert!(!home.path().join("session.json").exists());
}

#[test]
fn test_transport_failure_prints_network_error() {
    let home = temp_home();

    // Nothing listens on this port; the connection is refused immediately.
    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", "http://127.0.0.1:9")
        .args(["login", "--email", "a@b.com", "--password", "secret123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error occurred"));
}

#[tokio::test]
async fn test_whoami_sends_bearer_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    fs::write(
        home.path().join("session.json"),
        r#"{"token": "tok-abc"}"#,
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Welcome to your dashboard, a@b.com!",
            "user": demo_user(),
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", server.uri())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to your dashboard"))
        .stdout(predicate::str::contains("a@b.com"));
}

#[test]
fn test_whoami_without_session_fails() {
    let home = temp_home();

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_logout_removes_stored_token() {
    let home = temp_home();
    fs::write(
        home.path().join("session.json"),
        r#"{"token": "tok-abc"}"#,
    )
    .unwrap();

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out successfully"));

    assert!(!home.path().join("session.json").exists());

    // Logout twice: same end state, different message
    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No session token stored"));
}

#[tokio::test]
async fn test_users_renders_table() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": [demo_user()],
            "total": 1,
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", server.uri())
        .arg("users")
        .assert()
        .success()
        .stdout(predicate::str::contains("a@b.com"))
        .stdout(predicate::str::contains("1 user(s)"));
}

#[tokio::test]
async fn test_health_reports_status() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("authtour")
        .env("AUTHTOUR_HOME", home.path())
        .env("AUTHTOUR_API_BASE_URL", server.uri())
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}
