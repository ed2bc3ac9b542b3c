use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("auqmia"));
    cmd.env("HOME", home);
    cmd.env_remove("AUQMIA_ADDR");
    cmd
}

fn credentials(home: &Path) -> String {
    fs::read_to_string(home.join(".auqmia").join("credentials.json")).unwrap_or_default()
}

fn login_body() -> serde_json::Value {
    json!({
        "user": {
            "id": 1,
            "name": "Ana",
            "email": "a@b.com",
            "address": { "state": "SP", "city": "Campinas", "district": "Centro" }
        },
        "accessToken": "tok"
    })
}

#[test]
fn status_without_session() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/animals")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(json!([{ "id": 1, "name": "Rex" }, { "id": 2, "name": "Mia" }]).to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"logged_in\": false"))
        .stdout(predicate::str::contains("\"animals\": 2"));
}

#[test]
fn login_whoami_logout_cycle() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/animals")
        .with_status(200)
        .with_body("[]")
        .create();
    server
        .mock("POST", "/login")
        .match_body(Matcher::Json(json!({ "email": "a@b.com", "password": "x" })))
        .with_status(200)
        .with_body(login_body().to_string())
        .create();
    server
        .mock("GET", "/users/1")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(login_body()["user"].to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "login", "--email", "a@b.com", "--password", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"));
    assert!(credentials(home_dir.path()).contains("tok"));

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ana\""));

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "logout"])
        .assert()
        .success();
    assert!(!credentials(home_dir.path()).contains("tok"));

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "whoami"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
}

#[test]
fn rejected_login_exits_non_zero() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/animals")
        .with_status(200)
        .with_body("[]")
        .create();
    server
        .mock("POST", "/login")
        .with_status(400)
        .with_body("\"Incorrect password\"")
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "login", "--email", "a@b.com", "--password", "bad"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("error:"));
    assert!(!credentials(home_dir.path()).contains("token"));
}

#[test]
fn register_sends_normalized_payload() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/animals")
        .with_status(200)
        .with_body("[]")
        .create();
    let register = server
        .mock("POST", "/register")
        .match_body(Matcher::Json(json!({
            "name": "Ana",
            "email": "a@b.com",
            "password": "x",
            "address": { "state": "SP", "city": "c", "district": "d" }
        })))
        .with_status(201)
        .with_body("{}")
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "register",
            "--name",
            "Ana",
            "--email",
            "a@b.com",
            "--password",
            "x",
            "--confirm-password",
            "x",
            "--state",
            "sp",
            "--city",
            "c",
            "--district",
            "d",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"));
    register.assert();
}

#[test]
fn delete_without_session_is_refused() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/animals")
        .with_status(200)
        .with_body("[]")
        .create();
    let delete = server.mock("DELETE", Matcher::Any).expect(0).create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "animals", "delete", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
    delete.assert();
}

#[test]
fn remote_http_requires_insecure() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args(["--addr", "http://api.auqmia.test", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--insecure"));
}

#[test]
fn configured_address_is_used() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/animals")
        .with_status(200)
        .with_body("[]")
        .create();

    base_cmd(home_dir.path())
        .args(["config", "set-addr", &server.url()])
        .assert()
        .success();
    assert!(home_dir.path().join(".auqmia").join("config.json").exists());

    base_cmd(home_dir.path())
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(server.url()));

    base_cmd(home_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"credential_backend\": \"file\""));
}
