//! Shared helpers for CLI integration tests.
//!
//! Every test runs the binary with an isolated HOME so session storage
//! never leaks between tests, against a wiremock stand-in for the API.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary with an isolated HOME for session storage.
pub fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mimix"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("NO_COLOR", "1");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], home: &Path) -> Output {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    output
}

/// Run the CLI with the given lines piped to stdin, for interactive
/// commands.
#[allow(dead_code)]
pub fn run_cli_with_stdin(args: &[&str], home: &Path, input: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mimix"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("NO_COLOR", "1");
    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(input.as_bytes())
        .expect("Failed to write CLI stdin");
    child.wait_with_output().expect("Failed to execute CLI")
}

/// Where the session file lands under the isolated HOME.
pub fn session_file(home: &Path) -> PathBuf {
    home.join("data").join("mimix").join("session.json")
}

/// A successful login response body.
pub fn login_body() -> serde_json::Value {
    json!({
        "access_token": "test-token-abc",
        "user": {
            "id": "11111111-1111-1111-1111-111111111111",
            "username": "alice",
            "job": "developer"
        }
    })
}

/// A backend object record.
pub fn object_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "obj": name,
        "obj_type": "PGM",
        "promote_date": "2024-03-07T00:00:00Z",
        "lib": "PRODLIB",
        "obj_ver": "v1",
        "mimix_status": "pending",
        "developer": "budi",
        "keterangan": "first drop"
    })
}

/// Mount the login endpoint and log the CLI in against `server`,
/// persisting a session under `home`.
pub async fn login(server: &MockServer, home: &Path) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
        .mount(server)
        .await;

    run_cli_success(
        &[
            "login",
            "--username",
            "alice",
            "--password",
            "secret",
            "--api",
            &server.uri(),
        ],
        home,
    );
}
