//! CLI integration tests for login, session persistence and logout.

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{
    login, login_body, object_json, run_cli, run_cli_success, run_cli_with_stdin, session_file,
};

#[tokio::test(flavor = "multi_thread")]
async fn login_persists_session_for_whoami() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "alice", "pass": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
        .mount(&server)
        .await;

    let output = run_cli_success(
        &[
            "login",
            "--username",
            "alice",
            "--password",
            "secret",
            "--api",
            &server.uri(),
        ],
        home.path(),
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Logged in successfully"));
    assert!(stdout.contains("alice"));
    assert!(session_file(home.path()).exists());

    // The stored token must not appear in any output
    assert!(!stdout.contains("test-token-abc"));

    // whoami reads the stored session without talking to the server
    let output = run_cli_success(&["whoami"], home.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("alice"));
    assert!(stdout.contains("developer"));
}

#[tokio::test(flavor = "multi_thread")]
async fn logout_clears_the_stored_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;
    assert!(session_file(home.path()).exists());

    run_cli_success(&["logout"], home.path());
    assert!(!session_file(home.path()).exists());

    let output = run_cli(&["whoami"], home.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_login_shows_server_message() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "record not found"})),
        )
        .mount(&server)
        .await;

    let output = run_cli(
        &[
            "login",
            "--username",
            "alice",
            "--password",
            "wrong",
            "--api",
            &server.uri(),
        ],
        home.path(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("record not found"));
    assert!(!session_file(home.path()).exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn register_mismatch_fails_without_network() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/create_user"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli(
        &[
            "register",
            "--username",
            "bob",
            "--job",
            "operator",
            "--password",
            "one",
            "--confirm-password",
            "two",
            "--api",
            &server.uri(),
        ],
        home.path(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Passwords do not match"));
}

#[tokio::test(flavor = "multi_thread")]
async fn register_creates_user() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/create_user"))
        .and(body_json(json!({
            "username": "bob",
            "job": "operator",
            "password": "pw",
            "confirm_password": "pw"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": {
                "id": "22222222-2222-2222-2222-222222222222",
                "username": "bob",
                "job": "operator"
            }
        })))
        .mount(&server)
        .await;

    let output = run_cli_success(
        &[
            "register",
            "--username",
            "bob",
            "--job",
            "operator",
            "--password",
            "pw",
            "--confirm-password",
            "pw",
            "--api",
            &server.uri(),
        ],
        home.path(),
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("User bob created"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unauthorized_request_clears_stored_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;
    assert!(session_file(home.path()).exists());

    Mock::given(method("GET"))
        .and(path("/api/obj/search"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let output = run_cli(&["obj", "list"], home.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Session expired"));

    // The stale session file is gone, so the next command asks for login
    assert!(!session_file(home.path()).exists());
    let output = run_cli(&["obj", "list"], home.path());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unauthorized_browse_action_clears_stored_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;
    assert!(session_file(home.path()).exists());

    Mock::given(method("GET"))
        .and(path("/api/obj/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([object_json("obj-1", "ORDERSRV")])),
        )
        .mount(&server)
        .await;

    // The fetch succeeds; the delete inside the browser hits a rejected
    // token and must end the session like any other unauthorized call
    Mock::given(method("DELETE"))
        .and(path("/api/delete_mimix_obj/obj-1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let output = run_cli_with_stdin(&["browse", "obj"], home.path(), "d 1\ny\nq\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Session expired"));
    assert!(!session_file(home.path()).exists());
}
