//! CLI integration tests for the table commands.

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{login, object_json, run_cli, run_cli_success};

#[tokio::test(flavor = "multi_thread")]
async fn obj_list_renders_rows() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;

    Mock::given(method("GET"))
        .and(path("/api/obj/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            object_json("obj-1", "ORDERSRV"),
            object_json("obj-2", "INVOICESRV"),
        ])))
        .mount(&server)
        .await;

    let output = run_cli_success(&["obj", "list"], home.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("OBJECT"));
    assert!(stdout.contains("ORDERSRV"));
    assert!(stdout.contains("INVOICESRV"));
    // Promote dates render as dd/mm/yyyy
    assert!(stdout.contains("07/03/2024"));
}

#[tokio::test(flavor = "multi_thread")]
async fn obj_list_scopes_search_query() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;

    Mock::given(method("GET"))
        .and(path("/api/obj/search/ORDER"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([object_json("obj-1", "ORDERSRV")])),
        )
        .mount(&server)
        .await;

    let output = run_cli_success(&["obj", "list", "ORDER"], home.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ORDERSRV"));
}

#[tokio::test(flavor = "multi_thread")]
async fn obj_list_null_body_is_empty_table() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;

    Mock::given(method("GET"))
        .and(path("/api/obj/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::Value::Null))
        .mount(&server)
        .await;

    let output = run_cli_success(&["obj", "list"], home.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No objects found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn obj_list_paginates_past_page_size() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;

    let records: Vec<_> = (0..9)
        .map(|n| object_json(&format!("obj-{}", n), &format!("OBJ{}", n)))
        .collect();
    Mock::given(method("GET"))
        .and(path("/api/obj/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(records)))
        .mount(&server)
        .await;

    // Page 1 shows the first eight records plus the strip
    let output = run_cli_success(&["obj", "list"], home.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OBJ0"));
    assert!(stdout.contains("OBJ7"));
    assert!(!stdout.contains("OBJ8"));
    assert!(stdout.contains("[1]"));

    // Page 2 shows the remainder
    let output = run_cli_success(&["obj", "list", "--page", "2"], home.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OBJ8"));
    assert!(!stdout.contains("OBJ7"));

    // Page 3 does not exist
    let output = run_cli(&["obj", "list", "--page", "3"], home.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"));
}

#[tokio::test(flavor = "multi_thread")]
async fn req_list_renders_rows() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;

    Mock::given(method("GET"))
        .and(path("/api/obj_req/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "req-1",
            "obj_name": "ORDERSRV",
            "requester": "alice",
            "updated_at": "2024-03-07T09:30:00Z",
            "lib": "PRODLIB",
            "obj_ver": "v2",
            "obj_type": "PGM",
            "promote_date": null,
            "developer": "budi",
            "promote_status": "",
            "req_status": "pending"
        }])))
        .mount(&server)
        .await;

    let output = run_cli_success(&["req", "list"], home.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("REQUESTER"));
    assert!(stdout.contains("ORDERSRV"));
    assert!(stdout.contains("alice"));
    assert!(stdout.contains("pending"));
}

#[tokio::test(flavor = "multi_thread")]
async fn obj_delete_with_force_skips_prompt() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;

    Mock::given(method("DELETE"))
        .and(path("/api/delete_mimix_obj/obj-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_success(&["obj", "delete", "obj-1", "--force"], home.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Object obj-1 deleted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn obj_create_rejects_invalid_date_before_network() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;

    Mock::given(method("POST"))
        .and(path("/api/add_mimix_obj"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli(
        &[
            "obj",
            "create",
            "--obj",
            "ORDERSRV",
            "--obj-type",
            "PGM",
            "--lib",
            "PRODLIB",
            "--obj-ver",
            "v1",
            "--developer",
            "budi",
            "--promote-date",
            "31/02/2024",
        ],
        home.path(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid date format"));
}

#[tokio::test(flavor = "multi_thread")]
async fn req_convert_reports_created_object() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    login(&server, home.path()).await;

    Mock::given(method("POST"))
        .and(path("/api/convert_obj_req/req-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(object_json("obj-9", "ORDERSRV")))
        .mount(&server)
        .await;

    let output = run_cli_success(&["req", "convert", "req-1", "--force"], home.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("converted into object ORDERSRV"));
}
