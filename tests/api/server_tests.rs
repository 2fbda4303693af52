//! End-to-end flows through a running test server

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use scooter_server::config::Settings;
use scooter_server::presentation::http::routes::create_router;
use scooter_server::startup::AppState;

// "basic:pass"
const BASIC: &str = "Basic YmFzaWM6cGFzcw==";

fn server() -> TestServer {
    TestServer::new(create_router(AppState::new(Settings::default()))).unwrap()
}

fn basic() -> HeaderValue {
    HeaderValue::from_static(BASIC)
}

#[tokio::test]
async fn test_reserve_move_and_release() {
    let server = server();

    let response = server
        .patch("/scooter/def456")
        .add_header(header::AUTHORIZATION, basic())
        .json(&json!({"reserved": true}))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server
        .patch("/scooter/def456")
        .add_header(header::AUTHORIZATION, basic())
        .json(&json!({"battery": 60, "location": {"latitude": 49.3, "longitude": -123.1}}))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": "def456", "reserved": true, "battery": 60,
               "location": {"latitude": 49.3, "longitude": -123.1}})
    );

    let mine = server
        .get("/scooter")
        .add_query_param("user", "basic")
        .add_header(header::AUTHORIZATION, basic())
        .await;
    mine.assert_status_ok();
    assert_eq!(mine.json::<Value>()[0]["id"], "def456");

    server
        .patch("/scooter/def456")
        .add_header(header::AUTHORIZATION, basic())
        .json(&json!({"reserved": false}))
        .await
        .assert_status(StatusCode::CREATED);

    let scooter = server
        .get("/scooter/def456")
        .add_header(header::AUTHORIZATION, basic())
        .await;
    scooter.assert_status_ok();
    assert_eq!(scooter.json::<Value>()["reserved"], false);
}

#[tokio::test]
async fn test_unauthenticated_request_is_challenged() {
    let server = server();

    let response = server.get("/scooter").await;
    response.assert_status_unauthorized();
    assert_eq!(
        response.header(header::WWW_AUTHENTICATE),
        "Basic realm=\"scooters\""
    );
}

#[tokio::test]
async fn test_validation_error_body() {
    let server = server();

    let response = server
        .patch("/scooter/abc123")
        .add_header(header::AUTHORIZATION, basic())
        .json(&json!({"battery": 101}))
        .await;
    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["code"], 10007);
    assert_eq!(body["errors"][0]["field"], "battery");
}
