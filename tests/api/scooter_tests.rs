//! Scooter API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{json_body, TestApp, PREMIUM};

#[tokio::test]
async fn test_list_scooters_returns_seed_fleet() {
    let app = TestApp::new();

    let response = app.get("/scooter").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!([
            {"id": "abc123", "reserved": false, "battery": 99,
             "location": {"latitude": 49.26227, "longitude": -123.14242}},
            {"id": "def456", "reserved": false, "battery": 88,
             "location": {"latitude": 49.26636, "longitude": -123.14226}},
            {"id": "ghi789", "reserved": true, "battery": 77,
             "location": {"latitude": 49.26532, "longitude": -123.13659}},
            {"id": "jkl012", "reserved": false, "battery": 9,
             "location": {"latitude": 49.26443, "longitude": -123.13469}}
        ])
    );
}

#[tokio::test]
async fn test_get_scooter_by_id() {
    let app = TestApp::new();

    assert_eq!(
        app.scooter("def456").await,
        json!({"id": "def456", "reserved": false, "battery": 88,
               "location": {"latitude": 49.26636, "longitude": -123.14226}})
    );
}

#[test_case("GET" ; "get")]
#[test_case("PATCH" ; "patch")]
#[tokio::test]
async fn test_unknown_scooter_returns_404(method: &str) {
    let app = TestApp::new();

    let response = match method {
        "GET" => app.get("/scooter/nope").await,
        _ => app.patch_json("/scooter/nope", r#"{"battery": 50}"#).await,
    };
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["message"], "No matching scooter found");
}

#[tokio::test]
async fn test_patch_returns_201_with_updated_record() {
    let app = TestApp::new();

    let response = app
        .patch_json("/scooter/abc123", r#"{"battery": 25}"#)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["battery"], 25);

    let scooter = app.scooter("abc123").await;
    assert_eq!(scooter["battery"], 25);
    assert_eq!(scooter["reserved"], false);
    assert_eq!(scooter["location"]["latitude"], 49.26227);
}

#[test_case(-1 ; "below range")]
#[test_case(101 ; "above range")]
#[tokio::test]
async fn test_patch_rejects_battery_out_of_range(battery: i64) {
    let app = TestApp::new();

    let response = app
        .patch_json("/scooter/abc123", &json!({ "battery": battery }).to_string())
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["errors"][0]["field"], "battery");
    assert_eq!(app.scooter("abc123").await["battery"], 99);
}

#[test_case(0 ; "empty")]
#[test_case(100 ; "full")]
#[tokio::test]
async fn test_patch_accepts_battery_bounds(battery: i64) {
    let app = TestApp::new();

    let response = app
        .patch_json("/scooter/jkl012", &json!({ "battery": battery }).to_string())
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.scooter("jkl012").await["battery"], battery);
}

#[test_case(json!({"latitude": -181}), "location.latitude" ; "latitude below range")]
#[test_case(json!({"latitude": 181}), "location.latitude" ; "latitude above range")]
#[test_case(json!({"longitude": 700}), "location.longitude" ; "longitude above range")]
#[test_case(json!({"longitude": -180.5}), "location.longitude" ; "longitude below range")]
#[tokio::test]
async fn test_patch_rejects_location_out_of_range(location: serde_json::Value, field: &str) {
    let app = TestApp::new();
    let before = app.scooter("def456").await;

    let response = app
        .patch_json("/scooter/def456", &json!({ "location": location }).to_string())
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["errors"][0]["field"], field);
    assert_eq!(app.scooter("def456").await, before);
}

#[tokio::test]
async fn test_patch_accepts_wide_location() {
    let app = TestApp::new();

    let response = app
        .patch_json(
            "/scooter/abc123",
            r#"{"location": {"latitude": 99, "longitude": -99}}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        app.scooter("abc123").await["location"],
        json!({"latitude": 99.0, "longitude": -99.0})
    );
}

#[tokio::test]
async fn test_patch_partial_location_keeps_other_coordinate() {
    let app = TestApp::new();

    let response = app
        .patch_json("/scooter/abc123", r#"{"location": {"latitude": 10.5}}"#)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        app.scooter("abc123").await["location"],
        json!({"latitude": 10.5, "longitude": -123.14242})
    );
}

#[tokio::test]
async fn test_reserve_is_visible_on_next_read() {
    let app = TestApp::new();

    let response = app
        .patch_json("/scooter/abc123", r#"{"reserved": true}"#)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.scooter("abc123").await["reserved"], true);

    let response = app
        .patch_json("/scooter/abc123", r#"{"reserved": false}"#)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.scooter("abc123").await["reserved"], false);
}

#[tokio::test]
async fn test_repeated_patch_is_idempotent() {
    let app = TestApp::new();
    let body = r#"{"reserved": true, "battery": 42, "location": {"latitude": 1, "longitude": 2}}"#;

    let first = json_body(app.patch_json("/scooter/def456", body).await).await;
    let second_response = app.patch_json("/scooter/def456", body).await;
    assert_eq!(second_response.status(), StatusCode::CREATED);
    let second = json_body(second_response).await;

    assert_eq!(first, second);
    assert_eq!(app.scooter("def456").await, second);
}

#[tokio::test]
async fn test_invalid_field_rejects_whole_patch() {
    let app = TestApp::new();
    let before = app.scooter("abc123").await;

    let response = app
        .patch_json(
            "/scooter/abc123",
            r#"{"reserved": true, "battery": 50, "location": {"latitude": 700}}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.scooter("abc123").await, before);
}

#[tokio::test]
async fn test_all_errors_are_reported_together() {
    let app = TestApp::new();

    let response = app
        .patch_json(
            "/scooter/abc123",
            r#"{"battery": 500, "location": {"latitude": 700, "longitude": -700}}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    let fields: Vec<_> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        fields,
        vec!["battery", "location.latitude", "location.longitude"]
    );
}

#[tokio::test]
async fn test_id_in_body_is_ignored() {
    let app = TestApp::new();

    let response = app
        .patch_json("/scooter/abc123", r#"{"id": "zzz999", "battery": 60}"#)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["id"], "abc123");
    assert_eq!(body["battery"], 60);

    let response = app.get("/scooter/zzz999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test_case("" ; "empty body")]
#[test_case("not json" ; "malformed")]
#[test_case("[1, 2]" ; "array")]
#[test_case(r#"{"battery": null}"# ; "null battery")]
#[test_case(r#"{"reserved": "yes"}"# ; "wrong type")]
#[test_case(r#"{"battery": 50.5}"# ; "fractional battery")]
#[test_case(r#"{"location": {"latitude": null}}"# ; "null latitude")]
#[tokio::test]
async fn test_patch_rejects_malformed_body(body: &str) {
    let app = TestApp::new();
    let before = app.scooter("abc123").await;

    let response = app.patch_json("/scooter/abc123", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.scooter("abc123").await, before);
}

#[tokio::test]
async fn test_empty_patch_returns_current_record() {
    let app = TestApp::new();
    let before = app.scooter("jkl012").await;

    let response = app.patch_json("/scooter/jkl012", "{}").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await, before);
}

#[tokio::test]
async fn test_list_filtered_by_user() {
    let app = TestApp::new();

    let response = app.get(&format!("/scooter?user={}", PREMIUM)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "ghi789");
}

#[tokio::test]
async fn test_list_filter_tracks_reservations() {
    let app = TestApp::new();

    let response = app.get("/scooter?user=basic").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    app.patch_json("/scooter/jkl012", r#"{"reserved": true}"#)
        .await;
    let body = json_body(app.get("/scooter?user=basic").await).await;
    assert_eq!(body[0]["id"], "jkl012");

    app.patch_json("/scooter/jkl012", r#"{"reserved": false}"#)
        .await;
    let response = app.get("/scooter?user=basic").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_with_empty_user_returns_everything() {
    let app = TestApp::new();

    let body = json_body(app.get("/scooter?user=").await).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let app = TestApp::new();

    let mut request = axum::http::Request::builder()
        .method("DELETE")
        .uri("/scooter/abc123")
        .body(axum::body::Body::empty())
        .unwrap();
    axum_extra::headers::HeaderMapExt::typed_insert(
        request.headers_mut(),
        axum_extra::headers::Authorization::basic("basic", "pass"),
    );

    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
