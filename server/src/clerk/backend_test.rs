use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};

use super::*;

const SECRET: &str = "sk_test_backend";

const USER_JSON: &str = r#"{
    "id": "user_123",
    "first_name": "Ada",
    "last_name": "Lovelace",
    "username": null,
    "image_url": "https://img.clerk.com/ada.png",
    "has_image": true,
    "primary_email_address_id": "idn_2",
    "email_addresses": [
        {"id": "idn_1", "email_address": "old@example.com"},
        {"id": "idn_2", "email_address": "ada@example.com"}
    ],
    "public_metadata": {}
}"#;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {SECRET}"))
}

async fn stub_user(Path(id): Path<String>, headers: HeaderMap) -> (StatusCode, String) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, r#"{"errors":[{"code":"authentication_invalid"}]}"#.to_owned());
    }
    match id.as_str() {
        "user_123" | "user_aliased" => (StatusCode::OK, USER_JSON.to_owned()),
        "user_garbled" => (StatusCode::OK, "not json".to_owned()),
        _ => (StatusCode::NOT_FOUND, r#"{"errors":[{"code":"resource_not_found"}]}"#.to_owned()),
    }
}

async fn stub_revoke(Path(id): Path<String>, headers: HeaderMap) -> StatusCode {
    if authorized(&headers) && id == "sess_1" { StatusCode::OK } else { StatusCode::NOT_FOUND }
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/v1/users/{id}", get(stub_user))
        .route("/v1/sessions/{id}/revoke", post(stub_revoke));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn api(base_url: String, secret: &str) -> BackendApi {
    BackendApi::new(reqwest::Client::new(), base_url, secret.to_owned())
}

// =============================================================================
// parse_user / into_profile
// =============================================================================

#[test]
fn parse_user_picks_primary_email() {
    let user = parse_user(USER_JSON).unwrap();
    assert_eq!(user.id, "user_123");
    assert_eq!(user.primary_email(), Some("ada@example.com"));
}

#[test]
fn primary_email_falls_back_to_first_address() {
    let user = parse_user(
        r#"{"id":"user_1","primary_email_address_id":"idn_gone","email_addresses":[{"id":"idn_1","email_address":"a@b.co"}]}"#,
    )
    .unwrap();
    assert_eq!(user.primary_email(), Some("a@b.co"));
}

#[test]
fn minimal_user_maps_to_empty_profile() {
    let profile = parse_user(r#"{"id":"user_1"}"#).unwrap().into_profile();
    assert_eq!(profile, UserProfile::default());
}

#[test]
fn into_profile_copies_display_fields() {
    let profile = parse_user(USER_JSON).unwrap().into_profile();
    assert_eq!(profile.first_name.as_deref(), Some("Ada"));
    assert_eq!(profile.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(profile.email_address.as_deref(), Some("ada@example.com"));
    assert_eq!(profile.username, None);
    assert!(profile.has_image);
    assert_eq!(profile.image_url, "https://img.clerk.com/ada.png");
}

#[test]
fn parse_user_rejects_non_user_body() {
    assert!(matches!(parse_user("[]"), Err(ClerkError::ApiParse(_))));
}

// =============================================================================
// HTTP
// =============================================================================

#[tokio::test]
async fn get_user_sends_secret_and_maps_profile() {
    let base = spawn_stub().await;
    let profile = api(base, SECRET).get_user("user_123").await.unwrap();
    assert_eq!(profile.first_name.as_deref(), Some("Ada"));
    assert_eq!(profile.email_address.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn get_user_reports_status_and_body() {
    let base = spawn_stub().await;
    let err = api(base, SECRET).get_user("user_missing").await.unwrap_err();
    match err {
        ClerkError::ApiResponse { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("resource_not_found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn get_user_with_wrong_secret_is_unauthorized() {
    let base = spawn_stub().await;
    let err = api(base, "sk_test_wrong").get_user("user_123").await.unwrap_err();
    assert!(matches!(err, ClerkError::ApiResponse { status: 401, .. }));
}

#[tokio::test]
async fn get_user_with_garbled_body_is_parse_error() {
    let base = spawn_stub().await;
    let err = api(base, SECRET).get_user("user_garbled").await.unwrap_err();
    assert!(matches!(err, ClerkError::ApiParse(_)));
}

#[tokio::test]
async fn get_user_rejects_record_for_another_user() {
    let base = spawn_stub().await;
    let err = api(base, SECRET).get_user("user_aliased").await.unwrap_err();
    assert_eq!(err, ClerkError::ApiParse("asked for user_aliased, got user_123".to_owned()));
}

#[tokio::test]
async fn get_user_rejects_path_characters_without_a_request() {
    let err = api("http://127.0.0.1:9".to_owned(), SECRET)
        .get_user("../sessions")
        .await
        .unwrap_err();
    assert_eq!(err, ClerkError::InvalidId("../sessions".to_owned()));
}

#[tokio::test]
async fn unreachable_api_is_request_error() {
    let err = api("http://127.0.0.1:9".to_owned(), SECRET)
        .get_user("user_123")
        .await
        .unwrap_err();
    assert!(matches!(err, ClerkError::ApiRequest(_)));
}

#[tokio::test]
async fn revoke_session_succeeds_for_known_session() {
    let base = spawn_stub().await;
    api(base, SECRET).revoke_session("sess_1").await.unwrap();
}

#[tokio::test]
async fn revoke_session_reports_failure() {
    let base = spawn_stub().await;
    let err = api(base, SECRET).revoke_session("sess_unknown").await.unwrap_err();
    assert!(matches!(err, ClerkError::ApiResponse { status: 404, .. }));
}
