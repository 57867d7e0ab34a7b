use super::test_support::{UNREACHABLE_JWKS_URL, claims, jwks, sign};
use super::*;

fn client(backend: Option<BackendApi>) -> ClerkClient {
    let verifier = SessionVerifier::with_jwks(reqwest::Client::new(), UNREACHABLE_JWKS_URL.to_owned(), Vec::new(), jwks());
    ClerkClient::new(verifier, backend)
}

fn unreachable_backend() -> BackendApi {
    BackendApi::new(reqwest::Client::new(), "http://127.0.0.1:9".to_owned(), "sk_test_x".to_owned())
}

#[test]
fn status_from_claims_maps_both_states() {
    assert_eq!(status_from_claims(None), AuthStatus::signed_out());
    let c = claims("user_1");
    assert_eq!(status_from_claims(Some(&c)), AuthStatus::signed_in("user_1"));
}

#[tokio::test]
async fn missing_token_is_signed_out() {
    let status = client(None).auth_status(None).await.unwrap();
    assert!(status.auth_checked);
    assert!(!status.is_signed_in);
    assert_eq!(status.user_id, None);
}

#[tokio::test]
async fn empty_token_is_signed_out() {
    assert_eq!(client(None).auth_status(Some("")).await.unwrap(), AuthStatus::signed_out());
}

#[tokio::test]
async fn valid_token_is_signed_in() {
    let token = sign(&claims("user_42"));
    let status = client(None).auth_status(Some(&token)).await.unwrap();
    assert_eq!(status, AuthStatus::signed_in("user_42"));
}

#[tokio::test]
async fn profile_is_empty_when_signed_out() {
    let profile = client(Some(unreachable_backend())).user_profile(None).await.unwrap();
    assert_eq!(profile, UserProfile::default());
}

#[tokio::test]
async fn profile_without_secret_key_comes_from_claims() {
    let mut c = claims("user_42");
    c.username = Some("ada".to_owned());
    let profile = client(None).user_profile(Some(&sign(&c))).await.unwrap();
    assert_eq!(profile.username.as_deref(), Some("ada"));
    assert_eq!(profile.first_name, None);
}

#[tokio::test]
async fn profile_with_secret_key_reads_backend() {
    let token = sign(&claims("user_42"));
    let err = client(Some(unreachable_backend())).user_profile(Some(&token)).await.unwrap_err();
    assert!(matches!(err, ClerkError::ApiRequest(_)));
}

#[tokio::test]
async fn sign_out_without_secret_key_is_local_only() {
    let token = sign(&claims("user_42"));
    client(None).sign_out(Some(&token)).await.unwrap();
}

#[tokio::test]
async fn sign_out_without_session_skips_revoke() {
    client(Some(unreachable_backend())).sign_out(None).await.unwrap();
}

#[tokio::test]
async fn sign_out_with_secret_key_revokes_session() {
    let token = sign(&claims("user_42"));
    let err = client(Some(unreachable_backend())).sign_out(Some(&token)).await.unwrap_err();
    assert!(matches!(err, ClerkError::ApiRequest(_)));
}

#[test]
fn from_config_builds_without_secret_key() {
    let config = ServerConfig::from_lookup(|key: &str| {
        (key == "CLERK_PUBLISHABLE_KEY").then(|| "pk_test_Y2xlYW4tbW9sZS0xMi5jbGVyay5hY2NvdW50cy5kZXYk".to_owned())
    })
    .unwrap();
    let client = ClerkClient::from_config(&config).unwrap();
    assert!(client.backend.is_none());
}
