use super::*;

#[test]
fn parses_development_key() {
    let key = PublishableKey::parse("pk_test_Y2xlYW4tbW9sZS0xMi5jbGVyay5hY2NvdW50cy5kZXYk").unwrap();
    assert_eq!(key.kind(), InstanceKind::Development);
    assert_eq!(key.frontend_api(), "clean-mole-12.clerk.accounts.dev");
    assert_eq!(key.jwks_url(), "https://clean-mole-12.clerk.accounts.dev/.well-known/jwks.json");
}

#[test]
fn parses_production_key() {
    let key = PublishableKey::parse("pk_live_Y2xlcmsuZXhhbXBsZS5jb20k").unwrap();
    assert_eq!(key.kind(), InstanceKind::Production);
    assert_eq!(key.frontend_api(), "clerk.example.com");
}

#[test]
fn accepts_padded_payload_and_surrounding_whitespace() {
    let key = PublishableKey::parse("  pk_live_Y2xlcmsuZXhhbXBsZS5jb20k==\n").unwrap();
    assert_eq!(key.frontend_api(), "clerk.example.com");
    assert_eq!(key.as_str(), "pk_live_Y2xlcmsuZXhhbXBsZS5jb20k==");
}

#[test]
fn rejects_secret_key_prefix() {
    assert_eq!(PublishableKey::parse("sk_test_abc"), Err(KeyError::UnknownPrefix));
}

#[test]
fn rejects_invalid_base64() {
    assert_eq!(PublishableKey::parse("pk_test_!!!not-base64!!!"), Err(KeyError::InvalidEncoding));
}

#[test]
fn rejects_payload_without_dollar_terminator() {
    assert_eq!(PublishableKey::parse("pk_test_bm8tZG9sbGFyLmV4YW1wbGUuY29t"), Err(KeyError::InvalidHost));
}

#[test]
fn rejects_payload_that_is_not_a_host() {
    assert_eq!(PublishableKey::parse("pk_test_bm90IGEgaG9zdCQ="), Err(KeyError::InvalidHost));
}
