//! Signing helpers for session-token tests.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use super::session::SessionClaims;

pub const TEST_KID: &str = "ins_test_key";
pub const UNREACHABLE_JWKS_URL: &str = "http://127.0.0.1:9/.well-known/jwks.json";

const SIGNING_KEY_PEM: &str = include_str!("testdata/signing_key.pem");
const FOREIGN_KEY_PEM: &str = include_str!("testdata/foreign_key.pem");
const SIGNING_KEY_N: &str = "sYIkfDfyLHdRBAxWk3Dshuv8Ikl8JY1qE27ZVfsAYvZSuYtJPGey9z9Rk4MMvYfS80e2aeNSpaaJk1CN-A1u9Ik3lXoAt88jL7MUomP8YhcoeJazDTN_qAxKr5U72UCbITQ53OpC_X6EDOWRATzeRkoMRhBfQiZvSeNz-VPmEiIR87uy4C5QpRIiWPk_Gm7CvtUV4zhmrGSNdvWHuBs4_ePuEOIkqNlA4Lgcw5PYcYTHLaGy1y1bts2IFWYFR7GhslHeCm-_qSRc3coWgo7yTinRyZ7hDeQQfvtbMBJJwLkt6yokwgPN13i-lxNXj2290Yb3F2dmpCpH4V7xXiE3zQ";

pub fn now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs()
}

/// JWKS containing the public half of the test signing key.
pub fn jwks() -> JwkSet {
    serde_json::from_value(serde_json::json!({
        "keys": [{
            "kty": "RSA",
            "kid": TEST_KID,
            "use": "sig",
            "alg": "RS256",
            "n": SIGNING_KEY_N,
            "e": "AQAB",
        }]
    }))
    .unwrap()
}

pub fn claims(user_id: &str) -> SessionClaims {
    let now = now();
    SessionClaims {
        sub: user_id.to_owned(),
        sid: Some("sess_test".to_owned()),
        exp: now + 60,
        iat: Some(now),
        nbf: Some(now - 10),
        azp: Some("http://localhost:3000".to_owned()),
        first_name: None,
        last_name: None,
        email: None,
        username: None,
        image_url: None,
    }
}

fn sign_with(pem: &str, kid: &str, claims: &SessionClaims) -> String {
    let header = Header { kid: Some(kid.to_owned()), ..Header::new(Algorithm::RS256) };
    encode(&header, claims, &EncodingKey::from_rsa_pem(pem.as_bytes()).unwrap()).unwrap()
}

pub fn sign(claims: &SessionClaims) -> String {
    sign_with(SIGNING_KEY_PEM, TEST_KID, claims)
}

/// Token carrying the trusted kid but signed by a different key.
pub fn sign_with_foreign_key(claims: &SessionClaims) -> String {
    sign_with(FOREIGN_KEY_PEM, TEST_KID, claims)
}

pub fn sign_with_kid(claims: &SessionClaims, kid: &str) -> String {
    sign_with(SIGNING_KEY_PEM, kid, claims)
}
