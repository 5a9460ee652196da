use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use serde_json::Value;

use interview_orchestrator::application::ports::{TokenIssuer, TokenIssuerError};
use interview_orchestrator::domain::{Capabilities, GrantRequest, SessionGrant};
use interview_orchestrator::infrastructure::media::LiveKitTokenIssuer;

const API_KEY: &str = "APIdevkey";
const API_SECRET: &str = "a-sufficiently-long-signing-secret-for-tests";

fn issuer() -> LiveKitTokenIssuer {
    LiveKitTokenIssuer::new(API_KEY.to_string(), API_SECRET.to_string())
}

fn full_grant() -> SessionGrant {
    SessionGrant::from_request(
        GrantRequest {
            room: Some("interview-123".to_string()),
            identity: Some("student-1".to_string()),
            name: Some("Grace".to_string()),
            metadata: Some("{\"language\":\"english\"}".to_string()),
            attributes: Some(HashMap::from([("role".to_string(), "candidate".to_string())])),
        },
        Utc::now(),
    )
}

fn claims_of(token: &str) -> Value {
    let payload = token.split('.').nth(1).unwrap();
    serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap()
}

#[test]
fn given_issued_grant_when_decoded_with_same_key_then_round_trips_every_field() {
    let grant = full_grant();

    let token = issuer().issue(&grant).unwrap();
    let decoded = issuer().decode(&token).unwrap();

    assert_eq!(decoded, grant);
}

#[test]
fn given_issued_grant_when_inspecting_claims_then_uses_media_server_layout() {
    let token = issuer().issue(&full_grant()).unwrap();
    let claims = claims_of(&token);

    assert_eq!(claims["iss"], API_KEY);
    assert_eq!(claims["sub"], "student-1");
    assert_eq!(claims["name"], "Grace");
    assert_eq!(claims["video"]["roomJoin"], true);
    assert_eq!(claims["video"]["room"], "interview-123");
    assert_eq!(claims["video"]["canPublish"], true);
    assert_eq!(claims["video"]["canSubscribe"], true);
    assert_eq!(claims["attributes"]["role"], "candidate");
    assert_eq!(
        claims["exp"].as_i64().unwrap() - claims["iat"].as_i64().unwrap(),
        Duration::hours(6).num_seconds()
    );
}

#[test]
fn given_grant_without_optional_claims_when_issued_then_omits_them() {
    let grant = SessionGrant::from_request(GrantRequest::default(), Utc::now());

    let token = issuer().issue(&grant).unwrap();
    let claims = claims_of(&token);

    assert!(claims.get("metadata").is_none());
    assert!(claims.get("attributes").is_none());
    assert_eq!(issuer().decode(&token).unwrap().capabilities, Capabilities::participant());
}

#[test]
fn given_empty_secret_when_issuing_then_returns_missing_secret() {
    let issuer = LiveKitTokenIssuer::new(API_KEY.to_string(), "  ".to_string());

    let result = issuer.issue(&full_grant());

    assert!(matches!(result, Err(TokenIssuerError::MissingSecret)));
}

#[test]
fn given_token_signed_with_other_secret_when_decoding_then_rejects() {
    let other = LiveKitTokenIssuer::new(API_KEY.to_string(), "another-secret-entirely".to_string());
    let token = other.issue(&full_grant()).unwrap();

    let result = issuer().decode(&token);

    assert!(matches!(result, Err(TokenIssuerError::InvalidToken(_))));
}
