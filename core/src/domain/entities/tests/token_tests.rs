//! Unit tests for token entities

use chrono::{Duration, Utc};

use crate::domain::entities::document::DocumentId;
use crate::domain::entities::token::*;

#[test]
fn test_record_without_deadline_never_expires() {
    let record = NewTokenRecord::new("abc123").into_record(DocumentId::new("doc-1"));

    assert!(!record.is_expired());
    assert!(!record.is_expired_at(Utc::now() + Duration::days(365)));
}

#[test]
fn test_record_expires_at_deadline() {
    let record = NewTokenRecord::expiring_in("abc123", Duration::seconds(3600)).unwrap()
        .into_record(DocumentId::new("doc-1"));
    let deadline = record.expires_at.unwrap();

    assert!(!record.is_expired());
    assert!(!record.is_expired_at(deadline - Duration::seconds(1)));
    assert!(record.is_expired_at(deadline));
    assert!(record.is_expired_at(deadline + Duration::seconds(1)));
}

#[test]
fn test_expiring_in_out_of_range_deadline() {
    assert!(NewTokenRecord::expiring_in("abc123", Duration::seconds(9_000_000_000_000)).is_none());
}

#[test]
fn test_record_serializes_value_as_token_field() {
    let record = NewTokenRecord::new("abc123").into_record(DocumentId::new("doc-1"));
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["token"], "abc123");
    assert_eq!(json["id"], "doc-1");
    assert!(json.get("expires_at").is_none());
}

#[test]
fn test_custom_token_claims() {
    let claims = CustomTokenClaims::new("fleet-api@fleet.local", DEFAULT_TOKEN_SUBJECT);

    assert_eq!(claims.uid, "some-uid");
    assert_eq!(claims.iss, "fleet-api@fleet.local");
    assert_eq!(claims.sub, claims.iss);
    assert_eq!(claims.aud, IDENTITY_TOOLKIT_AUDIENCE);
    assert_eq!(claims.exp - claims.iat, CUSTOM_TOKEN_LIFETIME_SECONDS);
}

#[test]
fn test_custom_token_claims_are_unique() {
    let first = CustomTokenClaims::new("svc", "some-uid");
    let second = CustomTokenClaims::new("svc", "some-uid");

    assert_ne!(first.jti, second.jti);
}
