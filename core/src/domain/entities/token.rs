//! Token entities for store-backed bearer authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::DocumentId;

/// Subject every issued token authenticates unless configured otherwise
pub const DEFAULT_TOKEN_SUBJECT: &str = "some-uid";

/// Seconds until an issued token is removed from the store (1 hour)
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 3600;

/// Lifetime written into the `exp` claim of a custom token
pub const CUSTOM_TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Longest subject accepted by the minter
pub const MAX_SUBJECT_LENGTH: usize = 128;

/// Audience of identity-toolkit custom tokens
pub const IDENTITY_TOOLKIT_AUDIENCE: &str =
    "https://identitytoolkit.googleapis.com/google.identity.identitytoolkit.v1.IdentityToolkit";

/// A token document as held in the `tokens` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Storage-assigned identity, used only for deletion
    pub id: DocumentId,

    /// The bearer credential
    #[serde(rename = "token")]
    pub value: String,

    /// Deadline after which the record no longer authorizes anything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenRecord {
    /// Checks whether the record's deadline has passed at `now`
    ///
    /// Records without a deadline never expire on their own.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(deadline) if deadline <= now)
    }

    /// Checks whether the record's deadline has passed
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// A token document before the store has assigned it an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTokenRecord {
    pub value: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewTokenRecord {
    /// Creates a record without a deadline
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expires_at: None,
        }
    }

    /// Creates a record that stops authorizing `ttl` from now
    ///
    /// Returns `None` when the deadline falls outside the representable range.
    pub fn expiring_in(value: impl Into<String>, ttl: Duration) -> Option<Self> {
        let deadline = Utc::now().checked_add_signed(ttl)?;
        Some(Self {
            value: value.into(),
            expires_at: Some(deadline),
        })
    }

    /// Attaches the identity assigned by the store
    pub fn into_record(self, id: DocumentId) -> TokenRecord {
        TokenRecord {
            id,
            value: self.value,
            expires_at: self.expires_at,
        }
    }
}

/// Claims of a minted custom token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTokenClaims {
    /// Issuer (service account)
    pub iss: String,

    /// Subject (service account)
    pub sub: String,

    /// Audience
    pub aud: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// The authenticated subject
    pub uid: String,

    /// Unique token id so two tokens minted in the same second differ
    pub jti: String,
}

impl CustomTokenClaims {
    /// Creates claims for `uid`, issued now by `service_account`
    pub fn new(service_account: &str, uid: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(CUSTOM_TOKEN_LIFETIME_SECONDS);

        Self {
            iss: service_account.to_string(),
            sub: service_account.to_string(),
            aud: IDENTITY_TOOLKIT_AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            uid: uid.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}
