use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

pub const GRANT_TTL_HOURS: i64 = 6;
pub const DEFAULT_PARTICIPANT_NAME: &str = "User";

/// What a participant may do inside the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub join: bool,
    pub publish: bool,
    pub subscribe: bool,
}

impl Capabilities {
    pub fn participant() -> Self {
        Self {
            join: true,
            publish: true,
            subscribe: true,
        }
    }
}

/// Caller-supplied fields for a grant. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrantRequest {
    pub room: Option<String>,
    pub identity: Option<String>,
    pub name: Option<String>,
    pub metadata: Option<String>,
    pub attributes: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionGrant {
    pub identity: String,
    pub name: String,
    pub room: String,
    pub capabilities: Capabilities,
    pub metadata: Option<String>,
    pub attributes: Option<HashMap<String, String>>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionGrant {
    /// Fills omitted identifiers and stamps the grant with a second-precision
    /// issue time and the fixed TTL.
    pub fn from_request(request: GrantRequest, now: DateTime<Utc>) -> Self {
        let issued_at = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
        let room = request
            .room
            .unwrap_or_else(|| synthesize_identifier("room", issued_at));
        let identity = request
            .identity
            .unwrap_or_else(|| synthesize_identifier("user", issued_at));
        let name = request
            .name
            .unwrap_or_else(|| DEFAULT_PARTICIPANT_NAME.to_string());

        Self {
            identity,
            name,
            room,
            capabilities: Capabilities::participant(),
            metadata: request.metadata,
            attributes: request.attributes,
            issued_at,
            expires_at: issued_at + Duration::hours(GRANT_TTL_HOURS),
        }
    }
}

/// Builds `<kind>-<unix-seconds>`. Two calls within the same second collide.
pub fn synthesize_identifier(kind: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}", kind, now.timestamp())
}
