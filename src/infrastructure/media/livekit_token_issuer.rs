use std::collections::HashMap;

use chrono::DateTime;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{TokenIssuer, TokenIssuerError};
use crate::domain::{Capabilities, SessionGrant};
use crate::presentation::config::MediaSettings;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoGrant {
    room_join: bool,
    room: String,
    can_publish: bool,
    can_subscribe: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct GrantClaims {
    iss: String,
    sub: String,
    name: String,
    video: VideoGrant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attributes: Option<HashMap<String, String>>,
    iat: i64,
    exp: i64,
}

/// Signs room grants as HS256 JWTs in the LiveKit access-token layout.
pub struct LiveKitTokenIssuer {
    api_key: String,
    api_secret: String,
}

impl LiveKitTokenIssuer {
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret,
        }
    }

    pub fn from_settings(settings: &MediaSettings) -> Self {
        Self::new(settings.api_key.clone(), settings.api_secret.clone())
    }

    fn secret(&self) -> Result<&[u8], TokenIssuerError> {
        if self.api_secret.trim().is_empty() {
            return Err(TokenIssuerError::MissingSecret);
        }
        Ok(self.api_secret.as_bytes())
    }

    /// Verifies a token signed by this issuer and returns the grant it carries.
    pub fn decode(&self, token: &str) -> Result<SessionGrant, TokenIssuerError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.api_key]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let data = decode::<GrantClaims>(
            token,
            &DecodingKey::from_secret(self.secret()?),
            &validation,
        )
        .map_err(|e| TokenIssuerError::InvalidToken(e.to_string()))?;
        let claims = data.claims;

        let issued_at = DateTime::from_timestamp(claims.iat, 0)
            .ok_or_else(|| TokenIssuerError::InvalidToken("iat out of range".to_string()))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| TokenIssuerError::InvalidToken("exp out of range".to_string()))?;

        Ok(SessionGrant {
            identity: claims.sub,
            name: claims.name,
            room: claims.video.room,
            capabilities: Capabilities {
                join: claims.video.room_join,
                publish: claims.video.can_publish,
                subscribe: claims.video.can_subscribe,
            },
            metadata: claims.metadata,
            attributes: claims.attributes,
            issued_at,
            expires_at,
        })
    }
}

impl TokenIssuer for LiveKitTokenIssuer {
    fn issue(&self, grant: &SessionGrant) -> Result<String, TokenIssuerError> {
        let claims = GrantClaims {
            iss: self.api_key.clone(),
            sub: grant.identity.clone(),
            name: grant.name.clone(),
            video: VideoGrant {
                room_join: grant.capabilities.join,
                room: grant.room.clone(),
                can_publish: grant.capabilities.publish,
                can_subscribe: grant.capabilities.subscribe,
            },
            metadata: grant.metadata.clone(),
            attributes: grant.attributes.clone(),
            iat: grant.issued_at.timestamp(),
            exp: grant.expires_at.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret()?),
        )
        .map_err(|e| TokenIssuerError::SigningFailed(e.to_string()))
    }
}
