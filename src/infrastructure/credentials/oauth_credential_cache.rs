use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::application::ports::{CredentialError, CredentialProvider};
use crate::presentation::config::TaxonomySettings;

pub const DEFAULT_SCOPE: &str = "emsi_open";
pub const DEFAULT_REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct OAuthClientCredentials {
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
    /// Lifetime assumed when the token endpoint omits `expires_in`.
    pub default_ttl: Duration,
    pub refresh_margin: Duration,
}

impl OAuthClientCredentials {
    pub fn from_settings(settings: &TaxonomySettings) -> Self {
        Self {
            token_url: settings.token_url.clone(),
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            scope: settings.scope.clone(),
            default_ttl: Duration::from_secs(settings.token_ttl_seconds),
            refresh_margin: Duration::from_secs(settings.refresh_margin_seconds),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

struct CachedCredential {
    token: String,
    expires_at: Instant,
}

impl CachedCredential {
    fn is_fresh(&self, margin: Duration) -> bool {
        self.expires_at
            .checked_sub(margin)
            .is_some_and(|refresh_at| Instant::now() < refresh_at)
    }
}

/// Process-wide client-credentials token. The lock is held across the
/// exchange, so callers arriving during a refresh wait for its result
/// instead of starting their own.
pub struct OAuthCredentialCache {
    client: Client,
    credentials: OAuthClientCredentials,
    cached: Mutex<Option<CachedCredential>>,
}

impl OAuthCredentialCache {
    pub fn new(client: Client, credentials: OAuthClientCredentials) -> Self {
        Self {
            client,
            credentials,
            cached: Mutex::new(None),
        }
    }

    async fn exchange(&self) -> Result<CachedCredential, CredentialError> {
        let form = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("grant_type", "client_credentials"),
            ("scope", self.credentials.scope.as_str()),
        ];

        let response = self
            .client
            .post(&self.credentials.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| CredentialError::ExchangeFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CredentialError::ExchangeFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| CredentialError::ExchangeFailed(format!("parse response: {}", e)))?;

        let token = token_response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(CredentialError::MissingToken)?;
        let ttl = token_response
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(self.credentials.default_ttl);

        let now = Instant::now();
        let expires_at = match now.checked_add(ttl) {
            Some(expires_at) => expires_at,
            None => {
                tracing::warn!(
                    ttl_seconds = ttl.as_secs(),
                    "Token lifetime out of range, using configured TTL"
                );
                now.checked_add(self.credentials.default_ttl).unwrap_or(now)
            }
        };

        tracing::info!(ttl_seconds = ttl.as_secs(), "Access token refreshed");

        Ok(CachedCredential { token, expires_at })
    }
}

#[async_trait]
impl CredentialProvider for OAuthCredentialCache {
    async fn access_token(&self) -> Result<String, CredentialError> {
        let mut cached = self.cached.lock().await;

        if let Some(entry) = cached
            .as_ref()
            .filter(|entry| entry.is_fresh(self.credentials.refresh_margin))
        {
            return Ok(entry.token.clone());
        }

        let fresh = self.exchange().await.inspect_err(|e| {
            tracing::error!(error = %e, "Access token exchange failed");
        })?;
        let token = fresh.token.clone();
        *cached = Some(fresh);

        Ok(token)
    }
}
