use async_trait::async_trait;

/// Source of a shared bearer token for an upstream API.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, CredentialError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("token exchange failed: {0}")]
    ExchangeFailed(String),
    #[error("token response did not contain an access token")]
    MissingToken,
}
