use crate::domain::SessionGrant;

/// Turns a grant into a signed, self-contained token.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, grant: &SessionGrant) -> Result<String, TokenIssuerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenIssuerError {
    #[error("signing secret is not configured")]
    MissingSecret,
    #[error("signing failed: {0}")]
    SigningFailed(String),
    #[error("invalid token: {0}")]
    InvalidToken(String),
}
