use async_trait::async_trait;
use serde_json::Value;

use super::CredentialError;

#[async_trait]
pub trait TaxonomyClient: Send + Sync {
    async fn search_skills(&self, query: &str, limit: u32) -> Result<Value, TaxonomyError>;
    async fn skill(&self, skill_id: &str) -> Result<Value, TaxonomyError>;
    async fn search_occupations(&self, query: &str, limit: u32) -> Result<Value, TaxonomyError>;
    async fn occupation(&self, occupation_id: &str) -> Result<Value, TaxonomyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("credentials: {0}")]
    Credentials(#[from] CredentialError),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
