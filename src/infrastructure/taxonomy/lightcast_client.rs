use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::application::ports::{CredentialProvider, TaxonomyClient, TaxonomyError};

/// Skills and job-title lookups against the Lightcast Open APIs. Search
/// semantics belong to the upstream; this only authenticates and relays.
pub struct LightcastClient {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl LightcastClient {
    pub fn new(client: Client, base_url: String, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Appends `segments` to the base path. Each segment is percent-encoded,
    /// so ids carrying `/`, `?` or `#` stay inside their own segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TaxonomyError> {
        if segments.iter().any(|s| s.is_empty() || *s == "." || *s == "..") {
            return Err(TaxonomyError::ApiRequestFailed(
                "invalid path segment".to_string(),
            ));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TaxonomyError::ApiRequestFailed(format!("base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                TaxonomyError::ApiRequestFailed("base url cannot carry a path".to_string())
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Value, TaxonomyError> {
        let url = self.endpoint(segments)?;
        let token = self.credentials.access_token().await?;

        tracing::debug!(url = %url, "Querying taxonomy API");

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| TaxonomyError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TaxonomyError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TaxonomyError::InvalidResponse(e.to_string()))
    }
}

const SKILLS_PATH: [&str; 4] = ["skills", "versions", "latest", "skills"];
const TITLES_PATH: [&str; 4] = ["titles", "versions", "latest", "titles"];

#[async_trait]
impl TaxonomyClient for LightcastClient {
    async fn search_skills(&self, query: &str, limit: u32) -> Result<Value, TaxonomyError> {
        self.get(
            &SKILLS_PATH,
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn skill(&self, skill_id: &str) -> Result<Value, TaxonomyError> {
        self.get(&[&SKILLS_PATH[..], &[skill_id]].concat(), &[])
            .await
    }

    async fn search_occupations(&self, query: &str, limit: u32) -> Result<Value, TaxonomyError> {
        self.get(
            &TITLES_PATH,
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn occupation(&self, occupation_id: &str) -> Result<Value, TaxonomyError> {
        self.get(&[&TITLES_PATH[..], &[occupation_id]].concat(), &[])
            .await
    }
}
