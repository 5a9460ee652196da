use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::TaxonomyError;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::error_response::internal_error;
use super::extract::ApiQuery;

pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}

pub async fn search_skills_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Response {
    tracing::debug!(q = %sanitize_for_log(&params.q), limit = params.limit, "Skill search");
    respond(
        state
            .taxonomy_client
            .search_skills(&params.q, params.limit)
            .await,
    )
}

pub async fn skill_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    respond(state.taxonomy_client.skill(&id).await)
}

pub async fn search_occupations_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Response {
    tracing::debug!(q = %sanitize_for_log(&params.q), limit = params.limit, "Occupation search");
    respond(
        state
            .taxonomy_client
            .search_occupations(&params.q, params.limit)
            .await,
    )
}

pub async fn occupation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    respond(state.taxonomy_client.occupation(&id).await)
}

fn respond(result: Result<Value, TaxonomyError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Taxonomy lookup failed");
            let reason = match e {
                TaxonomyError::Credentials(_) => "credential exchange failed",
                TaxonomyError::ApiRequestFailed(_) => "upstream service unavailable",
                TaxonomyError::InvalidResponse(_) => {
                    "upstream service returned an unusable response"
                }
            };
            internal_error(format!("Taxonomy lookup failed: {}", reason))
        }
    }
}
