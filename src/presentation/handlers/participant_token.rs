use std::collections::HashMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::GrantRequest;
use crate::presentation::state::AppState;

use super::error_response::internal_error;
use super::extract::ApiJson;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantTokenRequest {
    pub room_name: Option<String>,
    pub participant_identity: Option<String>,
    pub participant_name: Option<String>,
    pub participant_metadata: Option<String>,
    pub participant_attributes: Option<HashMap<String, String>>,
}

#[derive(Serialize)]
pub struct ParticipantTokenResponse {
    pub server_url: String,
    pub participant_token: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn participant_token_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ParticipantTokenRequest>,
) -> impl IntoResponse {
    let grant = GrantRequest {
        room: request.room_name,
        identity: request.participant_identity,
        name: request.participant_name,
        metadata: request.participant_metadata,
        attributes: request.participant_attributes,
    };

    match state.interview_service.issue_grant(grant) {
        Ok(participant_token) => (
            StatusCode::CREATED,
            Json(ParticipantTokenResponse {
                server_url: state.media_server_url.clone(),
                participant_token,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Participant token issuance failed");
            internal_error("Failed to generate token".to_string())
        }
    }
}
