use axum::Json;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::Response;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::application::services::InterviewError;

use super::error_response::internal_error;

const AUDIO_FIELDS: [&str; 3] = ["file", "audio", "audioData"];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerPayload {
    question: String,
    audio_data: String,
}

/// A spoken answer, accepted either as JSON with base64 audio or as a
/// multipart upload with a `question` field and an audio file.
#[derive(Debug)]
pub struct AnswerSubmission {
    pub question: String,
    pub audio: Vec<u8>,
}

impl<S> FromRequest<S> for AnswerSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let submission = if is_multipart {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => from_multipart(multipart).await,
                Err(e) => Err(InterviewError::Validation(e.body_text())),
            }
        } else {
            match Json::<AnswerPayload>::from_request(req, state).await {
                Ok(Json(payload)) => from_json(payload),
                Err(e) => Err(InterviewError::Validation(e.body_text())),
            }
        };

        submission.map_err(|e| {
            tracing::warn!(error = %e, "Rejected answer submission");
            internal_error(format!("Failed to evaluate answer: {}", e))
        })
    }
}

fn from_json(payload: AnswerPayload) -> Result<AnswerSubmission, InterviewError> {
    Ok(AnswerSubmission {
        question: payload.question,
        audio: decode_audio(&payload.audio_data)?,
    })
}

async fn from_multipart(mut multipart: Multipart) -> Result<AnswerSubmission, InterviewError> {
    let mut question = None;
    let mut audio = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| InterviewError::Validation(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "question" {
            question = Some(
                field
                    .text()
                    .await
                    .map_err(|e| InterviewError::Validation(e.body_text()))?,
            );
        } else if AUDIO_FIELDS.contains(&name.as_str()) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| InterviewError::Validation(e.body_text()))?;
            audio = Some(bytes.to_vec());
        }
    }

    Ok(AnswerSubmission {
        question: question
            .ok_or_else(|| InterviewError::Validation("missing question field".to_string()))?,
        audio: audio
            .ok_or_else(|| InterviewError::Validation("missing audio file".to_string()))?,
    })
}

/// Decodes standard base64, tolerating a leading `data:<mime>;base64,` prefix.
pub fn decode_audio(encoded: &str) -> Result<Vec<u8>, InterviewError> {
    let trimmed = encoded.trim();
    let data = match trimmed.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .unwrap_or(rest),
        None => trimmed,
    };

    STANDARD
        .decode(data)
        .map_err(|_| InterviewError::Validation("audioData is not valid base64".to_string()))
}
