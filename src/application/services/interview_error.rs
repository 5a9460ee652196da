use crate::application::ports::{CredentialError, LlmClientError, TokenIssuerError};

use super::question_selector::QuestionGenerationError;

/// Errors surfaced by the interview workflows. Display strings are safe to
/// return to callers; upstream detail stays in the Debug form and in logs.
#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("upstream service unavailable")]
    UpstreamUnavailable(String),
    #[error("upstream service returned an unusable response")]
    UpstreamMalformedResponse(String),
    #[error("credential exchange failed")]
    CredentialExchange(#[from] CredentialError),
    #[error("token signing is misconfigured")]
    Signing(#[from] TokenIssuerError),
    #[error("invalid request: {0}")]
    Validation(String),
}

impl From<LlmClientError> for InterviewError {
    fn from(e: LlmClientError) -> Self {
        match e {
            LlmClientError::InvalidResponse(detail) => {
                InterviewError::UpstreamMalformedResponse(detail)
            }
            other => InterviewError::UpstreamUnavailable(other.to_string()),
        }
    }
}

impl From<QuestionGenerationError> for InterviewError {
    fn from(e: QuestionGenerationError) -> Self {
        match e {
            QuestionGenerationError::Completion(inner) => inner.into(),
            other => InterviewError::UpstreamMalformedResponse(other.to_string()),
        }
    }
}
