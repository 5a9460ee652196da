use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::StartSessionRequest;
use crate::domain::{ProficiencyBand, TurnRecord};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::answer_submission::AnswerSubmission;
use super::error_response::internal_error;
use super::extract::ApiJson;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewTokenRequest {
    pub student_profile_id: Option<String>,
    pub interview_display_id: Option<String>,
    pub language: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewTokenResponse {
    pub token: String,
    pub ws_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveQuestionRequest {
    #[serde(default)]
    pub skill: String,
    #[serde(default = "first_question")]
    pub question_number: u32,
    #[serde(default)]
    pub previous_results: Vec<TurnRecord>,
}

fn first_question() -> u32 {
    1
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveQuestionResponse {
    pub question: String,
    pub difficulty: String,
    pub proficiency: ProficiencyBand,
    pub avg_score: f64,
}

#[derive(Serialize)]
pub struct EvaluationResponse {
    pub transcript: String,
    pub score: u8,
    pub feedback: String,
}

#[derive(Deserialize)]
pub struct QuestionsRequest {
    pub skill: String,
}

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn interview_token_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<InterviewTokenRequest>,
) -> impl IntoResponse {
    let start = StartSessionRequest {
        profile_id: request.student_profile_id,
        display_id: request.interview_display_id,
        language: request.language,
    };

    match state.interview_service.start_session(start) {
        Ok(session) => (
            StatusCode::OK,
            Json(InterviewTokenResponse {
                token: session.token,
                ws_url: session.ws_url,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Interview token issuance failed");
            internal_error(format!("Failed to get interview token: {}", e))
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn adaptive_question_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AdaptiveQuestionRequest>,
) -> impl IntoResponse {
    tracing::debug!(
        skill = %sanitize_for_log(&request.skill),
        question_number = request.question_number,
        previous = request.previous_results.len(),
        "Selecting adaptive question"
    );

    match state
        .interview_service
        .next_question(
            &request.skill,
            request.question_number,
            &request.previous_results,
        )
        .await
    {
        Ok(next) => (
            StatusCode::OK,
            Json(AdaptiveQuestionResponse {
                question: next.question,
                difficulty: next.difficulty,
                proficiency: next.proficiency,
                avg_score: next.avg_score,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Adaptive question failed");
            internal_error(format!("Failed to get adaptive question: {}", e))
        }
    }
}

#[tracing::instrument(skip(state, submission))]
pub async fn answer_handler(
    State(state): State<AppState>,
    submission: AnswerSubmission,
) -> impl IntoResponse {
    tracing::debug!(
        question = %sanitize_for_log(&submission.question),
        audio_bytes = submission.audio.len(),
        "Evaluating answer"
    );

    let result = state
        .interview_service
        .evaluate_answer(&submission.question, &submission.audio)
        .await;

    tracing::info!(
        score = result.score,
        transcript = %sanitize_for_log(&result.transcript),
        "Answer evaluated"
    );

    (
        StatusCode::OK,
        Json(EvaluationResponse {
            transcript: result.transcript,
            score: result.score,
            feedback: result.feedback,
        }),
    )
}

#[tracing::instrument(skip(state, request))]
pub async fn questions_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuestionsRequest>,
) -> impl IntoResponse {
    match state.interview_service.questions(&request.skill).await {
        Ok(questions) => (StatusCode::OK, Json(QuestionsResponse { questions })).into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Question bank failed");
            internal_error(format!("Failed to generate questions: {}", e))
        }
    }
}
