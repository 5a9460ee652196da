use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::TokenIssuer;
use crate::domain::{
    AdaptiveQuestion, EvaluationResult, GrantRequest, MAX_SCORE, SessionGrant, TurnRecord,
    synthesize_identifier,
};

use super::answer_scorer::AnswerScorer;
use super::interview_error::InterviewError;
use super::question_bank::QuestionBank;
use super::question_selector::QuestionSelector;
use super::transcription_service::TranscriptionService;

pub const DEFAULT_LANGUAGE: &str = "english";

/// Optional identifiers supplied when a candidate opens an interview.
#[derive(Debug, Clone, Default)]
pub struct StartSessionRequest {
    pub profile_id: Option<String>,
    pub display_id: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken {
    pub token: String,
    pub ws_url: String,
}

/// Entry point for every interview workflow. Holds no per-interview state;
/// the client carries the turn history between calls.
pub struct InterviewService {
    token_issuer: Arc<dyn TokenIssuer>,
    transcription: TranscriptionService,
    scorer: AnswerScorer,
    selector: QuestionSelector,
    question_bank: QuestionBank,
    ws_url: String,
}

impl InterviewService {
    pub fn new(
        token_issuer: Arc<dyn TokenIssuer>,
        transcription: TranscriptionService,
        scorer: AnswerScorer,
        selector: QuestionSelector,
        question_bank: QuestionBank,
        ws_url: String,
    ) -> Self {
        Self {
            token_issuer,
            transcription,
            scorer,
            selector,
            question_bank,
            ws_url,
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn start_session(
        &self,
        request: StartSessionRequest,
    ) -> Result<SessionToken, InterviewError> {
        let now = Utc::now();
        let profile_id = request
            .profile_id
            .unwrap_or_else(|| synthesize_identifier("guest", now));
        let display_id = request
            .display_id
            .unwrap_or_else(|| synthesize_identifier("interview", now));
        let language = request
            .language
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let token = self.issue_grant(GrantRequest {
            room: Some(display_id),
            identity: Some(profile_id.clone()),
            name: Some(profile_id),
            metadata: Some(language),
            attributes: None,
        })?;

        Ok(SessionToken {
            token,
            ws_url: self.ws_url.clone(),
        })
    }

    pub fn issue_grant(&self, request: GrantRequest) -> Result<String, InterviewError> {
        let grant = SessionGrant::from_request(request, Utc::now());
        let token = self.token_issuer.issue(&grant)?;

        tracing::info!(
            room = %grant.room,
            identity = %grant.identity,
            expires_at = %grant.expires_at,
            "Session grant issued"
        );

        Ok(token)
    }

    #[tracing::instrument(skip(self, audio_data), fields(bytes = audio_data.len()))]
    pub async fn evaluate_answer(&self, question: &str, audio_data: &[u8]) -> EvaluationResult {
        let transcript = self.transcription.transcribe(audio_data).await;
        let score = self.scorer.score(question, &transcript).await;
        EvaluationResult::new(transcript, score)
    }

    pub async fn next_question(
        &self,
        skill: &str,
        question_number: u32,
        history: &[TurnRecord],
    ) -> Result<AdaptiveQuestion, InterviewError> {
        if let Some(score) = history
            .iter()
            .filter_map(|turn| turn.score)
            .find(|score| *score > MAX_SCORE)
        {
            return Err(InterviewError::Validation(format!(
                "score {} is outside 0-{}",
                score, MAX_SCORE
            )));
        }

        self.selector
            .next_question(skill, question_number, history)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Adaptive question generation failed");
                InterviewError::from(e)
            })
    }

    pub async fn questions(&self, skill: &str) -> Result<Vec<String>, InterviewError> {
        self.question_bank.questions(skill).await.map_err(|e| {
            tracing::error!(error = %e, "Question bank generation failed");
            InterviewError::from(e)
        })
    }
}
