use std::fmt::Write;
use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{CompletionParams, CompletionRequest, LlmClient, LlmClientError};
use crate::domain::{AdaptiveQuestion, ProficiencyBand, TurnRecord, average_score};

use super::llm_json::parse_llm_json;

pub const EMPTY_HISTORY_MARKER: &str = "None (first question)";

pub const DEFAULT_ADAPTIVE_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.7,
    max_tokens: 250,
};

#[derive(Deserialize)]
struct QuestionResponse {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
}

/// Picks the next interview question from the candidate's running average.
pub struct QuestionSelector {
    llm_client: Arc<dyn LlmClient>,
    params: CompletionParams,
}

impl QuestionSelector {
    pub fn new(llm_client: Arc<dyn LlmClient>, params: CompletionParams) -> Self {
        Self { llm_client, params }
    }

    #[tracing::instrument(skip(self, history), fields(history_len = history.len()))]
    pub async fn next_question(
        &self,
        skill: &str,
        question_number: u32,
        history: &[TurnRecord],
    ) -> Result<AdaptiveQuestion, QuestionGenerationError> {
        let avg_score = average_score(history);
        let band = ProficiencyBand::from_average(avg_score);

        tracing::debug!(avg_score, proficiency = %band, "Computed proficiency band");

        let prompt = build_adaptive_prompt(skill, question_number, history, band, avg_score);
        let request = CompletionRequest::new(prompt, self.params);

        let content = self.llm_client.complete(&request).await?;
        let parsed: QuestionResponse = parse_llm_json(&content)
            .map_err(|e| QuestionGenerationError::MalformedResponse(e.to_string()))?;

        let question = parsed
            .question
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .ok_or_else(|| {
                QuestionGenerationError::MalformedResponse("missing question field".to_string())
            })?;

        if history.iter().any(|turn| turn.question == question) {
            return Err(QuestionGenerationError::RepeatedQuestion);
        }

        let difficulty = parsed
            .difficulty
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| band.as_str().to_string());

        tracing::info!(difficulty = %difficulty, "Adaptive question generated");

        Ok(AdaptiveQuestion {
            question,
            difficulty,
            proficiency: band,
            avg_score,
        })
    }
}

pub fn render_history(history: &[TurnRecord]) -> String {
    if history.is_empty() {
        return format!("{}\n", EMPTY_HISTORY_MARKER);
    }

    let mut rendered = String::new();
    for turn in history {
        let score = turn
            .score
            .map(|s| format!("{}/10", s))
            .unwrap_or_else(|| "n/a".to_string());
        let _ = write!(rendered, "Q: {}\nScore: {}\n---\n", turn.question, score);
    }
    rendered
}

pub fn build_adaptive_prompt(
    skill: &str,
    question_number: u32,
    history: &[TurnRecord],
    band: ProficiencyBand,
    avg_score: f64,
) -> String {
    let difficulty = band.as_str();
    format!(
        "You are running an adaptive technical interview for the skill: {skill}.\n\n\
         Previous questions and scores:\n{history}\n\
         Current assessed proficiency: {difficulty} (avg score: {avg_score:.1}/10). \
         Question number: {question_number}.\n\n\
         Write ONE interview question at {difficulty} difficulty.\n\
         - advanced: {advanced}.\n\
         - intermediate: {intermediate}.\n\
         - beginner: {beginner}.\n\
         Do NOT repeat any previous question. Keep it natural and conversational.\n\n\
         Reply ONLY with this JSON (no markdown, no extra text):\n\
         {{\"question\": \"<the question>\", \"difficulty\": \"{difficulty}\"}}",
        history = render_history(history),
        advanced = ProficiencyBand::Advanced.guidance(),
        intermediate = ProficiencyBand::Intermediate.guidance(),
        beginner = ProficiencyBand::Beginner.guidance(),
    )
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionGenerationError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("model repeated a previous question")]
    RepeatedQuestion,
}
