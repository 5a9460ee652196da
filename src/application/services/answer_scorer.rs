use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{CompletionParams, CompletionRequest, LlmClient};
use crate::domain::{AnswerScore, MAX_SCORE};

use super::llm_json::parse_llm_json;

pub const NO_ANSWER_PLACEHOLDER: &str = "(candidate did not provide an answer)";
pub const SCORING_FALLBACK_FEEDBACK: &str = "Could not evaluate answer automatically.";
pub const MISSING_FEEDBACK: &str = "No feedback available.";

pub const DEFAULT_SCORING_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.3,
    max_tokens: 300,
};

#[derive(Deserialize)]
struct ScoringResponse {
    #[serde(default)]
    score: Option<Value>,
    #[serde(default)]
    feedback: Option<String>,
}

pub struct AnswerScorer {
    llm_client: Arc<dyn LlmClient>,
    params: CompletionParams,
}

impl AnswerScorer {
    pub fn new(llm_client: Arc<dyn LlmClient>, params: CompletionParams) -> Self {
        Self { llm_client, params }
    }

    /// Grades a transcript. Backend and parse failures fall back to a zero
    /// score with a fixed message instead of surfacing.
    #[tracing::instrument(skip_all)]
    pub async fn score(&self, question: &str, transcript: &str) -> AnswerScore {
        let prompt = build_scoring_prompt(question, transcript);
        let request = CompletionRequest::new(prompt, self.params);

        let content = match self.llm_client.complete(&request).await {
            Ok(content) => content,
            Err(e) => {
                tracing::error!(error = %e, "Scoring request failed");
                return fallback_score();
            }
        };

        match parse_llm_json::<ScoringResponse>(&content) {
            Ok(parsed) => {
                let score = parsed.score.as_ref().map(score_value).unwrap_or(0);
                let feedback = parsed
                    .feedback
                    .unwrap_or_else(|| MISSING_FEEDBACK.to_string());
                tracing::info!(score, "Answer scored");
                AnswerScore::new(score, feedback)
            }
            Err(e) => {
                tracing::error!(error = %e, "Scoring response was not valid JSON");
                fallback_score()
            }
        }
    }
}

pub fn build_scoring_prompt(question: &str, transcript: &str) -> String {
    let answer = if transcript.trim().is_empty() {
        NO_ANSWER_PLACEHOLDER
    } else {
        transcript
    };

    format!(
        "You are an expert technical interviewer grading a candidate's spoken answer.\n\n\
         Interview question: {question}\n\n\
         Candidate's answer (speech transcript): {answer}\n\n\
         Give a score from 0 to {max} weighing, in order of importance:\n\
         - Technical accuracy (most important)\n\
         - Completeness\n\
         - Clarity of explanation\n\n\
         Reply with a single JSON object and nothing else:\n\
         {{\"score\": <integer 0-{max}>, \"feedback\": \"<2-3 sentences of constructive feedback>\"}}",
        max = MAX_SCORE,
    )
}

fn score_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<f64>().map(|f| f.trunc() as i64).unwrap_or(0),
        _ => 0,
    }
}

fn fallback_score() -> AnswerScore {
    AnswerScore::new(0, SCORING_FALLBACK_FEEDBACK.to_string())
}
