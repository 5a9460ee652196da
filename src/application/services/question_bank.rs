use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{CompletionParams, CompletionRequest, LlmClient};

use super::llm_json::parse_llm_json;
use super::question_selector::QuestionGenerationError;

pub const QUESTION_BANK_SIZE: usize = 10;

#[derive(Deserialize)]
struct QuestionBankResponse {
    #[serde(default)]
    questions: Vec<String>,
}

/// Generates a fixed-size list of questions for a skill in one call.
pub struct QuestionBank {
    llm_client: Arc<dyn LlmClient>,
    params: CompletionParams,
}

impl QuestionBank {
    pub fn new(llm_client: Arc<dyn LlmClient>, params: CompletionParams) -> Self {
        Self { llm_client, params }
    }

    #[tracing::instrument(skip(self))]
    pub async fn questions(&self, skill: &str) -> Result<Vec<String>, QuestionGenerationError> {
        let prompt = format!(
            "Generate {QUESTION_BANK_SIZE} technical interview questions for the skill: {skill}. \
             Return ONLY a JSON object with a single key \"questions\" holding an array of \
             question strings. No explanations, no markdown. \
             Example: {{\"questions\": [\"Question 1?\", \"Question 2?\"]}}"
        );
        let request = CompletionRequest::new(prompt, self.params);

        let content = self.llm_client.complete(&request).await?;
        let parsed: QuestionBankResponse = parse_llm_json(&content)
            .map_err(|e| QuestionGenerationError::MalformedResponse(e.to_string()))?;

        let questions: Vec<String> = parsed
            .questions
            .into_iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect();

        tracing::info!(count = questions.len(), "Question bank generated");

        Ok(questions)
    }
}
