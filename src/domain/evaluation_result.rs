use serde::Serialize;

pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerScore {
    pub score: u8,
    pub feedback: String,
}

impl AnswerScore {
    pub fn new(score: i64, feedback: String) -> Self {
        Self {
            score: score.clamp(0, i64::from(MAX_SCORE)) as u8,
            feedback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub transcript: String,
    pub score: u8,
    pub feedback: String,
}

impl EvaluationResult {
    pub fn new(transcript: String, score: AnswerScore) -> Self {
        Self {
            transcript,
            score: score.score,
            feedback: score.feedback,
        }
    }
}
