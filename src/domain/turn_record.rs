use serde::{Deserialize, Serialize};

/// Score assumed when no prior turn carries one.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// One completed exchange as reported back by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub question: String,
    #[serde(default)]
    pub score: Option<u8>,
}

impl TurnRecord {
    pub fn new(question: impl Into<String>, score: Option<u8>) -> Self {
        Self {
            question: question.into(),
            score,
        }
    }
}

/// Mean of the scores present in `history`. Unscored turns are skipped,
/// not counted as zero.
pub fn average_score(history: &[TurnRecord]) -> f64 {
    let scores: Vec<f64> = history
        .iter()
        .filter_map(|turn| turn.score)
        .map(f64::from)
        .collect();

    if scores.is_empty() {
        return NEUTRAL_SCORE;
    }

    scores.iter().sum::<f64>() / scores.len() as f64
}
