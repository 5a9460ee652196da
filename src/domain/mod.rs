mod adaptive_question;
mod evaluation_result;
mod proficiency_band;
mod session_grant;
mod turn_record;

pub use adaptive_question::AdaptiveQuestion;
pub use evaluation_result::{AnswerScore, EvaluationResult, MAX_SCORE};
pub use proficiency_band::{ADVANCED_THRESHOLD, INTERMEDIATE_THRESHOLD, ProficiencyBand};
pub use session_grant::{
    Capabilities, DEFAULT_PARTICIPANT_NAME, GRANT_TTL_HOURS, GrantRequest, SessionGrant,
    synthesize_identifier,
};
pub use turn_record::{NEUTRAL_SCORE, TurnRecord, average_score};
