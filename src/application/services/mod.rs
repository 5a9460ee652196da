mod answer_scorer;
mod interview_error;
mod interview_service;
mod llm_json;
mod question_bank;
mod question_selector;
mod transcription_service;

pub use answer_scorer::{
    AnswerScorer, DEFAULT_SCORING_PARAMS, MISSING_FEEDBACK, NO_ANSWER_PLACEHOLDER,
    SCORING_FALLBACK_FEEDBACK, build_scoring_prompt,
};
pub use interview_error::InterviewError;
pub use interview_service::{
    DEFAULT_LANGUAGE, InterviewService, SessionToken, StartSessionRequest,
};
pub use llm_json::{parse_llm_json, strip_code_fences};
pub use question_bank::{QUESTION_BANK_SIZE, QuestionBank};
pub use question_selector::{
    DEFAULT_ADAPTIVE_PARAMS, EMPTY_HISTORY_MARKER, QuestionGenerationError, QuestionSelector,
    build_adaptive_prompt, render_history,
};
pub use transcription_service::TranscriptionService;
