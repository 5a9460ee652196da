mod answer_submission;
mod error_response;
mod extract;
mod health;
mod interview;
mod participant_token;
mod taxonomy;

pub use answer_submission::{AnswerSubmission, decode_audio};
pub use error_response::{ErrorResponse, internal_error};
pub use extract::{ApiJson, ApiQuery};
pub use health::health_handler;
pub use interview::{
    adaptive_question_handler, answer_handler, interview_token_handler, questions_handler,
};
pub use participant_token::participant_token_handler;
pub use taxonomy::{
    DEFAULT_SEARCH_LIMIT, occupation_handler, search_occupations_handler, search_skills_handler,
    skill_handler,
};
