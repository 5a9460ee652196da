use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    adaptive_question_handler, answer_handler, health_handler, interview_token_handler,
    occupation_handler, participant_token_handler, questions_handler, search_occupations_handler,
    search_skills_handler, skill_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let interview = Router::new()
        .route("/token", post(interview_token_handler))
        .route("/adaptive-question", post(adaptive_question_handler))
        .route("/answer", post(answer_handler))
        .route("/questions", post(questions_handler));

    let taxonomy = Router::new()
        .route("/skills", get(search_skills_handler))
        .route("/skills/{id}", get(skill_handler))
        .route("/occupations", get(search_occupations_handler))
        .route("/occupations/{id}", get(occupation_handler));

    Router::new()
        .route("/health", get(health_handler))
        .route("/token", post(participant_token_handler))
        .nest("/interview", interview)
        .nest("/taxonomy", taxonomy)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
