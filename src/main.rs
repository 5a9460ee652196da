use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use interview_orchestrator::application::ports::{
    CompletionParams, CredentialProvider, LlmClient, TaxonomyClient, TranscriptionEngine,
};
use interview_orchestrator::application::services::{
    AnswerScorer, InterviewService, QuestionBank, QuestionSelector, TranscriptionService,
};
use interview_orchestrator::infrastructure::audio::WhisperEngine;
use interview_orchestrator::infrastructure::build_http_client;
use interview_orchestrator::infrastructure::credentials::{
    OAuthClientCredentials, OAuthCredentialCache,
};
use interview_orchestrator::infrastructure::llm::{ChatCompletionClient, DEFAULT_LLM_BASE_URL};
use interview_orchestrator::infrastructure::media::LiveKitTokenIssuer;
use interview_orchestrator::infrastructure::observability::{TracingConfig, init_tracing};
use interview_orchestrator::infrastructure::taxonomy::LightcastClient;
use interview_orchestrator::presentation::config::SamplingSettings;
use interview_orchestrator::presentation::{AppState, Environment, Settings, create_router};

fn params(sampling: SamplingSettings) -> CompletionParams {
    CompletionParams {
        temperature: sampling.temperature,
        max_tokens: sampling.max_tokens,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let http_client = build_http_client(&settings.http).context("Failed to build HTTP client")?;

    let llm_client: Arc<dyn LlmClient> = Arc::new(ChatCompletionClient::from_settings(
        http_client.clone(),
        &settings.llm,
    ));

    let transcription_engine: Arc<dyn TranscriptionEngine> = Arc::new(WhisperEngine::new(
        http_client.clone(),
        settings
            .transcription
            .api_key
            .clone()
            .unwrap_or_else(|| settings.llm.api_key.clone()),
        settings
            .transcription
            .base_url
            .clone()
            .or_else(|| settings.llm.base_url.clone())
            .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
        settings.transcription.model.clone(),
    ));

    let question_bank_params = CompletionParams {
        temperature: settings.llm.temperature,
        max_tokens: settings.llm.max_tokens,
    };

    let interview_service = Arc::new(InterviewService::new(
        Arc::new(LiveKitTokenIssuer::from_settings(&settings.media)),
        TranscriptionService::new(transcription_engine),
        AnswerScorer::new(
            Arc::clone(&llm_client),
            params(settings.interview.scoring),
        ),
        QuestionSelector::new(
            Arc::clone(&llm_client),
            params(settings.interview.adaptive),
        ),
        QuestionBank::new(Arc::clone(&llm_client), question_bank_params),
        settings.media.ws_url.clone(),
    ));

    let credentials: Arc<dyn CredentialProvider> = Arc::new(OAuthCredentialCache::new(
        http_client.clone(),
        OAuthClientCredentials::from_settings(&settings.taxonomy),
    ));
    let taxonomy_client: Arc<dyn TaxonomyClient> = Arc::new(LightcastClient::new(
        http_client,
        settings.taxonomy.base_url.clone(),
        credentials,
    ));

    let state = AppState {
        interview_service,
        taxonomy_client,
        media_server_url: settings.media.server_url.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        %addr,
        request_timeout_seconds = settings.http.request_timeout_seconds,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
