use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use interview_orchestrator::application::ports::{CredentialError, CredentialProvider};
use interview_orchestrator::infrastructure::credentials::{
    DEFAULT_REFRESH_MARGIN, DEFAULT_SCOPE, OAuthClientCredentials, OAuthCredentialCache,
};

use crate::helpers::start_mock_server;

#[derive(Clone)]
struct TokenEndpoint {
    calls: Arc<AtomicUsize>,
    expires_in: Option<u64>,
    delay: Duration,
}

async fn issue_token(
    State(endpoint): State<TokenEndpoint>,
    Form(form): Form<std::collections::HashMap<String, String>>,
) -> impl IntoResponse {
    let call = endpoint.calls.fetch_add(1, Ordering::SeqCst) + 1;
    tokio::time::sleep(endpoint.delay).await;

    if form.get("grant_type").map(String::as_str) != Some("client_credentials")
        || form.get("scope").map(String::as_str) != Some(DEFAULT_SCOPE)
        || form.get("client_id").map(String::as_str) != Some("client")
    {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let mut body = json!({ "access_token": format!("token-{}", call) });
    if let Some(expires_in) = endpoint.expires_in {
        body["expires_in"] = json!(expires_in);
    }
    Json(body).into_response()
}

async fn start_token_endpoint(
    expires_in: Option<u64>,
    delay: Duration,
) -> (String, Arc<AtomicUsize>, tokio::sync::oneshot::Sender<()>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/connect/token", post(issue_token))
        .with_state(TokenEndpoint {
            calls: Arc::clone(&calls),
            expires_in,
            delay,
        });
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    (format!("{}/connect/token", base_url), calls, shutdown_tx)
}

fn cache(token_url: String, default_ttl: Duration) -> OAuthCredentialCache {
    OAuthCredentialCache::new(
        reqwest::Client::new(),
        OAuthClientCredentials {
            token_url,
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            default_ttl,
            refresh_margin: DEFAULT_REFRESH_MARGIN,
        },
    )
}

#[tokio::test]
async fn given_cold_cache_when_many_callers_race_then_exactly_one_exchange_happens() {
    let (token_url, calls, shutdown_tx) =
        start_token_endpoint(Some(3600), Duration::from_millis(100)).await;
    let cache = Arc::new(cache(token_url, Duration::from_secs(3600)));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.access_token().await })
        })
        .collect();
    let tokens: Vec<String> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(tokens.iter().all(|t| t == "token-1"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_token_outside_margin_when_called_again_then_no_network_call() {
    let (token_url, calls, shutdown_tx) = start_token_endpoint(Some(3600), Duration::ZERO).await;
    let cache = cache(token_url, Duration::from_secs(3600));

    let first = cache.access_token().await.unwrap();
    let second = cache.access_token().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_token_inside_margin_when_called_again_then_refreshes_once() {
    let (token_url, calls, shutdown_tx) = start_token_endpoint(Some(30), Duration::ZERO).await;
    let cache = cache(token_url, Duration::from_secs(3600));

    let first = cache.access_token().await.unwrap();
    let second = cache.access_token().await.unwrap();

    assert_eq!(first, "token-1");
    assert_eq!(second, "token-2");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_expiry_when_exchanging_then_uses_configured_ttl() {
    let (token_url, calls, shutdown_tx) = start_token_endpoint(None, Duration::ZERO).await;
    let cache = cache(token_url, Duration::from_secs(3600));

    cache.access_token().await.unwrap();
    cache.access_token().await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unrepresentable_expiry_when_exchanging_then_falls_back_to_configured_ttl() {
    let (token_url, calls, shutdown_tx) =
        start_token_endpoint(Some(u64::MAX), Duration::ZERO).await;
    let cache = Arc::new(cache(token_url, Duration::from_secs(3600)));

    let first = tokio::spawn({
        let cache = Arc::clone(&cache);
        async move { cache.access_token().await }
    })
    .await;
    let second = cache.access_token().await.unwrap();

    assert!(first.is_ok());
    assert_eq!(first.unwrap().unwrap(), "token-1");
    assert_eq!(second, "token-1");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_access_token_when_exchanging_then_fails() {
    let app = Router::new().route(
        "/connect/token",
        post(|| async { Json(json!({ "expires_in": 3600 })) }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let cache = cache(format!("{}/connect/token", base_url), Duration::from_secs(3600));

    let result = cache.access_token().await;

    assert!(matches!(result, Err(CredentialError::MissingToken)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_token_endpoint_rejects_when_exchanging_then_fails() {
    let app = Router::new().route(
        "/connect/token",
        post(|| async { (StatusCode::UNAUTHORIZED, "invalid_client") }),
    );
    let (base_url, shutdown_tx) = start_mock_server(app).await;
    let cache = cache(format!("{}/connect/token", base_url), Duration::from_secs(3600));

    let result = cache.access_token().await;

    assert!(matches!(result, Err(CredentialError::ExchangeFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_endpoint_when_exchanging_then_fails() {
    let cache = cache(
        "http://127.0.0.1:9/connect/token".to_string(),
        Duration::from_secs(3600),
    );

    let result = cache.access_token().await;

    assert!(matches!(result, Err(CredentialError::ExchangeFailed(_))));
}
