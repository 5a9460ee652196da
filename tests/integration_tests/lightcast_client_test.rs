use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use interview_orchestrator::application::ports::{
    CredentialError, CredentialProvider, TaxonomyClient, TaxonomyError,
};
use interview_orchestrator::infrastructure::taxonomy::LightcastClient;

use crate::helpers::start_mock_server;

struct CountingCredentials {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl CredentialProvider for CountingCredentials {
    async fn access_token(&self) -> Result<String, CredentialError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("cached-token".to_string())
    }
}

struct BrokenCredentials;

#[async_trait::async_trait]
impl CredentialProvider for BrokenCredentials {
    async fn access_token(&self) -> Result<String, CredentialError> {
        Err(CredentialError::MissingToken)
    }
}

fn bearer(headers: &HeaderMap) -> String {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn taxonomy_app() -> Router {
    Router::new()
        .route(
            "/skills/versions/latest/skills",
            get(
                |headers: HeaderMap, Query(q): Query<HashMap<String, String>>| async move {
                    Json(json!({ "auth": bearer(&headers), "q": q["q"], "limit": q["limit"] }))
                },
            ),
        )
        .route(
            "/skills/versions/latest/skills/{id}",
            get(|Path(id): Path<String>| async move { Json(json!({ "data": { "id": id } })) }),
        )
        .route(
            "/titles/versions/latest/titles",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                Json(json!({ "titles_for": q["q"] }))
            }),
        )
        .route(
            "/titles/versions/latest/titles/{id}",
            get(|| async { (StatusCode::NOT_FOUND, "no such title").into_response() }),
        )
}

#[tokio::test]
async fn given_skill_search_when_querying_then_sends_bearer_and_query_params() {
    let (base_url, shutdown_tx) = start_mock_server(taxonomy_app()).await;
    let credentials = Arc::new(CountingCredentials {
        calls: AtomicUsize::new(0),
    });
    let client = LightcastClient::new(reqwest::Client::new(), base_url, credentials.clone());

    let body = client.search_skills("rust lang", 5).await.unwrap();

    assert_eq!(body["auth"], "Bearer cached-token");
    assert_eq!(body["q"], "rust lang");
    assert_eq!(body["limit"], "5");
    assert_eq!(credentials.calls.load(Ordering::SeqCst), 1);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_skill_id_when_fetching_then_passes_upstream_json_through() {
    let (base_url, shutdown_tx) = start_mock_server(taxonomy_app()).await;
    let client = LightcastClient::new(
        reqwest::Client::new(),
        format!("{}/", base_url),
        Arc::new(CountingCredentials {
            calls: AtomicUsize::new(0),
        }),
    );

    let body = client.skill("KS120076FGP5WGWYMP0F").await.unwrap();

    assert_eq!(body["data"]["id"], "KS120076FGP5WGWYMP0F");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_id_with_reserved_characters_when_fetching_then_stays_one_path_segment() {
    let (base_url, shutdown_tx) = start_mock_server(taxonomy_app()).await;
    let client = LightcastClient::new(
        reqwest::Client::new(),
        base_url,
        Arc::new(CountingCredentials {
            calls: AtomicUsize::new(0),
        }),
    );

    let body = client.skill("KS1/../../admin?x=1#frag").await.unwrap();

    assert_eq!(body["data"]["id"], "KS1/../../admin?x=1#frag");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_dot_segment_id_when_fetching_then_rejects_before_authenticating() {
    let credentials = Arc::new(CountingCredentials {
        calls: AtomicUsize::new(0),
    });
    let client = LightcastClient::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9".to_string(),
        credentials.clone(),
    );

    let result = client.occupation("..").await;

    assert!(matches!(result, Err(TaxonomyError::ApiRequestFailed(_))));
    assert_eq!(credentials.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_occupation_search_when_querying_then_hits_titles_endpoint() {
    let (base_url, shutdown_tx) = start_mock_server(taxonomy_app()).await;
    let client = LightcastClient::new(
        reqwest::Client::new(),
        base_url,
        Arc::new(CountingCredentials {
            calls: AtomicUsize::new(0),
        }),
    );

    let body = client.search_occupations("engineer", 10).await.unwrap();

    assert_eq!(body["titles_for"], "engineer");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_upstream_not_found_when_fetching_occupation_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_server(taxonomy_app()).await;
    let client = LightcastClient::new(
        reqwest::Client::new(),
        base_url,
        Arc::new(CountingCredentials {
            calls: AtomicUsize::new(0),
        }),
    );

    let result = client.occupation("missing").await;

    assert!(matches!(result, Err(TaxonomyError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_credential_failure_when_querying_then_surfaces_credential_error() {
    let client = LightcastClient::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9".to_string(),
        Arc::new(BrokenCredentials),
    );

    let result = client.search_skills("rust", 10).await;

    assert!(matches!(result, Err(TaxonomyError::Credentials(_))));
}
