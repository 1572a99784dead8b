//! HTTP routing layer for the gateway.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::Error;
use crate::store::CredentialStore;
use crate::trackers::jira::JiraClient;
use crate::trackers::{azure, polarion};
use crate::validate::validate_payload;

/// Shared application state.
///
/// Constructed once at startup and injected into the router; handle
/// lifecycles equal the process lifetime.
#[derive(Clone)]
pub struct AppState {
    /// Configuration.
    pub config: Config,
    /// Credential store handle.
    pub store: CredentialStore,
    /// Jira REST client.
    pub jira: JiraClient,
}

/// Build the HTTP router for the gateway.
///
/// No authentication is enforced on any endpoint; the service is expected
/// to sit behind a trusted boundary.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Test case creation endpoints
        .route("/create/jira", post(create_jira))
        .route("/create/polarion", post(create_polarion))
        .route("/create/azure", post(create_azure))
        // Credential management endpoints
        .route("/credentials/jira", post(save_jira_credentials))
        .route("/credentials/polarion", post(save_polarion_credentials))
        .route("/credentials/azure", post(save_azure_credentials))
        // Health check
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint. Never touches upstream systems.
async fn health_check(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
) -> Json<Value> {
    info!(remote = %remote, "Health check requested");
    let credential_store = state.store.available().await;
    Json(json!({ "status": "ok", "credentialStore": credential_store }))
}

/// Create a Jira issue, relaying the upstream status and body verbatim.
async fn create_jira(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, Error> {
    info!(remote = %remote, "Jira test case creation requested");
    let data = validate_payload(remote, &headers, &body, &["summary", "description"])?;

    let stored = state.store.load_system("jira").await?;
    let upstream = state
        .jira
        .create_issue(&data, &stored, &state.config.jira)
        .await?;

    let status =
        StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok((status, Json(upstream.body)).into_response())
}

/// Create a Polarion work item (stub).
async fn create_polarion(
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, Error> {
    info!(remote = %remote, "Polarion test case creation requested");
    let data = validate_payload(remote, &headers, &body, &["projectId", "title", "description"])?;

    let record = polarion::create_work_item(&data);
    info!(id = %record.id, "Polarion test case created");
    Ok((StatusCode::CREATED, Json(record)).into_response())
}

/// Create an Azure DevOps work item (stub).
async fn create_azure(
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, Error> {
    info!(remote = %remote, "Azure DevOps test case creation requested");
    let data = validate_payload(remote, &headers, &body, &["organization", "project", "title"])?;

    let record = azure::create_work_item(&data);
    info!(id = %record.id, "Azure DevOps test case created");
    Ok((StatusCode::CREATED, Json(record)).into_response())
}

async fn save_jira_credentials(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, Error> {
    save_credentials(
        &state,
        remote,
        &headers,
        &body,
        "jira",
        &["baseUrl", "email", "apiToken"],
    )
    .await
}

async fn save_polarion_credentials(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, Error> {
    save_credentials(
        &state,
        remote,
        &headers,
        &body,
        "polarion",
        &["baseUrl", "username", "password"],
    )
    .await
}

async fn save_azure_credentials(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, Error> {
    save_credentials(
        &state,
        remote,
        &headers,
        &body,
        "azure",
        &["organization", "personalAccessToken"],
    )
    .await
}

/// Validate and persist one system's credentials.
///
/// The whole validated object is stored, so fields beyond the required set
/// are kept. Completeness is only enforced when the credentials are used.
async fn save_credentials(
    state: &AppState,
    remote: SocketAddr,
    headers: &HeaderMap,
    body: &Bytes,
    system: &str,
    required: &[&str],
) -> Result<Json<Value>, Error> {
    info!(remote = %remote, system = %system, "Credential save requested");
    let data = validate_payload(remote, headers, body, required)?;

    state.store.save(system, data).await?;

    info!(system = %system, "Credentials saved");
    Ok(Json(json!({ "status": "saved", "system": system })))
}
