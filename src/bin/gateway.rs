//! ALM gateway service binary.
//!
//! Standalone HTTP service that accepts test-case-creation requests and
//! forwards them to external issue-tracking systems.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use alm_gateway::config::Config;
use alm_gateway::server::{self, AppState};
use alm_gateway::store::CredentialStore;
use alm_gateway::trackers::JiraClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("alm_gateway=info".parse()?))
        .init();

    info!("Starting ALM gateway service...");

    // Load configuration
    let config = Config::default();

    if config.jira.base_url.is_none() {
        warn!("No JIRA_BASE_URL configured - Jira calls will rely on stored credentials");
    }
    if config.jira.project_key.is_none() {
        info!("No JIRA_PROJECT_KEY configured - requests must carry an explicit projectKey");
    }

    // Initialize credential store
    let store = CredentialStore::new(&config.credentials_file);
    info!(path = %config.credentials_file.display(), "Credential store configured");

    // Initialize Jira client
    let jira = JiraClient::new();

    // Build application state
    let state = AppState {
        config: config.clone(),
        store,
        jira,
    };

    // Build router
    let app = server::build_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(port = config.port, "ALM gateway listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
