//! HTTP gateway that forwards test-case-creation requests to external
//! issue-tracking (ALM) systems.
//!
//! This crate provides:
//! - Axum HTTP server exposing test-case-creation and credential endpoints
//! - Jira adapter for issue creation via the REST v2 API with Basic auth
//! - Stub adapters for Polarion and Azure DevOps
//! - File-backed credential store (one JSON document, per-system field maps)
//! - Request payload validation with full missing-field reporting

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Many async API methods can fail

pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod trackers;
pub mod validate;

pub use config::Config;
pub use error::Error;
pub use store::CredentialStore;
pub use trackers::JiraClient;
