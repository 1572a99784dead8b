//! Issue-tracking system adapters.
//!
//! ## Live
//!
//! - **Jira** — issue creation via the REST v2 API with Basic auth
//!
//! ## Stubs
//!
//! - **Polarion** — synthesizes a fixed work item record
//! - **Azure DevOps** — synthesizes a fixed work item record
//!
//! The stub adapters never contact an external service; the fixed
//! identifier and unconditional success are their entire contract.

pub mod azure;
pub mod jira;
pub mod polarion;

pub use jira::JiraClient;
