//! Configuration for the gateway service.

use std::env;
use std::path::PathBuf;

/// Gateway configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    /// Path to the JSON credentials file.
    pub credentials_file: PathBuf,
    /// Jira defaults and fallback credentials.
    pub jira: JiraDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            credentials_file: env_nonempty("CREDENTIALS_FILE")
                .map_or_else(|| PathBuf::from("data/credentials.json"), PathBuf::from),
            jira: JiraDefaults::default(),
        }
    }
}

/// Jira defaults sourced from the environment.
///
/// `base_url`, `email`, and `api_token` are fallback credentials, used only
/// for fields the credential store has no saved value for.
#[derive(Debug, Clone)]
pub struct JiraDefaults {
    /// Default project key when the request carries none (`JIRA_PROJECT_KEY`).
    pub project_key: Option<String>,
    /// Default issue type name (`JIRA_ISSUE_TYPE`, default "Story").
    pub issue_type: String,
    /// Fallback instance base URL (`JIRA_BASE_URL`).
    pub base_url: Option<String>,
    /// Fallback account email (`JIRA_EMAIL`).
    pub email: Option<String>,
    /// Fallback API token (`JIRA_API_TOKEN`).
    pub api_token: Option<String>,
}

impl Default for JiraDefaults {
    fn default() -> Self {
        Self {
            project_key: env_nonempty("JIRA_PROJECT_KEY"),
            issue_type: env_nonempty("JIRA_ISSUE_TYPE").unwrap_or_else(|| "Story".to_string()),
            base_url: env_nonempty("JIRA_BASE_URL"),
            email: env_nonempty("JIRA_EMAIL"),
            api_token: env_nonempty("JIRA_API_TOKEN"),
        }
    }
}

/// Read an environment variable, treating empty strings as unset.
fn env_nonempty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}
