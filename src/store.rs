//! File-backed credential store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;
use tracing::warn;

use crate::error::Result;

/// Flat field map holding one system's credentials.
pub type CredentialFields = Map<String, Value>;

/// Full credential record: integration-system name to field map.
pub type CredentialRecord = Map<String, Value>;

/// Credential store backed by a single JSON file on local disk.
///
/// Saves are read-modify-write over the whole file, so concurrent writers
/// to the same system are last-writer-wins. Credential writes are rare,
/// human-triggered operations, so no locking is used.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store handle for the given file path.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full credential record.
    ///
    /// A missing file yields an empty record. A file that does not parse
    /// as a JSON object also yields an empty record, with a warning, so a
    /// corrupt file never takes the service down.
    pub async fn load(&self) -> Result<CredentialRecord> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(record)) => Ok(record),
                Ok(_) | Err(_) => {
                    warn!(
                        path = %self.path.display(),
                        "Credentials file is not a JSON object, treating as empty"
                    );
                    Ok(Map::new())
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load the saved fields for one system. Unsaved systems yield an
    /// empty field map.
    pub async fn load_system(&self, system: &str) -> Result<CredentialFields> {
        let record = self.load().await?;
        Ok(match record.get(system) {
            Some(Value::Object(fields)) => fields.clone(),
            _ => Map::new(),
        })
    }

    /// Replace one system's field map, preserving sibling systems.
    ///
    /// Partial field maps are accepted; completeness is enforced only at
    /// the moment of use (issue creation).
    pub async fn save(&self, system: &str, fields: CredentialFields) -> Result<()> {
        let mut record = self.load().await?;
        record.insert(system.to_string(), Value::Object(fields));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(&Value::Object(record))?;
        fs::write(&self.path, content).await?;
        Ok(())
    }

    /// Whether the backing file exists or its directory can be created.
    /// Reported by the health endpoint; never reads credential contents.
    pub async fn available(&self) -> bool {
        if fs::metadata(&self.path).await.is_ok() {
            return true;
        }
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::metadata(parent).await.is_ok() || fs::create_dir_all(parent).await.is_ok()
            }
            _ => true,
        }
    }
}
