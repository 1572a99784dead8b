//! Polarion work item stub.
//!
//! Synthesizes a fixed success record without contacting any Polarion
//! server. The fixed identifier and unconditional success are the entire
//! contract; there is no hidden integration behind this module.

use serde::Serialize;
use serde_json::Value;

use crate::validate::Payload;

/// Fixed identifier returned for every synthesized work item.
pub const WORK_ITEM_ID: &str = "POL-001";

/// Synthesized Polarion work item record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkItem {
    /// Always `"polarion"`.
    pub system: &'static str,
    /// Project identifier echoed from the request.
    #[serde(rename = "projectId")]
    pub project_id: Value,
    /// Title echoed from the request.
    pub title: Value,
    /// Always [`WORK_ITEM_ID`].
    pub id: &'static str,
    /// Always `"created"`.
    pub status: &'static str,
}

/// Synthesize a created work item record from a validated payload.
///
/// Pure function of its input: identical payloads yield identical records.
#[must_use]
pub fn create_work_item(data: &Payload) -> WorkItem {
    WorkItem {
        system: "polarion",
        project_id: data["projectId"].clone(),
        title: data["title"].clone(),
        id: WORK_ITEM_ID,
        status: "created",
    }
}
