//! Azure DevOps work item stub.
//!
//! Synthesizes a fixed success record without contacting Azure DevOps. The
//! fixed identifier and unconditional success are the entire contract;
//! there is no hidden integration behind this module.

use serde::Serialize;
use serde_json::Value;

use crate::validate::Payload;

/// Fixed identifier returned for every synthesized work item.
pub const WORK_ITEM_ID: &str = "AZ-1001";

/// Synthesized Azure DevOps work item record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkItem {
    /// Always `"azure-devops"`.
    pub system: &'static str,
    /// Organization echoed from the request.
    pub organization: Value,
    /// Project echoed from the request.
    pub project: Value,
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
        system: "azure-devops",
        organization: data["organization"].clone(),
        project: data["project"].clone(),
        title: data["title"].clone(),
        id: WORK_ITEM_ID,
        status: "created",
    }
}
