//! Request history entities
//!
//! One entry per dispatch, keyed by project. Append-only from the core's
//! perspective; deletion only happens via "clear all for project".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draft::RequestDraft;
use crate::method::HttpMethod;
use crate::response::{DispatchOutcome, ResponseRecord};

/// A single persisted dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Path template of the dispatched endpoint.
    pub path: String,
    /// HTTP method of the dispatched endpoint.
    pub method: HttpMethod,
    /// Snapshot of the draft at dispatch time.
    pub draft: RequestDraft,
    /// The dispatch outcome's record. Present for both completed and
    /// transport-failed dispatches (the failure record carries status 0
    /// and the elapsed duration); absent only when no record was ever
    /// produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseRecord>,
    /// When the dispatch was recorded.
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Records a dispatch outcome for a project.
    #[must_use]
    pub fn from_outcome(
        project_id: Uuid,
        path: impl Into<String>,
        method: HttpMethod,
        draft: RequestDraft,
        outcome: &DispatchOutcome,
    ) -> Self {
        Self {
            id: crate::generate_id(),
            project_id,
            path: path.into(),
            method,
            draft,
            response: Some(outcome.record().clone()),
            created_at: Utc::now(),
        }
    }

    /// Returns a short status label for list display.
    #[must_use]
    pub fn status_label(&self) -> String {
        match &self.response {
            Some(record) if record.status == 0 => "failed".to_string(),
            Some(record) => record.status.to_string(),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn outcome(status: u16) -> DispatchOutcome {
        if status == 0 {
            DispatchOutcome::TransportFailed {
                record: ResponseRecord::transport_failure("connection refused", 40),
            }
        } else {
            DispatchOutcome::Completed {
                record: ResponseRecord {
                    status,
                    status_text: "OK".to_string(),
                    headers: std::collections::BTreeMap::new(),
                    data: None,
                    duration_ms: 120,
                },
            }
        }
    }

    #[test]
    fn test_entry_from_completed_outcome() {
        let project_id = crate::generate_id();
        let entry = HistoryEntry::from_outcome(
            project_id,
            "/pods",
            HttpMethod::Get,
            RequestDraft::for_server("https://api.example.com"),
            &outcome(200),
        );

        assert_eq!(entry.project_id, project_id);
        assert_eq!(entry.status_label(), "200");
        assert_eq!(entry.response.as_ref().map(|r| r.duration_ms), Some(120));
    }

    #[test]
    fn test_entry_from_transport_failure_keeps_duration() {
        let entry = HistoryEntry::from_outcome(
            crate::generate_id(),
            "/pods",
            HttpMethod::Get,
            RequestDraft::default(),
            &outcome(0),
        );

        assert_eq!(entry.status_label(), "failed");
        assert_eq!(entry.response.as_ref().map(|r| r.status), Some(0));
        assert_eq!(entry.response.as_ref().map(|r| r.duration_ms), Some(40));
    }
}
