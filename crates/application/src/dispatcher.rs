//! Request dispatch
//!
//! Executes a built request through the `HttpClient` port, measures
//! wall-clock duration, and normalizes the outcome — success or
//! transport failure — into a single record shape.

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use spyglass_domain::{
    DispatchOutcome, EndpointSelection, HistoryEntry, RequestDraft, RequestSpec, ResponseRecord,
};

use crate::error::ApplicationResult;
use crate::ports::{HttpClient, ProjectStore};

/// Dispatches built requests and normalizes their outcomes.
///
/// `send` never fails: ordinary HTTP failures (4xx/5xx) are completed
/// dispatches carrying that status, and transport failures become a
/// status-0 record so callers can always render a duration. No retry,
/// no cancellation; each dispatch owns its own state.
pub struct Dispatcher<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> Dispatcher<C> {
    /// Creates a dispatcher around an HTTP client.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Executes the request and returns the normalized outcome.
    pub async fn send(&self, request: &RequestSpec) -> DispatchOutcome {
        let start = Instant::now();

        match self.client.execute(request).await {
            Ok(exchange) => {
                let duration_ms = elapsed_millis(start);
                // Best-effort body parse; unparsable bodies become null.
                let data = serde_json::from_str(&exchange.body).ok();
                DispatchOutcome::Completed {
                    record: ResponseRecord {
                        status: exchange.status,
                        status_text: exchange.status_text,
                        headers: exchange.headers,
                        data,
                        duration_ms,
                    },
                }
            }
            Err(error) => DispatchOutcome::TransportFailed {
                record: ResponseRecord::transport_failure(
                    error.to_string(),
                    elapsed_millis(start),
                ),
            },
        }
    }
}

/// Dispatches a request and appends the outcome to the owning project's
/// history.
///
/// The outcome is recorded for completed and transport-failed dispatches
/// alike, so history always carries a duration.
///
/// # Errors
///
/// Returns a storage error when the history entry cannot be appended;
/// the dispatch itself never fails.
pub async fn dispatch_and_record<C: HttpClient, S: ProjectStore>(
    dispatcher: &Dispatcher<C>,
    store: &S,
    project_id: Uuid,
    selection: &EndpointSelection,
    draft: &RequestDraft,
    request: &RequestSpec,
) -> ApplicationResult<DispatchOutcome> {
    let outcome = dispatcher.send(request).await;

    let entry = HistoryEntry::from_outcome(
        project_id,
        selection.path.clone(),
        selection.method,
        draft.clone(),
        &outcome,
    );
    store.add_history(entry).await?;

    Ok(outcome)
}

fn elapsed_millis(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
