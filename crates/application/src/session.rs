//! View-facing session state
//!
//! Holds the currently loaded specification, the endpoint selection, the
//! request draft, and the dispatch state. The pure resolution and build
//! functions stay stateless; this is the one place their inputs live
//! between calls, plus a narrow watch channel a view layer can observe.

use thiserror::Error;
use tokio::sync::watch;

use spyglass_domain::{
    BuildError, DispatchOutcome, DispatchState, EndpointSelection, HttpMethod, RequestDraft,
    RequestSpec, SpecDocument, build_request,
};

/// Errors raised by session-level request assembly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No specification document is loaded.
    #[error("no specification loaded")]
    NoDocument,

    /// No endpoint is selected.
    #[error("no endpoint selected")]
    NoSelection,

    /// The selection does not resolve to an operation in the document.
    #[error("no operation at {method} {path}")]
    UnknownEndpoint {
        /// Selected path template.
        path: String,
        /// Selected method.
        method: HttpMethod,
    },

    /// Request assembly failed.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Mutable session state for one open specification.
pub struct Session {
    fallback_origin: String,
    spec: Option<SpecDocument>,
    selection: Option<EndpointSelection>,
    draft: RequestDraft,
    dispatch: DispatchState,
    revision: watch::Sender<u64>,
}

impl Session {
    /// Creates an empty session.
    ///
    /// `fallback_origin` stands in for the document's server list when
    /// it declares none — the embedding application's own origin.
    #[must_use]
    pub fn new(fallback_origin: impl Into<String>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            fallback_origin: fallback_origin.into(),
            spec: None,
            selection: None,
            draft: RequestDraft::default(),
            dispatch: DispatchState::Idle,
            revision,
        }
    }

    /// Subscribes to change notifications.
    ///
    /// The channel carries a revision counter; receivers treat any
    /// change as "re-read the session".
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Returns the loaded document, if any.
    #[must_use]
    pub const fn spec(&self) -> Option<&SpecDocument> {
        self.spec.as_ref()
    }

    /// Returns the current selection, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&EndpointSelection> {
        self.selection.as_ref()
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    /// Returns the current dispatch state.
    #[must_use]
    pub const fn dispatch_state(&self) -> &DispatchState {
        &self.dispatch
    }

    /// Replaces the loaded document and clears the selection.
    pub fn load_document(&mut self, spec: SpecDocument) {
        self.spec = Some(spec);
        self.selection = None;
        self.reset_draft();
        self.dispatch = DispatchState::Idle;
        self.bump();
    }

    /// Selects an endpoint with toggle semantics: re-selecting the
    /// current endpoint clears the selection. The draft is reset either
    /// way.
    pub fn select_endpoint(&mut self, path: impl Into<String>, method: HttpMethod) {
        let next = EndpointSelection::new(path, method);
        self.selection = EndpointSelection::toggle(self.selection.as_ref(), next);
        self.reset_draft();
        self.dispatch = DispatchState::Idle;
        self.bump();
    }

    /// Sets the draft's target server URL.
    pub fn set_server_url(&mut self, server_url: impl Into<String>) {
        self.draft.server_url = server_url.into();
        self.bump();
    }

    /// Sets a draft parameter value.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.draft.set_param(name, value);
        self.bump();
    }

    /// Sets a draft header value.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.draft.set_header(name, value);
        self.bump();
    }

    /// Sets the draft's raw body text.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.draft.body = body.into();
        self.bump();
    }

    /// Assembles a dispatchable request for the current selection.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when no document is loaded, nothing is
    /// selected, the selection resolves to no operation, or the draft
    /// body is not valid JSON.
    pub fn build_request(&self) -> Result<RequestSpec, SessionError> {
        let spec = self.spec.as_ref().ok_or(SessionError::NoDocument)?;
        let selection = self.selection.as_ref().ok_or(SessionError::NoSelection)?;

        let operation = spec
            .operation(&selection.path, selection.method)
            .ok_or_else(|| SessionError::UnknownEndpoint {
                path: selection.path.clone(),
                method: selection.method,
            })?;

        let declarations = operation.parameters();
        Ok(build_request(
            &selection.path,
            selection.method,
            &declarations,
            &self.draft,
        )?)
    }

    /// Marks a dispatch as in flight.
    pub fn begin_dispatch(&mut self) {
        self.dispatch = DispatchState::sending();
        self.bump();
    }

    /// Settles the dispatch state from an outcome.
    pub fn complete_dispatch(&mut self, outcome: &DispatchOutcome) {
        self.dispatch = match outcome {
            DispatchOutcome::Completed { record } => DispatchState::succeeded(record.clone()),
            DispatchOutcome::TransportFailed { record } => DispatchState::failed(record.clone()),
        };
        self.bump();
    }

    fn reset_draft(&mut self) {
        let server = self
            .spec
            .as_ref()
            .map_or_else(|| self.fallback_origin.clone(), |spec| {
                spec.default_server(&self.fallback_origin)
            });
        self.draft = RequestDraft::for_server(server);
    }

    fn bump(&mut self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}
