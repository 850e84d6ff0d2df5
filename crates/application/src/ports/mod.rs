//! Ports to external collaborators
//!
//! Traits the infrastructure layer implements: HTTP execution, spec
//! fetching, and durable project/history storage.

mod http_client;
mod project_store;
mod spec_fetcher;

pub use http_client::{HttpClient, HttpExchange, TransportError};
pub use project_store::{ProjectPatch, ProjectStore, StoreError};
pub use spec_fetcher::{FetchError, SpecFetcher};
