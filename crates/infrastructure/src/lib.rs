//! Spyglass Infrastructure
//!
//! Adapters behind the application layer's ports: reqwest-based HTTP
//! execution and spec fetching, plus a file-system project store.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::{ReqwestHttpClient, ReqwestSpecFetcher};
pub use persistence::FileProjectStore;
