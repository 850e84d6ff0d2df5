//! Spyglass Application Layer
//!
//! Use cases and ports for the Spyglass API explorer: loading
//! specification documents, dispatching built requests, recording
//! history, and the session state a view layer binds to. All I/O goes
//! through the ports; this crate never touches the network or the file
//! system directly.

pub mod dispatcher;
pub mod error;
pub mod loader;
pub mod ports;
pub mod projects;
pub mod session;

pub use dispatcher::{Dispatcher, dispatch_and_record};
pub use error::{ApplicationError, ApplicationResult};
pub use loader::{SpecLoadError, SpecLoader, parse_spec_text};
pub use projects::{create_project_from_input, import_into_project};
pub use session::{Session, SessionError};
