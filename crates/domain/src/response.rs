//! Dispatch outcome types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized outcome of one dispatch, used both for display and for
/// history persistence. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// HTTP status code; `0` for transport failures.
    pub status: u16,
    /// Status text, or the underlying error message on transport failure.
    pub status_text: String,
    /// Response headers as a flat string mapping.
    pub headers: BTreeMap<String, String>,
    /// Best-effort parsed JSON body; `None` when unparsable or absent.
    pub data: Option<Value>,
    /// Wall-clock duration of the dispatch in whole milliseconds.
    pub duration_ms: u64,
}

impl ResponseRecord {
    /// Builds the record-shaped value for a transport failure.
    ///
    /// Status `0`, the error message as status text, empty headers, no
    /// data — but a real duration, so callers can always display timing.
    #[must_use]
    pub fn transport_failure(message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            status: 0,
            status_text: message.into(),
            headers: BTreeMap::new(),
            data: None,
            duration_ms,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the duration as a display string.
    #[must_use]
    pub fn duration_display(&self) -> String {
        if self.duration_ms < 1000 {
            format!("{}ms", self.duration_ms)
        } else {
            #[allow(clippy::cast_precision_loss)]
            let seconds = self.duration_ms as f64 / 1000.0;
            format!("{seconds:.1}s")
        }
    }
}

/// Tagged union distinguishing completed dispatches from transport
/// failures.
///
/// Both arms carry a [`ResponseRecord`]: any received HTTP status,
/// including 4xx/5xx, is a completed dispatch; only failures to reach
/// the server at all (DNS, refused connection, timeout, malformed URL)
/// take the failure arm. Downstream history recording relies on both
/// arms always carrying a duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The server answered with some HTTP status.
    Completed {
        /// The normalized response.
        record: ResponseRecord,
    },
    /// The server could not be reached.
    TransportFailed {
        /// The failure shaped as a record (status 0).
        record: ResponseRecord,
    },
}

impl DispatchOutcome {
    /// Returns the record regardless of arm.
    #[must_use]
    pub const fn record(&self) -> &ResponseRecord {
        match self {
            Self::Completed { record } | Self::TransportFailed { record } => record,
        }
    }

    /// Returns true for the completed arm.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
