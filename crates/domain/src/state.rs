//! Dispatch state machine for view binding.

use serde::{Deserialize, Serialize};

use crate::response::ResponseRecord;

/// State of the current dispatch: `Idle -> Sending -> {Succeeded, Failed}`.
///
/// There is no retry and no cancellation; starting a new dispatch simply
/// replaces the state with a fresh `Sending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DispatchState {
    /// No dispatch has been started for the current selection.
    #[default]
    Idle,

    /// A dispatch is in flight.
    Sending {
        /// When the dispatch started, for elapsed-time display.
        /// Skipped in serialization as Instant is not serializable.
        #[serde(skip)]
        started_at: Option<std::time::Instant>,
    },

    /// The server answered (any HTTP status, including 4xx/5xx).
    Succeeded {
        /// The normalized response.
        record: Box<ResponseRecord>,
    },

    /// The server could not be reached.
    Failed {
        /// The failure shaped as a record (status 0).
        record: Box<ResponseRecord>,
    },
}

impl DispatchState {
    /// Creates a `Sending` state stamped with the current time.
    #[must_use]
    pub fn sending() -> Self {
        Self::Sending {
            started_at: Some(std::time::Instant::now()),
        }
    }

    /// Creates a `Succeeded` state from a record.
    #[must_use]
    pub fn succeeded(record: ResponseRecord) -> Self {
        Self::Succeeded {
            record: Box::new(record),
        }
    }

    /// Creates a `Failed` state from a failure-shaped record.
    #[must_use]
    pub fn failed(record: ResponseRecord) -> Self {
        Self::Failed {
            record: Box::new(record),
        }
    }

    /// Returns true if no dispatch has started.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a dispatch is in flight.
    #[must_use]
    pub const fn is_sending(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }

    /// Returns the record of a settled dispatch, if any.
    #[must_use]
    pub fn record(&self) -> Option<&ResponseRecord> {
        match self {
            Self::Succeeded { record } | Self::Failed { record } => Some(record),
            _ => None,
        }
    }

    /// Returns the elapsed time while sending.
    #[must_use]
    pub fn elapsed(&self) -> Option<std::time::Duration> {
        match self {
            Self::Sending {
                started_at: Some(t),
            } => Some(t.elapsed()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_default() {
        let state = DispatchState::default();
        assert!(state.is_idle());
        assert!(state.record().is_none());
    }

    #[test]
    fn test_sending_tracks_elapsed() {
        let state = DispatchState::sending();
        assert!(state.is_sending());
        assert!(state.elapsed().is_some());
    }

    #[test]
    fn test_settled_states_expose_record() {
        let ok = DispatchState::succeeded(ResponseRecord::transport_failure("n/a", 5));
        assert!(!ok.is_sending());
        assert!(ok.record().is_some());

        let failed = DispatchState::failed(ResponseRecord::transport_failure("refused", 9));
        assert_eq!(failed.record().map(|r| r.status), Some(0));
    }
}
