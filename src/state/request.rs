//! Per-view request lifecycle state.
//!
//! Every data-loading view owns one of these per request instead of loose
//! `loading`/`error` booleans, which keeps the transitions enumerable and
//! testable without a network.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Lifecycle of a single asynchronous request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight; the triggering control should be disabled.
    Pending,
    /// Completed with data.
    Succeeded(T),
    /// Completed with a user-presentable message.
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The payload, if the request succeeded.
    pub fn succeeded(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if the request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
