//! Gateway abstraction over the remote game service.
//!
//! The [`Gateway`] trait decouples the session loop from the transport
//! (currently HTTP, see [`crate::io::http`]). Tests use a scripted gateway that
//! returns queued responses without any network access.

use thiserror::Error;

use crate::core::types::{PurchaseOutcome, Session, ShopItem, SolveOutcome, Task};

/// Typed failures surfaced by a [`Gateway`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response (connect, timeout, transport).
    #[error("connection to {endpoint} failed: {message}")]
    Connectivity { endpoint: String, message: String },

    /// Non-success status or a body that could not be decoded.
    #[error("{action} failed with status {status}: {body}")]
    Response {
        action: String,
        status: u16,
        body: String,
    },

    #[error("session {session_id} not found")]
    SessionNotFound { session_id: String },

    #[error("task {task_id} not found in session {session_id}")]
    TaskNotFound { session_id: String, task_id: String },

    #[error("item {item_id} not found in shop")]
    ItemNotFound { item_id: String },

    /// The service refused the action in the session's current state.
    #[error("task {task_id} cannot be solved in the current state of session {session_id}")]
    InvalidSessionState { session_id: String, task_id: String },

    #[error("not enough gold to purchase {item_id}")]
    InsufficientResources { item_id: String },

    /// Local validation failure; nothing was sent.
    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("rate limit exceeded (retry after {retry_after_secs:?} s)")]
    RateLimited { retry_after_secs: Option<u64> },
}

impl GatewayError {
    /// Stable short name of the failure kind, for logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Connectivity { .. } => "connectivity",
            GatewayError::Response { .. } => "response",
            GatewayError::SessionNotFound { .. } => "session_not_found",
            GatewayError::TaskNotFound { .. } => "task_not_found",
            GatewayError::ItemNotFound { .. } => "item_not_found",
            GatewayError::InvalidSessionState { .. } => "invalid_session_state",
            GatewayError::InsufficientResources { .. } => "insufficient_resources",
            GatewayError::InvalidArgument { .. } => "invalid_argument",
            GatewayError::RateLimited { .. } => "rate_limited",
        }
    }
}

/// Operations against one game service. Every call is a blocking round trip.
pub trait Gateway {
    fn start_session(&self) -> Result<Session, GatewayError>;

    fn list_tasks(&self, session_id: &str) -> Result<Vec<Task>, GatewayError>;

    fn solve_task(&self, session_id: &str, task_id: &str) -> Result<SolveOutcome, GatewayError>;

    fn list_shop_items(&self, session_id: &str) -> Result<Vec<ShopItem>, GatewayError>;

    fn purchase_item(
        &self,
        session_id: &str,
        item_id: &str,
    ) -> Result<PurchaseOutcome, GatewayError>;
}

/// Reject blank identifiers before they reach the service.
pub fn validate_id(field: &'static str, id: &str) -> Result<(), GatewayError> {
    if id.trim().is_empty() {
        return Err(GatewayError::InvalidArgument {
            field,
            reason: "id cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_id_rejects_blank_ids() {
        assert!(validate_id("gameId", "abc").is_ok());
        let err = validate_id("gameId", "   ").expect_err("blank");
        assert_eq!(err.kind(), "invalid_argument");
        assert_eq!(err.to_string(), "invalid gameId: id cannot be empty");
    }

    #[test]
    fn errors_describe_the_failed_resource() {
        let err = GatewayError::TaskNotFound {
            session_id: "g1".to_string(),
            task_id: "t9".to_string(),
        };
        assert_eq!(err.to_string(), "task t9 not found in session g1");
        assert_eq!(err.kind(), "task_not_found");
    }
}
