use thiserror::Error;

/// Result type for portal SDK operations.
pub type PortalResult<T> = Result<T, PortalError>;

/// Failure taxonomy for the portal client.
///
/// `Validation` and `StaleResponse` are consumed inside the list
/// controller; everything else reaches the caller as a typed failure
/// with a human-readable message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortalError {
    /// Identity or token retrieval failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Identity is present but no business id could be resolved.
    /// All tenant-scoped requests are blocked until re-sign-in.
    #[error("Business id is not resolved for the current session")]
    TenantUnresolved,

    /// Client-side rejection, raised before any network call.
    #[error("Missing required fields: {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    /// The request never completed (connect failure, timeout, bad body).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend rejected the request. `message` is the backend's
    /// `{"error": ...}` body, verbatim.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A bulk delete succeeded for some ids only. The acknowledged
    /// removals have already been applied to the collection.
    #[error("Delete partially failed: {} deleted, {} rejected", .deleted.len(), .failed.len())]
    PartialDelete {
        deleted: Vec<String>,
        failed: Vec<String>,
    },

    /// A list response arrived after a newer request superseded it.
    /// Dropped inside the controller, never surfaced to callers.
    #[error("Stale response discarded")]
    StaleResponse,
}

impl PortalError {
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn validation(fields: Vec<&'static str>) -> Self {
        Self::Validation { fields }
    }

    /// Whether retrying the same call can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Server { status: 500..=599, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(PortalError::network("connection reset").is_retryable());
        assert!(PortalError::server(503, "unavailable").is_retryable());
        assert!(!PortalError::server(404, "not found").is_retryable());
        assert!(!PortalError::TenantUnresolved.is_retryable());
        assert!(!PortalError::validation(vec!["service_name"]).is_retryable());
    }

    #[test]
    fn validation_message_lists_fields() {
        let err = PortalError::validation(vec!["service_name", "price"]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: service_name, price"
        );
    }
}
