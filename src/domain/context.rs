//! Operation Context
//!
//! Metadata about the command being dispatched, attached to tracing spans.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for one dispatched command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationContext {
    /// Identifies the command loop session
    pub session_id: Uuid,

    /// Menu code of the command being run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    /// Correlation ID for the command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
}

impl OperationContext {
    /// Create a context for a session
    pub fn new(session_id: Uuid) -> Self {
        Self {
            session_id,
            operation: None,
            correlation_id: None,
        }
    }

    /// Create context with the operation code
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Create context with correlation ID
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Generate a new correlation ID if not present
    pub fn ensure_correlation_id(&mut self) -> Uuid {
        *self.correlation_id.get_or_insert_with(Uuid::new_v4)
    }
}
