//! Tool-specific error types.
//!
//! Every variant is caught at the dispatch boundary and rendered as an
//! error-flagged result; no tool failure ever crosses the transport.

use thiserror::Error;

use crate::core::api::ApiError;

/// Errors that can occur during tool dispatch and execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments do not match the tool's schema.
    #[error("Invalid arguments: {0}")]
    Validation(String),

    /// The remote call could not be completed.
    #[error("{0}")]
    Transport(#[from] ApiError),

    /// A member record lookup came back empty before a removal.
    #[error("Member not found: user {user_id} is not a member of space {space_id}")]
    MemberNotFound { space_id: u64, user_id: u64 },
}

impl ToolError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
