//! Common utilities shared across FluentCommunity tools.
//!
//! This module provides the response envelope, argument parsing, pagination
//! validation and slug derivation helpers used by every tool definition.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::super::{ToolContext, ToolError};
use crate::core::api::ApiRequest;

/// Upper bound the remote API enforces on page sizes.
pub const MAX_PER_PAGE: u64 = 100;

/// Parse raw tool arguments into a typed params struct.
pub fn parse_params<T: DeserializeOwned>(args: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(args)).map_err(|e| ToolError::validation(e.to_string()))
}

/// Wrap a successful response body as pretty-printed JSON text.
pub fn json_result(value: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Wrap a human-readable success summary.
pub fn text_result(message: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message)])
}

/// Create an error result. Every failure surfaces with an `Error: ` prefix.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(format!("Error: {}", message))])
}

/// Convert a tool error into an error-flagged result.
pub fn tool_error(err: &ToolError) -> CallToolResult {
    error_result(&err.to_string())
}

/// Send a request through the gateway and wrap the outcome.
pub async fn dispatch(ctx: &ToolContext, request: ApiRequest) -> CallToolResult {
    match ctx.gateway.send(request).await {
        Ok(value) => json_result(&value),
        Err(e) => tool_error(&ToolError::Transport(e)),
    }
}

/// Send a request and, on success, reply with a human summary instead of the
/// raw response body. Used by delete tools, where the body carries nothing
/// the caller needs.
pub async fn dispatch_summary(
    ctx: &ToolContext,
    request: ApiRequest,
    summary: String,
) -> CallToolResult {
    match ctx.gateway.send(request).await {
        Ok(_) => text_result(summary),
        Err(e) => tool_error(&ToolError::Transport(e)),
    }
}

/// Validate pagination arguments before any network call.
pub fn validate_pagination(per_page: u64, page: Option<u64>) -> Result<(), ToolError> {
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(ToolError::validation(format!(
            "per_page must be between 1 and {}, got {}",
            MAX_PER_PAGE, per_page
        )));
    }
    if page == Some(0) {
        return Err(ToolError::validation("page must be at least 1"));
    }
    Ok(())
}

/// Derive a URL-friendly slug from a title: lowercase, whitespace runs
/// collapsed to single hyphens.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// View a list response as a slice of records.
///
/// The remote returns either a bare array or an object with a `data` array,
/// depending on the plugin version.
pub fn records(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => items,
            _ => &[],
        },
        _ => &[],
    }
}

// Per-resource page size defaults.
pub fn default_per_page_20() -> u64 {
    20
}

pub fn default_per_page_50() -> u64 {
    50
}

#[cfg(test)]
pub mod testing {
    use std::sync::Arc;

    use super::super::super::ToolContext;
    use crate::core::api::{RecordingGateway, UpdateStyle};

    /// Build a tool context around a fresh recording gateway.
    pub fn recording_context() -> (Arc<RecordingGateway>, ToolContext) {
        recording_context_with_style(UpdateStyle::Put)
    }

    pub fn recording_context_with_style(
        style: UpdateStyle,
    ) -> (Arc<RecordingGateway>, ToolContext) {
        let gateway = Arc::new(RecordingGateway::new());
        let ctx = ToolContext::new(gateway.clone(), style);
        (gateway, ctx)
    }

    /// Build a JsonObject argument map from a json! literal.
    pub fn args(value: serde_json::Value) -> rmcp::model::JsonObject {
        value.as_object().expect("arguments must be an object").clone()
    }

    /// Extract the text payload from a result's single content block.
    pub fn result_text(result: &rmcp::model::CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }
}
