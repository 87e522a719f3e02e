//! Chat tools.
//!
//! Thread listing and message operations against `/chat/threads`.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::ToolContext;
use super::common::{
    default_per_page_20, default_per_page_50, dispatch, tool_error, validate_pagination,
};
use super::impl_tool_plumbing;
use crate::core::api::ApiRequest;

// ============================================================================
// fc_list_chat_threads
// ============================================================================

/// Parameters for listing chat threads.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListChatThreadsParams {
    #[schemars(description = "Filter by participant user ID")]
    pub user_id: Option<u64>,

    #[schemars(description = "Filter by thread status")]
    pub status: Option<String>,

    #[schemars(description = "Items per page (default: 20, max: 100)")]
    #[serde(default = "default_per_page_20")]
    pub per_page: u64,

    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u64>,
}

/// List chat threads.
pub struct ListChatThreadsTool;

impl ListChatThreadsTool {
    pub const NAME: &'static str = "fc_list_chat_threads";
    pub const DESCRIPTION: &'static str =
        "List FluentCommunity chat threads with optional filtering by participant or status.";

    pub async fn execute(params: &ListChatThreadsParams, ctx: &ToolContext) -> CallToolResult {
        if let Err(e) = validate_pagination(params.per_page, params.page) {
            return tool_error(&e);
        }

        let request = ApiRequest::get("/chat/threads")
            .query("per_page", params.per_page)
            .query_opt("page", params.page)
            .query_opt("user_id", params.user_id)
            .query_opt("status", params.status.as_deref());

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(ListChatThreadsTool, ListChatThreadsParams);

// ============================================================================
// fc_list_chat_messages
// ============================================================================

/// Parameters for listing the messages of a thread.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListChatMessagesParams {
    #[schemars(description = "The ID of the chat thread")]
    pub thread_id: u64,

    #[schemars(description = "Items per page (default: 50, max: 100)")]
    #[serde(default = "default_per_page_50")]
    pub per_page: u64,

    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u64>,
}

/// List messages in a chat thread.
pub struct ListChatMessagesTool;

impl ListChatMessagesTool {
    pub const NAME: &'static str = "fc_list_chat_messages";
    pub const DESCRIPTION: &'static str =
        "List the messages in a FluentCommunity chat thread.";

    pub async fn execute(params: &ListChatMessagesParams, ctx: &ToolContext) -> CallToolResult {
        if let Err(e) = validate_pagination(params.per_page, params.page) {
            return tool_error(&e);
        }

        let request =
            ApiRequest::get(format!("/chat/threads/{}/messages", params.thread_id))
                .query("per_page", params.per_page)
                .query_opt("page", params.page);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(ListChatMessagesTool, ListChatMessagesParams);

// ============================================================================
// fc_send_chat_message
// ============================================================================

/// Parameters for sending a chat message.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SendChatMessageParams {
    #[schemars(description = "The ID of the chat thread")]
    pub thread_id: u64,

    #[schemars(description = "The ID of the sending user")]
    pub user_id: u64,

    #[schemars(description = "Message text")]
    pub message: String,
}

/// Send a message to a chat thread.
pub struct SendChatMessageTool;

impl SendChatMessageTool {
    pub const NAME: &'static str = "fc_send_chat_message";
    pub const DESCRIPTION: &'static str =
        "Send a message to a FluentCommunity chat thread.";

    pub async fn execute(params: &SendChatMessageParams, ctx: &ToolContext) -> CallToolResult {
        let request =
            ApiRequest::post(format!("/chat/threads/{}/messages", params.thread_id))
                .field("user_id", params.user_id)
                .field("message", &params.message);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(SendChatMessageTool, SendChatMessageParams);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::common::testing::{args, recording_context};
    use super::*;
    use crate::core::api::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_threads_defaults() {
        let (gateway, ctx) = recording_context();
        ListChatThreadsTool::handle(args(json!({"user_id": 3})), &ctx).await;

        let request = &gateway.requests()[0];
        assert_eq!(request.path(), "/chat/threads");
        assert_eq!(request.query_value("per_page"), Some("20"));
        assert_eq!(request.query_value("user_id"), Some("3"));
    }

    #[tokio::test]
    async fn test_list_messages_path_and_default() {
        let (gateway, ctx) = recording_context();
        ListChatMessagesTool::handle(args(json!({"thread_id": 8})), &ctx).await;

        let request = &gateway.requests()[0];
        assert_eq!(request.path(), "/chat/threads/8/messages");
        assert_eq!(request.query_value("per_page"), Some("50"));
    }

    #[tokio::test]
    async fn test_list_messages_requires_thread_id() {
        let (gateway, ctx) = recording_context();
        let result = ListChatMessagesTool::handle(args(json!({})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_send_message_body() {
        let (gateway, ctx) = recording_context();
        SendChatMessageTool::handle(
            args(json!({"thread_id": 8, "user_id": 3, "message": "hello"})),
            &ctx,
        )
        .await;

        let request = &gateway.requests()[0];
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "/chat/threads/8/messages");
        assert_eq!(request.body_value("user_id"), Some(&json!(3)));
        assert_eq!(request.body_value("message"), Some(&json!("hello")));
        assert_eq!(request.body_value("thread_id"), None);
    }
}
