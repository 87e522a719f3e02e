//! Comment management tools.
//!
//! CRUD operations against the `/comments` endpoint. Comments attach to a
//! post and may nest under a parent comment.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::ToolContext;
use super::common::{
    default_per_page_50, dispatch, dispatch_summary, tool_error, validate_pagination,
};
use super::impl_tool_plumbing;
use crate::core::api::ApiRequest;

// ============================================================================
// fc_list_comments
// ============================================================================

/// Parameters for listing comments.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListCommentsParams {
    #[schemars(description = "Filter by post ID")]
    pub post_id: Option<u64>,

    #[schemars(description = "Filter by author user ID")]
    pub user_id: Option<u64>,

    #[schemars(description = "Filter by comment status")]
    pub status: Option<String>,

    #[schemars(description = "Items per page (default: 50, max: 100)")]
    #[serde(default = "default_per_page_50")]
    pub per_page: u64,

    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u64>,
}

/// List comments with optional filtering and pagination.
pub struct ListCommentsTool;

impl ListCommentsTool {
    pub const NAME: &'static str = "fc_list_comments";
    pub const DESCRIPTION: &'static str =
        "List FluentCommunity comments with optional filtering by post, author or status, plus pagination.";

    pub async fn execute(params: &ListCommentsParams, ctx: &ToolContext) -> CallToolResult {
        if let Err(e) = validate_pagination(params.per_page, params.page) {
            return tool_error(&e);
        }

        let request = ApiRequest::get("/comments")
            .query("per_page", params.per_page)
            .query_opt("page", params.page)
            .query_opt("post_id", params.post_id)
            .query_opt("user_id", params.user_id)
            .query_opt("status", params.status.as_deref());

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(ListCommentsTool, ListCommentsParams);

// ============================================================================
// fc_get_comment
// ============================================================================

/// Parameters for fetching a single comment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetCommentParams {
    #[schemars(description = "The ID of the comment to retrieve")]
    pub comment_id: u64,
}

/// Get a specific comment by ID.
pub struct GetCommentTool;

impl GetCommentTool {
    pub const NAME: &'static str = "fc_get_comment";
    pub const DESCRIPTION: &'static str = "Get a specific FluentCommunity comment by ID.";

    pub async fn execute(params: &GetCommentParams, ctx: &ToolContext) -> CallToolResult {
        dispatch(ctx, ApiRequest::get(format!("/comments/{}", params.comment_id))).await
    }
}

impl_tool_plumbing!(GetCommentTool, GetCommentParams);

// ============================================================================
// fc_create_comment
// ============================================================================

/// Parameters for creating a comment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCommentParams {
    #[schemars(description = "The ID of the post to comment on")]
    pub post_id: u64,

    #[schemars(description = "The ID of the comment author")]
    pub user_id: u64,

    #[schemars(description = "Comment text")]
    pub message: String,

    #[schemars(description = "Parent comment ID for threaded replies")]
    pub parent_id: Option<u64>,
}

/// Create a new comment on a post.
pub struct CreateCommentTool;

impl CreateCommentTool {
    pub const NAME: &'static str = "fc_create_comment";
    pub const DESCRIPTION: &'static str =
        "Create a new comment on a FluentCommunity post, optionally as a reply to another comment.";

    pub async fn execute(params: &CreateCommentParams, ctx: &ToolContext) -> CallToolResult {
        let request = ApiRequest::post("/comments")
            .field("post_id", params.post_id)
            .field("user_id", params.user_id)
            .field("message", &params.message)
            .field_opt("parent_id", &params.parent_id);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(CreateCommentTool, CreateCommentParams);

// ============================================================================
// fc_update_comment
// ============================================================================

/// Parameters for updating a comment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCommentParams {
    #[schemars(description = "The ID of the comment to update")]
    pub comment_id: u64,

    #[schemars(description = "New comment text")]
    pub message: Option<String>,

    #[schemars(description = "New comment status")]
    pub status: Option<String>,
}

/// Update an existing comment.
pub struct UpdateCommentTool;

impl UpdateCommentTool {
    pub const NAME: &'static str = "fc_update_comment";
    pub const DESCRIPTION: &'static str = "Update an existing FluentCommunity comment.";

    pub async fn execute(params: &UpdateCommentParams, ctx: &ToolContext) -> CallToolResult {
        let request =
            ApiRequest::update(ctx.update_style, format!("/comments/{}", params.comment_id))
                .field_opt("message", &params.message)
                .field_opt("status", &params.status);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(UpdateCommentTool, UpdateCommentParams);

// ============================================================================
// fc_delete_comment
// ============================================================================

/// Parameters for deleting a comment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeleteCommentParams {
    #[schemars(description = "The ID of the comment to delete")]
    pub comment_id: u64,
}

/// Delete a comment.
pub struct DeleteCommentTool;

impl DeleteCommentTool {
    pub const NAME: &'static str = "fc_delete_comment";
    pub const DESCRIPTION: &'static str = "Delete a FluentCommunity comment.";

    pub async fn execute(params: &DeleteCommentParams, ctx: &ToolContext) -> CallToolResult {
        dispatch_summary(
            ctx,
            ApiRequest::delete(format!("/comments/{}", params.comment_id)),
            format!("Deleted comment {}", params.comment_id),
        )
        .await
    }
}

impl_tool_plumbing!(DeleteCommentTool, DeleteCommentParams);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::common::testing::{args, recording_context, result_text};
    use super::*;
    use crate::core::api::{Method, UpdateStyle};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_comments_default_page_size_is_50() {
        let (gateway, ctx) = recording_context();
        ListCommentsTool::handle(args(json!({"post_id": 7})), &ctx).await;

        let request = &gateway.requests()[0];
        assert_eq!(request.path(), "/comments");
        assert_eq!(request.query_value("per_page"), Some("50"));
        assert_eq!(request.query_value("post_id"), Some("7"));
    }

    #[tokio::test]
    async fn test_list_comments_rejects_oversized_page() {
        let (gateway, ctx) = recording_context();
        let result = ListCommentsTool::handle(args(json!({"per_page": 250})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("per_page"));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_comment_with_parent() {
        let (gateway, ctx) = recording_context();
        CreateCommentTool::handle(
            args(json!({"post_id": 7, "user_id": 3, "message": "Nice!", "parent_id": 12})),
            &ctx,
        )
        .await;

        let request = &gateway.requests()[0];
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "/comments");
        assert_eq!(request.body_value("message"), Some(&json!("Nice!")));
        assert_eq!(request.body_value("parent_id"), Some(&json!(12)));
    }

    #[tokio::test]
    async fn test_create_comment_requires_message() {
        let (gateway, ctx) = recording_context();
        let result =
            CreateCommentTool::handle(args(json!({"post_id": 7, "user_id": 3})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_comment_honours_post_style() {
        let (gateway, ctx) =
            super::super::common::testing::recording_context_with_style(UpdateStyle::PostToId);
        UpdateCommentTool::handle(
            args(json!({"comment_id": 9, "status": "approved"})),
            &ctx,
        )
        .await;

        let request = &gateway.requests()[0];
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "/comments/9");
        assert_eq!(request.body_value("status"), Some(&json!("approved")));
        assert_eq!(request.body_value("comment_id"), None);
    }

    #[tokio::test]
    async fn test_get_and_delete_comment_paths() {
        let (gateway, ctx) = recording_context();
        GetCommentTool::handle(args(json!({"comment_id": 31})), &ctx).await;
        DeleteCommentTool::handle(args(json!({"comment_id": 31})), &ctx).await;

        let requests = gateway.requests();
        assert_eq!(requests[0].method(), Method::Get);
        assert_eq!(requests[0].path(), "/comments/31");
        assert_eq!(requests[1].method(), Method::Delete);
        assert_eq!(requests[1].path(), "/comments/31");
    }
}
