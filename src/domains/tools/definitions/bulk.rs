//! Bulk post operation tools.
//!
//! Each bulk tool loops over its input strictly in order with one request in
//! flight at a time. A failure aborts the loop and the error result names the
//! 1-based position of the failing item; items already processed are not
//! reported as successes.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::super::ToolContext;
use serde_json::{Value, json};

use super::common::{error_result, json_result, text_result};
use super::impl_tool_plumbing;
use super::posts::{NewPostStatus, PostPrivacy, PostStatus};
use crate::core::api::ApiRequest;

// ============================================================================
// fc_bulk_create_posts
// ============================================================================

/// A single post within a bulk create request.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkPostItem {
    #[schemars(description = "The ID of the space to post in")]
    pub space_id: u64,

    #[schemars(description = "The ID of the authoring user")]
    pub user_id: u64,

    #[schemars(description = "Post content")]
    pub message: String,

    #[schemars(description = "Post title")]
    pub title: Option<String>,

    #[schemars(description = "Schedule the post for a future time")]
    pub scheduled_at: Option<String>,

    #[schemars(description = "Post type (default: text)")]
    #[serde(rename = "type", default = "default_post_type")]
    pub post_type: String,

    #[schemars(description = "Post status (default: published)")]
    #[serde(default)]
    pub status: NewPostStatus,
}

fn default_post_type() -> String {
    "text".to_string()
}

/// Parameters for bulk post creation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkCreatePostsParams {
    #[schemars(description = "Posts to create, in order")]
    pub posts: Vec<BulkPostItem>,
}

/// Create several posts in one call.
pub struct BulkCreatePostsTool;

impl BulkCreatePostsTool {
    pub const NAME: &'static str = "fc_bulk_create_posts";
    pub const DESCRIPTION: &'static str =
        "Create multiple FluentCommunity posts sequentially. Stops at the first failure.";

    pub async fn execute(params: &BulkCreatePostsParams, ctx: &ToolContext) -> CallToolResult {
        if params.posts.is_empty() {
            return error_result("Invalid arguments: posts must not be empty");
        }

        let total = params.posts.len();
        info!("Bulk creating {} posts", total);

        // Created records are returned in input order.
        let mut created: Vec<Value> = Vec::with_capacity(total);
        for (index, item) in params.posts.iter().enumerate() {
            let request = ApiRequest::post("/posts")
                .field("space_id", item.space_id)
                .field("user_id", item.user_id)
                .field("message", &item.message)
                .field("type", &item.post_type)
                .field("status", item.status)
                .field_opt("title", &item.title)
                .field_opt("scheduled_at", &item.scheduled_at);

            match ctx.gateway.send(request).await {
                Ok(value) => created.push(value),
                Err(e) => {
                    return error_result(&format!(
                        "Bulk create failed at item {} of {}: {}",
                        index + 1,
                        total,
                        e
                    ));
                }
            }
        }

        json_result(&json!({"created": total, "posts": created}))
    }
}

impl_tool_plumbing!(BulkCreatePostsTool, BulkCreatePostsParams);

// ============================================================================
// fc_bulk_update_posts
// ============================================================================

/// Field changes applied to every post in a bulk update.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkPostUpdates {
    #[schemars(description = "New post status")]
    pub status: Option<PostStatus>,

    #[schemars(description = "New privacy setting")]
    pub privacy: Option<PostPrivacy>,

    #[schemars(description = "New post type")]
    #[serde(rename = "type")]
    pub post_type: Option<String>,
}

impl BulkPostUpdates {
    fn is_empty(&self) -> bool {
        self.status.is_none() && self.privacy.is_none() && self.post_type.is_none()
    }
}

/// Parameters for bulk post updates.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkUpdatePostsParams {
    #[schemars(description = "IDs of the posts to update, in order")]
    pub post_ids: Vec<u64>,

    #[schemars(description = "Changes to apply to every post")]
    pub updates: BulkPostUpdates,
}

/// Apply the same changes to several posts.
pub struct BulkUpdatePostsTool;

impl BulkUpdatePostsTool {
    pub const NAME: &'static str = "fc_bulk_update_posts";
    pub const DESCRIPTION: &'static str =
        "Apply the same field changes to multiple FluentCommunity posts sequentially. Stops at the first failure.";

    pub async fn execute(params: &BulkUpdatePostsParams, ctx: &ToolContext) -> CallToolResult {
        if params.post_ids.is_empty() {
            return error_result("Invalid arguments: post_ids must not be empty");
        }
        if params.updates.is_empty() {
            return error_result(
                "Invalid arguments: updates must set at least one of status, privacy or type",
            );
        }

        let total = params.post_ids.len();
        for (index, post_id) in params.post_ids.iter().enumerate() {
            let request = ApiRequest::update(ctx.update_style, format!("/posts/{}", post_id))
                .field_opt("status", &params.updates.status)
                .field_opt("privacy", &params.updates.privacy)
                .field_opt("type", &params.updates.post_type);

            if let Err(e) = ctx.gateway.send(request).await {
                return error_result(&format!(
                    "Bulk update failed at item {} of {}: {}",
                    index + 1,
                    total,
                    e
                ));
            }
        }

        text_result(format!("Updated {} posts", total))
    }
}

impl_tool_plumbing!(BulkUpdatePostsTool, BulkUpdatePostsParams);

// ============================================================================
// fc_bulk_delete_posts
// ============================================================================

/// Parameters for bulk post deletion.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BulkDeletePostsParams {
    #[schemars(description = "IDs of the posts to delete, in order")]
    pub post_ids: Vec<u64>,
}

/// Delete several posts in one call.
pub struct BulkDeletePostsTool;

impl BulkDeletePostsTool {
    pub const NAME: &'static str = "fc_bulk_delete_posts";
    pub const DESCRIPTION: &'static str =
        "Delete multiple FluentCommunity posts sequentially. Stops at the first failure.";

    pub async fn execute(params: &BulkDeletePostsParams, ctx: &ToolContext) -> CallToolResult {
        if params.post_ids.is_empty() {
            return error_result("Invalid arguments: post_ids must not be empty");
        }

        let total = params.post_ids.len();
        for (index, post_id) in params.post_ids.iter().enumerate() {
            let request = ApiRequest::delete(format!("/posts/{}", post_id));
            if let Err(e) = ctx.gateway.send(request).await {
                return error_result(&format!(
                    "Bulk delete failed at item {} of {}: {}",
                    index + 1,
                    total,
                    e
                ));
            }
        }

        text_result(format!("Deleted {} posts", total))
    }
}

impl_tool_plumbing!(BulkDeletePostsTool, BulkDeletePostsParams);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::common::testing::{args, recording_context, result_text};
    use super::*;
    use crate::core::api::{ApiError, Method, UpdateStyle};
    use serde_json::json;

    #[tokio::test]
    async fn test_bulk_create_preserves_input_order() {
        let (gateway, ctx) = recording_context();
        gateway.push_ok(json!({"id": 101}));
        gateway.push_ok(json!({"id": 102}));

        let result = BulkCreatePostsTool::handle(
            args(json!({"posts": [
                {"space_id": 1, "user_id": 2, "message": "first"},
                {"space_id": 1, "user_id": 2, "message": "second"},
            ]})),
            &ctx,
        )
        .await;

        let requests = gateway.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].body_value("message"), Some(&json!("first")));
        assert_eq!(requests[1].body_value("message"), Some(&json!("second")));
        assert_eq!(requests[0].body_value("type"), Some(&json!("text")));
        assert_eq!(requests[0].body_value("status"), Some(&json!("published")));

        // The aggregate keeps input order.
        let report: Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(report["created"], 2);
        assert_eq!(report["posts"][0]["id"], 101);
        assert_eq!(report["posts"][1]["id"], 102);
    }

    #[tokio::test]
    async fn test_bulk_create_failure_names_item() {
        let (gateway, ctx) = recording_context();
        gateway.push_ok(json!({"id": 100}));
        gateway.push_err(ApiError::Status {
            status: 403,
            body: "forbidden".to_string(),
        });

        let result = BulkCreatePostsTool::handle(
            args(json!({"posts": [
                {"space_id": 1, "user_id": 2, "message": "a"},
                {"space_id": 1, "user_id": 2, "message": "b"},
                {"space_id": 1, "user_id": 2, "message": "c"},
            ]})),
            &ctx,
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.contains("item 2 of 3"));
        // The loop aborts; the third item is never sent.
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_bulk_create_rejects_empty_array() {
        let (gateway, ctx) = recording_context();
        let result = BulkCreatePostsTool::handle(args(json!({"posts": []})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_bulk_update_requires_a_field() {
        let (gateway, ctx) = recording_context();
        let result = BulkUpdatePostsTool::handle(
            args(json!({"post_ids": [1, 2], "updates": {}})),
            &ctx,
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("at least one"));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_bulk_update_follows_update_style() {
        let (gateway, ctx) =
            super::super::common::testing::recording_context_with_style(UpdateStyle::PostToId);
        BulkUpdatePostsTool::handle(
            args(json!({"post_ids": [4, 5], "updates": {"status": "archived"}})),
            &ctx,
        )
        .await;

        let requests = gateway.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method(), Method::Post);
        assert_eq!(requests[0].path(), "/posts/4");
        assert_eq!(requests[1].path(), "/posts/5");
        assert_eq!(requests[0].body_value("status"), Some(&json!("archived")));
    }

    #[tokio::test]
    async fn test_bulk_delete_summary_and_order() {
        let (gateway, ctx) = recording_context();
        let result =
            BulkDeletePostsTool::handle(args(json!({"post_ids": [9, 8, 7]})), &ctx).await;

        assert_ne!(result.is_error, Some(true));
        assert!(result_text(&result).contains("Deleted 3 posts"));
        let requests = gateway.requests();
        assert_eq!(requests[0].path(), "/posts/9");
        assert_eq!(requests[1].path(), "/posts/8");
        assert_eq!(requests[2].path(), "/posts/7");
        assert!(requests.iter().all(|r| r.method() == Method::Delete));
    }

    #[tokio::test]
    async fn test_bulk_delete_failure_aborts() {
        let (gateway, ctx) = recording_context();
        gateway.push_err(ApiError::Network("connection reset".to_string()));

        let result =
            BulkDeletePostsTool::handle(args(json!({"post_ids": [1, 2]})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("item 1 of 2"));
        assert_eq!(gateway.call_count(), 1);
    }
}
