//! Post management tools.
//!
//! CRUD operations against the `/posts` endpoint of the FluentCommunity
//! manager API.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::super::ToolContext;
use super::common::{
    default_per_page_20, dispatch, dispatch_summary, tool_error, validate_pagination,
};
use super::impl_tool_plumbing;
use crate::core::api::ApiRequest;

// ============================================================================
// Shared field types
// ============================================================================

/// Post lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Draft,
    Pending,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Archived => "archived",
        }
    }
}

/// Status values accepted at creation time (a post cannot be born archived).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NewPostStatus {
    #[default]
    Published,
    Draft,
    Pending,
}

/// Post visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostPrivacy {
    #[default]
    Public,
    Private,
    Friends,
}

impl PostPrivacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Friends => "friends",
        }
    }
}

fn default_post_type() -> String {
    "text".to_string()
}

// ============================================================================
// fc_list_posts
// ============================================================================

/// Parameters for listing posts.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListPostsParams {
    /// Items per page.
    #[schemars(description = "Items per page (default: 20, max: 100)")]
    #[serde(default = "default_per_page_20")]
    pub per_page: u64,

    /// Page number.
    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u64>,

    #[schemars(description = "Filter posts by space ID")]
    pub space_id: Option<u64>,

    #[schemars(description = "Filter posts by user ID")]
    pub user_id: Option<u64>,

    #[schemars(description = "Filter by status")]
    pub status: Option<PostStatus>,

    #[schemars(description = "Filter by post type (text, video, etc.)")]
    #[serde(rename = "type")]
    pub post_type: Option<String>,

    #[schemars(description = "Search term to filter posts")]
    pub search: Option<String>,
}

/// List posts with optional filtering and pagination.
pub struct ListPostsTool;

impl ListPostsTool {
    pub const NAME: &'static str = "fc_list_posts";
    pub const DESCRIPTION: &'static str =
        "List FluentCommunity posts with optional filtering by space, user, status, type or search term, plus pagination.";

    pub async fn execute(params: &ListPostsParams, ctx: &ToolContext) -> CallToolResult {
        if let Err(e) = validate_pagination(params.per_page, params.page) {
            return tool_error(&e);
        }

        let request = ApiRequest::get("/posts")
            .query("per_page", params.per_page)
            .query_opt("page", params.page)
            .query_opt("space_id", params.space_id)
            .query_opt("user_id", params.user_id)
            .query_opt("status", params.status.map(|s| s.as_str()))
            .query_opt("type", params.post_type.as_deref())
            .query_opt("search", params.search.as_deref());

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(ListPostsTool, ListPostsParams);

// ============================================================================
// fc_get_post
// ============================================================================

/// Parameters for fetching a single post.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetPostParams {
    #[schemars(description = "The ID of the post to retrieve")]
    pub post_id: u64,
}

/// Get a specific post by ID.
pub struct GetPostTool;

impl GetPostTool {
    pub const NAME: &'static str = "fc_get_post";
    pub const DESCRIPTION: &'static str =
        "Get a specific FluentCommunity post by ID with all details.";

    pub async fn execute(params: &GetPostParams, ctx: &ToolContext) -> CallToolResult {
        dispatch(ctx, ApiRequest::get(format!("/posts/{}", params.post_id))).await
    }
}

impl_tool_plumbing!(GetPostTool, GetPostParams);

// ============================================================================
// fc_create_post
// ============================================================================

/// Parameters for creating a post.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreatePostParams {
    #[schemars(description = "The space ID where the post will be created")]
    pub space_id: u64,

    #[schemars(description = "The user ID who creates the post")]
    pub user_id: u64,

    #[schemars(description = "Post content/message")]
    pub message: String,

    #[schemars(description = "Post title")]
    pub title: Option<String>,

    #[schemars(description = "Rendered HTML version of the message")]
    pub message_rendered: Option<String>,

    #[schemars(description = "Base64-encoded message for large HTML content")]
    pub message_base64: Option<String>,

    #[schemars(description = "Allow HTML without WordPress sanitization (videos, iframes)")]
    pub bypass_sanitization: Option<bool>,

    #[schemars(description = "Post type (default: text)")]
    #[serde(rename = "type", default = "default_post_type")]
    pub post_type: String,

    #[schemars(description = "Post status (default: published)")]
    #[serde(default)]
    pub status: NewPostStatus,

    #[schemars(description = "Post privacy setting (default: public)")]
    #[serde(default)]
    pub privacy: PostPrivacy,

    #[schemars(description = "URL of the featured image")]
    pub featured_image: Option<String>,

    #[schemars(description = "Additional metadata as JSON object")]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Create a new post.
pub struct CreatePostTool;

impl CreatePostTool {
    pub const NAME: &'static str = "fc_create_post";
    pub const DESCRIPTION: &'static str =
        "Create a new FluentCommunity post. Use message_base64 for large HTML payloads and bypass_sanitization for rich content such as videos or iframes.";

    pub async fn execute(params: &CreatePostParams, ctx: &ToolContext) -> CallToolResult {
        info!("Creating post in space {}", params.space_id);

        let request = ApiRequest::post("/posts")
            .field("space_id", params.space_id)
            .field("user_id", params.user_id)
            .field("message", &params.message)
            .field("type", &params.post_type)
            .field("status", params.status)
            .field("privacy", params.privacy)
            .field_opt("title", &params.title)
            .field_opt("message_rendered", &params.message_rendered)
            .field_opt("message_base64", &params.message_base64)
            .field_opt("bypass_sanitization", &params.bypass_sanitization)
            .field_opt("featured_image", &params.featured_image)
            .field_opt("meta", &params.meta);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(CreatePostTool, CreatePostParams);

// ============================================================================
// fc_update_post
// ============================================================================

/// Parameters for updating a post.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdatePostParams {
    #[schemars(description = "The ID of the post to update")]
    pub post_id: u64,

    #[schemars(description = "Post title")]
    pub title: Option<String>,

    #[schemars(description = "Post content/message")]
    pub message: Option<String>,

    #[schemars(description = "Rendered HTML version of the message")]
    pub message_rendered: Option<String>,

    #[schemars(description = "Post type")]
    #[serde(rename = "type")]
    pub post_type: Option<String>,

    #[schemars(description = "Post status")]
    pub status: Option<PostStatus>,

    #[schemars(description = "Post privacy setting")]
    pub privacy: Option<PostPrivacy>,

    #[schemars(description = "URL of the featured image")]
    pub featured_image: Option<String>,

    #[schemars(description = "Additional metadata as JSON object")]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Update an existing post.
pub struct UpdatePostTool;

impl UpdatePostTool {
    pub const NAME: &'static str = "fc_update_post";
    pub const DESCRIPTION: &'static str = "Update an existing FluentCommunity post.";

    pub async fn execute(params: &UpdatePostParams, ctx: &ToolContext) -> CallToolResult {
        let request = ApiRequest::update(ctx.update_style, format!("/posts/{}", params.post_id))
            .field_opt("title", &params.title)
            .field_opt("message", &params.message)
            .field_opt("message_rendered", &params.message_rendered)
            .field_opt("type", &params.post_type)
            .field_opt("status", &params.status)
            .field_opt("privacy", &params.privacy)
            .field_opt("featured_image", &params.featured_image)
            .field_opt("meta", &params.meta);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(UpdatePostTool, UpdatePostParams);

// ============================================================================
// fc_delete_post
// ============================================================================

/// Parameters for deleting a post.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeletePostParams {
    #[schemars(description = "The ID of the post to delete")]
    pub post_id: u64,
}

/// Delete a post.
pub struct DeletePostTool;

impl DeletePostTool {
    pub const NAME: &'static str = "fc_delete_post";
    pub const DESCRIPTION: &'static str = "Delete a FluentCommunity post.";

    pub async fn execute(params: &DeletePostParams, ctx: &ToolContext) -> CallToolResult {
        dispatch_summary(
            ctx,
            ApiRequest::delete(format!("/posts/{}", params.post_id)),
            format!("Deleted post {}", params.post_id),
        )
        .await
    }
}

impl_tool_plumbing!(DeletePostTool, DeletePostParams);

// ============================================================================
// Tests
// ============================================================================
