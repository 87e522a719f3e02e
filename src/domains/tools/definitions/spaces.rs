//! Space management tools.
//!
//! CRUD operations against the `/spaces` endpoint. Space creation derives a
//! slug from the title when none is supplied, mirroring the remote plugin's
//! convention.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::super::ToolContext;
use super::common::{
    default_per_page_20, dispatch, dispatch_summary, slugify, tool_error, validate_pagination,
};
use super::impl_tool_plumbing;
use crate::core::api::ApiRequest;

// ============================================================================
// Shared field types
// ============================================================================

/// Space lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SpaceStatus {
    Active,
    Inactive,
    Archived,
}

impl SpaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Archived => "archived",
        }
    }
}

/// Status values accepted at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NewSpaceStatus {
    #[default]
    Active,
    Inactive,
}

/// Space visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SpacePrivacy {
    #[default]
    Public,
    Private,
}

impl SpacePrivacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

// ============================================================================
// fc_list_spaces
// ============================================================================

/// Parameters for listing spaces.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListSpacesParams {
    #[schemars(description = "Items per page (default: 20, max: 100)")]
    #[serde(default = "default_per_page_20")]
    pub per_page: u64,

    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u64>,

    #[schemars(description = "Filter by status")]
    pub status: Option<SpaceStatus>,

    #[schemars(description = "Filter by space type")]
    #[serde(rename = "type")]
    pub space_type: Option<String>,

    #[schemars(description = "Filter by privacy setting")]
    pub privacy: Option<SpacePrivacy>,

    #[schemars(description = "Search term for space title")]
    pub search: Option<String>,
}

/// List spaces with optional filtering and pagination.
pub struct ListSpacesTool;

impl ListSpacesTool {
    pub const NAME: &'static str = "fc_list_spaces";
    pub const DESCRIPTION: &'static str =
        "List FluentCommunity spaces with optional filtering by status, type, privacy or search term, plus pagination.";

    pub async fn execute(params: &ListSpacesParams, ctx: &ToolContext) -> CallToolResult {
        if let Err(e) = validate_pagination(params.per_page, params.page) {
            return tool_error(&e);
        }

        let request = ApiRequest::get("/spaces")
            .query("per_page", params.per_page)
            .query_opt("page", params.page)
            .query_opt("status", params.status.map(|s| s.as_str()))
            .query_opt("type", params.space_type.as_deref())
            .query_opt("privacy", params.privacy.map(|p| p.as_str()))
            .query_opt("search", params.search.as_deref());

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(ListSpacesTool, ListSpacesParams);

// ============================================================================
// fc_get_space
// ============================================================================

/// Parameters for fetching a single space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetSpaceParams {
    #[schemars(description = "The ID of the space to retrieve")]
    pub space_id: u64,
}

/// Get detailed information about a specific space.
pub struct GetSpaceTool;

impl GetSpaceTool {
    pub const NAME: &'static str = "fc_get_space";
    pub const DESCRIPTION: &'static str =
        "Get detailed information about a specific FluentCommunity space.";

    pub async fn execute(params: &GetSpaceParams, ctx: &ToolContext) -> CallToolResult {
        dispatch(ctx, ApiRequest::get(format!("/spaces/{}", params.space_id))).await
    }
}

impl_tool_plumbing!(GetSpaceTool, GetSpaceParams);

// ============================================================================
// fc_create_space
// ============================================================================

/// Parameters for creating a space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSpaceParams {
    #[schemars(description = "Space title")]
    pub title: String,

    #[schemars(description = "Space slug (derived from the title when omitted)")]
    pub slug: Option<String>,

    #[schemars(description = "Space description")]
    pub description: Option<String>,

    #[schemars(description = "Space type")]
    #[serde(rename = "type")]
    pub space_type: Option<String>,

    #[schemars(description = "Privacy setting (default: public)")]
    #[serde(default)]
    pub privacy: SpacePrivacy,

    #[schemars(description = "Space status (default: active)")]
    #[serde(default)]
    pub status: NewSpaceStatus,
}

/// Create a new space.
pub struct CreateSpaceTool;

impl CreateSpaceTool {
    pub const NAME: &'static str = "fc_create_space";
    pub const DESCRIPTION: &'static str =
        "Create a new FluentCommunity space. The slug defaults to a hyphenated lowercase form of the title.";

    pub async fn execute(params: &CreateSpaceParams, ctx: &ToolContext) -> CallToolResult {
        let slug = params
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&params.title));

        info!("Creating space '{}' (slug: {})", params.title, slug);

        let request = ApiRequest::post("/spaces")
            .field("title", &params.title)
            .field("slug", slug)
            .field("privacy", params.privacy)
            .field("status", params.status)
            .field_opt("description", &params.description)
            .field_opt("type", &params.space_type);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(CreateSpaceTool, CreateSpaceParams);

// ============================================================================
// fc_update_space
// ============================================================================

/// Parameters for updating a space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSpaceParams {
    #[schemars(description = "The ID of the space to update")]
    pub space_id: u64,

    #[schemars(description = "Space title")]
    pub title: Option<String>,

    #[schemars(description = "Space description")]
    pub description: Option<String>,

    #[schemars(description = "Privacy setting")]
    pub privacy: Option<SpacePrivacy>,

    #[schemars(description = "Space status")]
    pub status: Option<SpaceStatus>,
}

/// Update an existing space.
pub struct UpdateSpaceTool;

impl UpdateSpaceTool {
    pub const NAME: &'static str = "fc_update_space";
    pub const DESCRIPTION: &'static str = "Update an existing FluentCommunity space.";

    pub async fn execute(params: &UpdateSpaceParams, ctx: &ToolContext) -> CallToolResult {
        let request =
            ApiRequest::update(ctx.update_style, format!("/spaces/{}", params.space_id))
                .field_opt("title", &params.title)
                .field_opt("description", &params.description)
                .field_opt("privacy", &params.privacy)
                .field_opt("status", &params.status);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(UpdateSpaceTool, UpdateSpaceParams);

// ============================================================================
// fc_delete_space
// ============================================================================

/// Parameters for deleting a space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeleteSpaceParams {
    #[schemars(description = "The ID of the space to delete")]
    pub space_id: u64,
}

/// Delete a space.
pub struct DeleteSpaceTool;

impl DeleteSpaceTool {
    pub const NAME: &'static str = "fc_delete_space";
    pub const DESCRIPTION: &'static str = "Delete a FluentCommunity space.";

    pub async fn execute(params: &DeleteSpaceParams, ctx: &ToolContext) -> CallToolResult {
        dispatch_summary(
            ctx,
            ApiRequest::delete(format!("/spaces/{}", params.space_id)),
            format!("Deleted space {}", params.space_id),
        )
        .await
    }
}

impl_tool_plumbing!(DeleteSpaceTool, DeleteSpaceParams);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::common::testing::{args, recording_context, result_text};
    use super::*;
    use crate::core::api::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_space_derives_slug_from_title() {
        let (gateway, ctx) = recording_context();
        CreateSpaceTool::handle(args(json!({"title": "My Cool Space"})), &ctx).await;

        let request = &gateway.requests()[0];
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "/spaces");
        assert_eq!(request.body_value("slug"), Some(&json!("my-cool-space")));
        assert_eq!(request.body_value("privacy"), Some(&json!("public")));
        assert_eq!(request.body_value("status"), Some(&json!("active")));
    }

    #[tokio::test]
    async fn test_create_space_explicit_slug_wins() {
        let (gateway, ctx) = recording_context();
        CreateSpaceTool::handle(
            args(json!({"title": "My Cool Space", "slug": "custom-slug"})),
            &ctx,
        )
        .await;

        let request = &gateway.requests()[0];
        assert_eq!(request.body_value("slug"), Some(&json!("custom-slug")));
    }

    #[tokio::test]
    async fn test_create_space_requires_title() {
        let (gateway, ctx) = recording_context();
        let result = CreateSpaceTool::handle(args(json!({})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("title"));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_space_rejects_archived_status() {
        let (gateway, ctx) = recording_context();
        let result = CreateSpaceTool::handle(
            args(json!({"title": "Demo", "status": "archived"})),
            &ctx,
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_list_spaces_filters() {
        let (gateway, ctx) = recording_context();
        ListSpacesTool::handle(
            args(json!({"status": "archived", "privacy": "private"})),
            &ctx,
        )
        .await;

        let request = &gateway.requests()[0];
        assert_eq!(request.path(), "/spaces");
        assert_eq!(request.query_value("status"), Some("archived"));
        assert_eq!(request.query_value("privacy"), Some("private"));
        assert_eq!(request.query_value("per_page"), Some("20"));
    }

    #[tokio::test]
    async fn test_list_spaces_rejects_bad_privacy() {
        let (gateway, ctx) = recording_context();
        let result = ListSpacesTool::handle(args(json!({"privacy": "friends"})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_space_body_excludes_id() {
        let (gateway, ctx) = recording_context();
        UpdateSpaceTool::handle(
            args(json!({"space_id": 4, "status": "archived"})),
            &ctx,
        )
        .await;

        let request = &gateway.requests()[0];
        assert_eq!(request.method(), Method::Put);
        assert_eq!(request.path(), "/spaces/4");
        assert_eq!(request.body_value("status"), Some(&json!("archived")));
        assert_eq!(request.body_value("space_id"), None);
    }

    #[tokio::test]
    async fn test_get_and_delete_space_paths() {
        let (gateway, ctx) = recording_context();
        GetSpaceTool::handle(args(json!({"space_id": 11})), &ctx).await;
        DeleteSpaceTool::handle(args(json!({"space_id": 11})), &ctx).await;

        let requests = gateway.requests();
        assert_eq!(requests[0].method(), Method::Get);
        assert_eq!(requests[0].path(), "/spaces/11");
        assert_eq!(requests[1].method(), Method::Delete);
        assert_eq!(requests[1].path(), "/spaces/11");
    }
}
