//! Space membership tools.
//!
//! Operations against `/spaces/{id}/members`. Removal verifies the
//! membership record exists before issuing the delete, so a stale user ID
//! surfaces as a clear "Member not found" error instead of a remote 404.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::super::{ToolContext, ToolError};
use super::common::{
    default_per_page_50, dispatch, records, text_result, tool_error, validate_pagination,
};
use super::impl_tool_plumbing;
use crate::core::api::ApiRequest;

// ============================================================================
// Shared field types
// ============================================================================

/// Membership status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Pending,
    Banned,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Banned => "banned",
        }
    }
}

fn default_role() -> String {
    "member".to_string()
}

// ============================================================================
// fc_list_space_members
// ============================================================================

/// Parameters for listing the members of a space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListSpaceMembersParams {
    #[schemars(description = "The ID of the space")]
    pub space_id: u64,

    #[schemars(description = "Filter by membership status")]
    pub status: Option<MemberStatus>,

    #[schemars(description = "Items per page (default: 50, max: 100)")]
    #[serde(default = "default_per_page_50")]
    pub per_page: u64,

    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u64>,
}

/// List members of a space.
pub struct ListSpaceMembersTool;

impl ListSpaceMembersTool {
    pub const NAME: &'static str = "fc_list_space_members";
    pub const DESCRIPTION: &'static str =
        "List the members of a FluentCommunity space, with optional status filtering and pagination.";

    pub async fn execute(params: &ListSpaceMembersParams, ctx: &ToolContext) -> CallToolResult {
        if let Err(e) = validate_pagination(params.per_page, params.page) {
            return tool_error(&e);
        }

        let request = ApiRequest::get(format!("/spaces/{}/members", params.space_id))
            .query("per_page", params.per_page)
            .query_opt("page", params.page)
            .query_opt("status", params.status.map(|s| s.as_str()));

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(ListSpaceMembersTool, ListSpaceMembersParams);

// ============================================================================
// fc_add_space_member
// ============================================================================

/// Parameters for adding a member to a space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AddSpaceMemberParams {
    #[schemars(description = "The ID of the space")]
    pub space_id: u64,

    #[schemars(description = "The ID of the user to add")]
    pub user_id: u64,

    #[schemars(description = "Role within the space (default: member)")]
    #[serde(default = "default_role")]
    pub role: String,
}

/// Add a user to a space.
pub struct AddSpaceMemberTool;

impl AddSpaceMemberTool {
    pub const NAME: &'static str = "fc_add_space_member";
    pub const DESCRIPTION: &'static str = "Add a user to a FluentCommunity space.";

    pub async fn execute(params: &AddSpaceMemberParams, ctx: &ToolContext) -> CallToolResult {
        info!(
            "Adding user {} to space {} as {}",
            params.user_id, params.space_id, params.role
        );

        let request = ApiRequest::post(format!("/spaces/{}/members", params.space_id))
            .field("user_id", params.user_id)
            .field("role", &params.role);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(AddSpaceMemberTool, AddSpaceMemberParams);

// ============================================================================
// fc_update_space_member
// ============================================================================

/// Parameters for updating a space membership.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSpaceMemberParams {
    #[schemars(description = "The ID of the space")]
    pub space_id: u64,

    #[schemars(description = "The ID of the member to update")]
    pub user_id: u64,

    #[schemars(description = "New role within the space")]
    pub role: Option<String>,
}

/// Update a member's role within a space.
pub struct UpdateSpaceMemberTool;

impl UpdateSpaceMemberTool {
    pub const NAME: &'static str = "fc_update_space_member";
    pub const DESCRIPTION: &'static str =
        "Update a member's role within a FluentCommunity space.";

    pub async fn execute(params: &UpdateSpaceMemberParams, ctx: &ToolContext) -> CallToolResult {
        let request = ApiRequest::put(format!(
            "/spaces/{}/members/{}",
            params.space_id, params.user_id
        ))
        .field_opt("role", &params.role);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(UpdateSpaceMemberTool, UpdateSpaceMemberParams);

// ============================================================================
// fc_remove_space_member
// ============================================================================

/// Parameters for removing a member from a space.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RemoveSpaceMemberParams {
    #[schemars(description = "The ID of the space")]
    pub space_id: u64,

    #[schemars(description = "The ID of the member to remove")]
    pub user_id: u64,
}

/// Remove a user from a space, verifying the membership first.
pub struct RemoveSpaceMemberTool;

impl RemoveSpaceMemberTool {
    pub const NAME: &'static str = "fc_remove_space_member";
    pub const DESCRIPTION: &'static str =
        "Remove a user from a FluentCommunity space. Fails without deleting anything if the user is not a member.";

    pub async fn execute(params: &RemoveSpaceMemberParams, ctx: &ToolContext) -> CallToolResult {
        let lookup = ApiRequest::get(format!("/spaces/{}/members", params.space_id))
            .query("user_id", params.user_id);

        let listing = match ctx.gateway.send(lookup).await {
            Ok(value) => value,
            Err(e) => return tool_error(&ToolError::Transport(e)),
        };

        if !membership_exists(&listing, params.user_id) {
            return tool_error(&ToolError::MemberNotFound {
                space_id: params.space_id,
                user_id: params.user_id,
            });
        }

        info!(
            "Removing user {} from space {}",
            params.user_id, params.space_id
        );

        match ctx
            .gateway
            .send(ApiRequest::delete(format!(
                "/spaces/{}/members/{}",
                params.space_id, params.user_id
            )))
            .await
        {
            Ok(_) => text_result(format!(
                "Removed user {} from space {}",
                params.user_id, params.space_id
            )),
            Err(e) => tool_error(&ToolError::Transport(e)),
        }
    }
}

impl_tool_plumbing!(RemoveSpaceMemberTool, RemoveSpaceMemberParams);

/// True when the member listing contains a record for the given user.
fn membership_exists(listing: &Value, user_id: u64) -> bool {
    records(listing).iter().any(|record| {
        record
            .get("user_id")
            .or_else(|| record.get("id"))
            .and_then(Value::as_u64)
            == Some(user_id)
    })
}

// ============================================================================
// Tests
// ============================================================================
