//! Taxonomy term tools.
//!
//! Listing and creation against `/terms`. Term creation derives a slug from
//! the title the same way space creation does.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::ToolContext;
use super::common::{default_per_page_50, dispatch, slugify, tool_error, validate_pagination};
use super::impl_tool_plumbing;
use crate::core::api::ApiRequest;

// ============================================================================
// fc_list_terms
// ============================================================================

/// Parameters for listing taxonomy terms.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListTermsParams {
    #[schemars(description = "Filter by taxonomy name")]
    pub taxonomy: Option<String>,

    #[schemars(description = "Items per page (default: 50, max: 100)")]
    #[serde(default = "default_per_page_50")]
    pub per_page: u64,

    #[schemars(description = "Page number (default: 1)")]
    pub page: Option<u64>,
}

/// List taxonomy terms.
pub struct ListTermsTool;

impl ListTermsTool {
    pub const NAME: &'static str = "fc_list_terms";
    pub const DESCRIPTION: &'static str =
        "List FluentCommunity taxonomy terms, optionally filtered by taxonomy.";

    pub async fn execute(params: &ListTermsParams, ctx: &ToolContext) -> CallToolResult {
        if let Err(e) = validate_pagination(params.per_page, params.page) {
            return tool_error(&e);
        }

        let request = ApiRequest::get("/terms")
            .query("per_page", params.per_page)
            .query_opt("page", params.page)
            .query_opt("taxonomy", params.taxonomy.as_deref());

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(ListTermsTool, ListTermsParams);

// ============================================================================
// fc_create_term
// ============================================================================

/// Parameters for creating a term.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTermParams {
    #[schemars(description = "Term title")]
    pub title: String,

    #[schemars(description = "Term slug (derived from the title when omitted)")]
    pub slug: Option<String>,

    #[schemars(description = "Term description")]
    pub description: Option<String>,
}

/// Create a new taxonomy term.
pub struct CreateTermTool;

impl CreateTermTool {
    pub const NAME: &'static str = "fc_create_term";
    pub const DESCRIPTION: &'static str =
        "Create a new FluentCommunity taxonomy term. The slug defaults to a hyphenated lowercase form of the title.";

    pub async fn execute(params: &CreateTermParams, ctx: &ToolContext) -> CallToolResult {
        let slug = params
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&params.title));

        let request = ApiRequest::post("/terms")
            .field("title", &params.title)
            .field("slug", slug)
            .field_opt("description", &params.description);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(CreateTermTool, CreateTermParams);

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
    async fn test_list_terms_taxonomy_filter() {
        let (gateway, ctx) = recording_context();
        ListTermsTool::handle(args(json!({"taxonomy": "topics"})), &ctx).await;

        let request = &gateway.requests()[0];
        assert_eq!(request.path(), "/terms");
        assert_eq!(request.query_value("taxonomy"), Some("topics"));
        assert_eq!(request.query_value("per_page"), Some("50"));
    }

    #[tokio::test]
    async fn test_create_term_derives_slug() {
        let (gateway, ctx) = recording_context();
        CreateTermTool::handle(args(json!({"title": "Release Notes"})), &ctx).await;

        let request = &gateway.requests()[0];
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "/terms");
        assert_eq!(request.body_value("slug"), Some(&json!("release-notes")));
    }

    #[tokio::test]
    async fn test_create_term_requires_title() {
        let (gateway, ctx) = recording_context();
        let result = CreateTermTool::handle(args(json!({"slug": "x"})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(gateway.call_count(), 0);
    }
}
