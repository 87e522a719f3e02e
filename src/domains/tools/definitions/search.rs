//! Content search tool.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::ToolContext;
use super::common::dispatch;
use super::impl_tool_plumbing;
use crate::core::api::ApiRequest;

/// Parameters for searching community content.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchContentParams {
    #[schemars(description = "Search query")]
    pub query: String,

    #[schemars(description = "Restrict the search to a single space")]
    pub space_id: Option<u64>,
}

/// Search posts and comments across the community.
pub struct SearchContentTool;

impl SearchContentTool {
    pub const NAME: &'static str = "fc_search_content";
    pub const DESCRIPTION: &'static str =
        "Search FluentCommunity content by keyword, optionally restricted to one space.";

    pub async fn execute(params: &SearchContentParams, ctx: &ToolContext) -> CallToolResult {
        let request = ApiRequest::get("/search")
            .query("query", &params.query)
            .query_opt("space_id", params.space_id);

        dispatch(ctx, request).await
    }
}

impl_tool_plumbing!(SearchContentTool, SearchContentParams);

#[cfg(test)]
mod tests {
    use super::super::common::testing::{args, recording_context};
    use super::*;
    use crate::core::api::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_query_forwarded() {
        let (gateway, ctx) = recording_context();
        SearchContentTool::handle(args(json!({"query": "rust", "space_id": 2})), &ctx).await;

        let request = &gateway.requests()[0];
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.path(), "/search");
        assert_eq!(request.query_value("query"), Some("rust"));
        assert_eq!(request.query_value("space_id"), Some("2"));
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let (gateway, ctx) = recording_context();
        let result = SearchContentTool::handle(args(json!({"space_id": 2})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(gateway.call_count(), 0);
    }
}
