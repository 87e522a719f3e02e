//! Space analytics tool.
//!
//! Aggregates activity counts for a space from several dependent list calls.
//! Calls run strictly sequentially with one request in flight at a time, so
//! a busy space never fans out into a request burst against the site.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

use super::super::{ToolContext, ToolError};
use super::common::{json_result, records, tool_error, MAX_PER_PAGE};
use super::impl_tool_plumbing;
use crate::core::api::{ApiError, ApiRequest};

/// Parameters for space analytics.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SpaceAnalyticsParams {
    #[schemars(description = "The ID of the space to analyze")]
    pub space_id: u64,

    #[schemars(description = "Start of the reporting window (echoed back)")]
    pub date_from: Option<String>,

    #[schemars(description = "End of the reporting window (echoed back)")]
    pub date_to: Option<String>,
}

/// Aggregate post, member and comment counts for a space.
pub struct SpaceAnalyticsTool;

impl SpaceAnalyticsTool {
    pub const NAME: &'static str = "fc_get_space_analytics";
    pub const DESCRIPTION: &'static str =
        "Get activity analytics for a FluentCommunity space: post, member and comment totals.";

    pub async fn execute(params: &SpaceAnalyticsParams, ctx: &ToolContext) -> CallToolResult {
        match Self::aggregate(params, ctx).await {
            Ok(report) => json_result(&report),
            Err(e) => tool_error(&ToolError::Transport(e)),
        }
    }

    async fn aggregate(
        params: &SpaceAnalyticsParams,
        ctx: &ToolContext,
    ) -> Result<Value, ApiError> {
        let posts = ctx
            .gateway
            .send(
                ApiRequest::get("/posts")
                    .query("space_id", params.space_id)
                    .query("per_page", MAX_PER_PAGE),
            )
            .await?;
        let post_records = records(&posts).to_vec();

        let members = ctx
            .gateway
            .send(
                ApiRequest::get(format!("/spaces/{}/members", params.space_id))
                    .query("per_page", MAX_PER_PAGE),
            )
            .await?;
        let total_members = records(&members).len();

        let mut total_comments = 0usize;
        for post in &post_records {
            let Some(post_id) = post.get("id").and_then(Value::as_u64) else {
                continue;
            };
            let comments = ctx
                .gateway
                .send(
                    ApiRequest::get("/comments")
                        .query("post_id", post_id)
                        .query("per_page", MAX_PER_PAGE),
                )
                .await?;
            total_comments += records(&comments).len();
        }

        Ok(json!({
            "space_id": params.space_id,
            "total_posts": post_records.len(),
            "total_members": total_members,
            "total_comments": total_comments,
            "date_from": params.date_from.as_deref().unwrap_or("all time"),
            "date_to": params.date_to.as_deref().unwrap_or("now"),
        }))
    }
}

impl_tool_plumbing!(SpaceAnalyticsTool, SpaceAnalyticsParams);

#[cfg(test)]
mod tests {
    use super::super::common::testing::{args, recording_context, result_text};
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_analytics_aggregates_counts() {
        let (gateway, ctx) = recording_context();
        gateway.push_ok(json!([{"id": 1}, {"id": 2}]));
        gateway.push_ok(json!({"data": [{"user_id": 7}, {"user_id": 8}, {"user_id": 9}]}));
        gateway.push_ok(json!([{"id": 10}, {"id": 11}]));
        gateway.push_ok(json!([{"id": 12}]));

        let result =
            SpaceAnalyticsTool::handle(args(json!({"space_id": 4})), &ctx).await;

        assert_ne!(result.is_error, Some(true));
        let report: Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(report["total_posts"], 2);
        assert_eq!(report["total_members"], 3);
        assert_eq!(report["total_comments"], 3);
        assert_eq!(report["date_from"], "all time");
        assert_eq!(report["date_to"], "now");
    }

    #[tokio::test]
    async fn test_analytics_call_sequence() {
        let (gateway, ctx) = recording_context();
        gateway.push_ok(json!([{"id": 21}]));
        gateway.push_ok(json!([]));
        gateway.push_ok(json!([]));

        SpaceAnalyticsTool::handle(args(json!({"space_id": 4})), &ctx).await;

        let requests = gateway.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].path(), "/posts");
        assert_eq!(requests[0].query_value("space_id"), Some("4"));
        assert_eq!(requests[1].path(), "/spaces/4/members");
        assert_eq!(requests[2].path(), "/comments");
        assert_eq!(requests[2].query_value("post_id"), Some("21"));
    }

    #[tokio::test]
    async fn test_analytics_echoes_explicit_window() {
        let (gateway, ctx) = recording_context();
        gateway.push_ok(json!([]));
        gateway.push_ok(json!([]));

        let result = SpaceAnalyticsTool::handle(
            args(json!({"space_id": 4, "date_from": "2026-01-01", "date_to": "2026-06-30"})),
            &ctx,
        )
        .await;

        let report: Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(report["date_from"], "2026-01-01");
        assert_eq!(report["date_to"], "2026-06-30");
    }

    #[tokio::test]
    async fn test_analytics_stops_on_failure() {
        let (gateway, ctx) = recording_context();
        gateway.push_ok(json!([{"id": 1}]));
        gateway.push_err(crate::core::api::ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        });

        let result =
            SpaceAnalyticsTool::handle(args(json!({"space_id": 4})), &ctx).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(gateway.call_count(), 2);
    }
}
