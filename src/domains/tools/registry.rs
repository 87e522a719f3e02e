//! Tool registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The canonical list of available tools
//! - Name-based dispatch for tool calls
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::definitions::common::error_result;
use super::definitions::{
    AddSpaceMemberTool, BulkCreatePostsTool, BulkDeletePostsTool, BulkUpdatePostsTool,
    CreateCommentTool, CreatePostTool, CreateSpaceTool, CreateTermTool, DeleteCommentTool,
    DeletePostTool, DeleteSpaceTool, GetCommentTool, GetPostTool, GetSpaceTool,
    ListChatMessagesTool, ListChatThreadsTool, ListCommentsTool, ListPostsTool,
    ListSpaceMembersTool, ListSpacesTool, ListTermsTool, RemoveSpaceMemberTool,
    SearchContentTool, SendChatMessageTool, SpaceAnalyticsTool, UpdateCommentTool,
    UpdatePostTool, UpdateSpaceMemberTool, UpdateSpaceTool,
};
use super::ToolContext;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// The registry is the single source of truth for the tool set. The rmcp
/// router is built from the same definitions, and a test asserts the two
/// stay in sync.
pub struct ToolRegistry {
    context: Arc<ToolContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListPostsTool::NAME,
            GetPostTool::NAME,
            CreatePostTool::NAME,
            UpdatePostTool::NAME,
            DeletePostTool::NAME,
            ListSpacesTool::NAME,
            GetSpaceTool::NAME,
            CreateSpaceTool::NAME,
            UpdateSpaceTool::NAME,
            DeleteSpaceTool::NAME,
            ListCommentsTool::NAME,
            GetCommentTool::NAME,
            CreateCommentTool::NAME,
            UpdateCommentTool::NAME,
            DeleteCommentTool::NAME,
            ListSpaceMembersTool::NAME,
            AddSpaceMemberTool::NAME,
            UpdateSpaceMemberTool::NAME,
            RemoveSpaceMemberTool::NAME,
            ListChatThreadsTool::NAME,
            ListChatMessagesTool::NAME,
            SendChatMessageTool::NAME,
            ListTermsTool::NAME,
            CreateTermTool::NAME,
            SearchContentTool::NAME,
            SpaceAnalyticsTool::NAME,
            BulkCreatePostsTool::NAME,
            BulkUpdatePostsTool::NAME,
            BulkDeletePostsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListPostsTool::to_tool(),
            GetPostTool::to_tool(),
            CreatePostTool::to_tool(),
            UpdatePostTool::to_tool(),
            DeletePostTool::to_tool(),
            ListSpacesTool::to_tool(),
            GetSpaceTool::to_tool(),
            CreateSpaceTool::to_tool(),
            UpdateSpaceTool::to_tool(),
            DeleteSpaceTool::to_tool(),
            ListCommentsTool::to_tool(),
            GetCommentTool::to_tool(),
            CreateCommentTool::to_tool(),
            UpdateCommentTool::to_tool(),
            DeleteCommentTool::to_tool(),
            ListSpaceMembersTool::to_tool(),
            AddSpaceMemberTool::to_tool(),
            UpdateSpaceMemberTool::to_tool(),
            RemoveSpaceMemberTool::to_tool(),
            ListChatThreadsTool::to_tool(),
            ListChatMessagesTool::to_tool(),
            SendChatMessageTool::to_tool(),
            ListTermsTool::to_tool(),
            CreateTermTool::to_tool(),
            SearchContentTool::to_tool(),
            SpaceAnalyticsTool::to_tool(),
            BulkCreatePostsTool::to_tool(),
            BulkUpdatePostsTool::to_tool(),
            BulkDeletePostsTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Unknown names yield an error-flagged result; they never become
    /// protocol errors.
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        let ctx = &self.context;
        match name {
            ListPostsTool::NAME => ListPostsTool::handle(arguments, ctx).await,
            GetPostTool::NAME => GetPostTool::handle(arguments, ctx).await,
            CreatePostTool::NAME => CreatePostTool::handle(arguments, ctx).await,
            UpdatePostTool::NAME => UpdatePostTool::handle(arguments, ctx).await,
            DeletePostTool::NAME => DeletePostTool::handle(arguments, ctx).await,
            ListSpacesTool::NAME => ListSpacesTool::handle(arguments, ctx).await,
            GetSpaceTool::NAME => GetSpaceTool::handle(arguments, ctx).await,
            CreateSpaceTool::NAME => CreateSpaceTool::handle(arguments, ctx).await,
            UpdateSpaceTool::NAME => UpdateSpaceTool::handle(arguments, ctx).await,
            DeleteSpaceTool::NAME => DeleteSpaceTool::handle(arguments, ctx).await,
            ListCommentsTool::NAME => ListCommentsTool::handle(arguments, ctx).await,
            GetCommentTool::NAME => GetCommentTool::handle(arguments, ctx).await,
            CreateCommentTool::NAME => CreateCommentTool::handle(arguments, ctx).await,
            UpdateCommentTool::NAME => UpdateCommentTool::handle(arguments, ctx).await,
            DeleteCommentTool::NAME => DeleteCommentTool::handle(arguments, ctx).await,
            ListSpaceMembersTool::NAME => ListSpaceMembersTool::handle(arguments, ctx).await,
            AddSpaceMemberTool::NAME => AddSpaceMemberTool::handle(arguments, ctx).await,
            UpdateSpaceMemberTool::NAME => UpdateSpaceMemberTool::handle(arguments, ctx).await,
            RemoveSpaceMemberTool::NAME => RemoveSpaceMemberTool::handle(arguments, ctx).await,
            ListChatThreadsTool::NAME => ListChatThreadsTool::handle(arguments, ctx).await,
            ListChatMessagesTool::NAME => ListChatMessagesTool::handle(arguments, ctx).await,
            SendChatMessageTool::NAME => SendChatMessageTool::handle(arguments, ctx).await,
            ListTermsTool::NAME => ListTermsTool::handle(arguments, ctx).await,
            CreateTermTool::NAME => CreateTermTool::handle(arguments, ctx).await,
            SearchContentTool::NAME => SearchContentTool::handle(arguments, ctx).await,
            SpaceAnalyticsTool::NAME => SpaceAnalyticsTool::handle(arguments, ctx).await,
            BulkCreatePostsTool::NAME => BulkCreatePostsTool::handle(arguments, ctx).await,
            BulkUpdatePostsTool::NAME => BulkUpdatePostsTool::handle(arguments, ctx).await,
            BulkDeletePostsTool::NAME => BulkDeletePostsTool::handle(arguments, ctx).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                error_result(&format!("Unknown tool: {}", name))
            }
        }
    }
}
