//! Tool router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module only chains them
//! together for the STDIO/TCP transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

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

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListPostsTool::create_route(ctx.clone()))
        .with_route(GetPostTool::create_route(ctx.clone()))
        .with_route(CreatePostTool::create_route(ctx.clone()))
        .with_route(UpdatePostTool::create_route(ctx.clone()))
        .with_route(DeletePostTool::create_route(ctx.clone()))
        .with_route(ListSpacesTool::create_route(ctx.clone()))
        .with_route(GetSpaceTool::create_route(ctx.clone()))
        .with_route(CreateSpaceTool::create_route(ctx.clone()))
        .with_route(UpdateSpaceTool::create_route(ctx.clone()))
        .with_route(DeleteSpaceTool::create_route(ctx.clone()))
        .with_route(ListCommentsTool::create_route(ctx.clone()))
        .with_route(GetCommentTool::create_route(ctx.clone()))
        .with_route(CreateCommentTool::create_route(ctx.clone()))
        .with_route(UpdateCommentTool::create_route(ctx.clone()))
        .with_route(DeleteCommentTool::create_route(ctx.clone()))
        .with_route(ListSpaceMembersTool::create_route(ctx.clone()))
        .with_route(AddSpaceMemberTool::create_route(ctx.clone()))
        .with_route(UpdateSpaceMemberTool::create_route(ctx.clone()))
        .with_route(RemoveSpaceMemberTool::create_route(ctx.clone()))
        .with_route(ListChatThreadsTool::create_route(ctx.clone()))
        .with_route(ListChatMessagesTool::create_route(ctx.clone()))
        .with_route(SendChatMessageTool::create_route(ctx.clone()))
        .with_route(ListTermsTool::create_route(ctx.clone()))
        .with_route(CreateTermTool::create_route(ctx.clone()))
        .with_route(SearchContentTool::create_route(ctx.clone()))
        .with_route(SpaceAnalyticsTool::create_route(ctx.clone()))
        .with_route(BulkCreatePostsTool::create_route(ctx.clone()))
        .with_route(BulkUpdatePostsTool::create_route(ctx.clone()))
        .with_route(BulkDeletePostsTool::create_route(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::definitions::common::testing::recording_context;
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_context() -> Arc<ToolContext> {
        let (_, ctx) = recording_context();
        Arc::new(ctx)
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        let tools = router.list_all();
        assert_eq!(tools.len(), 29);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"fc_list_posts"));
        assert!(names.contains(&"fc_update_post"));
        assert!(names.contains(&"fc_create_space"));
        assert!(names.contains(&"fc_list_space_members"));
        assert!(names.contains(&"fc_list_chat_threads"));
        assert!(names.contains(&"fc_create_term"));
        assert!(names.contains(&"fc_search_content"));
        assert!(names.contains(&"fc_get_space_analytics"));
        assert!(names.contains(&"fc_bulk_create_posts"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tool set
        let ctx = test_context();
        let registry = ToolRegistry::new(ctx.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ctx);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
