//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by resource
//! domain (one file per remote resource family).

pub mod analytics;
pub mod bulk;
pub mod chat;
pub mod comments;
pub mod common;
pub mod members;
pub mod posts;
pub mod search;
pub mod spaces;
pub mod terms;

pub use analytics::SpaceAnalyticsTool;
pub use bulk::{BulkCreatePostsTool, BulkDeletePostsTool, BulkUpdatePostsTool};
pub use chat::{ListChatMessagesTool, ListChatThreadsTool, SendChatMessageTool};
pub use comments::{
    CreateCommentTool, DeleteCommentTool, GetCommentTool, ListCommentsTool, UpdateCommentTool,
};
pub use members::{
    AddSpaceMemberTool, ListSpaceMembersTool, RemoveSpaceMemberTool, UpdateSpaceMemberTool,
};
pub use posts::{CreatePostTool, DeletePostTool, GetPostTool, ListPostsTool, UpdatePostTool};
pub use search::SearchContentTool;
pub use spaces::{
    CreateSpaceTool, DeleteSpaceTool, GetSpaceTool, ListSpacesTool, UpdateSpaceTool,
};
pub use terms::{CreateTermTool, ListTermsTool};

/// Generate the protocol plumbing every tool shares: argument parsing via
/// `handle`, metadata via `to_tool`, and the rmcp route via `create_route`.
/// A tool only writes its `NAME`, `DESCRIPTION`, params struct and
/// `execute`; parse failures become error-flagged results before any
/// network call.
macro_rules! impl_tool_plumbing {
    ($tool:ident, $params:ty) => {
        impl $tool {
            /// Parse raw arguments and run the tool.
            pub async fn handle(
                args: rmcp::model::JsonObject,
                ctx: &$crate::domains::tools::ToolContext,
            ) -> rmcp::model::CallToolResult {
                match $crate::domains::tools::definitions::common::parse_params::<$params>(args) {
                    Ok(params) => Self::execute(&params, ctx).await,
                    Err(e) => $crate::domains::tools::definitions::common::tool_error(&e),
                }
            }

            /// Create a Tool model for this tool (metadata).
            pub fn to_tool() -> rmcp::model::Tool {
                rmcp::model::Tool {
                    name: Self::NAME.into(),
                    description: Some(Self::DESCRIPTION.into()),
                    input_schema: rmcp::handler::server::tool::cached_schema_for_type::<$params>(),
                    annotations: None,
                    output_schema: None,
                    icons: None,
                    meta: None,
                    title: None,
                }
            }

            /// Create a ToolRoute for STDIO/TCP transport.
            pub fn create_route<S>(
                ctx: std::sync::Arc<$crate::domains::tools::ToolContext>,
            ) -> rmcp::handler::server::tool::ToolRoute<S>
            where
                S: Send + Sync + 'static,
            {
                use futures::FutureExt;

                rmcp::handler::server::tool::ToolRoute::new_dyn(
                    Self::to_tool(),
                    move |call: rmcp::handler::server::tool::ToolCallContext<'_, S>| {
                        let args = call.arguments.clone().unwrap_or_default();
                        let ctx = ctx.clone();
                        async move { Ok(Self::handle(args, &ctx).await) }.boxed()
                    },
                )
            }
        }
    };
}

pub(crate) use impl_tool_plumbing;
