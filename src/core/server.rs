//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tool router.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/`, one file per resource
//! family. Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (request build + dispatch)
//! - `create_route()` for the ToolRouter
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::api::WpClient;
use super::config::Config;
use crate::domains::tools::{build_tool_router, ToolContext};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the FluentCommunity tool definitions.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only when the HTTP client cannot be constructed; tool failures
    /// at runtime never tear the server down.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let config = Arc::new(config);
        let client = WpClient::new(&config.api)?;
        let context = Arc::new(ToolContext::new(
            Arc::new(client),
            config.api.update_style,
        ));

        Ok(Self {
            tool_router: build_tool_router::<Self>(context),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "FluentCommunity manager. Provides tools for managing posts, spaces, \
                 comments, members, chat, terms, search, analytics and bulk post \
                 operations on a FluentCommunity site."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
