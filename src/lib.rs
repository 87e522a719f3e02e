//! FluentCommunity MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that manages a
//! FluentCommunity site through the WordPress REST API.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the WordPress REST client, the main server, and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools exposed to clients, one file per FluentCommunity
//!     resource family (posts, spaces, comments, members, chat, terms,
//!     search, analytics, bulk operations)
//!
//! # Example
//!
//! ```rust,no_run
//! use fluent_community_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
