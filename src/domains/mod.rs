//! Domain modules for the MCP server.
//!
//! Business logic organized by bounded context. This server exposes a single
//! domain: FluentCommunity management tools.

pub mod tools;
