//! Tools domain module.
//!
//! Every tool in this server is a thin mapping from a validated input schema
//! to a single request against the FluentCommunity manager REST API (bulk and
//! analytics tools issue an ordered sequence of such requests).
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, one file per resource domain
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and dispatch chokepoint
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Define params, execute(), handle() and to_tool() in the matching
//!    `definitions/` file (or a new one)
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a route in `router.rs` using `with_route()`
//! 4. Register the name and dispatch arm in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

use std::sync::Arc;

use crate::core::api::{ApiGateway, UpdateStyle};

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;

/// Shared dependencies handed to every tool handler.
///
/// The gateway is the only door to the network; the update style decides how
/// update requests are routed on the remote plugin.
#[derive(Clone)]
pub struct ToolContext {
    pub gateway: Arc<dyn ApiGateway>,
    pub update_style: UpdateStyle,
}

impl ToolContext {
    pub fn new(gateway: Arc<dyn ApiGateway>, update_style: UpdateStyle) -> Self {
        Self {
            gateway,
            update_style,
        }
    }
}
