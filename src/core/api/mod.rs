//! WordPress REST API adapter.
//!
//! This module contains the client-side plumbing for the FluentCommunity
//! manager REST namespace (`/wp-json/fc-manager/v1`):
//! - `request.rs` - structured request values built by the tools
//! - `client.rs` - the `ApiGateway` trait and its reqwest implementation
//! - `error.rs` - transport-level error types

mod client;
mod error;
mod request;

pub use client::{ApiGateway, WpClient};
pub use error::ApiError;
pub use request::{ApiRequest, Method, UpdateStyle};

#[cfg(test)]
pub use client::testing::RecordingGateway;
