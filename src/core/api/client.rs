//! WordPress REST API client.
//!
//! `ApiGateway` is the seam between tool handlers and the network: handlers
//! hand over an `ApiRequest` and get back the parsed JSON body. The real
//! implementation (`WpClient`) issues exactly one authenticated HTTP call per
//! request; tests substitute a recording fake.

use async_trait::async_trait;
use base64::Engine;
use serde_json::Value;
use tracing::debug;

use super::{ApiError, ApiRequest, Method};
use crate::core::config::{ApiConfig, WpCredentials};

/// REST namespace of the fluent-community-manager WordPress plugin.
const API_NAMESPACE: &str = "/wp-json/fc-manager/v1";

/// Gateway through which every remote call passes.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// Perform the request and return the parsed JSON response body.
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Authenticated reqwest client for the FluentCommunity manager API.
pub struct WpClient {
    http: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl WpClient {
    /// Build a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        let base_url = format!(
            "{}{}",
            config.site_url.trim_end_matches('/'),
            API_NAMESPACE
        );

        Ok(Self {
            http,
            base_url,
            auth_header: auth_header(&config.credentials),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ApiGateway for WpClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, request.path());
        debug!("{} {}", request.method().as_str(), url);

        let mut builder = match request.method() {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };

        builder = builder.header(reqwest::header::AUTHORIZATION, &self.auth_header);

        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}

/// Build the Authorization header value for the configured credentials.
fn auth_header(credentials: &WpCredentials) -> String {
    match credentials {
        WpCredentials::ApplicationPassword { username, password } => {
            let encoded = base64::engine::general_purpose::STANDARD
                .encode(format!("{}:{}", username, password));
            format!("Basic {}", encoded)
        }
        WpCredentials::Bearer { token } => format!("Bearer {}", token),
    }
}

// ============================================================================
// Test support
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_basic() {
        let header = auth_header(&WpCredentials::ApplicationPassword {
            username: "admin".to_string(),
            password: "abcd efgh".to_string(),
        });
        // base64("admin:abcd efgh")
        assert_eq!(header, "Basic YWRtaW46YWJjZCBlZmdo");
    }

    #[test]
    fn test_auth_header_bearer() {
        let header = auth_header(&WpCredentials::Bearer {
            token: "jwt-token".to_string(),
        });
        assert_eq!(header, "Bearer jwt-token");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = ApiConfig {
            site_url: "https://example.com/".to_string(),
            credentials: WpCredentials::Bearer {
                token: "t".to_string(),
            },
            update_style: Default::default(),
            table_prefix: "fcom_".to_string(),
        };
        let client = WpClient::new(&config).unwrap();
        assert_eq!(
            client.base_url(),
            "https://example.com/wp-json/fc-manager/v1"
        );
    }

    #[tokio::test]
    async fn test_recording_gateway_replays_in_order() {
        let gateway = testing::RecordingGateway::new();
        gateway.push_ok(serde_json::json!({"id": 1}));
        gateway.push_ok(serde_json::json!({"id": 2}));

        let first = gateway.send(ApiRequest::get("/posts/1")).await.unwrap();
        let second = gateway.send(ApiRequest::get("/posts/2")).await.unwrap();

        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
        assert_eq!(gateway.call_count(), 2);
    }
}
