//! Structured API request values.
//!
//! Tools never concatenate URLs or touch the HTTP client directly. They build
//! an `ApiRequest` (method, path, query pairs, body map) which the gateway
//! turns into exactly one HTTP call. Keeping the request a plain value means
//! every tool can be unit-tested without a network.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP method for an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// How "update" operations are routed on the remote plugin.
///
/// The plugin has shipped two routings for updates: `PUT /{resource}/{id}`
/// and `POST /{resource}/{id}`. Both are valid external API shapes; which one
/// the remote expects depends on the installed plugin version, so it is a
/// configuration choice rather than a per-tool one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStyle {
    /// `PUT /{resource}/{id}` (current plugin routing).
    #[default]
    Put,
    /// `POST /{resource}/{id}` (legacy plugin routing).
    #[serde(rename = "post")]
    PostToId,
}

/// A single request against the FluentCommunity manager REST namespace.
///
/// `path` is relative to the namespace root and already carries any path
/// parameters. Query pairs keep insertion order; the body is a JSON object
/// assembled field by field so absent optional arguments never appear in the
/// outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Map<String, Value>>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Build an update request with the configured routing style.
    pub fn update(style: UpdateStyle, path: impl Into<String>) -> Self {
        match style {
            UpdateStyle::Put => Self::put(path),
            UpdateStyle::PostToId => Self::post(path),
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter if the value is present.
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Set a body field.
    pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.body
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
        self
    }

    /// Set a body field if the value is present.
    pub fn field_opt<T: Serialize>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Look up a query parameter by key (first match).
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref()
    }

    /// Look up a body field by key.
    pub fn body_value(&self, key: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|b| b.get(key))
    }
}
