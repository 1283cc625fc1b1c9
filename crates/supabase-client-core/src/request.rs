use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::error::SupabaseResult;
use crate::filter::{escape, Filters};
use crate::paths::Surface;

/// One outbound call, before it is bound to a client's address and credentials.
///
/// Query pairs are stored already escaped. Filters added through
/// [`ApiRequest::filters`] are equality-encoded; pairs added through
/// [`ApiRequest::query_pair`] are only escaped.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    surface: Surface,
    path: String,
    query: Vec<String>,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, surface: Surface, path: impl Into<String>) -> Self {
        Self {
            method,
            surface,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// A request against a table or view under `/rest/v1`.
    pub fn rest(method: Method, resource: impl Into<String>) -> Self {
        Self::new(method, Surface::Rest, resource)
    }

    /// A request against a GoTrue endpoint under `/auth/v1`.
    pub fn auth(method: Method, path: impl Into<String>) -> Self {
        Self::new(method, Surface::Auth, path)
    }

    /// Append equality filters (`key=eq.<value>`).
    pub fn filters(mut self, filters: &Filters) -> Self {
        if let Some(encoded) = filters.to_query_string() {
            self.query.push(encoded);
        }
        self
    }

    /// Append a plain query pair, escaped but not equality-encoded.
    pub fn query_pair(mut self, key: &str, value: &str) -> Self {
        self.query.push(format!("{}={}", escape(key), escape(value)));
        self
    }

    /// Attach an already-serialized body, sent as-is.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `payload` as JSON and attach it as the body.
    pub fn json<T: Serialize + ?Sized>(self, payload: &T) -> SupabaseResult<Self> {
        let bytes = serde_json::to_vec(payload)?;
        Ok(self.body(bytes))
    }

    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Resolve against a project base address:
    /// `{base}{surface prefix}/{path}?{query}`.
    ///
    /// A trailing slash on `base` and a leading slash on the path are collapsed.
    /// A query already present in the path (`Food?id=eq.10`) is kept as-is and
    /// the builder's pairs are appended after it.
    pub fn url(&self, base: &str) -> SupabaseResult<Url> {
        let raw = format!(
            "{}{}/{}",
            base.trim_end_matches('/'),
            self.surface.prefix(),
            self.path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw)?;
        if !self.query.is_empty() {
            let added = self.query.join("&");
            let merged = match url.query() {
                Some(existing) if !existing.is_empty() => format!("{}&{}", existing, added),
                _ => added,
            };
            url.set_query(Some(&merged));
        }
        Ok(url)
    }

    pub(crate) fn into_parts(self) -> (Method, Option<Vec<u8>>) {
        (self.method, self.body)
    }
}
