use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, warn};

use crate::config::SupabaseConfig;
use crate::error::{SupabaseError, SupabaseResult};
use crate::filter::Filters;
use crate::request::ApiRequest;
use crate::response::{classify, response_is_success};

/// The main client for a Supabase project.
///
/// Holds the project address, API key and the caller's access token, and runs
/// every request through one pipeline: URL assembly, header injection, one
/// round trip, status classification. Data-surface operations live here;
/// auth operations are provided by `supabase-client-auth` on top of
/// [`SupabaseClient::execute`].
///
/// # Example
/// ```ignore
/// use supabase_client_core::{Filters, SupabaseClient};
///
/// let client = SupabaseClient::new("https://your-project.supabase.co", "anon-key", user_jwt)?;
/// let rows = client.get("Food", Filters::from([("name", "Ramen")])).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    /// Create a client from a project URL, API key and access token.
    ///
    /// Neither the URL nor the key is validated here; an empty token means no
    /// `Authorization` header is sent.
    pub fn new(
        supabase_url: impl Into<String>,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> SupabaseResult<Self> {
        Self::from_config(SupabaseConfig::new(supabase_url, api_key).access_token(token))
    }

    /// Create a client from a full configuration.
    pub fn from_config(config: SupabaseConfig) -> SupabaseResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(ref agent) = config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder.build().map_err(SupabaseError::Transport)?;

        Ok(Self { http, config })
    }

    /// The project base address, as configured.
    pub fn base_url(&self) -> &str {
        &self.config.supabase_url
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// The current access token (possibly empty, possibly `Bearer `-prefixed).
    pub fn token(&self) -> &str {
        &self.config.access_token
    }

    /// Replace the access token, e.g. after a refresh. Takes effect on the next call.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.access_token = token.into();
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    // ─── REST Verbs ────────────────────────────────────────────

    /// Read rows from a table or view. Every filter becomes `key=eq.<value>`.
    pub async fn get(
        &self,
        resource: &str,
        filters: impl Into<Filters>,
    ) -> SupabaseResult<Vec<u8>> {
        let request = ApiRequest::rest(Method::GET, resource).filters(&filters.into());
        self.execute(request).await
    }

    /// Insert rows. `body` is sent exactly as given.
    pub async fn post(&self, resource: &str, body: impl Into<Vec<u8>>) -> SupabaseResult<Vec<u8>> {
        let request = ApiRequest::rest(Method::POST, resource).body(body);
        self.execute(request).await
    }

    /// Replace the rows matched by `filters` with `body`.
    ///
    /// PostgREST requires the primary key in both the filter and the body.
    pub async fn put(
        &self,
        resource: &str,
        filters: impl Into<Filters>,
        body: impl Into<Vec<u8>>,
    ) -> SupabaseResult<Vec<u8>> {
        let request = ApiRequest::rest(Method::PUT, resource)
            .filters(&filters.into())
            .body(body);
        self.execute(request).await
    }

    /// Replace the single row whose `key` equals `value`.
    pub async fn put_by_key(
        &self,
        resource: &str,
        key: &str,
        value: &str,
        body: impl Into<Vec<u8>>,
    ) -> SupabaseResult<Vec<u8>> {
        self.put(resource, Filters::by_key(key, value), body).await
    }

    /// Partially update every row matched by `filters`.
    pub async fn patch(
        &self,
        resource: &str,
        filters: impl Into<Filters>,
        body: impl Into<Vec<u8>>,
    ) -> SupabaseResult<Vec<u8>> {
        let request = ApiRequest::rest(Method::PATCH, resource)
            .filters(&filters.into())
            .body(body);
        self.execute(request).await
    }

    /// Delete every row matched by `filters`.
    pub async fn delete(
        &self,
        resource: &str,
        filters: impl Into<Filters>,
    ) -> SupabaseResult<Vec<u8>> {
        let request = ApiRequest::rest(Method::DELETE, resource).filters(&filters.into());
        self.execute(request).await
    }

    /// Delete the single row whose `key` equals `value`.
    pub async fn delete_by_key(
        &self,
        resource: &str,
        key: &str,
        value: &str,
    ) -> SupabaseResult<Vec<u8>> {
        self.delete(resource, Filters::by_key(key, value)).await
    }

    // ─── Pipeline ──────────────────────────────────────────────

    /// Run one request: resolve the URL, attach headers, send, read the whole
    /// body, classify by status.
    ///
    /// The body is always read to completion before classification, so the
    /// connection is released on success and failure alike.
    pub async fn execute(&self, request: ApiRequest) -> SupabaseResult<Vec<u8>> {
        let url = request.url(&self.config.supabase_url)?;
        let headers = self.headers()?;
        let (method, body) = request.into_parts();

        debug!(method = %method, url = %url, "Executing Supabase request");

        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            // Non-2xx: still reported as RequestFailed, with an empty body.
            Err(e) if !response_is_success(status) => {
                warn!(status, error = %e, "Failed to read error response body");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        debug!(status, bytes = body.len(), "Supabase response received");
        classify(status, body)
    }

    fn headers(&self) -> SupabaseResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.config.api_key)
                .map_err(|e| SupabaseError::InvalidHeader(format!("Invalid API key header: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = authorization_value(&self.config.access_token) {
            let mut value = HeaderValue::from_str(&auth)
                .map_err(|e| SupabaseError::InvalidHeader(format!("Invalid auth header: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

/// The `Authorization` value for a token, or `None` for an empty token.
///
/// A token that already starts with a bearer prefix (any case) is passed
/// through unchanged; anything else gets `Bearer ` prepended.
pub fn authorization_value(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    let has_prefix = token
        .get(..7)
        .map(|head| head.eq_ignore_ascii_case("bearer "))
        .unwrap_or(false);
    if has_prefix {
        Some(token.to_string())
    } else {
        Some(format!("Bearer {}", token))
    }
}
