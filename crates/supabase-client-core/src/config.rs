use std::time::Duration;

use crate::error::{SupabaseError, SupabaseResult};

/// Configuration for connecting to a Supabase project over HTTP.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g. "https://your-project.supabase.co")
    pub supabase_url: String,
    /// Anon or service_role key, sent as the `apikey` header
    pub api_key: String,
    /// Caller's access token, sent as a bearer credential (empty = none)
    pub access_token: String,
    /// Total request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// Connect timeout; `None` keeps the transport default
    pub connect_timeout: Option<Duration>,
    /// Optional `User-Agent` override
    pub user_agent: Option<String>,
}

impl SupabaseConfig {
    /// Create a new config from a project URL and API key.
    ///
    /// Neither value is validated here. A malformed URL surfaces on the first request.
    pub fn new(supabase_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            api_key: api_key.into(),
            access_token: String::new(),
            timeout: None,
            connect_timeout: None,
            user_agent: None,
        }
    }

    /// Build a config from the environment.
    ///
    /// Reads `SUPABASE_URL`, `SUPABASE_ANON_KEY` (falling back to `SUPABASE_KEY`),
    /// and optionally `SUPABASE_ACCESS_TOKEN` and `SUPABASE_TIMEOUT_SECS`.
    pub fn from_env() -> SupabaseResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> SupabaseResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("SUPABASE_URL")
            .ok_or_else(|| SupabaseError::config("SUPABASE_URL is not set"))?;
        let key = lookup("SUPABASE_ANON_KEY")
            .or_else(|| lookup("SUPABASE_KEY"))
            .ok_or_else(|| SupabaseError::config("SUPABASE_ANON_KEY is not set"))?;

        let mut config = Self::new(url, key);
        if let Some(token) = lookup("SUPABASE_ACCESS_TOKEN") {
            config.access_token = token;
        }
        if let Some(secs) = lookup("SUPABASE_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                SupabaseError::config(format!("SUPABASE_TIMEOUT_SECS is not a number: {}", e))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Set the caller's access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
}
