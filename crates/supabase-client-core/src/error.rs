/// All errors that can occur while talking to a Supabase project.
///
/// Variants map onto the failure classes of a single call: building the
/// transport, assembling the request, executing it, classifying the status,
/// and (for the token endpoint only) decoding the body.
#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    /// Configuration could not be assembled.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP transport could not be constructed.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The base address joined with the API path is not a valid URL.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The API key or access token cannot be sent as a header value.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The request could not be executed (DNS, connection refused, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a status outside `200..300`.
    #[error("request failed ({status}): {body}")]
    RequestFailed { status: u16, body: String },

    /// The backend answered 2xx but the body did not decode into the expected shape.
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),

    /// An outbound payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SupabaseError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// `true` for a non-2xx classification on either surface.
    pub fn is_request_failed(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }

    /// `true` when a 2xx body failed to decode.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }

    /// HTTP status of a [`SupabaseError::RequestFailed`], if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias using SupabaseError.
pub type SupabaseResult<T> = Result<T, SupabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display_carries_body() {
        let err = SupabaseError::RequestFailed {
            status: 400,
            body: "bad".into(),
        };
        assert_eq!(err.to_string(), "request failed (400): bad");
        assert!(err.is_request_failed());
        assert!(!err.is_invalid_response());
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn invalid_response_is_distinct() {
        let err = SupabaseError::InvalidResponse("expected value at line 1".into());
        assert!(err.is_invalid_response());
        assert!(!err.is_request_failed());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("invalid response from server"));
    }

    #[test]
    fn url_parse_converts() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: SupabaseError = parse_err.into();
        assert!(matches!(err, SupabaseError::UrlParse(_)));
    }

    #[test]
    fn config_helper() {
        let err = SupabaseError::config("SUPABASE_URL is not set");
        assert_eq!(err.to_string(), "Configuration error: SUPABASE_URL is not set");
    }
}
