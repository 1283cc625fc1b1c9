use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of the GoTrue `/token` endpoint.
///
/// Decoded as-is; the client does not track expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime of `access_token` in seconds.
    pub expires_in: i64,
    pub refresh_token: String,
}

/// OTP verification type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpType {
    Email,
    Sms,
    #[serde(rename = "phone_change")]
    PhoneChange,
    #[serde(rename = "email_change")]
    EmailChange,
    Signup,
    Recovery,
    Invite,
    #[serde(rename = "magiclink")]
    MagicLink,
}

impl fmt::Display for OtpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Sms => write!(f, "sms"),
            Self::PhoneChange => write!(f, "phone_change"),
            Self::EmailChange => write!(f, "email_change"),
            Self::Signup => write!(f, "signup"),
            Self::Recovery => write!(f, "recovery"),
            Self::Invite => write!(f, "invite"),
            Self::MagicLink => write!(f, "magiclink"),
        }
    }
}

/// The `grant_type` query value sent to `/token` and `/signup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    Password,
    RefreshToken,
    Signup,
}

impl GrantType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::RefreshToken => "refresh_token",
            Self::Signup => "signup",
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_decodes() {
        let json = r#"{"access_token":"T","token_type":"bearer","expires_in":3600,"refresh_token":"R"}"#;
        let resp: AuthTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "T");
        assert_eq!(resp.token_type, "bearer");
        assert_eq!(resp.expires_in, 3600);
        assert_eq!(resp.refresh_token, "R");
    }

    #[test]
    fn token_response_ignores_extra_fields() {
        let json = r#"{"access_token":"T","token_type":"bearer","expires_in":60,"refresh_token":"R","user":{"id":"u"}}"#;
        let resp: AuthTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.expires_in, 60);
    }

    #[test]
    fn token_response_requires_every_field() {
        let json = r#"{"access_token":"T"}"#;
        assert!(serde_json::from_str::<AuthTokenResponse>(json).is_err());
    }

    #[test]
    fn otp_type_serializes_like_display() {
        for otp in [
            OtpType::Email,
            OtpType::Sms,
            OtpType::PhoneChange,
            OtpType::EmailChange,
            OtpType::Signup,
            OtpType::Recovery,
            OtpType::Invite,
            OtpType::MagicLink,
        ] {
            let json = serde_json::to_string(&otp).unwrap();
            assert_eq!(json, format!("\"{}\"", otp));
        }
    }

    #[test]
    fn grant_type_strings() {
        assert_eq!(GrantType::Password.to_string(), "password");
        assert_eq!(GrantType::RefreshToken.to_string(), "refresh_token");
        assert_eq!(GrantType::Signup.to_string(), "signup");
    }
}
