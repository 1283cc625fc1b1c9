use serde::{Deserialize, Serialize};

use crate::types::OtpType;

/// Body of a `/token` request.
///
/// Only the fields of the requested grant are set; the rest are left out of
/// the JSON. The grant itself travels in the `grant_type` query parameter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequestPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
}

impl TokenRequestPayload {
    pub fn email_password(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        }
    }

    pub fn phone_password(phone: &str, password: &str) -> Self {
        Self {
            phone: Some(phone.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        }
    }

    pub fn refresh(refresh_token: &str) -> Self {
        Self {
            refresh_token: Some(refresh_token.to_string()),
            ..Default::default()
        }
    }
}

/// Body of `/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// Body shared by `/magiclink`, `/recover` and `/invite`.
#[derive(Debug, Clone, Serialize)]
pub struct MagicLinkPayload {
    pub email: String,
}

/// Body of `/verify`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpPayload {
    pub email: String,
    pub token: String,
    #[serde(rename = "type")]
    pub otp_type: OtpType,
}

/// Body of `/reset`.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordPayload {
    pub token: String,
    pub password: String,
}
