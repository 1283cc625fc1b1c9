use serde::Serialize;
use supabase_client_core::paths::{
    INVITE_PATH, LOGOUT_PATH, MAGIC_LINK_PATH, RECOVER_PATH, RESET_PATH, SIGNUP_PATH, TOKEN_PATH,
    USER_PATH, VERIFY_PATH,
};
use supabase_client_core::{decode, ApiRequest, Method, SupabaseClient, SupabaseResult};
use tracing::debug;

use crate::params::{
    MagicLinkPayload, ResetPasswordPayload, SignUpPayload, TokenRequestPayload, VerifyOtpPayload,
};
use crate::types::{AuthTokenResponse, GrantType, OtpType};

/// GoTrue operations of a [`SupabaseClient`], under `/auth/v1/...`.
///
/// Borrows the client, so every call uses its address, API key and current
/// access token, and goes through the same pipeline as table operations.
///
/// Two request styles exist side by side:
/// - token flow (`sign_in*`, `refresh_token`): the body is strictly decoded
///   into an [`AuthTokenResponse`];
/// - everything else: raw response bytes, like the table verbs.
///
/// # Example
/// ```ignore
/// use supabase_client_auth::SupabaseClientAuthExt;
///
/// let mut client = SupabaseClient::new("https://your-project.supabase.co", "anon-key", "")?;
/// let tokens = client.auth().sign_in("user@example.com", "password").await?;
/// client.set_token(tokens.access_token);
/// let me = client.auth().get_user().await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthClient<'a> {
    client: &'a SupabaseClient,
}

impl<'a> AuthClient<'a> {
    pub fn new(client: &'a SupabaseClient) -> Self {
        Self { client }
    }

    /// The client this view borrows.
    pub fn client(&self) -> &'a SupabaseClient {
        self.client
    }

    // ─── Sign Up ───────────────────────────────────────────────

    /// Create a user with email and password.
    pub async fn sign_up(&self, email: &str, password: &str) -> SupabaseResult<Vec<u8>> {
        let payload = SignUpPayload {
            email: Some(email.to_string()),
            phone: None,
            password: password.to_string(),
        };
        self.sign_up_with(&payload).await
    }

    /// Create a user with phone number and password.
    pub async fn sign_up_with_phone(&self, phone: &str, password: &str) -> SupabaseResult<Vec<u8>> {
        let payload = SignUpPayload {
            email: None,
            phone: Some(phone.to_string()),
            password: password.to_string(),
        };
        self.sign_up_with(&payload).await
    }

    async fn sign_up_with(&self, payload: &SignUpPayload) -> SupabaseResult<Vec<u8>> {
        let request = ApiRequest::auth(Method::POST, SIGNUP_PATH)
            .query_pair("grant_type", GrantType::Signup.as_str())
            .json(payload)?;
        self.client.execute(request).await
    }

    // ─── Token Flow ────────────────────────────────────────────

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> SupabaseResult<AuthTokenResponse> {
        self.token_request(
            GrantType::Password,
            &TokenRequestPayload::email_password(email, password),
        )
        .await
    }

    /// Sign in with phone number and password.
    pub async fn sign_in_with_phone(
        &self,
        phone: &str,
        password: &str,
    ) -> SupabaseResult<AuthTokenResponse> {
        self.token_request(
            GrantType::Password,
            &TokenRequestPayload::phone_password(phone, password),
        )
        .await
    }

    /// Exchange a refresh token for a new token pair.
    pub async fn refresh_token(&self, refresh_token: &str) -> SupabaseResult<AuthTokenResponse> {
        self.token_request(
            GrantType::RefreshToken,
            &TokenRequestPayload::refresh(refresh_token),
        )
        .await
    }

    /// POST to `/token?grant_type=..` and decode the body strictly.
    ///
    /// A non-2xx status is `RequestFailed`; a 2xx body that is not an
    /// [`AuthTokenResponse`] is `InvalidResponse`.
    async fn token_request(
        &self,
        grant: GrantType,
        payload: &TokenRequestPayload,
    ) -> SupabaseResult<AuthTokenResponse> {
        debug!(grant_type = %grant, "Requesting auth token");
        let request = ApiRequest::auth(Method::POST, TOKEN_PATH)
            .query_pair("grant_type", grant.as_str())
            .json(payload)?;
        let body = self.client.execute(request).await?;
        decode(&body)
    }

    // ─── Links & OTP ───────────────────────────────────────────

    /// Email a magic sign-in link.
    pub async fn send_magic_link(&self, email: &str) -> SupabaseResult<Vec<u8>> {
        self.post_email(MAGIC_LINK_PATH, email).await
    }

    /// Email a password recovery link.
    pub async fn send_password_recovery(&self, email: &str) -> SupabaseResult<Vec<u8>> {
        self.post_email(RECOVER_PATH, email).await
    }

    /// Verify a one-time password sent by email.
    pub async fn verify_otp(
        &self,
        email: &str,
        token: &str,
        otp_type: OtpType,
    ) -> SupabaseResult<Vec<u8>> {
        let payload = VerifyOtpPayload {
            email: email.to_string(),
            token: token.to_string(),
            otp_type,
        };
        let request = ApiRequest::auth(Method::POST, VERIFY_PATH).json(&payload)?;
        self.client.execute(request).await
    }

    // ─── User ──────────────────────────────────────────────────

    /// Fetch the user owning the client's access token.
    pub async fn get_user(&self) -> SupabaseResult<Vec<u8>> {
        let request = ApiRequest::auth(Method::GET, USER_PATH);
        self.client.execute(request).await
    }

    /// Update the current user's attributes (email, password, `data`, ...).
    pub async fn update_user<T: Serialize + ?Sized>(
        &self,
        attributes: &T,
    ) -> SupabaseResult<Vec<u8>> {
        let request = ApiRequest::auth(Method::PUT, USER_PATH).json(attributes)?;
        self.client.execute(request).await
    }

    /// Revoke the session behind the client's access token.
    pub async fn sign_out(&self) -> SupabaseResult<Vec<u8>> {
        let request = ApiRequest::auth(Method::POST, LOGOUT_PATH);
        self.client.execute(request).await
    }

    /// Invite a new user by email. Needs a service_role key.
    pub async fn invite_user(&self, email: &str) -> SupabaseResult<Vec<u8>> {
        self.post_email(INVITE_PATH, email).await
    }

    /// Set a new password using a recovery token.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> SupabaseResult<Vec<u8>> {
        let payload = ResetPasswordPayload {
            token: token.to_string(),
            password: new_password.to_string(),
        };
        let request = ApiRequest::auth(Method::POST, RESET_PATH)
            .query_pair("grant_type", "reset_password")
            .json(&payload)?;
        self.client.execute(request).await
    }

    // ─── Internal Helpers ──────────────────────────────────────

    async fn post_email(&self, path: &str, email: &str) -> SupabaseResult<Vec<u8>> {
        let payload = MagicLinkPayload {
            email: email.to_string(),
        };
        let request = ApiRequest::auth(Method::POST, path).json(&payload)?;
        self.client.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_url_has_no_rest_prefix() {
        let request = ApiRequest::auth(Method::POST, TOKEN_PATH)
            .query_pair("grant_type", GrantType::Password.as_str());
        let url = request.url("https://example.supabase.co").unwrap();
        assert_eq!(url.path(), "/auth/v1/token");
        assert_eq!(url.query(), Some("grant_type=password"));
    }

    #[test]
    fn auth_view_borrows_client() {
        let client = SupabaseClient::new("https://example.supabase.co", "key", "tok").unwrap();
        let auth = AuthClient::new(&client);
        assert_eq!(auth.client().token(), "tok");
    }
}
