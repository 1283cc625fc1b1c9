//! Supabase Auth (GoTrue) operations.
//!
//! Adds sign-up, sign-in, token refresh, magic links, recovery, OTP
//! verification, user fetch/update, sign-out, invites and password reset to a
//! [`SupabaseClient`]. Requests go to `/auth/v1/...` through the same
//! pipeline as table operations, so the `apikey` and bearer headers and the
//! status classification are identical.
//!
//! # Usage
//!
//! ```ignore
//! use supabase_client_auth::SupabaseClientAuthExt;
//! use supabase_client_core::SupabaseClient;
//!
//! let mut client = SupabaseClient::new(url, anon_key, "")?;
//! let tokens = client.auth().sign_in("user@example.com", "password").await?;
//! client.set_token(&tokens.access_token);
//! let user_json = client.auth().get_user().await?;
//! ```

pub mod client;
pub mod params;
pub mod types;

// Re-exports for convenient access
pub use client::AuthClient;
pub use params::*;
pub use types::*;

use supabase_client_core::SupabaseClient;

/// Extension trait to get an [`AuthClient`] view of a [`SupabaseClient`].
pub trait SupabaseClientAuthExt {
    fn auth(&self) -> AuthClient<'_>;
}

impl SupabaseClientAuthExt for SupabaseClient {
    fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self)
    }
}
