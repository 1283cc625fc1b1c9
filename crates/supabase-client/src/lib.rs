//! Thin Supabase client for PostgREST tables and GoTrue auth.
//!
//! Every call carries the project's API key and, when set, the caller's access
//! token as a bearer credential, so row level security is evaluated against
//! the caller rather than the service.
//!
//! ```ignore
//! use supabase_client::prelude::*;
//!
//! let client = SupabaseClient::new(url, anon_key, user_jwt)?;
//! let rows = client.get("Food", Filters::from([("restaurant", "Ramen Bar")])).await?;
//! ```

// Re-export core (always available)
pub use supabase_client_core::*;

// Re-export auth crate
#[cfg(feature = "auth")]
pub use supabase_client_auth;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use supabase_client::prelude::*;
/// ```
pub mod prelude {
    pub use supabase_client_core::{
        ApiRequest, Filters, Method, SupabaseClient, SupabaseConfig, SupabaseError, SupabaseResult,
    };

    #[cfg(feature = "auth")]
    pub use supabase_client_auth::{AuthClient, AuthTokenResponse, OtpType, SupabaseClientAuthExt};
}
