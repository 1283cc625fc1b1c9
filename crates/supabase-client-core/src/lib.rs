//! Core of the Supabase REST client.
//!
//! One pipeline serves both backend surfaces: a [`SupabaseClient`] joins its
//! base address with an API prefix (`/rest/v1` or `/auth/v1`) and a resource
//! path, equality-encodes table filters, injects the `apikey`, JSON
//! content-type and bearer headers, performs a single round trip, and
//! classifies the status into raw bytes or a [`SupabaseError`].

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod paths;
pub mod request;
pub mod response;

pub use client::{authorization_value, SupabaseClient};
pub use config::SupabaseConfig;
pub use error::{SupabaseError, SupabaseResult};
pub use filter::{eq_filter, Filters};
pub use paths::Surface;
pub use request::ApiRequest;
pub use response::{classify, decode};

// Re-exported so callers can build custom requests without a direct reqwest dependency.
pub use reqwest::Method;
