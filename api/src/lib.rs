//! # API crate — typed client for the shared-links REST backend
//!
//! Everything the frontends need to talk to the backend lives here: the HTTP
//! client base, the two services built on top of it, and the wire types they
//! exchange.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: header construction, JSON requests, response decoding |
//! | [`error`] | [`ApiError`]: the two failure modes every call can produce |
//! | [`models`] | Wire types: [`UserProfile`], [`Link`], [`Authentication`], form payloads |
//! | [`auth`] | [`AuthService`]: login, profile, registration, email verification |
//! | [`links`] | [`LinksService`]: listing, submission, and the vote detail actions |
//!
//! Every operation is a single HTTP round trip returning
//! `Result<_, ApiError>`; there are no retries and no local caches. The one
//! composed operation, [`AuthService::get_auth_token_with_user_profile`],
//! sequences two round trips and fails atomically.

pub mod auth;
pub mod client;
pub mod error;
pub mod links;
pub mod models;

#[cfg(test)]
mod testing;

pub use auth::AuthService;
pub use client::ApiClient;
pub use error::ApiError;
pub use links::LinksService;
pub use models::{Authentication, Link, Registration, UserProfile, Verification};
