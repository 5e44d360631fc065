//! Shared frontend utilities: API access, configuration, validation schemas,
//! navigation constants, and error types.
//!
//! ## Core Authentication Flows
//!
//! ### Signup
//!
//! 1. **Validate:** field values run through the declarative signup schema;
//!    nothing is dispatched while any check fails.
//! 2. **Create:** the client POSTs the new account to `/v1/account`.
//! 3. **Session:** the client opens an email session so the backend sets the
//!    session cookie, then verifies it by fetching the current account.
//!
//! ### Signin
//!
//! Same as signup minus the account creation step: open an email session,
//! then verify it. A rejected session surfaces a credentials error; a failed
//! verification surfaces a generic one.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging credentials.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod nav;
pub(crate) mod validation;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    delete_with_credentials, get_optional_json_with_credentials, post_json_optional_response,
    post_json_with_credentials_optional_response,
};
pub(crate) use errors::AppError;
