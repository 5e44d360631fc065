//! Auth feature module covering credential validation inputs, the
//! signup/signin submission workflow, and session hydration. It keeps
//! authentication logic out of the UI and must stay aligned with backend
//! endpoint expectations. This module touches a security boundary and must
//! never log passwords.
//!
//! Flow Overview: Signup creates the account, opens an email session, then
//! verifies the session by fetching the current account. Signin is the same
//! sequence without the creation step. Each step only proceeds when the
//! previous one succeeded; any failure ends the attempt with a single
//! user-facing notification.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
pub(crate) mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod workflow;
