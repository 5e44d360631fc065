//! Client wrappers for the SnapShare backend account endpoints. These
//! helpers centralize paths and session-aware requests, keeping auth flows
//! consistent and credentials out of route code.

use crate::{
    app_lib::{
        AppError, delete_with_credentials, get_optional_json_with_credentials,
        post_json_optional_response, post_json_with_credentials_optional_response,
    },
    features::auth::{
        state::AuthContext,
        types::{
            CreateAccountRequest, CurrentUser, EmailSessionRequest, Session, SignupInput,
            UserRecord,
        },
        workflow::AuthBackend,
    },
};

/// Creates a new account. An empty result means the backend refused the
/// account (for example a taken username) without raising a protocol error.
pub async fn create_account(input: &SignupInput) -> Result<Option<UserRecord>, AppError> {
    let request = CreateAccountRequest::from(input);
    post_json_optional_response("/v1/account", &request).await
}

/// Opens an email session. The request includes credentials so the backend
/// can set the `HttpOnly` session cookie; rejected credentials come back as
/// `None`, not as an error.
pub async fn sign_in(email: &str, password: &str) -> Result<Option<Session>, AppError> {
    let request = EmailSessionRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    post_json_with_credentials_optional_response("/v1/account/sessions/email", &request).await
}

/// Clears the current session on the server.
pub async fn sign_out() -> Result<(), AppError> {
    delete_with_credentials("/v1/account/sessions/current").await
}

/// Fetches the account behind the session cookie.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_current_user() -> Result<Option<CurrentUser>, AppError> {
    get_optional_json_with_credentials("/v1/account").await
}

/// Production backend for the submission workflow. Carries the auth context
/// so the verification step updates the shared user signal as it checks.
#[derive(Clone, Copy)]
pub struct ApiBackend {
    pub auth: AuthContext,
}

impl AuthBackend for ApiBackend {
    async fn create_account(&self, input: &SignupInput) -> Result<Option<UserRecord>, AppError> {
        create_account(input).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Option<Session>, AppError> {
        sign_in(email, password).await
    }

    async fn check_auth_user(&self) -> Result<bool, AppError> {
        Ok(self.auth.check_auth_user().await)
    }
}
