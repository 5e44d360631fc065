//! Input and wire types for auth flows. Request payloads carry plaintext
//! credentials over TLS to the backend, so they must never be logged.

use serde::{Deserialize, Serialize};

/// Raw signup form values. Built once per submission attempt, validated,
/// then discarded; the form only resets when the whole attempt succeeds.
#[derive(Clone)]
pub struct SignupInput {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Raw signin form values. Same lifecycle as [`SignupInput`].
#[derive(Clone)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<&SignupInput> for CreateAccountRequest {
    fn from(input: &SignupInput) -> Self {
        Self {
            name: input.name.clone(),
            username: input.username.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct EmailSessionRequest {
    pub email: String,
    pub password: String,
}

/// Account record returned by the backend after creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Opaque session handle. Only its presence is consumed by the workflow;
/// the actual credential lives in an `HttpOnly` cookie.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
}

/// Current-user summary used by the sidebar and auth context.
/// This mirrors cookie-backed session state and contains no secrets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_user_deserializes_without_image_url() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"id":"7","name":"Ada","username":"ada"}"#)
                .expect("Failed to deserialize");

        assert_eq!(user.id, "7");
        assert_eq!(user.username, "ada");
        assert!(user.image_url.is_empty());
    }

    #[test]
    fn create_account_request_copies_every_field() {
        let input = SignupInput {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcdefg!".to_string(),
        };
        let request = CreateAccountRequest::from(&input);
        let json = serde_json::to_string(&request).expect("Failed to serialize");

        assert!(json.contains("\"username\":\"ada\""));
        assert!(json.contains("\"email\":\"ada@example.com\""));
    }
}
