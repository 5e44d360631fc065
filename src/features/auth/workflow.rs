//! Credential submission workflow: an explicit linear state machine over the
//! three fallible backend steps. Each transition only happens when the
//! previous step succeeded; any failure ends the attempt in a terminal error
//! carrying enough context to pick the user-facing message. No retries, no
//! rollback: if account creation succeeds and the session step fails, the
//! account stays and the user simply signs in later.

use crate::app_lib::AppError;
use crate::features::auth::types::{Session, SignupInput, UserRecord};

pub const SIGNUP_FAILED: &str = "Sign up failed. Please try again!";
pub const INCORRECT_CREDENTIALS: &str = "Incorrect email or password. Please try again.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again!";

/// Seam between the workflow and the remote backend. The production
/// implementation lives in the client module; tests substitute a mock.
/// `Ok(None)` / `Ok(false)` model the backend's empty results, `Err` an
/// actual transport or protocol failure.
pub trait AuthBackend {
    async fn create_account(&self, input: &SignupInput) -> Result<Option<UserRecord>, AppError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<Option<Session>, AppError>;
    async fn check_auth_user(&self) -> Result<bool, AppError>;
}

/// Steps of the submission state machine, in execution order. Signup enters
/// at `CreateAccount`; signin enters at `SignIn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    CreateAccount,
    SignIn,
    VerifySession,
}

/// Terminal failure of one submission attempt.
#[derive(Clone, Debug)]
pub enum AuthFailure {
    /// Account creation returned an empty result.
    AccountCreation,
    /// The session call returned an empty result (wrong credentials).
    SignIn,
    /// The session was opened but could not be verified.
    SessionVerification,
    /// Any raised error during the sequence.
    Unexpected(AppError),
}

impl AuthFailure {
    /// Signup surfaces one generic message regardless of which step failed.
    pub fn signup_message(&self) -> String {
        SIGNUP_FAILED.to_string()
    }

    /// Signin distinguishes bad credentials, relays unexpected errors, and
    /// falls back to a generic message everywhere else.
    pub fn signin_message(&self) -> String {
        match self {
            AuthFailure::SignIn => INCORRECT_CREDENTIALS.to_string(),
            AuthFailure::Unexpected(err) if !err.message().is_empty() => err.to_string(),
            AuthFailure::AccountCreation
            | AuthFailure::SessionVerification
            | AuthFailure::Unexpected(_) => LOGIN_FAILED.to_string(),
        }
    }
}

/// Runs the full signup sequence: create the account, open a session with
/// the same credentials, verify it. Strictly sequential; a later step is
/// never dispatched once an earlier one has failed.
pub async fn run_signup<B: AuthBackend>(
    backend: &B,
    input: &SignupInput,
) -> Result<(), AuthFailure> {
    run_from(backend, Step::CreateAccount, Some(input), &input.email, &input.password).await
}

/// Runs the signin sequence: open a session, verify it.
pub async fn run_signin<B: AuthBackend>(
    backend: &B,
    email: &str,
    password: &str,
) -> Result<(), AuthFailure> {
    run_from(backend, Step::SignIn, None, email, password).await
}

async fn run_from<B: AuthBackend>(
    backend: &B,
    start: Step,
    signup: Option<&SignupInput>,
    email: &str,
    password: &str,
) -> Result<(), AuthFailure> {
    let mut step = start;
    loop {
        step = match step {
            Step::CreateAccount => {
                let input = signup.ok_or(AuthFailure::AccountCreation)?;
                let created = backend
                    .create_account(input)
                    .await
                    .map_err(AuthFailure::Unexpected)?;
                if created.is_none() {
                    return Err(AuthFailure::AccountCreation);
                }
                Step::SignIn
            }
            Step::SignIn => {
                let session = backend
                    .sign_in(email, password)
                    .await
                    .map_err(AuthFailure::Unexpected)?;
                if session.is_none() {
                    return Err(AuthFailure::SignIn);
                }
                Step::VerifySession
            }
            Step::VerifySession => {
                let verified = backend
                    .check_auth_user()
                    .await
                    .map_err(AuthFailure::Unexpected)?;
                if !verified {
                    return Err(AuthFailure::SessionVerification);
                }
                return Ok(());
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct MockBackend {
        create_result: Cell<Option<MockOutcome>>,
        sign_in_result: Cell<Option<MockOutcome>>,
        verify_result: Cell<Option<MockOutcome>>,
        create_calls: Cell<u32>,
        sign_in_calls: Cell<u32>,
        verify_calls: Cell<u32>,
    }

    #[derive(Clone, Copy)]
    enum MockOutcome {
        Succeed,
        Empty,
        Fail,
    }

    impl MockBackend {
        fn with(create: MockOutcome, sign_in: MockOutcome, verify: MockOutcome) -> Self {
            let backend = Self::default();
            backend.create_result.set(Some(create));
            backend.sign_in_result.set(Some(sign_in));
            backend.verify_result.set(Some(verify));
            backend
        }

        fn outcome(&self, slot: &Cell<Option<MockOutcome>>) -> MockOutcome {
            slot.get().expect("step dispatched without a scripted outcome")
        }
    }

    impl AuthBackend for MockBackend {
        async fn create_account(
            &self,
            _input: &SignupInput,
        ) -> Result<Option<UserRecord>, AppError> {
            self.create_calls.set(self.create_calls.get() + 1);
            match self.outcome(&self.create_result) {
                MockOutcome::Succeed => Ok(Some(UserRecord {
                    id: "user-1".to_string(),
                    name: "Ada".to_string(),
                    username: "ada".to_string(),
                    email: "ada@example.com".to_string(),
                })),
                MockOutcome::Empty => Ok(None),
                MockOutcome::Fail => Err(AppError::Network("boom".to_string())),
            }
        }

        async fn sign_in(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<Option<Session>, AppError> {
            self.sign_in_calls.set(self.sign_in_calls.get() + 1);
            match self.outcome(&self.sign_in_result) {
                MockOutcome::Succeed => Ok(Some(Session {
                    id: "session-1".to_string(),
                })),
                MockOutcome::Empty => Ok(None),
                MockOutcome::Fail => Err(AppError::Network("boom".to_string())),
            }
        }

        async fn check_auth_user(&self) -> Result<bool, AppError> {
            self.verify_calls.set(self.verify_calls.get() + 1);
            match self.outcome(&self.verify_result) {
                MockOutcome::Succeed => Ok(true),
                MockOutcome::Empty => Ok(false),
                MockOutcome::Fail => Err(AppError::Network("boom".to_string())),
            }
        }
    }

    fn signup_input() -> SignupInput {
        SignupInput {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcdefg!".to_string(),
        }
    }

    #[tokio::test]
    async fn signup_succeeds_when_every_step_succeeds() {
        let backend = MockBackend::with(
            MockOutcome::Succeed,
            MockOutcome::Succeed,
            MockOutcome::Succeed,
        );

        let result = run_signup(&backend, &signup_input()).await;

        assert!(result.is_ok());
        assert_eq!(backend.create_calls.get(), 1);
        assert_eq!(backend.sign_in_calls.get(), 1);
        assert_eq!(backend.verify_calls.get(), 1);
    }

    #[tokio::test]
    async fn empty_account_creation_never_reaches_sign_in() {
        let backend = MockBackend::with(
            MockOutcome::Empty,
            MockOutcome::Succeed,
            MockOutcome::Succeed,
        );

        let failure = run_signup(&backend, &signup_input()).await.unwrap_err();

        assert!(matches!(failure, AuthFailure::AccountCreation));
        assert_eq!(failure.signup_message(), SIGNUP_FAILED);
        assert_eq!(backend.sign_in_calls.get(), 0);
        assert_eq!(backend.verify_calls.get(), 0);
    }

    #[tokio::test]
    async fn empty_session_aborts_before_verification() {
        let backend = MockBackend::with(
            MockOutcome::Succeed,
            MockOutcome::Empty,
            MockOutcome::Succeed,
        );

        let failure = run_signup(&backend, &signup_input()).await.unwrap_err();

        assert!(matches!(failure, AuthFailure::SignIn));
        assert_eq!(failure.signup_message(), SIGNUP_FAILED);
        assert_eq!(backend.create_calls.get(), 1);
        assert_eq!(backend.verify_calls.get(), 0);
    }

    #[tokio::test]
    async fn failed_verification_surfaces_a_generic_signup_message() {
        let backend = MockBackend::with(
            MockOutcome::Succeed,
            MockOutcome::Succeed,
            MockOutcome::Empty,
        );

        let failure = run_signup(&backend, &signup_input()).await.unwrap_err();

        assert!(matches!(failure, AuthFailure::SessionVerification));
        assert_eq!(failure.signup_message(), SIGNUP_FAILED);
    }

    #[tokio::test]
    async fn signin_skips_account_creation_entirely() {
        let backend = MockBackend::with(
            MockOutcome::Fail,
            MockOutcome::Succeed,
            MockOutcome::Succeed,
        );

        let result = run_signin(&backend, "ada@example.com", "12345678").await;

        assert!(result.is_ok());
        assert_eq!(backend.create_calls.get(), 0);
        assert_eq!(backend.sign_in_calls.get(), 1);
    }

    #[tokio::test]
    async fn rejected_credentials_carry_the_exact_signin_message() {
        let backend = MockBackend::with(
            MockOutcome::Succeed,
            MockOutcome::Empty,
            MockOutcome::Succeed,
        );

        let failure = run_signin(&backend, "ada@example.com", "wrong-password")
            .await
            .unwrap_err();

        assert!(matches!(failure, AuthFailure::SignIn));
        assert_eq!(
            failure.signin_message(),
            "Incorrect email or password. Please try again."
        );
        assert_eq!(backend.verify_calls.get(), 0);
    }

    #[tokio::test]
    async fn failed_verification_falls_back_to_the_generic_login_message() {
        let backend = MockBackend::with(
            MockOutcome::Succeed,
            MockOutcome::Succeed,
            MockOutcome::Empty,
        );

        let failure = run_signin(&backend, "ada@example.com", "12345678")
            .await
            .unwrap_err();

        assert!(matches!(failure, AuthFailure::SessionVerification));
        assert_eq!(failure.signin_message(), LOGIN_FAILED);
    }

    #[tokio::test]
    async fn raised_errors_relay_their_message_on_signin() {
        let backend = MockBackend::with(
            MockOutcome::Succeed,
            MockOutcome::Fail,
            MockOutcome::Succeed,
        );

        let failure = run_signin(&backend, "ada@example.com", "12345678")
            .await
            .unwrap_err();

        assert!(matches!(failure, AuthFailure::Unexpected(_)));
        assert!(failure.signin_message().contains("boom"));
    }

    #[tokio::test]
    async fn raised_errors_stay_generic_on_signup() {
        let backend = MockBackend::with(
            MockOutcome::Fail,
            MockOutcome::Succeed,
            MockOutcome::Succeed,
        );

        let failure = run_signup(&backend, &signup_input()).await.unwrap_err();

        assert!(matches!(failure, AuthFailure::Unexpected(_)));
        assert_eq!(failure.signup_message(), SIGNUP_FAILED);
    }
}
