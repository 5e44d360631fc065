//! Declarative credential validation schemas. Each schema is an ordered list
//! of `(field, message, predicate)` checks evaluated independently; all
//! failing messages are collected so every field can render its own errors.
//! Validation is pure and synchronous and never reaches the network layer.
//!
//! The signin schema is deliberately looser than the signup one: it applies
//! the length rule only, never the character-class rules. That asymmetry
//! exists in production today and is pinned by tests below; do not unify the
//! two schemas without a product decision.

use crate::features::auth::types::{SigninInput, SignupInput};

/// Special characters accepted by the signup password rule.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>-_";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Username,
    Email,
    Password,
}

/// One failed check, scoped to the field it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub message: &'static str,
}

struct Check {
    field: Field,
    message: &'static str,
    accept: fn(&str) -> bool,
}

const SIGNUP_CHECKS: &[Check] = &[
    Check {
        field: Field::Name,
        message: "Name is too short",
        accept: has_min_length::<2>,
    },
    Check {
        field: Field::Username,
        message: "Username is too short",
        accept: has_min_length::<2>,
    },
    Check {
        field: Field::Email,
        message: "Invalid email",
        accept: is_valid_email,
    },
    Check {
        field: Field::Password,
        message: "Password must have at least 8 characters",
        accept: has_min_length::<8>,
    },
    Check {
        field: Field::Password,
        message: "Password must have at least one uppercase letter",
        accept: has_uppercase,
    },
    Check {
        field: Field::Password,
        message: "Password must have at least one lowercase letter",
        accept: has_lowercase,
    },
    Check {
        field: Field::Password,
        message: "Password must have at least one special character",
        accept: has_special_character,
    },
];

const SIGNIN_CHECKS: &[Check] = &[
    Check {
        field: Field::Email,
        message: "Invalid email",
        accept: is_valid_email,
    },
    Check {
        field: Field::Password,
        message: "Password must have at least 8 characters",
        accept: has_min_length::<8>,
    },
];

/// Runs the signup schema and returns every failed check.
pub fn validate_signup(input: &SignupInput) -> Vec<FieldIssue> {
    run_checks(SIGNUP_CHECKS, |field| match field {
        Field::Name => input.name.as_str(),
        Field::Username => input.username.as_str(),
        Field::Email => input.email.as_str(),
        Field::Password => input.password.as_str(),
    })
}

/// Runs the signin schema. Only the email grammar and the password length
/// are checked here; see the module docs for why.
pub fn validate_signin(input: &SigninInput) -> Vec<FieldIssue> {
    run_checks(SIGNIN_CHECKS, |field| match field {
        Field::Email => input.email.as_str(),
        Field::Password => input.password.as_str(),
        Field::Name | Field::Username => "",
    })
}

/// All failure messages recorded for one field, in schema order.
pub fn messages_for(issues: &[FieldIssue], field: Field) -> Vec<&'static str> {
    issues
        .iter()
        .filter(|issue| issue.field == field)
        .map(|issue| issue.message)
        .collect()
}

fn run_checks<'a>(checks: &[Check], value_of: impl Fn(Field) -> &'a str) -> Vec<FieldIssue> {
    checks
        .iter()
        .filter(|check| !(check.accept)(value_of(check.field)))
        .map(|check| FieldIssue {
            field: check.field,
            message: check.message,
        })
        .collect()
}

fn has_min_length<const MIN: usize>(value: &str) -> bool {
    value.chars().count() >= MIN
}

fn has_uppercase(value: &str) -> bool {
    value.chars().any(|character| character.is_ascii_uppercase())
}

fn has_lowercase(value: &str) -> bool {
    value.chars().any(|character| character.is_ascii_lowercase())
}

fn has_special_character(value: &str) -> bool {
    value
        .chars()
        .any(|character| SPECIAL_CHARACTERS.contains(character))
}

/// Minimal email grammar: one `@`, a non-empty local part, a domain with at
/// least two non-empty labels, and no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let mut labels = 0;
    for label in domain.split('.') {
        if label.is_empty() {
            return false;
        }
        labels += 1;
    }
    labels >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_input(password: &str) -> SignupInput {
        SignupInput {
            name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_a_password_meeting_every_rule() {
        assert!(validate_signup(&signup_input("Abcdefg!")).is_empty());
    }

    #[test]
    fn rejects_each_password_sub_rule_with_its_own_message() {
        let cases = [
            ("Ab!", "Password must have at least 8 characters"),
            ("abcdefg!", "Password must have at least one uppercase letter"),
            ("ABCDEFG!", "Password must have at least one lowercase letter"),
            ("Abcdefgh", "Password must have at least one special character"),
        ];

        for (password, expected) in cases {
            let issues = validate_signup(&signup_input(password));
            let messages = messages_for(&issues, Field::Password);
            assert!(
                messages.contains(&expected),
                "{password:?} should fail with {expected:?}, got {messages:?}"
            );
        }
    }

    #[test]
    fn aggregates_all_failures_instead_of_short_circuiting() {
        let issues = validate_signup(&SignupInput {
            name: "A".to_string(),
            username: "b".to_string(),
            email: "not-an-email".to_string(),
            password: "12345678".to_string(),
        });

        assert_eq!(messages_for(&issues, Field::Name), vec!["Name is too short"]);
        assert_eq!(
            messages_for(&issues, Field::Username),
            vec!["Username is too short"]
        );
        assert_eq!(messages_for(&issues, Field::Email), vec!["Invalid email"]);
        // Digits only: no uppercase, no lowercase, no special character.
        assert_eq!(messages_for(&issues, Field::Password).len(), 3);
    }

    #[test]
    fn signin_skips_character_class_rules() {
        let input = SigninInput {
            email: "ada@example.com".to_string(),
            password: "12345678".to_string(),
        };
        assert!(validate_signin(&input).is_empty());

        // The same password fails the stricter signup schema.
        assert!(!validate_signup(&signup_input("12345678")).is_empty());
    }

    #[test]
    fn signin_still_enforces_password_length() {
        let issues = validate_signin(&SigninInput {
            email: "ada@example.com".to_string(),
            password: "1234567".to_string(),
        });
        assert_eq!(
            messages_for(&issues, Field::Password),
            vec!["Password must have at least 8 characters"]
        );
    }

    #[test]
    fn email_grammar_accepts_and_rejects() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@example..com"));
        assert!(!is_valid_email("ada@exam ple.com"));
        assert!(!is_valid_email("ada@@example.com"));
    }

    #[test]
    fn special_character_set_matches_the_documented_set() {
        for character in SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdefg{character}");
            assert!(
                validate_signup(&signup_input(&password)).is_empty(),
                "{character:?} should count as a special character"
            );
        }
    }
}
