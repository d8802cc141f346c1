//! Dashboard login accounts.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::validation::require_min_len;
use crate::domain::DomainError;

/// Minimum plaintext password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A registered account. Only the argon2id hash of the password is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for registering a user. The email is lowercased so the
/// store-level uniqueness constraint is case-insensitive in practice.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Credentials that passed shape validation but are not yet hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCredentials {
    pub email: String,
    pub password: String,
}

impl ValidatedCredentials {
    /// Check email shape and password length; the caller hashes afterwards.
    pub fn validated(email: &str, password: &str) -> Result<Self, DomainError> {
        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(DomainError::invalid_request(
                "Please use a valid email address",
            ));
        }
        require_min_len("Password", password, MIN_PASSWORD_LEN)?;
        Ok(Self {
            email,
            password: password.to_owned(),
        })
    }
}

/// Accept `local@domain.tld` shapes: no whitespace, exactly one `@`, and a
/// dot somewhere in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ops@example.com", true)]
    #[case("OPS@Example.COM", true)]
    #[case("ops@example", false)]
    #[case("@example.com", false)]
    #[case("ops example@x.io", false)]
    #[case("ops@.com", false)]
    #[case("no-at-sign.com", false)]
    fn email_shapes(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(&email.to_lowercase()), valid);
    }

    #[test]
    fn registration_lowercases_the_email() {
        let credentials =
            ValidatedCredentials::validated("  Ops@Example.COM ", "secret1").expect("valid credentials");
        assert_eq!(credentials.email, "ops@example.com");
    }

    #[test]
    fn registration_rejects_short_passwords() {
        let err = ValidatedCredentials::validated("ops@example.com", "five5").expect_err("too short");
        assert_eq!(err.message(), "Password must be at least 6 characters");
    }
}
