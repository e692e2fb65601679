//! Credential input validation
//!
//! Checks run before any handler logic touches the store or the hasher.
//! Every rule is evaluated so the client gets the full list of problems in one
//! round trip.

use crate::shared::error::SharedError;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum accepted password length, in bytes (bcrypt's input limit)
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Basic structural email check
///
/// Accepts `local@domain.tld`: exactly one `@`, non-empty local part, a domain
/// with at least one interior dot, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn check_email(email: &str, errors: &mut Vec<SharedError>) {
    if !is_valid_email(email) {
        errors.push(SharedError::validation("email", "Invalid email format"));
    }
}

fn check_password(field: &str, label: &str, password: &str, errors: &mut Vec<SharedError>) {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(SharedError::validation(
            field,
            format!("{label} must be at least {MIN_PASSWORD_LENGTH} characters long"),
        ));
    } else if password.len() > MAX_PASSWORD_BYTES {
        errors.push(SharedError::validation(
            field,
            format!("{label} must be at most {MAX_PASSWORD_BYTES} bytes long"),
        ));
    }
}

/// Validate a signup form
pub fn validate_signup(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), Vec<SharedError>> {
    let mut errors = Vec::new();

    check_email(email, &mut errors);
    check_password("password", "Password", password, &mut errors);
    check_password("confirmPassword", "Confirm Password", confirm_password, &mut errors);

    if password != confirm_password {
        errors.push(SharedError::validation("confirmPassword", "Passwords do not match"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a login form
pub fn validate_login(email: &str, password: &str) -> Result<(), Vec<SharedError>> {
    let mut errors = Vec::new();

    check_email(email, &mut errors);
    check_password("password", "Password", password, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
