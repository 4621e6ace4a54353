//! Mock login and registration gate.
//!
//! There are no accounts and no sessions. Login succeeds for any non-empty
//! e-mail and password; registration only checks that the form is complete,
//! that the two passwords agree, and that the terms were accepted.

use thiserror::Error;
use tracing::info;

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// E-mail address.
    pub email: String,
    /// Password.
    pub password: String,
    /// "Remember me" checkbox. Has no effect.
    pub remember_me: bool,
}

/// Accept the login form when both e-mail and password are present.
#[must_use]
pub fn authenticate(credentials: &Credentials) -> bool {
    let accepted = !credentials.email.is_empty() && !credentials.password.is_empty();
    info!(accepted, "Login attempt");
    accepted
}

/// Registration form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    /// Full name.
    pub name: String,
    /// Company name.
    pub company: String,
    /// E-mail address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password again.
    pub confirm_password: String,
    /// Terms of use accepted.
    pub accept_terms: bool,
}

/// Why a registration form was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    /// The password and its confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The terms of use checkbox is unticked.
    #[error("the terms of use must be accepted")]
    TermsNotAccepted,

    /// A required field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Check a registration form.
///
/// Checks run in this order: password confirmation, terms, then presence of
/// every field.
///
/// # Errors
///
/// Returns the first failed check.
pub fn register(form: &Registration) -> Result<(), RegistrationError> {
    if form.password != form.confirm_password {
        return Err(RegistrationError::PasswordMismatch);
    }
    if !form.accept_terms {
        return Err(RegistrationError::TermsNotAccepted);
    }
    let fields = [
        ("name", &form.name),
        ("company", &form.company),
        ("email", &form.email),
        ("password", &form.password),
        ("confirm_password", &form.confirm_password),
    ];
    if let Some((name, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
        return Err(RegistrationError::MissingField(name));
    }
    info!("Registration accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
            remember_me: false,
        }
    }

    fn complete_form() -> Registration {
        Registration {
            name: "Ana Costa".to_string(),
            company: "Aerocode".to_string(),
            email: "ana.costa@aero.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_authenticate_requires_both_fields() {
        assert!(authenticate(&credentials("admin@aerocode.com", "x")));
        assert!(!authenticate(&credentials("", "x")));
        assert!(!authenticate(&credentials("admin@aerocode.com", "")));
        assert!(!authenticate(&Credentials::default()));
    }

    #[test]
    fn test_register_complete_form() {
        assert_eq!(register(&complete_form()), Ok(()));
    }

    #[test]
    fn test_register_password_mismatch() {
        let mut form = complete_form();
        form.confirm_password = "other".to_string();
        assert_eq!(register(&form), Err(RegistrationError::PasswordMismatch));
    }

    #[test]
    fn test_register_terms_checked_before_presence() {
        let mut form = complete_form();
        form.accept_terms = false;
        form.company.clear();
        assert_eq!(register(&form), Err(RegistrationError::TermsNotAccepted));
    }

    #[test]
    fn test_register_missing_field() {
        let mut form = complete_form();
        form.company.clear();
        assert_eq!(
            register(&form),
            Err(RegistrationError::MissingField("company"))
        );
    }

    #[test]
    fn test_register_empty_passwords_match_but_are_missing() {
        let mut form = complete_form();
        form.password.clear();
        form.confirm_password.clear();
        assert_eq!(
            register(&form),
            Err(RegistrationError::MissingField("password"))
        );
    }

    #[test]
    fn test_registration_error_display() {
        assert_eq!(
            RegistrationError::MissingField("email").to_string(),
            "missing required field: email"
        );
        assert_eq!(
            RegistrationError::PasswordMismatch.to_string(),
            "passwords do not match"
        );
    }
}
