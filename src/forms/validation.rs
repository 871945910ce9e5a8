//! Field validators and form rules.
//!
//! Every rule returns the field id it applies to together with the message to
//! display, so the browser layer can route errors to `<id>-error` elements
//! without knowing anything about the rules.

use regex::Regex;
use std::sync::OnceLock;

pub const LOGIN_FORM: &str = "login-form";
pub const CONTACT_FORM: &str = "contact-form";

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";
pub const NAME_FIELD: &str = "name";
pub const MESSAGE_FIELD: &str = "message";

const MIN_PASSWORD_LEN: usize = 6;
const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

const INVALID_EMAIL: &str = "Please enter a valid email address";
const SHORT_PASSWORD: &str = "Password must be at least 6 characters long";

/// A validation failure attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Id of the input element.
    pub field: &'static str,
    /// Message shown in the field's error element.
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

fn phone_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\+?[1-9]\d{0,15}$").ok())
        .as_ref()
}

/// Checks that `email` looks like `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use bliss_catering::forms::validate_email;
///
/// assert!(validate_email("orders@bliss.example"));
/// assert!(!validate_email("orders@bliss"));
/// ```
#[must_use]
pub fn validate_email(email: &str) -> bool {
    email_pattern().is_some_and(|pattern| pattern.is_match(email))
}

/// Checks a phone number after removing spaces, dashes and parentheses.
///
/// Accepts an optional leading `+` followed by up to 16 digits, the first of
/// which is not zero.
///
/// # Examples
///
/// ```
/// use bliss_catering::forms::validate_phone;
///
/// assert!(validate_phone("+1 (555) 010-2030"));
/// assert!(!validate_phone("0555 0102"));
/// ```
#[must_use]
pub fn validate_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')') && !c.is_whitespace())
        .collect();
    phone_pattern().is_some_and(|pattern| pattern.is_match(&digits))
}

/// Values of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    let email = value.trim();
    if email.is_empty() {
        errors.push(FieldError::new(EMAIL_FIELD, "Email is required"));
    } else if !validate_email(email) {
        errors.push(FieldError::new(EMAIL_FIELD, INVALID_EMAIL));
    }
}

fn check_min_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    required: &'static str,
    too_short: &'static str,
) {
    if value.is_empty() {
        errors.push(FieldError::new(field, required));
    } else if value.chars().count() < min {
        errors.push(FieldError::new(field, too_short));
    }
}

/// Validates the login form on submit.
///
/// # Examples
///
/// ```
/// use bliss_catering::forms::{validate_login, LoginForm};
///
/// let errors = validate_login(&LoginForm {
///     email: "chef@bliss.example".into(),
///     password: "12345".into(),
/// });
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].field, "password");
/// ```
#[must_use]
pub fn validate_login(form: &LoginForm) -> Vec<FieldError> {
    let mut errors = vec![];
    check_email(&mut errors, &form.email);
    check_min_len(
        &mut errors,
        PASSWORD_FIELD,
        &form.password,
        MIN_PASSWORD_LEN,
        "Password is required",
        SHORT_PASSWORD,
    );
    errors
}

/// Validates the contact form on submit.
#[must_use]
pub fn validate_contact(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = vec![];
    check_min_len(
        &mut errors,
        NAME_FIELD,
        form.name.trim(),
        MIN_NAME_LEN,
        "Name is required",
        "Name must be at least 2 characters long",
    );
    check_email(&mut errors, &form.email);
    check_min_len(
        &mut errors,
        MESSAGE_FIELD,
        form.message.trim(),
        MIN_MESSAGE_LEN,
        "Message is required",
        "Message must be at least 10 characters long",
    );
    errors
}

/// Live check of the login email when the field loses focus.
///
/// Empty input is not an error until submit.
#[must_use]
pub fn login_email_on_blur(value: &str) -> Option<FieldError> {
    let email = value.trim();
    (!email.is_empty() && !validate_email(email)).then_some(FieldError::new(EMAIL_FIELD, INVALID_EMAIL))
}

/// Live check of the login password when the field loses focus.
#[must_use]
pub fn login_password_on_blur(value: &str) -> Option<FieldError> {
    (!value.is_empty() && value.chars().count() < MIN_PASSWORD_LEN)
        .then_some(FieldError::new(PASSWORD_FIELD, SHORT_PASSWORD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(validate_email("a@b.co"));
        assert!(!validate_email("a b@c.de"));
        assert!(!validate_email("@bliss.example"));
        assert!(!validate_email("chef@@bliss.example"));
    }

    #[test]
    fn phone_rules() {
        assert!(validate_phone("5550102030"));
        assert!(validate_phone("+44 20 7946 0958"));
        assert!(!validate_phone("+"));
        assert!(!validate_phone("555-CALL-NOW"));
        assert!(!validate_phone("12345678901234567"));
    }

    #[test]
    fn empty_login_reports_required_fields() {
        let errors = validate_login(&LoginForm::default());
        assert_eq!(
            errors,
            vec![
                FieldError::new(EMAIL_FIELD, "Email is required"),
                FieldError::new(PASSWORD_FIELD, "Password is required"),
            ]
        );
    }

    #[test]
    fn login_email_is_trimmed_but_password_is_not() {
        let errors = validate_login(&LoginForm {
            email: "  chef@bliss.example ".into(),
            password: "      ".into(),
        });
        assert!(errors.is_empty());
    }

    #[test]
    fn contact_rules() {
        let errors = validate_contact(&ContactForm {
            name: " J ".into(),
            email: "not-an-email".into(),
            message: "Hi there".into(),
        });
        assert_eq!(
            errors,
            vec![
                FieldError::new(NAME_FIELD, "Name must be at least 2 characters long"),
                FieldError::new(EMAIL_FIELD, INVALID_EMAIL),
                FieldError::new(MESSAGE_FIELD, "Message must be at least 10 characters long"),
            ]
        );

        let ok = validate_contact(&ContactForm {
            name: "Jo".into(),
            email: "jo@bliss.example".into(),
            message: "Catering for 40 guests".into(),
        });
        assert!(ok.is_empty());
    }

    #[test]
    fn blur_checks_ignore_empty_fields() {
        assert_eq!(login_email_on_blur("   "), None);
        assert_eq!(login_password_on_blur(""), None);
        assert_eq!(login_email_on_blur("chef@"), Some(FieldError::new(EMAIL_FIELD, INVALID_EMAIL)));
        assert_eq!(
            login_password_on_blur("abc"),
            Some(FieldError::new(PASSWORD_FIELD, SHORT_PASSWORD))
        );
        assert_eq!(login_password_on_blur("abcdef"), None);
    }
}
