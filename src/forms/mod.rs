//! Form validation for the login and contact pages.
//!
//! Rules are plain functions over form values; `web::forms` reads the
//! inputs, runs the rules and displays the resulting [`FieldError`]s.

pub mod validation;

pub use validation::{
    login_email_on_blur, login_password_on_blur, validate_contact, validate_email,
    validate_login, validate_phone, ContactForm, FieldError, LoginForm,
};
