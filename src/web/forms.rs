//! Login and contact form wiring.
//!
//! Invalid submissions are stopped and their errors displayed; valid ones
//! proceed to the server untouched.

use crate::domain::error::Result;
use crate::forms::validation::{
    CONTACT_FORM, EMAIL_FIELD, LOGIN_FORM, MESSAGE_FIELD, NAME_FIELD, PASSWORD_FIELD,
};
use crate::forms::{
    login_email_on_blur, login_password_on_blur, validate_contact, validate_login, ContactForm,
    FieldError, LoginForm,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

const ERROR_CLASS: &str = "error";
const SHOW_CLASS: &str = "show";
const ERROR_BORDER: &str = "#dc3545";

fn error_element(document: &Document, field: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(&format!("{field}-error"))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn field_value(document: &Document, field: &str) -> String {
    let Some(element) = document.get_element_by_id(field) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn mark_field(element: &Element, invalid: bool) -> Result<()> {
    element.class_list().toggle_with_force(ERROR_CLASS, invalid)?;
    if let Some(field) = element.dyn_ref::<HtmlElement>() {
        let color = if invalid { ERROR_BORDER } else { "" };
        field.style().set_property("border-color", color)?;
    }
    Ok(())
}

fn hide_message(message: &HtmlElement) -> Result<()> {
    message.set_text_content(Some(""));
    message.style().set_property("display", "none")?;
    message.class_list().remove_1(SHOW_CLASS)?;
    Ok(())
}

/// Marks the field invalid and shows `error.message` in its error element.
///
/// # Errors
///
/// Returns an error if a style or class update fails.
pub fn show_error(document: &Document, error: &FieldError) -> Result<()> {
    if let Some(field) = document.get_element_by_id(error.field) {
        mark_field(&field, true)?;
    }
    if let Some(message) = error_element(document, error.field) {
        message.set_text_content(Some(error.message));
        message.style().set_property("display", "block")?;
        message.class_list().add_1(SHOW_CLASS)?;
    }
    Ok(())
}

/// Reverses [`show_error`] for `field`.
///
/// # Errors
///
/// Returns an error if a style or class update fails.
pub fn clear_error(document: &Document, field: &str) -> Result<()> {
    if let Some(element) = document.get_element_by_id(field) {
        mark_field(&element, false)?;
    }
    if let Some(message) = error_element(document, field) {
        hide_message(&message)?;
    }
    Ok(())
}

/// Clears every error message and invalid field inside `form`.
///
/// # Errors
///
/// Returns an error if a style or class update fails.
pub fn clear_all_errors(form: &HtmlFormElement) -> Result<()> {
    let messages = form.query_selector_all(".error-message")?;
    for message in (0..messages.length()).filter_map(|index| messages.item(index)) {
        if let Ok(message) = message.dyn_into::<HtmlElement>() {
            hide_message(&message)?;
        }
    }
    let fields = form.query_selector_all("input, select, textarea")?;
    for field in (0..fields.length()).filter_map(|index| fields.item(index)) {
        if let Ok(field) = field.dyn_into::<Element>() {
            mark_field(&field, false)?;
        }
    }
    Ok(())
}

fn report(document: &Document, errors: &[FieldError]) {
    for error in errors {
        if let Err(e) = show_error(document, error) {
            tracing::warn!(field = error.field, error = %e, "failed to show field error");
        }
    }
}

fn find_form(document: &Document, id: &str) -> Option<HtmlFormElement> {
    let form = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());
    if form.is_none() {
        tracing::debug!(form = id, "form not on page");
    }
    form
}

fn on_submit(
    form: &HtmlFormElement,
    mut handler: impl FnMut(&HtmlFormElement, &web_sys::Event) + 'static,
) -> Result<()> {
    let target = form.clone();
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        handler(&target, &event);
    });
    form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn on_blur(
    document: &Document,
    field: &'static str,
    rule: fn(&str) -> Option<FieldError>,
) -> Result<()> {
    let Some(element) = document.get_element_by_id(field) else {
        return Ok(());
    };
    let page = document.clone();
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let outcome = match rule(&field_value(&page, field)) {
            Some(error) => show_error(&page, &error),
            None => clear_error(&page, field),
        };
        if let Err(e) = outcome {
            tracing::warn!(field, error = %e, "blur validation failed");
        }
    });
    element.add_event_listener_with_callback("blur", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn show_signing_in(form: &HtmlFormElement) -> Result<()> {
    let Some(button) = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
    else {
        return Ok(());
    };
    button.set_inner_html(r#"<i class="fas fa-spinner fa-spin"></i> Signing In..."#);
    button.set_disabled(true);
    Ok(())
}

/// Validates the login form on submit and its fields on blur.
///
/// # Errors
///
/// Returns an error if a listener cannot be attached.
pub fn mount_login(document: &Document) -> Result<()> {
    let Some(form) = find_form(document, LOGIN_FORM) else {
        return Ok(());
    };

    let page = document.clone();
    on_submit(&form, move |form, event| {
        if let Err(e) = clear_all_errors(form) {
            tracing::warn!(error = %e, "failed to clear login errors");
        }
        let values = LoginForm {
            email: field_value(&page, EMAIL_FIELD),
            password: field_value(&page, PASSWORD_FIELD),
        };
        let errors = validate_login(&values);
        if errors.is_empty() {
            tracing::debug!("login form valid, submitting");
            if let Err(e) = show_signing_in(form) {
                tracing::warn!(error = %e, "failed to show loading state");
            }
        } else {
            event.prevent_default();
            report(&page, &errors);
        }
    })?;

    on_blur(document, EMAIL_FIELD, login_email_on_blur)?;
    on_blur(document, PASSWORD_FIELD, login_password_on_blur)?;
    tracing::debug!("login form mounted");
    Ok(())
}

/// Validates the contact form on submit.
///
/// # Errors
///
/// Returns an error if the listener cannot be attached.
pub fn mount_contact(document: &Document) -> Result<()> {
    let Some(form) = find_form(document, CONTACT_FORM) else {
        return Ok(());
    };

    let page = document.clone();
    on_submit(&form, move |form, event| {
        if let Err(e) = clear_all_errors(form) {
            tracing::warn!(error = %e, "failed to clear contact errors");
        }
        let values = ContactForm {
            name: field_value(&page, NAME_FIELD),
            email: field_value(&page, EMAIL_FIELD),
            message: field_value(&page, MESSAGE_FIELD),
        };
        let errors = validate_contact(&values);
        if errors.is_empty() {
            tracing::debug!("contact form valid, submitting");
        } else {
            event.prevent_default();
            report(&page, &errors);
        }
    })?;

    tracing::debug!("contact form mounted");
    Ok(())
}
