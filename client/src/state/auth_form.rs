//! Credential form state and validation for the login / signup dialog.
//!
//! DESIGN
//! ======
//! `validate` is a pure function of the field values, the login method, and
//! the dialog mode. `AuthForm` wraps it with the reducer the dialog drives on
//! every keystroke and submit, so the rules are testable without rendering.
//!
//! Rules:
//! - username is required in both modes; signup also requires a role
//! - `email` / `phone` methods validate only their own identifier field
//! - `gmail` validates neither identifier nor password
//! - other methods need a password of 6+ chars, and signup a matching confirmation

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::state::auth::AuthMode;
use crate::types::{LoginMethod, Role, User};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone pattern is valid"));

/// Form inputs that can carry a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Role,
}

impl Field {
    /// Stable key used for element ids and `aria-describedby` wiring.
    pub fn key(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Role => "role",
        }
    }
}

/// Field-keyed validation messages. Empty means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} form field(s) failed validation", .0.len())]
pub struct FormErrors(BTreeMap<Field, &'static str>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Raw text typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
}

/// Loose `<non-space>@<non-space>.<non-space>` check on a trimmed value.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Optional leading `+`, then digits, spaces, hyphens, and parentheses only,
/// with at least [`MIN_PHONE_DIGITS`] digits overall.
pub fn is_valid_phone(value: &str) -> bool {
    let trimmed = value.trim();
    PHONE_PATTERN.is_match(trimmed) && trimmed.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Compute the full error set for one submit attempt.
pub fn validate(values: &FormValues, method: LoginMethod, mode: AuthMode) -> FormErrors {
    let mut errors = FormErrors::default();

    if values.username.trim().is_empty() {
        errors.insert(Field::Username, "Username is required");
    }

    if mode == AuthMode::Signup && values.role.is_none() {
        errors.insert(Field::Role, "Please select a role");
    }

    match method {
        LoginMethod::Email => {
            if values.email.trim().is_empty() {
                errors.insert(Field::Email, "Email is required");
            } else if !is_valid_email(&values.email) {
                errors.insert(Field::Email, "Please enter a valid email address");
            }
        }
        LoginMethod::Phone => {
            if values.phone.trim().is_empty() {
                errors.insert(Field::Phone, "Phone number is required");
            } else if !is_valid_phone(&values.phone) {
                errors.insert(Field::Phone, "Please enter a valid phone number (at least 10 digits)");
            }
        }
        LoginMethod::Gmail => {}
    }

    if method.uses_password() {
        if values.password.is_empty() {
            errors.insert(Field::Password, "Password is required");
        } else if values.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(Field::Password, "Password must be at least 6 characters");
        }

        if mode == AuthMode::Signup && values.password != values.confirm_password {
            errors.insert(Field::ConfirmPassword, "Passwords do not match");
        }
    }

    errors
}

/// Reducer state behind the auth dialog.
#[derive(Clone, Debug, Default)]
pub struct AuthForm {
    pub values: FormValues,
    pub method: LoginMethod,
    pub errors: FormErrors,
}

impl AuthForm {
    /// Store a keystroke and clear that field's error.
    ///
    /// For [`Field::Role`] the value is a role id; an empty or unknown id
    /// clears the selection.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.values.username = value,
            Field::Email => self.values.email = value,
            Field::Phone => self.values.phone = value,
            Field::Password => self.values.password = value,
            Field::ConfirmPassword => self.values.confirm_password = value,
            Field::Role => {
                self.values.role = match value.parse::<Role>() {
                    Ok(role) => Some(role),
                    Err(_) => None,
                };
            }
        }
        self.errors.remove(field);
    }

    /// Switch the identifier kind. Identifier and password errors are dropped
    /// since they may not apply to the new method.
    pub fn set_method(&mut self, method: LoginMethod) {
        if self.method == method {
            return;
        }
        self.method = method;
        for field in [Field::Email, Field::Phone, Field::Password, Field::ConfirmPassword] {
            self.errors.remove(field);
        }
    }

    /// Validate and, on success, synthesize the user record and reset every
    /// field. The login method selection survives the reset.
    ///
    /// # Errors
    ///
    /// Returns the field errors (also stored on `self.errors`) when any rule
    /// fails. Field values are left untouched in that case.
    pub fn submit(&mut self, mode: AuthMode) -> Result<User, FormErrors> {
        let errors = validate(&self.values, self.method, mode);
        if !errors.is_empty() {
            log::debug!("auth submit rejected: {} field error(s)", errors.len());
            self.errors = errors.clone();
            return Err(errors);
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: self.values.username.trim().to_owned(),
            email: (self.method == LoginMethod::Email).then(|| self.values.email.trim().to_owned()),
            phone: (self.method == LoginMethod::Phone).then(|| self.values.phone.trim().to_owned()),
            role: self.values.role.unwrap_or_default(),
            login_method: self.method,
        };
        log::debug!("auth submit accepted for {} ({mode:?})", user.username);

        self.values = FormValues::default();
        self.errors = FormErrors::default();
        Ok(user)
    }

    /// Drop everything typed so far, e.g. when the dialog closes.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors = FormErrors::default();
    }
}
