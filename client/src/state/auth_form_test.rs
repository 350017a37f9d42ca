use super::*;

// =============================================================
// Helpers
// =============================================================

fn filled_values() -> FormValues {
    FormValues {
        username: "maya".to_owned(),
        email: "maya@example.com".to_owned(),
        phone: "+1 (555) 123-4567".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        role: Some(Role::Volunteer),
    }
}

fn form_with(values: FormValues, method: LoginMethod) -> AuthForm {
    AuthForm { values, method, errors: FormErrors::default() }
}

// =============================================================
// Pattern checks
// =============================================================

#[test]
fn email_pattern_is_loose_but_anchored() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("  first.last+tag@mail.example.org "));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("ab.com"));
    assert!(!is_valid_email("a b@c.d"));
}

#[test]
fn phone_pattern_counts_digits() {
    assert!(is_valid_phone("5551234567"));
    assert!(is_valid_phone("+1 (555) 123-4567"));
    assert!(!is_valid_phone("555-1234"));
    assert!(!is_valid_phone("(555) 123-456"));
    assert!(!is_valid_phone("555123456x7"));
    assert!(!is_valid_phone("1+5551234567"));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_filled_login_has_no_errors() {
    let errors = validate(&filled_values(), LoginMethod::Email, AuthMode::Login);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn validate_requires_trimmed_username() {
    let values = FormValues { username: "   ".to_owned(), ..filled_values() };
    let errors = validate(&values, LoginMethod::Email, AuthMode::Login);
    assert_eq!(errors.get(Field::Username), Some("Username is required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn validate_signup_requires_role() {
    let values = FormValues { role: None, ..filled_values() };
    let errors = validate(&values, LoginMethod::Email, AuthMode::Signup);
    assert_eq!(errors.get(Field::Role), Some("Please select a role"));
}

#[test]
fn validate_login_ignores_missing_role() {
    let values = FormValues { role: None, ..filled_values() };
    assert!(validate(&values, LoginMethod::Email, AuthMode::Login).is_empty());
}

#[test]
fn validate_email_method_checks_only_email() {
    let values = FormValues { email: "not-an-email".to_owned(), phone: String::new(), ..filled_values() };
    let errors = validate(&values, LoginMethod::Email, AuthMode::Login);
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email]);
    assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
}

#[test]
fn validate_email_method_requires_value() {
    let values = FormValues { email: String::new(), ..filled_values() };
    let errors = validate(&values, LoginMethod::Email, AuthMode::Login);
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
}

#[test]
fn validate_phone_method_checks_only_phone() {
    let values = FormValues { phone: "12345".to_owned(), email: "bad".to_owned(), ..filled_values() };
    let errors = validate(&values, LoginMethod::Phone, AuthMode::Login);
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Phone]);
}

#[test]
fn validate_gmail_skips_identifier_and_password() {
    let values = FormValues {
        username: "maya".to_owned(),
        email: "bad".to_owned(),
        phone: "x".to_owned(),
        password: "1".to_owned(),
        confirm_password: "2".to_owned(),
        role: None,
    };
    assert!(validate(&values, LoginMethod::Gmail, AuthMode::Login).is_empty());

    let signup = validate(&values, LoginMethod::Gmail, AuthMode::Signup);
    assert_eq!(signup.fields().collect::<Vec<_>>(), vec![Field::Role]);
}

#[test]
fn validate_password_rules() {
    let empty = FormValues { password: String::new(), confirm_password: String::new(), ..filled_values() };
    assert_eq!(
        validate(&empty, LoginMethod::Email, AuthMode::Login).get(Field::Password),
        Some("Password is required")
    );

    let short = FormValues { password: "12345".to_owned(), confirm_password: "12345".to_owned(), ..filled_values() };
    assert_eq!(
        validate(&short, LoginMethod::Phone, AuthMode::Login).get(Field::Password),
        Some("Password must be at least 6 characters")
    );
}

#[test]
fn validate_signup_mismatch_flags_confirmation_even_when_password_invalid() {
    let values = FormValues { password: "123".to_owned(), confirm_password: "1234".to_owned(), ..filled_values() };
    let errors = validate(&values, LoginMethod::Email, AuthMode::Signup);
    assert!(errors.contains(Field::Password));
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords do not match"));
}

#[test]
fn validate_login_ignores_confirmation() {
    let values = FormValues { confirm_password: "other".to_owned(), ..filled_values() };
    assert!(validate(&values, LoginMethod::Email, AuthMode::Login).is_empty());
}

#[test]
fn form_errors_display_counts_fields() {
    let errors = validate(&FormValues::default(), LoginMethod::Email, AuthMode::Signup);
    assert_eq!(errors.to_string(), "4 form field(s) failed validation");
}

// =============================================================
// AuthForm reducer
// =============================================================

#[test]
fn edit_clears_only_that_fields_error() {
    let mut form = AuthForm::default();
    assert!(form.submit(AuthMode::Signup).is_err());
    assert!(form.errors.contains(Field::Username));
    assert!(form.errors.contains(Field::Email));

    form.edit(Field::Username, "m".to_owned());
    assert!(!form.errors.contains(Field::Username));
    assert!(form.errors.contains(Field::Email));
    assert_eq!(form.values.username, "m");
}

#[test]
fn edit_role_parses_identifier() {
    let mut form = AuthForm::default();
    form.edit(Field::Role, "restaurant".to_owned());
    assert_eq!(form.values.role, Some(Role::Restaurant));
    form.edit(Field::Role, String::new());
    assert_eq!(form.values.role, None);
}

#[test]
fn set_method_drops_identifier_errors() {
    let mut form = AuthForm::default();
    assert!(form.submit(AuthMode::Login).is_err());
    form.set_method(LoginMethod::Gmail);
    assert!(!form.errors.contains(Field::Email));
    assert!(!form.errors.contains(Field::Password));
    assert!(form.errors.contains(Field::Username));
}

#[test]
fn failed_submit_keeps_values() {
    let mut form = form_with(FormValues { password: "1".to_owned(), ..filled_values() }, LoginMethod::Email);
    assert!(form.submit(AuthMode::Login).is_err());
    assert_eq!(form.values.username, "maya");
    assert_eq!(form.values.password, "1");
}

#[test]
fn submit_with_email_echoes_only_email() {
    let mut form = form_with(filled_values(), LoginMethod::Email);
    let user = form.submit(AuthMode::Signup).unwrap();
    assert_eq!(user.username, "maya");
    assert_eq!(user.email.as_deref(), Some("maya@example.com"));
    assert_eq!(user.phone, None);
    assert_eq!(user.role, Role::Volunteer);
    assert_eq!(user.login_method, LoginMethod::Email);
    assert!(uuid::Uuid::parse_str(&user.id).is_ok());
}

#[test]
fn submit_with_phone_echoes_only_phone() {
    let mut form = form_with(filled_values(), LoginMethod::Phone);
    let user = form.submit(AuthMode::Login).unwrap();
    assert_eq!(user.email, None);
    assert_eq!(user.phone.as_deref(), Some("+1 (555) 123-4567"));
}

#[test]
fn submit_with_gmail_echoes_neither_identifier() {
    let mut form = form_with(FormValues { username: "maya".to_owned(), ..FormValues::default() }, LoginMethod::Gmail);
    let user = form.submit(AuthMode::Login).unwrap();
    assert_eq!(user.email, None);
    assert_eq!(user.phone, None);
}

#[test]
fn submit_defaults_role_to_user() {
    let mut form = form_with(FormValues { role: None, ..filled_values() }, LoginMethod::Email);
    let user = form.submit(AuthMode::Login).unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.role.as_str(), "user");
}

#[test]
fn successful_submit_resets_fields_but_keeps_method() {
    let mut form = form_with(filled_values(), LoginMethod::Phone);
    assert!(form.submit(AuthMode::Signup).is_ok());
    assert_eq!(form.values, FormValues::default());
    assert!(form.errors.is_empty());
    assert_eq!(form.method, LoginMethod::Phone);
}

#[test]
fn submit_generates_distinct_ids() {
    let mut form = form_with(filled_values(), LoginMethod::Email);
    let first = form.submit(AuthMode::Login).unwrap();
    form.values = filled_values();
    let second = form.submit(AuthMode::Login).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn reset_clears_values_and_errors() {
    let mut form = form_with(filled_values(), LoginMethod::Email);
    form.errors.insert(Field::Email, "x");
    form.reset();
    assert_eq!(form.values, FormValues::default());
    assert!(form.errors.is_empty());
}
