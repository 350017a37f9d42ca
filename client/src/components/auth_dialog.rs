//! Login / signup dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog owns its [`AuthForm`] reducer; the parent owns whether it is
//! open and in which mode. A successful submit hands the synthesized user to
//! `on_login` without contacting any server.

#[cfg(test)]
#[path = "auth_dialog_test.rs"]
mod auth_dialog_test;

use leptos::prelude::*;

use crate::state::auth::AuthMode;
use crate::state::auth_form::{AuthForm, Field};
use crate::types::{LoginMethod, Role, User};

/// Modal auth form. Escape, the backdrop, and the close button all dismiss it.
#[component]
pub fn AuthDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] mode: Signal<AuthMode>,
    on_mode_change: Callback<AuthMode>,
    on_close: Callback<()>,
    on_login: Callback<User>,
) -> impl IntoView {
    let form = RwSignal::new(AuthForm::default());

    let close = move || {
        form.update(AuthForm::reset);
        on_close.run(());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current_mode = mode.get_untracked();
        let mut outcome = None;
        form.update(|f| outcome = Some(f.submit(current_mode)));
        if let Some(Ok(user)) = outcome {
            on_login.run(user);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let is_signup = move || mode.get() == AuthMode::Signup;
    let uses_password = move || form.with(|f| f.method.uses_password());

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog auth-dialog"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="auth-dialog__header">
                        <h2>{move || mode.get().title()}</h2>
                        <button class="auth-dialog__close" title="Close" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    <div class="auth-dialog__methods" role="tablist">
                        {LoginMethod::ALL
                            .into_iter()
                            .map(|method| {
                                view! {
                                    <button
                                        type="button"
                                        class="auth-dialog__method"
                                        class:auth-dialog__method--active=move || form.with(|f| f.method == method)
                                        on:click=move |_| form.update(|f| f.set_method(method))
                                    >
                                        {method.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <form class="auth-form" on:submit=on_submit novalidate=true>
                        {text_field(form, Field::Username, "Username", "text", "your name")}

                        {move || match form.with(|f| f.method) {
                            LoginMethod::Email => {
                                text_field(form, Field::Email, "Email", "email", "you@example.com").into_any()
                            }
                            LoginMethod::Phone => {
                                text_field(form, Field::Phone, "Phone", "tel", "+1 555 123 4567").into_any()
                            }
                            LoginMethod::Gmail => {
                                view! {
                                    <p class="auth-form__hint">"Continue with your Google account. No password needed."</p>
                                }
                                    .into_any()
                            }
                        }}

                        <Show when=uses_password>
                            {text_field(form, Field::Password, "Password", "password", "at least 6 characters")}
                        </Show>
                        <Show when=move || uses_password() && is_signup()>
                            {text_field(form, Field::ConfirmPassword, "Confirm password", "password", "repeat password")}
                        </Show>
                        <Show when=is_signup>
                            {role_field(form)}
                        </Show>

                        <button class="btn btn--primary auth-form__submit" type="submit">
                            {move || mode.get().submit_label()}
                        </button>
                    </form>

                    <p class="auth-dialog__switch">
                        {move || if is_signup() { "Already have an account? " } else { "New to KindBite? " }}
                        <button
                            type="button"
                            class="auth-dialog__switch-link"
                            on:click=move |_| {
                                form.update(|f| f.errors = Default::default());
                                on_mode_change.run(mode.get_untracked().toggled());
                            }
                        >
                            {move || if is_signup() { "Log in" } else { "Sign up" }}
                        </button>
                    </p>
                </div>
            </div>
        </Show>
    }
}

/// Labelled input bound to one form field, with its inline error.
fn text_field(
    form: RwSignal<AuthForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let (id, error_id) = field_ids(field);
    let input_id = id.clone();
    let describedby = error_id.clone();
    let value = move || {
        form.with(|f| match field {
            Field::Username => f.values.username.clone(),
            Field::Email => f.values.email.clone(),
            Field::Phone => f.values.phone.clone(),
            Field::Password => f.values.password.clone(),
            Field::ConfirmPassword => f.values.confirm_password.clone(),
            Field::Role => f.values.role.map(|r| r.as_str().to_owned()).unwrap_or_default(),
        })
    };
    let error = move || form.with(|f| f.errors.get(field));

    view! {
        <label class="auth-form__field" for=id>
            <span class="auth-form__label">{label}</span>
            <input
                id=input_id
                class="auth-form__input"
                class:auth-form__input--error=move || error().is_some()
                type=input_type
                placeholder=placeholder
                aria-describedby=describedby
                prop:value=value
                on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
            />
            <span id=error_id class="auth-form__error">{error}</span>
        </label>
    }
}

/// DOM ids for a field's input and its error span.
fn field_ids(field: Field) -> (String, String) {
    let id = format!("auth-{}", field.key());
    let error_id = format!("{id}-error");
    (id, error_id)
}

fn role_field(form: RwSignal<AuthForm>) -> impl IntoView {
    let error = move || form.with(|f| f.errors.get(Field::Role));
    let selected = move || form.with(|f| f.values.role);

    view! {
        <label class="auth-form__field" for="auth-role">
            <span class="auth-form__label">"I am a..."</span>
            <select
                id="auth-role"
                class="auth-form__input"
                class:auth-form__input--error=move || error().is_some()
                on:change=move |ev| form.update(|f| f.edit(Field::Role, event_target_value(&ev)))
            >
                <option value="" selected=move || selected().is_none()>"Select a role"</option>
                {Role::ALL
                    .into_iter()
                    .map(|role| {
                        view! {
                            <option value=role.as_str() selected=move || selected() == Some(role)>
                                {role.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <span class="auth-form__error">{error}</span>
        </label>
    }
}
