//! Splash shown in place of member-only content when nobody is logged in.

use leptos::prelude::*;

use crate::state::auth::AuthMode;

#[component]
pub fn LoginPrompt(on_open_auth: Callback<AuthMode>) -> impl IntoView {
    view! {
        <section class="login-prompt">
            <div class="login-prompt__card">
                <span class="login-prompt__icon">"🍱"</span>
                <h2>"You're not logged in"</h2>
                <p class="login-prompt__subtitle">
                    "Log in or create a free account to search listings and reserve surplus food near you."
                </p>
                <div class="login-prompt__actions">
                    <button class="btn btn--primary" on:click=move |_| on_open_auth.run(AuthMode::Login)>
                        "Log in"
                    </button>
                    <button class="btn" on:click=move |_| on_open_auth.run(AuthMode::Signup)>
                        "Sign up"
                    </button>
                </div>
            </div>
        </section>
    }
}
