//! Top bar with navigation and the session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<AuthState>` from context. Navigation goes through the
//! `on_view_change` callback so the header never touches the router itself.

use leptos::prelude::*;

use crate::state::auth::{AuthMode, AuthState};
use crate::types::Destination;

#[component]
pub fn SiteHeader(#[prop(into)] current: Signal<Destination>, on_view_change: Callback<Destination>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let user_label = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map(|u| (u.username.clone(), u.role.label()))
        })
    };

    view! {
        <header class="site-header">
            <button class="site-header__brand" on:click=move |_| on_view_change.run(Destination::Home)>
                "KindBite"
            </button>

            <nav class="site-header__nav">
                {Destination::ALL
                    .into_iter()
                    .map(|dest| {
                        view! {
                            <button
                                class="site-header__link"
                                class:site-header__link--active=move || current.get() == dest
                                on:click=move |_| on_view_change.run(dest)
                            >
                                {dest.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="site-header__session">
                {move || match user_label() {
                    Some((name, role)) => {
                        view! {
                            <span class="site-header__user">{name}</span>
                            <span class="site-header__role">{role}</span>
                            <button class="btn" on:click=move |_| auth.update(AuthState::logout)>
                                "Log out"
                            </button>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <button class="btn" on:click=move |_| auth.update(|a| a.open_dialog(AuthMode::Login))>
                                "Log in"
                            </button>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| auth.update(|a| a.open_dialog(AuthMode::Signup))
                            >
                                "Sign up"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
