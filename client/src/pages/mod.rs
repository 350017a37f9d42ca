//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod home;
pub mod impact;
pub mod partners;
pub mod search;


use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chat_dialog::ChatDialog;
use crate::responder::ResponderProfile;
use crate::types::{Destination, Listing};

/// Callback that routes to a [`Destination`]. Must be called under a `Router`.
pub fn destination_navigator() -> Callback<Destination> {
    let navigate = use_navigate();
    Callback::new(move |dest: Destination| {
        log::debug!("navigating to {dest}");
        navigate(dest.path(), leptos_router::NavigateOptions::default());
    })
}

/// Assistant personality used on each page.
pub fn chat_profile(dest: Destination) -> ResponderProfile {
    match dest {
        Destination::Home => ResponderProfile::ATTENTIVE,
        Destination::Search => ResponderProfile::SNAPPY,
        Destination::Impact => ResponderProfile::STEADY,
        Destination::Partners => ResponderProfile::RELAXED,
    }
}

/// Floating launcher button plus the chat dialog it opens, over the shared
/// listing catalog. Pass `open` when other controls on the page also open
/// the dialog.
#[component]
pub fn ChatLauncher(
    dest: Destination,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] open: Option<RwSignal<bool>>,
) -> impl IntoView {
    let listings = expect_context::<RwSignal<Vec<Listing>>>();
    let open = open.unwrap_or_else(|| RwSignal::new(false));

    view! {
        <button
            class="chat-launcher"
            title=title.unwrap_or("Chat with KindBite AI")
            on:click=move |_| open.set(true)
        >
            "💬"
        </button>
        <ChatDialog
            open=open
            on_close=Callback::new(move |()| open.set(false))
            listings=listings
            profile=chat_profile(dest)
        />
    }
}
