//! Listing search page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Members only: logged-out visitors get the [`LoginPrompt`] splash. The
//! filter lives in a page-local [`CatalogFilter`] signal; the catalog itself
//! comes from context and is shared with the assistant.

use leptos::prelude::*;

use super::ChatLauncher;
use crate::components::listing_card::ListingCard;
use crate::components::login_prompt::LoginPrompt;
use crate::state::auth::{AuthMode, AuthState};
use crate::state::catalog::{CatalogFilter, categories};
use crate::types::{Destination, Listing};

#[component]
pub fn SearchPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let listings = expect_context::<RwSignal<Vec<Listing>>>();
    let filter = RwSignal::new(CatalogFilter::default());

    let on_open_auth = Callback::new(move |mode: AuthMode| auth.update(|a| a.open_dialog(mode)));
    let logged_in = move || auth.with(AuthState::is_logged_in);

    let results = move || {
        let f = filter.get();
        listings.with(|items| f.apply(items).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <Show when=logged_in fallback=move || view! { <LoginPrompt on_open_auth=on_open_auth/> }>
            <div class="search-page">
                <div class="search-page__controls">
                    <input
                        class="search-page__query"
                        type="search"
                        placeholder="Search by dish, restaurant, or category"
                        prop:value=move || filter.with(|f| f.query.clone())
                        on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                    />
                    <label class="search-page__free-only">
                        <input
                            type="checkbox"
                            prop:checked=move || filter.with(|f| f.free_only)
                            on:change=move |_| filter.update(|f| f.free_only = !f.free_only)
                        />
                        "Free only"
                    </label>
                    <Show when=move || filter.with(CatalogFilter::is_active)>
                        <button class="btn search-page__clear" on:click=move |_| filter.set(CatalogFilter::default())>
                            "Clear"
                        </button>
                    </Show>
                </div>

                <div class="search-page__chips">
                    {move || {
                        listings
                            .with(|items| categories(items))
                            .into_iter()
                            .map(|category| {
                                let selected = category.clone();
                                let toggled = category.clone();
                                view! {
                                    <button
                                        class="chip"
                                        class:chip--active=move || {
                                            filter.with(|f| f.category.as_deref() == Some(selected.as_str()))
                                        }
                                        on:click=move |_| filter.update(|f| f.toggle_category(&toggled))
                                    >
                                        {category}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                {move || {
                    let hits = results();
                    if hits.is_empty() {
                        view! { <p class="search-page__empty">"No listings match your search."</p> }.into_any()
                    } else {
                        view! {
                            <p class="search-page__count">{format!("{} result(s)", hits.len())}</p>
                            <div class="listing-grid">
                                {hits
                                    .into_iter()
                                    .map(|listing| view! { <ListingCard listing=listing/> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}

                <ChatLauncher dest=Destination::Search title="Quick questions"/>
            </div>
        </Show>
    }
}
