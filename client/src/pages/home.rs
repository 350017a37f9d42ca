//! Landing page: hero, featured listings, and the assistant launcher.

use leptos::prelude::*;

use super::ChatLauncher;
use crate::components::listing_card::ListingCard;
use crate::types::{Destination, Listing};

const FEATURED_COUNT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let listings = expect_context::<RwSignal<Vec<Listing>>>();
    let on_view_change = super::destination_navigator();
    let chat_open = RwSignal::new(false);

    let free_count = move || listings.with(|items| items.iter().filter(|l| l.is_free()).count());

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Rescue good food. Share kindness."</h1>
                <p class="home-hero__subtitle">
                    {move || {
                        format!(
                            "{} listings available today, {} of them free.",
                            listings.with(Vec::len),
                            free_count(),
                        )
                    }}
                </p>
                <div class="home-hero__actions">
                    <button class="btn btn--primary" on:click=move |_| on_view_change.run(Destination::Search)>
                        "Browse food"
                    </button>
                    <button class="btn" on:click=move |_| chat_open.set(true)>
                        "Ask KindBite AI"
                    </button>
                </div>
            </section>

            <section class="home-featured">
                <h2>"Featured near you"</h2>
                <div class="listing-grid">
                    {move || {
                        listings
                            .get()
                            .into_iter()
                            .take(FEATURED_COUNT)
                            .map(|listing| view! { <ListingCard listing=listing/> })
                            .collect_view()
                    }}
                </div>
            </section>

            <ChatLauncher dest=Destination::Home open=chat_open/>
        </div>
    }
}
