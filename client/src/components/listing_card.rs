//! Card for one surplus-food listing in the browse grid.

use leptos::prelude::*;

use crate::types::Listing;

#[component]
pub fn ListingCard(listing: Listing) -> impl IntoView {
    let free = listing.is_free();
    let price = listing.price_label();
    let savings = listing.savings_percent().map(|pct| format!("-{pct}%"));
    let original = listing.original_price.filter(|_| !free).map(|p| format!("${p:.2}"));
    let quantity = listing.quantity.map(|q| format!("{q} left"));
    let pickup = listing.pickup_until.map(|t| format!("Pick up by {t}"));

    view! {
        <article class="listing-card" class:listing-card--free=free>
            <header class="listing-card__header">
                <span class="listing-card__category">{listing.category}</span>
                {savings.map(|s| view! { <span class="listing-card__savings">{s}</span> })}
            </header>
            <h3 class="listing-card__name">{listing.name}</h3>
            <p class="listing-card__restaurant">{listing.restaurant}</p>
            <div class="listing-card__meta">
                <span class="listing-card__rating">{format!("★ {:.1}", listing.rating)}</span>
                {quantity.map(|q| view! { <span class="listing-card__quantity">{q}</span> })}
            </div>
            <div class="listing-card__price">
                <span class="listing-card__price-now">{price}</span>
                {original.map(|o| view! { <s class="listing-card__price-was">{o}</s> })}
            </div>
            {pickup.map(|p| view! { <p class="listing-card__pickup">{p}</p> })}
        </article>
    }
}
