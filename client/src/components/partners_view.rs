//! Partner leaderboard page body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders [`PARTNERS`] either as one ranked table or filtered to a single
//! [`PartnerKind`] tab. Rank badges come from [`badge_for_rank`] through
//! [`Partner::badge`].

use leptos::prelude::*;

use crate::data::partners::{PARTNERS, Partner, PartnerKind, partners_of};
use crate::types::Destination;

#[component]
pub fn PartnersView(on_view_change: Callback<Destination>) -> impl IntoView {
    let kind = RwSignal::new(None::<PartnerKind>);

    let rows = move || -> Vec<&'static Partner> {
        match kind.get() {
            Some(k) => partners_of(k).collect(),
            None => PARTNERS.iter().collect(),
        }
    };

    view! {
        <section class="partners-view">
            <header class="partners-view__hero">
                <h1>"Partner Leaderboard"</h1>
                <p>"The venues rescuing the most meals this year."</p>
            </header>

            <div class="partners-view__tabs" role="tablist">
                <button
                    class="partners-view__tab"
                    class:partners-view__tab--active=move || kind.get().is_none()
                    on:click=move |_| kind.set(None)
                >
                    "All"
                </button>
                {PartnerKind::ALL
                    .into_iter()
                    .map(|k| {
                        view! {
                            <button
                                class="partners-view__tab"
                                class:partners-view__tab--active=move || kind.get() == Some(k)
                                on:click=move |_| kind.set(Some(k))
                            >
                                {k.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <table class="partners-table">
                <thead>
                    <tr>
                        <th>"Rank"</th>
                        <th>"Partner"</th>
                        <th>"City"</th>
                        <th>"Meals saved"</th>
                        <th>"Rating"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows().into_iter().map(partner_row).collect_view()}
                </tbody>
            </table>

            <div class="partners-view__actions">
                <button class="btn btn--primary" on:click=move |_| on_view_change.run(Destination::Search)>
                    "Browse their listings"
                </button>
                <button class="btn" on:click=move |_| on_view_change.run(Destination::Impact)>
                    "See our impact"
                </button>
            </div>
        </section>
    }
}

fn partner_row(partner: &'static Partner) -> impl IntoView {
    let badge = partner.badge();
    view! {
        <tr class="partners-table__row">
            <td>
                <span class=format!("partner-badge {}", badge.css_class()) title=badge.label()>
                    {badge.icon()}
                </span>
                {format!("#{}", partner.rank)}
            </td>
            <td>
                <span class="partners-table__name">{partner.name}</span>
                <span class="partners-table__kind">{partner.kind.label()}</span>
            </td>
            <td>{partner.city}</td>
            <td>{partner.meals_saved}</td>
            <td>{format!("★ {:.1}", partner.rating)}</td>
        </tr>
    }
}
