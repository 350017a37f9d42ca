//! Environmental impact page body.
//!
//! Pure renderer over the constant tables in [`crate::data::impact`]. The
//! call-to-action buttons hand navigation back to the parent.

use leptos::prelude::*;

use crate::data::impact::{CATEGORY_BREAKDOWN, HEADLINE_STATS, MILESTONES, TIPS};
use crate::types::Destination;

#[component]
pub fn ImpactView(on_view_change: Callback<Destination>) -> impl IntoView {
    view! {
        <section class="impact-view">
            <header class="impact-view__hero">
                <h1>"Our Impact"</h1>
                <p>"Every rescued meal keeps food out of landfill and on someone's table."</p>
            </header>

            <div class="impact-view__stats">
                {HEADLINE_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="impact-stat">
                                <span class="impact-stat__icon">{stat.icon}</span>
                                <span class="impact-stat__value">{stat.value}</span>
                                <span class="impact-stat__label">{stat.label}</span>
                                <p class="impact-stat__detail">{stat.detail}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="impact-view__breakdown">
                <h2>"What we rescue"</h2>
                {CATEGORY_BREAKDOWN
                    .iter()
                    .map(|share| {
                        view! {
                            <div class="impact-bar">
                                <span class="impact-bar__label">{share.category}</span>
                                <div class="impact-bar__track">
                                    <div class="impact-bar__fill" style:width=format!("{}%", share.percent)></div>
                                </div>
                                <span class="impact-bar__value">{format!("{}%", share.percent)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <ol class="impact-view__timeline">
                {MILESTONES
                    .iter()
                    .map(|m| {
                        view! {
                            <li class="impact-milestone">
                                <span class="impact-milestone__period">{m.period}</span>
                                <span class="impact-milestone__title">{m.title}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <div class="impact-view__tips">
                <h2>"Reduce waste at home"</h2>
                <ul>{TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}</ul>
            </div>

            <div class="impact-view__actions">
                <button class="btn btn--primary" on:click=move |_| on_view_change.run(Destination::Search)>
                    "Find food near you"
                </button>
                <button class="btn" on:click=move |_| on_view_change.run(Destination::Partners)>
                    "Meet our partners"
                </button>
            </div>
        </section>
    }
}
