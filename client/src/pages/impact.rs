//! Impact route.

use leptos::prelude::*;

use super::ChatLauncher;
use crate::components::impact_view::ImpactView;
use crate::types::Destination;

#[component]
pub fn ImpactPage() -> impl IntoView {
    let on_view_change = super::destination_navigator();
    view! {
        <ImpactView on_view_change=on_view_change/>
        <ChatLauncher dest=Destination::Impact title="Ask about our impact"/>
    }
}
