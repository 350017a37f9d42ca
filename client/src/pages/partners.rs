//! Partners route.

use leptos::prelude::*;

use super::ChatLauncher;
use crate::components::partners_view::PartnersView;
use crate::types::Destination;

#[component]
pub fn PartnersPage() -> impl IntoView {
    let on_view_change = super::destination_navigator();
    view! {
        <PartnersView on_view_change=on_view_change/>
        <ChatLauncher dest=Destination::Partners title="Ask about our partners"/>
    }
}
