//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::auth_dialog::AuthDialog;
use crate::components::site_header::SiteHeader;
use crate::data::listings::demo_listings;
use crate::pages::{
    destination_navigator, home::HomePage, impact::ImpactPage, partners::PartnersPage, search::SearchPage,
};
use crate::state::auth::{AuthMode, AuthState};
use crate::types::{Destination, User};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and the listing catalog as contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let listings = RwSignal::new(demo_listings());

    provide_context(auth);
    provide_context(listings);

    view! {
        <Stylesheet id="leptos" href="/pkg/kindbite.css"/>
        <Title text="KindBite"/>

        <Router>
            <Layout/>
        </Router>
    }
}

/// Header, routed page, and the auth dialog. Lives under the router so
/// navigation hooks are available.
#[component]
fn Layout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let on_view_change = destination_navigator();

    let current = Signal::derive(move || {
        let path = location.pathname.get();
        path.trim_start_matches('/').parse::<Destination>().unwrap_or(Destination::Home)
    });

    let dialog_open = Signal::derive(move || auth.with(|a| a.dialog.is_some()));
    let dialog_mode = Signal::derive(move || auth.with(|a| a.dialog.unwrap_or_default()));

    view! {
        <SiteHeader current=current on_view_change=on_view_change/>

        <main class="site-main">
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("search") view=SearchPage/>
                <Route path=StaticSegment("impact") view=ImpactPage/>
                <Route path=StaticSegment("partners") view=PartnersPage/>
            </Routes>
        </main>

        <AuthDialog
            open=dialog_open
            mode=dialog_mode
            on_mode_change=Callback::new(move |mode: AuthMode| auth.update(|a| a.change_mode(mode)))
            on_close=Callback::new(move |()| auth.update(AuthState::close_dialog))
            on_login=Callback::new(move |user: User| auth.update(|a| a.login(user)))
        />
    }
}
