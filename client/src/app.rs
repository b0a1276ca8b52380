//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RequireSignedIn;
use crate::components::site_header::SiteHeader;
use crate::config::AppConfig;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, payment::PaymentPage,
    post_auth::PostAuthPage,
};
use crate::state::auth::AuthState;

/// Script bundle for the hosted auth provider.
pub const CLERK_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/@clerk/clerk-js@5/dist/clerk.browser.js";

/// HTML shell rendered on the server for SSR + hydration.
///
/// Runtime configuration is handed to the browser as `<meta>` tags so the
/// hydrated app reads the same values the server rendered with.
pub fn shell(options: LeptosOptions, config: AppConfig) -> impl IntoView {
    let clerk_key = config.clerk_publishable_key.clone();
    let meta = config
        .meta_entries()
        .into_iter()
        .map(|(name, content)| view! { <meta name=name content=content/> })
        .collect_view();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {meta}
                <script
                    crossorigin="anonymous"
                    data-clerk-publishable-key=clerk_key
                    src=CLERK_SCRIPT_URL
                ></script>
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
/// Provides the runtime config and auth session contexts and sets up
/// client-side routing. Protected routes swap in the login view when the
/// visitor is signed out; `/admin` applies its own stricter role gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_document);
    provide_context(config);

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    crate::util::clerk::install_auth_listener(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/skillmentor-admin.css"/>
        <Title text="SkillMentor Admin"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <LoginPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("post-auth") view=PostAuthPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireSignedIn><DashboardPage/></RequireSignedIn> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RequireSignedIn><AdminPage/></RequireSignedIn> }
                    />
                    <Route
                        path=(StaticSegment("payment"), ParamSegment("sessionId"))
                        view=|| view! { <RequireSignedIn><PaymentPage/></RequireSignedIn> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
