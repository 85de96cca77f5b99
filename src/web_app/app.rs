// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It provides the shared gateway and client roster, and sets up routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::api::HttpGateway;
use crate::web_app::config::ServiceConfig;
use crate::web_app::pages::{CarsPage, ClientsPage, DashboardPage};
use crate::web_app::state::ClientRoster;

pub const APP_TITLE: &str = "Fleet Console";

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Context: HttpGateway (service URLs of this build) and ClientRoster
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    provide_context(HttpGateway::new(ServiceConfig::from_build_env()));
    provide_context(ClientRoster::default());

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Administration of clients and their cars" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/fleet_console.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/clients") view=ClientsPage />
                <Route path=path!("/cars") view=CarsPage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to Dashboard"
                </a>
            </div>
        </div>
    }
}
