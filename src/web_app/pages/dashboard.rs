// web_app/pages/dashboard.rs - Console pages
//
// Every page shares the same header and navigation; the list components do
// their own fetching, so pages only decide which lists are mounted.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::components::{CarList, ClientList};

/// Header and navigation around a page body
#[component]
fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <h1 class="text-xl font-bold text-blue-700">"Fleet Console"</h1>
                    <nav class="flex gap-6 text-sm font-medium text-gray-600">
                        <A href="/">"Dashboard"</A>
                        <A href="/clients">"Clients"</A>
                        <A href="/cars">"Cars"</A>
                    </nav>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {children()}
            </main>
        </div>
    }
}

/// Both lists
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <PageShell>
            <div class="grid gap-8 grid-cols-1 xl:grid-cols-2 items-start">
                <ClientList />
                <CarList />
            </div>
        </PageShell>
    }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! {
        <PageShell>
            <ClientList />
        </PageShell>
    }
}

#[component]
pub fn CarsPage() -> impl IntoView {
    view! {
        <PageShell>
            <CarList />
        </PageShell>
    }
}
