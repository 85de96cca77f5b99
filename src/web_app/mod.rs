// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Records, payloads, search filtering and form validation
// - state/: Per-view state containers, mount tokens, shared client roster
// - api/: Resource gateway (HTTP) and the fetch/create/refresh flows
// - config.rs / error.rs: Service locations and error types
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)
//
// Everything outside components/, pages/ and app.rs builds without Leptos,
// so it can be tested natively with the plain test harness.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod state;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
