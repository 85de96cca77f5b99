// web_app/components/search.rs - Search input
//
// The console filters locally, so the search bar is nothing more than a
// controlled input: the parent owns the term and gets every keystroke.

use leptos::prelude::*;

/// Search bar component
///
/// Emits the new term on every input event, without debouncing.
#[component]
pub fn SearchBar(
    /// Current search term, owned by the parent
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new term on every keystroke
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(default = "Search...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="relative">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-gray-400">"🔍"</span>
            </div>
            <input
                type="text"
                placeholder=placeholder
                class="pl-10 pr-4 py-2 w-full rounded-lg border border-gray-200 \
                       focus:border-blue-500 focus:ring-2 focus:ring-blue-200 \
                       outline-none transition-all"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
