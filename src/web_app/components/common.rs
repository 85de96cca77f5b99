// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center h-40">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            <span class="mt-4 text-gray-500 text-sm">{message}</span>
        </div>
    }
}

/// Error banner component
///
/// Displays a message string; has no behaviour of its own.
#[component]
pub fn ErrorMessage(
    /// The message to display
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-3" role="alert">
            <span class="text-red-600 text-xl font-bold">"⚠"</span>
            <p class="text-red-700 text-sm">{message}</p>
        </div>
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "flex items-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-lg \
                      hover:bg-blue-700 transition-colors font-medium text-sm";

    view! {
        <button
            type=button_type
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = "px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 rounded-md \
                 hover:bg-gray-200 transition-colors";

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal component
///
/// Renders nothing while closed. When open, shows the title, a close button
/// and the children. Children are rebuilt on every open.
#[component]
pub fn Modal(
    /// Whether the modal is shown
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback when the close button is pressed
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-gray-900/60"></div>

                <div class="relative bg-white rounded-xl shadow-2xl w-full max-w-md">
                    <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100">
                        <h2 class="text-xl font-bold text-gray-800">{title}</h2>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-gray-600 rounded-full p-1 transition-colors"
                            on:click=move |_| on_close.run(())
                            title="Close"
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="p-6">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Text input component
///
/// A controlled input: the signal owns the value.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Element id, paired with the field label
    id: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, number, ...)
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    let class = "mt-1 block w-full px-3 py-2 rounded-md border border-gray-300 shadow-sm \
                 focus:border-blue-500 focus:ring-blue-500 outline-none";

    view! {
        <input
            type=input_type
            id=id
            placeholder=placeholder
            class=class
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Select dropdown component
///
/// A controlled select over (value, label) pairs, led by an empty
/// placeholder option.
#[component]
pub fn SelectString(
    /// The currently selected value ("" = placeholder)
    value: RwSignal<String>,
    /// Available options as (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Element id, paired with the field label
    id: &'static str,
    /// Label of the empty option
    placeholder: &'static str,
) -> impl IntoView {
    let class = "mt-1 block w-full px-3 py-2 rounded-md border border-gray-300 bg-white \
                 shadow-sm focus:border-blue-500 focus:ring-blue-500 outline-none";

    view! {
        <select
            id=id
            class=class
            on:change=move |ev| {
                value.set(event_target_value(&ev));
            }
        >
            <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
            {move || {
                options.get().into_iter().map(|(opt_value, label)| {
                    let opt_val = opt_value.clone();
                    view! {
                        <option
                            value=opt_value
                            selected=move || value.get() == opt_val
                        >
                            {label}
                        </option>
                    }
                }).collect_view()
            }}
        </select>
    }
}
