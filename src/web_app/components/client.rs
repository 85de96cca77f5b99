// web_app/components/client.rs - Client view
//
// - ClientList: owns the client list state, fetches on mount, hosts the modal
// - ClientRow: one fetched client
// - AddClientForm: name + age form with presence validation

use std::future::Future;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::common::{Button, ErrorMessage, Loading, Modal, SecondaryButton, TextInput};
use super::search::SearchBar;
use crate::web_app::api::actions::{create_client, mount_clients};
use crate::web_app::api::HttpGateway;
use crate::web_app::error::ApiError;
use crate::web_app::model::{submit_draft, Client, ClientDraft, FormOutcome, NewClient};
use crate::web_app::state::{ClientRoster, ListPhase, ListState, MountToken};

/// Client list orchestrator
///
/// Expects an `HttpGateway` and a `ClientRoster` in context (see `App`).
#[component]
pub fn ClientList() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let roster = expect_context::<ClientRoster>();

    let state = RwSignal::new(ListState::<Client>::default());
    let token = MountToken::new();

    on_cleanup({
        let token = token.clone();
        move || token.dispose()
    });

    // Effects only run in the browser, once, since nothing is tracked
    Effect::new({
        let gateway = gateway.clone();
        let roster = roster.clone();
        let token = token.clone();
        move || {
            let gateway = gateway.clone();
            let roster = roster.clone();
            let token = token.clone();
            spawn_local(async move {
                mount_clients(&gateway, &state, &roster, &token).await;
            });
        }
    });

    let search_term = Signal::derive(move || state.with(|s| s.search_term.clone()));
    let on_search = Callback::new(move |term: String| state.update(|s| s.set_search_term(term)));

    let modal_open = Signal::derive(move || state.with(|s| s.modal_open));
    let open_modal = Callback::new(move |()| state.update(|s| s.open_modal()));
    let close_modal = Callback::new(move |()| state.update(|s| s.close_modal()));

    let submit = move |client: NewClient| {
        let gateway = gateway.clone();
        let roster = roster.clone();
        let token = token.clone();
        async move { create_client(&gateway, &state, &roster, &token, client).await }
    };

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-2">
                    <span class="text-2xl">"👥"</span>
                    <h2 class="text-2xl font-bold text-gray-800">"Clients"</h2>
                </div>
                <Button on_click=open_modal>"+ Add Client"</Button>
            </div>

            <SearchBar
                placeholder="Search clients..."
                value=search_term
                on_change=on_search
            />

            {move || match state.with(|s| s.phase()) {
                ListPhase::Loading => view! { <Loading message="Loading clients..." /> }.into_any(),
                ListPhase::Failed(message) => view! {
                    <div class="mt-6">
                        <ErrorMessage message=message />
                    </div>
                }.into_any(),
                ListPhase::Ready(clients) => view! {
                    <div class="mt-6 space-y-4">
                        {clients.into_iter().map(|client| view! {
                            <ClientRow client=client />
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}

            <Modal is_open=modal_open on_close=close_modal title="Add New Client">
                <AddClientForm on_submit=submit.clone() on_close=close_modal />
            </Modal>
        </div>
    }
}

/// One client in the list
#[component]
pub fn ClientRow(
    /// The client to display
    client: Client,
) -> impl IntoView {
    let age = client.age_label();

    view! {
        <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg hover:bg-gray-100 transition-colors">
            <div>
                <h3 class="font-semibold text-gray-800">{client.name}</h3>
                <p class="text-sm text-gray-600">{age}</p>
            </div>
        </div>
    }
}

/// Add Client form
///
/// Calls `on_submit` only once every field is filled and the age parses;
/// closes through `on_close` when the submission succeeds.
#[component]
pub fn AddClientForm<F, Fut>(
    /// Creates the client; an error keeps the form open
    on_submit: F,
    /// Closes the surrounding modal
    on_close: Callback<()>,
) -> impl IntoView
where
    F: Fn(NewClient) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let draft = ClientDraft {
            name: name.get_untracked(),
            age: age.get_untracked(),
        };
        let on_submit = on_submit.clone();

        spawn_local(async move {
            match submit_draft(&draft, on_submit).await {
                FormOutcome::Submitted => on_close.run(()),
                FormOutcome::Rejected(e) => {
                    leptos::logging::warn!("Add client rejected: {}", e);
                    // The modal may have been closed while the request ran
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <form on:submit=handle_submit class="space-y-4">
            {move || error.get().map(|message| view! {
                <p class="text-red-600 text-sm">{message}</p>
            })}
            <div>
                <label for="name" class="block text-sm font-medium text-gray-700">"Name"</label>
                <TextInput id="name" value=name />
            </div>
            <div>
                <label for="age" class="block text-sm font-medium text-gray-700">"Age"</label>
                <TextInput id="age" value=age input_type="number" />
            </div>
            <div class="flex justify-end gap-2">
                <SecondaryButton on_click=on_close>"Cancel"</SecondaryButton>
                <Button button_type="submit">"Add Client"</Button>
            </div>
        </form>
    }
}
