// web_app/components/car.rs - Car view
//
// - CarList: owns the car board (cars + owners), fetches on mount, hosts the modal
// - CarCard: one fetched car with its owner label
// - AddCarForm: brand / model / matricule / owner form

use std::future::Future;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::common::{Button, ErrorMessage, Loading, Modal, SecondaryButton, SelectString, TextInput};
use super::search::SearchBar;
use crate::web_app::api::actions::{create_car, mount_cars, open_car_form};
use crate::web_app::api::HttpGateway;
use crate::web_app::error::ApiError;
use crate::web_app::model::{submit_draft, Car, CarDraft, Client, FormOutcome, NewCar};
use crate::web_app::state::{CarBoard, ClientRoster, ListPhase, MountToken};

/// Car list orchestrator
///
/// Owner names come from the shared `ClientRoster`, so the client service is
/// only hit when the client view has not loaded it yet.
#[component]
pub fn CarList() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();
    let roster = expect_context::<ClientRoster>();

    let board = RwSignal::new(CarBoard::default());
    let token = MountToken::new();

    on_cleanup({
        let token = token.clone();
        move || token.dispose()
    });

    Effect::new({
        let gateway = gateway.clone();
        let roster = roster.clone();
        let token = token.clone();
        move || {
            let gateway = gateway.clone();
            let roster = roster.clone();
            let token = token.clone();
            spawn_local(async move {
                mount_cars(&gateway, &board, &roster, &token).await;
            });
        }
    });

    let search_term = Signal::derive(move || board.with(|b| b.cars.search_term.clone()));
    let on_search = Callback::new(move |term: String| board.update(|b| b.cars.set_search_term(term)));

    let owners = Signal::derive(move || board.with(|b| b.owners.clone()));
    let modal_open = Signal::derive(move || board.with(|b| b.cars.modal_open));
    let open_modal = Callback::new({
        let roster = roster.clone();
        move |()| open_car_form(&board, &roster)
    });
    let close_modal = Callback::new(move |()| board.update(|b| b.cars.close_modal()));

    let submit = move |car: NewCar| {
        let gateway = gateway.clone();
        let token = token.clone();
        async move { create_car(&gateway, &board, &token, car).await }
    };

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-2">
                    <span class="text-2xl">"🚗"</span>
                    <h2 class="text-2xl font-bold text-gray-800">"Cars"</h2>
                </div>
                <Button on_click=open_modal>"+ Add Car"</Button>
            </div>

            <SearchBar
                placeholder="Search cars..."
                value=search_term
                on_change=on_search
            />

            {move || match board.with(|b| b.phase()) {
                ListPhase::Loading => view! { <Loading message="Loading cars..." /> }.into_any(),
                ListPhase::Failed(message) => view! {
                    <div class="mt-6">
                        <ErrorMessage message=message />
                    </div>
                }.into_any(),
                ListPhase::Ready(rows) => view! {
                    <div class="mt-6 grid gap-4 grid-cols-1 md:grid-cols-2 lg:grid-cols-3">
                        {rows.into_iter().map(|(car, owner)| view! {
                            <CarCard car=car owner=owner />
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}

            <Modal is_open=modal_open on_close=close_modal title="Add New Car">
                <AddCarForm clients=owners on_submit=submit.clone() on_close=close_modal />
            </Modal>
        </div>
    }
}

/// One car with its resolved owner name
#[component]
pub fn CarCard(
    /// The car to display
    car: Car,
    /// Owner name, or the fallback label
    owner: String,
) -> impl IntoView {
    view! {
        <div class="p-4 bg-gray-50 rounded-lg hover:bg-gray-100 transition-colors">
            <div class="flex items-center gap-2 mb-2">
                <span class="text-gray-600">"🚗"</span>
                <h3 class="font-semibold text-gray-800">{car.title()}</h3>
            </div>
            <p class="text-sm text-gray-600">{car.matricule_label()}</p>
            <p class="text-sm text-gray-600">{format!("Owner: {}", owner)}</p>
        </div>
    }
}

/// Add Car form
///
/// The owner select lists every known client; its value is the client id,
/// parsed to a number on submit.
#[component]
pub fn AddCarForm<F, Fut>(
    /// Clients offered as owners
    #[prop(into)]
    clients: Signal<Vec<Client>>,
    /// Creates the car; an error keeps the form open
    on_submit: F,
    /// Closes the surrounding modal
    on_close: Callback<()>,
) -> impl IntoView
where
    F: Fn(NewCar) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let brand = RwSignal::new(String::new());
    let model = RwSignal::new(String::new());
    let matricule = RwSignal::new(String::new());
    let client_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let owner_options = Signal::derive(move || {
        clients
            .get()
            .iter()
            .map(|c| (c.id.to_string(), c.option_label()))
            .collect::<Vec<_>>()
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let draft = CarDraft {
            brand: brand.get_untracked(),
            model: model.get_untracked(),
            matricule: matricule.get_untracked(),
            client_id: client_id.get_untracked(),
        };
        let on_submit = on_submit.clone();

        spawn_local(async move {
            match submit_draft(&draft, on_submit).await {
                FormOutcome::Submitted => on_close.run(()),
                FormOutcome::Rejected(e) => {
                    leptos::logging::warn!("Add car rejected: {}", e);
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
                <label for="brand" class="block text-sm font-medium text-gray-700">"Brand"</label>
                <TextInput id="brand" value=brand />
            </div>
            <div>
                <label for="model" class="block text-sm font-medium text-gray-700">"Model"</label>
                <TextInput id="model" value=model />
            </div>
            <div>
                <label for="matricule" class="block text-sm font-medium text-gray-700">"Matricule"</label>
                <TextInput id="matricule" value=matricule />
            </div>
            <div>
                <label for="clientId" class="block text-sm font-medium text-gray-700">"Owner"</label>
                <SelectString
                    id="clientId"
                    value=client_id
                    options=owner_options
                    placeholder="Select an owner"
                />
            </div>
            <div class="flex justify-end gap-2">
                <SecondaryButton on_click=on_close>"Cancel"</SecondaryButton>
                <Button button_type="submit">"Add Car"</Button>
            </div>
        </form>
    }
}
