// Component render tests
// Render components under a reactive owner and check the server-rendered
// HTML. Effects never run during SSR, so list views stay in their loading
// state here; the fetch flows are covered by directory_tests.

use std::sync::Arc;

use fleet_console::fixtures::{SampleCars, SampleClients, SampleSet};
use fleet_console::web_app::api::HttpGateway;
use fleet_console::web_app::components::*;
use fleet_console::web_app::config::ServiceConfig;
use fleet_console::web_app::error::ApiError;
use fleet_console::web_app::model::{NewCar, NewClient, UNKNOWN_OWNER};
use fleet_console::web_app::state::ClientRoster;
use leptos::prelude::*;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

fn provide_services() {
    let config = ServiceConfig::new("http://localhost:8888", "http://localhost:8082").unwrap();
    provide_context(HttpGateway::new(config));
    provide_context(ClientRoster::default());
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        let _ = Loading(LoadingProps {
            message: "Loading clients...",
        });
    });
}

#[test]
fn test_error_message_renders_banner_text() {
    with_runtime(|| {
        let banner = "Unable to connect to the car service. Please ensure the service is running at http://localhost:8082";
        let html = ErrorMessage(ErrorMessageProps {
            message: banner.to_string(),
        })
        .to_html();

        assert!(html.contains("Unable to connect to the car service"));
        assert!(html.contains("http://localhost:8082"));
    });
}

#[test]
fn test_client_row_renders_name_and_age() {
    with_runtime(|| {
        let client = SampleClients::records().remove(0);
        let html = ClientRow(ClientRowProps { client }).to_html();

        assert!(html.contains("Ana"));
        assert!(html.contains("Age: 30"));
    });
}

#[test]
fn test_car_card_renders_owner_label() {
    with_runtime(|| {
        let cars = SampleCars::records();

        let html = CarCard(CarCardProps {
            car: cars[0].clone(),
            owner: "Ana".to_string(),
        })
        .to_html();
        assert!(html.contains("Peugeot 208"));
        assert!(html.contains("Matricule: 123-TU-4567"));
        assert!(html.contains("Owner: Ana"));

        let html = CarCard(CarCardProps {
            car: cars[3].clone(),
            owner: UNKNOWN_OWNER.to_string(),
        })
        .to_html();
        assert!(html.contains("Owner: Unknown Owner"));
    });
}

#[test]
fn test_inputs_instantiation() {
    with_runtime(|| {
        let _ = TextInput(TextInputProps {
            value: RwSignal::new("Ana".to_string()),
            id: "name",
            placeholder: "",
            input_type: "text",
        });

        let _ = SelectString(SelectStringProps {
            value: RwSignal::new(String::new()),
            options: Signal::derive(|| vec![("1".to_string(), "Ana (Age: 30)".to_string())]),
            id: "clientId",
            placeholder: "Select an owner",
        });
    });
}

#[test]
fn test_search_bar_instantiation() {
    with_runtime(|| {
        let term = RwSignal::new(String::new());
        let _ = SearchBar(SearchBarProps {
            value: Signal::derive(move || term.get()),
            on_change: Callback::new(move |value: String| term.set(value)),
            placeholder: "Search clients...",
        });
    });
}

#[test]
fn test_button_renders_type_class_and_label() {
    with_runtime(|| {
        let html = Button(ButtonProps {
            children: Box::new(|| view! { "Add Client" }.into_any()),
            on_click: None,
            button_type: "submit",
            class: "w-full",
        })
        .to_html();

        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("w-full"));
        assert!(html.contains("Add Client"));
    });
}

#[test]
fn test_closed_modal_renders_nothing() {
    with_runtime(|| {
        let html = view! {
            <Modal is_open=Signal::derive(|| false) on_close=Callback::new(|_| {}) title="Add New Client">
                <p>"Form body"</p>
            </Modal>
        }
        .to_html();

        assert!(!html.contains("Add New Client"));
        assert!(!html.contains("Form body"));
        assert!(!html.contains("Close"));
    });
}

#[test]
fn test_open_modal_renders_title_close_button_and_children() {
    with_runtime(|| {
        let children: ChildrenFn = Arc::new(|| view! { <p>"Form body"</p> }.into_any());
        let html = Modal(ModalProps {
            is_open: Signal::derive(|| true),
            on_close: Callback::new(|_| {}),
            title: "Add New Client",
            children,
        })
        .to_html();

        assert!(html.contains("Add New Client"));
        assert!(html.contains("title=\"Close\""));
        assert!(html.contains("Form body"));
    });
}

#[test]
fn test_add_car_form_lists_owners_after_placeholder() {
    with_runtime(|| {
        let clients = Signal::derive(SampleClients::records);
        let html = view! {
            <AddCarForm
                clients=clients
                on_submit=|_car: NewCar| async { Ok::<(), ApiError>(()) }
                on_close=Callback::new(|_| {})
            />
        }
        .to_html();

        let placeholder = html.find("Select an owner").unwrap();
        let ana = html.find("Ana (Age: 30)").unwrap();
        let bruno = html.find("Bruno Costa (Age: 45)").unwrap();
        assert!(placeholder < ana);
        assert!(ana < bruno);
        assert!(html.contains("value=\"1\""));
        assert!(html.contains("id=\"clientId\""));
        assert!(html.contains("Add Car"));
    });
}

#[test]
fn test_add_client_form_renders_fields_and_actions() {
    with_runtime(|| {
        let html = view! {
            <AddClientForm
                on_submit=|_client: NewClient| async { Ok::<(), ApiError>(()) }
                on_close=Callback::new(|_| {})
            />
        }
        .to_html();

        assert!(html.contains("id=\"name\""));
        assert!(html.contains("id=\"age\""));
        assert!(html.contains("Cancel"));
        assert!(html.contains("Add Client"));
        assert!(!html.contains("Please fill in all fields"));
    });
}

#[test]
fn test_client_list_starts_with_spinner() {
    with_runtime(|| {
        provide_services();
        let html = view! { <ClientList /> }.to_html();

        assert!(html.contains("Clients"));
        assert!(html.contains("+ Add Client"));
        assert!(html.contains("Search clients..."));
        assert!(html.contains("Loading clients..."));
        assert!(!html.contains("Unable to connect"));
        // Modal closed until the button is pressed
        assert!(!html.contains("Add New Client"));
    });
}

#[test]
fn test_car_list_starts_with_spinner() {
    with_runtime(|| {
        provide_services();
        let html = view! { <CarList /> }.to_html();

        assert!(html.contains("+ Add Car"));
        assert!(html.contains("Search cars..."));
        assert!(html.contains("Loading cars..."));
        assert!(!html.contains("Add New Car"));
    });
}
