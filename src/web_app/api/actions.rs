// web_app/api/actions.rs - Fetch / create / refresh flows of the list views
//
// These are the bridges between the gateway and a view's state cell. The
// components only wire them to events; all sequencing lives here:
// - a fetch clears the banner, then replaces the collection or sets the banner
// - a create POSTs, then re-fetches the whole collection and closes the modal
// - nothing is written once the view's MountToken is disposed

use super::{ResourceGateway, ServiceKind};
use crate::web_app::error::ApiError;
use crate::web_app::model::{Client, NewCar, NewClient};
use crate::web_app::state::{CarBoard, ClientRoster, ListState, MountToken, StateCell};

fn apply<S>(token: &MountToken, cell: &impl StateCell<S>, f: impl FnOnce(&mut S)) -> bool {
    if !token.is_live() {
        tracing::debug!("View unmounted, dropping state update");
        return false;
    }
    cell.update_with(f)
}

/// GET the client list into `state` (and the shared roster)
pub async fn refresh_clients<G, S>(
    gateway: &G,
    state: &S,
    roster: &ClientRoster,
    token: &MountToken,
) where
    G: ResourceGateway + ?Sized,
    S: StateCell<ListState<Client>>,
{
    apply(token, state, |s: &mut ListState<Client>| s.begin_fetch());

    match gateway.list_clients().await {
        Ok(clients) => {
            tracing::info!("Fetched {} clients", clients.len());
            roster.store(clients.clone());
            apply(token, state, |s: &mut ListState<Client>| s.replace_items(clients));
        }
        Err(e) => {
            tracing::error!("Error fetching clients: {}", e);
            let banner = ServiceKind::Clients.unreachable_banner(gateway.base_url(ServiceKind::Clients));
            apply(token, state, |s: &mut ListState<Client>| s.fail(banner));
        }
    }
}

/// First load of the client view; clears the loading flag whatever happens
pub async fn mount_clients<G, S>(gateway: &G, state: &S, roster: &ClientRoster, token: &MountToken)
where
    G: ResourceGateway + ?Sized,
    S: StateCell<ListState<Client>>,
{
    refresh_clients(gateway, state, roster, token).await;
    apply(token, state, |s: &mut ListState<Client>| s.finish_loading());
}

/// POST a new client; on success re-fetch the list and close the modal.
///
/// The error is returned to the form, which shows its own message.
pub async fn create_client<G, S>(
    gateway: &G,
    state: &S,
    roster: &ClientRoster,
    token: &MountToken,
    client: NewClient,
) -> Result<(), ApiError>
where
    G: ResourceGateway + ?Sized,
    S: StateCell<ListState<Client>>,
{
    if let Err(e) = gateway.create_client(&client).await {
        tracing::error!("Failed to add client '{}': {}", client.name, e);
        return Err(e);
    }
    tracing::info!("Added client '{}'", client.name);

    refresh_clients(gateway, state, roster, token).await;
    apply(token, state, |s: &mut ListState<Client>| s.close_modal());
    Ok(())
}

/// GET the car list into `board`
pub async fn refresh_cars<G, S>(gateway: &G, board: &S, token: &MountToken)
where
    G: ResourceGateway + ?Sized,
    S: StateCell<CarBoard>,
{
    apply(token, board, |b: &mut CarBoard| b.cars.begin_fetch());

    match gateway.list_cars().await {
        Ok(cars) => {
            tracing::info!("Fetched {} cars", cars.len());
            apply(token, board, |b: &mut CarBoard| b.cars.replace_items(cars));
        }
        Err(e) => {
            tracing::error!("Error fetching cars: {}", e);
            let banner = ServiceKind::Cars.unreachable_banner(gateway.base_url(ServiceKind::Cars));
            apply(token, board, |b: &mut CarBoard| b.cars.fail(banner));
        }
    }
}

/// Load the clients that own cars, through the roster.
///
/// A failure here only leaves owners unnamed; the banner belongs to the car
/// service.
pub async fn refresh_owners<G, S>(gateway: &G, board: &S, roster: &ClientRoster, token: &MountToken)
where
    G: ResourceGateway + ?Sized,
    S: StateCell<CarBoard>,
{
    match roster.load(gateway).await {
        Ok(owners) => {
            apply(token, board, |b: &mut CarBoard| b.owners = owners);
        }
        Err(e) => tracing::error!("Error fetching clients: {}", e),
    }
}

/// First load of the car view: cars and owners side by side, then clear loading
pub async fn mount_cars<G, S>(gateway: &G, board: &S, roster: &ClientRoster, token: &MountToken)
where
    G: ResourceGateway + ?Sized,
    S: StateCell<CarBoard>,
{
    futures::join!(
        refresh_cars(gateway, board, token),
        refresh_owners(gateway, board, roster, token),
    );
    apply(token, board, |b: &mut CarBoard| b.cars.finish_loading());
}

/// POST a new car; on success re-fetch the car list and close the modal
pub async fn create_car<G, S>(
    gateway: &G,
    board: &S,
    token: &MountToken,
    car: NewCar,
) -> Result<(), ApiError>
where
    G: ResourceGateway + ?Sized,
    S: StateCell<CarBoard>,
{
    if let Err(e) = gateway.create_car(&car).await {
        tracing::error!("Failed to add car '{}': {}", car.matricule, e);
        return Err(e);
    }
    tracing::info!("Added car '{}'", car.matricule);

    refresh_cars(gateway, board, token).await;
    apply(token, board, |b: &mut CarBoard| b.cars.close_modal());
    Ok(())
}

/// Open the Add Car modal with owners re-synced from the roster cache.
///
/// No request is made; clients added in the client view since the last
/// car fetch show up in the owner list.
pub fn open_car_form<S: StateCell<CarBoard>>(board: &S, roster: &ClientRoster) {
    let cached = roster.cached();
    board.update_with(|b| {
        if let Some(owners) = cached {
            b.owners = owners;
        }
        b.cars.open_modal();
    });
}
