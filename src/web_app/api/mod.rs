// web_app/api/mod.rs - Access to the two resource services
//
// - gateway.rs: HTTP implementation of ResourceGateway (reqwest)
// - actions.rs: fetch / create / refresh flows the list views run

pub mod actions;
pub mod gateway;

pub use gateway::HttpGateway;

use async_trait::async_trait;

use crate::web_app::error::ApiError;
use crate::web_app::model::{Car, Client, NewCar, NewClient};

pub const CLIENTS_PATH: &str = "/CLIENT-SERVICE/clients";
pub const CLIENT_PATH: &str = "/CLIENT-SERVICE/client";
pub const CARS_PATH: &str = "/voitures";
pub const CAR_PATH: &str = "/voiture";

/// The independently deployed backends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    Clients,
    Cars,
}

impl ServiceKind {
    /// Banner shown by a list view when its fetch fails
    pub fn unreachable_banner(self, base_url: &str) -> String {
        let name = match self {
            ServiceKind::Clients => "client",
            ServiceKind::Cars => "car",
        };
        format!(
            "Unable to connect to the {} service. Please ensure the service is running at {}",
            name, base_url
        )
    }
}

/// Operations the console performs against the resource services.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait ResourceGateway {
    /// Base URL of `service`, as shown to the user in error banners
    fn base_url(&self, service: ServiceKind) -> &str;

    async fn list_clients(&self) -> Result<Vec<Client>, ApiError>;

    async fn create_client(&self, client: &NewClient) -> Result<(), ApiError>;

    async fn list_cars(&self) -> Result<Vec<Car>, ApiError>;

    async fn create_car(&self, car: &NewCar) -> Result<(), ApiError>;
}
