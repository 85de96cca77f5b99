// web_app/api/gateway.rs - reqwest implementation of ResourceGateway
//
// In the browser reqwest sits on top of the fetch API; natively (tests, SSR)
// it uses hyper. Any 2xx counts as success; everything else is an ApiError.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ResourceGateway, ServiceKind, CARS_PATH, CAR_PATH, CLIENTS_PATH, CLIENT_PATH};
use crate::web_app::config::ServiceConfig;
use crate::web_app::error::ApiError;
use crate::web_app::model::{Car, Client, NewCar, NewClient};

/// Gateway talking plain HTTP/JSON to both services
#[derive(Clone, Debug)]
pub struct HttpGateway {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl HttpGateway {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, service: ServiceKind, path: &str) -> String {
        format!("{}{}", self.base_url(service), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::decode(url, e))
    }

    async fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<(), ApiError> {
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[async_trait(?Send)]
impl ResourceGateway for HttpGateway {
    fn base_url(&self, service: ServiceKind) -> &str {
        match service {
            ServiceKind::Clients => &self.config.client_service_url,
            ServiceKind::Cars => &self.config.car_service_url,
        }
    }

    async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.get_json(&self.url(ServiceKind::Clients, CLIENTS_PATH)).await
    }

    async fn create_client(&self, client: &NewClient) -> Result<(), ApiError> {
        self.post_json(&self.url(ServiceKind::Clients, CLIENT_PATH), client)
            .await
    }

    async fn list_cars(&self) -> Result<Vec<Car>, ApiError> {
        self.get_json(&self.url(ServiceKind::Cars, CARS_PATH)).await
    }

    async fn create_car(&self, car: &NewCar) -> Result<(), ApiError> {
        self.post_json(&self.url(ServiceKind::Cars, CAR_PATH), car).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let gateway = HttpGateway::new(
            ServiceConfig::new("http://localhost:8888", "http://localhost:8082/").unwrap(),
        );
        assert_eq!(
            gateway.url(ServiceKind::Clients, CLIENTS_PATH),
            "http://localhost:8888/CLIENT-SERVICE/clients"
        );
        assert_eq!(
            gateway.url(ServiceKind::Cars, CAR_PATH),
            "http://localhost:8082/voiture"
        );
        assert_eq!(gateway.base_url(ServiceKind::Cars), "http://localhost:8082");
    }
}
