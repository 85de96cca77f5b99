// web_app/config.rs - Resource service locations
//
// The browser bundle has no runtime environment, so the service URLs are
// baked in at build time (CLIENT_SERVICE_URL / CAR_SERVICE_URL) and fall back
// to the local development ports.

use crate::web_app::error::ConfigError;

pub const DEFAULT_CLIENT_SERVICE_URL: &str = "http://localhost:8888";
pub const DEFAULT_CAR_SERVICE_URL: &str = "http://localhost:8082";

/// Base URLs of the two resource services
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Host A: owns clients, routes under /CLIENT-SERVICE
    pub client_service_url: String,
    /// Host B: owns cars
    pub car_service_url: String,
}

impl ServiceConfig {
    /// Build a config from explicit base URLs.
    ///
    /// Both values must parse as absolute URLs; a trailing slash is dropped so
    /// endpoint paths can be appended verbatim.
    pub fn new(
        client_service_url: impl Into<String>,
        car_service_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            client_service_url: normalize("client service", client_service_url.into())?,
            car_service_url: normalize("car service", car_service_url.into())?,
        })
    }

    /// Config baked into this build
    pub fn from_build_env() -> Self {
        let client = option_env!("CLIENT_SERVICE_URL").unwrap_or(DEFAULT_CLIENT_SERVICE_URL);
        let car = option_env!("CAR_SERVICE_URL").unwrap_or(DEFAULT_CAR_SERVICE_URL);

        Self::new(client, car).unwrap_or_else(|e| {
            tracing::warn!("Ignoring build-time service URLs: {}", e);
            Self::local()
        })
    }

    fn local() -> Self {
        Self {
            client_service_url: DEFAULT_CLIENT_SERVICE_URL.to_string(),
            car_service_url: DEFAULT_CAR_SERVICE_URL.to_string(),
        }
    }
}

fn normalize(service: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/').to_string();

    match reqwest::Url::parse(&trimmed) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(trimmed),
        Ok(url) => Err(ConfigError::InvalidUrl {
            service,
            value,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => Err(ConfigError::InvalidUrl {
            service,
            value,
            reason: e.to_string(),
        }),
    }
}
