//! Distance adapter - Implements DistancePort using integration_ors

use application::error::ApplicationError;
use application::ports::DistancePort;
use async_trait::async_trait;
use domain::value_objects::Coordinates;
use integration_ors::{DistanceClient, OpenRouteServiceClient, OrsConfig, OrsError};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Adapter for OpenRouteService geocoding and distance matrix
pub struct OrsDistanceAdapter {
    client: OpenRouteServiceClient,
}

impl std::fmt::Debug for OrsDistanceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsDistanceAdapter")
            .field("client", &self.client)
            .finish()
    }
}

impl OrsDistanceAdapter {
    /// Create a new adapter around an existing client
    #[must_use]
    pub const fn new(client: OpenRouteServiceClient) -> Self {
        Self { client }
    }

    /// Build the client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the token is missing or
    /// the configuration is invalid.
    pub fn from_config(config: &OrsConfig) -> Result<Self, ApplicationError> {
        let client = OpenRouteServiceClient::new(config).map_err(map_ors_error)?;
        Ok(Self::new(client))
    }
}

/// Map integration errors one-to-one, keeping message and status
fn map_ors_error(err: OrsError) -> ApplicationError {
    match err {
        OrsError::Configuration(message) => ApplicationError::Configuration(message),
        OrsError::Transport { message, status } => ApplicationError::Transport { message, status },
        OrsError::Resolution(message) => ApplicationError::Resolution(message),
    }
}

#[async_trait]
impl DistancePort for OrsDistanceAdapter {
    #[instrument(skip(self))]
    async fn fetch_city_coordinates(&self, city: &str) -> Result<Coordinates, ApplicationError> {
        self.client
            .fetch_city_coordinates(city)
            .await
            .map_err(map_ors_error)
    }

    #[instrument(skip(self, start, end))]
    async fn fetch_distance_between_localities(
        &self,
        start: Coordinates,
        end: Coordinates,
        start_city: &str,
        end_city: &str,
    ) -> Result<Decimal, ApplicationError> {
        let km = self
            .client
            .fetch_distance_between_localities(start, end, start_city, end_city)
            .await
            .map_err(map_ors_error)?;

        debug!(%km, "Distance adapter resolved kilometres");
        Ok(km)
    }
}
