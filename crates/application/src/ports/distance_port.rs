//! Distance service port
//!
//! Defines what the trip calculator needs from a geocoding/routing provider.
//! Adapters in the infrastructure layer implement this port.

use async_trait::async_trait;
use domain::value_objects::Coordinates;
#[cfg(test)]
use mockall::automock;
use rust_decimal::Decimal;

use crate::error::ApplicationError;

/// Port for locality geocoding and road distances
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DistancePort: Send + Sync {
    /// Resolve a locality name to coordinates
    async fn fetch_city_coordinates(&self, city: &str) -> Result<Coordinates, ApplicationError>;

    /// Driving distance in kilometres between two resolved localities
    ///
    /// The city names are only used for error messages.
    async fn fetch_distance_between_localities(
        &self,
        start: Coordinates,
        end: Coordinates,
        start_city: &str,
        end_city: &str,
    ) -> Result<Decimal, ApplicationError>;
}
