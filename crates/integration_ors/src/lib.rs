//! OpenRouteService integration
//!
//! Resolves locality names to coordinates via the ORS geocoding API and
//! fetches road distances via the ORS `driving-car` matrix API
//! (<https://openrouteservice.org>).
//!
//! # Architecture
//!
//! [`DistanceClient`] defines the two remote operations, implemented by
//! [`OpenRouteServiceClient`]. Every call checks the HTTP status first and
//! then validates the payload shape, so callers can tell an unreachable
//! service ([`OrsError::Transport`]) from one that answered with something
//! unusable ([`OrsError::Resolution`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_ors::{DistanceClient, OpenRouteServiceClient, OrsConfig};
//!
//! let config = OrsConfig::default().with_api_key("my-token");
//! let client = OpenRouteServiceClient::new(&config)?;
//!
//! let hamburg = client.fetch_city_coordinates("Hamburg").await?;
//! let berlin = client.fetch_city_coordinates("Berlin").await?;
//! let km = client
//!     .fetch_distance_between_localities(hamburg, berlin, "Hamburg", "Berlin")
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DistanceClient, OpenRouteServiceClient};
pub use config::OrsConfig;
pub use error::OrsError;
