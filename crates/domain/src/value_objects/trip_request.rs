//! Trip request value object

use crate::errors::DomainError;
use crate::value_objects::TransportMethod;

/// A validated point-to-point trip
///
/// City names are opaque geocoder input; they are only checked for being
/// present. The transport method key is resolved against the emission
/// factor table on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    start_city: String,
    end_city: String,
    transport_method: TransportMethod,
}

impl TripRequest {
    /// Build a trip request from raw user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if a field is blank and
    /// `DomainError::UnknownTransportMethod` if the key is not in the table.
    pub fn new(
        start_city: impl Into<String>,
        end_city: impl Into<String>,
        transport_method_key: &str,
    ) -> Result<Self, DomainError> {
        let start_city = start_city.into();
        let end_city = end_city.into();

        if start_city.trim().is_empty() {
            return Err(DomainError::blank_field("start city"));
        }
        if end_city.trim().is_empty() {
            return Err(DomainError::blank_field("end city"));
        }
        if transport_method_key.trim().is_empty() {
            return Err(DomainError::blank_field("transportation method"));
        }

        Ok(Self {
            start_city,
            end_city,
            transport_method: TransportMethod::from_key(transport_method_key)?,
        })
    }

    /// Name of the departure locality
    #[must_use]
    pub fn start_city(&self) -> &str {
        &self.start_city
    }

    /// Name of the arrival locality
    #[must_use]
    pub fn end_city(&self) -> &str {
        &self.end_city
    }

    /// The resolved transport method
    #[must_use]
    pub const fn transport_method(&self) -> TransportMethod {
        self.transport_method
    }

    /// True when start and end are the same string, byte for byte
    #[must_use]
    pub fn is_round_trip_to_self(&self) -> bool {
        self.start_city == self.end_city
    }
}
