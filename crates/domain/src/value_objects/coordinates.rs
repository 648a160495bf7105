//! Geographic coordinates value object

use rust_decimal::Decimal;
use std::fmt;

/// A longitude/latitude pair in exact decimal degrees
///
/// Values are kept exactly as the geocoder reported them so that they can be
/// sent back to the routing provider without float round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    longitude: Decimal,
    latitude: Decimal,
}

impl Coordinates {
    /// Create coordinates from longitude and latitude (in that order)
    #[must_use]
    pub const fn new(longitude: Decimal, latitude: Decimal) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> Decimal {
        self.longitude
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> Decimal {
        self.latitude
    }

    /// Longitude-first pair, the order routing APIs expect
    #[must_use]
    pub const fn lon_lat(&self) -> [Decimal; 2] {
        [self.longitude, self.latitude]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.longitude, self.latitude)
    }
}
