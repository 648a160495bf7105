//! Value Objects - Immutable, identity-less domain primitives

mod co2_mass;
mod coordinates;
mod transport_method;
mod trip_request;

pub use co2_mass::{Co2Mass, round_half_up};
pub use coordinates::Coordinates;
pub use transport_method::TransportMethod;
pub use trip_request::TripRequest;
