//! Domain layer for the CO2e trip calculator
//!
//! Contains the emission factor table, coordinates, trip requests and the
//! CO2e mass value object. This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
