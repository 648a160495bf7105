//! Application layer - Use cases and orchestration
//!
//! Defines the port the trip calculator needs from the outside world and the
//! calculator itself. Adapters in the infrastructure layer implement the port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
