//! Ports - Interfaces for external dependencies

mod distance_port;

pub use distance_port::DistancePort;
#[cfg(test)]
pub use distance_port::MockDistancePort;
