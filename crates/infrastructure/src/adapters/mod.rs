//! Adapters implementing application ports

mod ors_distance_adapter;

pub use ors_distance_adapter::OrsDistanceAdapter;
