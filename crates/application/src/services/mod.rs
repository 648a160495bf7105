//! Application services - Use case implementations

mod trip_calculator;

pub use trip_calculator::TripCalculator;
