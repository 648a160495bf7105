//! Trip emission calculator
//!
//! Turns two locality names and a transport method key into an exact mass of
//! CO2-equivalent: geocode both ends, fetch the road distance, apply the
//! method's grams-per-kilometre factor.

use std::sync::Arc;

use domain::value_objects::{Co2Mass, TripRequest};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::DistancePort;

/// Service computing the CO2e footprint of a single trip
pub struct TripCalculator {
    distance: Arc<dyn DistancePort>,
}

impl std::fmt::Debug for TripCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripCalculator")
            .field("distance", &"<DistancePort>")
            .finish()
    }
}

impl TripCalculator {
    /// Create a calculator backed by the given distance service
    #[must_use]
    pub fn new(distance: Arc<dyn DistancePort>) -> Self {
        Self { distance }
    }

    /// Exact CO2e kilograms for travelling from `start_city` to `end_city`
    ///
    /// The result is not rounded. Identical city names short-circuit to zero
    /// without any remote call. Distance service failures are returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Domain` for blank input or an unknown method key
    /// - `ApplicationError::Transport` / `ApplicationError::Resolution` from
    ///   the distance service
    #[instrument(skip(self))]
    pub async fn compute(
        &self,
        start_city: &str,
        end_city: &str,
        transport_method_key: &str,
    ) -> Result<Decimal, ApplicationError> {
        let trip = TripRequest::new(start_city, end_city, transport_method_key)?;

        if trip.is_round_trip_to_self() {
            debug!("Start and end are identical, no distance to travel");
            return Ok(Decimal::ZERO);
        }

        let start = self.distance.fetch_city_coordinates(trip.start_city()).await?;
        let end = self.distance.fetch_city_coordinates(trip.end_city()).await?;

        let distance_km = self
            .distance
            .fetch_distance_between_localities(start, end, trip.start_city(), trip.end_city())
            .await?;

        let method = trip.transport_method();
        let kilograms = method.emissions_kg(distance_km);

        debug!(
            %distance_km,
            grams_per_km = method.grams_per_km(),
            %kilograms,
            "Computed trip emissions"
        );
        Ok(kilograms)
    }

    /// Like [`compute`](Self::compute), wrapped for presentation
    pub async fn compute_mass(
        &self,
        start_city: &str,
        end_city: &str,
        transport_method_key: &str,
    ) -> Result<Co2Mass, ApplicationError> {
        let kilograms = self
            .compute(start_city, end_city, transport_method_key)
            .await?;
        Ok(Co2Mass::from_kg(kilograms)?)
    }
}

#[cfg(test)]
mod tests {
    use domain::DomainError;
    use domain::value_objects::Coordinates;
    use mockall::Sequence;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ports::MockDistancePort;

    fn hamburg() -> Coordinates {
        Coordinates::new(dec!(10.000654), dec!(53.550341))
    }

    fn berlin() -> Coordinates {
        Coordinates::new(dec!(13.404954), dec!(52.520008))
    }

    fn geocoding_mock(distance_km: Decimal) -> MockDistancePort {
        let mut mock = MockDistancePort::new();
        mock.expect_fetch_city_coordinates()
            .withf(|city| city == "Hamburg")
            .times(1)
            .returning(|_| Ok(hamburg()));
        mock.expect_fetch_city_coordinates()
            .withf(|city| city == "Berlin")
            .times(1)
            .returning(|_| Ok(berlin()));
        mock.expect_fetch_distance_between_localities()
            .withf(|start, end, start_city, end_city| {
                *start == hamburg()
                    && *end == berlin()
                    && start_city == "Hamburg"
                    && end_city == "Berlin"
            })
            .times(1)
            .returning(move |_, _, _, _| Ok(distance_km));
        mock
    }

    #[tokio::test]
    async fn computes_hamburg_to_berlin() {
        let calculator = TripCalculator::new(Arc::new(geocoding_mock(dec!(289.8764))));

        let kilograms = calculator
            .compute("Hamburg", "Berlin", "diesel-car-medium")
            .await
            .unwrap();

        assert_eq!(kilograms, dec!(49.5688644));
    }

    #[tokio::test]
    async fn result_is_not_rounded() {
        let calculator = TripCalculator::new(Arc::new(geocoding_mock(dec!(150.5))));

        let kilograms = calculator
            .compute("Hamburg", "Berlin", "DIESEL-CAR-MEDIUM")
            .await
            .unwrap();

        assert_eq!(kilograms, dec!(25.7355));
        assert_eq!(kilograms.to_string(), "25.7355");
    }

    #[tokio::test]
    async fn compute_mass_rounds_for_display() {
        let calculator = TripCalculator::new(Arc::new(geocoding_mock(dec!(289.8764))));

        let mass = calculator
            .compute_mass("Hamburg", "Berlin", "diesel-car-medium")
            .await
            .unwrap();

        assert_eq!(mass.kilograms(), dec!(49.5688644));
        assert_eq!(mass.to_string(), "49.6");
    }

    #[tokio::test]
    async fn geocodes_start_before_end() {
        let mut seq = Sequence::new();
        let mut mock = MockDistancePort::new();
        mock.expect_fetch_city_coordinates()
            .withf(|city| city == "Hamburg")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(hamburg()));
        mock.expect_fetch_city_coordinates()
            .withf(|city| city == "Berlin")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(berlin()));
        mock.expect_fetch_distance_between_localities()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(dec!(10)));

        let calculator = TripCalculator::new(Arc::new(mock));
        let kilograms = calculator
            .compute("Hamburg", "Berlin", "train-default")
            .await
            .unwrap();

        assert_eq!(kilograms, dec!(0.06));
    }

    #[tokio::test]
    async fn identical_cities_make_no_calls() {
        let mut mock = MockDistancePort::new();
        mock.expect_fetch_city_coordinates().times(0);
        mock.expect_fetch_distance_between_localities().times(0);

        let calculator = TripCalculator::new(Arc::new(mock));
        let kilograms = calculator
            .compute("Berlin", "Berlin", "petrol-car-large")
            .await
            .unwrap();

        assert_eq!(kilograms, Decimal::ZERO);
    }

    #[tokio::test]
    async fn unknown_method_fails_before_any_call() {
        let mut mock = MockDistancePort::new();
        mock.expect_fetch_city_coordinates().times(0);
        mock.expect_fetch_distance_between_localities().times(0);

        let calculator = TripCalculator::new(Arc::new(mock));
        let err = calculator
            .compute("Hamburg", "Berlin", "rocket-scooter")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::UnknownTransportMethod(ref key)) if key == "rocket-scooter"
        ));
    }

    #[tokio::test]
    async fn blank_city_is_rejected() {
        let mut mock = MockDistancePort::new();
        mock.expect_fetch_city_coordinates().times(0);

        let calculator = TripCalculator::new(Arc::new(mock));
        let err = calculator
            .compute("", "Berlin", "bus-default")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn geocoding_transport_failure_propagates_unchanged() {
        let mut mock = MockDistancePort::new();
        mock.expect_fetch_city_coordinates()
            .times(1)
            .returning(|city| {
                Err(ApplicationError::Transport {
                    message: format!("Could not fetch coordinates for city \"{city}\": HTTP 404"),
                    status: Some(404),
                })
            });
        mock.expect_fetch_distance_between_localities().times(0);

        let calculator = TripCalculator::new(Arc::new(mock));
        let err = calculator
            .compute("Hamburg", "Berlin", "bus-default")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Transport { status: Some(404), .. }));
        assert_eq!(
            err.to_string(),
            "Could not fetch coordinates for city \"Hamburg\": HTTP 404"
        );
    }

    #[tokio::test]
    async fn end_city_resolution_failure_propagates_unchanged() {
        let mut mock = MockDistancePort::new();
        mock.expect_fetch_city_coordinates()
            .withf(|city| city == "Hamburg")
            .returning(|_| Ok(hamburg()));
        mock.expect_fetch_city_coordinates()
            .withf(|city| city == "Atlantis")
            .returning(|_| {
                Err(ApplicationError::Resolution(
                    "Could not fetch coordinates for city \"Atlantis\".".to_string(),
                ))
            });
        mock.expect_fetch_distance_between_localities().times(0);

        let calculator = TripCalculator::new(Arc::new(mock));
        let err = calculator
            .compute("Hamburg", "Atlantis", "bus-default")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Resolution(ref m) if m.contains("Atlantis")));
    }

    #[tokio::test]
    async fn matrix_failure_propagates_unchanged() {
        let mut mock = MockDistancePort::new();
        mock.expect_fetch_city_coordinates()
            .times(2)
            .returning(|_| Ok(hamburg()));
        mock.expect_fetch_distance_between_localities()
            .times(1)
            .returning(|_, _, start_city, end_city| {
                Err(ApplicationError::Transport {
                    message: format!(
                        "Could not fetch distance between \"{start_city}\" and \"{end_city}\": HTTP 500"
                    ),
                    status: Some(500),
                })
            });

        let calculator = TripCalculator::new(Arc::new(mock));
        let err = calculator
            .compute("Hamburg", "Berlin", "bus-default")
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Hamburg"));
        assert!(message.contains("Berlin"));
        assert!(message.contains("500"));
    }
}
