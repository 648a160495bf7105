//! Integration tests for infrastructure crate
//!
//! Runs the trip calculator end to end through the ORS adapter against a
//! mocked OpenRouteService.

use std::sync::Arc;

use application::error::ApplicationError;
use application::services::TripCalculator;
use infrastructure::{AppConfig, OrsDistanceAdapter};
use integration_ors::OrsConfig;
use rust_decimal_macros::dec;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn calculator_for(server: &MockServer) -> TripCalculator {
    let config = AppConfig {
        ors: OrsConfig::for_testing().with_base_url(server.uri()),
    };
    let adapter = OrsDistanceAdapter::from_config(&config.ors).unwrap();
    TripCalculator::new(Arc::new(adapter))
}

async fn mount_city(server: &MockServer, city: &str, lon: &str, lat: &str) {
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("text", city))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"{{"features":[{{"geometry":{{"type":"Point","coordinates":[{lon},{lat}]}}}}]}}"#
        )))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn computes_hamburg_to_berlin_end_to_end() {
    let server = MockServer::start().await;
    mount_city(&server, "Hamburg", "10.000654", "53.550341").await;
    mount_city(&server, "Berlin", "13.404954", "52.520008").await;

    Mock::given(method("POST"))
        .and(path("/v2/matrix/driving-car"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"distances":[[0.0,289876.4],[289912.7,0.0]]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mass = calculator_for(&server)
        .compute_mass("Hamburg", "Berlin", "diesel-car-medium")
        .await
        .unwrap();

    assert_eq!(mass.kilograms(), dec!(49.5688644));
    assert_eq!(mass.to_string(), "49.6");
}

#[tokio::test]
async fn identical_cities_never_reach_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mass = calculator_for(&server)
        .compute_mass("Berlin", "Berlin", "petrol-car-large")
        .await
        .unwrap();

    assert_eq!(mass.to_string(), "0.0");
}

#[tokio::test]
async fn geocoding_failure_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = calculator_for(&server)
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
async fn malformed_matrix_surfaces_as_resolution_error() {
    let server = MockServer::start().await;
    mount_city(&server, "Hamburg", "10.000654", "53.550341").await;
    mount_city(&server, "Berlin", "13.404954", "52.520008").await;

    Mock::given(method("POST"))
        .and(path("/v2/matrix/driving-car"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"distances":null}"#))
        .mount(&server)
        .await;

    let err = calculator_for(&server)
        .compute("Hamburg", "Berlin", "bus-default")
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Resolution(_)));
    assert_eq!(
        err.to_string(),
        "Could not fetch distance between \"Hamburg\" and \"Berlin\": unexpected response."
    );
}
