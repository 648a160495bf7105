//! OpenRouteService HTTP client
//!
//! Two remote operations: locality geocoding (`GET /geocode/search`) and a
//! two-location driving distance matrix (`POST /v2/matrix/driving-car`).
//! Neither operation retries.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinates;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::OrsConfig;
use crate::error::OrsError;
use crate::models::{
    MatrixRequest, first_feature_coordinates, meters_to_km, start_to_end_meters,
};

/// Trait for geocoding + road distance clients
#[async_trait]
pub trait DistanceClient: Send + Sync {
    /// Resolve a locality name to the coordinates of its best match
    async fn fetch_city_coordinates(&self, city: &str) -> Result<Coordinates, OrsError>;

    /// Driving distance in kilometres from `start` to `end`
    ///
    /// The city names are only used in error messages.
    async fn fetch_distance_between_localities(
        &self,
        start: Coordinates,
        end: Coordinates,
        start_city: &str,
        end_city: &str,
    ) -> Result<Decimal, OrsError>;
}

/// OpenRouteService client
pub struct OpenRouteServiceClient {
    client: Client,
    config: OrsConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for OpenRouteServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouteServiceClient")
            .field("config", &self.config)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl OpenRouteServiceClient {
    /// Create a new OpenRouteService client
    ///
    /// # Errors
    ///
    /// Returns `OrsError::Configuration` if the API token is missing or
    /// blank, the configuration is invalid, or the HTTP client cannot be
    /// initialized. No request is made.
    pub fn new(config: &OrsConfig) -> Result<Self, OrsError> {
        let api_key = config
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .cloned()
            .ok_or_else(|| {
                OrsError::Configuration("Missing ORS token (env ORS_TOKEN).".to_string())
            })?;

        config.validate().map_err(OrsError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| OrsError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Send a request and read the whole body
    ///
    /// Status is checked before the body is touched. The response is owned
    /// by this call and released on every return path.
    async fn execute(&self, request: RequestBuilder, subject: &str) -> Result<Vec<u8>, OrsError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                OrsError::io(
                    subject,
                    format!("request timed out after {} seconds", self.config.timeout_secs),
                )
            } else {
                OrsError::io(subject, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrsError::http_status(subject, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| OrsError::io(subject, format!("failed to read response body: {e}")))?;

        Ok(body.to_vec())
    }

    /// Parse a non-empty JSON body
    fn parse_body(body: &[u8], subject: &str) -> Result<Value, OrsError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(OrsError::Resolution(format!("{subject}: empty response body.")));
        }
        serde_json::from_slice(body)
            .map_err(|e| OrsError::Resolution(format!("{subject}: malformed response body ({e}).")))
    }
}

fn coordinates_subject(city: &str) -> String {
    format!("Could not fetch coordinates for city \"{city}\"")
}

fn distance_subject(start_city: &str, end_city: &str) -> String {
    format!("Could not fetch distance between \"{start_city}\" and \"{end_city}\"")
}

#[async_trait]
impl DistanceClient for OpenRouteServiceClient {
    #[instrument(skip(self))]
    async fn fetch_city_coordinates(&self, city: &str) -> Result<Coordinates, OrsError> {
        let subject = coordinates_subject(city);
        let url = format!("{}/geocode/search", self.config.trimmed_base_url());

        let params = [
            ("api_key", self.api_key.expose_secret()),
            ("text", city),
            ("layers", "locality"),
        ];

        debug!("Geocoding locality");

        let body = self
            .execute(self.client.get(&url).query(&params), &subject)
            .await?;
        let json = Self::parse_body(&body, &subject)?;

        let coordinates = first_feature_coordinates(&json)
            .ok_or_else(|| OrsError::Resolution(format!("{subject}.")))?;

        debug!(%coordinates, "Geocoded locality");
        Ok(coordinates)
    }

    #[instrument(skip(self, start, end), fields(start = %start, end = %end))]
    async fn fetch_distance_between_localities(
        &self,
        start: Coordinates,
        end: Coordinates,
        start_city: &str,
        end_city: &str,
    ) -> Result<Decimal, OrsError> {
        let subject = distance_subject(start_city, end_city);
        let url = format!("{}/v2/matrix/driving-car", self.config.trimmed_base_url());

        let payload = MatrixRequest::distance(&start, &end)
            .map_err(|e| OrsError::Resolution(format!("{subject}: invalid coordinates ({e}).")))?;

        debug!("Requesting driving distance matrix");

        let request = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.api_key.expose_secret())
            .json(&payload);
        let body = self.execute(request, &subject).await?;
        let json = Self::parse_body(&body, &subject)?;

        let unexpected = || OrsError::Resolution(format!("{subject}: unexpected response."));
        let meters = start_to_end_meters(&json).ok_or_else(unexpected)?;
        if meters.is_sign_negative() && !meters.is_zero() {
            return Err(unexpected());
        }
        let km = meters_to_km(meters).ok_or_else(unexpected)?;

        debug!(%km, "Driving distance resolved");
        Ok(km)
    }
}
