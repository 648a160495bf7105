//! Wire types for the ORS geocoding and matrix endpoints
//!
//! Responses are read as untyped JSON so that every missing or mistyped
//! field maps to a resolution failure instead of a generic parse error.
//! Numbers are converted to `Decimal` from their JSON text, never via `f64`.

use domain::value_objects::Coordinates;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Number, Value};

/// JSON pointer to the first geocoding candidate's `[lon, lat]` pair
const FIRST_FEATURE_COORDINATES: &str = "/features/0/geometry/coordinates";

/// JSON pointer to the start -> end cell of a two-location matrix
const START_TO_END_DISTANCE: &str = "/distances/0/1";

/// Body of a `POST /v2/matrix/{profile}` request
#[derive(Debug, Serialize)]
pub(crate) struct MatrixRequest {
    locations: [[Number; 2]; 2],
    metrics: [&'static str; 1],
}

impl MatrixRequest {
    /// Distance-only matrix between `start` and `end`
    pub(crate) fn distance(start: &Coordinates, end: &Coordinates) -> Result<Self, serde_json::Error> {
        Ok(Self {
            locations: [lon_lat_numbers(start)?, lon_lat_numbers(end)?],
            metrics: ["distance"],
        })
    }
}

fn lon_lat_numbers(coordinates: &Coordinates) -> Result<[Number; 2], serde_json::Error> {
    let [lon, lat] = coordinates.lon_lat();
    Ok([decimal_to_number(lon)?, decimal_to_number(lat)?])
}

/// Write a decimal as a JSON number with exactly the same digits
fn decimal_to_number(value: Decimal) -> Result<Number, serde_json::Error> {
    serde_json::from_str(&value.to_string())
}

/// Read a JSON number as an exact decimal
///
/// `None` for non-numbers and for numbers `Decimal` cannot hold without
/// rounding (more than 28 fractional digits, or a mantissa beyond 96 bits).
pub(crate) fn number_to_decimal(value: &Value) -> Option<Decimal> {
    let Value::Number(number) = value else {
        return None;
    };
    let text = number.to_string();
    if text.contains(['e', 'E']) {
        return Decimal::from_scientific(&text).ok();
    }
    Decimal::from_str_exact(&text).ok()
}

/// `[lon, lat]` of the first geocoding candidate
///
/// `None` when there is no candidate or the pair is not exactly two numbers.
pub(crate) fn first_feature_coordinates(body: &Value) -> Option<Coordinates> {
    let pair = body.pointer(FIRST_FEATURE_COORDINATES)?.as_array()?;
    let [lon, lat] = pair.as_slice() else {
        return None;
    };
    Some(Coordinates::new(number_to_decimal(lon)?, number_to_decimal(lat)?))
}

/// Metres from start to end in a two-location distance matrix
pub(crate) fn start_to_end_meters(body: &Value) -> Option<Decimal> {
    number_to_decimal(body.pointer(START_TO_END_DISTANCE)?)
}

/// Metres to kilometres by moving the decimal point three places left
///
/// Values with more than 25 fractional digits are divided instead, which
/// rounds at the 28th fractional place.
pub(crate) fn meters_to_km(meters: Decimal) -> Option<Decimal> {
    let mut km = meters;
    match km.set_scale(meters.scale() + 3) {
        Ok(()) => Some(km),
        Err(_) => meters.checked_div(Decimal::ONE_THOUSAND),
    }
}
