//! Transport method value object
//!
//! The emission factor table: every supported way of travelling together
//! with its CO2-equivalent intensity in grams per kilometre.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::TransportMethod;
//!
//! let method = TransportMethod::from_key("DIESEL-CAR-MEDIUM").expect("known key");
//! assert_eq!(method, TransportMethod::DieselCarMedium);
//! assert_eq!(method.grams_per_km(), 171);
//!
//! assert!(TransportMethod::from_key("rocket-scooter").is_err());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Supported transport methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMethod {
    DieselCarSmall,
    PetrolCarSmall,
    PluginHybridCarSmall,
    ElectricCarSmall,

    DieselCarMedium,
    PetrolCarMedium,
    PluginHybridCarMedium,
    ElectricCarMedium,

    DieselCarLarge,
    PetrolCarLarge,
    PluginHybridCarLarge,
    ElectricCarLarge,

    BusDefault,
    TrainDefault,
}

impl TransportMethod {
    /// All transport methods, in table order
    pub const ALL: [Self; 14] = [
        Self::DieselCarSmall,
        Self::PetrolCarSmall,
        Self::PluginHybridCarSmall,
        Self::ElectricCarSmall,
        Self::DieselCarMedium,
        Self::PetrolCarMedium,
        Self::PluginHybridCarMedium,
        Self::ElectricCarMedium,
        Self::DieselCarLarge,
        Self::PetrolCarLarge,
        Self::PluginHybridCarLarge,
        Self::ElectricCarLarge,
        Self::BusDefault,
        Self::TrainDefault,
    ];

    /// The lowercase key used on the command line
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::DieselCarSmall => "diesel-car-small",
            Self::PetrolCarSmall => "petrol-car-small",
            Self::PluginHybridCarSmall => "plugin-hybrid-car-small",
            Self::ElectricCarSmall => "electric-car-small",
            Self::DieselCarMedium => "diesel-car-medium",
            Self::PetrolCarMedium => "petrol-car-medium",
            Self::PluginHybridCarMedium => "plugin-hybrid-car-medium",
            Self::ElectricCarMedium => "electric-car-medium",
            Self::DieselCarLarge => "diesel-car-large",
            Self::PetrolCarLarge => "petrol-car-large",
            Self::PluginHybridCarLarge => "plugin-hybrid-car-large",
            Self::ElectricCarLarge => "electric-car-large",
            Self::BusDefault => "bus-default",
            Self::TrainDefault => "train-default",
        }
    }

    /// Emission intensity in grams CO2e per kilometre
    #[must_use]
    pub const fn grams_per_km(&self) -> u32 {
        match self {
            Self::DieselCarSmall => 142,
            Self::PetrolCarSmall => 154,
            Self::PluginHybridCarSmall => 73,
            Self::ElectricCarSmall => 50,
            Self::DieselCarMedium => 171,
            Self::PetrolCarMedium => 192,
            Self::PluginHybridCarMedium => 110,
            Self::ElectricCarMedium => 58,
            Self::DieselCarLarge => 209,
            Self::PetrolCarLarge => 282,
            Self::PluginHybridCarLarge => 126,
            Self::ElectricCarLarge => 73,
            Self::BusDefault => 27,
            Self::TrainDefault => 6,
        }
    }

    /// Exact CO2e kilograms emitted over `distance_km`
    ///
    /// `grams_per_km * distance_km / 1000`, where the division is a
    /// three-digit decimal shift and never rounds.
    #[must_use]
    pub fn emissions_kg(&self, distance_km: Decimal) -> Decimal {
        Decimal::from(self.grams_per_km()) * distance_km * Decimal::new(1, 3)
    }

    /// Look up a transport method by key, ignoring ASCII case
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTransportMethod` if no entry matches.
    pub fn from_key(key: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|method| method.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| DomainError::UnknownTransportMethod(key.to_string()))
    }
}

impl fmt::Display for TransportMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TransportMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl Serialize for TransportMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for TransportMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Self::from_key(&key).map_err(serde::de::Error::custom)
    }
}
