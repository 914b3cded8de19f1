use serde::Serialize;

use crate::{condition::condition_name, error::WeatherError};

/// Latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Only finiteness is checked; range is left to the provider.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(WeatherError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// The two supported lookup modes.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coordinates(Coordinates),
}

impl WeatherQuery {
    /// Query by city name. Surrounding whitespace is trimmed and blank input
    /// is rejected before any request is built.
    pub fn city(name: &str) -> Result<Self, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherError::EmptyInput);
        }
        Ok(WeatherQuery::City(name.to_string()))
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        Coordinates::new(latitude, longitude).map(WeatherQuery::Coordinates)
    }

    /// Re-checks what the constructors enforce, for queries built from the
    /// variants directly.
    pub fn validate(&self) -> Result<(), WeatherError> {
        match self {
            WeatherQuery::City(name) if name.trim().is_empty() => Err(WeatherError::EmptyInput),
            WeatherQuery::City(_) => Ok(()),
            WeatherQuery::Coordinates(c) => Coordinates::new(c.latitude, c.longitude).map(|_| ()),
        }
    }
}

impl From<Coordinates> for WeatherQuery {
    fn from(value: Coordinates) -> Self {
        WeatherQuery::Coordinates(value)
    }
}

impl std::fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherQuery::City(name) => f.write_str(name),
            WeatherQuery::Coordinates(c) => write!(f, "{}, {}", c.latitude, c.longitude),
        }
    }
}

/// Current conditions for one place, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    condition_id: i64,
    city_name: String,
    temperature: f64,
}

impl WeatherReading {
    pub fn new(condition_id: i64, city_name: String, temperature: f64) -> Self {
        Self {
            condition_id,
            city_name,
            temperature,
        }
    }

    pub fn condition_id(&self) -> i64 {
        self.condition_id
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Temperature with exactly one fractional digit, e.g. `"21.3"`.
    pub fn temperature_string(&self) -> String {
        format!("{:.1}", self.temperature)
    }

    /// Icon key for the condition code.
    pub fn condition_name(&self) -> &'static str {
        condition_name(self.condition_id)
    }
}
