//! Where "current location" lookups get their coordinates from.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Coordinates, WeatherError, WeatherProvider, WeatherQuery, WeatherReading};

/// Delivers a single position fix, or fails with [`WeatherError::Location`].
#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    async fn current_location(&self) -> Result<Coordinates, WeatherError>;
}

/// A position known up front, e.g. passed on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(Coordinates);

impl FixedLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        Coordinates::new(latitude, longitude).map(Self)
    }
}

#[async_trait]
impl LocationSource for FixedLocation {
    async fn current_location(&self) -> Result<Coordinates, WeatherError> {
        Ok(self.0)
    }
}

/// Current weather at whatever position `location` reports.
pub async fn current_weather_here(
    provider: &dyn WeatherProvider,
    location: &dyn LocationSource,
) -> Result<WeatherReading, WeatherError> {
    let fix = location.current_location().await?;
    let query = WeatherQuery::coordinates(fix.latitude, fix.longitude)?;
    provider.current_weather(&query).await
}
