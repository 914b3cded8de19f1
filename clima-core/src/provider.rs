use crate::{
    Config, WeatherError, WeatherQuery, WeatherReading, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReading, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let endpoint = config.endpoint()?;
    OpenWeatherProvider::new(endpoint, config.timeout()?)
}
