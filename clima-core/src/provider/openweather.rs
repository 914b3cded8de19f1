use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    config::Endpoint,
    error::WeatherError,
    model::{WeatherQuery, WeatherReading},
    parse::parse,
    request::{build_url, redacted},
};

use super::WeatherProvider;

/// Current-weather lookups against an OpenWeather compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    endpoint: Endpoint,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(endpoint: Endpoint, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub async fn current_by_city(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let query = WeatherQuery::city(city)?;
        self.current_weather(&query).await
    }

    pub async fn current_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReading, WeatherError> {
        let query = WeatherQuery::coordinates(latitude, longitude)?;
        self.current_weather(&query).await
    }

    /// One GET, no retries. Non-2xx responses are returned as
    /// [`WeatherError::HttpStatus`] and their body is never decoded.
    #[instrument(level = "debug", skip(self, url), fields(url = %redacted(url)))]
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>, WeatherError> {
        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        let body = res.bytes().await.map_err(WeatherError::Transport)?;
        debug!(%status, bytes = body.len(), "weather service responded");

        if !status.is_success() {
            return Err(WeatherError::HttpStatus {
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        Ok(body.to_vec())
    }

    async fn lookup(&self, query: &WeatherQuery) -> Result<WeatherReading, WeatherError> {
        let url = build_url(query, &self.endpoint)?;
        let body = self.fetch(&url).await?;
        let reading = parse(&body)?;

        debug!(
            city = reading.city_name(),
            condition = reading.condition_id(),
            temperature = reading.temperature(),
            "decoded weather reading"
        );

        Ok(reading)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(level = "debug", skip(self, query), fields(query = %query))]
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReading, WeatherError> {
        let result = self.lookup(query).await;

        if let Err(err) = &result {
            warn!(kind = ?err.kind(), error = %err, "weather lookup failed");
        }

        result
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
