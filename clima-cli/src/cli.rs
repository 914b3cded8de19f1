use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clima_core::{
    Config, FixedLocation, Units, WeatherProvider, WeatherQuery, WeatherReading,
    current_weather_here, provider_from_config, spawn_lookup,
};
use inquire::{Password, PasswordDisplayMode, Select};
use tracing::debug;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Current weather by city name or coordinates")]
pub struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// OpenWeather API key; overrides the stored one for this run.
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and unit system.
    Configure,

    /// Show current weather for a city or a pair of coordinates.
    Show {
        /// City name; several words are joined with spaces.
        #[arg(required_unless_present = "lat", conflicts_with_all = ["lat", "lon"])]
        city: Vec<String>,

        /// Latitude in degrees.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in degrees.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Print the reading as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { api_key, command, .. } = self;

        match command {
            Command::Configure => configure(),
            Command::Show { city, lat, lon, json } => {
                let mut config = Config::load()?;
                if let Some(key) = api_key {
                    config.set_api_key(key);
                }

                let reading = match (lat, lon) {
                    (Some(lat), Some(lon)) => show_coordinates(&config, lat, lon).await?,
                    _ => show_city(&config, &city.join(" ")).await?,
                };

                if json {
                    println!("{}", output::render_json(&reading, config.units)?);
                } else {
                    println!("{}", output::render_human(&reading, config.units));
                }
                Ok(())
            }
        }
    }
}

async fn show_city(config: &Config, city: &str) -> anyhow::Result<WeatherReading> {
    let query = WeatherQuery::city(city)?;
    let provider: Arc<dyn WeatherProvider> = Arc::new(provider_from_config(config)?);

    let reading = spawn_lookup(provider, query)
        .await
        .context("Weather lookup ended without a result")??;
    Ok(reading)
}

async fn show_coordinates(config: &Config, lat: f64, lon: f64) -> anyhow::Result<WeatherReading> {
    let location = FixedLocation::new(lat, lon)?;
    let provider = provider_from_config(config)?;

    Ok(current_weather_here(&provider, &location).await?)
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key_prompt = if config.api_key.is_some() {
        "OpenWeather API key (leave empty to keep the current one):"
    } else {
        "OpenWeather API key:"
    };

    let key = Password::new(key_prompt)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    if !key.trim().is_empty() {
        config.set_api_key(key);
    }

    let units = Units::all();
    let current = units.iter().position(|u| *u == config.units).unwrap_or(0);
    config.units = Select::new("Units:", units.to_vec())
        .with_starting_cursor(current)
        .prompt()
        .context("Failed to read unit system")?;

    let path = config.save()?;
    debug!(path = %path.display(), "configuration saved");
    println!("Configuration saved to {}", path.display());

    if config.api_key.is_none() {
        println!("No API key stored yet; `clima show` will need OPENWEATHER_API_KEY.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_multi_word_city() {
        let cli = Cli::try_parse_from(["clima", "show", "Rio", "de", "Janeiro"]).unwrap();
        match cli.command {
            Command::Show { city, lat, .. } => {
                assert_eq!(city.join(" "), "Rio de Janeiro");
                assert!(lat.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn show_accepts_negative_coordinates() {
        let cli =
            Cli::try_parse_from(["clima", "show", "--lat", "-33.87", "--lon", "151.21"]).unwrap();
        match cli.command {
            Command::Show { lat, lon, city, .. } => {
                assert_eq!(lat, Some(-33.87));
                assert_eq!(lon, Some(151.21));
                assert!(city.is_empty());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn show_requires_city_or_both_coordinates() {
        assert!(Cli::try_parse_from(["clima", "show"]).is_err());
        assert!(Cli::try_parse_from(["clima", "show", "--lat", "1.0"]).is_err());
        let both = ["clima", "show", "Oslo", "--lat", "1", "--lon", "2"];
        assert!(Cli::try_parse_from(both).is_err());
    }
}
