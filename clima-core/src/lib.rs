//! Core library for the `clima` current-weather client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Request construction, fetching and decoding for the current-weather endpoint
//! - The condition code to icon key table
//! - Seams for providers, location sources and result delivery
//!
//! It is used by `clima-cli`, but can also be reused by other front ends.

pub mod condition;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod location;
pub mod model;
pub mod parse;
pub mod provider;
pub mod request;

pub use config::{Config, Endpoint, Units};
pub use dispatch::spawn_lookup;
pub use error::{DecodeError, ErrorKind, WeatherError};
pub use location::{FixedLocation, LocationSource, current_weather_here};
pub use model::{Coordinates, WeatherQuery, WeatherReading};
pub use parse::parse;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use request::build_url;
