use chrono::{DateTime, Local};
use clima_core::{Units, WeatherReading};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReading<'a> {
    #[serde(flatten)]
    reading: &'a WeatherReading,
    temperature_display: String,
    icon: &'static str,
    units: Units,
    retrieved_at: DateTime<Local>,
}

pub fn render_human(reading: &WeatherReading, units: Units) -> String {
    format!(
        "{city}\n  {temp}{suffix}  {icon}\n  as of {time}",
        city = reading.city_name(),
        temp = reading.temperature_string(),
        suffix = units.temperature_suffix(),
        icon = reading.condition_name(),
        time = Local::now().format("%H:%M"),
    )
}

pub fn render_json(reading: &WeatherReading, units: Units) -> anyhow::Result<String> {
    let view = JsonReading {
        reading,
        temperature_display: reading.temperature_string(),
        icon: reading.condition_name(),
        units,
        retrieved_at: Local::now(),
    };

    Ok(serde_json::to_string_pretty(&view)?)
}
