use serde::Deserialize;

use crate::{error::DecodeError, model::WeatherReading};

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

/// Decode a current-weather response body.
///
/// Only the first `weather` entry is used. An empty `weather` list is an
/// error rather than a reading with a made-up condition code.
pub fn parse(body: &[u8]) -> Result<WeatherReading, DecodeError> {
    let parsed: OwCurrentResponse = serde_json::from_slice(body)?;

    let condition = parsed.weather.first().ok_or(DecodeError::NoConditions)?;

    Ok(WeatherReading::new(condition.id, parsed.name, parsed.main.temp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let body = br#"{"name":"Lisbon","main":{"temp":21.34},"weather":[{"id":800}]}"#;
        let reading = parse(body).expect("valid document");

        assert_eq!(reading.condition_id(), 800);
        assert_eq!(reading.city_name(), "Lisbon");
        assert_eq!(reading.temperature(), 21.34);
        assert_eq!(reading.temperature_string(), "21.3");
        assert_eq!(reading.condition_name(), "sun.max");
    }

    #[test]
    fn ignores_extra_fields_and_uses_first_condition() {
        let body = br#"{
            "coord": {"lon": -0.13, "lat": 51.51},
            "weather": [
                {"id": 210, "main": "Thunderstorm", "description": "light thunderstorm"},
                {"id": 500, "main": "Rain", "description": "light rain"}
            ],
            "main": {"temp": 12.5, "feels_like": 11.9, "humidity": 81},
            "wind": {"speed": 4.1},
            "dt": 1700000000,
            "name": "London",
            "cod": 200
        }"#;

        let reading = parse(body).expect("valid document");
        assert_eq!(reading.condition_id(), 210);
        assert_eq!(reading.condition_name(), "cloud.bolt");
    }

    #[test]
    fn integer_temperature_is_accepted() {
        let body = br#"{"name":"Oslo","main":{"temp":-3},"weather":[{"id":600}]}"#;
        let reading = parse(body).unwrap();
        assert_eq!(reading.temperature_string(), "-3.0");
    }

    #[test]
    fn missing_weather_is_an_error() {
        let body = br#"{"name":"Lisbon","main":{"temp":21.34}}"#;
        assert!(matches!(parse(body), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn empty_weather_is_an_error() {
        let body = br#"{"name":"Lisbon","main":{"temp":21.34},"weather":[]}"#;
        assert!(matches!(parse(body), Err(DecodeError::NoConditions)));
    }

    #[test]
    fn wrong_types_are_errors() {
        let cases: [&[u8]; 4] = [
            br#"{"name":"Lisbon","main":{"temp":"warm"},"weather":[{"id":800}]}"#,
            br#"{"name":42,"main":{"temp":1.0},"weather":[{"id":800}]}"#,
            br#"{"name":"Lisbon","main":{"temp":1.0},"weather":[{"id":"800"}]}"#,
            br#"{"name":"Lisbon","main":{},"weather":[{"id":800}]}"#,
        ];

        for body in cases {
            assert!(matches!(parse(body), Err(DecodeError::Malformed(_))));
        }
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse(b"").is_err());
        assert!(parse(b"not json").is_err());
        assert!(parse(br#"{"name":"Lisbon""#).is_err());
    }

    #[test]
    fn error_payload_is_not_a_reading() {
        let body = br#"{"cod":"404","message":"city not found"}"#;
        assert!(matches!(parse(body), Err(DecodeError::Malformed(_))));
    }
}
