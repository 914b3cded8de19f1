use reqwest::StatusCode;
use thiserror::Error;

/// Failure to turn a response body into a [`crate::WeatherReading`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed weather JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("weather response contained no condition entries")]
    NoConditions,
}

/// Everything that can end a single weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("city name must not be empty")]
    EmptyInput,

    #[error("invalid coordinates ({latitude}, {longitude}): both values must be finite")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("invalid weather service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to reach the weather service")]
    Transport(#[source] reqwest::Error),

    #[error("weather service responded with status {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("failed to decode weather response")]
    Decode(#[from] DecodeError),

    #[error("location unavailable: {0}")]
    Location(String),
}

/// Coarse category of a [`WeatherError`], for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Config,
    Transport,
    HttpStatus,
    Decode,
    Location,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::EmptyInput | WeatherError::InvalidCoordinates { .. } => {
                ErrorKind::InvalidInput
            }
            WeatherError::InvalidUrl(_) => ErrorKind::Config,
            WeatherError::Transport(_) => ErrorKind::Transport,
            WeatherError::HttpStatus { .. } => ErrorKind::HttpStatus,
            WeatherError::Decode(_) => ErrorKind::Decode,
            WeatherError::Location(_) => ErrorKind::Location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn decode_error_keeps_its_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WeatherError::from(DecodeError::from(json_err));

        assert_eq!(err.kind(), ErrorKind::Decode);
        let source = err.source().expect("decode error must carry a source");
        assert!(source.to_string().contains("malformed weather JSON"));
    }

    #[test]
    fn http_status_message_includes_status_and_body() {
        let err = WeatherError::HttpStatus {
            status: StatusCode::UNAUTHORIZED,
            body: "Invalid API key".to_string(),
        };

        assert_eq!(err.kind(), ErrorKind::HttpStatus);
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Invalid API key"));
    }

    #[test]
    fn bad_base_url_is_a_config_error() {
        let err = WeatherError::from(url::Url::parse("not a url").unwrap_err());
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
