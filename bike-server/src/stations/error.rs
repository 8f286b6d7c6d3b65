//! Station source error types.

/// Errors that can occur while loading a station table.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dataset endpoint returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the dataset JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failed to read the dataset file
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::Api {
            status: 503,
            message: "down".into(),
        };
        assert_eq!(err.to_string(), "API error 503: down");

        let err = StationError::Json {
            message: "expected `[`".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected `[`");

        let err = StationError::Io {
            path: "stations.json".into(),
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "failed to read stations.json: not found");
    }
}
