use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration value: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid metrics URL \"{url}\" (expected an 'api/prom' endpoint)")]
    InvalidMetricsUrl { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_missing_field() {
        let e = ConfigError::MissingField {
            field: "access_token",
        };
        assert_eq!(
            e.to_string(),
            "Missing required configuration value: access_token"
        );
    }

    #[test]
    fn config_error_display_invalid_metrics_url() {
        let e = ConfigError::InvalidMetricsUrl {
            url: "https://example.com/no-marker".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid metrics URL "https://example.com/no-marker" (expected an 'api/prom' endpoint)"#
        );
    }
}
