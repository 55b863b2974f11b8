use crate::error::ConfigError;

/// Validated Grafana Cloud endpoint configuration.
///
/// Built once at setup; URLs are held in canonical push form and nothing
/// is mutated afterwards, so a shared reference is safe across threads.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    metrics_url: String,
    logs_url: String,
    metrics_username: String,
    logs_username: String,
    access_token: String,
}

impl EndpointConfig {
    /// Validate the five required settings and canonicalize both URLs.
    ///
    /// The metrics URL must be an `api/prom` endpoint; Prometheus-style
    /// URLs are rewritten to the influx line-protocol push gateway.
    pub fn new(
        metrics_url: &str,
        logs_url: &str,
        metrics_username: &str,
        logs_username: &str,
        access_token: &str,
    ) -> Result<Self, ConfigError> {
        require(metrics_url, "metrics_url")?;
        require(logs_url, "logs_url")?;
        require(metrics_username, "metrics_username")?;
        require(logs_username, "logs_username")?;
        require(access_token, "access_token")?;

        if !metrics_url.contains("api/prom") {
            return Err(ConfigError::InvalidMetricsUrl {
                url: metrics_url.to_string(),
            });
        }

        Ok(Self {
            metrics_url: trim_trailing_slash(&to_influx_push_url(metrics_url)).to_string(),
            logs_url: trim_trailing_slash(logs_url).to_string(),
            metrics_username: metrics_username.to_string(),
            logs_username: logs_username.to_string(),
            access_token: access_token.to_string(),
        })
    }

    pub fn metrics_url(&self) -> &str {
        &self.metrics_url
    }

    pub fn logs_url(&self) -> &str {
        &self.logs_url
    }

    pub fn metrics_username(&self) -> &str {
        &self.metrics_username
    }

    pub fn logs_username(&self) -> &str {
        &self.logs_username
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::MissingField { field });
    }
    Ok(())
}

/// Rewrite a Prometheus remote-write URL to the influx line-protocol
/// push gateway. URLs already in push form pass through unchanged.
fn to_influx_push_url(metrics_url: &str) -> String {
    if !metrics_url.contains("prometheus") {
        return metrics_url.to_string();
    }

    let mut url = metrics_url
        .replace("prometheus", "influx")
        .replace("api/prom", "api/v1/push/influx/write");

    // The us-central1 stack answers pushes on a differently named cluster.
    if url.contains("-us-central1") {
        url = url.replace("-us-central1", "-prod-06-prod-us-central-0");
    }

    url
}

fn trim_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
