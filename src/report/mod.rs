mod line;
mod loki;

pub use line::MetricLine;
pub use loki::{LokiPayload, LokiStream};

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::error;
use ureq::Agent;

use crate::config::EndpointConfig;

const SEND_TIMEOUT: Duration = Duration::from_secs(60);

/// Fire-and-forget sender for usage metrics and logs.
///
/// Both send paths swallow failures: telemetry must never take down the
/// caller's request path. A failed send is logged at error level and
/// dropped, never retried or queued.
pub struct Reporter {
    config: EndpointConfig,
    agent: Agent,
}

impl Reporter {
    pub fn new(config: EndpointConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(SEND_TIMEOUT))
            .build()
            .new_agent();
        Self { config, agent }
    }

    /// Push line-protocol samples to the metrics endpoint, newline-joined,
    /// as a single `text/plain` body.
    pub fn send_metrics(&self, lines: &[String]) {
        let body = lines.join("\n");
        let auth = basic_auth(self.config.metrics_username(), self.config.access_token());
        let result = self
            .agent
            .post(self.config.metrics_url())
            .header("Content-Type", "text/plain")
            .header("Authorization", auth.as_str())
            .send(body.as_str());
        if let Err(err) = result {
            error!("Error sending metrics: {err}");
        }
    }

    /// Push a Loki payload to the logs endpoint as `application/json`.
    pub fn send_logs(&self, payload: &LokiPayload) {
        let auth = basic_auth(self.config.logs_username(), self.config.access_token());
        let result = self
            .agent
            .post(self.config.logs_url())
            .header("Authorization", auth.as_str())
            .send_json(payload);
        if let Err(err) = result {
            error!("Error sending logs: {err}");
        }
    }
}

fn basic_auth(username: &str, token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{token}")))
}
