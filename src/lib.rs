//! Usage cost accounting and Grafana Cloud telemetry for LLM API calls.
//!
//! A reporting sidecar for instrumentation wrappers around model-provider
//! SDKs: validate the Grafana Cloud endpoints once, then per API call
//! price the token usage and push metrics (influx line protocol) and logs
//! (Loki push API) with two best-effort HTTP POSTs.
//!
//! ```no_run
//! use llmetry::{EndpointConfig, MetricLine, Reporter, UsageRecord};
//!
//! # fn main() -> Result<(), llmetry::ConfigError> {
//! let config = EndpointConfig::new(
//!     "https://prometheus-prod-01-prod-us-central1.grafana.net/api/prom/push",
//!     "https://logs-prod-006.grafana.net/loki/api/v1/push",
//!     "123456",
//!     "654321",
//!     "glc_token",
//! )?;
//! let reporter = Reporter::new(config);
//!
//! let usage = UsageRecord {
//!     model: "gpt-4o".to_string(),
//!     prompt_tokens: 120,
//!     completion_tokens: 80,
//! };
//! let line = MetricLine::new("openai")
//!     .tag("job", "integrations/openai")
//!     .tag("model", &usage.model)
//!     .field_i64("promptTokens", usage.prompt_tokens)
//!     .field_i64("completionTokens", usage.completion_tokens)
//!     .field_f64("usageCost", usage.cost())
//!     .render();
//! reporter.send_metrics(&[line]);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod pricing;
mod report;
mod usage;

pub use config::EndpointConfig;
pub use error::ConfigError;
pub use pricing::estimate_cost;
pub use report::{LokiPayload, LokiStream, MetricLine, Reporter};
pub use usage::UsageRecord;
