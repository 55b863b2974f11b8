use std::collections::HashMap;

use serde::Serialize;

/// Loki push-API request body: `{"streams": [...]}`.
#[derive(Debug, Default, Serialize)]
pub struct LokiPayload {
    pub streams: Vec<LokiStream>,
}

impl LokiPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stream(mut self, stream: LokiStream) -> Self {
        self.streams.push(stream);
        self
    }
}

/// One labelled stream of log lines.
///
/// `values` holds `[timestamp, line]` pairs; timestamps are caller-supplied
/// nanosecond strings (this crate reads no clocks).
#[derive(Debug, Default, Serialize)]
pub struct LokiStream {
    pub stream: HashMap<String, String>,
    pub values: Vec<[String; 2]>,
}

impl LokiStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, key: &str, value: &str) -> Self {
        self.stream.insert(key.to_string(), value.to_string());
        self
    }

    pub fn push(&mut self, timestamp_ns: &str, line: &str) {
        self.values
            .push([timestamp_ns.to_string(), line.to_string()]);
    }
}
