/// Builder for one influx line-protocol sample.
///
/// Renders to `measurement,tag=value field=1i,other=0.5`. Integer fields
/// carry the `i` suffix; bare numeric fields are floats per the protocol.
#[derive(Debug, Clone)]
pub struct MetricLine {
    measurement: String,
    tags: Vec<(String, String)>,
    fields: Vec<(String, FieldValue)>,
}

#[derive(Debug, Clone)]
enum FieldValue {
    Integer(i64),
    Float(f64),
}

impl MetricLine {
    pub fn new(measurement: &str) -> Self {
        Self {
            measurement: measurement.to_string(),
            tags: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.tags.push((key.to_string(), value.to_string()));
        self
    }

    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.push((key.to_string(), FieldValue::Integer(value)));
        self
    }

    pub fn field_f64(mut self, key: &str, value: f64) -> Self {
        self.fields.push((key.to_string(), FieldValue::Float(value)));
        self
    }

    /// Render the sample. Tags and fields appear in insertion order; the
    /// caller is responsible for adding at least one field.
    pub fn render(&self) -> String {
        let mut line = escape_measurement(&self.measurement);

        for (key, value) in &self.tags {
            line.push(',');
            line.push_str(&escape_part(key));
            line.push('=');
            line.push_str(&escape_part(value));
        }

        line.push(' ');
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push_str(&escape_part(key));
            line.push('=');
            match value {
                FieldValue::Integer(v) => {
                    line.push_str(&v.to_string());
                    line.push('i');
                }
                FieldValue::Float(v) => line.push_str(&v.to_string()),
            }
        }

        line
    }
}

// Measurements escape commas and spaces; tag keys, tag values, and field
// keys additionally escape equals signs.
fn escape_measurement(part: &str) -> String {
    part.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(' ', "\\ ")
}

fn escape_part(part: &str) -> String {
    escape_measurement(part).replace('=', "\\=")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tags_and_fields() {
        let line = MetricLine::new("openai")
            .tag("job", "integrations/openai")
            .tag("model", "gpt-4o")
            .field_i64("promptTokens", 120)
            .field_i64("completionTokens", 80)
            .field_f64("cost", 0.0125)
            .render();
        assert_eq!(
            line,
            "openai,job=integrations/openai,model=gpt-4o promptTokens=120i,completionTokens=80i,cost=0.0125"
        );
    }

    #[test]
    fn escapes_separator_characters() {
        let line = MetricLine::new("usage stats")
            .tag("source", "chat,v2")
            .tag("env", "prod=eu")
            .field_i64("n", 1)
            .render();
        assert_eq!(line, "usage\\ stats,source=chat\\,v2,env=prod\\=eu n=1i");
    }

    #[test]
    fn integer_fields_get_suffix_floats_do_not() {
        let line = MetricLine::new("m").field_i64("a", 7).field_f64("b", 2.5).render();
        assert_eq!(line, "m a=7i,b=2.5");
    }
}
