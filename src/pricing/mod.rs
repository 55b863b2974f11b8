mod resolver;
mod table;
mod types;

use resolver::resolve_pricing;

/// Estimate the cost in USD of one API call.
///
/// Unknown models cost `0.0` rather than erroring; a missing pricing entry
/// must never break the caller's request path. Token counts are not
/// validated, rounding is left to the caller.
pub fn estimate_cost(model: &str, prompt_tokens: i64, completion_tokens: i64) -> f64 {
    let Some(pricing) = resolve_pricing(model) else {
        return 0.0;
    };

    (prompt_tokens as f64 / 1000.0) * pricing.prompt
        + (completion_tokens as f64 / 1000.0) * pricing.completion
}
