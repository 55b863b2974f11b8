use super::types::ModelPricing;

const fn price(prompt: f64, completion: f64) -> ModelPricing {
    ModelPricing { prompt, completion }
}

/// Compiled-in pricing table, USD per 1K tokens, keyed by model name.
/// Resolution over this table is exact-match first, then longest
/// contained key (see resolver).
pub(super) static PRICES: &[(&str, ModelPricing)] = &[
    // GPT-4.1 models
    ("gpt-4.1", price(0.002, 0.008)),          // $2/1M input, $8/1M output
    ("gpt-4.1-mini", price(0.0004, 0.0016)),   // $0.40/1M input, $1.60/1M output
    ("gpt-4.1-nano", price(0.0001, 0.0004)),   // $0.10/1M input, $0.40/1M output
    ("gpt-4.5-preview", price(0.075, 0.15)),   // $75/1M input, $150/1M output
    // GPT-4o models
    ("gpt-4o", price(0.0025, 0.01)),           // $2.50/1M input, $10/1M output
    ("gpt-4o-mini", price(0.00015, 0.0006)),   // $0.15/1M input, $0.60/1M output
    // o-series models
    ("o1", price(0.015, 0.06)),                // $15/1M input, $60/1M output
    ("o1-pro", price(0.15, 0.6)),              // $150/1M input, $600/1M output
    ("o3", price(0.01, 0.04)),                 // $10/1M input, $40/1M output
    ("o3-mini", price(0.0011, 0.0044)),        // $1.10/1M input, $4.40/1M output
    ("o1-mini", price(0.0011, 0.0044)),
    ("o4-mini", price(0.0011, 0.0044)),
    // GPT-4 models
    ("gpt-4", price(0.03, 0.06)),              // $30/1M input, $60/1M output
    ("gpt-4-32k", price(0.06, 0.12)),          // $60/1M input, $120/1M output
    ("gpt-4-turbo", price(0.01, 0.03)),        // $10/1M input, $30/1M output
    ("gpt-4-turbo-2024-04-09", price(0.01, 0.03)),
    ("gpt-4-0613", price(0.03, 0.06)),
    // GPT-3.5 models
    ("gpt-3.5-turbo", price(0.0005, 0.0015)),  // $0.50/1M input, $1.50/1M output
    ("gpt-3.5-turbo-0125", price(0.0005, 0.0015)),
    ("gpt-3.5-turbo-16k", price(0.003, 0.004)), // $3/1M input, $4/1M output
    ("gpt-3.5-turbo-16k-0613", price(0.003, 0.004)),
    ("gpt-3.5-turbo-instruct", price(0.0015, 0.002)), // $1.50/1M input, $2/1M output
    // Legacy completions models
    ("davinci-002", price(0.002, 0.002)),      // $2/1M input, $2/1M output
    ("babbage-002", price(0.0004, 0.0004)),    // $0.40/1M input, $0.40/1M output
    ("ada", price(0.0004, 0.0004)),
    ("text-ada-001", price(0.0004, 0.0004)),
    ("babbage", price(0.0004, 0.0004)),
    ("text-babbage-001", price(0.0004, 0.0004)),
    ("curie", price(0.0020, 0.0020)),
    ("text-curie-001", price(0.0020, 0.0020)),
    ("davinci", price(0.0020, 0.0020)),
    ("text-davinci-001", price(0.0020, 0.0020)),
    ("text-davinci-002", price(0.0020, 0.0020)),
    ("text-davinci-003", price(0.0020, 0.0020)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keys_are_unique() {
        for (i, (name, _)) in PRICES.iter().enumerate() {
            assert!(
                !PRICES.iter().skip(i + 1).any(|(other, _)| other == name),
                "duplicate pricing key: {name}"
            );
        }
    }

    #[test]
    fn prices_are_positive() {
        for (name, pricing) in PRICES {
            assert!(pricing.prompt > 0.0, "{name} prompt price");
            assert!(pricing.completion > 0.0, "{name} completion price");
        }
    }
}
