use super::table::PRICES;
use super::types::ModelPricing;

/// Resolve a model identifier to its pricing entry.
///
/// Exact table keys win. Otherwise the longest table key contained in the
/// model name is used, so a dated snapshot like "gpt-4-turbo-2024-04-09"
/// picks up "gpt-4-turbo" pricing rather than "gpt-4". Ties on length go
/// to the lexicographically smallest key. Matching is case-sensitive.
pub(super) fn resolve_pricing(model: &str) -> Option<ModelPricing> {
    if let Some((_, pricing)) = PRICES.iter().find(|(name, _)| *name == model) {
        return Some(*pricing);
    }

    let mut candidates: Vec<&(&str, ModelPricing)> = PRICES
        .iter()
        .filter(|(name, _)| model.contains(name))
        .collect();
    candidates.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    candidates.first().map(|(_, pricing)| *pricing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        let pricing = resolve_pricing("gpt-4-turbo-2024-04-09").unwrap();
        assert_eq!(pricing.prompt, 0.01);
        assert_eq!(pricing.completion, 0.03);
    }

    #[test]
    fn longest_substring_match_beats_shorter() {
        // Both "gpt-4" and "gpt-4-turbo" are contained; the longer key wins.
        let pricing = resolve_pricing("gpt-4-turbo-custom-suffix").unwrap();
        assert_eq!(pricing.prompt, 0.01);
        assert_eq!(pricing.completion, 0.03);
    }

    #[test]
    fn bare_family_prefix_falls_back_to_family_pricing() {
        let pricing = resolve_pricing("gpt-4-0314").unwrap();
        assert_eq!(pricing.prompt, 0.03);
        assert_eq!(pricing.completion, 0.06);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(resolve_pricing("GPT-4o").is_none());
    }

    #[test]
    fn unknown_model_resolves_to_none() {
        assert!(resolve_pricing("unknown-model-xyz").is_none());
    }
}
