/// Model pricing info (USD per 1K tokens, not per million)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ModelPricing {
    pub(super) prompt: f64,
    pub(super) completion: f64,
}
