//! Cost estimation from model pricing.

use tracing::debug;

/// USD per million tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    pub input: f64,
    pub output: f64,
}

const OPUS: ModelPricing = ModelPricing {
    input: 15.0,
    output: 75.0,
};
const SONNET: ModelPricing = ModelPricing {
    input: 3.0,
    output: 15.0,
};
const HAIKU_3_5: ModelPricing = ModelPricing {
    input: 0.8,
    output: 4.0,
};
const HAIKU_3: ModelPricing = ModelPricing {
    input: 0.25,
    output: 1.25,
};

const DEFAULT_PRICING: ModelPricing = SONNET;

/// Exact model ids with known pricing.
const PRICING_TABLE: &[(&str, ModelPricing)] = &[
    ("claude-opus-4-5-20251101", OPUS),
    ("claude-opus-4-20250514", OPUS),
    ("claude-sonnet-4-20250514", SONNET),
    ("claude-3-5-sonnet-20241022", SONNET),
    ("claude-3-5-haiku-20241022", HAIKU_3_5),
    ("claude-3-opus-20240229", OPUS),
    ("claude-3-sonnet-20240229", SONNET),
    ("claude-3-haiku-20240307", HAIKU_3),
];

/// Pricing for a model id: exact table match, then family substrings, then
/// the Sonnet default.
pub fn model_pricing(model_id: &str) -> ModelPricing {
    if let Some((_, pricing)) = PRICING_TABLE.iter().find(|(id, _)| *id == model_id) {
        return *pricing;
    }

    let lower = model_id.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if has(&["opus"]) {
        OPUS
    } else if has(&["haiku"]) {
        HAIKU_3_5
    } else if has(&["sonnet"]) {
        SONNET
    } else {
        debug!(target: "cockpit::cost", "Unknown model {}, using default pricing", model_id);
        DEFAULT_PRICING
    }
}

/// Estimated USD cost of a token count pair.
pub fn estimate_cost(model_id: &str, input_tokens: u64, output_tokens: u64) -> f64 {
    let pricing = model_pricing(model_id);
    let cost = input_tokens as f64 / 1_000_000.0 * pricing.input
        + output_tokens as f64 / 1_000_000.0 * pricing.output;
    debug!(
        target: "cockpit::cost",
        "Estimated cost: model={}, input={}, output={}, cost=${:.4}",
        model_id, input_tokens, output_tokens, cost
    );
    cost
}

/// `$0.0042`, `$0.123`, `$4.20`
pub fn format_cost(cost: f64) -> String {
    if cost < 0.01 {
        format!("${:.4}", cost)
    } else if cost < 1.0 {
        format!("${:.3}", cost)
    } else {
        format!("${:.2}", cost)
    }
}
