/*!
 * Translation cost estimation.
 *
 * Character-count based estimate against a static per-model price table.
 * Purely arithmetic; never calls the network.
 */

use serde::Serialize;

/// Per-model pricing, USD per 1K tokens
struct ModelPricing {
    input: f64,
    output: f64,
}

/// Resolve pricing for a model, falling back to gpt-5-mini rates
fn pricing_for(model: &str) -> ModelPricing {
    match model {
        "gpt-5" => ModelPricing {
            input: 0.001_25,
            output: 0.01,
        },
        // gpt-5-mini rates double as the fallback for unknown models
        _ => ModelPricing {
            input: 0.000_25,
            output: 0.002,
        },
    }
}

/// Structured cost estimate for a translation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    /// Characters across all non-blank texts
    pub total_characters: usize,
    /// Estimated prompt tokens
    pub estimated_input_tokens: usize,
    /// Estimated completion tokens (assumed equal to input)
    pub estimated_output_tokens: usize,
    /// Estimated total cost in USD
    pub estimated_cost_usd: f64,
    /// Number of non-blank texts
    pub total_texts: usize,
    /// Model the estimate was computed for
    pub model: String,
}

impl CostEstimate {
    /// An all-zero estimate for the given model
    fn zero(model: &str) -> Self {
        Self {
            total_characters: 0,
            estimated_input_tokens: 0,
            estimated_output_tokens: 0,
            estimated_cost_usd: 0.0,
            total_texts: 0,
            model: model.to_string(),
        }
    }
}

/// Estimate the cost of translating the given texts
///
/// Blank and whitespace-only items are excluded. Tokens are estimated with a
/// fixed characters-per-token divisor: 4 for an English target, 3 otherwise,
/// so non-English estimates come out higher for identical text. Output
/// length is assumed equal to input length.
pub fn estimate_translation_cost(
    texts: &[String],
    target_language: &str,
    model: &str,
) -> CostEstimate {
    let total_characters: usize = texts
        .iter()
        .filter(|text| !text.trim().is_empty())
        .map(|text| text.chars().count())
        .sum();

    if total_characters == 0 {
        return CostEstimate::zero(model);
    }

    let chars_per_token = if target_language.to_lowercase().contains("english") {
        4
    } else {
        3
    };

    let estimated_input_tokens = std::cmp::max(1, total_characters / chars_per_token);
    let estimated_output_tokens = estimated_input_tokens;

    let pricing = pricing_for(model);
    let input_cost = (estimated_input_tokens as f64 / 1000.0) * pricing.input;
    let output_cost = (estimated_output_tokens as f64 / 1000.0) * pricing.output;
    let estimated_cost_usd = (input_cost + output_cost).max(0.000_001);

    CostEstimate {
        total_characters,
        estimated_input_tokens,
        estimated_output_tokens,
        estimated_cost_usd,
        total_texts: texts.iter().filter(|text| !text.trim().is_empty()).count(),
        model: model.to_string(),
    }
}
