//! Plain-text rendering of a recommendation result.

use crate::parser::ParsedSpec;

use super::types::RecommendationResult;

/// Render a multi-line, human-readable summary: the top matches with their
/// scores and specs, then any fallback options with the first warning that
/// kept them out of the match tier.
pub fn format_summary(result: &RecommendationResult) -> String {
    let mut out = String::new();

    if result.matches.is_empty() {
        out.push_str("No compatible chargers found.\n");
    } else {
        out.push_str("Top charger matches:\n");
        for (idx, m) in result.matches.iter().take(3).enumerate() {
            out.push_str(&format!(
                "{}. {} (score {})\n   {}\n",
                idx + 1,
                m.product.name,
                m.score,
                describe_specs(&m.specs)
            ));
        }
    }

    if !result.fallbacks.is_empty() {
        out.push_str("Fallback options:\n");
        for fallback in &result.fallbacks {
            match fallback.warnings.first() {
                Some(warning) => out.push_str(&format!(
                    "- {} (score {}): {}\n",
                    fallback.product.name, fallback.score, warning
                )),
                None => out.push_str(&format!(
                    "- {} (score {})\n",
                    fallback.product.name, fallback.score
                )),
            }
        }
    }

    out
}

fn describe_specs(specs: &ParsedSpec) -> String {
    let voltage = specs
        .voltage
        .map(|v| format!("{}V", v))
        .unwrap_or_else(|| "voltage n/a".to_string());
    let current = specs
        .current_amps
        .map(|a| format!("{}A", a))
        .unwrap_or_else(|| "current n/a".to_string());
    let chemistries: Vec<&str> = specs.chemistries.iter().map(|c| c.label()).collect();

    format!(
        "{} / {} / {} / {}",
        voltage,
        current,
        specs.phase.label(),
        chemistries.join(", ")
    )
}
