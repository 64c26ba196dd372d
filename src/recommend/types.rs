//! Type definitions for the recommendation engine.
//!
//! Split the same way the data flows: caller input (requirement, options),
//! engine output (match, tier, result), and diagnostics.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductRecord;
use crate::parser::{Chemistry, ParsedSpec, Phase};

use super::weights::ScoringWeights;

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Desired charge-time class, expressed as a C-rate heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeTime {
    /// Charge over a full shift break (C/10).
    Overnight,
    /// Opportunity/fast charging (C/5).
    Fast,
}

impl ChargeTime {
    pub fn from_label(input: &str) -> Option<ChargeTime> {
        match input.trim().to_lowercase().as_str() {
            "overnight" => Some(ChargeTime::Overnight),
            "fast" => Some(ChargeTime::Fast),
            _ => None,
        }
    }
}

/// The battery a charger is being matched against. Caller-constructed and
/// already validated for required fields; the engine performs no schema
/// validation of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryRequirement {
    /// Battery pack voltage in volts. A charger with a different known
    /// output voltage is disqualified.
    pub voltage: u16,
    /// Rated capacity in amp-hours, used to derive the charge-current band.
    pub amp_hours: f32,
    /// Battery chemistry.
    pub chemistry: Chemistry,
    /// Desired charge-time class.
    pub charge_time: ChargeTime,
    /// Facility input phase, when the caller knows it.
    #[serde(default)]
    pub input_phase: Option<Phase>,
    /// Prefer products that ship from stock.
    #[serde(default)]
    pub prefer_quick_ship: bool,
}

/// Caller-overridable knobs for a recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendOptions {
    /// Cap on returned matches and fallbacks, each.
    pub max_results: usize,
    /// Minimum score for the qualified-match tier.
    pub min_score: i32,
    /// Whether to return the below-threshold fallback tier at all.
    pub include_suboptimal: bool,
    /// Emit a tracing debug trace of the top candidates.
    pub debug_trace: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            max_results: 5,
            min_score: 50,
            include_suboptimal: true,
            debug_trace: false,
        }
    }
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// Match quality tier. The three-way split is explicit rather than implied
/// by score thresholds scattered through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// At or above the minimum score; shown as a match.
    Qualified,
    /// Below the minimum score but above the disqualify floor; shown as a
    /// fallback option.
    Suboptimal,
    /// At or below the disqualify floor (in practice: wrong voltage);
    /// excluded from the result entirely.
    Disqualified,
}

impl MatchTier {
    /// Classify a total score against the two thresholds.
    pub fn classify(score: i32, min_score: i32, disqualify_floor: i32) -> MatchTier {
        if score <= disqualify_floor {
            MatchTier::Disqualified
        } else if score >= min_score {
            MatchTier::Qualified
        } else {
            MatchTier::Suboptimal
        }
    }
}

/// A scored charger candidate. Created once per scoring call, ordered by
/// score descending in the result, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargerMatch {
    pub product: ProductRecord,
    pub score: i32,
    pub tier: MatchTier,
    /// Human-readable strings for each rule that contributed positively.
    pub reasons: Vec<String>,
    /// Human-readable strings for each shortfall, mismatch, or unknown.
    pub warnings: Vec<String>,
    /// The specs the candidate was scored against.
    pub specs: ParsedSpec,
}

/// Run-level diagnostics attached to every result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Products supplied by the caller.
    pub total_products: usize,
    /// Products that passed the charger-category filter and were scored.
    pub considered_chargers: usize,
    /// The weight table the scores were computed with.
    pub weights: ScoringWeights,
    /// The requirement the run was scored against.
    pub requirement: BatteryRequirement,
}

/// Top-level return value of a recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub matches: Vec<ChargerMatch>,
    pub fallbacks: Vec<ChargerMatch>,
    pub diagnostics: Diagnostics,
}
