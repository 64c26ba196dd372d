//! Charger scoring and recommendation.
//!
//! The `Recommender` scores each charger candidate against a battery
//! requirement using an additive weight table, then partitions the sorted
//! candidates into qualified matches and suboptimal fallbacks.
//!
//! A wrong output voltage is physically unusable, but instead of an early
//! return it takes a penalty large enough to land in the disqualified tier.
//! That keeps the pipeline a uniform score-then-sort pass and leaves the
//! reasons and warnings visible for diagnostics.

use tracing::debug;

use crate::catalog::ProductRecord;
use crate::parser::{effective_specs, Chemistry, Phase};

use super::band::CurrentBand;
use super::types::{
    BatteryRequirement, ChargerMatch, Diagnostics, MatchTier, RecommendOptions,
    RecommendationResult,
};
use super::weights::{default_weights, ScoringWeights};

/// The recommendation engine: an immutable weight table plus the scoring
/// and orchestration passes that use it.
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    /// Create an engine with the given weight table.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Create an engine with the embedded default weight table.
    pub fn with_defaults() -> Self {
        Self::new(default_weights())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one charger candidate against the requirement.
    ///
    /// Total function: every product yields a `ChargerMatch`; unknowable
    /// specs become warnings, never errors.
    pub fn score_charger(
        &self,
        product: &ProductRecord,
        requirement: &BatteryRequirement,
        options: &RecommendOptions,
    ) -> ChargerMatch {
        let w = &self.weights;
        let specs = effective_specs(product);
        let band = CurrentBand::for_requirement(requirement.amp_hours, requirement.charge_time);

        let mut score = 0;
        let mut reasons = Vec::new();
        let mut warnings = Vec::new();

        // Voltage: exact match or bust.
        match specs.voltage {
            Some(v) if v == requirement.voltage => {
                score += w.voltage.exact_match;
                reasons.push(format!("{}V output matches the battery", v));
            }
            Some(v) => {
                score += w.voltage.mismatch_penalty;
                warnings.push(format!(
                    "{}V output cannot charge a {}V battery",
                    v, requirement.voltage
                ));
            }
            None => {
                warnings.push("Output voltage not found in the listing".to_string());
            }
        }

        // Current: strict band, loose band, or known-but-off.
        match specs.current_amps {
            Some(a) if band.contains(a) => {
                score += w.current.in_band;
                reasons.push(format!(
                    "{}A output sits in the recommended {}-{}A range",
                    a, band.min_amps, band.max_amps
                ));
            }
            Some(a) if band.contains_loose(a) => {
                score += w.current.near_band;
                reasons.push(format!(
                    "{}A output is close to the recommended {}-{}A range",
                    a, band.min_amps, band.max_amps
                ));
            }
            Some(a) => {
                score += w.current.out_of_band;
                warnings.push(format!(
                    "{}A output is outside the recommended {}-{}A range",
                    a, band.min_amps, band.max_amps
                ));
            }
            None => {
                warnings.push("Output current not found in the listing".to_string());
            }
        }

        // Chemistry: a stated list can match; an inferred list is unknown.
        if specs.chemistry_inferred {
            score += w.chemistry.unknown;
            warnings.push("Supported chemistry not stated in the listing".to_string());
        } else if specs
            .chemistries
            .iter()
            .any(|c| c.covers(&requirement.chemistry))
        {
            score += w.chemistry.listed;
            reasons.push(format!(
                "Supports {} batteries",
                requirement.chemistry.label()
            ));
        } else if requirement.chemistry == Chemistry::Agm
            && specs
                .chemistries
                .iter()
                .any(|c| c.label().to_lowercase().contains("lead"))
        {
            score += w.chemistry.lead_acid_covers_agm;
            reasons.push("Lead-acid charger; AGM profiles are supported".to_string());
        } else {
            warnings.push(format!(
                "Not listed for {} batteries",
                requirement.chemistry.label()
            ));
        }

        // Phase: only scored when the caller stated the facility phase.
        if let Some(required_phase) = requirement.input_phase {
            match specs.phase {
                Phase::Unknown => {
                    score += w.phase.unknown;
                    warnings.push("Input phase not stated in the listing".to_string());
                }
                p if p == required_phase => {
                    score += w.phase.matched;
                    reasons.push(format!("Runs on {} facility power", p.label()));
                }
                p => {
                    // No penalty: phase adapters are routine in the field.
                    warnings.push(format!(
                        "Needs {} input but the facility has {}",
                        p.label(),
                        required_phase.label()
                    ));
                }
            }
        }

        // Quick-ship, only when the caller asked for it.
        if requirement.prefer_quick_ship && product.quick_ship {
            score += w.bonus.quick_ship;
            reasons.push("Ships from stock".to_string());
        }

        // Preferred brand or product line.
        let brand_text = format!(
            "{} {}",
            product.brand.as_deref().unwrap_or_default(),
            product.name
        )
        .to_lowercase();
        if w.bonus
            .preferred_brands
            .iter()
            .any(|token| brand_text.contains(token))
        {
            score += w.bonus.preferred_brand;
            reasons.push("Preferred charger line".to_string());
        }

        let tier = MatchTier::classify(score, options.min_score, w.thresholds.disqualify_floor);

        ChargerMatch {
            product: product.clone(),
            score,
            tier,
            reasons,
            warnings,
            specs,
        }
    }

    /// Score every charger in the catalog slice and partition the results.
    ///
    /// Empty input yields empty result arrays, never an error. Idempotent:
    /// identical inputs produce identical results.
    pub fn recommend(
        &self,
        products: &[ProductRecord],
        requirement: &BatteryRequirement,
        options: &RecommendOptions,
    ) -> RecommendationResult {
        let candidates: Vec<&ProductRecord> =
            products.iter().filter(|p| p.is_charger()).collect();
        let considered_chargers = candidates.len();

        let mut scored: Vec<ChargerMatch> = candidates
            .into_iter()
            .map(|product| self.score_charger(product, requirement, options))
            .collect();
        // Stable sort keeps catalog order among equal scores.
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        if options.debug_trace {
            for candidate in &scored {
                debug!(
                    slug = %candidate.product.slug,
                    score = candidate.score,
                    tier = ?candidate.tier,
                    "scored charger candidate"
                );
            }
        }

        let mut matches = Vec::new();
        let mut fallbacks = Vec::new();
        for candidate in scored {
            match candidate.tier {
                MatchTier::Qualified => matches.push(candidate),
                MatchTier::Suboptimal => {
                    if options.include_suboptimal {
                        fallbacks.push(candidate);
                    }
                }
                MatchTier::Disqualified => {}
            }
        }
        matches.truncate(options.max_results);
        fallbacks.truncate(options.max_results);

        RecommendationResult {
            matches,
            fallbacks,
            diagnostics: Diagnostics {
                total_products: products.len(),
                considered_chargers,
                weights: self.weights.clone(),
                requirement: requirement.clone(),
            },
        }
    }
}
