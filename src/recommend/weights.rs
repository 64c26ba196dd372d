//! TOML weight-table loading for the scoring engine.
//!
//! Two loading methods:
//! - `default_weights()` - the table embedded into the binary
//! - `load_weights(path)` - a custom table from a file path

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default weight table embedded at compile time from
/// `config/scoring_weights.toml`.
const DEFAULT_WEIGHTS: &str = include_str!("../../config/scoring_weights.toml");

/// The complete scoring weight table. An immutable value handed to the
/// engine, so tests and callers can substitute alternates without touching
/// any global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub voltage: VoltageWeights,
    pub current: CurrentWeights,
    pub chemistry: ChemistryWeights,
    pub phase: PhaseWeights,
    pub bonus: BonusWeights,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageWeights {
    /// Exact output-voltage match.
    pub exact_match: i32,
    /// Known but mismatched output voltage. Large enough to sink the total
    /// below the disqualify floor on its own.
    pub mismatch_penalty: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeights {
    /// Inside the recommended charge band.
    pub in_band: i32,
    /// Inside the loose band only.
    pub near_band: i32,
    /// Known current outside both bands.
    pub out_of_band: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemistryWeights {
    /// Charger explicitly lists the battery chemistry.
    pub listed: i32,
    /// AGM requirement against a lead-acid-only listing.
    pub lead_acid_covers_agm: i32,
    /// Chemistry not stated in the listing.
    pub unknown: i32,
}

/// A known-but-mismatched phase gets a warning and no score movement:
/// phase adapters are routine in the field, unlike a voltage mismatch.
/// The asymmetry with [`VoltageWeights`] is deliberate, which is why there
/// is no penalty field here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseWeights {
    /// Parsed phase matches the facility phase.
    pub matched: i32,
    /// Phase could not be determined from the listing.
    pub unknown: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusWeights {
    /// Quick-ship product when the caller asked for one.
    pub quick_ship: i32,
    /// Brand or product line match.
    pub preferred_brand: i32,
    /// Lowercased tokens matched against brand and name.
    pub preferred_brands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Candidates at or below this total are excluded from matches and
    /// fallbacks alike.
    pub disqualify_floor: i32,
}

/// The weight table embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a compile-time bug).
pub fn default_weights() -> ScoringWeights {
    toml::from_str(DEFAULT_WEIGHTS).expect("embedded scoring_weights.toml must be valid TOML")
}

/// Load a weight table from a TOML file.
pub fn load_weights(path: &Path) -> Result<ScoringWeights> {
    let content = std::fs::read_to_string(path)?;
    let weights: ScoringWeights = toml::from_str(&content)?;
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_load() {
        let weights = default_weights();
        assert_eq!(weights.voltage.exact_match, 100);
        assert_eq!(weights.voltage.mismatch_penalty, -1000);
        assert_eq!(weights.current.in_band, 50);
        assert_eq!(weights.current.near_band, 25);
        assert_eq!(weights.current.out_of_band, 10);
        assert_eq!(weights.chemistry.listed, 30);
        assert_eq!(weights.chemistry.lead_acid_covers_agm, 15);
        assert_eq!(weights.chemistry.unknown, 5);
        assert_eq!(weights.phase.matched, 20);
        assert_eq!(weights.phase.unknown, 5);
        assert_eq!(weights.bonus.quick_ship, 15);
        assert_eq!(weights.bonus.preferred_brand, 10);
        assert_eq!(weights.thresholds.disqualify_floor, -500);
    }

    #[test]
    fn test_mismatch_penalty_sinks_below_floor() {
        let weights = default_weights();
        // Every other rule maxed out must not rescue a voltage mismatch
        let best_other = weights.current.in_band
            + weights.chemistry.listed
            + weights.phase.matched
            + weights.bonus.quick_ship
            + weights.bonus.preferred_brand;
        assert!(
            weights.voltage.mismatch_penalty + best_other <= weights.thresholds.disqualify_floor,
            "mismatched voltage must always disqualify"
        );
    }

    #[test]
    fn test_preferred_brand_tokens_are_lowercase() {
        let weights = default_weights();
        assert!(!weights.bonus.preferred_brands.is_empty());
        for token in &weights.bonus.preferred_brands {
            assert_eq!(token, &token.to_lowercase());
        }
    }

    #[test]
    fn test_load_weights_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.toml");
        std::fs::write(&path, "[voltage]\nexact_match = \"not a number\"").unwrap();
        assert!(load_weights(&path).is_err());
    }

    #[test]
    fn test_load_weights_round_trips_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.toml");
        std::fs::write(&path, toml::to_string(&default_weights()).unwrap()).unwrap();
        assert_eq!(load_weights(&path).unwrap(), default_weights());
    }
}
