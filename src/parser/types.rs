//! Type definitions for parsed charger specifications.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Facility input phase required by a charger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "1P")]
    Single,
    #[serde(rename = "3P")]
    Three,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Phase {
    /// Display label, matching the catalog's filter facet values.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Single => "1P",
            Phase::Three => "3P",
            Phase::Unknown => "unknown",
        }
    }

    /// Parse a user- or database-supplied phase label.
    /// Returns `None` for anything that is not recognizably a phase.
    pub fn from_label(input: &str) -> Option<Phase> {
        let lower = input.trim().to_lowercase();
        if lower == "1p" || lower == "single" {
            Some(Phase::Single)
        } else if lower == "3p" || lower == "three" {
            Some(Phase::Three)
        } else {
            None
        }
    }
}

/// Battery chemistry, used both for the caller's requirement and for the
/// chemistry list a charger supports.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Chemistry {
    LeadAcid,
    Agm,
    Flooded,
    Lithium,
    Other(String),
}

impl Chemistry {
    /// Classify a chemistry string using case-insensitive substring matching.
    /// Order matters: "agm" and "flooded" are checked before "lead" so that
    /// labels like "Lead-Acid/AGM" resolve to the more specific family.
    pub fn from_label(input: &str) -> Chemistry {
        let lower = input.to_lowercase();

        if lower.contains("agm") {
            Chemistry::Agm
        } else if lower.contains("flooded") {
            Chemistry::Flooded
        } else if lower.contains("lead") {
            Chemistry::LeadAcid
        } else if lower.contains("lithium") || lower.contains("li-ion") {
            Chemistry::Lithium
        } else {
            Chemistry::Other(input.to_string())
        }
    }

    /// Display label, matching the catalog's filter facet values.
    pub fn label(&self) -> &str {
        match self {
            Chemistry::LeadAcid => "Lead-Acid",
            Chemistry::Agm => "AGM",
            Chemistry::Flooded => "Flooded",
            Chemistry::Lithium => "Lithium",
            Chemistry::Other(name) => name,
        }
    }

    /// Whether this listed chemistry covers the requested one.
    /// Matches the requirement label as a case-insensitive substring of the
    /// listed label, so an explicit "Lead-Acid" listing covers a lead-acid
    /// battery but not a lithium one.
    pub fn covers(&self, requested: &Chemistry) -> bool {
        self.label()
            .to_lowercase()
            .contains(&requested.label().to_lowercase())
    }
}

// Chemistry serializes as its display label so catalog JSON and the SQLite
// spec columns stay human-readable.
impl Serialize for Chemistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Chemistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Chemistry::from_label(&label))
    }
}

/// Facility supply voltage option a charger accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputVoltage {
    #[serde(rename = "208-240V")]
    V208To240,
    #[serde(rename = "480V")]
    V480,
}

impl InputVoltage {
    pub fn label(&self) -> &'static str {
        match self {
            InputVoltage::V208To240 => "208-240V",
            InputVoltage::V480 => "480V",
        }
    }
}

/// Structured charger attributes derived from a product record.
///
/// Every field degrades rather than fails: missing numbers become `None`,
/// an undeterminable phase becomes `Unknown`, and an unstated chemistry
/// defaults to the lead-acid family with `chemistry_inferred` set so the
/// scorer can treat it as unknown rather than as a stated fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSpec {
    /// Output voltage in volts, if a 2-3 digit number followed by `v` was found.
    pub voltage: Option<u16>,
    /// Output current in amps, if a 2-3 digit number followed by `a` was found.
    pub current_amps: Option<u16>,
    /// Required facility input phase.
    pub phase: Phase,
    /// Battery chemistries the charger supports.
    pub chemistries: Vec<Chemistry>,
    /// True when `chemistries` is the default rather than stated in the listing.
    pub chemistry_inferred: bool,
    /// Facility supply voltage options.
    pub input_voltages: Vec<InputVoltage>,
}
