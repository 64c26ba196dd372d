//! Spec extraction from unstructured product listings.
//!
//! Industrial charger listings rarely carry structured attributes; the
//! voltage, current, phase and chemistry live in free text like
//! "Green2 24V 60A Single Phase Charger" or in the URL slug. This module
//! recovers them with regex and token heuristics. False negatives are
//! expected and accepted: every field degrades to a default instead of
//! failing.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::ProductRecord;

use super::types::{Chemistry, InputVoltage, ParsedSpec, Phase};

// First 2-3 digit number followed by a unit letter wins. Listings put the
// output rating in the name, so a stray number in the description rarely
// gets the chance to shadow it.
static VOLTAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2,3})v").expect("voltage pattern must be valid"));
static CURRENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2,3})a").expect("current pattern must be valid"));

// Green2/Green4 are the single-phase models of the Green line; Green6,
// Green8 and GreenX take three-phase input.
const SINGLE_PHASE_TOKENS: &[&str] = &["single", "1p", "green2", "green4"];
const THREE_PHASE_TOKENS: &[&str] = &["three", "3p", "green6", "green8", "greenx"];

const LEAD_ACID_TOKENS: &[&str] = &["lead", "agm", "flooded"];
const LITHIUM_TOKENS: &[&str] = &["lithium", "li-ion"];

/// Extract charger specs from a product's name, description and slug.
///
/// Total function: any product yields a `ParsedSpec`, with `None`/`Unknown`/
/// default values where the text gave nothing away.
pub fn parse_charger_specs(product: &ProductRecord) -> ParsedSpec {
    let text = format!(
        "{} {} {}",
        product.name, product.description, product.slug
    )
    .to_lowercase();

    let phase = infer_phase(&text);
    let (chemistries, chemistry_inferred) = infer_chemistries(&text);
    let input_voltages = infer_input_voltages(&text, phase);

    ParsedSpec {
        voltage: first_number(&VOLTAGE_RE, &text),
        current_amps: first_number(&CURRENT_RE, &text),
        phase,
        chemistries,
        chemistry_inferred,
        input_voltages,
    }
}

/// Charger specs with backfilled catalog columns taking precedence over
/// text parsing. Text parsing is the fallback source for any field the
/// catalog has not been backfilled with.
pub fn effective_specs(product: &ProductRecord) -> ParsedSpec {
    let mut specs = parse_charger_specs(product);

    if let Some(voltage) = product.voltage {
        specs.voltage = Some(voltage);
    }
    if let Some(current) = product.current_amps {
        specs.current_amps = Some(current);
    }
    if let Some(phase) = product.phase {
        specs.phase = phase;
    }
    if let Some(chemistries) = &product.chemistries {
        if !chemistries.is_empty() {
            specs.chemistries = chemistries.clone();
            specs.chemistry_inferred = false;
        }
    }

    specs
}

fn first_number(re: &Regex, text: &str) -> Option<u16> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn infer_phase(text: &str) -> Phase {
    if SINGLE_PHASE_TOKENS.iter().any(|t| text.contains(t)) {
        Phase::Single
    } else if THREE_PHASE_TOKENS.iter().any(|t| text.contains(t)) {
        Phase::Three
    } else {
        Phase::Unknown
    }
}

fn infer_chemistries(text: &str) -> (Vec<Chemistry>, bool) {
    let mut chemistries = Vec::new();

    if LEAD_ACID_TOKENS.iter().any(|t| text.contains(t)) {
        chemistries.push(Chemistry::LeadAcid);
        chemistries.push(Chemistry::Agm);
    }
    if LITHIUM_TOKENS.iter().any(|t| text.contains(t)) {
        chemistries.push(Chemistry::Lithium);
    }

    if chemistries.is_empty() {
        // Unstated chemistry: industrial chargers default to the lead-acid
        // family, but the scorer must know this was inferred, not stated.
        (vec![Chemistry::LeadAcid, Chemistry::Agm], true)
    } else {
        (chemistries, false)
    }
}

fn infer_input_voltages(text: &str, phase: Phase) -> Vec<InputVoltage> {
    let mut options = Vec::new();

    if text.contains("208") || text.contains("240v") {
        options.push(InputVoltage::V208To240);
    }
    if text.contains("480") {
        options.push(InputVoltage::V480);
    }

    if options.is_empty() {
        match phase {
            Phase::Three => vec![InputVoltage::V480],
            Phase::Single | Phase::Unknown => vec![InputVoltage::V208To240],
        }
    } else {
        options
    }
}
