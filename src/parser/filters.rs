//! Filter facet aggregation across a product catalog.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::ProductRecord;

use super::specs::effective_specs;
use super::types::Phase;

/// Discrete filter facets for a catalog browse page: each list is the set
/// of distinct values observed across the catalog, sorted ascending
/// (numeric for voltages and currents, lexicographic for the labels).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub voltages: Vec<u16>,
    pub current_amps: Vec<u16>,
    pub phases: Vec<String>,
    pub chemistries: Vec<String>,
}

/// Aggregate parsed specs across the catalog into filter facets.
///
/// A product whose specs all come back empty contributes nothing to any
/// facet; there is no partial-failure mode.
pub fn generate_filter_options(products: &[ProductRecord]) -> FilterOptions {
    let mut voltages = BTreeSet::new();
    let mut current_amps = BTreeSet::new();
    let mut phases = BTreeSet::new();
    let mut chemistries = BTreeSet::new();

    for product in products {
        let specs = effective_specs(product);

        if let Some(voltage) = specs.voltage {
            voltages.insert(voltage);
        }
        if let Some(current) = specs.current_amps {
            current_amps.insert(current);
        }
        if specs.phase != Phase::Unknown {
            phases.insert(specs.phase.label().to_string());
        }
        for chemistry in &specs.chemistries {
            chemistries.insert(chemistry.label().to_string());
        }
    }

    FilterOptions {
        voltages: voltages.into_iter().collect(),
        current_amps: current_amps.into_iter().collect(),
        phases: phases.into_iter().collect(),
        chemistries: chemistries.into_iter().collect(),
    }
}
