//! Charger spec parsing and filter facet aggregation.
//!
//! Catalog rows arrive as mostly free text; this module turns them into
//! structured [`ParsedSpec`] values the scoring engine can work with, and
//! aggregates specs across the catalog into browse-page filter facets.
//!
//! Backfilled catalog columns always win over text parsing; see
//! [`effective_specs`].

mod filters;
mod specs;
mod types;

pub use filters::{generate_filter_options, FilterOptions};
pub use specs::{effective_specs, parse_charger_specs};
pub use types::{Chemistry, InputVoltage, ParsedSpec, Phase};
