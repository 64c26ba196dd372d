//! chargescout: battery-charger recommendation engine for industrial
//! battery catalogs.
//!
//! The pipeline is pure and synchronous: catalog rows plus a battery
//! requirement go in, scored and partitioned recommendations come out.
//! Nothing here performs I/O except the optional SQLite [`catalog`] store,
//! which callers use to keep a local copy of the product table.

pub mod catalog;
pub mod error;
pub mod parser;
pub mod recommend;

pub use catalog::{CatalogSearchMatch, CatalogStore, ProductRecord};
pub use error::ChargeScoutError;
pub use parser::{
    effective_specs, generate_filter_options, parse_charger_specs, Chemistry, FilterOptions,
    InputVoltage, ParsedSpec, Phase,
};
pub use recommend::{
    default_weights, format_summary, load_weights, BatteryRequirement, ChargeTime, ChargerMatch,
    CurrentBand, Diagnostics, MatchTier, RecommendOptions, RecommendationResult, Recommender,
    ScoringWeights,
};
