//! Charger recommendation engine.
//!
//! Scores every charger in a catalog slice against a battery requirement
//! using an explicit, TOML-loaded weight table, then partitions the sorted
//! candidates into qualified matches and suboptimal fallbacks with
//! human-readable reasons and warnings attached to each.
//!
//! # Example
//!
//! ```ignore
//! use chargescout::catalog::ProductRecord;
//! use chargescout::parser::Chemistry;
//! use chargescout::recommend::{
//!     format_summary, BatteryRequirement, ChargeTime, RecommendOptions, Recommender,
//! };
//!
//! let products: Vec<ProductRecord> = load_catalog();
//!
//! let requirement = BatteryRequirement {
//!     voltage: 24,
//!     amp_hours: 600.0,
//!     chemistry: Chemistry::LeadAcid,
//!     charge_time: ChargeTime::Overnight,
//!     input_phase: None,
//!     prefer_quick_ship: true,
//! };
//!
//! let recommender = Recommender::with_defaults();
//! let result = recommender.recommend(&products, &requirement, &RecommendOptions::default());
//! println!("{}", format_summary(&result));
//! ```

mod band;
mod engine;
mod summary;
mod types;
mod weights;

pub use band::CurrentBand;
pub use engine::Recommender;
pub use summary::format_summary;
pub use types::{
    BatteryRequirement, ChargeTime, ChargerMatch, Diagnostics, MatchTier, RecommendOptions,
    RecommendationResult,
};
pub use weights::{
    default_weights, load_weights, BonusWeights, ChemistryWeights, CurrentWeights, PhaseWeights,
    ScoringWeights, Thresholds, VoltageWeights,
};
