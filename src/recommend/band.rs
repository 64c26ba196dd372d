//! Charge-current band derivation from battery capacity.
//!
//! Lead-acid practice charges at roughly C/10 overnight and C/5 for fast
//! charging; the band allows 15% either side of that optimum, with a looser
//! outer band the scorer treats as "close enough to mention".

use serde::Serialize;

use super::types::ChargeTime;

/// C-rate per charge-time class.
const OVERNIGHT_C_RATE: f32 = 0.10;
const FAST_C_RATE: f32 = 0.20;

/// Tolerance either side of the optimal current.
const BAND_TOLERANCE: f32 = 0.15;

/// Loose-band factors applied outside the strict window.
const LOOSE_LOW_FACTOR: f32 = 0.8;
const LOOSE_HIGH_FACTOR: f32 = 1.2;

/// Acceptable charger output-current band for a battery, in amps.
///
/// Signed so a non-positive capacity degrades to a zero-or-negative band
/// (which no real charger current falls inside) instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentBand {
    pub min_amps: i32,
    pub max_amps: i32,
    pub optimal_amps: i32,
}

impl CurrentBand {
    /// Derive the band from capacity and charge-time class.
    pub fn for_requirement(amp_hours: f32, charge_time: ChargeTime) -> CurrentBand {
        let rate = match charge_time {
            ChargeTime::Overnight => OVERNIGHT_C_RATE,
            ChargeTime::Fast => FAST_C_RATE,
        };
        let optimal = (amp_hours * rate).round() as i32;
        CurrentBand {
            min_amps: (optimal as f32 * (1.0 - BAND_TOLERANCE)).round() as i32,
            max_amps: (optimal as f32 * (1.0 + BAND_TOLERANCE)).round() as i32,
            optimal_amps: optimal,
        }
    }

    /// Inside the strict band.
    pub fn contains(&self, amps: u16) -> bool {
        let amps = i32::from(amps);
        amps >= self.min_amps && amps <= self.max_amps
    }

    /// Inside the loose band.
    pub fn contains_loose(&self, amps: u16) -> bool {
        let amps = f32::from(amps);
        amps >= self.min_amps as f32 * LOOSE_LOW_FACTOR
            && amps <= self.max_amps as f32 * LOOSE_HIGH_FACTOR
    }
}
