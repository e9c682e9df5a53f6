//! Planetary state: the scalar variables the engine advances.

use crate::types::{Celsius, KiloPascal, Percent, Year};
use serde::{Deserialize, Serialize};

pub const MIN_TEMPERATURE: Celsius = -100.0;
pub const MAX_TEMPERATURE: Celsius = 50.0;
pub const MIN_PRESSURE: KiloPascal = 0.1;
pub const MAX_PRESSURE: KiloPascal = 150.0;

/// Sea-level pressure on Earth, the long-term pressure target.
pub const EARTH_PRESSURE: KiloPascal = 101.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphereState {
    pub year:                   Year,
    pub temperature:            Celsius,
    pub pressure:               KiloPascal,
    pub co2_percentage:         Percent,
    pub oxygen_percentage:      Percent,
    pub water_vapor_percentage: Percent,
    pub nitrogen_percentage:    Percent,
    pub argon_percentage:       Percent,
}

impl Default for AtmosphereState {
    fn default() -> Self {
        Self::mars()
    }
}

impl AtmosphereState {
    /// Present-day Mars. Note the gases sum to 100.045%, so the first
    /// update always applies a small proportional rescale.
    pub fn mars() -> Self {
        Self {
            year:                   0.0,
            temperature:            -63.0,
            pressure:               0.61,
            co2_percentage:         96.0,
            oxygen_percentage:      0.145,
            water_vapor_percentage: 0.1,
            nitrogen_percentage:    1.9,
            argon_percentage:       1.9,
        }
    }

    pub fn total_percentage(&self) -> Percent {
        self.co2_percentage
            + self.oxygen_percentage
            + self.water_vapor_percentage
            + self.nitrogen_percentage
            + self.argon_percentage
    }

    /// Unaccounted share of the atmosphere. Never negative.
    pub fn other_percentage(&self) -> Percent {
        (100.0 - self.total_percentage()).max(0.0)
    }

    /// Shrink all five gases by the same factor when they exceed 100%.
    /// A total under 100% is left alone.
    pub fn normalize_percentages(&mut self) {
        let total = self.total_percentage();
        if total > 100.0 {
            let scale = 100.0 / total;
            self.co2_percentage         *= scale;
            self.oxygen_percentage      *= scale;
            self.water_vapor_percentage *= scale;
            self.nitrogen_percentage    *= scale;
            self.argon_percentage       *= scale;
        }
    }

    pub fn clamp_to_bounds(&mut self) {
        self.temperature = self.temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
        self.pressure = self.pressure.clamp(MIN_PRESSURE, MAX_PRESSURE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_preserves_ratios_when_over_budget() {
        let mut state = AtmosphereState {
            co2_percentage: 100.0,
            oxygen_percentage: 50.0,
            water_vapor_percentage: 25.0,
            nitrogen_percentage: 15.0,
            argon_percentage: 10.0,
            ..AtmosphereState::mars()
        };
        state.normalize_percentages();
        assert!((state.total_percentage() - 100.0).abs() < 1e-9);
        assert!((state.co2_percentage / state.oxygen_percentage - 2.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_never_grows_a_thin_atmosphere() {
        let mut state = AtmosphereState {
            co2_percentage: 10.0,
            oxygen_percentage: 0.0,
            water_vapor_percentage: 0.0,
            nitrogen_percentage: 0.0,
            argon_percentage: 0.0,
            ..AtmosphereState::mars()
        };
        state.normalize_percentages();
        assert_eq!(state.co2_percentage, 10.0);
        assert_eq!(state.other_percentage(), 90.0);
    }
}
