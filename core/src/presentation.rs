//! Presentation values derived from raw state.
//!
//! RULE: Everything here is a pure function of the current state and is
//! recomputed on every read. Nothing is cached.

use crate::{
    atmosphere::{AtmosphereState, EARTH_PRESSURE},
    types::{Celsius, Percent},
};
use serde::{Deserialize, Serialize};

pub const MAX_CLOUD_OPACITY: f64 = 0.6;

/// Progress through the four visual surface stages, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureBlendFactors {
    pub mars_to_warming:       f64,
    pub warming_to_atmosphere: f64,
    pub atmosphere_to_ocean:   f64,
    pub ocean_to_terraformed:  f64,
}

/// Linear ramp from 0 at `from` to 1 at `to`, flat outside.
fn ramp(value: f64, from: f64, to: f64) -> f64 {
    if value < from {
        0.0
    } else if value < to {
        (value - from) / (to - from)
    } else {
        1.0
    }
}

pub fn texture_blend_factors(state: &AtmosphereState) -> TextureBlendFactors {
    let temp = state.temperature;
    let oxygen = state.oxygen_percentage;

    // Joint temperature/oxygen stage: both must clear their floor.
    let ocean_to_terraformed = if temp < 15.0 || oxygen < 5.0 {
        0.0
    } else if temp < 20.0 && oxygen < 15.0 {
        ((temp - 15.0) / 5.0).min(oxygen / 15.0)
    } else {
        (oxygen / 15.0).min(1.0)
    };

    TextureBlendFactors {
        mars_to_warming:       ramp(temp, -40.0, 0.0),
        warming_to_atmosphere: ramp(temp, 0.0, 10.0),
        atmosphere_to_ocean:   ramp(temp, 10.0, 15.0),
        ocean_to_terraformed,
    }
}

pub fn atmosphere_glow_intensity(state: &AtmosphereState) -> f64 {
    (state.pressure / 50.0).min(1.0)
}

pub fn cloud_opacity(state: &AtmosphereState) -> f64 {
    if state.water_vapor_percentage < 2.0 {
        return 0.0;
    }
    ((state.water_vapor_percentage - 2.0) / 10.0).min(MAX_CLOUD_OPACITY)
}

/// Progress toward Earth sea-level pressure, capped at 1.
pub fn earth_pressure_fraction(state: &AtmosphereState) -> f64 {
    (state.pressure / EARTH_PRESSURE).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    Frozen,
    Cold,
    Cool,
    Habitable,
    Hot,
}

impl TemperatureBand {
    pub fn from_celsius(temp: Celsius) -> Self {
        if temp < -40.0 {
            Self::Frozen
        } else if temp < 0.0 {
            Self::Cold
        } else if temp < 15.0 {
            Self::Cool
        } else if temp < 30.0 {
            Self::Habitable
        } else {
            Self::Hot
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Frozen    => "Frozen",
            Self::Cold      => "Cold",
            Self::Cool      => "Cool",
            Self::Habitable => "Habitable",
            Self::Hot       => "Hot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositionEntry {
    pub gas:     &'static str,
    pub percent: Percent,
}

/// Atmospheric breakdown in chart order, with the remainder as "Other".
pub fn composition(state: &AtmosphereState) -> [CompositionEntry; 6] {
    [
        CompositionEntry { gas: "CO2",   percent: state.co2_percentage },
        CompositionEntry { gas: "O2",    percent: state.oxygen_percentage },
        CompositionEntry { gas: "N2",    percent: state.nitrogen_percentage },
        CompositionEntry { gas: "H2O",   percent: state.water_vapor_percentage },
        CompositionEntry { gas: "Ar",    percent: state.argon_percentage },
        CompositionEntry { gas: "Other", percent: state.other_percentage() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_flat_outside_its_band() {
        assert_eq!(ramp(-50.0, -40.0, 0.0), 0.0);
        assert_eq!(ramp(-20.0, -40.0, 0.0), 0.5);
        assert_eq!(ramp(0.0, -40.0, 0.0), 1.0);
        assert_eq!(ramp(99.0, -40.0, 0.0), 1.0);
    }

    #[test]
    fn temperature_bands_follow_thresholds() {
        assert_eq!(TemperatureBand::from_celsius(-63.0), TemperatureBand::Frozen);
        assert_eq!(TemperatureBand::from_celsius(-40.0), TemperatureBand::Cold);
        assert_eq!(TemperatureBand::from_celsius(0.0), TemperatureBand::Cool);
        assert_eq!(TemperatureBand::from_celsius(15.0), TemperatureBand::Habitable);
        assert_eq!(TemperatureBand::from_celsius(30.0), TemperatureBand::Hot);
    }
}
