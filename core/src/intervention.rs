//! Terraforming interventions: the five player-controlled toggles.
//!
//! RULE: The engine only ever reads these flags. They are flipped by the
//! host between updates and take effect on the next update.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A single terraforming action the host may enable.
/// Variants are listed in control-panel order, never reordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Intervention {
    ReleaseGreenhouseGases,
    DeployCyanobacteria,
    MeltPolarIceCaps,
    MagneticShield,
    ImportNitrogen,
}

impl Intervention {
    pub const ALL: [Intervention; 5] = [
        Self::ReleaseGreenhouseGases,
        Self::DeployCyanobacteria,
        Self::MeltPolarIceCaps,
        Self::MagneticShield,
        Self::ImportNitrogen,
    ];

    /// Stable key used in state output, config files and host commands.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ReleaseGreenhouseGases => "releaseGreenhouseGases",
            Self::DeployCyanobacteria    => "deployCyanobacteria",
            Self::MeltPolarIceCaps       => "meltPolarIceCaps",
            Self::MagneticShield         => "magneticShield",
            Self::ImportNitrogen         => "importNitrogen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ReleaseGreenhouseGases => "Release Greenhouse Gases",
            Self::DeployCyanobacteria    => "Deploy Cyanobacteria",
            Self::MeltPolarIceCaps       => "Melt Polar Ice Caps",
            Self::MagneticShield         => "Install Magnetic Shield",
            Self::ImportNitrogen         => "Import Nitrogen",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ReleaseGreenhouseGases => "Actively add CO2 and CFCs to warm the atmosphere",
            Self::DeployCyanobacteria    => "Seed photosynthetic bacteria to produce oxygen",
            Self::MeltPolarIceCaps       => "Accelerate ice melting with orbital mirrors",
            Self::MagneticShield         => "Prevent solar wind from stripping atmosphere",
            Self::ImportNitrogen         => "Redirect asteroids to add nitrogen",
        }
    }
}

impl fmt::Display for Intervention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Intervention {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        Self::ALL
            .into_iter()
            .find(|i| i.key() == s)
            .ok_or_else(|| SimError::UnknownIntervention { key: s.to_string() })
    }
}

/// The full flag set. All flags default to off.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Interventions {
    pub release_greenhouse_gases: bool,
    pub deploy_cyanobacteria:     bool,
    pub melt_polar_ice_caps:      bool,
    pub magnetic_shield:          bool,
    pub import_nitrogen:          bool,
}

impl Interventions {
    pub fn is_active(&self, intervention: Intervention) -> bool {
        match intervention {
            Intervention::ReleaseGreenhouseGases => self.release_greenhouse_gases,
            Intervention::DeployCyanobacteria    => self.deploy_cyanobacteria,
            Intervention::MeltPolarIceCaps       => self.melt_polar_ice_caps,
            Intervention::MagneticShield         => self.magnetic_shield,
            Intervention::ImportNitrogen         => self.import_nitrogen,
        }
    }

    pub fn set(&mut self, intervention: Intervention, enabled: bool) {
        let flag = match intervention {
            Intervention::ReleaseGreenhouseGases => &mut self.release_greenhouse_gases,
            Intervention::DeployCyanobacteria    => &mut self.deploy_cyanobacteria,
            Intervention::MeltPolarIceCaps       => &mut self.melt_polar_ice_caps,
            Intervention::MagneticShield         => &mut self.magnetic_shield,
            Intervention::ImportNitrogen         => &mut self.import_nitrogen,
        };
        *flag = enabled;
    }

    /// Flip a flag. Returns the new value.
    pub fn toggle(&mut self, intervention: Intervention) -> bool {
        let enabled = !self.is_active(intervention);
        self.set(intervention, enabled);
        enabled
    }

    /// Active interventions, in control-panel order.
    pub fn active(&self) -> impl Iterator<Item = Intervention> + '_ {
        Intervention::ALL.into_iter().filter(|i| self.is_active(*i))
    }
}
