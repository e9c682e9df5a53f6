//! Run configuration for the host loop.
//!
//! Only host-side knobs live here: time speed, tick cadence, run length and
//! the starting intervention flags. The model's own coefficients are fixed.

use crate::{
    clock::TimeSpeed,
    error::{SimError, SimResult},
    intervention::Interventions,
    types::Year,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Multiplier, 1..=1000. 100 = one simulated year per real second.
    pub time_speed:     u32,
    /// Host ticks per real second.
    pub frame_rate_hz:  u32,
    /// Simulated years a headless run covers.
    pub duration_years: Year,
    pub interventions:  Interventions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            time_speed:     100,
            frame_rate_hz:  60,
            duration_years: 100.0,
            interventions:  Interventions::default(),
        }
    }
}

impl RunConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        TimeSpeed::new(self.time_speed)?;
        if self.frame_rate_hz == 0 {
            return Err(SimError::InvalidFrameRate { hz: self.frame_rate_hz });
        }
        Ok(())
    }
}
