//! State snapshot: the read surface handed to renderers, charts and the
//! runner's IPC stream.
//!
//! A snapshot is an owned copy. Later updates never reach into a snapshot
//! that has already been handed out.

use crate::{
    history::HistorySample,
    presentation::TextureBlendFactors,
    types::{Celsius, KiloPascal, Percent, Year},
};
use serde::{Deserialize, Serialize};

/// Field names and units are the downstream contract. Do not rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimSnapshot {
    pub year:                      Year,
    pub temperature:               Celsius,
    pub pressure:                  KiloPascal,
    pub co2_percentage:            Percent,
    pub oxygen_percentage:         Percent,
    pub water_vapor_percentage:    Percent,
    pub nitrogen_percentage:       Percent,
    pub argon_percentage:          Percent,
    pub habitability_score:        f64,
    pub texture_blend_factors:     TextureBlendFactors,
    pub atmosphere_glow_intensity: f64,
    pub cloud_opacity:             f64,
    pub history:                   Vec<HistorySample>,
}

impl SimSnapshot {
    pub fn to_json(&self) -> crate::error::SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
