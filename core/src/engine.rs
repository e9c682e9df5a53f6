//! The terraforming engine: the heart of the simulator.
//!
//! EXECUTION ORDER inside update() (fixed, documented, never reordered):
//!   1. Advance the year
//!   2. Greenhouse forcing          (accumulated, not yet applied)
//!   3. Polar ice melt              (applied directly, above -40 °C)
//!   4. Greenhouse gas release      (applied directly + accumulated warming)
//!   5. Cyanobacteria               (applied directly, above -20 °C)
//!   6. Nitrogen import             (applied directly)
//!   7. Atmospheric stripping       (applied directly, unless shielded)
//!   8. Apply accumulated warming   (exactly once)
//!   9. Normalize gas percentages
//!  10. Clamp temperature and pressure
//!
//! Later steps read values earlier steps mutated in the same call, while
//! warming lands only at step 8. Keep this order: results depend on it.
//!
//! RULES:
//!   - update() is total. Every input is accepted; bounds are enforced by
//!     clamping, never by rejection.
//!   - A negative delta is not validated and runs the model backward.
//!   - The engine never samples history on its own. Callers decide the
//!     sampling cadence through record_history().

use crate::{
    atmosphere::AtmosphereState,
    habitability::{self, YearsToHabitability},
    history::{HistoryLog, HistorySample},
    intervention::{Intervention, Interventions},
    presentation::{self, TextureBlendFactors},
    snapshot::SimSnapshot,
    types::Year,
};

pub struct TerraformEngine {
    state:         AtmosphereState,
    interventions: Interventions,
    history:       HistoryLog,
}

impl Default for TerraformEngine {
    fn default() -> Self { Self::new() }
}

impl TerraformEngine {
    /// A fresh engine at present-day Mars with every intervention off.
    pub fn new() -> Self {
        Self::from_state(AtmosphereState::mars())
    }

    /// Start from an arbitrary state. Used by tests and tooling.
    pub fn from_state(state: AtmosphereState) -> Self {
        Self {
            state,
            interventions: Interventions::default(),
            history:       HistoryLog::new(),
        }
    }

    pub fn atmosphere(&self) -> &AtmosphereState { &self.state }

    pub fn interventions(&self) -> &Interventions { &self.interventions }

    pub fn history(&self) -> &HistoryLog { &self.history }

    pub fn year(&self) -> Year { self.state.year }

    /// Flip an intervention. Takes effect on the next update().
    pub fn set_intervention(&mut self, intervention: Intervention, enabled: bool) {
        if self.interventions.is_active(intervention) != enabled {
            log::info!(
                "year={:.2} intervention {intervention} -> {}",
                self.state.year,
                if enabled { "on" } else { "off" }
            );
        }
        self.interventions.set(intervention, enabled);
    }

    pub fn set_interventions(&mut self, interventions: Interventions) {
        for intervention in Intervention::ALL {
            self.set_intervention(intervention, interventions.is_active(intervention));
        }
    }

    /// Advance the model by `delta_years`.
    pub fn update(&mut self, delta_years: Year) {
        let flags = self.interventions;
        let s = &mut self.state;

        // 1. Time
        s.year += delta_years;

        // 2. Greenhouse forcing
        let greenhouse_forcing =
            (s.co2_percentage / 100.0) * 10.0 + (s.water_vapor_percentage / 100.0) * 15.0;
        let mut temp_change = greenhouse_forcing * 0.01 * delta_years;

        // 3. Polar ice melt
        if s.temperature > -40.0 {
            let mut melt_rate = (s.temperature + 40.0) * 0.001 * delta_years;
            if flags.melt_polar_ice_caps {
                melt_rate *= 3.0;
            }
            s.co2_percentage         += melt_rate * 0.5;
            s.water_vapor_percentage += melt_rate * 0.8;
            s.pressure               += melt_rate * 0.1;
        }

        // 4. Greenhouse gas release
        if flags.release_greenhouse_gases {
            s.co2_percentage += 0.1 * delta_years;
            s.pressure       += 0.05 * delta_years;
            temp_change      += 0.05 * delta_years;
        }

        // 5. Cyanobacteria
        if flags.deploy_cyanobacteria && s.temperature > -20.0 {
            let oxygen_production =
                0.001 * delta_years * ((s.temperature + 20.0) / 40.0).clamp(0.0, 1.0);
            s.oxygen_percentage += oxygen_production;
            s.co2_percentage    -= oxygen_production * 0.5;
        }

        // 6. Nitrogen import
        if flags.import_nitrogen {
            s.nitrogen_percentage += 0.5 * delta_years;
            s.pressure            += 0.2 * delta_years;
        }

        // 7. Atmospheric stripping by the solar wind
        if !flags.magnetic_shield && s.pressure > 1.0 {
            s.pressure -= 0.001 * delta_years;
        }

        // 8. Warming lands once
        s.temperature += temp_change;

        // 9. Normalize, 10. clamp
        s.normalize_percentages();
        s.clamp_to_bounds();

        log::debug!(
            "year={:.3} update dt={delta_years:.4}: temp={:.2} pressure={:.3}",
            s.year,
            s.temperature,
            s.pressure
        );
    }

    /// Append one history sample. The oldest is dropped past capacity.
    pub fn record_history(&mut self) {
        let sample = HistorySample::capture(&self.state);
        log::debug!(
            "year={:.3} sample: temp={:.2} pressure={:.3} o2={:.4} score={:.0}",
            sample.year,
            sample.temperature,
            sample.pressure,
            sample.oxygen,
            sample.habitability
        );
        self.history.push(sample);
    }

    pub fn habitability_score(&self) -> f64 {
        habitability::habitability_score(&self.state)
    }

    pub fn texture_blend_factors(&self) -> TextureBlendFactors {
        presentation::texture_blend_factors(&self.state)
    }

    pub fn atmosphere_glow_intensity(&self) -> f64 {
        presentation::atmosphere_glow_intensity(&self.state)
    }

    pub fn cloud_opacity(&self) -> f64 {
        presentation::cloud_opacity(&self.state)
    }

    pub fn estimate_years_to_habitability(&self) -> YearsToHabitability {
        habitability::estimate_years_to_habitability(&self.state, &self.history)
    }

    /// Owned projection of the current state plus every derived value.
    pub fn state(&self) -> SimSnapshot {
        let s = &self.state;
        SimSnapshot {
            year:                      s.year,
            temperature:               s.temperature,
            pressure:                  s.pressure,
            co2_percentage:            s.co2_percentage,
            oxygen_percentage:         s.oxygen_percentage,
            water_vapor_percentage:    s.water_vapor_percentage,
            nitrogen_percentage:       s.nitrogen_percentage,
            argon_percentage:          s.argon_percentage,
            habitability_score:        self.habitability_score(),
            texture_blend_factors:     self.texture_blend_factors(),
            atmosphere_glow_intensity: self.atmosphere_glow_intensity(),
            cloud_opacity:             self.cloud_opacity(),
            history:                   self.history.to_vec(),
        }
    }
}
