//! Simulation session: the host loop around the engine.
//!
//! One tick = clock delta → engine update → history sample. That pairing
//! is the reference cadence; history resolution follows the tick rate.

use crate::{
    clock::{SimClock, TimeSpeed},
    command::PlayerCommand,
    config::RunConfig,
    engine::TerraformEngine,
    error::SimResult,
    types::Year,
};
use std::time::{Duration, Instant};

pub struct SimSession {
    pub engine: TerraformEngine,
    pub clock:  SimClock,
    frame:      Duration,
}

impl SimSession {
    pub fn new(config: &RunConfig, now: Instant) -> SimResult<Self> {
        config.validate()?;
        let mut engine = TerraformEngine::new();
        engine.set_interventions(config.interventions);
        Ok(Self {
            engine,
            clock: SimClock::new(now, TimeSpeed::new(config.time_speed)?),
            frame: Duration::from_secs_f64(1.0 / config.frame_rate_hz as f64),
        })
    }

    /// Wall-clock spacing between host ticks.
    pub fn frame(&self) -> Duration { self.frame }

    /// Run one host tick at `now`. Returns the simulated years applied,
    /// or None if the clock is paused.
    pub fn tick(&mut self, now: Instant) -> Option<Year> {
        let delta_years = self.clock.tick(now)?;
        self.engine.update(delta_years);
        self.engine.record_history();
        Some(delta_years)
    }

    /// Drive `frames` synthetic ticks spaced one frame apart after `start`.
    /// Returns the instant of the last frame.
    pub fn run_frames(&mut self, start: Instant, frames: u64) -> Instant {
        let mut now = start;
        for _ in 0..frames {
            now += self.frame;
            self.tick(now);
        }
        now
    }

    /// Synthetic frames needed to cover `years` at the current speed.
    pub fn frames_for_years(&self, years: Year) -> u64 {
        let per_frame = self.clock.speed.years_for(self.frame.as_secs_f64());
        if years <= 0.0 || per_frame <= 0.0 {
            return 0;
        }
        (years / per_frame).ceil() as u64
    }

    pub fn apply(&mut self, command: &PlayerCommand, now: Instant) -> SimResult<()> {
        match command {
            PlayerCommand::Pause => {
                log::info!("year={:.2} paused", self.engine.year());
                self.clock.pause();
            }
            PlayerCommand::Resume => {
                log::info!("year={:.2} resumed", self.engine.year());
                self.clock.resume(now);
            }
            PlayerCommand::SetTimeSpeed { speed } => {
                let speed = TimeSpeed::new(*speed).inspect_err(|e| log::warn!("{e}"))?;
                log::info!("time speed -> {}x", speed.get());
                self.clock.set_speed(speed);
            }
            PlayerCommand::SetIntervention { intervention, enabled } => {
                self.engine.set_intervention(*intervention, *enabled);
            }
        }
        Ok(())
    }
}
