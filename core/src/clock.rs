//! Host clock. Turns wall-clock time into simulated years, with speed
//! control and pause.
//!
//! RULE: Paused wall-clock time never leaks into the next delta. Every
//! tick while paused, and every resume, re-baselines the last-tick instant.

use crate::{
    error::{SimError, SimResult},
    types::Year,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Time multiplier. 100x means one simulated year per real second.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct TimeSpeed(u32);

impl TimeSpeed {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 1000;

    pub fn new(speed: u32) -> SimResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&speed) {
            Ok(Self(speed))
        } else {
            Err(SimError::InvalidTimeSpeed { speed })
        }
    }

    pub fn get(&self) -> u32 { self.0 }

    pub fn years_for(&self, real_seconds: f64) -> Year {
        real_seconds * (self.0 as f64 / 100.0)
    }
}

impl Default for TimeSpeed {
    fn default() -> Self { Self(100) }
}

impl TryFrom<u32> for TimeSpeed {
    type Error = SimError;
    fn try_from(speed: u32) -> SimResult<Self> { Self::new(speed) }
}

impl From<TimeSpeed> for u32 {
    fn from(speed: TimeSpeed) -> u32 { speed.0 }
}

#[derive(Debug, Clone)]
pub struct SimClock {
    pub speed:  TimeSpeed,
    pub paused: bool,
    last_tick:  Instant,
}

impl SimClock {
    pub fn new(now: Instant, speed: TimeSpeed) -> Self {
        Self { speed, paused: false, last_tick: now }
    }

    /// Simulated years elapsed since the previous tick, or None while paused.
    /// A `now` earlier than the baseline counts as zero elapsed time.
    pub fn tick(&mut self, now: Instant) -> Option<Year> {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        if self.paused {
            return None;
        }
        Some(self.speed.years_for(elapsed.as_secs_f64()))
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.last_tick = now;
    }

    pub fn set_speed(&mut self, speed: TimeSpeed) {
        self.speed = speed;
    }
}
