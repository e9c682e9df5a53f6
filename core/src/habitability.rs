//! Habitability scoring and the naive time-to-habitable forecast.
//!
//! The score is four independent point buckets:
//!   temperature  30 / 15 / 0
//!   pressure     30 / 15 / 0
//!   oxygen       20 / 10 / 0
//!   water vapour 20 / 10 / 0

use crate::{
    atmosphere::AtmosphereState,
    history::HistoryLog,
    types::Year,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_SCORE: f64 = 100.0;

/// Score at or above which the planet counts as habitable.
pub const HABITABLE_SCORE: f64 = 95.0;

/// How many recent samples the forecast looks back over.
pub const FORECAST_WINDOW: usize = 10;

/// Forecasts beyond this many years are shown as unbounded.
pub const DISPLAY_HORIZON_YEARS: f64 = 10_000.0;

pub fn habitability_score(state: &AtmosphereState) -> f64 {
    let t = state.temperature;
    let temperature_points: f64 = if (-10.0..=30.0).contains(&t) {
        30.0
    } else if (t > -20.0 && t < -10.0) || (t > 30.0 && t < 40.0) {
        15.0
    } else {
        0.0
    };

    let pressure_points = if state.pressure >= 6.0 {
        30.0
    } else if state.pressure >= 3.0 {
        15.0
    } else {
        0.0
    };

    let oxygen_points = if state.oxygen_percentage >= 15.0 {
        20.0
    } else if state.oxygen_percentage >= 10.0 {
        10.0
    } else {
        0.0
    };

    let water_points = if state.water_vapor_percentage >= 1.0 {
        20.0
    } else if state.water_vapor_percentage >= 0.5 {
        10.0
    } else {
        0.0
    };

    (temperature_points + pressure_points + oxygen_points + water_points).min(MAX_SCORE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitabilityTier {
    Poor,
    Marginal,
    Good,
}

impl HabitabilityTier {
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            Self::Good
        } else if score > 40.0 {
            Self::Marginal
        } else {
            Self::Poor
        }
    }
}

/// Result of the linear forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "years", rename_all = "snake_case")]
pub enum YearsToHabitability {
    /// Whole years remaining (0 when already habitable).
    Years(f64),
    /// No upward trend to extrapolate.
    Infinite,
}

impl YearsToHabitability {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }
}

impl fmt::Display for YearsToHabitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Years(y) if y <= 0.0 => f.write_str("Habitable"),
            Self::Years(y) if y <= DISPLAY_HORIZON_YEARS => write!(f, "{y:.0}"),
            _ => f.write_str("∞"),
        }
    }
}

/// Linear extrapolation from the earliest of the last `FORECAST_WINDOW`
/// samples to the current score. Wrong under non-monotonic trends; that is
/// accepted.
pub fn estimate_years_to_habitability(
    state:   &AtmosphereState,
    history: &HistoryLog,
) -> YearsToHabitability {
    let current = habitability_score(state);
    if current >= HABITABLE_SCORE {
        return YearsToHabitability::Years(0.0);
    }

    if history.len() < 2 {
        return YearsToHabitability::Infinite;
    }
    let Some(baseline) = history.recent(FORECAST_WINDOW).next() else {
        return YearsToHabitability::Infinite;
    };

    let score_change = current - baseline.habitability;
    let years_elapsed: Year = state.year - baseline.year;
    if score_change <= 0.0 || years_elapsed <= 0.0 {
        return YearsToHabitability::Infinite;
    }

    let rate = score_change / years_elapsed;
    YearsToHabitability::Years(((MAX_SCORE - current) / rate).ceil())
}
