//! Bounded history log: the samples behind trend charts and the forecast.
//!
//! RULE: At most HISTORY_CAPACITY samples are kept. When a push would
//! exceed it, the oldest sample is dropped first.

use crate::{
    atmosphere::AtmosphereState,
    habitability::habitability_score,
    types::Year,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 500;

/// One sample of the seven tracked fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySample {
    pub year:         Year,
    pub temperature:  f64,
    pub pressure:     f64,
    pub oxygen:       f64,
    pub co2:          f64,
    pub water_vapor:  f64,
    pub habitability: f64,
}

impl HistorySample {
    pub fn capture(state: &AtmosphereState) -> Self {
        Self {
            year:         state.year,
            temperature:  state.temperature,
            pressure:     state.pressure,
            oxygen:       state.oxygen_percentage,
            co2:          state.co2_percentage,
            water_vapor:  state.water_vapor_percentage,
            habitability: habitability_score(state),
        }
    }

    pub fn metric(&self, metric: ChartMetric) -> f64 {
        match metric {
            ChartMetric::Temperature => self.temperature,
            ChartMetric::Pressure    => self.pressure,
            ChartMetric::Oxygen      => self.oxygen,
            ChartMetric::Co2         => self.co2,
            ChartMetric::WaterVapor  => self.water_vapor,
        }
    }
}

/// Series the trend charts plot against whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    Temperature,
    Pressure,
    Oxygen,
    Co2,
    WaterVapor,
}

impl ChartMetric {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°C)",
            Self::Pressure    => "Pressure (kPa)",
            Self::Oxygen      => "Oxygen (%)",
            Self::Co2         => "CO2 (%)",
            Self::WaterVapor  => "Water Vapor (%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub year:  i64,
    pub value: f64,
}

/// Serialized as a plain list. Loading goes through push(), so an
/// oversized list keeps only its newest HISTORY_CAPACITY samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<HistorySample>", into = "Vec<HistorySample>")]
pub struct HistoryLog {
    samples: VecDeque<HistorySample>,
}

impl From<Vec<HistorySample>> for HistoryLog {
    fn from(samples: Vec<HistorySample>) -> Self {
        let mut log = Self::new();
        for sample in samples {
            log.push(sample);
        }
        log
    }
}

impl From<HistoryLog> for Vec<HistorySample> {
    fn from(log: HistoryLog) -> Self {
        log.samples.into()
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self { samples: VecDeque::with_capacity(HISTORY_CAPACITY + 1) }
    }

    pub fn push(&mut self, sample: HistorySample) {
        self.samples.push_back(sample);
        if self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn oldest(&self) -> Option<&HistorySample> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&HistorySample> {
        self.samples.back()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistorySample> {
        self.samples.iter()
    }

    /// The last `n` samples, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistorySample> {
        self.samples.iter().skip(self.samples.len().saturating_sub(n))
    }

    pub fn chart_series(&self, metric: ChartMetric) -> Vec<ChartPoint> {
        self.samples
            .iter()
            .map(|s| ChartPoint { year: s.year.floor() as i64, value: s.metric(metric) })
            .collect()
    }

    pub fn to_vec(&self) -> Vec<HistorySample> {
        self.samples.iter().copied().collect()
    }
}
