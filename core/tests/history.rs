//! History log: capacity, eviction order, windows and chart series.

use terraform_core::{
    engine::TerraformEngine,
    history::{ChartMetric, HistoryLog, HistorySample, HISTORY_CAPACITY},
    intervention::Intervention,
};

fn sample(year: f64) -> HistorySample {
    HistorySample {
        year,
        temperature: -year,
        pressure: year * 0.5,
        oxygen: 0.0,
        co2: 95.0,
        water_vapor: 0.1,
        habitability: 0.0,
    }
}

#[test]
fn log_is_capped_and_drops_oldest_first() {
    let mut log = HistoryLog::new();
    for i in 0..=HISTORY_CAPACITY {
        log.push(sample(i as f64));
    }

    assert_eq!(log.len(), HISTORY_CAPACITY);
    assert_eq!(log.oldest().unwrap().year, 1.0);
    assert_eq!(log.latest().unwrap().year, HISTORY_CAPACITY as f64);
}

#[test]
fn engine_history_never_exceeds_capacity() {
    let mut engine = TerraformEngine::new();
    engine.set_intervention(Intervention::ReleaseGreenhouseGases, true);
    for _ in 0..(HISTORY_CAPACITY + 137) {
        engine.update(0.25);
        engine.record_history();
        assert!(engine.history().len() <= HISTORY_CAPACITY);
    }

    // 137 samples were evicted; the first survivor is sample #138.
    let oldest = engine.history().oldest().unwrap();
    assert!((oldest.year - 138.0 * 0.25).abs() < 1e-9, "oldest year {}", oldest.year);
}

#[test]
fn recording_is_independent_of_updates() {
    let mut engine = TerraformEngine::new();
    engine.update(1.0);
    engine.update(1.0);
    assert!(engine.history().is_empty());

    engine.record_history();
    engine.record_history();
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.history().oldest(), engine.history().latest());
}

#[test]
fn samples_capture_the_tracked_fields() {
    let mut engine = TerraformEngine::new();
    engine.update(3.0);
    engine.record_history();

    let s = engine.atmosphere();
    let sample = engine.history().latest().unwrap();
    assert_eq!(sample.year, s.year);
    assert_eq!(sample.temperature, s.temperature);
    assert_eq!(sample.pressure, s.pressure);
    assert_eq!(sample.oxygen, s.oxygen_percentage);
    assert_eq!(sample.co2, s.co2_percentage);
    assert_eq!(sample.water_vapor, s.water_vapor_percentage);
    assert_eq!(sample.habitability, engine.habitability_score());
}

#[test]
fn recent_window_is_oldest_first() {
    let mut log = HistoryLog::new();
    for i in 0..20 {
        log.push(sample(i as f64));
    }

    let years: Vec<f64> = log.recent(3).map(|s| s.year).collect();
    assert_eq!(years, vec![17.0, 18.0, 19.0]);
    assert_eq!(log.recent(1_000).count(), 20);
}

#[test]
fn chart_series_floor_the_year() {
    let mut log = HistoryLog::new();
    log.push(sample(0.4));
    log.push(sample(1.9));

    let series = log.chart_series(ChartMetric::Pressure);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].year, 0);
    assert_eq!(series[1].year, 1);
    assert_eq!(series[1].value, 0.95);
    assert_eq!(ChartMetric::WaterVapor.label(), "Water Vapor (%)");
}

#[test]
fn loading_an_oversized_log_keeps_the_newest_samples() {
    let samples: Vec<HistorySample> = (0..600).map(|i| sample(i as f64)).collect();
    let json = serde_json::to_value(&samples).unwrap();

    let log: HistoryLog = serde_json::from_value(json).unwrap();

    assert_eq!(log.len(), HISTORY_CAPACITY);
    assert_eq!(log.oldest().unwrap().year, 100.0);
    assert_eq!(log.latest().unwrap().year, 599.0);
}

#[test]
fn log_serializes_as_a_plain_list() {
    let mut log = HistoryLog::new();
    log.push(sample(1.0));
    log.push(sample(2.0));

    let json = serde_json::to_value(&log).unwrap();
    assert_eq!(json.as_array().map(|a| a.len()), Some(2));
    assert_eq!(serde_json::from_value::<HistoryLog>(json).unwrap(), log);
}
