//! The state snapshot is the downstream contract: names, units, ownership.

use terraform_core::{engine::TerraformEngine, intervention::Intervention};

#[test]
fn snapshot_uses_the_published_field_names() {
    let mut engine = TerraformEngine::new();
    engine.update(1.0);
    engine.record_history();

    let json: serde_json::Value =
        serde_json::from_str(&engine.state().to_json().unwrap()).unwrap();

    for key in [
        "year",
        "temperature",
        "pressure",
        "co2Percentage",
        "oxygenPercentage",
        "waterVaporPercentage",
        "nitrogenPercentage",
        "argonPercentage",
        "habitabilityScore",
        "textureBlendFactors",
        "atmosphereGlowIntensity",
        "cloudOpacity",
        "history",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    for key in ["marsToWarming", "warmingToAtmosphere", "atmosphereToOcean", "oceanToTerraformed"] {
        assert!(json["textureBlendFactors"].get(key).is_some(), "missing blend key {key}");
    }
    for key in ["year", "temperature", "pressure", "oxygen", "co2", "waterVapor", "habitability"] {
        assert!(json["history"][0].get(key).is_some(), "missing history key {key}");
    }
}

#[test]
fn snapshot_matches_engine_reads() {
    let mut engine = TerraformEngine::new();
    engine.set_intervention(Intervention::ReleaseGreenhouseGases, true);
    engine.update(10.0);

    let snapshot = engine.state();
    assert_eq!(snapshot.temperature, engine.atmosphere().temperature);
    assert_eq!(snapshot.habitability_score, engine.habitability_score());
    assert_eq!(snapshot.texture_blend_factors, engine.texture_blend_factors());
    assert_eq!(snapshot.atmosphere_glow_intensity, engine.atmosphere_glow_intensity());
    assert_eq!(snapshot.cloud_opacity, engine.cloud_opacity());
}

#[test]
fn issued_snapshots_do_not_observe_later_updates() {
    let mut engine = TerraformEngine::new();
    engine.update(1.0);
    engine.record_history();

    let snapshot = engine.state();
    let frozen = snapshot.clone();

    for _ in 0..10 {
        engine.update(5.0);
        engine.record_history();
    }

    assert_eq!(snapshot, frozen);
    assert_eq!(snapshot.history.len(), 1);
    assert_ne!(engine.state().year, snapshot.year);
}
