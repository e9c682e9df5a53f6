//! terraform-runner: headless runner for the terraforming model.
//!
//! Usage:
//!   terraform-runner --years 500 --speed 1000 --enable meltPolarIceCaps
//!   terraform-runner --config run.json --realtime
//!   terraform-runner --ipc-mode

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use terraform_core::{
    command::PlayerCommand,
    config::RunConfig,
    habitability::{HabitabilityTier, YearsToHabitability},
    history::ChartMetric,
    intervention::{Intervention, Interventions},
    presentation::{self, TemperatureBand},
    session::SimSession,
    snapshot::SimSnapshot,
};

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Tick { count: u64 },
    Command { command: PlayerCommand },
    Quit,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UiState {
    #[serde(flatten)]
    snapshot:               SimSnapshot,
    paused:                 bool,
    time_speed:             u32,
    interventions:          Interventions,
    temperature_band:       TemperatureBand,
    habitability_tier:      HabitabilityTier,
    years_to_habitability:  YearsToHabitability,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let realtime = args.iter().any(|a| a == "--realtime");

    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => RunConfig::load(&w[1])?,
        None => RunConfig::default(),
    };
    config.time_speed = parse_arg(&args, "--speed", config.time_speed);
    config.duration_years = parse_arg(&args, "--years", config.duration_years);
    for key in args.windows(2).filter(|w| w[0] == "--enable").map(|w| w[1].as_str()) {
        let intervention: Intervention = key.parse()?;
        config.interventions.set(intervention, true);
    }
    config.validate()?;

    let run_id = format!("terraform-{}", chrono::Utc::now().format("%Y%m%dT%H%M%S"));
    let start = Instant::now();
    let mut session = SimSession::new(&config, start)?;

    if ipc_mode {
        return run_ipc_loop(&mut session, start);
    }

    println!("Mars Terraforming: runner");
    println!("  run_id:     {run_id}");
    println!("  years:      {}", config.duration_years);
    println!("  speed:      {}x", config.time_speed);
    println!("  frame rate: {} Hz", config.frame_rate_hz);
    if config.interventions.active().next().is_none() {
        println!("  active:     none");
    }
    for intervention in config.interventions.active() {
        println!("  + {}: {}", intervention.label(), intervention.description());
    }
    println!();

    if realtime {
        run_realtime(&mut session, config.duration_years);
    } else {
        let frames = session.frames_for_years(config.duration_years);
        session.run_frames(start, frames);
    }

    print_summary(&session);
    Ok(())
}

/// Tick against the real clock until the run length is covered,
/// printing a status line roughly once per real second.
fn run_realtime(session: &mut SimSession, duration_years: f64) {
    let mut last_report = Instant::now();
    session.clock.resume(last_report);
    while session.engine.year() < duration_years {
        std::thread::sleep(session.frame());
        let now = Instant::now();
        session.tick(now);
        if now.duration_since(last_report).as_secs() >= 1 {
            last_report = now;
            let s = session.engine.atmosphere();
            println!(
                "  year {:>6.0} | {:>7.2} °C | {:>7.3} kPa | score {:>3.0}",
                s.year.floor(),
                s.temperature,
                s.pressure,
                session.engine.habitability_score()
            );
        }
    }
}

fn run_ipc_loop(session: &mut SimSession, start: Instant) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    // Synthetic clock: IPC ticks advance in whole frames, not wall time.
    let mut now = start;

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Tick { count } => {
                now = session.run_frames(now, count);
            }
            IpcCommand::GetState => {}
            IpcCommand::Command { command } => {
                if let Err(e) = session.apply(&command, now) {
                    let err_json = serde_json::json!({ "error": e.to_string() });
                    writeln!(stdout, "{}", err_json)?;
                    stdout.flush()?;
                    continue;
                }
            }
        }
        writeln!(stdout, "{}", serde_json::to_string(&build_ui_state(session))?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(session: &SimSession) -> UiState {
    let engine = &session.engine;
    let snapshot = engine.state();
    UiState {
        paused:                session.clock.paused,
        time_speed:            session.clock.speed.get(),
        interventions:         *engine.interventions(),
        temperature_band:      TemperatureBand::from_celsius(snapshot.temperature),
        habitability_tier:     HabitabilityTier::from_score(snapshot.habitability_score),
        years_to_habitability: engine.estimate_years_to_habitability(),
        snapshot,
    }
}

fn print_summary(session: &SimSession) {
    let engine = &session.engine;
    let s = engine.atmosphere();
    let score = engine.habitability_score();
    let blend = engine.texture_blend_factors();

    println!("=== RUN SUMMARY ===");
    println!("  final year:     {:.0}", s.year.floor());
    println!(
        "  temperature:    {:.1} °C ({})",
        s.temperature,
        TemperatureBand::from_celsius(s.temperature).label()
    );
    println!(
        "  pressure:       {:.2} kPa ({:.1}% of Earth)",
        s.pressure,
        presentation::earth_pressure_fraction(s) * 100.0
    );
    println!("  habitability:   {score:.0}% ({:?})", HabitabilityTier::from_score(score));
    println!("  est. years:     {}", engine.estimate_years_to_habitability());
    println!("  glow / clouds:  {:.2} / {:.2}", engine.atmosphere_glow_intensity(), engine.cloud_opacity());
    println!(
        "  surface blend:  warming {:.2} | atmosphere {:.2} | ocean {:.2} | terraformed {:.2}",
        blend.mars_to_warming,
        blend.warming_to_atmosphere,
        blend.atmosphere_to_ocean,
        blend.ocean_to_terraformed
    );

    println!();
    println!("=== COMPOSITION ===");
    for entry in presentation::composition(s) {
        println!("  {:<6} {:>8.3}%", entry.gas, entry.percent);
    }

    println!();
    println!("=== TREND (last {} samples) ===", engine.history().len());
    for metric in [ChartMetric::Temperature, ChartMetric::Pressure, ChartMetric::Oxygen] {
        let series = engine.history().chart_series(metric);
        match (series.first(), series.last()) {
            (Some(first), Some(last)) => println!(
                "  {:<18} year {:>6}: {:>9.3} -> year {:>6}: {:>9.3}",
                metric.label(), first.year, first.value, last.year, last.value
            ),
            _ => println!("  {:<18} (no samples)", metric.label()),
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
