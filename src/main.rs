use std::env;
use std::fs;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use ascent_sim::dynamics::state::LaunchConfig;
use ascent_sim::io::csv::write_flight_data_file;
use ascent_sim::io::FlightSummary;
use ascent_sim::sim::simulate;
use ascent_sim::track;
use ascent_sim::vehicle::{presets, stage_stats, RocketDesign, StagePerf};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Usage: ascent-sim [design.json] [flight.csv]
    let args: Vec<String> = env::args().collect();

    let design: RocketDesign = match args.get(1) {
        Some(path) => {
            let text = match fs::read_to_string(path) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("cannot read design file '{path}': {e}");
                    return ExitCode::FAILURE;
                }
            };
            match serde_json::from_str(&text) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("invalid design file '{path}': {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => presets::pathfinder(),
    };

    let launch = LaunchConfig::default();

    // -----------------------------------------------------------------------
    // Closed-form stage stats (no integration)
    // -----------------------------------------------------------------------
    let stats = stage_stats(&design);

    println!();
    println!("====================================================================");
    println!("  ASCENT SIMULATION — {}", design.name);
    println!("====================================================================");
    println!();
    println!("  Stage Performance");
    println!("  ──────────────────────────────────────────────────────────────────");
    for s in &stats {
        println!("  {}", s.stage);
        print_perf("individual", &s.individual);
        print_perf("stacked", &s.stacked);
    }
    println!();

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let flight = match simulate(&design, &launch) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("invalid design: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for e in &flight.events {
        println!(
            "  {:<26} t={:>7.1}s   alt={:>9.0}m   vel={:>7.1}m/s",
            format!("{:?}", e.kind),
            e.time,
            e.altitude,
            e.velocity
        );
    }
    println!();

    let summary = FlightSummary::from_flight(&flight);
    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Apogee:        {:>10.0} m   at t={:.1} s",
        summary.apogee_m, summary.apogee_time
    );
    println!("  Max velocity:  {:>10.1} m/s", summary.max_velocity);
    println!("  Downrange:     {:>10.0} m", summary.downrange_m);
    println!("  Flight time:   {:>10.1} s", summary.flight_time);
    println!();

    let tracks = track::project_flight(&flight.records, &launch);
    let site = track::launch_site(&launch);
    println!(
        "  Trajectories:  {} polyline(s) from {} ({:.4}, {:.4})",
        tracks.len(),
        site.label,
        site.lat,
        site.lng
    );
    println!(
        "  Simulation:    {} steps, dt={} s",
        flight.records.len(),
        launch.timestep
    );
    println!("====================================================================");
    println!();

    if let Some(path) = args.get(2) {
        if let Err(e) = write_flight_data_file(path, &flight.records) {
            eprintln!("cannot write '{path}': {e}");
            return ExitCode::FAILURE;
        }
        println!("  Flight data written to {path}");
    }

    ExitCode::SUCCESS
}

fn print_perf(label: &str, p: &StagePerf) {
    println!(
        "    {:<11} mass={:>9.0} kg   dry={:>9.0} kg   thrust={}   burn={}   dv={:>6.0} m/s",
        label,
        p.total_mass,
        p.dry_mass,
        p.total_thrust
            .map_or_else(|| "      —".into(), |t| format!("{:>7.0}", t)),
        p.burn_time
            .map_or_else(|| "     —".into(), |t| format!("{:>6.1}", t)),
        p.delta_v
    );
}
