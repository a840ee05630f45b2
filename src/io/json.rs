use std::io::{self, Write};

use serde::Serialize;

use crate::sim::{EventKind, FlightData};
use crate::vehicle::{RocketDesign, StageStats};

/// Summary statistics computed from a finished flight.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub apogee_m: f64,
    pub apogee_time: f64,
    pub max_velocity: f64,
    pub final_burnout_time: Option<f64>,
    pub downrange_m: f64,
    pub flight_time: f64,
}

impl FlightSummary {
    /// Compute summary figures from the flight records and events.
    pub fn from_flight(flight: &FlightData) -> Self {
        let apogee = flight
            .records
            .iter()
            .max_by(|a, b| a.altitude.partial_cmp(&b.altitude).unwrap())
            .expect("a flight always has at least the liftoff record");

        let max_velocity = flight
            .records
            .iter()
            .map(|r| r.velocity)
            .fold(0.0_f64, f64::max);

        let final_burnout_time = flight
            .events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Burnout { .. }))
            .map(|e| e.time)
            .next_back();

        let last = flight.records.last().unwrap();

        FlightSummary {
            apogee_m: apogee.altitude,
            apogee_time: apogee.time_elapsed,
            max_velocity,
            final_burnout_time,
            downrange_m: last.east,
            flight_time: last.time_elapsed,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    design: &'a str,
    stages: usize,
    stats: &'a [StageStats],
    summary: &'a FlightSummary,
}

/// Write the performance report (design, per-stage stats, flight summary)
/// as JSON.
pub fn write_report<W: Write>(
    writer: &mut W,
    design: &RocketDesign,
    stats: &[StageStats],
    summary: &FlightSummary,
) -> io::Result<()> {
    let report = Report {
        design: &design.name,
        stages: design.stages.len(),
        stats,
        summary,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)
}
