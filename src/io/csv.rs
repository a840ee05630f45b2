use std::io::{self, Write};

use crate::sim::FlightRecord;

/// Write the flight time series as CSV for charting.
///
/// Columns: stage, time, twr, mass, velocity, altitude, east, drag, gravity
pub fn write_flight_data<W: Write>(writer: &mut W, records: &[FlightRecord]) -> io::Result<()> {
    writeln!(writer, "stage,time,twr,mass,velocity,altitude,east,drag,gravity")?;

    for r in records {
        writeln!(
            writer,
            "{},{:.2},{:.4},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            r.stage_id,
            r.time_elapsed,
            r.twr,
            r.mass,
            r.velocity,
            r.altitude,
            r.east,
            r.drag,
            r.gravity_force,
        )?;
    }

    Ok(())
}

/// Write the flight time series to a CSV file at the given path.
pub fn write_flight_data_file(path: &str, records: &[FlightRecord]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_flight_data(&mut file, records)
}
