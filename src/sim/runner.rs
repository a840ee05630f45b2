use nalgebra::Vector2;
use serde::Serialize;
use tracing::{debug, info};

use crate::dynamics::state::{LaunchConfig, StageBurnConfig, State, EARTH_RADIUS};
use crate::physics::{aerodynamics, gravity};
use crate::vehicle::{DesignError, RocketDesign};

use super::event::{EventKind, SimEvent};
use super::integrator::rk4_step;

// ---------------------------------------------------------------------------
// Flight records
// ---------------------------------------------------------------------------

/// One simulation time-sample, appended once per integration step and
/// immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightRecord {
    pub stage_id: usize,
    pub time_elapsed: f64, // s
    pub twr: f64,
    pub mass: f64,          // kg
    pub velocity: f64,      // m/s, magnitude
    pub altitude: f64,      // m above mean surface
    pub east: f64,          // m downrange from the pad
    pub drag: f64,          // N
    pub gravity_force: f64, // N
}

/// Complete output of one simulation run.
#[derive(Debug, Clone)]
pub struct FlightData {
    pub records: Vec<FlightRecord>,
    pub states: Vec<State>,
    pub events: Vec<SimEvent>,
}

// ---------------------------------------------------------------------------
// Stage sequencing
// ---------------------------------------------------------------------------

/// Burn parameters for stage `idx`, derived from the design once at that
/// stage's ignition.
fn burn_config(design: &RocketDesign, idx: usize, launch: &LaunchConfig) -> StageBurnConfig {
    let stage = &design.stages[idx];
    StageBurnConfig {
        thrust: stage.total_thrust(),
        mass_flow: stage.total_mass_flow(),
        largest_section: design.largest_section(idx),
        turn_start_alt: launch.turn_start_alt,
        turn_end_alt: launch.turn_end_alt,
        turn_rate: launch.turn_rate,
    }
}

fn record(stage_id: usize, state: &State, config: &StageBurnConfig) -> FlightRecord {
    let gravity_force = gravity::gravitational_force(state.mass, state.radius());
    let speed = state.speed();
    FlightRecord {
        stage_id,
        time_elapsed: state.time,
        twr: config.thrust / gravity_force,
        mass: state.mass,
        velocity: speed,
        altitude: state.altitude(),
        east: state.east(),
        drag: aerodynamics::drag_force(config.largest_section, speed, state.altitude()),
        gravity_force,
    }
}

fn event(kind: EventKind, state: &State) -> SimEvent {
    SimEvent {
        time: state.time,
        kind,
        altitude: state.altitude(),
        velocity: state.speed(),
    }
}

// ---------------------------------------------------------------------------
// Full flight simulation
// ---------------------------------------------------------------------------

/// Simulate a complete multi-stage ascent: every stage in burn order, stage
/// separation at burnout, then a coasting window after the final burn.
///
/// Deterministic: the same design and launch configuration always produce
/// the same records. The run ends early only on ground impact.
pub fn simulate(design: &RocketDesign, launch: &LaunchConfig) -> Result<FlightData, DesignError> {
    design.validate()?;

    let dt = launch.timestep;
    let last = design.stages.len() - 1;

    let mut state = State {
        time: 0.0,
        pos: Vector2::new(0.0, EARTH_RADIUS),
        vel: Vector2::zeros(),
        mass: design.total_mass(),
    };

    let burn_steps: f64 = design.stages.iter().map(|s| s.burn_time()).sum::<f64>() / dt;
    let cap = ((burn_steps + launch.coasting_minutes * 60.0 / dt) as usize + 1).min(200_000);
    let mut records = Vec::with_capacity(cap);
    let mut states = Vec::with_capacity(cap);
    let mut events = Vec::new();

    let liftoff_config = burn_config(design, 0, launch);
    records.push(record(0, &state, &liftoff_config));
    states.push(state.clone());
    events.push(event(EventKind::Liftoff, &state));
    info!(design = %design.name, mass = state.mass, "liftoff");

    let mut launched = false;
    let mut impacted = false;

    'stages: for (i, stage) in design.stages.iter().enumerate() {
        let config = burn_config(design, i, launch);
        let dry_floor = stage.dry_mass() + design.mass_above(i);
        debug!(
            stage = i,
            thrust = config.thrust,
            mass_flow = config.mass_flow,
            "stage ignition"
        );

        if config.thrust > 0.0 && config.mass_flow > 0.0 {
            loop {
                state = rk4_step(&state, &config, dt);

                let burned_out = state.mass <= dry_floor + 1e-9;
                if burned_out {
                    // The final step may overshoot the propellant allotment
                    // by a fraction of one dt's worth; settle on the floor.
                    state.mass = dry_floor;
                }

                records.push(record(i, &state, &config));
                states.push(state.clone());

                if state.altitude() > 1.0 {
                    launched = true;
                }
                // Sinking off the pad (TWR < 1) ends the run just like a
                // fall-back from altitude would.
                if (launched || state.vel.y < 0.0) && state.altitude() <= 0.0 {
                    events.push(event(EventKind::Impact, &state));
                    info!(time = state.time, "ground impact");
                    impacted = true;
                    break 'stages;
                }
                if burned_out {
                    events.push(event(EventKind::Burnout { stage: i }, &state));
                    info!(stage = i, time = state.time, "burnout");
                    break;
                }
            }
        } else {
            // No usable engine: the stage burns out the instant it ignites.
            // Its unburned propellant leaves with the stage at separation,
            // so settle on the dry floor just as the burnout path does.
            debug!(stage = i, "stage has no engine, immediate burnout");
            state.mass = dry_floor;
            events.push(event(EventKind::Burnout { stage: i }, &state));
        }

        if i < last {
            // Stage separation: the spent stage's hardware is dropped and
            // no longer contributes to the integrated mass.
            state.mass -= stage.dry_mass();
            events.push(event(EventKind::Separation { from: i, to: i + 1 }, &state));
            info!(from = i, to = i + 1, mass = state.mass, "stage separation");
        }
    }

    if !impacted {
        events.push(event(EventKind::CoastStart, &state));
        debug!(time = state.time, "coasting phase");

        let config = StageBurnConfig::coasting(design.largest_section(last));
        let steps = (launch.coasting_minutes * 60.0 / dt).round() as usize;
        for _ in 0..steps {
            state = rk4_step(&state, &config, dt);
            records.push(record(last, &state, &config));
            states.push(state.clone());

            if state.altitude() > 1.0 {
                launched = true;
            }
            if (launched || state.vel.y < 0.0) && state.altitude() <= 0.0 {
                events.push(event(EventKind::Impact, &state));
                info!(time = state.time, "ground impact");
                impacted = true;
                break;
            }
        }
    }

    if !impacted {
        events.push(event(EventKind::Complete, &state));
    }
    info!(
        steps = records.len(),
        end_time = state.time,
        "simulation finished"
    );

    Ok(FlightData {
        records,
        states,
        events,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
