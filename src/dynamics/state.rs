use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.81; // reference gravity for Isp/mass-flow math, m/s^2
pub const EARTH_RADIUS: f64 = 6_371_000.0; // mean Earth radius, m
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11; // m^3/(kg s^2)
pub const EARTH_MASS: f64 = 5.972e24; // kg

/// Bulk density used to derive a tank's propellant load from its cylinder
/// volume (RP-1-class propellant).
pub const PROPELLANT_DENSITY: f64 = 720.0; // kg/m^3

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Full state vector at a single point in time.
/// Frame: planar, origin at Earth's center; the launch pad sits at
/// `(0, EARTH_RADIUS)`, +x is downrange (east), +y is up at the pad.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub time: f64,         // s
    pub pos: Vector2<f64>, // m
    pub vel: Vector2<f64>, // m/s
    pub mass: f64,         // kg (active stage propellant + everything above)
}

impl State {
    /// Advance state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
            mass: (self.mass + d.dmass * dt).max(0.0),
        }
    }

    /// Distance from the planet's center.
    pub fn radius(&self) -> f64 {
        self.pos.norm()
    }

    /// Height above the mean surface. Negative below it.
    pub fn altitude(&self) -> f64 {
        self.radius() - EARTH_RADIUS
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Downrange (east) distance from the launch pad.
    pub fn east(&self) -> f64 {
        self.pos.x
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt, dm/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Deriv {
    pub dpos: Vector2<f64>, // velocity
    pub dvel: Vector2<f64>, // acceleration
    pub dmass: f64,         // mass flow rate (negative during burn)
}

// ---------------------------------------------------------------------------
// Per-stage burn parameters
// ---------------------------------------------------------------------------

/// Physical constants of one stage's burn, derived once at ignition and
/// immutable for the stage's duration. Threaded explicitly through the
/// derivative function and integrator — no shared mutable config.
#[derive(Debug, Clone, PartialEq)]
pub struct StageBurnConfig {
    pub thrust: f64,          // N (summed over the stage's engines)
    pub mass_flow: f64,       // kg/s (summed)
    pub largest_section: f64, // reference diameter for drag, m
    pub turn_start_alt: f64,  // m
    pub turn_end_alt: f64,    // m
    pub turn_rate: f64,       // rad per meter of altitude
}

impl StageBurnConfig {
    /// Zero-thrust configuration for the post-burnout coasting phase.
    pub fn coasting(largest_section: f64) -> Self {
        Self {
            thrust: 0.0,
            mass_flow: 0.0,
            largest_section,
            turn_start_alt: 0.0,
            turn_end_alt: 0.0,
            turn_rate: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Launch configuration
// ---------------------------------------------------------------------------

/// Launch-site and simulation parameters supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchConfig {
    pub launch_lat: f64,       // deg
    pub launch_lng: f64,       // deg
    pub heading: f64,          // deg clockwise from north
    pub turn_start_alt: f64,   // m
    pub turn_end_alt: f64,     // m
    pub turn_rate: f64,        // rad/m
    pub timestep: f64,         // s
    pub coasting_minutes: f64, // coast duration after final burnout
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            launch_lat: 28.6084, // LC-39, Cape Canaveral
            launch_lng: -80.6043,
            heading: 90.0, // due east
            turn_start_alt: 1_000.0,
            turn_end_alt: 45_000.0,
            turn_rate: 2.0e-5,
            timestep: 1.0,
            coasting_minutes: 15.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_scales_derivative() {
        let s = State {
            time: 0.0,
            pos: Vector2::new(0.0, EARTH_RADIUS),
            vel: Vector2::new(0.0, 10.0),
            mass: 100.0,
        };
        let d = Deriv {
            dpos: s.vel,
            dvel: Vector2::new(0.0, -9.81),
            dmass: -2.0,
        };
        let next = s.apply(&d, 0.5);
        assert!((next.time - 0.5).abs() < 1e-12);
        assert!((next.pos.y - (EARTH_RADIUS + 5.0)).abs() < 1e-9);
        assert!((next.mass - 99.0).abs() < 1e-12);
    }

    #[test]
    fn altitude_is_zero_on_the_pad() {
        let s = State {
            time: 0.0,
            pos: Vector2::new(0.0, EARTH_RADIUS),
            vel: Vector2::zeros(),
            mass: 1.0,
        };
        assert!(s.altitude().abs() < 1e-9);
    }
}
