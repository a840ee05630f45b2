pub mod state;

use nalgebra::Vector2;

use crate::guidance;
use crate::physics::{aerodynamics, gravity};
use self::state::{Deriv, StageBurnConfig, State};

// ---------------------------------------------------------------------------
// Equations of motion (planar point-mass ascent)
// ---------------------------------------------------------------------------

/// Compute state derivatives for a given state and stage burn configuration.
///
/// Forces modeled:
///   1. Gravity — inverse-square law, toward the planet's center
///   2. Thrust  — constant magnitude, pitched by the gravity-turn law
///   3. Drag    — quadratic, opposing velocity
pub fn derivatives(state: &State, config: &StageBurnConfig) -> Deriv {
    let r = state.radius();

    // --- Gravity (force, toward center) ---
    let gravity_mag = gravity::gravitational_force(state.mass, r);
    let f_gravity = -state.pos / r * gravity_mag;

    // --- Drag (force, opposing velocity) ---
    let speed = state.speed();
    let f_drag = if speed > 0.0 {
        let drag_mag = aerodynamics::drag_force(config.largest_section, speed, state.altitude());
        -state.vel / speed * drag_mag
    } else {
        Vector2::zeros()
    };

    // --- Thrust (force, pitched from vertical by the turn angle) ---
    let angle = guidance::turn_angle(state.altitude(), config, gravity_mag);
    let f_thrust = Vector2::new(config.thrust * angle.sin(), config.thrust * angle.cos());

    // --- Mass flow (propellant only burns while the engine fires) ---
    let dmass = if config.thrust > 0.0 {
        -config.mass_flow
    } else {
        0.0
    };

    Deriv {
        dpos: state.vel,
        dvel: (f_thrust + f_drag + f_gravity) / state.mass,
        dmass,
    }
}
