use crate::dynamics;
use crate::dynamics::state::{Deriv, StageBurnConfig, State};

// ---------------------------------------------------------------------------
// Classical fixed-step RK4
// ---------------------------------------------------------------------------

/// Single RK4 step of the ascent equations of motion. Pure: returns a new
/// state, never mutates the input. The caller keeps `mass > 0` for the
/// lifetime of a stage; degenerate inputs are its contract violation.
pub fn rk4_step(state: &State, config: &StageBurnConfig, dt: f64) -> State {
    step_with(state, dt, |s| dynamics::derivatives(s, config))
}

/// RK4 over an arbitrary derivative function. Split out so the integrator
/// can be verified against smooth analytic systems independent of the
/// rocket physics.
pub(crate) fn step_with<F>(state: &State, dt: f64, f: F) -> State
where
    F: Fn(&State) -> Deriv,
{
    let k1 = f(state);
    let k2 = f(&state.apply(&k1, dt * 0.5));
    let k3 = f(&state.apply(&k2, dt * 0.5));
    let k4 = f(&state.apply(&k3, dt));

    State {
        time: state.time + dt,
        pos: state.pos + (k1.dpos + 2.0 * k2.dpos + 2.0 * k3.dpos + k4.dpos) * (dt / 6.0),
        vel: state.vel + (k1.dvel + 2.0 * k2.dvel + 2.0 * k3.dvel + k4.dvel) * (dt / 6.0),
        mass: (state.mass + (k1.dmass + 2.0 * k2.dmass + 2.0 * k3.dmass + k4.dmass) * (dt / 6.0))
            .max(0.0),
    }
}
