use std::f64::consts::FRAC_PI_2;

use crate::dynamics::state::StageBurnConfig;

// ---------------------------------------------------------------------------
// Gravity-turn steering law
// ---------------------------------------------------------------------------

/// Thrust turn angle (rad from vertical) for the current altitude.
///
/// - Coasting (no thrust): 90 deg — the pipeline's ballistic attitude
///   convention, not a physical statement about the airframe.
/// - Below `turn_start_alt`: pure vertical ascent.
/// - In the turn window: linear turn-rate law, clamped so the vertical
///   thrust component always exceeds the gravity load (no stall-back).
/// - At and above `turn_end_alt`: the gravity-balance angle
///   `acos(gravity / thrust)`, clamped to [0, 90] deg.
pub fn turn_angle(altitude: f64, config: &StageBurnConfig, gravity_force: f64) -> f64 {
    if config.thrust <= 0.0 {
        return FRAC_PI_2;
    }
    if altitude < config.turn_start_alt {
        return 0.0;
    }
    if altitude < config.turn_end_alt {
        let angle = (altitude - config.turn_start_alt).max(0.0) * config.turn_rate;
        if angle.cos() * config.thrust <= gravity_force {
            return gravity_balance_angle(config.thrust, gravity_force);
        }
        return angle;
    }
    gravity_balance_angle(config.thrust, gravity_force)
}

/// Steepest angle at which the vertical thrust component still cancels
/// gravity. Vertical (0) when thrust cannot lift the vehicle at all.
fn gravity_balance_angle(thrust: f64, gravity_force: f64) -> f64 {
    (gravity_force / thrust).clamp(-1.0, 1.0).acos().clamp(0.0, FRAC_PI_2)
}
