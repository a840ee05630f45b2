use crate::dynamics::state::{EARTH_MASS, GRAVITATIONAL_CONSTANT};

/// Newtonian inverse-square gravitational force magnitude (N) on a body of
/// `mass` kg at `distance_from_center` m.
///
/// Panics if the distance is not positive: the flight driver never lets the
/// vehicle reach the planet's center, so a zero radius here is a violated
/// precondition and a silently propagated NaN would be worse than a crash.
pub fn gravitational_force(mass: f64, distance_from_center: f64) -> f64 {
    assert!(
        distance_from_center > 0.0,
        "gravitational_force: non-positive radius {distance_from_center}"
    );
    GRAVITATIONAL_CONSTANT * mass * EARTH_MASS / (distance_from_center * distance_from_center)
}
