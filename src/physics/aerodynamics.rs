use std::f64::consts::PI;

use crate::physics::atmosphere;

/// Fixed drag coefficient for the whole vehicle (blunt staged stack).
const CD: f64 = 0.75;

/// Aerodynamic drag force magnitude (N): `0.5 * rho * v^2 * Cd * A`, with
/// the reference area taken from the vehicle's widest section diameter.
/// Direction (opposing velocity) is applied by the derivative function.
pub fn drag_force(diameter: f64, speed: f64, altitude: f64) -> f64 {
    let area = PI * (diameter / 2.0) * (diameter / 2.0);
    0.5 * atmosphere::air_density(altitude) * speed * speed * CD * area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_is_never_negative() {
        assert!(drag_force(3.0, 0.0, 0.0) >= 0.0);
        assert!(drag_force(3.0, 250.0, 5_000.0) > 0.0);
    }

    #[test]
    fn drag_scales_with_speed_squared() {
        let d1 = drag_force(3.0, 100.0, 0.0);
        let d2 = drag_force(3.0, 200.0, 0.0);
        assert!((d2 / d1 - 4.0).abs() < 1e-9);
    }

    #[test]
    fn drag_fades_with_altitude() {
        let low = drag_force(3.0, 300.0, 1_000.0);
        let high = drag_force(3.0, 300.0, 60_000.0);
        assert!(high < low * 1e-2);
    }
}
