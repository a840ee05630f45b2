// ---------------------------------------------------------------------------
// Exponential scale-height atmosphere
// ---------------------------------------------------------------------------

const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
const SCALE_HEIGHT: f64 = 8_500.0; // m

/// Air density at a given altitude, `rho0 * e^(-alt/H)`.
///
/// Valid for all real altitudes: grows below sea level, decays toward zero
/// above it, never needs clamping.
pub fn air_density(altitude: f64) -> f64 {
    SEA_LEVEL_DENSITY * (-altitude / SCALE_HEIGHT).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_density() {
        assert!((air_density(0.0) - 1.225).abs() < 1e-9);
    }

    #[test]
    fn one_scale_height_is_one_e_fold() {
        let ratio = air_density(SCALE_HEIGHT) / air_density(0.0);
        assert!((ratio - (-1.0_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn density_monotonically_decreases() {
        let rho_0 = air_density(0.0);
        let rho_10k = air_density(10_000.0);
        let rho_50k = air_density(50_000.0);
        assert!(rho_0 > rho_10k);
        assert!(rho_10k > rho_50k);
        assert!(rho_50k > 0.0);
    }

    #[test]
    fn near_vacuum_at_100km() {
        assert!(air_density(100_000.0) < 1e-4);
    }
}
