use serde::{Deserialize, Serialize};

use super::part::Part;

// ---------------------------------------------------------------------------
// Stage: one burn phase of the rocket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub parts: Vec<Part>,
}

impl Stage {
    /// Structural mass: sum of part weights, propellant excluded.
    pub fn dry_mass(&self) -> f64 {
        self.parts.iter().map(|p| p.dry_mass).sum()
    }

    pub fn propellant_mass(&self) -> f64 {
        self.parts.iter().map(|p| p.propellant_mass()).sum()
    }

    pub fn total_mass(&self) -> f64 {
        self.dry_mass() + self.propellant_mass()
    }

    /// Combined sea-level thrust of the stage's engines, N.
    pub fn total_thrust(&self) -> f64 {
        self.parts.iter().map(|p| p.thrust()).sum()
    }

    /// Combined propellant mass flow of the stage's engines, kg/s.
    pub fn total_mass_flow(&self) -> f64 {
        self.parts.iter().map(|p| p.mass_flow()).sum()
    }

    /// Self-consistent burn time from propellant and mass flow.
    pub fn burn_time(&self) -> f64 {
        let flow = self.total_mass_flow();
        if flow > 0.0 {
            self.propellant_mass() / flow
        } else {
            0.0
        }
    }

    /// Widest tank diameter in this stage, if it has any tanks.
    pub fn largest_diameter(&self) -> Option<f64> {
        self.parts
            .iter()
            .filter_map(|p| p.diameter())
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.max(d))))
    }

    pub fn has_engine(&self) -> bool {
        self.parts.iter().any(|p| p.is_engine())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::part::PartKind;

    fn test_stage() -> Stage {
        Stage {
            name: "Core".into(),
            parts: vec![
                Part {
                    name: "E-1".into(),
                    dry_mass: 1_000.0,
                    kind: PartKind::Engine { thrust_sl: 981_000.0, isp_sl: 300.0 },
                },
                Part {
                    name: "FT-1".into(),
                    dry_mass: 800.0,
                    kind: PartKind::FuelTank { diameter: 2.5, length: 6.0 },
                },
                Part {
                    name: "Pod".into(),
                    dry_mass: 200.0,
                    kind: PartKind::CommandPod,
                },
            ],
        }
    }

    #[test]
    fn masses_sum_over_parts() {
        let s = test_stage();
        assert!((s.dry_mass() - 2_000.0).abs() < 1e-9);
        assert!(s.propellant_mass() > 0.0);
        assert!((s.total_mass() - s.dry_mass() - s.propellant_mass()).abs() < 1e-9);
    }

    #[test]
    fn burn_time_consistent_with_flow() {
        let s = test_stage();
        let t = s.burn_time();
        assert!((t * s.total_mass_flow() - s.propellant_mass()).abs() < 1e-6);
    }

    #[test]
    fn widest_tank_wins() {
        let mut s = test_stage();
        s.parts.push(Part {
            name: "FT-2".into(),
            dry_mass: 300.0,
            kind: PartKind::FuelTank { diameter: 3.2, length: 2.0 },
        });
        assert_eq!(s.largest_diameter(), Some(3.2));
    }

    #[test]
    fn stage_without_tanks_has_no_diameter() {
        let s = Stage {
            name: "Kick".into(),
            parts: vec![Part {
                name: "Pod".into(),
                dry_mass: 100.0,
                kind: PartKind::CommandPod,
            }],
        };
        assert_eq!(s.largest_diameter(), None);
    }
}
