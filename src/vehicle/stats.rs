use serde::Serialize;

use super::design::RocketDesign;

// ---------------------------------------------------------------------------
// Closed-form per-stage performance figures (no integration involved)
// ---------------------------------------------------------------------------

/// One framing of a stage's performance. Thrust, mass flow, and burn time
/// are `None` in the stacked framing, where they are not meaningful —
/// consumers render them as dashes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StagePerf {
    pub total_mass: f64,
    pub dry_mass: f64,
    pub total_thrust: Option<f64>,
    pub total_mass_flow: Option<f64>,
    pub burn_time: Option<f64>,
    pub delta_v: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageStats {
    pub stage: String,
    /// This stage's own hardware and propellant only.
    pub individual: StagePerf,
    /// Same figures with the full mass of every stage above it included —
    /// what the stage must actually lift.
    pub stacked: StagePerf,
}

/// Compute per-stage stats for a design. Recomputed from scratch on every
/// design change; nothing is incrementally updated.
pub fn stage_stats(design: &RocketDesign) -> Vec<StageStats> {
    design
        .stages
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let thrust = stage.total_thrust();
            let flow = stage.total_mass_flow();
            let carried = design.mass_above(i);

            let individual = StagePerf {
                total_mass: stage.total_mass(),
                dry_mass: stage.dry_mass(),
                total_thrust: Some(thrust),
                total_mass_flow: Some(flow),
                burn_time: Some(stage.burn_time()),
                delta_v: tsiolkovsky(thrust, flow, stage.total_mass(), stage.dry_mass()),
            };

            let stacked = StagePerf {
                total_mass: stage.total_mass() + carried,
                dry_mass: stage.dry_mass() + carried,
                total_thrust: None,
                total_mass_flow: None,
                burn_time: None,
                delta_v: tsiolkovsky(
                    thrust,
                    flow,
                    stage.total_mass() + carried,
                    stage.dry_mass() + carried,
                ),
            };

            StageStats {
                stage: stage.name.clone(),
                individual,
                stacked,
            }
        })
        .collect()
}

/// Ideal delta-v with the stage's effective exhaust velocity
/// `v_e = F / mdot` (equals `isp * g0` for a single engine).
fn tsiolkovsky(thrust: f64, mass_flow: f64, total_mass: f64, dry_mass: f64) -> f64 {
    if mass_flow <= 0.0 || dry_mass <= 0.0 {
        return 0.0;
    }
    (thrust / mass_flow) * (total_mass / dry_mass).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::{G0, PROPELLANT_DENSITY};
    use crate::vehicle::design::presets;
    use crate::vehicle::part::{Part, PartKind};
    use crate::vehicle::stage::Stage;
    use std::f64::consts::PI;

    /// Single stage with dry mass 1000 kg, total 5000 kg, isp 300 s.
    fn reference_stage() -> RocketDesign {
        let diameter = 1.0_f64;
        // Tank length sized so the propellant load is exactly 4000 kg.
        let length = 4_000.0 / (PROPELLANT_DENSITY * PI * (diameter / 2.0) * (diameter / 2.0));
        RocketDesign {
            name: "Reference".into(),
            stages: vec![Stage {
                name: "Only".into(),
                parts: vec![
                    Part {
                        name: "Engine".into(),
                        dry_mass: 700.0,
                        kind: PartKind::Engine { thrust_sl: 500_000.0, isp_sl: 300.0 },
                    },
                    Part {
                        name: "Tank".into(),
                        dry_mass: 200.0,
                        kind: PartKind::FuelTank { diameter, length },
                    },
                    Part {
                        name: "Pod".into(),
                        dry_mass: 100.0,
                        kind: PartKind::CommandPod,
                    },
                ],
            }],
        }
    }

    #[test]
    fn tsiolkovsky_reference_figure() {
        let stats = stage_stats(&reference_stage());
        // 300 * 9.81 * ln(5) = 4738.56... m/s, within 0.1%.
        let expected = 300.0 * G0 * 5.0_f64.ln();
        let dv = stats[0].individual.delta_v;
        assert!(
            (dv - expected).abs() / expected < 1e-3,
            "delta-v {dv}, expected {expected}"
        );
    }

    #[test]
    fn stacked_inflates_both_masses() {
        let stats = stage_stats(&presets::pathfinder());
        let s0 = &stats[0];
        let upper = presets::pathfinder().stages[1].total_mass();
        assert!((s0.stacked.total_mass - s0.individual.total_mass - upper).abs() < 1e-9);
        assert!((s0.stacked.dry_mass - s0.individual.dry_mass - upper).abs() < 1e-9);
        // Carrying the upper stack always costs delta-v.
        assert!(s0.stacked.delta_v < s0.individual.delta_v);
    }

    #[test]
    fn stacked_thrust_and_burn_time_not_applicable() {
        let stats = stage_stats(&presets::pathfinder());
        for s in &stats {
            assert!(s.stacked.total_thrust.is_none());
            assert!(s.stacked.burn_time.is_none());
            assert!(s.individual.total_thrust.is_some());
        }
    }

    #[test]
    fn top_stage_framings_agree() {
        let stats = stage_stats(&presets::pathfinder());
        let top = stats.last().unwrap();
        assert!((top.individual.delta_v - top.stacked.delta_v).abs() < 1e-9);
        assert!((top.individual.total_mass - top.stacked.total_mass).abs() < 1e-9);
    }

    #[test]
    fn engineless_stage_has_zero_delta_v() {
        let d = RocketDesign {
            name: "Glider".into(),
            stages: vec![Stage {
                name: "Pod only".into(),
                parts: vec![Part {
                    name: "Pod".into(),
                    dry_mass: 500.0,
                    kind: PartKind::CommandPod,
                }],
            }],
        };
        let stats = stage_stats(&d);
        assert_eq!(stats[0].individual.delta_v, 0.0);
    }
}
