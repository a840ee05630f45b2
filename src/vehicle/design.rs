use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::part::{Part, PartKind};
use super::stage::Stage;

// ---------------------------------------------------------------------------
// Rocket design: ordered sequence of stages, first stage ignites first
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketDesign {
    pub name: String,
    pub stages: Vec<Stage>,
}

/// Fatal input errors detected at the simulation boundary. No partial
/// results are produced for an invalid design.
#[derive(Debug, Error, PartialEq)]
pub enum DesignError {
    #[error("design has no stages")]
    NoStages,
    #[error("stage {0} has no parts")]
    EmptyStage(usize),
    #[error("stage {0} has non-positive dry mass")]
    NonPositiveMass(usize),
    #[error("part '{part}' in stage {stage} has non-positive thrust or isp")]
    BadEngine { stage: usize, part: String },
}

impl RocketDesign {
    /// Wet mass of the entire stack at liftoff.
    pub fn total_mass(&self) -> f64 {
        self.stages.iter().map(|s| s.total_mass()).sum()
    }

    /// Combined wet mass of every stage above `idx` — what stage `idx`
    /// still carries when it ignites.
    pub fn mass_above(&self, idx: usize) -> f64 {
        self.stages[idx + 1..].iter().map(|s| s.total_mass()).sum()
    }

    /// Drag reference diameter while stage `idx` burns: the widest tank
    /// section anywhere in the remaining stack. Falls back to 1 m for a
    /// tankless stack so drag stays defined.
    pub fn largest_section(&self, idx: usize) -> f64 {
        self.stages[idx..]
            .iter()
            .filter_map(|s| s.largest_diameter())
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |m| m.max(d))))
            .unwrap_or(1.0)
    }

    /// Fail-fast structural validation, run once at simulation entry.
    pub fn validate(&self) -> Result<(), DesignError> {
        if self.stages.is_empty() {
            return Err(DesignError::NoStages);
        }
        for (i, stage) in self.stages.iter().enumerate() {
            if stage.parts.is_empty() {
                return Err(DesignError::EmptyStage(i));
            }
            // Propellant is never negative, so this also covers a
            // non-positive total mass. A zero dry floor would let the
            // integrator burn the stage down to zero mass.
            if stage.dry_mass() <= 0.0 {
                return Err(DesignError::NonPositiveMass(i));
            }
            for part in &stage.parts {
                if let PartKind::Engine { thrust_sl, isp_sl } = part.kind {
                    if thrust_sl <= 0.0 || isp_sl <= 0.0 {
                        return Err(DesignError::BadEngine {
                            stage: i,
                            part: part.name.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Preset designs
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// 2-stage orbital-class demo vehicle ("Pathfinder").
    pub fn pathfinder() -> RocketDesign {
        RocketDesign {
            name: "Pathfinder".into(),
            stages: vec![
                Stage {
                    name: "S1-Booster".into(),
                    parts: vec![
                        Part {
                            name: "K-9 Engine".into(),
                            dry_mass: 3_200.0,
                            kind: PartKind::Engine { thrust_sl: 1_600_000.0, isp_sl: 290.0 },
                        },
                        Part {
                            name: "FT-800 Tank".into(),
                            dry_mass: 4_500.0,
                            kind: PartKind::FuelTank { diameter: 3.0, length: 14.0 },
                        },
                        Part {
                            name: "Interstage".into(),
                            dry_mass: 600.0,
                            kind: PartKind::Utility,
                        },
                    ],
                },
                Stage {
                    name: "S2-Sustainer".into(),
                    parts: vec![
                        Part {
                            name: "V-1 Engine".into(),
                            dry_mass: 500.0,
                            kind: PartKind::Engine { thrust_sl: 180_000.0, isp_sl: 340.0 },
                        },
                        Part {
                            name: "FT-200 Tank".into(),
                            dry_mass: 900.0,
                            kind: PartKind::FuelTank { diameter: 2.4, length: 4.5 },
                        },
                        Part {
                            name: "Crew Pod".into(),
                            dry_mass: 1_100.0,
                            kind: PartKind::CommandPod,
                        },
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_is_valid() {
        assert_eq!(presets::pathfinder().validate(), Ok(()));
    }

    #[test]
    fn empty_design_rejected() {
        let d = RocketDesign { name: "X".into(), stages: vec![] };
        assert_eq!(d.validate(), Err(DesignError::NoStages));
    }

    #[test]
    fn empty_stage_rejected() {
        let d = RocketDesign {
            name: "X".into(),
            stages: vec![Stage { name: "S1".into(), parts: vec![] }],
        };
        assert_eq!(d.validate(), Err(DesignError::EmptyStage(0)));
    }

    #[test]
    fn zero_dry_mass_stage_rejected() {
        // Massless hardware with a full tank: the dry floor would be zero
        // and burnout would hand the integrator a zero-mass vehicle.
        let d = RocketDesign {
            name: "X".into(),
            stages: vec![Stage {
                name: "S1".into(),
                parts: vec![
                    Part {
                        name: "Engine".into(),
                        dry_mass: 0.0,
                        kind: PartKind::Engine { thrust_sl: 100_000.0, isp_sl: 300.0 },
                    },
                    Part {
                        name: "Tank".into(),
                        dry_mass: 0.0,
                        kind: PartKind::FuelTank { diameter: 1.0, length: 3.0 },
                    },
                ],
            }],
        };
        assert_eq!(d.validate(), Err(DesignError::NonPositiveMass(0)));
    }

    #[test]
    fn zero_isp_engine_rejected() {
        let d = RocketDesign {
            name: "X".into(),
            stages: vec![Stage {
                name: "S1".into(),
                parts: vec![Part {
                    name: "Dud".into(),
                    dry_mass: 100.0,
                    kind: PartKind::Engine { thrust_sl: 1_000.0, isp_sl: 0.0 },
                }],
            }],
        };
        assert!(matches!(d.validate(), Err(DesignError::BadEngine { stage: 0, .. })));
    }

    #[test]
    fn mass_above_counts_upper_stack_only() {
        let d = presets::pathfinder();
        let upper = d.mass_above(0);
        assert!((upper - d.stages[1].total_mass()).abs() < 1e-9);
        assert_eq!(d.mass_above(1), 0.0);
    }

    #[test]
    fn largest_section_spans_remaining_stack() {
        let d = presets::pathfinder();
        assert_eq!(d.largest_section(0), 3.0);
        assert_eq!(d.largest_section(1), 2.4);
    }

    #[test]
    fn design_json_round_trips() {
        let d = presets::pathfinder();
        let json = serde_json::to_string(&d).unwrap();
        let back: RocketDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
