use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::dynamics::state::{G0, PROPELLANT_DENSITY};

// ---------------------------------------------------------------------------
// Discrete rocket parts
// ---------------------------------------------------------------------------

/// Type-specific data of a part. Tagged so the editor's JSON maps onto it
/// with a `part_type` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "part_type")]
pub enum PartKind {
    Engine { thrust_sl: f64, isp_sl: f64 },
    FuelTank { diameter: f64, length: f64 },
    CommandPod,
    Utility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    /// Dry mass (`weight` in the editor's contract), kg.
    pub dry_mass: f64,
    #[serde(flatten)]
    pub kind: PartKind,
}

impl Part {
    /// Propellant carried by this part: cylinder volume times the fixed
    /// propellant density for tanks, zero for everything else.
    pub fn propellant_mass(&self) -> f64 {
        match self.kind {
            PartKind::FuelTank { diameter, length } => {
                PROPELLANT_DENSITY * PI * (diameter / 2.0) * (diameter / 2.0) * length
            }
            _ => 0.0,
        }
    }

    /// Sea-level thrust, N. Zero for non-engines.
    pub fn thrust(&self) -> f64 {
        match self.kind {
            PartKind::Engine { thrust_sl, .. } => thrust_sl,
            _ => 0.0,
        }
    }

    /// Propellant mass flow while firing: `F / (Isp * g0)`. Zero for
    /// non-engines.
    pub fn mass_flow(&self) -> f64 {
        match self.kind {
            PartKind::Engine { thrust_sl, isp_sl } => thrust_sl / (isp_sl * G0),
            _ => 0.0,
        }
    }

    pub fn diameter(&self) -> Option<f64> {
        match self.kind {
            PartKind::FuelTank { diameter, .. } => Some(diameter),
            _ => None,
        }
    }

    pub fn is_engine(&self) -> bool {
        matches!(self.kind, PartKind::Engine { .. })
    }
}
