pub mod dynamics;
pub mod guidance;
pub mod io;
pub mod physics;
pub mod sim;
pub mod track;
pub mod vehicle;

// Backward-compatible re-exports

pub mod integrator {
    pub use crate::sim::integrator::rk4_step;
    pub use crate::sim::runner::simulate;
}

pub mod types {
    pub use crate::dynamics::state::{
        Deriv, LaunchConfig, StageBurnConfig, State, EARTH_RADIUS, G0,
    };
    pub use crate::sim::{EventKind, FlightData, FlightRecord, SimEvent};
    pub use crate::track::{GeoPoint, SiteMarker, Trajectory};
    pub use crate::vehicle::{
        DesignError, Part, PartKind, RocketDesign, Stage, StagePerf, StageStats,
    };
}
