pub mod design;
pub mod part;
pub mod stage;
pub mod stats;

pub use design::{presets, DesignError, RocketDesign};
pub use part::{Part, PartKind};
pub use stage::Stage;
pub use stats::{stage_stats, StagePerf, StageStats};
