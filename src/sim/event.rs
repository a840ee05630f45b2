// ---------------------------------------------------------------------------
// Discrete flight events
// ---------------------------------------------------------------------------

/// Kinds of events the flight driver records.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Liftoff,
    Burnout { stage: usize },
    Separation { from: usize, to: usize },
    CoastStart,
    Impact,
    Complete,
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub altitude: f64,
    pub velocity: f64,
}
