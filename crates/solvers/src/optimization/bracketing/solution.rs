use nmecon_core::Snapshot;

/// Indicates how the bracketing search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The triple narrowed below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bracketing search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Middle point of the final triple.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Outer points of the final triple.
    pub bounds: [f64; 2],

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Number of interior evaluations performed.
    pub iters: usize,
}
