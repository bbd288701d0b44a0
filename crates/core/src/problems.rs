pub mod approximation;
pub mod equation;
pub mod optimization;

pub use approximation::ApproximationProblem;
pub use equation::EquationProblem;
pub use optimization::OptimizationProblem;
