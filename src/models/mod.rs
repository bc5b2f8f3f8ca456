pub mod outcome;
pub mod project;
pub mod solution;

pub use outcome::{BenchOutcome, BenchRecord, PartResult};
pub use project::ProjectLayout;
pub use solution::{IdError, SolutionId};
