//! Training programs.
//!
//! Predefined multi-week plans keyed by fitness goal and experience level.

pub mod catalog;
pub mod types;

pub use catalog::ProgramCatalog;
pub use types::{ProgramDay, ProgramExercise, SetTarget, WeightLoad, WorkoutProgram};
