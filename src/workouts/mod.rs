//! Workout logging: session records, exercise library and load analysis.

pub mod analysis;
pub mod draft;
pub mod library;
pub mod types;

pub use analysis::{
    exercise_stats, parse_exercise_input, recommended_weight, validate_exercise_input,
    ExerciseInput, ExerciseInputError, ExerciseStats, RecommendationBasis, WeightCategory,
    WeightRange, WeightRecommendation,
};
pub use draft::{DraftError, ExerciseForm, WorkoutDraft};
pub use library::{CustomExercise, Exercise, ExerciseCategory, ExerciseLibrary, MuscleGroup};
pub use types::{
    local_noon, week_start, Feeling, PerformedExercise, WeeklyStats, Workout, WorkoutError,
    WorkoutSchedule, WorkoutType,
};
