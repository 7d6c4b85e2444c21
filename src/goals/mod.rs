//! Fitness goals module.
//!
//! Covers what the user is training for:
//! - Goal, level and schedule preferences captured at onboarding
//! - Training mix and recovery advice per goal
//! - Achievements derived from workout and weight history

pub mod achievements;
pub mod recommendations;
pub mod types;

// Re-exports for convenience
pub use achievements::{
    calculate_achievements, is_perfect_week, streak_days, strength_progress, weight_progress,
    Achievement, AchievementKind,
};
pub use recommendations::{recovery_tips, workout_recommendations, WorkoutRecommendation};
pub use types::{FitnessGoal, UserGoals, UserLevel, WeightEntry};
