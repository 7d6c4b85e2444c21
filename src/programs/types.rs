//! Training program type definitions.

use serde::{Deserialize, Serialize};

use crate::goals::{FitnessGoal, UserLevel};
use crate::workouts::library::MuscleGroup;

/// Prescribed load for a program exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightLoad {
    Bodyweight,
    Light,
    Moderate,
    Heavy,
}

impl WeightLoad {
    pub fn translation_key(&self) -> &'static str {
        match self {
            WeightLoad::Bodyweight => "load-bodyweight",
            WeightLoad::Light => "weight-light",
            WeightLoad::Moderate => "weight-moderate",
            WeightLoad::Heavy => "weight-heavy",
        }
    }
}

/// Work prescribed for each set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetTarget {
    Reps(u32),
    /// Timed hold or interval in seconds
    Seconds(u32),
}

/// One exercise slot within a program day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramExercise {
    pub exercise_id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub sets: u32,
    pub target: SetTarget,
    pub load: Option<WeightLoad>,
    /// Rest between sets in seconds
    pub rest_secs: u32,
    pub notes: Option<String>,
}

impl ProgramExercise {
    pub fn reps(&self) -> Option<u32> {
        match self.target {
            SetTarget::Reps(r) => Some(r),
            SetTarget::Seconds(_) => None,
        }
    }

    /// Short prescription such as `4 × 8` or `3 × 45 s`.
    pub fn prescription(&self) -> String {
        match self.target {
            SetTarget::Reps(reps) => format!("{} × {}", self.sets, reps),
            SetTarget::Seconds(secs) if secs >= 300 && secs % 60 == 0 => {
                format!("{} × {} min", self.sets, secs / 60)
            }
            SetTarget::Seconds(secs) => format!("{} × {} s", self.sets, secs),
        }
    }
}

/// A single training day of a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDay {
    /// Day within the weekly cycle, starting at 1; gaps are rest days
    pub day_number: u8,
    pub name: String,
    pub muscle_groups: Vec<MuscleGroup>,
    pub exercises: Vec<ProgramExercise>,
}

/// A predefined multi-week training plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutProgram {
    pub id: String,
    pub name: String,
    pub description: String,
    pub goal: FitnessGoal,
    pub duration_weeks: u32,
    pub level: UserLevel,
    pub workouts_per_week: u32,
    pub days: Vec<ProgramDay>,
    pub benefits: Vec<String>,
    pub tips: Vec<String>,
}

impl WorkoutProgram {
    /// Training day with the given number, `None` for rest days.
    pub fn day(&self, day_number: u8) -> Option<&ProgramDay> {
        self.days.iter().find(|d| d.day_number == day_number)
    }

    /// Day that follows `day_number` in the cycle, wrapping to the first day.
    pub fn next_day(&self, day_number: Option<u8>) -> Option<&ProgramDay> {
        match day_number {
            Some(current) => self
                .days
                .iter()
                .find(|d| d.day_number > current)
                .or_else(|| self.days.first()),
            None => self.days.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(target: SetTarget) -> ProgramExercise {
        ProgramExercise {
            exercise_id: "plank".to_string(),
            name: "Plank".to_string(),
            muscle_group: MuscleGroup::Abs,
            sets: 3,
            target,
            load: None,
            rest_secs: 60,
            notes: None,
        }
    }

    #[test]
    fn test_prescription_format() {
        assert_eq!(exercise(SetTarget::Reps(8)).prescription(), "3 × 8");
        assert_eq!(exercise(SetTarget::Seconds(45)).prescription(), "3 × 45 s");
        assert_eq!(exercise(SetTarget::Seconds(1800)).prescription(), "3 × 30 min");
    }
}
