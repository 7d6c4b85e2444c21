//! Per-exercise history analysis and load recommendations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Workout;
use crate::goals::UserLevel;

/// Accepted weight range in kilograms.
pub const WEIGHT_RANGE_KG: (f64, f64) = (1.0, 200.0);
/// Accepted repetitions per set.
pub const REPS_RANGE: (f64, f64) = (1.0, 50.0);
/// Accepted number of sets.
pub const SETS_RANGE: (f64, f64) = (1.0, 10.0);

/// Aggregated history for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseStats {
    pub exercise_id: String,
    pub name: String,
    /// Rounded mean of all weighted entries
    pub average_weight: f32,
    pub max_weight: f32,
    /// Weight from the most recent session that recorded one
    pub last_weight: f32,
    pub average_reps: u32,
    pub average_sets: u32,
    /// Completed sessions containing the exercise
    pub total_sessions: u32,
}

/// Summarize completed sessions containing `exercise_id`.
///
/// Returns `None` when no completed workout includes the exercise. Averages
/// only consider entries with a recorded weight.
pub fn exercise_stats(workouts: &[Workout], exercise_id: &str) -> Option<ExerciseStats> {
    let mut relevant: Vec<&Workout> = workouts
        .iter()
        .filter(|w| w.completed && w.contains_exercise(exercise_id))
        .collect();

    if relevant.is_empty() {
        return None;
    }

    let mut name = String::new();
    let mut total_weight = 0.0f32;
    let mut total_reps = 0u32;
    let mut total_sets = 0u32;
    let mut max_weight = 0.0f32;
    let mut count = 0u32;

    for entry in relevant
        .iter()
        .flat_map(|w| w.exercises.iter())
        .filter(|e| e.exercise_id == exercise_id)
    {
        let Some(weight) = entry.working_weight() else {
            continue;
        };
        name = entry.name.clone();
        total_weight += weight;
        total_reps += entry.reps.unwrap_or(0);
        total_sets += entry.sets.unwrap_or(0);
        max_weight = max_weight.max(weight);
        count += 1;
    }

    relevant.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
    let last_weight = relevant
        .iter()
        .find_map(|w| {
            w.exercises
                .iter()
                .filter(|e| e.exercise_id == exercise_id)
                .find_map(|e| e.working_weight())
        })
        .unwrap_or(0.0);

    let average = |total: f32| {
        if count > 0 {
            (total / count as f32).round()
        } else {
            0.0
        }
    };

    Some(ExerciseStats {
        exercise_id: exercise_id.to_string(),
        name,
        average_weight: average(total_weight),
        max_weight,
        last_weight,
        average_reps: average(total_reps as f32) as u32,
        average_sets: average(total_sets as f32) as u32,
        total_sessions: relevant.len() as u32,
    })
}

/// Inclusive weight range in whole kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: u32,
    pub max: u32,
}

/// Why a weight was recommended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RecommendationBasis {
    /// Progression from the last recorded weight
    Progression { last_weight: f32, increase_percent: u32 },
    /// No history: baseline for the user's level
    LevelBaseline,
}

/// Suggested working weight for the next session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRecommendation {
    pub recommended: u32,
    pub range: WeightRange,
    pub basis: RecommendationBasis,
}

/// Progression multiplier applied to the last weight.
pub fn progression_factor(level: UserLevel) -> f32 {
    match level {
        UserLevel::Beginner => 1.05,
        UserLevel::Intermediate => 1.08,
        UserLevel::Advanced => 1.10,
    }
}

/// Recommend a weight for `exercise_id` from history, or a level baseline.
pub fn recommended_weight(
    workouts: &[Workout],
    exercise_id: &str,
    level: UserLevel,
) -> WeightRecommendation {
    let last_weight = exercise_stats(workouts, exercise_id)
        .map(|s| s.last_weight)
        .unwrap_or(0.0);

    if last_weight > 0.0 {
        let factor = progression_factor(level);
        return WeightRecommendation {
            recommended: (last_weight * factor).round() as u32,
            range: WeightRange {
                min: ((last_weight * 0.9).round() as u32).max(1),
                max: (last_weight * 1.15).round() as u32,
            },
            basis: RecommendationBasis::Progression {
                last_weight,
                increase_percent: ((factor - 1.0) * 100.0).round() as u32,
            },
        };
    }

    let (recommended, min, max) = match level {
        UserLevel::Beginner => (10, 5, 15),
        UserLevel::Intermediate => (20, 15, 30),
        UserLevel::Advanced => (30, 25, 50),
    };

    WeightRecommendation {
        recommended,
        range: WeightRange { min, max },
        basis: RecommendationBasis::LevelBaseline,
    }
}

/// A single rejected field in exercise input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExerciseInputError {
    #[error("Weight must be between 1 and 200 kg")]
    WeightOutOfRange,

    #[error("Reps must be a whole number between 1 and 50")]
    RepsOutOfRange,

    #[error("Sets must be a whole number between 1 and 10")]
    SetsOutOfRange,

    #[error("{0} is not a number")]
    NotANumber(&'static str),
}

impl ExerciseInputError {
    pub fn translation_key(&self) -> &'static str {
        match self {
            ExerciseInputError::WeightOutOfRange => "error-weight-range",
            ExerciseInputError::RepsOutOfRange => "error-reps-range",
            ExerciseInputError::SetsOutOfRange => "error-sets-range",
            ExerciseInputError::NotANumber(_) => "error-not-a-number",
        }
    }
}

fn is_whole_in(value: f64, (min, max): (f64, f64)) -> bool {
    value.fract() == 0.0 && value >= min && value <= max
}

/// Check weight, reps and sets, collecting every failure.
///
/// Absent values are not validated.
pub fn validate_exercise_input(
    weight: Option<f64>,
    reps: Option<f64>,
    sets: Option<f64>,
) -> Vec<ExerciseInputError> {
    let mut errors = Vec::new();

    if let Some(weight) = weight {
        if !(WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&weight) {
            errors.push(ExerciseInputError::WeightOutOfRange);
        }
    }

    if let Some(reps) = reps {
        if !is_whole_in(reps, REPS_RANGE) {
            errors.push(ExerciseInputError::RepsOutOfRange);
        }
    }

    if let Some(sets) = sets {
        if !is_whole_in(sets, SETS_RANGE) {
            errors.push(ExerciseInputError::SetsOutOfRange);
        }
    }

    errors
}

/// Validated numeric fields of one exercise entry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExerciseInput {
    pub weight_kg: Option<f32>,
    pub reps: Option<u32>,
    pub sets: Option<u32>,
}

/// Parse text fields from a form and validate them.
///
/// Blank fields are treated as absent.
pub fn parse_exercise_input(
    weight: &str,
    reps: &str,
    sets: &str,
) -> Result<ExerciseInput, Vec<ExerciseInputError>> {
    let mut errors = Vec::new();
    let mut parse = |text: &str, field: &'static str| -> Option<f64> {
        let text = text.trim().replace(',', ".");
        if text.is_empty() {
            return None;
        }
        match text.parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                errors.push(ExerciseInputError::NotANumber(field));
                None
            }
        }
    };

    let weight = parse(weight, "weight");
    let reps = parse(reps, "reps");
    let sets = parse(sets, "sets");

    errors.extend(validate_exercise_input(weight, reps, sets));
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ExerciseInput {
        weight_kg: weight.map(|w| w as f32),
        reps: reps.map(|r| r as u32),
        sets: sets.map(|s| s as u32),
    })
}

/// Load bands used to describe program weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightCategory {
    Light,
    Moderate,
    Heavy,
    Maximum,
}

impl WeightCategory {
    pub fn for_weight(weight_kg: f32) -> Self {
        if weight_kg <= 10.0 {
            WeightCategory::Light
        } else if weight_kg <= 20.0 {
            WeightCategory::Moderate
        } else if weight_kg <= 35.0 {
            WeightCategory::Heavy
        } else {
            WeightCategory::Maximum
        }
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            WeightCategory::Light => "weight-light",
            WeightCategory::Moderate => "weight-moderate",
            WeightCategory::Heavy => "weight-heavy",
            WeightCategory::Maximum => "weight-maximum",
        }
    }

    /// Typical range label.
    pub fn range_label(&self) -> &'static str {
        match self {
            WeightCategory::Light => "2–10 kg",
            WeightCategory::Moderate => "12–20 kg",
            WeightCategory::Heavy => "22–35 kg",
            WeightCategory::Maximum => "36+ kg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::types::{local_noon, PerformedExercise, WorkoutType};
    use chrono::NaiveDate;

    fn workout_on(day: u32, exercises: Vec<PerformedExercise>) -> Workout {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        let mut workout = Workout::new(local_noon(date), WorkoutType::Strength);
        workout.exercises = exercises;
        workout
    }

    fn squat(weight: f32, reps: u32, sets: u32) -> PerformedExercise {
        PerformedExercise::new("squat", "Squat").with_load(weight, reps, sets)
    }

    #[test]
    fn test_exercise_stats_none_without_history() {
        let workouts = vec![workout_on(1, vec![squat(50.0, 5, 5)])];
        assert!(exercise_stats(&workouts, "deadlift").is_none());
    }

    #[test]
    fn test_exercise_stats_ignores_incomplete() {
        let mut skipped = workout_on(1, vec![squat(50.0, 5, 5)]);
        skipped.completed = false;
        assert!(exercise_stats(&[skipped], "squat").is_none());
    }

    #[test]
    fn test_exercise_stats_aggregates() {
        let workouts = vec![
            workout_on(3, vec![squat(60.0, 5, 5)]),
            workout_on(1, vec![squat(50.0, 8, 3)]),
            workout_on(2, vec![squat(55.0, 6, 4)]),
        ];

        let stats = exercise_stats(&workouts, "squat").unwrap();
        assert_eq!(stats.average_weight, 55.0);
        assert_eq!(stats.max_weight, 60.0);
        assert_eq!(stats.last_weight, 60.0);
        assert_eq!(stats.average_reps, 6);
        assert_eq!(stats.average_sets, 4);
        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.name, "Squat");
    }

    #[test]
    fn test_last_weight_skips_unweighted_sessions() {
        let bodyweight = PerformedExercise::new("squat", "Squat");
        let workouts = vec![
            workout_on(1, vec![squat(40.0, 10, 3)]),
            workout_on(5, vec![bodyweight]),
        ];

        let stats = exercise_stats(&workouts, "squat").unwrap();
        assert_eq!(stats.last_weight, 40.0);
        assert_eq!(stats.total_sessions, 2);
    }

    #[test]
    fn test_recommended_weight_progression() {
        let workouts = vec![workout_on(1, vec![squat(100.0, 5, 5)])];

        let beginner = recommended_weight(&workouts, "squat", UserLevel::Beginner);
        assert_eq!(beginner.recommended, 105);
        assert_eq!(beginner.range, WeightRange { min: 90, max: 115 });
        assert_eq!(
            beginner.basis,
            RecommendationBasis::Progression {
                last_weight: 100.0,
                increase_percent: 5
            }
        );

        assert_eq!(
            recommended_weight(&workouts, "squat", UserLevel::Intermediate).recommended,
            108
        );
        assert_eq!(
            recommended_weight(&workouts, "squat", UserLevel::Advanced).recommended,
            110
        );
    }

    #[test]
    fn test_recommended_weight_min_is_at_least_one() {
        let workouts = vec![workout_on(1, vec![squat(1.0, 10, 1)])];
        let rec = recommended_weight(&workouts, "squat", UserLevel::Beginner);
        assert_eq!(rec.range.min, 1);
    }

    #[test]
    fn test_recommended_weight_baseline() {
        let rec = recommended_weight(&[], "squat", UserLevel::Intermediate);
        assert_eq!(rec.recommended, 20);
        assert_eq!(rec.range, WeightRange { min: 15, max: 30 });
        assert_eq!(rec.basis, RecommendationBasis::LevelBaseline);

        let advanced = recommended_weight(&[], "squat", UserLevel::Advanced);
        assert_eq!(advanced.range, WeightRange { min: 25, max: 50 });
    }

    #[test]
    fn test_validate_exercise_input_collects_all_errors() {
        assert!(validate_exercise_input(Some(50.0), Some(10.0), Some(3.0)).is_empty());
        assert!(validate_exercise_input(None, None, None).is_empty());

        let errors = validate_exercise_input(Some(0.5), Some(8.5), Some(11.0));
        assert_eq!(
            errors,
            vec![
                ExerciseInputError::WeightOutOfRange,
                ExerciseInputError::RepsOutOfRange,
                ExerciseInputError::SetsOutOfRange,
            ]
        );
    }

    #[test]
    fn test_validate_boundaries() {
        assert!(validate_exercise_input(Some(1.0), Some(1.0), Some(1.0)).is_empty());
        assert!(validate_exercise_input(Some(200.0), Some(50.0), Some(10.0)).is_empty());
        assert_eq!(
            validate_exercise_input(Some(200.5), None, None),
            vec![ExerciseInputError::WeightOutOfRange]
        );
    }

    #[test]
    fn test_parse_exercise_input() {
        let input = parse_exercise_input("62,5", "8", "").unwrap();
        assert_eq!(input.weight_kg, Some(62.5));
        assert_eq!(input.reps, Some(8));
        assert_eq!(input.sets, None);

        let errors = parse_exercise_input("heavy", "100", "3").unwrap_err();
        assert_eq!(
            errors,
            vec![
                ExerciseInputError::NotANumber("weight"),
                ExerciseInputError::RepsOutOfRange,
            ]
        );
    }

    #[test]
    fn test_weight_category_bands() {
        assert_eq!(WeightCategory::for_weight(10.0), WeightCategory::Light);
        assert_eq!(WeightCategory::for_weight(10.5), WeightCategory::Moderate);
        assert_eq!(WeightCategory::for_weight(20.0), WeightCategory::Moderate);
        assert_eq!(WeightCategory::for_weight(35.0), WeightCategory::Heavy);
        assert_eq!(WeightCategory::for_weight(36.0), WeightCategory::Maximum);
        assert_eq!(WeightCategory::Maximum.range_label(), "36+ kg");
    }
}
