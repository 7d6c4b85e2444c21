//! Workout log type definitions.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Kind of training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Strength,
    Cardio,
    Functional,
    Stretching,
}

impl WorkoutType {
    pub fn all() -> &'static [WorkoutType] {
        &[
            WorkoutType::Strength,
            WorkoutType::Cardio,
            WorkoutType::Functional,
            WorkoutType::Stretching,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "strength",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Functional => "functional",
            WorkoutType::Stretching => "stretching",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == s)
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "workout-type-strength",
            WorkoutType::Cardio => "workout-type-cardio",
            WorkoutType::Functional => "workout-type-functional",
            WorkoutType::Stretching => "workout-type-stretching",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "🏋",
            WorkoutType::Cardio => "🏃",
            WorkoutType::Functional => "⚡",
            WorkoutType::Stretching => "🧘",
        }
    }
}

/// Errors raised when building workout values.
#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    #[error("Feeling must be between 1 and 5, got {0}")]
    InvalidFeeling(u8),

    #[error("Unknown workout type: {0}")]
    UnknownType(String),
}

/// Subjective rating of a session, 1 (awful) to 5 (excellent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Feeling(u8);

impl Feeling {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, WorkoutError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(WorkoutError::InvalidFeeling(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn emoji(&self) -> &'static str {
        match self.0 {
            1 => "😫",
            2 => "😕",
            3 => "😐",
            4 => "🙂",
            _ => "😄",
        }
    }

    /// All ratings from worst to best.
    pub fn scale() -> impl Iterator<Item = Feeling> {
        (Self::MIN..=Self::MAX).map(Feeling)
    }
}

impl Default for Feeling {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Feeling {
    type Error = WorkoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Feeling::new(value)
    }
}

impl From<Feeling> for u8 {
    fn from(feeling: Feeling) -> u8 {
        feeling.0
    }
}

/// One exercise as performed within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformedExercise {
    /// Library identifier, or a free-form slug for ad-hoc exercises
    pub exercise_id: String,
    pub name: String,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight_kg: Option<f32>,
    pub duration_minutes: Option<u32>,
    pub notes: Option<String>,
}

impl PerformedExercise {
    pub fn new(exercise_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            name: name.into(),
            sets: None,
            reps: None,
            weight_kg: None,
            duration_minutes: None,
            notes: None,
        }
    }

    /// Builder-style helper for weighted sets.
    pub fn with_load(mut self, weight_kg: f32, reps: u32, sets: u32) -> Self {
        self.weight_kg = Some(weight_kg);
        self.reps = Some(reps);
        self.sets = Some(sets);
        self
    }

    /// Lifted volume in kilograms: weight × reps × sets, one set when unset.
    pub fn volume(&self) -> f32 {
        match (self.weight_kg, self.reps) {
            (Some(weight), Some(reps)) => weight * reps as f32 * self.sets.unwrap_or(1) as f32,
            _ => 0.0,
        }
    }

    /// Weight if one was recorded and is positive.
    pub fn working_weight(&self) -> Option<f32> {
        self.weight_kg.filter(|w| *w > 0.0)
    }
}

/// A logged training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub performed_at: DateTime<Utc>,
    pub workout_type: WorkoutType,
    pub exercises: Vec<PerformedExercise>,
    pub duration_minutes: u32,
    pub feeling: Feeling,
    pub notes: Option<String>,
    pub completed: bool,
    /// Program this session followed, if any
    pub program_id: Option<String>,
    /// Program day number this session followed
    pub day_number: Option<u8>,
}

impl Workout {
    /// Create a completed workout with no exercises.
    pub fn new(performed_at: DateTime<Utc>, workout_type: WorkoutType) -> Self {
        Self {
            id: Uuid::new_v4(),
            performed_at,
            workout_type,
            exercises: Vec::new(),
            duration_minutes: 0,
            feeling: Feeling::default(),
            notes: None,
            completed: true,
            program_id: None,
            day_number: None,
        }
    }

    /// Calendar date of the session in local time.
    pub fn date(&self) -> NaiveDate {
        self.performed_at.with_timezone(&Local).date_naive()
    }

    /// Total lifted volume across all exercises.
    pub fn volume(&self) -> f32 {
        self.exercises.iter().map(PerformedExercise::volume).sum()
    }

    /// Heaviest weight used in the session, 0 when nothing was weighted.
    pub fn max_weight(&self) -> f32 {
        self.exercises
            .iter()
            .filter_map(PerformedExercise::working_weight)
            .fold(0.0, f32::max)
    }

    pub fn contains_exercise(&self, exercise_id: &str) -> bool {
        self.exercises.iter().any(|e| e.exercise_id == exercise_id)
    }

    /// Whether this session belongs to a program.
    pub fn is_program_workout(&self) -> bool {
        self.program_id.is_some()
    }
}

/// A recurring planned training slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSchedule {
    pub id: Uuid,
    pub day_of_week: Weekday,
    /// Start time (HH:MM)
    pub time: String,
    pub program_id: Option<String>,
    pub enabled: bool,
}

impl WorkoutSchedule {
    pub fn new(day_of_week: Weekday, time: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            day_of_week,
            time: time.into(),
            program_id: None,
            enabled: true,
        }
    }
}

/// Aggregated numbers for one Monday-start week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub week_start: NaiveDate,
    pub total_workouts: u32,
    pub completed_workouts: u32,
    /// Mean feeling of completed workouts, 0 when none
    pub average_feeling: f32,
    pub total_duration_minutes: u32,
    /// Change in completed workouts versus the previous week
    pub improvement_percentage: f32,
}

/// Midday local time on `date`, used when a session is logged for a past day.
pub fn local_noon(date: NaiveDate) -> DateTime<Utc> {
    let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
    match Local.from_local_datetime(&noon) {
        chrono::LocalResult::Single(dt) => dt.with_timezone(&Utc),
        chrono::LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        chrono::LocalResult::None => Utc.from_utc_datetime(&noon),
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    use chrono::Datelike;
    date - chrono::Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feeling_bounds() {
        assert!(Feeling::new(0).is_err());
        assert_eq!(Feeling::new(1).unwrap().value(), 1);
        assert_eq!(Feeling::new(5).unwrap().value(), 5);
        assert_eq!(Feeling::new(6), Err(WorkoutError::InvalidFeeling(6)));
        assert_eq!(Feeling::scale().count(), 5);
    }

    #[test]
    fn test_feeling_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Feeling>("4").is_ok());
        assert!(serde_json::from_str::<Feeling>("9").is_err());
    }

    #[test]
    fn test_exercise_volume() {
        let bench = PerformedExercise::new("bench_press", "Bench press").with_load(60.0, 8, 3);
        assert_eq!(bench.volume(), 1440.0);

        let mut single = PerformedExercise::new("squat", "Squat");
        single.weight_kg = Some(100.0);
        single.reps = Some(5);
        assert_eq!(single.volume(), 500.0);

        let plank = PerformedExercise::new("plank", "Plank");
        assert_eq!(plank.volume(), 0.0);
    }

    #[test]
    fn test_workout_max_weight_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let mut workout = Workout::new(local_noon(date), WorkoutType::Strength);
        workout.exercises = vec![
            PerformedExercise::new("squat", "Squat").with_load(80.0, 5, 5),
            PerformedExercise::new("bench_press", "Bench").with_load(60.0, 5, 5),
            PerformedExercise::new("plank", "Plank"),
        ];

        assert_eq!(workout.max_weight(), 80.0);
        assert_eq!(workout.date(), date);
        assert!(workout.contains_exercise("plank"));
        assert!(!workout.contains_exercise("deadlift"));
    }

    #[test]
    fn test_week_start_is_monday() {
        let thursday = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        assert_eq!(week_start(thursday), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());

        let sunday = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());

        let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(week_start(monday), monday);
    }
}
