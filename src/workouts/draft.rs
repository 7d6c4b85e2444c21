//! In-progress logging of a program day.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::analysis::{parse_exercise_input, recommended_weight, ExerciseInput, ExerciseInputError};
use super::types::{Feeling, PerformedExercise, Workout, WorkoutType};
use crate::goals::UserLevel;
use crate::programs::{ProgramDay, ProgramExercise, SetTarget, WorkoutProgram};

/// Session length recorded for program workouts.
pub const DEFAULT_PROGRAM_DURATION_MINUTES: u32 = 60;

/// Errors raised while logging a program day.
#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("Day {0} is a rest day")]
    RestDay(u8),

    #[error("Day {0} has no exercises")]
    EmptyDay(u8),

    #[error("Exercise {0} is not part of this day")]
    UnknownExercise(String),

    #[error("Record at least one exercise before saving")]
    NoExercises,

    #[error("Invalid exercise input")]
    InvalidInput(Vec<ExerciseInputError>),
}

/// Text fields of the exercise editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseForm {
    pub weight: String,
    pub reps: String,
    pub sets: String,
    pub duration: String,
    pub notes: String,
}

impl ExerciseForm {
    /// Validate the numeric fields.
    pub fn parse(&self) -> Result<(ExerciseInput, Option<u32>), Vec<ExerciseInputError>> {
        let input = parse_exercise_input(&self.weight, &self.reps, &self.sets);
        let duration = match self.duration.trim() {
            "" => Ok(None),
            text => text
                .parse::<u32>()
                .map(Some)
                .map_err(|_| ExerciseInputError::NotANumber("duration")),
        };

        match (input, duration) {
            (Ok(input), Ok(duration)) => Ok((input, duration)),
            (Err(mut errors), Err(e)) => {
                errors.push(e);
                Err(errors)
            }
            (Err(errors), Ok(_)) => Err(errors),
            (Ok(_), Err(e)) => Err(vec![e]),
        }
    }
}

/// A program day being logged.
#[derive(Debug, Clone)]
pub struct WorkoutDraft {
    program_id: String,
    day: ProgramDay,
    entries: Vec<PerformedExercise>,
    pub feeling: Feeling,
    pub notes: String,
    pub duration_minutes: u32,
    pub workout_type: WorkoutType,
}

impl WorkoutDraft {
    /// Start logging `day_number` of `program`.
    pub fn start(program: &WorkoutProgram, day_number: u8) -> Result<Self, DraftError> {
        let day = program.day(day_number).ok_or(DraftError::RestDay(day_number))?;
        if day.exercises.is_empty() {
            return Err(DraftError::EmptyDay(day_number));
        }

        Ok(Self {
            program_id: program.id.clone(),
            day: day.clone(),
            entries: Vec::new(),
            feeling: Feeling::default(),
            notes: String::new(),
            duration_minutes: DEFAULT_PROGRAM_DURATION_MINUTES,
            workout_type: WorkoutType::Strength,
        })
    }

    pub fn program_id(&self) -> &str {
        &self.program_id
    }

    pub fn day(&self) -> &ProgramDay {
        &self.day
    }

    fn planned(&self, exercise_id: &str) -> Option<&ProgramExercise> {
        self.day.exercises.iter().find(|e| e.exercise_id == exercise_id)
    }

    pub fn entry(&self, exercise_id: &str) -> Option<&PerformedExercise> {
        self.entries.iter().find(|e| e.exercise_id == exercise_id)
    }

    pub fn is_recorded(&self, exercise_id: &str) -> bool {
        self.entry(exercise_id).is_some()
    }

    pub fn recorded_count(&self) -> usize {
        self.entries.len()
    }

    /// Editor contents for an exercise.
    ///
    /// A recorded entry is shown as-is. Otherwise the weight is prefilled
    /// from the recommendation and reps and sets from the plan (10 × 3 when
    /// the plan has none).
    pub fn editor_defaults(
        &self,
        exercise_id: &str,
        history: &[Workout],
        level: UserLevel,
    ) -> ExerciseForm {
        let planned = self.planned(exercise_id);
        let planned_reps = planned.and_then(|p| p.reps());
        let planned_sets = planned.map(|p| p.sets);
        let planned_duration = planned.and_then(|p| match p.target {
            SetTarget::Seconds(secs) if secs >= 60 => Some(secs / 60),
            _ => None,
        });
        let opt = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();

        if let Some(entry) = self.entry(exercise_id) {
            return ExerciseForm {
                weight: entry.weight_kg.map(|w| w.to_string()).unwrap_or_default(),
                reps: opt(entry.reps.or(planned_reps)),
                sets: opt(entry.sets.or(planned_sets)),
                duration: opt(entry.duration_minutes.or(planned_duration)),
                notes: entry.notes.clone().unwrap_or_default(),
            };
        }

        let recommendation = recommended_weight(history, exercise_id, level);
        ExerciseForm {
            weight: recommendation.recommended.to_string(),
            reps: planned_reps.unwrap_or(10).to_string(),
            sets: planned_sets.unwrap_or(3).to_string(),
            duration: opt(planned_duration),
            notes: String::new(),
        }
    }

    /// Record (or replace) the result for a planned exercise.
    pub fn record(&mut self, exercise_id: &str, form: &ExerciseForm) -> Result<(), DraftError> {
        let name = self
            .planned(exercise_id)
            .map(|p| p.name.clone())
            .ok_or_else(|| DraftError::UnknownExercise(exercise_id.to_string()))?;

        let (input, duration) = form.parse().map_err(DraftError::InvalidInput)?;
        let notes = form.notes.trim();

        let entry = PerformedExercise {
            exercise_id: exercise_id.to_string(),
            name,
            sets: input.sets,
            reps: input.reps,
            weight_kg: input.weight_kg,
            duration_minutes: duration,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        };

        match self.entries.iter_mut().find(|e| e.exercise_id == exercise_id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        Ok(())
    }

    pub fn remove(&mut self, exercise_id: &str) {
        self.entries.retain(|e| e.exercise_id != exercise_id);
    }

    /// Planned exercises that have not been recorded yet.
    pub fn skipped(&self) -> Vec<&ProgramExercise> {
        self.day
            .exercises
            .iter()
            .filter(|e| !self.is_recorded(&e.exercise_id))
            .collect()
    }

    /// Turn the draft into a completed workout.
    pub fn finish(self, performed_at: DateTime<Utc>) -> Result<Workout, DraftError> {
        if self.entries.is_empty() {
            return Err(DraftError::NoExercises);
        }

        let notes = self.notes.trim();
        let mut workout = Workout::new(performed_at, self.workout_type);
        workout.exercises = self.entries;
        workout.feeling = self.feeling;
        workout.notes = (!notes.is_empty()).then(|| notes.to_string());
        workout.duration_minutes = self.duration_minutes;
        workout.completed = true;
        workout.program_id = Some(self.program_id);
        workout.day_number = Some(self.day.day_number);
        Ok(workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programs::ProgramCatalog;

    fn form(weight: &str, reps: &str, sets: &str) -> ExerciseForm {
        ExerciseForm {
            weight: weight.to_string(),
            reps: reps.to_string(),
            sets: sets.to_string(),
            ..Default::default()
        }
    }

    fn stronglifts() -> WorkoutProgram {
        ProgramCatalog::default()
            .get("stronglifts_5x5")
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_start_rejects_rest_day() {
        let program = stronglifts();
        assert_eq!(WorkoutDraft::start(&program, 2).unwrap_err(), DraftError::RestDay(2));
        assert!(WorkoutDraft::start(&program, 1).is_ok());
    }

    #[test]
    fn test_start_rejects_empty_day() {
        let mut program = stronglifts();
        program.days[0].exercises.clear();
        assert_eq!(WorkoutDraft::start(&program, 1).unwrap_err(), DraftError::EmptyDay(1));
    }

    #[test]
    fn test_record_and_skipped() {
        let program = stronglifts();
        let mut draft = WorkoutDraft::start(&program, 1).unwrap();
        assert_eq!(draft.skipped().len(), 3);

        draft.record("squat", &form("100", "5", "5")).unwrap();
        draft.record("bench_press", &form("70", "5", "5")).unwrap();

        let skipped: Vec<&str> = draft.skipped().iter().map(|e| e.exercise_id.as_str()).collect();
        assert_eq!(skipped, vec!["barbell_rows"]);

        // Recording again replaces the entry
        draft.record("squat", &form("102.5", "5", "5")).unwrap();
        assert_eq!(draft.recorded_count(), 2);
        assert_eq!(draft.entry("squat").unwrap().weight_kg, Some(102.5));
    }

    #[test]
    fn test_record_rejects_unknown_and_invalid() {
        let program = stronglifts();
        let mut draft = WorkoutDraft::start(&program, 1).unwrap();

        assert_eq!(
            draft.record("deadlift", &form("100", "5", "1")),
            Err(DraftError::UnknownExercise("deadlift".to_string()))
        );

        let err = draft.record("squat", &form("250", "5", "5")).unwrap_err();
        assert_eq!(
            err,
            DraftError::InvalidInput(vec![ExerciseInputError::WeightOutOfRange])
        );
        assert_eq!(draft.recorded_count(), 0);
    }

    #[test]
    fn test_finish_builds_program_workout() {
        let program = stronglifts();
        let mut draft = WorkoutDraft::start(&program, 3).unwrap();
        assert!(WorkoutDraft::start(&program, 3)
            .unwrap()
            .finish(Utc::now())
            .is_err());

        draft.record("deadlift", &form("140", "5", "1")).unwrap();
        draft.feeling = Feeling::new(5).unwrap();
        draft.notes = "  new PR  ".to_string();

        let workout = draft.finish(Utc::now()).unwrap();
        assert!(workout.completed);
        assert_eq!(workout.workout_type, WorkoutType::Strength);
        assert_eq!(workout.duration_minutes, 60);
        assert_eq!(workout.program_id.as_deref(), Some("stronglifts_5x5"));
        assert_eq!(workout.day_number, Some(3));
        assert_eq!(workout.notes.as_deref(), Some("new PR"));
        assert_eq!(workout.feeling.value(), 5);
    }

    #[test]
    fn test_editor_defaults_use_plan_and_recommendation() {
        let program = stronglifts();
        let draft = WorkoutDraft::start(&program, 1).unwrap();

        let defaults = draft.editor_defaults("squat", &[], UserLevel::Beginner);
        assert_eq!(defaults.weight, "10");
        assert_eq!(defaults.reps, "5");
        assert_eq!(defaults.sets, "5");
    }

    #[test]
    fn test_form_duration_must_be_number() {
        let mut bad = form("", "", "");
        bad.duration = "half an hour".to_string();
        assert_eq!(
            bad.parse().unwrap_err(),
            vec![ExerciseInputError::NotANumber("duration")]
        );
    }
}
