//! Integration tests for training by program.
//!
//! Covers picking a program, logging its days through a draft and the
//! statistics that follow from the logged sessions.

use chrono::{Duration, Local, Utc};
use fittrack::goals::{FitnessGoal, UserGoals, UserLevel, WeightEntry};
use fittrack::i18n::Language;
use fittrack::metrics::{overall_stats, week_progress, ProgressTier};
use fittrack::onboarding::CompletedOnboarding;
use fittrack::programs::ProgramCatalog;
use fittrack::session::FitnessSession;
use fittrack::storage::config::{AppConfig, UserProfile};
use fittrack::storage::database::Database;
use fittrack::workouts::{local_noon, recommended_weight, ExerciseForm, WorkoutDraft};

fn strength_session() -> FitnessSession {
    let db = Database::open_in_memory().expect("Failed to create test database");
    let mut session = FitnessSession::load(db, &AppConfig::default()).unwrap();

    let now = Utc::now();
    let mut profile = UserProfile::new("Riley");
    profile.level = UserLevel::Advanced;
    profile.onboarding_completed = true;
    profile.goals = UserGoals {
        primary_goal: FitnessGoal::Strength,
        current_weight: Some(85.0),
        ..UserGoals::default()
    };
    session
        .complete_onboarding(
            CompletedOnboarding {
                profile,
                initial_weight: WeightEntry::new(85.0, now),
                language: Language::English,
            },
            now,
        )
        .unwrap();
    session
}

fn form(weight: &str, reps: &str, sets: &str) -> ExerciseForm {
    ExerciseForm {
        weight: weight.to_string(),
        reps: reps.to_string(),
        sets: sets.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_program_days_follow_the_cycle() {
    let catalog = ProgramCatalog::default();
    let program = catalog.get("stronglifts_5x5").unwrap();
    let mut session = strength_session();
    session.select_program(Some(program)).unwrap();
    assert_eq!(
        session.profile().unwrap().current_program.as_deref(),
        Some("stronglifts_5x5")
    );

    let today = Local::now().date_naive();
    let mut expected = vec![1u8, 3, 5, 1].into_iter();
    for days_ago in (0..3).rev() {
        let last = session.last_program_day(&program.id);
        let day = program.next_day(last).unwrap();
        assert_eq!(day.day_number, expected.next().unwrap());

        let mut draft = WorkoutDraft::start(program, day.day_number).unwrap();
        for exercise in &day.exercises {
            draft.record(&exercise.exercise_id, &form("100", "5", "5")).unwrap();
        }
        assert!(draft.skipped().is_empty());

        let performed_at = local_noon(today - Duration::days(days_ago));
        let workout = draft.finish(performed_at).unwrap();
        session.add_workout(workout, Utc::now()).unwrap();
    }

    let last = session.last_program_day(&program.id);
    assert_eq!(program.next_day(last).unwrap().day_number, expected.next().unwrap());

    let stats = overall_stats(session.workouts());
    assert_eq!(stats.total_workouts, 3);
    assert_eq!(session.streak(today), 3);
}

#[test]
fn test_logged_weight_drives_recommendation() {
    let catalog = ProgramCatalog::default();
    let program = catalog.get("stronglifts_5x5").unwrap();
    let mut session = strength_session();

    let before = recommended_weight(session.workouts(), "squat", UserLevel::Advanced);
    assert_eq!(before.recommended, 30);

    let mut draft = WorkoutDraft::start(program, 1).unwrap();
    draft.record("squat", &form("100", "5", "5")).unwrap();
    let workout = draft.finish(Utc::now()).unwrap();
    session.add_workout(workout, Utc::now()).unwrap();

    let after = recommended_weight(session.workouts(), "squat", UserLevel::Advanced);
    assert_eq!(after.recommended, 110);
    assert_eq!(after.range.min, 90);
    assert_eq!(after.range.max, 115);
}

#[test]
fn test_week_progress_counts_planned_slots() {
    let mut session = strength_session();
    let today = Local::now().date_naive();

    let empty = week_progress(session.workouts(), session.schedules(), today);
    assert_eq!(empty.total, 3);
    assert_eq!(empty.tier(), ProgressTier::NotStarted);

    let catalog = ProgramCatalog::default();
    let program = catalog.get("stronglifts_5x5").unwrap();
    let mut draft = WorkoutDraft::start(program, 1).unwrap();
    draft.record("squat", &form("80", "5", "5")).unwrap();
    session
        .add_workout(draft.finish(local_noon(today)).unwrap(), Utc::now())
        .unwrap();

    let progress = week_progress(session.workouts(), session.schedules(), today);
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.percentage, 33);
    assert_eq!(progress.tier(), ProgressTier::Started);
}
