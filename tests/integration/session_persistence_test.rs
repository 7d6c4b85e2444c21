//! Integration tests for session persistence on an on-disk database.
//!
//! Every test opens a fresh database file, works through the session API,
//! then reopens the file to check what survived.

use chrono::{Duration, Utc, Weekday};
use fittrack::goals::{FitnessGoal, UserLevel};
use fittrack::i18n::Language;
use fittrack::onboarding::{CompletedOnboarding, OnboardingWizard};
use fittrack::session::FitnessSession;
use fittrack::storage::config::{AppConfig, ThemePreference};
use fittrack::storage::database::Database;
use fittrack::workouts::{PerformedExercise, Workout, WorkoutSchedule, WorkoutType};
use std::path::Path;
use tempfile::TempDir;

fn onboard(name: &str, goal: FitnessGoal) -> CompletedOnboarding {
    let mut wizard = OnboardingWizard::with_language(Language::English);
    let form = wizard.form_mut();
    form.name = name.to_string();
    form.level = UserLevel::Intermediate;
    form.goal = goal;
    form.target_description = "Get fitter".to_string();
    form.current_weight = "82".to_string();
    form.target_weight = "76".to_string();
    form.toggle_day(Weekday::Mon);
    form.toggle_day(Weekday::Thu);
    wizard.complete(Utc::now()).expect("wizard should complete")
}

fn open_session(path: &Path) -> FitnessSession {
    let db = Database::open(path).expect("Failed to open database");
    FitnessSession::load(db, &AppConfig::default()).expect("Failed to load session")
}

#[test]
fn test_profile_and_workouts_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("fittrack.db");
    let now = Utc::now();

    let profile_id = {
        let mut session = open_session(&path);
        assert!(session.needs_onboarding());
        session
            .complete_onboarding(onboard("Casey", FitnessGoal::WeightLoss), now)
            .unwrap();

        let mut workout = Workout::new(now - Duration::hours(2), WorkoutType::Strength);
        workout.duration_minutes = 50;
        workout
            .exercises
            .push(PerformedExercise::new("squat", "Squat").with_load(60.0, 8, 3));
        session.add_workout(workout, now).unwrap();
        session
            .save_schedule(WorkoutSchedule::new(Weekday::Mon, "07:30"))
            .unwrap();
        session.add_weight_entry(80.5, None, now).unwrap();
        session.set_theme(ThemePreference::Light).unwrap();

        session.profile().unwrap().id
    };

    let session = open_session(&path);
    let profile = session.profile().expect("profile should be restored");
    assert_eq!(profile.id, profile_id);
    assert_eq!(profile.name, "Casey");
    assert_eq!(profile.goals.current_weight, Some(82.0));
    assert_eq!(profile.goals.target_weight, Some(76.0));
    assert_eq!(profile.goals.preferred_days, vec![Weekday::Mon, Weekday::Thu]);

    assert_eq!(session.language(), Language::English);
    assert_eq!(session.theme(), ThemePreference::Light);

    assert_eq!(session.workouts().len(), 1);
    assert_eq!(session.workouts()[0].exercises[0].weight_kg, Some(60.0));
    assert_eq!(session.schedules().len(), 1);
    assert_eq!(session.schedules()[0].time, "07:30");
    assert_eq!(session.weight_entries().len(), 2);
    assert!(!session.achievements().is_empty());
    assert!(!session.weekly_stats().is_empty());
}

#[test]
fn test_logout_persists_and_switch_restores_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fittrack.db");
    let now = Utc::now();

    let first_id = {
        let mut session = open_session(&path);
        session
            .complete_onboarding(onboard("Morgan", FitnessGoal::Strength), now)
            .unwrap();
        session
            .add_workout(Workout::new(now, WorkoutType::Cardio), now)
            .unwrap();
        let id = session.profile().unwrap().id;
        session.logout(now).unwrap();
        id
    };

    // After a logout the app starts in the wizard, with the old profile offered
    let mut session = open_session(&path);
    assert!(session.needs_onboarding());
    let backups = session.backups().unwrap();
    assert_eq!(backups.len(), 1);
    assert_eq!(backups[0].id, first_id);
    assert_eq!(backups[0].name, "Morgan");

    session
        .complete_onboarding(onboard("Taylor", FitnessGoal::Endurance), now)
        .unwrap();
    assert!(session.workouts().is_empty());

    session.switch_user(&first_id, now).unwrap();
    assert_eq!(session.profile().unwrap().name, "Morgan");
    assert_eq!(session.workouts().len(), 1);

    let names: Vec<String> = session
        .backups()
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert!(names.contains(&"Taylor".to_string()));
}

#[test]
fn test_reset_keeps_profile_across_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fittrack.db");
    let now = Utc::now();

    {
        let mut session = open_session(&path);
        session
            .complete_onboarding(onboard("Jamie", FitnessGoal::MuscleGain), now)
            .unwrap();
        session
            .add_workout(Workout::new(now, WorkoutType::Functional), now)
            .unwrap();
        session.reset_profile_data(now).unwrap();
    }

    let session = open_session(&path);
    assert_eq!(session.profile().unwrap().name, "Jamie");
    assert!(session.workouts().is_empty());
    assert!(session.weight_entries().is_empty());
}
