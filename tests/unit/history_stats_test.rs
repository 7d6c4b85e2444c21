//! Unit tests for statistics over a multi-week history.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use fittrack::metrics::{
    feeling_chart, frequency_chart, milestones, overall_stats, recent_weekly_stats,
    volume_chart, Milestone,
};
use fittrack::workouts::{
    local_noon, week_start, Feeling, PerformedExercise, Workout, WorkoutType,
};

/// A Wednesday, so the current week already has two days behind it.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

fn workout(days_ago: i64, minutes: u32, feeling: u8) -> Workout {
    let date = today() - Duration::days(days_ago);
    let mut workout = Workout::new(local_noon(date), WorkoutType::Strength);
    workout.duration_minutes = minutes;
    workout.feeling = Feeling::new(feeling).unwrap();
    workout
        .exercises
        .push(PerformedExercise::new("bench_press", "Bench Press").with_load(50.0, 10, 3));
    workout
}

fn history() -> Vec<Workout> {
    vec![
        // Current week: Mon, Tue, Wed
        workout(2, 45, 4),
        workout(1, 60, 5),
        workout(0, 30, 3),
        // Previous week: two sessions
        workout(7, 50, 4),
        workout(9, 40, 2),
    ]
}

#[test]
fn test_weekly_stats_newest_first_with_improvement() {
    assert_eq!(week_start(today()).weekday(), Weekday::Mon);

    let weeks = recent_weekly_stats(&history(), today(), 3);
    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[0].week_start, week_start(today()));
    assert_eq!(weeks[1].week_start, week_start(today()) - Duration::weeks(1));

    assert_eq!(weeks[0].completed_workouts, 3);
    assert_eq!(weeks[0].total_duration_minutes, 135);
    assert!((weeks[0].average_feeling - 4.0).abs() < 0.01);
    assert!((weeks[0].improvement_percentage - 50.0).abs() < 0.01);

    assert_eq!(weeks[1].completed_workouts, 2);
    assert_eq!(weeks[1].improvement_percentage, 0.0);
    assert_eq!(weeks[2].completed_workouts, 0);
}

#[test]
fn test_incomplete_sessions_are_not_counted() {
    let mut workouts = history();
    workouts[0].completed = false;

    let stats = overall_stats(&workouts);
    assert_eq!(stats.total_workouts, 4);

    let weeks = recent_weekly_stats(&workouts, today(), 1);
    assert_eq!(weeks[0].total_workouts, 3);
    assert_eq!(weeks[0].completed_workouts, 2);
}

#[test]
fn test_charts_cover_the_window() {
    let workouts = history();

    let frequency = frequency_chart(&workouts, 14, today());
    assert_eq!(frequency.len(), 14);
    assert_eq!(frequency.last().unwrap().date, today());
    assert_eq!(frequency.iter().map(|p| p.value).sum::<f32>(), 5.0);

    let feeling = feeling_chart(&workouts, 30, today());
    assert_eq!(feeling.len(), 5);
    assert!(feeling.windows(2).all(|w| w[0].date < w[1].date));

    let volume = volume_chart(&workouts, 4, today());
    assert_eq!(volume.len(), 2);
    assert_eq!(volume[0].date, week_start(today()) - Duration::weeks(1));
    assert_eq!(volume[1].value, 3.0 * 1500.0);
}

#[test]
fn test_feeling_window_has_exactly_n_days() {
    let workouts = history();

    // Nine days ending today leave out the session nine days ago
    let feeling = feeling_chart(&workouts, 9, today());
    assert_eq!(feeling.len(), 4);
    assert_eq!(feeling[0].date, today() - Duration::days(7));

    let feeling = feeling_chart(&workouts, 10, today());
    assert_eq!(feeling.len(), 5);
    assert_eq!(feeling[0].date, frequency_chart(&workouts, 10, today())[0].date);
}

#[test]
fn test_milestones_from_history() {
    let stats = overall_stats(&history());
    let reached = milestones(&stats, 3);
    assert!(reached.contains(&Milestone::FirstWorkout));
    assert!(reached.contains(&Milestone::FiveWorkouts));
    assert!(reached.contains(&Milestone::ThreeDayStreak));
    assert!(!reached.contains(&Milestone::TenWorkouts));
    assert!(!reached.contains(&Milestone::WeekStreak));
}
