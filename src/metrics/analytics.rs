//! Workout history analytics.
//!
//! This module provides aggregations over the logged workouts:
//! - Weekly rollups with week-over-week improvement
//! - Per-exercise progress series
//! - Daily workout frequency
//! - Overall totals and milestone badges
//! - Current week progress and the end-of-week summary

use chrono::{Duration, NaiveDate};

use crate::storage::config::UserProfile;
use crate::workouts::types::{week_start, WeeklyStats, Workout, WorkoutSchedule, WorkoutType};

/// Minimum number of sessions the week progress bar counts toward.
pub const MIN_WEEKLY_TARGET: u32 = 3;

/// Share of planned sessions that still counts as a good week.
pub const GOOD_WEEK_RATIO: f32 = 0.7;

fn in_window(workout: &Workout, start: NaiveDate, end: NaiveDate) -> bool {
    let date = workout.date();
    date >= start && date <= end
}

fn average_feeling<'a>(workouts: impl Iterator<Item = &'a Workout>) -> f32 {
    let (sum, count) = workouts.fold((0u32, 0u32), |(sum, count), w| {
        (sum + w.feeling.value() as u32, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum as f32 / count as f32
    }
}

// ========== Weekly Stats ==========

/// Stats for the seven days starting at `week_start`.
///
/// Improvement compares completed sessions with the seven days before; it is 0
/// when the previous week had none.
pub fn weekly_stats(workouts: &[Workout], week_start: NaiveDate) -> WeeklyStats {
    let week_end = week_start + Duration::days(6);
    let week: Vec<&Workout> = workouts
        .iter()
        .filter(|w| in_window(w, week_start, week_end))
        .collect();
    let completed: Vec<&Workout> = week.iter().copied().filter(|w| w.completed).collect();

    let prev_start = week_start - Duration::days(7);
    let prev_end = week_start - Duration::days(1);
    let prev_completed = workouts
        .iter()
        .filter(|w| w.completed && in_window(w, prev_start, prev_end))
        .count();

    let improvement_percentage = if prev_completed > 0 {
        (completed.len() as f32 - prev_completed as f32) / prev_completed as f32 * 100.0
    } else {
        0.0
    };

    WeeklyStats {
        week_start,
        total_workouts: week.len() as u32,
        completed_workouts: completed.len() as u32,
        average_feeling: average_feeling(completed.iter().copied()),
        total_duration_minutes: completed.iter().map(|w| w.duration_minutes).sum(),
        improvement_percentage,
    }
}

/// Stats for the `weeks` most recent Monday-start weeks, newest first.
pub fn recent_weekly_stats(workouts: &[Workout], today: NaiveDate, weeks: u32) -> Vec<WeeklyStats> {
    let current = week_start(today);
    (0..weeks as i64)
        .map(|i| weekly_stats(workouts, current - Duration::weeks(i)))
        .collect()
}

// ========== Progress & Frequency ==========

/// One value of an exercise over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub value: f32,
}

/// Weight (or reps for unweighted work) of an exercise per completed workout,
/// oldest first.
pub fn progress_data(workouts: &[Workout], exercise_name: &str) -> Vec<ProgressPoint> {
    let mut points: Vec<(chrono::DateTime<chrono::Utc>, ProgressPoint)> = workouts
        .iter()
        .filter(|w| w.completed)
        .filter_map(|w| {
            let exercise = w.exercises.iter().find(|e| e.name == exercise_name)?;
            let value = exercise
                .weight_kg
                .filter(|kg| *kg > 0.0)
                .or_else(|| exercise.reps.filter(|r| *r > 0).map(|r| r as f32))
                .unwrap_or(0.0);
            Some((
                w.performed_at,
                ProgressPoint {
                    date: w.date(),
                    value,
                },
            ))
        })
        .collect();

    points.sort_by_key(|(at, _)| *at);
    points.into_iter().map(|(_, p)| p).collect()
}

/// Number of completed workouts on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// Completed workouts per day for the last `days` days ending today, oldest first.
///
/// Every day of the window is present, days without training have a count of 0.
pub fn workout_frequency(workouts: &[Workout], days: u32, today: NaiveDate) -> Vec<DailyCount> {
    if days == 0 {
        return Vec::new();
    }

    let start = today - Duration::days(days as i64 - 1);
    let mut counts: Vec<DailyCount> = (0..days as i64)
        .map(|i| DailyCount {
            date: start + Duration::days(i),
            count: 0,
        })
        .collect();

    for workout in workouts.iter().filter(|w| w.completed) {
        let offset = (workout.date() - start).num_days();
        if (0..days as i64).contains(&offset) {
            counts[offset as usize].count += 1;
        }
    }

    counts
}

// ========== Overall Stats ==========

/// Lifetime totals over completed workouts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverallStats {
    pub total_workouts: u32,
    pub total_duration_minutes: u32,
    pub average_feeling: f32,
    /// Completed sessions per type, in [`WorkoutType::all`] order, zero counts omitted
    pub by_type: Vec<(WorkoutType, u32)>,
}

impl OverallStats {
    pub fn total_hours(&self) -> u32 {
        (self.total_duration_minutes as f32 / 60.0).round() as u32
    }

    /// Largest per-type count, used to scale bars.
    pub fn max_type_count(&self) -> u32 {
        self.by_type.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

pub fn overall_stats(workouts: &[Workout]) -> OverallStats {
    let completed: Vec<&Workout> = workouts.iter().filter(|w| w.completed).collect();

    let by_type = WorkoutType::all()
        .iter()
        .map(|t| {
            let count = completed.iter().filter(|w| w.workout_type == *t).count() as u32;
            (*t, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    OverallStats {
        total_workouts: completed.len() as u32,
        total_duration_minutes: completed.iter().map(|w| w.duration_minutes).sum(),
        average_feeling: average_feeling(completed.iter().copied()),
        by_type,
    }
}

/// Badges shown on the stats screen once a threshold is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    FirstWorkout,
    FiveWorkouts,
    TenWorkouts,
    ThirtyWorkouts,
    ThreeDayStreak,
    WeekStreak,
    GreatFeeling,
    TenHours,
    ThirtyHours,
}

impl Milestone {
    pub fn all() -> &'static [Milestone] {
        &[
            Milestone::FirstWorkout,
            Milestone::FiveWorkouts,
            Milestone::TenWorkouts,
            Milestone::ThirtyWorkouts,
            Milestone::ThreeDayStreak,
            Milestone::WeekStreak,
            Milestone::GreatFeeling,
            Milestone::TenHours,
            Milestone::ThirtyHours,
        ]
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            Milestone::FirstWorkout => "milestone-first-workout",
            Milestone::FiveWorkouts => "milestone-five-workouts",
            Milestone::TenWorkouts => "milestone-ten-workouts",
            Milestone::ThirtyWorkouts => "milestone-thirty-workouts",
            Milestone::ThreeDayStreak => "milestone-three-day-streak",
            Milestone::WeekStreak => "milestone-week-streak",
            Milestone::GreatFeeling => "milestone-great-feeling",
            Milestone::TenHours => "milestone-ten-hours",
            Milestone::ThirtyHours => "milestone-thirty-hours",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Milestone::FirstWorkout => "🏋",
            Milestone::FiveWorkouts => "📈",
            Milestone::TenWorkouts => "🏆",
            Milestone::ThirtyWorkouts => "⭐",
            Milestone::ThreeDayStreak => "🔥",
            Milestone::WeekStreak => "💥",
            Milestone::GreatFeeling => "😊",
            Milestone::TenHours => "⏱",
            Milestone::ThirtyHours => "⌛",
        }
    }

    fn reached(&self, stats: &OverallStats, streak: u32) -> bool {
        match self {
            Milestone::FirstWorkout => stats.total_workouts >= 1,
            Milestone::FiveWorkouts => stats.total_workouts >= 5,
            Milestone::TenWorkouts => stats.total_workouts >= 10,
            Milestone::ThirtyWorkouts => stats.total_workouts >= 30,
            Milestone::ThreeDayStreak => streak >= 3,
            Milestone::WeekStreak => streak >= 7,
            Milestone::GreatFeeling => stats.total_workouts > 0 && stats.average_feeling >= 4.0,
            Milestone::TenHours => stats.total_duration_minutes >= 600,
            Milestone::ThirtyHours => stats.total_duration_minutes >= 1800,
        }
    }
}

/// Milestones reached for the given totals and current streak.
pub fn milestones(stats: &OverallStats, streak: u32) -> Vec<Milestone> {
    Milestone::all()
        .iter()
        .copied()
        .filter(|m| m.reached(stats, streak))
        .collect()
}

// ========== Current Week ==========

/// Message tier for the home screen progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Complete,
    AlmostThere,
    GoodPace,
    Started,
    NotStarted,
}

impl ProgressTier {
    pub fn translation_key(&self) -> &'static str {
        match self {
            ProgressTier::Complete => "progress-complete",
            ProgressTier::AlmostThere => "progress-almost-there",
            ProgressTier::GoodPace => "progress-good-pace",
            ProgressTier::Started => "progress-started",
            ProgressTier::NotStarted => "progress-not-started",
        }
    }
}

/// Completed sessions of the current week against the weekly target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekProgress {
    pub completed: u32,
    pub total: u32,
    /// Rounded, may exceed 100 when more sessions were done than planned
    pub percentage: u32,
}

impl WeekProgress {
    pub fn tier(&self) -> ProgressTier {
        match self.percentage {
            p if p >= 100 => ProgressTier::Complete,
            p if p >= 80 => ProgressTier::AlmostThere,
            p if p >= 50 => ProgressTier::GoodPace,
            _ if self.completed > 0 => ProgressTier::Started,
            _ => ProgressTier::NotStarted,
        }
    }

    /// Bar fill in 0.0..=1.0.
    pub fn fraction(&self) -> f32 {
        (self.percentage as f32 / 100.0).clamp(0.0, 1.0)
    }
}

pub fn week_progress(
    workouts: &[Workout],
    schedules: &[WorkoutSchedule],
    today: NaiveDate,
) -> WeekProgress {
    let start = week_start(today);
    let end = start + Duration::days(6);
    let week: Vec<&Workout> = workouts
        .iter()
        .filter(|w| in_window(w, start, end))
        .collect();

    let completed = week.iter().filter(|w| w.completed).count() as u32;
    let enabled_schedules = schedules.iter().filter(|s| s.enabled).count() as u32;
    let total = (week.len() as u32)
        .max(enabled_schedules)
        .max(MIN_WEEKLY_TARGET);
    let percentage = (completed as f32 / total as f32 * 100.0).round() as u32;

    WeekProgress {
        completed,
        total,
        percentage,
    }
}

/// Message tier for the week summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryTier {
    AllCompleted,
    Good,
    NeedsMore,
}

impl SummaryTier {
    pub fn translation_key(&self) -> &'static str {
        match self {
            SummaryTier::AllCompleted => "summary-all-completed",
            SummaryTier::Good => "summary-good",
            SummaryTier::NeedsMore => "summary-needs-more",
        }
    }

    /// Keys of the encouragement lines shown under the summary.
    pub fn motivation_keys(&self) -> [&'static str; 4] {
        match self {
            SummaryTier::AllCompleted => [
                "summary-praise-discipline",
                "summary-praise-willpower",
                "summary-praise-keep-going",
                "summary-praise-next-week",
            ],
            _ => [
                "summary-push-closer",
                "summary-push-dont-give-up",
                "summary-push-regularity",
                "summary-push-new-week",
            ],
        }
    }
}

/// End-of-week summary against the planned sessions of the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub completed: u32,
    pub planned: u32,
    /// Lifted volume in kg, rounded
    pub total_volume_kg: u32,
    pub average_feeling: f32,
    pub all_completed: bool,
}

impl WeekSummary {
    pub fn tier(&self) -> SummaryTier {
        if self.all_completed {
            SummaryTier::AllCompleted
        } else if self.completed as f32 >= self.planned as f32 * GOOD_WEEK_RATIO {
            SummaryTier::Good
        } else {
            SummaryTier::NeedsMore
        }
    }

    pub fn fraction(&self) -> f32 {
        if self.planned == 0 {
            return 0.0;
        }
        (self.completed as f32 / self.planned as f32).clamp(0.0, 1.0)
    }
}

pub fn week_summary(workouts: &[Workout], profile: &UserProfile, today: NaiveDate) -> WeekSummary {
    let start = week_start(today);
    let end = start + Duration::days(6);
    let week: Vec<&Workout> = workouts
        .iter()
        .filter(|w| in_window(w, start, end))
        .collect();

    let completed = week.iter().filter(|w| w.completed).count() as u32;
    let planned = profile.goals.planned_workouts_per_week();
    let total_volume: f32 = week.iter().map(|w| w.volume()).sum();

    WeekSummary {
        completed,
        planned,
        total_volume_kg: total_volume.round() as u32,
        average_feeling: average_feeling(week.iter().copied()),
        all_completed: completed >= planned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::types::{local_noon, Feeling, PerformedExercise};
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workout_on(day: NaiveDate, feeling: u8, duration: u32) -> Workout {
        let mut workout = Workout::new(local_noon(day), WorkoutType::Strength);
        workout.feeling = Feeling::new(feeling).unwrap();
        workout.duration_minutes = duration;
        workout
    }

    fn monday() -> NaiveDate {
        date(2024, 6, 10)
    }

    #[test]
    fn test_weekly_stats_counts_and_improvement() {
        let mon = monday();
        let mut skipped = workout_on(mon + Duration::days(2), 1, 30);
        skipped.completed = false;
        let workouts = vec![
            workout_on(mon, 4, 45),
            workout_on(mon + Duration::days(6), 2, 60),
            skipped,
            workout_on(mon - Duration::days(3), 5, 50),
            workout_on(mon + Duration::days(7), 5, 50),
        ];

        let stats = weekly_stats(&workouts, mon);
        assert_eq!(stats.total_workouts, 3);
        assert_eq!(stats.completed_workouts, 2);
        assert_eq!(stats.total_duration_minutes, 105);
        assert!((stats.average_feeling - 3.0).abs() < 0.001);
        assert!((stats.improvement_percentage - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_weekly_stats_no_previous_week() {
        let stats = weekly_stats(&[workout_on(monday(), 3, 40)], monday());
        assert_eq!(stats.improvement_percentage, 0.0);

        let empty = weekly_stats(&[], monday());
        assert_eq!(empty.completed_workouts, 0);
        assert_eq!(empty.average_feeling, 0.0);
    }

    #[test]
    fn test_recent_weekly_stats_newest_first() {
        let today = monday() + Duration::days(3);
        let stats = recent_weekly_stats(&[], today, 4);
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].week_start, monday());
        assert_eq!(stats[3].week_start, monday() - Duration::weeks(3));
        assert_eq!(stats[1].week_start.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_progress_data_uses_weight_then_reps() {
        let mon = monday();
        let mut later = workout_on(mon + Duration::days(2), 3, 30);
        later
            .exercises
            .push(PerformedExercise::new("squat", "Squat").with_load(60.0, 8, 3));
        let mut earlier = workout_on(mon, 3, 30);
        let mut bodyweight = PerformedExercise::new("squat", "Squat");
        bodyweight.reps = Some(20);
        earlier.exercises.push(bodyweight);

        let points = progress_data(&[later, earlier], "Squat");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].value, 20.0);
        assert_eq!(points[1].value, 60.0);
        assert!(progress_data(&[], "Squat").is_empty());
    }

    #[test]
    fn test_workout_frequency_window() {
        let today = monday();
        let workouts = vec![
            workout_on(today, 3, 30),
            workout_on(today, 3, 30),
            workout_on(today - Duration::days(2), 3, 30),
            workout_on(today - Duration::days(30), 3, 30),
        ];

        let frequency = workout_frequency(&workouts, 7, today);
        assert_eq!(frequency.len(), 7);
        assert_eq!(frequency[6].date, today);
        assert_eq!(frequency[6].count, 2);
        assert_eq!(frequency[4].count, 1);
        assert_eq!(frequency.iter().map(|d| d.count).sum::<u32>(), 3);
        assert!(workout_frequency(&workouts, 0, today).is_empty());
    }

    #[test]
    fn test_overall_stats_and_milestones() {
        let mut workouts: Vec<Workout> = (0..5)
            .map(|i| workout_on(monday() - Duration::days(i), 4, 130))
            .collect();
        workouts[0].workout_type = WorkoutType::Cardio;

        let stats = overall_stats(&workouts);
        assert_eq!(stats.total_workouts, 5);
        assert_eq!(stats.total_duration_minutes, 650);
        assert_eq!(stats.total_hours(), 11);
        assert_eq!(
            stats.by_type,
            vec![(WorkoutType::Strength, 4), (WorkoutType::Cardio, 1)]
        );
        assert_eq!(stats.max_type_count(), 4);

        let reached = milestones(&stats, 3);
        assert!(reached.contains(&Milestone::FiveWorkouts));
        assert!(reached.contains(&Milestone::ThreeDayStreak));
        assert!(reached.contains(&Milestone::GreatFeeling));
        assert!(reached.contains(&Milestone::TenHours));
        assert!(!reached.contains(&Milestone::TenWorkouts));
        assert!(!reached.contains(&Milestone::WeekStreak));

        assert!(milestones(&overall_stats(&[]), 0).is_empty());
    }

    #[test]
    fn test_week_progress_minimum_target() {
        let today = monday() + Duration::days(2);
        let workouts = vec![workout_on(monday(), 3, 30)];

        let progress = week_progress(&workouts, &[], today);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percentage, 33);
        assert_eq!(progress.tier(), ProgressTier::Started);

        let schedules: Vec<WorkoutSchedule> = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
        ]
        .into_iter()
        .map(|d| WorkoutSchedule::new(d, "18:00"))
        .collect();
        assert_eq!(week_progress(&workouts, &schedules, today).total, 4);
        assert_eq!(
            week_progress(&[], &[], today).tier(),
            ProgressTier::NotStarted
        );
    }

    #[test]
    fn test_week_progress_tiers() {
        let tier = |completed, total| {
            WeekProgress {
                completed,
                total,
                percentage: (completed as f32 / total as f32 * 100.0).round() as u32,
            }
            .tier()
        };
        assert_eq!(tier(3, 3), ProgressTier::Complete);
        assert_eq!(tier(4, 5), ProgressTier::AlmostThere);
        assert_eq!(tier(2, 4), ProgressTier::GoodPace);
    }

    #[test]
    fn test_week_summary() {
        let mut profile = UserProfile::new("Sam");
        profile.goals.preferred_days = vec![Weekday::Mon, Weekday::Wed, Weekday::Fri];

        let mut workout = workout_on(monday(), 4, 60);
        workout
            .exercises
            .push(PerformedExercise::new("bench_press", "Bench").with_load(50.0, 10, 3));
        let workouts = vec![workout, workout_on(monday() + Duration::days(2), 2, 40)];

        let summary = week_summary(&workouts, &profile, monday() + Duration::days(4));
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.planned, 3);
        assert_eq!(summary.total_volume_kg, 1500);
        assert!((summary.average_feeling - 3.0).abs() < 0.001);
        assert!(!summary.all_completed);
        assert_eq!(summary.tier(), SummaryTier::NeedsMore);

        profile.goals.preferred_days.clear();
        let summary = week_summary(&workouts, &profile, monday());
        assert_eq!(summary.planned, 3);

        profile.goals.preferred_days = vec![Weekday::Mon, Weekday::Wed];
        let summary = week_summary(&workouts, &profile, monday());
        assert!(summary.all_completed);
        assert_eq!(summary.tier(), SummaryTier::AllCompleted);
    }
}
