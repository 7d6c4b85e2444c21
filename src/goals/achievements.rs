//! Achievement tracking.
//!
//! Achievements are recomputed from the workout and weight history. Progress
//! is a percentage in `0..=100`; an achievement unlocks when its criterion is
//! met and keeps its first unlock time across recalculations.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::types::{FitnessGoal, WeightEntry};
use crate::storage::config::UserProfile;
use crate::workouts::types::{week_start, Workout, WorkoutType};

/// Completed workouts required in a week for a perfect week.
pub const PERFECT_WEEK_WORKOUTS: usize = 3;

/// The fixed set of achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    #[serde(rename = "consistency_3_weeks")]
    ConsistencyThreeWeeks,
    ConsistencyMonth,
    #[serde(rename = "total_workouts_10")]
    TotalWorkouts10,
    #[serde(rename = "total_workouts_50")]
    TotalWorkouts50,
    WeightGoalAchieved,
    StrengthImprovement,
    PerfectWeek,
}

impl AchievementKind {
    pub fn all() -> &'static [AchievementKind] {
        &[
            AchievementKind::ConsistencyThreeWeeks,
            AchievementKind::ConsistencyMonth,
            AchievementKind::TotalWorkouts10,
            AchievementKind::TotalWorkouts50,
            AchievementKind::WeightGoalAchieved,
            AchievementKind::StrengthImprovement,
            AchievementKind::PerfectWeek,
        ]
    }

    /// Stable identifier used in storage.
    pub fn id(&self) -> &'static str {
        match self {
            AchievementKind::ConsistencyThreeWeeks => "consistency_3_weeks",
            AchievementKind::ConsistencyMonth => "consistency_month",
            AchievementKind::TotalWorkouts10 => "total_workouts_10",
            AchievementKind::TotalWorkouts50 => "total_workouts_50",
            AchievementKind::WeightGoalAchieved => "weight_goal_achieved",
            AchievementKind::StrengthImprovement => "strength_improvement",
            AchievementKind::PerfectWeek => "perfect_week",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.id() == id)
    }

    /// Raw target: streak days, workout count or percentage.
    pub fn target(&self) -> f32 {
        match self {
            AchievementKind::ConsistencyThreeWeeks => 21.0,
            AchievementKind::ConsistencyMonth => 30.0,
            AchievementKind::TotalWorkouts10 => 10.0,
            AchievementKind::TotalWorkouts50 => 50.0,
            AchievementKind::WeightGoalAchieved => 1.0,
            AchievementKind::StrengthImprovement => 25.0,
            AchievementKind::PerfectWeek => 1.0,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementKind::ConsistencyThreeWeeks => "🔥",
            AchievementKind::ConsistencyMonth => "🏆",
            AchievementKind::TotalWorkouts10 => "🏋",
            AchievementKind::TotalWorkouts50 => "🎖",
            AchievementKind::WeightGoalAchieved => "🚩",
            AchievementKind::StrengthImprovement => "📈",
            AchievementKind::PerfectWeek => "⭐",
        }
    }

    pub fn title_key(&self) -> String {
        format!("achievement-{}-title", self.id())
    }

    pub fn description_key(&self) -> String {
        format!("achievement-{}-description", self.id())
    }
}

/// Progress toward one achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    /// Percentage complete, `0..=100`
    pub progress: f32,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }

    pub fn target(&self) -> f32 {
        self.kind.target()
    }
}

/// Number of workout days in the current streak, counted back from `today`.
///
/// Each distinct day with a completed workout extends the streak when it is
/// no more than one day before the expected day, so one rest day between
/// sessions is tolerated. The first session must be today or yesterday.
pub fn streak_days(workouts: &[Workout], today: NaiveDate) -> u32 {
    let dates: BTreeSet<NaiveDate> = workouts
        .iter()
        .filter(|w| w.completed)
        .map(|w| w.date())
        .filter(|d| *d <= today)
        .collect();

    let mut streak = 0;
    let mut expected = today;

    for date in dates.into_iter().rev() {
        let gap = (expected - date).num_days();
        if gap <= 1 {
            streak += 1;
            expected = date - Duration::days(1);
        } else {
            break;
        }
    }

    streak
}

/// Percentage of the way from the starting weight to the target weight.
///
/// Only weight-loss and muscle-gain goals track weight. The result is
/// clamped to `0..=100`.
pub fn weight_progress(profile: &UserProfile, entries: &[WeightEntry]) -> f32 {
    let goals = &profile.goals;
    let (Some(target), Some(latest)) = (
        goals.target_weight,
        entries.iter().max_by_key(|e| e.recorded_at).map(|e| e.weight_kg),
    ) else {
        return 0.0;
    };
    let Some(start) = goals.current_weight else {
        return 0.0;
    };

    let (total, done) = match goals.primary_goal {
        FitnessGoal::WeightLoss => (start - target, start - latest),
        FitnessGoal::MuscleGain => (target - start, latest - start),
        _ => return 0.0,
    };

    if total <= 0.0 {
        return 0.0;
    }

    (done / total * 100.0).clamp(0.0, 100.0)
}

/// Percentage change of the heaviest weight between the first and the last
/// completed strength workouts.
///
/// Needs at least two strength workouts and a weighted first session.
pub fn strength_progress(workouts: &[Workout]) -> f32 {
    let mut strength: Vec<&Workout> = workouts
        .iter()
        .filter(|w| w.completed && w.workout_type == WorkoutType::Strength)
        .collect();

    if strength.len() < 2 {
        return 0.0;
    }

    strength.sort_by_key(|w| w.performed_at);
    let first = strength[0].max_weight();
    let last = strength[strength.len() - 1].max_weight();

    if first == 0.0 {
        return 0.0;
    }

    (last - first) / first * 100.0
}

/// Whether the week containing `today` has enough completed workouts.
pub fn is_perfect_week(workouts: &[Workout], today: NaiveDate) -> bool {
    let start = week_start(today);
    let end = start + Duration::days(6);

    workouts
        .iter()
        .filter(|w| w.completed)
        .filter(|w| (start..=end).contains(&w.date()))
        .count()
        >= PERFECT_WEEK_WORKOUTS
}

fn percent_of(value: f32, target: f32) -> f32 {
    (value / target * 100.0).min(100.0)
}

/// Recompute every achievement, sorted by progress (highest first).
///
/// Unlock times from `previous` are kept; newly met criteria unlock at `now`.
pub fn calculate_achievements(
    workouts: &[Workout],
    profile: &UserProfile,
    weight_entries: &[WeightEntry],
    previous: &[Achievement],
    now: DateTime<Utc>,
    today: NaiveDate,
) -> Vec<Achievement> {
    let total = workouts.iter().filter(|w| w.completed).count() as f32;
    let streak = streak_days(workouts, today) as f32;
    let weight = weight_progress(profile, weight_entries);
    let strength = strength_progress(workouts);
    let perfect_week = is_perfect_week(workouts, today);

    let mut achievements: Vec<Achievement> = AchievementKind::all()
        .iter()
        .map(|&kind| {
            let target = kind.target();
            let (progress, unlocked) = match kind {
                AchievementKind::TotalWorkouts10 | AchievementKind::TotalWorkouts50 => {
                    (percent_of(total, target), total >= target)
                }
                AchievementKind::ConsistencyThreeWeeks | AchievementKind::ConsistencyMonth => {
                    (percent_of(streak, target), streak >= target)
                }
                AchievementKind::WeightGoalAchieved => (weight, weight >= 100.0),
                AchievementKind::StrengthImprovement => {
                    (strength.clamp(0.0, 100.0), strength >= target)
                }
                AchievementKind::PerfectWeek => {
                    if perfect_week {
                        (100.0, true)
                    } else {
                        (0.0, false)
                    }
                }
            };

            let earlier = previous
                .iter()
                .find(|a| a.kind == kind)
                .and_then(|a| a.unlocked_at);

            Achievement {
                kind,
                progress,
                unlocked_at: match (earlier, unlocked) {
                    (Some(at), _) => Some(at),
                    (None, true) => Some(now),
                    (None, false) => None,
                },
            }
        })
        .collect();

    achievements.sort_by(|a, b| b.progress.total_cmp(&a.progress));
    achievements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::types::{local_noon, PerformedExercise};

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, n).unwrap()
    }

    fn completed_on(date: NaiveDate) -> Workout {
        Workout::new(local_noon(date), WorkoutType::Cardio)
    }

    fn strength_on(date: NaiveDate, weight: f32) -> Workout {
        let mut workout = Workout::new(local_noon(date), WorkoutType::Strength);
        workout.exercises = vec![PerformedExercise::new("squat", "Squat").with_load(weight, 5, 5)];
        workout
    }

    fn weight_profile(goal: FitnessGoal, start: f32, target: f32) -> UserProfile {
        let mut profile = UserProfile::new("Test");
        profile.goals.primary_goal = goal;
        profile.goals.current_weight = Some(start);
        profile.goals.target_weight = Some(target);
        profile
    }

    fn entry(weight: f32, date: NaiveDate) -> WeightEntry {
        WeightEntry::new(weight, local_noon(date))
    }

    #[test]
    fn test_streak_consecutive_days() {
        let workouts: Vec<Workout> = (10..=14).map(|d| completed_on(day(d))).collect();
        assert_eq!(streak_days(&workouts, day(14)), 5);
    }

    #[test]
    fn test_streak_starting_yesterday() {
        let workouts = vec![completed_on(day(12)), completed_on(day(13))];
        assert_eq!(streak_days(&workouts, day(14)), 2);
    }

    #[test]
    fn test_streak_tolerates_single_rest_day() {
        // 8, 10, 12, 14: one rest day between each
        let workouts: Vec<Workout> = [8, 10, 12, 14]
            .iter()
            .map(|d| completed_on(day(*d)))
            .collect();
        assert_eq!(streak_days(&workouts, day(14)), 4);
    }

    #[test]
    fn test_streak_breaks_on_two_day_gap() {
        let workouts = vec![completed_on(day(9)), completed_on(day(12)), completed_on(day(13))];
        assert_eq!(streak_days(&workouts, day(13)), 2);
    }

    #[test]
    fn test_streak_counts_duplicate_days_once() {
        let workouts = vec![
            completed_on(day(13)),
            completed_on(day(14)),
            completed_on(day(14)),
        ];
        assert_eq!(streak_days(&workouts, day(14)), 2);
    }

    #[test]
    fn test_streak_ignores_incomplete_and_stale() {
        let mut skipped = completed_on(day(14));
        skipped.completed = false;
        assert_eq!(streak_days(&[skipped], day(14)), 0);

        assert_eq!(streak_days(&[completed_on(day(1))], day(14)), 0);
        assert_eq!(streak_days(&[], day(14)), 0);
    }

    #[test]
    fn test_weight_progress_loss() {
        let profile = weight_profile(FitnessGoal::WeightLoss, 90.0, 80.0);
        let entries = vec![entry(88.0, day(1)), entry(85.0, day(10))];
        assert!((weight_progress(&profile, &entries) - 50.0).abs() < 0.01);

        let overshoot = vec![entry(78.0, day(20))];
        assert_eq!(weight_progress(&profile, &overshoot), 100.0);
    }

    #[test]
    fn test_weight_progress_gain() {
        let profile = weight_profile(FitnessGoal::MuscleGain, 70.0, 75.0);
        let entries = vec![entry(72.0, day(5))];
        assert!((weight_progress(&profile, &entries) - 40.0).abs() < 0.01);
    }

    #[test]
    fn test_weight_progress_needs_target_and_entries() {
        let mut profile = weight_profile(FitnessGoal::WeightLoss, 90.0, 80.0);
        assert_eq!(weight_progress(&profile, &[]), 0.0);

        profile.goals.target_weight = None;
        assert_eq!(weight_progress(&profile, &[entry(85.0, day(1))]), 0.0);

        let endurance = weight_profile(FitnessGoal::Endurance, 90.0, 80.0);
        assert_eq!(weight_progress(&endurance, &[entry(85.0, day(1))]), 0.0);
    }

    #[test]
    fn test_weight_progress_uses_latest_entry() {
        let profile = weight_profile(FitnessGoal::WeightLoss, 100.0, 90.0);
        // Entries out of order: latest by date is 95
        let entries = vec![entry(95.0, day(20)), entry(99.0, day(2))];
        assert!((weight_progress(&profile, &entries) - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_strength_progress() {
        let workouts = vec![strength_on(day(20), 100.0), strength_on(day(1), 80.0)];
        assert!((strength_progress(&workouts) - 25.0).abs() < 0.01);

        assert_eq!(strength_progress(&[strength_on(day(1), 80.0)]), 0.0);

        let unweighted_first = vec![strength_on(day(1), 0.0), strength_on(day(2), 50.0)];
        assert_eq!(strength_progress(&unweighted_first), 0.0);
    }

    #[test]
    fn test_perfect_week_uses_monday_start() {
        // 2024-06-10 is a Monday
        let workouts = vec![
            completed_on(day(9)),
            completed_on(day(10)),
            completed_on(day(12)),
        ];
        assert!(!is_perfect_week(&workouts, day(14)));

        let mut full = workouts.clone();
        full.push(completed_on(day(16)));
        assert!(is_perfect_week(&full, day(14)));
    }

    #[test]
    fn test_calculate_achievements() {
        let today = day(14);
        let workouts: Vec<Workout> = (1..=14).map(|d| completed_on(day(d))).collect();
        let profile = UserProfile::new("Test");
        let now = Utc::now();

        let achievements = calculate_achievements(&workouts, &profile, &[], &[], now, today);
        assert_eq!(achievements.len(), 7);

        let find = |kind| achievements.iter().find(|a| a.kind == kind).unwrap();
        assert!(find(AchievementKind::TotalWorkouts10).is_unlocked());
        assert_eq!(find(AchievementKind::TotalWorkouts10).progress, 100.0);
        assert!(!find(AchievementKind::TotalWorkouts50).is_unlocked());
        assert!((find(AchievementKind::TotalWorkouts50).progress - 28.0).abs() < 0.01);
        assert!((find(AchievementKind::ConsistencyThreeWeeks).progress - 66.666).abs() < 0.01);
        assert!(find(AchievementKind::PerfectWeek).is_unlocked());

        // Sorted by progress
        assert!(achievements
            .windows(2)
            .all(|pair| pair[0].progress >= pair[1].progress));
    }

    #[test]
    fn test_unlock_time_is_preserved() {
        let today = day(14);
        let workouts: Vec<Workout> = (1..=10).map(|d| completed_on(day(d))).collect();
        let profile = UserProfile::new("Test");
        let first_unlock = Utc::now() - Duration::days(3);

        let previous = vec![Achievement {
            kind: AchievementKind::TotalWorkouts10,
            progress: 100.0,
            unlocked_at: Some(first_unlock),
        }];

        let achievements =
            calculate_achievements(&workouts, &profile, &[], &previous, Utc::now(), today);
        let ten = achievements
            .iter()
            .find(|a| a.kind == AchievementKind::TotalWorkouts10)
            .unwrap();
        assert_eq!(ten.unlocked_at, Some(first_unlock));
    }

    #[test]
    fn test_kind_ids_round_trip() {
        for kind in AchievementKind::all() {
            assert_eq!(AchievementKind::parse(kind.id()), Some(*kind));
        }
        let json = serde_json::to_string(&AchievementKind::ConsistencyThreeWeeks).unwrap();
        assert_eq!(json, "\"consistency_3_weeks\"");
    }
}
