//! Chart series preparation.
//!
//! Turns workout and weight history into date/value points ready for plotting.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::goals::WeightEntry;
use crate::workouts::types::{week_start, Workout, WorkoutType};

/// A single plotted value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f32,
    /// Short text shown next to the point
    pub label: String,
}

impl ChartPoint {
    fn new(date: NaiveDate, value: f32, label: String) -> Self {
        Self { date, value, label }
    }
}

/// Body weight over time, oldest first.
pub fn weight_chart(entries: &[WeightEntry]) -> Vec<ChartPoint> {
    let mut sorted: Vec<&WeightEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.recorded_at);

    sorted
        .into_iter()
        .map(|e| {
            let date = e.recorded_at.with_timezone(&chrono::Local).date_naive();
            ChartPoint::new(date, e.weight_kg, format!("{:.1} kg", e.weight_kg))
        })
        .collect()
}

/// Daily average feeling over the last `days` days, days without training omitted.
pub fn feeling_chart(workouts: &[Workout], days: u32, today: NaiveDate) -> Vec<ChartPoint> {
    if days == 0 {
        return Vec::new();
    }
    let start = today - Duration::days(days as i64 - 1);
    let mut daily: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();

    for workout in workouts.iter().filter(|w| w.completed) {
        let date = workout.date();
        if date < start || date > today {
            continue;
        }
        let entry = daily.entry(date).or_default();
        entry.0 += workout.feeling.value() as u32;
        entry.1 += 1;
    }

    daily
        .into_iter()
        .map(|(date, (sum, count))| {
            let average = sum as f32 / count as f32;
            ChartPoint::new(date, average, format!("{:.1}", average))
        })
        .collect()
}

/// Lifted volume summed per Monday-start week over the last `weeks` weeks,
/// the current week included.
pub fn volume_chart(workouts: &[Workout], weeks: u32, today: NaiveDate) -> Vec<ChartPoint> {
    if weeks == 0 {
        return Vec::new();
    }
    let start = week_start(today) - Duration::weeks(weeks as i64 - 1);
    let mut weekly: BTreeMap<NaiveDate, f32> = BTreeMap::new();

    for workout in workouts.iter().filter(|w| w.completed) {
        let date = workout.date();
        if date < start || date > today {
            continue;
        }
        *weekly.entry(week_start(date)).or_default() += workout.volume();
    }

    weekly
        .into_iter()
        .map(|(week, volume)| {
            let rounded = volume.round();
            ChartPoint::new(week, rounded, format!("{:.1}k kg", rounded / 1000.0))
        })
        .collect()
}

/// Completed workouts per day for the last `days` days, every day present.
pub fn frequency_chart(workouts: &[Workout], days: u32, today: NaiveDate) -> Vec<ChartPoint> {
    super::analytics::workout_frequency(workouts, days, today)
        .into_iter()
        .map(|d| ChartPoint::new(d.date, d.count as f32, d.count.to_string()))
        .collect()
}

/// Working weight of an exercise across strength workouts, oldest first.
///
/// Matches the first exercise whose name contains `exercise_name`, ignoring case.
pub fn strength_progress_chart(workouts: &[Workout], exercise_name: &str) -> Vec<ChartPoint> {
    let needle = exercise_name.to_lowercase();
    let mut matching: Vec<&Workout> = workouts
        .iter()
        .filter(|w| w.completed && w.workout_type == WorkoutType::Strength)
        .collect();
    matching.sort_by_key(|w| w.performed_at);

    matching
        .into_iter()
        .filter_map(|w| {
            let exercise = w
                .exercises
                .iter()
                .find(|e| e.name.to_lowercase().contains(&needle))?;
            let weight = exercise.weight_kg.unwrap_or(0.0);
            Some(ChartPoint::new(w.date(), weight, format!("{} kg", weight)))
        })
        .collect()
}
