//! Metrics module for workout statistics and chart data.

pub mod analytics;
pub mod charts;

pub use analytics::{
    milestones, overall_stats, progress_data, recent_weekly_stats, week_progress, week_summary,
    weekly_stats, workout_frequency, DailyCount, Milestone, OverallStats, ProgressPoint,
    ProgressTier, SummaryTier, WeekProgress, WeekSummary,
};
pub use charts::{
    feeling_chart, frequency_chart, strength_progress_chart, volume_chart, weight_chart,
    ChartPoint,
};
