//! Statistics screen: totals, milestones, charts, achievements and weekly history.

use chrono::Local;
use egui::{RichText, Ui};

use super::Screen;
use crate::metrics::analytics::{milestones, overall_stats, Milestone};
use crate::metrics::charts::{
    feeling_chart, frequency_chart, strength_progress_chart, volume_chart, weight_chart,
    ChartPoint,
};
use crate::session::FitnessSession;
use crate::t;
use crate::ui::theme::{workout_type_color, Palette};
use crate::ui::widgets::{StatCard, TrendChart};

/// Chart tab on the stats screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Weight,
    Feeling,
    Volume,
    Frequency,
    Strength,
}

impl ChartKind {
    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Weight,
            ChartKind::Feeling,
            ChartKind::Volume,
            ChartKind::Frequency,
            ChartKind::Strength,
        ]
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            ChartKind::Weight => "chart-weight",
            ChartKind::Feeling => "chart-feeling",
            ChartKind::Volume => "chart-volume",
            ChartKind::Frequency => "chart-frequency",
            ChartKind::Strength => "chart-strength",
        }
    }
}

/// Statistics screen state.
pub struct StatsScreen {
    chart: ChartKind,
    /// Exercise name searched for the strength chart
    exercise_query: String,
}

impl Default for StatsScreen {
    fn default() -> Self {
        Self {
            chart: ChartKind::default(),
            exercise_query: "Squat".to_string(),
        }
    }
}

impl StatsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Series for the selected chart tab.
    pub fn chart_points(&self, session: &FitnessSession) -> Vec<ChartPoint> {
        let today = Local::now().date_naive();
        let history = session.history();
        let workouts = session.workouts();
        match self.chart {
            ChartKind::Weight => weight_chart(session.weight_entries()),
            ChartKind::Feeling => feeling_chart(workouts, history.feeling_chart_days, today),
            ChartKind::Volume => volume_chart(workouts, history.weekly_stats_weeks, today),
            ChartKind::Frequency => frequency_chart(workouts, history.frequency_days, today),
            ChartKind::Strength => strength_progress_chart(workouts, self.exercise_query.trim()),
        }
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        session: &FitnessSession,
        palette: &Palette,
    ) -> Option<Screen> {
        let mut next_screen = None;
        let today = Local::now().date_naive();
        let stats = overall_stats(session.workouts());
        let streak = session.streak(today);

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(t!("stats-title")).size(26.0).strong());
                if ui.button(t!("stats-week-summary")).clicked() {
                    next_screen = Some(Screen::WeekSummary);
                }
            });
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                StatCard::count(stats.total_workouts, t!("stats-total-workouts"))
                    .with_icon("🏋")
                    .show(ui);
                StatCard::count(stats.total_hours(), t!("stats-total-hours"))
                    .with_icon("⏱")
                    .show(ui);
                StatCard::feeling(stats.average_feeling, t!("stats-average-feeling")).show(ui);
                StatCard::count(streak, t!("stats-streak-days"))
                    .with_icon("🔥")
                    .with_accent(palette.primary)
                    .show(ui);
            });

            // Per-type breakdown
            if !stats.by_type.is_empty() {
                ui.add_space(12.0);
                ui.label(RichText::new(t!("stats-by-type")).size(18.0).strong());
                let max = stats.max_type_count().max(1) as f32;
                for (workout_type, count) in &stats.by_type {
                    ui.horizontal(|ui| {
                        ui.label(format!(
                            "{} {}",
                            workout_type.icon(),
                            t!(workout_type.translation_key())
                        ));
                        ui.add(
                            egui::ProgressBar::new(*count as f32 / max)
                                .fill(workout_type_color(*workout_type))
                                .desired_width(200.0)
                                .text(count.to_string()),
                        );
                    });
                }
            }

            // Milestones
            ui.add_space(12.0);
            ui.label(RichText::new(t!("stats-milestones")).size(18.0).strong());
            let reached = milestones(&stats, streak);
            ui.horizontal_wrapped(|ui| {
                for milestone in Milestone::all() {
                    let text = format!("{} {}", milestone.icon(), t!(milestone.translation_key()));
                    if reached.contains(milestone) {
                        ui.label(RichText::new(text).color(palette.success));
                    } else {
                        ui.label(RichText::new(text).weak());
                    }
                }
            });

            // Charts
            ui.add_space(12.0);
            ui.horizontal_wrapped(|ui| {
                for kind in ChartKind::all() {
                    ui.selectable_value(&mut self.chart, *kind, t!(kind.title_key()));
                }
            });
            if self.chart == ChartKind::Strength {
                ui.horizontal(|ui| {
                    ui.label(t!("chart-exercise"));
                    ui.text_edit_singleline(&mut self.exercise_query);
                });
            }
            let points = self.chart_points(session);
            let title = t!(self.chart.title_key());
            TrendChart::new("stats_chart", &title, &points)
                .height(200.0)
                .color(palette.primary)
                .empty_text(t!("chart-empty"))
                .show(ui);

            // Achievements
            ui.add_space(12.0);
            ui.label(RichText::new(t!("stats-achievements")).size(18.0).strong());
            for achievement in session.achievements() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(achievement.kind.icon()).size(22.0));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(t!(&achievement.kind.title_key())).strong());
                            ui.label(RichText::new(t!(&achievement.kind.description_key())).weak());
                            match achievement.unlocked_at {
                                Some(at) => {
                                    ui.label(
                                        RichText::new(t!(
                                            "stats-unlocked-at",
                                            "date" => at.with_timezone(&Local).format("%d.%m.%Y")
                                        ))
                                        .color(palette.success),
                                    );
                                }
                                None => {
                                    ui.add(
                                        egui::ProgressBar::new(achievement.progress / 100.0)
                                            .desired_width(200.0)
                                            .text(format!("{:.0}%", achievement.progress)),
                                    );
                                }
                            }
                        });
                    });
                });
            }

            // Weekly history
            ui.add_space(12.0);
            ui.label(RichText::new(t!("stats-weekly-history")).size(18.0).strong());
            egui::Grid::new("stats_weekly_history")
                .num_columns(5)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new(t!("stats-week")).weak());
                    ui.label(RichText::new(t!("stats-workouts")).weak());
                    ui.label(RichText::new(t!("stats-average-feeling")).weak());
                    ui.label(RichText::new(t!("stats-minutes")).weak());
                    ui.label(RichText::new(t!("stats-change")).weak());
                    ui.end_row();

                    for week in session.weekly_stats() {
                        ui.label(week.week_start.format("%d.%m.%Y").to_string());
                        ui.label(format!("{}/{}", week.completed_workouts, week.total_workouts));
                        ui.label(format!("{:.1}", week.average_feeling));
                        ui.label(week.total_duration_minutes.to_string());
                        let change = week.improvement_percentage;
                        let color = if change >= 0.0 { palette.success } else { palette.error };
                        ui.label(RichText::new(format!("{:+.0}%", change)).color(color));
                        ui.end_row();
                    }
                });

            // Recovery
            ui.add_space(12.0);
            ui.collapsing(t!("stats-recovery-tips"), |ui| {
                for tip in session.recovery_tips() {
                    ui.label(format!("• {}", tip));
                }
            });
        });

        next_screen
    }
}
