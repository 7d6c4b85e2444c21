//! End-of-week summary screen.

use chrono::{Duration, Local};
use egui::{RichText, Ui, Vec2};

use super::Screen;
use crate::metrics::analytics::{week_summary, SummaryTier};
use crate::session::FitnessSession;
use crate::t;
use crate::ui::theme::Palette;
use crate::ui::widgets::{CardSize, StatCard};
use crate::workouts::week_start;

/// Week summary screen UI.
pub struct WeekSummaryScreen;

impl WeekSummaryScreen {
    pub fn show(ui: &mut Ui, session: &FitnessSession, palette: &Palette) -> Option<Screen> {
        let mut next_screen = None;
        let today = Local::now().date_naive();
        let Some(profile) = session.profile() else {
            return Some(Screen::Onboarding);
        };

        let summary = week_summary(session.workouts(), profile, today);
        let tier = summary.tier();
        let start = week_start(today);
        let end = start + Duration::days(6);

        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(RichText::new(t!("summary-title")).size(28.0).strong());
            ui.label(
                RichText::new(format!("{} – {}", start.format("%d.%m"), end.format("%d.%m.%Y")))
                    .weak(),
            );
            ui.add_space(16.0);

            let icon = match tier {
                SummaryTier::AllCompleted => "🏆",
                SummaryTier::Good => "💪",
                SummaryTier::NeedsMore => "🎯",
            };
            ui.label(RichText::new(icon).size(48.0));
            ui.label(RichText::new(t!(tier.translation_key())).size(18.0));
            ui.add_space(12.0);

            ui.add(
                egui::ProgressBar::new(summary.fraction())
                    .desired_width(320.0)
                    .fill(palette.progress_color((summary.fraction() * 100.0).round() as u32))
                    .text(t!(
                        "summary-completed",
                        "completed" => summary.completed,
                        "planned" => summary.planned
                    )),
            );
            ui.add_space(16.0);

            ui.horizontal_wrapped(|ui| {
                StatCard::count(summary.completed, t!("stats-workouts"))
                    .with_size(CardSize::Small)
                    .show(ui);
                StatCard::count(summary.total_volume_kg, t!("summary-volume"))
                    .with_unit("kg")
                    .with_size(CardSize::Small)
                    .show(ui);
                StatCard::feeling(summary.average_feeling, t!("stats-average-feeling"))
                    .with_size(CardSize::Small)
                    .show(ui);
            });

            ui.add_space(16.0);
            for key in tier.motivation_keys() {
                ui.label(format!("• {}", t!(key)));
            }

            ui.add_space(24.0);
            if ui
                .add_sized(Vec2::new(200.0, 40.0), egui::Button::new(t!("summary-continue")))
                .clicked()
            {
                next_screen = Some(Screen::Home);
            }
        });

        next_screen
    }
}
