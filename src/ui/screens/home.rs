//! Home screen: greeting, quote of the day and the current week at a glance.

use chrono::{Local, Timelike};
use egui::{RichText, Ui, Vec2};

use super::Screen;
use crate::goals::workout_recommendations;
use crate::metrics::analytics::week_progress;
use crate::motivation::{self, Quote};
use crate::programs::ProgramCatalog;
use crate::session::FitnessSession;
use crate::t;
use crate::ui::theme::{workout_type_color, Palette};
use crate::ui::widgets::{CardSize, StatCard};

/// Recent workouts listed on the home screen.
const RECENT_WORKOUTS: usize = 3;

/// Greeting key for the local hour: morning before 12, day before 18.
pub fn greeting_key(hour: u32) -> &'static str {
    match hour {
        h if h < 12 => "home-greeting-morning",
        h if h < 18 => "home-greeting-day",
        _ => "home-greeting-evening",
    }
}

/// Home screen UI.
#[derive(Default)]
pub struct HomeScreen {
    /// Quote picked with the refresh button, replacing the daily one
    shuffled_quote: Option<&'static Quote>,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the home screen and return the next screen if navigation requested.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        session: &FitnessSession,
        catalog: &ProgramCatalog,
        palette: &Palette,
    ) -> Option<Screen> {
        let mut next_screen = None;
        let now = Local::now();
        let today = now.date_naive();
        let Some(profile) = session.profile() else {
            return Some(Screen::Onboarding);
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            // Greeting
            ui.add_space(8.0);
            ui.label(RichText::new(t!(greeting_key(now.hour()))).size(16.0).weak());
            ui.label(
                RichText::new(t!("home-greeting-name", "name" => profile.name))
                    .size(28.0)
                    .strong(),
            );
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    profile.goals.primary_goal.icon(),
                    t!(profile.goals.primary_goal.translation_key())
                ))
                .color(palette.primary),
            );

            ui.add_space(16.0);

            // Quote of the day
            let quote = self
                .shuffled_quote
                .unwrap_or_else(|| motivation::daily(today));
            egui::Frame::group(ui.style())
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(t!("home-quote-title")).strong());
                        ui.label(RichText::new(t!(quote.category.translation_key())).weak());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .small_button("🔄")
                                .on_hover_text(t!("home-quote-refresh"))
                                .clicked()
                            {
                                self.shuffled_quote =
                                    Some(motivation::random(&mut rand::thread_rng()));
                            }
                        });
                    });
                    ui.label(RichText::new(format!("“{}”", quote.text)).italics());
                    ui.label(RichText::new(format!("— {}", quote.author)).weak());
                });

            ui.add_space(16.0);

            // Week progress
            let progress = week_progress(session.workouts(), session.schedules(), today);
            ui.label(RichText::new(t!("home-week-progress-title")).size(18.0).strong());
            ui.add(
                egui::ProgressBar::new(progress.fraction())
                    .fill(palette.progress_color(progress.percentage))
                    .text(t!(
                        "home-week-progress",
                        "completed" => progress.completed,
                        "total" => progress.total
                    )),
            );
            ui.label(t!(progress.tier().translation_key()));

            ui.add_space(12.0);

            ui.horizontal_wrapped(|ui| {
                StatCard::count(session.streak(today), t!("stats-streak-days"))
                    .with_icon("🔥")
                    .with_accent(palette.primary)
                    .with_size(CardSize::Small)
                    .show(ui);
                StatCard::count(session.workouts().len() as u32, t!("stats-total-workouts"))
                    .with_icon("🏋")
                    .with_size(CardSize::Small)
                    .show(ui);
            });

            ui.add_space(16.0);

            // Quick actions
            let button_size = Vec2::new(180.0, 44.0);
            ui.horizontal_wrapped(|ui| {
                if ui
                    .add_sized(
                        button_size,
                        egui::Button::new(RichText::new(t!("home-action-log")).size(16.0)),
                    )
                    .clicked()
                {
                    next_screen = Some(Screen::LogWorkout);
                }
                if ui
                    .add_sized(
                        button_size,
                        egui::Button::new(RichText::new(t!("home-action-programs")).size(16.0)),
                    )
                    .clicked()
                {
                    next_screen = Some(Screen::Programs);
                }
                if ui
                    .add_sized(
                        button_size,
                        egui::Button::new(RichText::new(t!("home-action-summary")).size(16.0)),
                    )
                    .clicked()
                {
                    next_screen = Some(Screen::WeekSummary);
                }
            });

            ui.add_space(16.0);

            // Current program
            let current = profile
                .current_program
                .as_deref()
                .and_then(|id| catalog.get(id));
            if let Some(program) = current {
                ui.label(RichText::new(t!("home-current-program")).size(18.0).strong());
                ui.label(&program.name);
                if let Some(day) = program.next_day(session.last_program_day(&program.id)) {
                    ui.label(
                        RichText::new(t!(
                            "home-next-day",
                            "day" => day.day_number,
                            "name" => day.name
                        ))
                        .weak(),
                    );
                }
                ui.add_space(12.0);
            }

            // Recommendations
            let recommendation = workout_recommendations(profile.goals.primary_goal);
            ui.label(RichText::new(t!("home-recommendations")).size(18.0).strong());
            ui.horizontal_wrapped(|ui| {
                for workout_type in &recommendation.types {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            workout_type.icon(),
                            t!(workout_type.translation_key())
                        ))
                        .color(workout_type_color(*workout_type)),
                    );
                }
            });
            ui.label(t!("home-frequency", "count" => recommendation.frequency));
            ui.label(RichText::new(recommendation.description).weak());

            ui.add_space(16.0);

            // Recent workouts
            ui.label(RichText::new(t!("home-recent-workouts")).size(18.0).strong());
            if session.workouts().is_empty() {
                ui.label(RichText::new(t!("home-no-workouts")).weak());
            }
            for workout in session.workouts().iter().take(RECENT_WORKOUTS) {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(workout.workout_type.icon())
                            .color(workout_type_color(workout.workout_type)),
                    );
                    ui.label(t!(workout.workout_type.translation_key()));
                    ui.label(RichText::new(workout.date().format("%d.%m.%Y").to_string()).weak());
                    if workout.duration_minutes > 0 {
                        ui.label(t!("unit-minutes", "count" => workout.duration_minutes));
                    }
                    ui.label(workout.feeling.emoji());
                });
            }
        });

        next_screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting_key(0), "home-greeting-morning");
        assert_eq!(greeting_key(11), "home-greeting-morning");
        assert_eq!(greeting_key(12), "home-greeting-day");
        assert_eq!(greeting_key(17), "home-greeting-day");
        assert_eq!(greeting_key(18), "home-greeting-evening");
        assert_eq!(greeting_key(23), "home-greeting-evening");
    }
}
