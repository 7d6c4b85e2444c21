//! Program catalog screen.

use egui::{RichText, Ui};

use super::Screen;
use crate::goals::FitnessGoal;
use crate::programs::{ProgramCatalog, WorkoutProgram};
use crate::session::FitnessSession;
use crate::t;
use crate::ui::theme::Palette;

/// Which programs the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgramFilter {
    /// Matching the goal and level of the profile
    #[default]
    Recommended,
    All,
    Goal(FitnessGoal),
}

impl ProgramFilter {
    /// Programs passing the filter, in catalog order.
    pub fn apply<'a>(
        &self,
        catalog: &'a ProgramCatalog,
        session: &FitnessSession,
    ) -> Vec<&'a WorkoutProgram> {
        match self {
            ProgramFilter::All => catalog.all().iter().collect(),
            ProgramFilter::Goal(goal) => catalog.by_goal(*goal),
            ProgramFilter::Recommended => match session.profile() {
                Some(profile) => catalog.recommended(profile.goals.primary_goal, profile.level),
                None => catalog.all().iter().collect(),
            },
        }
    }
}

/// Program catalog screen state.
#[derive(Default)]
pub struct ProgramsScreen {
    filter: ProgramFilter,
    error: Option<String>,
}

impl ProgramsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        session: &mut FitnessSession,
        catalog: &ProgramCatalog,
        palette: &Palette,
    ) -> Option<Screen> {
        let mut next_screen = None;

        ui.label(RichText::new(t!("programs-title")).size(26.0).strong());
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            ui.selectable_value(
                &mut self.filter,
                ProgramFilter::Recommended,
                t!("programs-filter-recommended"),
            );
            ui.selectable_value(&mut self.filter, ProgramFilter::All, t!("programs-filter-all"));
            for goal in FitnessGoal::all() {
                ui.selectable_value(
                    &mut self.filter,
                    ProgramFilter::Goal(*goal),
                    format!("{} {}", goal.icon(), t!(goal.translation_key())),
                );
            }
        });
        ui.separator();

        if let Some(error) = &self.error {
            ui.colored_label(palette.error, error);
        }

        let current = session
            .profile()
            .and_then(|p| p.current_program.clone());
        let programs = self.filter.apply(catalog, session);

        egui::ScrollArea::vertical().show(ui, |ui| {
            if programs.is_empty() {
                ui.label(RichText::new(t!("programs-empty")).weak());
            }

            for program in programs {
                let is_current = current.as_deref() == Some(program.id.as_str());
                egui::Frame::group(ui.style())
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&program.name).size(18.0).strong());
                            if is_current {
                                ui.label(
                                    RichText::new(t!("programs-current")).color(palette.success),
                                );
                            }
                        });
                        ui.label(RichText::new(&program.description).weak());
                        ui.label(format!(
                            "{} · {} · {}",
                            t!(program.level.translation_key()),
                            t!("programs-weeks", "count" => program.duration_weeks),
                            t!("programs-per-week", "count" => program.workouts_per_week),
                        ));

                        ui.collapsing(t!("programs-details"), |ui| {
                            program_details(ui, program);
                        });

                        ui.horizontal(|ui| {
                            let result = if is_current {
                                ui.button(t!("programs-deselect"))
                                    .clicked()
                                    .then(|| session.select_program(None))
                            } else {
                                ui.button(RichText::new(t!("programs-select")).strong())
                                    .clicked()
                                    .then(|| session.select_program(Some(program)))
                            };

                            match result {
                                Some(Ok(())) => {
                                    self.error = None;
                                    if !is_current {
                                        next_screen = Some(Screen::Home);
                                    }
                                }
                                Some(Err(e)) => {
                                    tracing::error!("Failed to select program: {}", e);
                                    self.error = Some(e.to_string());
                                }
                                None => {}
                            }
                        });
                    });
                ui.add_space(8.0);
            }
        });

        next_screen
    }
}

fn program_details(ui: &mut Ui, program: &WorkoutProgram) {
    for day in &program.days {
        ui.label(RichText::new(format!("{}. {}", day.day_number, day.name)).strong());
        let muscles: Vec<String> = day
            .muscle_groups
            .iter()
            .map(|m| t!(m.translation_key()))
            .collect();
        ui.label(RichText::new(muscles.join(", ")).weak());
        for exercise in &day.exercises {
            ui.horizontal(|ui| {
                ui.label(format!("• {}", exercise.name));
                ui.label(RichText::new(exercise.prescription()).weak());
                if let Some(load) = exercise.load {
                    ui.label(RichText::new(t!(load.translation_key())).weak());
                }
                ui.label(
                    RichText::new(t!("programs-rest", "seconds" => exercise.rest_secs)).weak(),
                );
            });
        }
        ui.add_space(4.0);
    }

    if !program.benefits.is_empty() {
        ui.label(RichText::new(t!("programs-benefits")).strong());
        for benefit in &program.benefits {
            ui.label(format!("✔ {}", benefit));
        }
    }
    if !program.tips.is_empty() {
        ui.label(RichText::new(t!("programs-tips")).strong());
        for tip in &program.tips {
            ui.label(format!("💡 {}", tip));
        }
    }
}
