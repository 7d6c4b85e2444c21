//! First-run wizard screen.

use chrono::Utc;
use egui::{RichText, Ui, Vec2};
use uuid::Uuid;

use super::{weekday_name, WEEKDAYS};
use crate::goals::{FitnessGoal, UserLevel};
use crate::i18n::{self, Language};
use crate::onboarding::{CompletedOnboarding, OnboardingError, OnboardingStep, OnboardingWizard};
use crate::storage::profile_store::ProfileBackup;
use crate::t;

/// Actions that can result from the onboarding screen.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingAction {
    None,
    /// Wizard finished, create the profile
    Completed(Box<CompletedOnboarding>),
    /// Restore a previously backed-up profile instead
    SwitchTo(Uuid),
}

/// Onboarding screen state.
#[derive(Default)]
pub struct OnboardingScreen {
    wizard: OnboardingWizard,
    error: Option<OnboardingError>,
    backups: Vec<ProfileBackup>,
}

impl OnboardingScreen {
    pub fn new(language: Language) -> Self {
        Self {
            wizard: OnboardingWizard::with_language(language),
            ..Self::default()
        }
    }

    /// Start over, offering `backups` for switching.
    pub fn reset(&mut self, language: Language, backups: Vec<ProfileBackup>) {
        self.wizard = OnboardingWizard::with_language(language);
        self.error = None;
        self.backups = backups;
    }

    pub fn show(&mut self, ui: &mut Ui) -> OnboardingAction {
        let mut action = OnboardingAction::None;
        let step = self.wizard.current_step();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(520.0);
                ui.add_space(16.0);

                ui.add(egui::ProgressBar::new(self.wizard.progress()).text(t!(
                    "onboarding-step",
                    "current" => step.index() + 1,
                    "total" => OnboardingStep::all().len()
                )));
                ui.add_space(16.0);

                ui.label(RichText::new(t!(step.title_key())).size(26.0).strong());
                ui.label(RichText::new(t!(step.description_key())).weak());
                ui.add_space(16.0);
            });

            match step {
                OnboardingStep::Language => self.language_step(ui),
                OnboardingStep::Name => {
                    ui.text_edit_singleline(&mut self.wizard.form_mut().name);
                }
                OnboardingStep::Level => {
                    let form = self.wizard.form_mut();
                    for level in UserLevel::all() {
                        ui.radio_value(&mut form.level, *level, t!(level.translation_key()));
                    }
                }
                OnboardingStep::Goal => {
                    let form = self.wizard.form_mut();
                    for goal in FitnessGoal::all() {
                        ui.radio_value(
                            &mut form.goal,
                            *goal,
                            format!("{} {}", goal.icon(), t!(goal.translation_key())),
                        );
                    }
                }
                OnboardingStep::GoalDescription => {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.wizard.form_mut().target_description)
                            .hint_text(t!("onboarding-description-hint"))
                            .desired_rows(4),
                    );
                }
                OnboardingStep::Weight => self.weight_step(ui),
                OnboardingStep::Schedule => self.schedule_step(ui),
                OnboardingStep::Summary => self.summary_step(ui),
            }

            let hints = self.wizard.hints();
            if !hints.is_empty() {
                ui.add_space(12.0);
                ui.collapsing(t!("onboarding-hints"), |ui| {
                    for (term, definition) in hints {
                        ui.label(RichText::new(term).strong());
                        ui.label(RichText::new(definition).weak());
                    }
                });
            }

            if let Some(error) = &self.error {
                ui.add_space(8.0);
                ui.colored_label(ui.visuals().error_fg_color, t!(error.translation_key()));
            }

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                let button_size = Vec2::new(140.0, 40.0);
                if !step.is_first()
                    && ui
                        .add_sized(button_size, egui::Button::new(t!("action-back")))
                        .clicked()
                {
                    self.error = None;
                    self.wizard.back();
                }

                let label = if step.is_last() {
                    t!("onboarding-finish")
                } else {
                    t!("action-next")
                };
                if ui
                    .add_sized(button_size, egui::Button::new(RichText::new(label).strong()))
                    .clicked()
                {
                    action = self.advance();
                }
            });

            if step.is_first() && !self.backups.is_empty() {
                ui.add_space(24.0);
                ui.separator();
                ui.label(RichText::new(t!("onboarding-existing-profiles")).strong());
                for backup in &self.backups {
                    if ui
                        .button(format!(
                            "👤 {} ({})",
                            backup.name,
                            backup.backup_date.format("%d.%m.%Y")
                        ))
                        .clicked()
                    {
                        action = OnboardingAction::SwitchTo(backup.id);
                    }
                }
            }
        });

        action
    }

    fn advance(&mut self) -> OnboardingAction {
        if self.wizard.current_step().is_last() {
            return match self.wizard.complete(Utc::now()) {
                Ok(done) => {
                    self.error = None;
                    OnboardingAction::Completed(Box::new(done))
                }
                Err(e) => {
                    tracing::debug!("Onboarding incomplete: {}", e);
                    self.error = Some(e);
                    OnboardingAction::None
                }
            };
        }

        match self.wizard.next() {
            Ok(()) => self.error = None,
            Err(e) => self.error = Some(e),
        }
        OnboardingAction::None
    }

    fn language_step(&mut self, ui: &mut Ui) {
        let form = self.wizard.form_mut();
        for lang in Language::all() {
            let label = format!("{} {}", lang.flag(), lang.display_name());
            if ui.radio_value(&mut form.language, *lang, label).changed() {
                // Preview the wizard in the chosen language right away.
                i18n::set_language(*lang);
            }
        }
    }

    fn weight_step(&mut self, ui: &mut Ui) {
        let form = self.wizard.form_mut();
        egui::Grid::new("onboarding_weight")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(t!("onboarding-current-weight"));
                ui.add(egui::TextEdit::singleline(&mut form.current_weight).desired_width(100.0));
                ui.end_row();

                if form.target_weight_applies() {
                    ui.label(t!("onboarding-target-weight"));
                    ui.add(
                        egui::TextEdit::singleline(&mut form.target_weight).desired_width(100.0),
                    );
                    ui.end_row();
                }
            });
    }

    fn schedule_step(&mut self, ui: &mut Ui) {
        let form = self.wizard.form_mut();
        ui.horizontal_wrapped(|ui| {
            for day in WEEKDAYS {
                let selected = form.preferred_days.contains(&day);
                if ui.selectable_label(selected, weekday_name(day)).clicked() {
                    form.toggle_day(day);
                }
            }
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(t!("onboarding-preferred-time"));
            ui.add(egui::TextEdit::singleline(&mut form.preferred_time).desired_width(60.0));
        });
    }

    fn summary_step(&self, ui: &mut Ui) {
        let form = self.wizard.form();
        egui::Grid::new("onboarding_summary")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new(t!("profile-name")).weak());
                ui.label(form.name.trim());
                ui.end_row();

                ui.label(RichText::new(t!("profile-level")).weak());
                ui.label(t!(form.level.translation_key()));
                ui.end_row();

                ui.label(RichText::new(t!("profile-goal")).weak());
                ui.label(t!(form.goal.translation_key()));
                ui.end_row();

                ui.label(RichText::new(t!("onboarding-current-weight")).weak());
                ui.label(form.current_weight.trim());
                ui.end_row();

                if form.target_weight_applies() && !form.target_weight.trim().is_empty() {
                    ui.label(RichText::new(t!("onboarding-target-weight")).weak());
                    ui.label(form.target_weight.trim());
                    ui.end_row();
                }

                ui.label(RichText::new(t!("onboarding-schedule-title")).weak());
                let days: Vec<String> =
                    form.preferred_days.iter().map(|d| weekday_name(*d)).collect();
                ui.label(format!("{} · {}", days.join(", "), form.preferred_time.trim()));
                ui.end_row();
            });
    }
}
