//! Profile screen: personal data, preferences, body weight and user switching.

use chrono::{Local, NaiveTime, Utc};
use egui::{RichText, Ui};
use uuid::Uuid;

use super::{weekday_name, WEEKDAYS};
use crate::goals::{weight_progress, FitnessGoal, UserLevel};
use crate::i18n::Language;
use crate::session::FitnessSession;
use crate::storage::config::{ThemePreference, UserProfile};
use crate::storage::profile_store::ProfileBackup;
use crate::t;
use crate::ui::theme::Palette;
use crate::workouts::WorkoutSchedule;

/// Actions the app handles after the profile screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    None,
    /// Theme changed, visuals must be reapplied
    ThemeChanged(ThemePreference),
    /// Session no longer has a profile
    LoggedOut,
    /// Another profile became active
    Switched,
}

/// Editable copy of the profile fields.
#[derive(Debug, Clone, Default)]
struct ProfileForm {
    name: String,
    avatar: String,
    level: UserLevel,
    goal: FitnessGoal,
    target_description: String,
    target_weight: String,
}

impl ProfileForm {
    fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            avatar: profile.avatar.clone().unwrap_or_default(),
            level: profile.level,
            goal: profile.goals.primary_goal,
            target_description: profile.goals.target_description.clone(),
            target_weight: profile
                .goals
                .target_weight
                .map(|w| w.to_string())
                .unwrap_or_default(),
        }
    }

    /// Apply the form to `profile`, or the translation key of the first invalid field.
    fn apply(&self, profile: &mut UserProfile) -> Result<(), &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("error-name-required");
        }
        let target_weight = match self.target_weight.trim() {
            "" => None,
            raw => Some(
                parse_weight(raw).ok_or("error-target-weight-invalid")?,
            ),
        };

        profile.name = name.to_string();
        profile.avatar = Some(self.avatar.trim().to_string()).filter(|a| !a.is_empty());
        profile.level = self.level;
        profile.goals.primary_goal = self.goal;
        profile.goals.target_description = self.target_description.trim().to_string();
        profile.goals.target_weight = target_weight;
        Ok(())
    }
}

fn parse_weight(raw: &str) -> Option<f32> {
    raw.trim()
        .replace(',', ".")
        .parse::<f32>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
}

/// Profile screen state.
#[derive(Default)]
pub struct ProfileScreen {
    form: Option<ProfileForm>,
    weight_input: String,
    weight_notes: String,
    schedule_day: Option<chrono::Weekday>,
    schedule_time: String,
    backups: Vec<ProfileBackup>,
    confirm_reset: bool,
    message: Option<(bool, String)>,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the form and the backup list from the session.
    pub fn refresh(&mut self, session: &FitnessSession) {
        self.form = session.profile().map(ProfileForm::from_profile);
        self.backups = match session.backups() {
            Ok(backups) => backups,
            Err(e) => {
                tracing::error!("Failed to list backups: {}", e);
                Vec::new()
            }
        };
        self.confirm_reset = false;
        self.message = None;
    }

    fn report<E: std::fmt::Display>(&mut self, result: Result<(), E>, ok_key: &str) -> bool {
        match result {
            Ok(()) => {
                self.message = Some((true, t!(ok_key)));
                true
            }
            Err(e) => {
                tracing::error!("Profile action failed: {}", e);
                self.message = Some((false, e.to_string()));
                false
            }
        }
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        session: &mut FitnessSession,
        palette: &Palette,
    ) -> ProfileAction {
        let mut action = ProfileAction::None;
        if self.form.is_none() {
            self.refresh(session);
        }
        let Some(profile) = session.profile().cloned() else {
            return ProfileAction::LoggedOut;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(profile.avatar_label()).size(36.0));
                ui.vertical(|ui| {
                    ui.label(RichText::new(&profile.name).size(24.0).strong());
                    ui.label(
                        RichText::new(t!(
                            "profile-member-since",
                            "date" => profile.created_at.with_timezone(&Local).format("%d.%m.%Y")
                        ))
                        .weak(),
                    );
                });
            });

            if let Some((ok, text)) = &self.message {
                let color = if *ok { palette.success } else { palette.error };
                ui.colored_label(color, text);
            }
            ui.separator();

            self.edit_section(ui, session, &profile);
            ui.separator();
            self.weight_section(ui, session, &profile, palette);
            ui.separator();
            self.schedule_section(ui, session);
            ui.separator();
            if let Some(changed) = self.preferences_section(ui, session) {
                action = changed;
            }
            ui.separator();
            if let Some(changed) = self.users_section(ui, session, palette) {
                action = changed;
            }
        });

        action
    }

    fn edit_section(&mut self, ui: &mut Ui, session: &mut FitnessSession, profile: &UserProfile) {
        ui.label(RichText::new(t!("profile-edit")).size(18.0).strong());
        let mut save = false;
        if let Some(form) = self.form.as_mut() {
            egui::Grid::new("profile_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(t!("profile-name"));
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label(t!("profile-avatar"));
                    ui.add(egui::TextEdit::singleline(&mut form.avatar).desired_width(40.0));
                    ui.end_row();

                    ui.label(t!("profile-level"));
                    egui::ComboBox::from_id_salt("profile_level")
                        .selected_text(t!(form.level.translation_key()))
                        .show_ui(ui, |ui| {
                            for level in UserLevel::all() {
                                ui.selectable_value(
                                    &mut form.level,
                                    *level,
                                    t!(level.translation_key()),
                                );
                            }
                        });
                    ui.end_row();

                    ui.label(t!("profile-goal"));
                    egui::ComboBox::from_id_salt("profile_goal")
                        .selected_text(t!(form.goal.translation_key()))
                        .show_ui(ui, |ui| {
                            for goal in FitnessGoal::all() {
                                ui.selectable_value(
                                    &mut form.goal,
                                    *goal,
                                    format!("{} {}", goal.icon(), t!(goal.translation_key())),
                                );
                            }
                        });
                    ui.end_row();

                    ui.label(t!("profile-goal-description"));
                    ui.text_edit_multiline(&mut form.target_description);
                    ui.end_row();

                    ui.label(t!("onboarding-target-weight"));
                    ui.add(egui::TextEdit::singleline(&mut form.target_weight).desired_width(80.0));
                    ui.end_row();
                });
            save = ui.button(t!("action-save")).clicked();
        }

        if !save {
            return;
        }
        let Some(form) = self.form.clone() else {
            return;
        };
        let mut updated = profile.clone();
        match form.apply(&mut updated) {
            Ok(()) => {
                let result = session.update_profile(updated);
                self.report(result, "profile-saved");
            }
            Err(key) => self.message = Some((false, t!(key))),
        }
    }

    fn weight_section(
        &mut self,
        ui: &mut Ui,
        session: &mut FitnessSession,
        profile: &UserProfile,
        palette: &Palette,
    ) {
        ui.label(RichText::new(t!("profile-weight")).size(18.0).strong());

        if let Some(latest) = session.weight_entries().last() {
            ui.label(t!("profile-current-weight", "weight" => format!("{:.1}", latest.weight_kg)));
        }
        if let Some(start) = profile.start_weight() {
            ui.label(
                RichText::new(t!("profile-start-weight", "weight" => format!("{:.1}", start)))
                    .weak(),
            );
        }
        if profile.goals.target_weight.is_some() {
            let progress = weight_progress(profile, session.weight_entries());
            ui.add(
                egui::ProgressBar::new(progress / 100.0)
                    .fill(palette.progress_color(progress.round() as u32))
                    .desired_width(260.0)
                    .text(t!("profile-weight-progress", "percent" => format!("{:.0}", progress))),
            );
        }
        if let Some(updated) = profile.last_weight_update {
            ui.label(
                RichText::new(t!(
                    "profile-weight-updated",
                    "date" => updated.with_timezone(&Local).format("%d.%m.%Y")
                ))
                .weak(),
            );
        }

        let mut add = false;
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.weight_input)
                    .hint_text("kg")
                    .desired_width(70.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.weight_notes)
                    .hint_text(t!("log-notes"))
                    .desired_width(160.0),
            );
            add = ui.button(t!("profile-add-weight")).clicked();
        });

        if add {
            match parse_weight(&self.weight_input) {
                Some(kg) => {
                    let notes = Some(std::mem::take(&mut self.weight_notes));
                    let result = session.add_weight_entry(kg, notes, Utc::now()).map(|_| ());
                    if self.report(result, "profile-weight-saved") {
                        self.weight_input.clear();
                    }
                }
                None => self.message = Some((false, t!("error-weight-invalid"))),
            }
        }
    }

    fn schedule_section(&mut self, ui: &mut Ui, session: &mut FitnessSession) {
        ui.label(RichText::new(t!("profile-schedule")).size(18.0).strong());

        let mut toggle: Option<WorkoutSchedule> = None;
        let mut delete: Option<Uuid> = None;
        for schedule in session.schedules() {
            ui.horizontal(|ui| {
                let mut enabled = schedule.enabled;
                if ui.checkbox(&mut enabled, "").changed() {
                    let mut changed = schedule.clone();
                    changed.enabled = enabled;
                    toggle = Some(changed);
                }
                ui.label(format!("{} {}", weekday_name(schedule.day_of_week), schedule.time));
                if ui.small_button("✖").clicked() {
                    delete = Some(schedule.id);
                }
            });
        }
        if let Some(schedule) = toggle {
            let result = session.save_schedule(schedule);
            self.report(result, "profile-schedule-saved");
        }
        if let Some(id) = delete {
            let result = session.delete_schedule(&id);
            self.report(result, "profile-schedule-saved");
        }

        if self.schedule_time.is_empty() {
            self.schedule_time = "18:00".to_string();
        }
        let mut add = false;
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("profile_schedule_day")
                .selected_text(self.schedule_day.map(weekday_name).unwrap_or_default())
                .show_ui(ui, |ui| {
                    for day in WEEKDAYS {
                        ui.selectable_value(&mut self.schedule_day, Some(day), weekday_name(day));
                    }
                });
            ui.add(egui::TextEdit::singleline(&mut self.schedule_time).desired_width(60.0));
            add = ui.button(t!("profile-add-schedule")).clicked();
        });

        if add {
            let time = self.schedule_time.trim();
            match (self.schedule_day, NaiveTime::parse_from_str(time, "%H:%M")) {
                (Some(day), Ok(_)) => {
                    let result = session.save_schedule(WorkoutSchedule::new(day, time));
                    self.report(result, "profile-schedule-saved");
                }
                (None, _) => self.message = Some((false, t!("error-days-required"))),
                (_, Err(_)) => self.message = Some((false, t!("error-time-invalid"))),
            }
        }
    }

    fn preferences_section(
        &mut self,
        ui: &mut Ui,
        session: &mut FitnessSession,
    ) -> Option<ProfileAction> {
        ui.label(RichText::new(t!("profile-preferences")).size(18.0).strong());

        let mut language = session.language();
        let mut theme = session.theme();
        let mut action = None;

        egui::Grid::new("profile_preferences")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(t!("profile-language"));
                egui::ComboBox::from_id_salt("profile_language")
                    .selected_text(format!("{} {}", language.flag(), language.display_name()))
                    .show_ui(ui, |ui| {
                        for lang in Language::all() {
                            ui.selectable_value(
                                &mut language,
                                *lang,
                                format!("{} {}", lang.flag(), lang.display_name()),
                            );
                        }
                    });
                ui.end_row();

                ui.label(t!("profile-theme"));
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut theme, ThemePreference::Dark, t!("theme-dark"));
                    ui.selectable_value(&mut theme, ThemePreference::Light, t!("theme-light"));
                    ui.selectable_value(&mut theme, ThemePreference::System, t!("theme-system"));
                });
                ui.end_row();
            });

        if language != session.language() {
            let result = session.set_language(language);
            self.report(result, "profile-language-saved");
            // Labels cached in the form are rebuilt in the new language.
            self.refresh(session);
        }
        if theme != session.theme() {
            let result = session.set_theme(theme);
            if self.report(result, "profile-theme-saved") {
                action = Some(ProfileAction::ThemeChanged(theme));
            }
        }

        action
    }

    fn users_section(
        &mut self,
        ui: &mut Ui,
        session: &mut FitnessSession,
        palette: &Palette,
    ) -> Option<ProfileAction> {
        ui.label(RichText::new(t!("profile-users")).size(18.0).strong());
        let current_id = session.profile().map(|p| p.id);
        let mut action = None;

        let mut switch_to = None;
        for backup in self.backups.iter().filter(|b| Some(b.id) != current_id) {
            ui.horizontal(|ui| {
                ui.label(format!("👤 {}", backup.name));
                let saved_at = backup
                    .backup_date
                    .with_timezone(&Local)
                    .format("%d.%m.%Y %H:%M")
                    .to_string();
                ui.label(RichText::new(saved_at).weak());
                if ui.button(t!("profile-switch")).clicked() {
                    switch_to = Some(backup.id);
                }
            });
        }
        if let Some(id) = switch_to {
            let result = session.switch_user(&id, Utc::now());
            if self.report(result, "profile-switched") {
                self.refresh(session);
                action = Some(ProfileAction::Switched);
            }
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(t!("profile-logout")).clicked() {
                match session.logout(Utc::now()) {
                    Ok(()) => action = Some(ProfileAction::LoggedOut),
                    Err(e) => {
                        tracing::error!("Logout failed: {}", e);
                        self.message = Some((false, e.to_string()));
                    }
                }
            }

            if !self.confirm_reset {
                if ui
                    .button(RichText::new(t!("profile-reset")).color(palette.error))
                    .clicked()
                {
                    self.confirm_reset = true;
                }
            } else {
                ui.label(RichText::new(t!("profile-reset-confirm")).color(palette.warning));
                if ui
                    .button(RichText::new(t!("action-confirm")).color(palette.error))
                    .clicked()
                {
                    let result = session.reset_profile_data(Utc::now());
                    self.report(result, "profile-reset-done");
                    self.confirm_reset = false;
                }
                if ui.button(t!("action-cancel")).clicked() {
                    self.confirm_reset = false;
                }
            }
        });

        if action.is_some() {
            self.form = None;
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_apply_validates() {
        let mut profile = UserProfile::new("Alex");
        let mut form = ProfileForm::from_profile(&profile);

        form.name = "   ".to_string();
        assert_eq!(form.apply(&mut profile), Err("error-name-required"));

        form.name = " Sam ".to_string();
        form.target_weight = "70,5".to_string();
        form.goal = FitnessGoal::WeightLoss;
        form.apply(&mut profile).unwrap();
        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.goals.target_weight, Some(70.5));
        assert_eq!(profile.goals.primary_goal, FitnessGoal::WeightLoss);
        assert_eq!(profile.avatar, None);

        form.target_weight = "heavy".to_string();
        assert_eq!(form.apply(&mut profile), Err("error-target-weight-invalid"));
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("82.4"), Some(82.4));
        assert_eq!(parse_weight(" 82,4 "), Some(82.4));
        assert_eq!(parse_weight("0"), None);
        assert_eq!(parse_weight(""), None);
    }
}
