//! Workout logging screen: free-form sessions and program days.

use chrono::{Duration, Local, Utc};
use egui::{RichText, Ui};
use uuid::Uuid;

use super::Screen;
use crate::goals::UserLevel;
use crate::programs::{ProgramCatalog, WorkoutProgram};
use crate::session::FitnessSession;
use crate::t;
use crate::ui::theme::{workout_type_color, Palette};
use crate::workouts::{
    local_noon, recommended_weight, CustomExercise, DraftError, Exercise, ExerciseCategory,
    ExerciseForm, ExerciseInputError, ExerciseLibrary, Feeling, PerformedExercise,
    WeightCategory, Workout, WorkoutDraft, WorkoutType,
};

/// Oldest day a session can be back-dated to.
const MAX_DAYS_AGO: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LogMode {
    #[default]
    FreeForm,
    ProgramDay,
}

/// Free-form session being entered.
#[derive(Debug, Clone, Default)]
struct FreeFormState {
    workout_type: WorkoutType,
    days_ago: u32,
    duration: String,
    feeling: Feeling,
    notes: String,
    exercises: Vec<PerformedExercise>,
    search: String,
    selected_exercise: Option<String>,
    custom_name: String,
    form: ExerciseForm,
}

/// Inline editor for a logged workout.
#[derive(Debug, Clone)]
struct HistoryEdit {
    workout: Workout,
    duration: String,
}

/// Workout logging screen state.
#[derive(Default)]
pub struct LogWorkoutScreen {
    mode: LogMode,
    free: FreeFormState,
    draft: Option<WorkoutDraft>,
    /// Program exercise open in the editor and its fields
    editing: Option<(String, ExerciseForm)>,
    selected_day: Option<u8>,
    history_edit: Option<HistoryEdit>,
    errors: Vec<String>,
}

impl LogWorkoutScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any unsaved input.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        session: &mut FitnessSession,
        library: &mut ExerciseLibrary,
        catalog: &ProgramCatalog,
        palette: &Palette,
    ) -> Option<Screen> {
        let mut next_screen = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new(t!("log-title")).size(26.0).strong());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.mode, LogMode::FreeForm, t!("log-mode-free"));
                ui.selectable_value(&mut self.mode, LogMode::ProgramDay, t!("log-mode-program"));
            });
            ui.separator();

            let saved = match self.mode {
                LogMode::FreeForm => self.free_form(ui, session, library),
                LogMode::ProgramDay => self.program_day(ui, session, catalog),
            };

            for error in &self.errors {
                ui.colored_label(palette.error, error);
            }

            if saved {
                next_screen = Some(Screen::Home);
            }

            ui.add_space(20.0);
            ui.separator();
            self.history(ui, session, palette);
        });

        next_screen
    }

    // ========== Free-form ==========

    fn free_form(
        &mut self,
        ui: &mut Ui,
        session: &mut FitnessSession,
        library: &mut ExerciseLibrary,
    ) -> bool {
        let level = session
            .profile()
            .map(|p| p.level)
            .unwrap_or(UserLevel::Beginner);
        let state = &mut self.free;

        egui::Grid::new("log_free_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(t!("log-workout-type"));
                ui.horizontal_wrapped(|ui| {
                    for workout_type in WorkoutType::all() {
                        ui.selectable_value(
                            &mut state.workout_type,
                            *workout_type,
                            RichText::new(format!(
                                "{} {}",
                                workout_type.icon(),
                                t!(workout_type.translation_key())
                            ))
                            .color(workout_type_color(*workout_type)),
                        );
                    }
                });
                ui.end_row();

                ui.label(t!("log-days-ago"));
                ui.add(egui::DragValue::new(&mut state.days_ago).range(0..=MAX_DAYS_AGO));
                ui.end_row();

                ui.label(t!("log-duration"));
                ui.add(egui::TextEdit::singleline(&mut state.duration).desired_width(80.0));
                ui.end_row();

                ui.label(t!("log-feeling"));
                feeling_picker(ui, &mut state.feeling);
                ui.end_row();

                ui.label(t!("log-notes"));
                ui.text_edit_multiline(&mut state.notes);
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.label(RichText::new(t!("log-exercises")).size(18.0).strong());

        let mut remove = None;
        for (index, exercise) in state.exercises.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(&exercise.name);
                ui.label(RichText::new(describe_exercise(exercise)).weak());
                if ui.small_button("✖").clicked() {
                    remove = Some(index);
                }
            });
        }
        if let Some(index) = remove {
            state.exercises.remove(index);
        }

        // Exercise picker
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.text_edit_singleline(&mut state.search);
        });
        let selected_name = state
            .selected_exercise
            .as_deref()
            .and_then(|id| library.get(id))
            .map(|e| e.name.clone())
            .unwrap_or_else(|| t!("log-pick-exercise"));
        egui::ComboBox::from_id_salt("log_exercise_picker")
            .selected_text(selected_name)
            .width(260.0)
            .show_ui(ui, |ui| {
                let matches: Vec<&Exercise> = if state.search.trim().is_empty() {
                    library.all().iter().collect()
                } else {
                    library.search(state.search.trim())
                };
                for exercise in matches {
                    ui.selectable_value(
                        &mut state.selected_exercise,
                        Some(exercise.id.clone()),
                        &exercise.name,
                    );
                }
            });

        if let Some(exercise) = state.selected_exercise.as_deref().and_then(|id| library.get(id)) {
            let recommendation = recommended_weight(session.workouts(), &exercise.id, level);
            let category = WeightCategory::for_weight(recommendation.recommended as f32);
            ui.label(
                RichText::new(t!(
                    "log-recommended-weight",
                    "weight" => recommendation.recommended,
                    "min" => recommendation.range.min,
                    "max" => recommendation.range.max
                ))
                .weak(),
            );
            ui.label(
                RichText::new(format!(
                    "{} · {}",
                    t!(category.translation_key()),
                    category.range_label()
                ))
                .weak(),
            );
            ui.collapsing(t!("log-exercise-details"), |ui| {
                ui.label(&exercise.description);
                for (step, instruction) in exercise.instructions.iter().enumerate() {
                    ui.label(format!("{}. {}", step + 1, instruction));
                }
                for tip in &exercise.tips {
                    ui.label(RichText::new(format!("💡 {}", tip)).weak());
                }
            });
        } else {
            ui.horizontal(|ui| {
                ui.label(t!("log-custom-exercise"));
                ui.text_edit_singleline(&mut state.custom_name);
                if ui.button(t!("log-save-custom")).clicked()
                    && !state.custom_name.trim().is_empty()
                {
                    let added = library.add_custom(CustomExercise {
                        name: state.custom_name.trim().to_string(),
                        category: ExerciseCategory::Strength,
                        muscle_groups: Vec::new(),
                        description: String::new(),
                        difficulty: level,
                    });
                    state.selected_exercise = Some(added.id.clone());
                    state.custom_name.clear();
                }
            });
        }

        let mut add_clicked = false;
        ui.horizontal(|ui| {
            exercise_fields(ui, &mut state.form);
            add_clicked = ui.button(t!("log-add-exercise")).clicked();
        });

        if add_clicked {
            self.errors.clear();
            let chosen = state
                .selected_exercise
                .as_deref()
                .and_then(|id| library.get(id))
                .map(|e| (e.id.clone(), e.name.clone()));
            match (chosen, state.form.parse()) {
                (None, _) => self.errors.push(t!("error-exercise-required")),
                (Some(_), Err(errors)) => self.errors.extend(input_errors(&errors)),
                (Some((id, name)), Ok((input, duration))) => {
                    let notes = state.form.notes.trim();
                    state.exercises.push(PerformedExercise {
                        exercise_id: id,
                        name,
                        sets: input.sets,
                        reps: input.reps,
                        weight_kg: input.weight_kg,
                        duration_minutes: duration,
                        notes: (!notes.is_empty()).then(|| notes.to_string()),
                    });
                    state.form = ExerciseForm::default();
                    state.selected_exercise = None;
                }
            }
        }

        ui.add_space(12.0);
        if !ui
            .button(RichText::new(t!("log-save")).size(18.0).strong())
            .clicked()
        {
            return false;
        }

        self.errors.clear();
        let Some(duration) = parse_minutes(&self.free.duration) else {
            self.errors.push(t!("error-not-a-number"));
            return false;
        };

        let state = std::mem::take(&mut self.free);
        let now = Utc::now();
        let performed_at = if state.days_ago == 0 {
            now
        } else {
            local_noon(Local::now().date_naive() - Duration::days(state.days_ago as i64))
        };

        let notes = state.notes.trim();
        let mut workout = Workout::new(performed_at, state.workout_type);
        workout.duration_minutes = duration;
        workout.feeling = state.feeling;
        workout.notes = (!notes.is_empty()).then(|| notes.to_string());
        workout.exercises = state.exercises;

        match session.add_workout(workout, now) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to save workout: {}", e);
                self.errors.push(e.to_string());
                false
            }
        }
    }

    // ========== Program day ==========

    fn program_day(
        &mut self,
        ui: &mut Ui,
        session: &mut FitnessSession,
        catalog: &ProgramCatalog,
    ) -> bool {
        let Some(profile) = session.profile() else {
            return false;
        };
        let level = profile.level;
        let Some(program) = profile
            .current_program
            .as_deref()
            .and_then(|id| catalog.get(id))
        else {
            ui.label(RichText::new(t!("log-no-program")).weak());
            return false;
        };

        ui.label(RichText::new(&program.name).size(18.0).strong());

        if self.draft.is_none() {
            self.day_picker(ui, session, program);
            return false;
        }

        let mut finish = false;
        let mut cancel = false;
        if let Some(draft) = self.draft.as_mut() {
            ui.label(t!("log-day", "day" => draft.day().day_number, "name" => draft.day().name));
            ui.add_space(8.0);

            let planned = draft.day().exercises.clone();
            for exercise in &planned {
                let recorded = draft.entry(&exercise.exercise_id).cloned();
                ui.horizontal(|ui| {
                    let mark = if recorded.is_some() { "✅" } else { "⬜" };
                    ui.label(mark);
                    ui.label(RichText::new(&exercise.name).strong());
                    ui.label(RichText::new(exercise.prescription()).weak());
                    if let Some(load) = exercise.load {
                        ui.label(RichText::new(t!(load.translation_key())).weak());
                    }
                    if let Some(entry) = &recorded {
                        ui.label(describe_exercise(entry));
                    }
                    if ui.small_button("✏").clicked() {
                        let form =
                            draft.editor_defaults(&exercise.exercise_id, session.workouts(), level);
                        self.editing = Some((exercise.exercise_id.clone(), form));
                    }
                    if recorded.is_some() && ui.small_button("✖").clicked() {
                        draft.remove(&exercise.exercise_id);
                    }
                });
                if let Some(notes) = &exercise.notes {
                    ui.label(RichText::new(format!("💡 {}", notes)).weak());
                }

                let editing_this = self
                    .editing
                    .as_ref()
                    .is_some_and(|(id, _)| *id == exercise.exercise_id);
                if editing_this {
                    let mut record = false;
                    let mut close = false;
                    if let Some((_, form)) = self.editing.as_mut() {
                        ui.horizontal(|ui| {
                            exercise_fields(ui, form);
                            record = ui.button(t!("action-save")).clicked();
                            close = ui.button(t!("action-cancel")).clicked();
                        });
                    }
                    if record {
                        if let Some((id, form)) = self.editing.take() {
                            match draft.record(&id, &form) {
                                Ok(()) => self.errors.clear(),
                                Err(DraftError::InvalidInput(errors)) => {
                                    self.errors = input_errors(&errors);
                                    self.editing = Some((id, form));
                                }
                                Err(e) => self.errors = vec![e.to_string()],
                            }
                        }
                    } else if close {
                        self.editing = None;
                    }
                }
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.label(t!("log-feeling"));
                feeling_picker(ui, &mut draft.feeling);
            });
            ui.horizontal(|ui| {
                ui.label(t!("log-notes"));
                ui.text_edit_multiline(&mut draft.notes);
            });

            let skipped = draft.skipped().len();
            if skipped > 0 && draft.recorded_count() > 0 {
                ui.label(
                    RichText::new(t!("log-skipped-warning", "count" => skipped))
                        .color(ui.visuals().warn_fg_color),
                );
            }

            ui.horizontal(|ui| {
                finish = ui
                    .button(RichText::new(t!("log-finish")).size(18.0).strong())
                    .clicked();
                cancel = ui.button(t!("action-cancel")).clicked();
            });
        }

        if cancel {
            self.draft = None;
            self.editing = None;
            self.errors.clear();
            return false;
        }
        if !finish {
            return false;
        }

        let Some(draft) = self.draft.take() else {
            return false;
        };
        let now = Utc::now();
        match draft.clone().finish(now) {
            Ok(workout) => match session.add_workout(workout, now) {
                Ok(()) => {
                    self.errors.clear();
                    self.editing = None;
                    true
                }
                Err(e) => {
                    tracing::error!("Failed to save program workout: {}", e);
                    self.errors = vec![e.to_string()];
                    self.draft = Some(draft);
                    false
                }
            },
            Err(e) => {
                self.errors = vec![draft_error_text(&e)];
                self.draft = Some(draft);
                false
            }
        }
    }

    fn day_picker(&mut self, ui: &mut Ui, session: &FitnessSession, program: &WorkoutProgram) {
        let suggested = program
            .next_day(session.last_program_day(&program.id))
            .map(|d| d.day_number);
        let selected = self.selected_day.or(suggested);

        egui::ComboBox::from_id_salt("log_program_day")
            .selected_text(
                selected
                    .and_then(|n| program.day(n))
                    .map(|d| format!("{}. {}", d.day_number, d.name))
                    .unwrap_or_default(),
            )
            .show_ui(ui, |ui| {
                for day in &program.days {
                    ui.selectable_value(
                        &mut self.selected_day,
                        Some(day.day_number),
                        format!("{}. {}", day.day_number, day.name),
                    );
                }
            });

        if ui.button(t!("log-start-day")).clicked() {
            if let Some(day_number) = self.selected_day.or(suggested) {
                match WorkoutDraft::start(program, day_number) {
                    Ok(draft) => {
                        tracing::debug!("Started day {} of {}", day_number, program.id);
                        self.draft = Some(draft);
                        self.errors.clear();
                    }
                    Err(e) => self.errors = vec![draft_error_text(&e)],
                }
            }
        }
    }

    // ========== History ==========

    fn history(&mut self, ui: &mut Ui, session: &mut FitnessSession, palette: &Palette) {
        ui.label(RichText::new(t!("log-history")).size(18.0).strong());

        let mut delete: Option<Uuid> = None;
        for workout in session.workouts().iter().take(10) {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(workout.workout_type.icon())
                        .color(workout_type_color(workout.workout_type)),
                );
                ui.label(workout.date().format("%d.%m.%Y").to_string());
                ui.label(t!(workout.workout_type.translation_key()));
                ui.label(t!("unit-minutes", "count" => workout.duration_minutes));
                ui.label(workout.feeling.emoji());
                if ui.small_button("✏").clicked() {
                    self.history_edit = Some(HistoryEdit {
                        workout: workout.clone(),
                        duration: workout.duration_minutes.to_string(),
                    });
                }
                if ui
                    .small_button(RichText::new("🗑").color(palette.error))
                    .clicked()
                {
                    delete = Some(workout.id);
                }
            });
        }

        if let Some(id) = delete {
            if let Err(e) = session.delete_workout(&id, Utc::now()) {
                tracing::error!("Failed to delete workout: {}", e);
                self.errors = vec![e.to_string()];
            }
        }

        let mut save = false;
        let mut close = false;
        if let Some(edit) = self.history_edit.as_mut() {
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(t!("log-duration"));
                    ui.add(egui::TextEdit::singleline(&mut edit.duration).desired_width(60.0));
                    ui.label(t!("log-feeling"));
                    feeling_picker(ui, &mut edit.workout.feeling);
                });
                ui.checkbox(&mut edit.workout.completed, t!("log-completed"));
                ui.horizontal(|ui| {
                    save = ui.button(t!("action-save")).clicked();
                    close = ui.button(t!("action-cancel")).clicked();
                });
            });
        }

        if close {
            self.history_edit = None;
        } else if save {
            if let Some(mut edit) = self.history_edit.take() {
                match parse_minutes(&edit.duration) {
                    Some(minutes) => {
                        edit.workout.duration_minutes = minutes;
                        if let Err(e) = session.update_workout(edit.workout, Utc::now()) {
                            tracing::error!("Failed to update workout: {}", e);
                            self.errors = vec![e.to_string()];
                        }
                    }
                    None => {
                        self.errors = vec![t!("error-not-a-number")];
                        self.history_edit = Some(edit);
                    }
                }
            }
        }
    }
}

fn feeling_picker(ui: &mut Ui, feeling: &mut Feeling) {
    ui.horizontal(|ui| {
        for option in Feeling::scale() {
            ui.selectable_value(feeling, option, RichText::new(option.emoji()).size(20.0));
        }
    });
}

fn exercise_fields(ui: &mut Ui, form: &mut ExerciseForm) {
    ui.label(t!("log-weight"));
    ui.add(egui::TextEdit::singleline(&mut form.weight).desired_width(50.0));
    ui.label(t!("log-reps"));
    ui.add(egui::TextEdit::singleline(&mut form.reps).desired_width(40.0));
    ui.label(t!("log-sets"));
    ui.add(egui::TextEdit::singleline(&mut form.sets).desired_width(40.0));
    ui.label(t!("log-minutes"));
    ui.add(egui::TextEdit::singleline(&mut form.duration).desired_width(40.0));
}

fn input_errors(errors: &[ExerciseInputError]) -> Vec<String> {
    errors.iter().map(|e| t!(e.translation_key())).collect()
}

fn draft_error_text(error: &DraftError) -> String {
    match error {
        DraftError::NoExercises => t!("error-no-exercises"),
        DraftError::InvalidInput(errors) => input_errors(errors).join("\n"),
        other => other.to_string(),
    }
}

/// Blank means zero minutes.
fn parse_minutes(text: &str) -> Option<u32> {
    match text.trim() {
        "" => Some(0),
        text => text.parse().ok(),
    }
}

/// Compact `60 kg × 8 × 3` style summary.
fn describe_exercise(exercise: &PerformedExercise) -> String {
    let mut parts = Vec::new();
    if let Some(weight) = exercise.working_weight() {
        parts.push(format!("{} kg", weight));
    }
    if let Some(reps) = exercise.reps {
        parts.push(reps.to_string());
    }
    if let Some(sets) = exercise.sets {
        parts.push(sets.to_string());
    }
    let mut text = parts.join(" × ");
    if let Some(minutes) = exercise.duration_minutes {
        if !text.is_empty() {
            text.push_str(", ");
        }
        text.push_str(&format!("{} min", minutes));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes(""), Some(0));
        assert_eq!(parse_minutes(" 45 "), Some(45));
        assert_eq!(parse_minutes("abc"), None);
        assert_eq!(parse_minutes("-5"), None);
    }

    #[test]
    fn test_describe_exercise() {
        let squat = PerformedExercise::new("squat", "Squat").with_load(60.0, 8, 3);
        assert_eq!(describe_exercise(&squat), "60 kg × 8 × 3");

        let mut run = PerformedExercise::new("running", "Running");
        run.duration_minutes = Some(30);
        assert_eq!(describe_exercise(&run), "30 min");
    }
}
