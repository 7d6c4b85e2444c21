//! Onboarding module for first-time user experience.
//!
//! Provides a guided wizard that collects the language, name, level, goal and
//! training schedule of a new user and turns them into a profile.

pub mod glossary;
pub mod steps;

use chrono::{DateTime, NaiveTime, Utc, Weekday};
use thiserror::Error;

use crate::goals::{FitnessGoal, UserGoals, UserLevel, WeightEntry};
use crate::i18n::Language;
use crate::storage::config::UserProfile;

pub use glossary::{Glossary, GlossaryTerm};
pub use steps::OnboardingStep;

/// Validation failures that keep the wizard on its current step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OnboardingError {
    #[error("Name is required")]
    EmptyName,

    #[error("Goal description is required")]
    EmptyDescription,

    #[error("Current weight is required")]
    MissingWeight,

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("Invalid target weight: {0}")]
    InvalidTargetWeight(String),

    #[error("At least one training day is required")]
    NoTrainingDays,

    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

impl OnboardingError {
    pub fn translation_key(&self) -> &'static str {
        match self {
            OnboardingError::EmptyName => "error-name-required",
            OnboardingError::EmptyDescription => "error-description-required",
            OnboardingError::MissingWeight => "error-weight-required",
            OnboardingError::InvalidWeight(_) => "error-weight-invalid",
            OnboardingError::InvalidTargetWeight(_) => "error-target-weight-invalid",
            OnboardingError::NoTrainingDays => "error-days-required",
            OnboardingError::InvalidTime(_) => "error-time-invalid",
        }
    }
}

/// Raw wizard input, kept as typed text until validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingForm {
    pub language: Language,
    pub name: String,
    pub level: UserLevel,
    pub goal: FitnessGoal,
    pub target_description: String,
    pub current_weight: String,
    pub target_weight: String,
    pub preferred_days: Vec<Weekday>,
    pub preferred_time: String,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            language: Language::default(),
            name: String::new(),
            level: UserLevel::Beginner,
            goal: FitnessGoal::Maintenance,
            target_description: String::new(),
            current_weight: String::new(),
            target_weight: String::new(),
            preferred_days: Vec::new(),
            preferred_time: "18:00".to_string(),
        }
    }
}

impl OnboardingForm {
    /// Target weight is only asked for goals that change body weight.
    pub fn target_weight_applies(&self) -> bool {
        matches!(self.goal, FitnessGoal::WeightLoss | FitnessGoal::MuscleGain)
    }

    /// Add or remove a training day, keeping Monday-first order.
    pub fn toggle_day(&mut self, day: Weekday) {
        if let Some(pos) = self.preferred_days.iter().position(|d| *d == day) {
            self.preferred_days.remove(pos);
        } else {
            self.preferred_days.push(day);
            self.preferred_days
                .sort_by_key(|d| d.num_days_from_monday());
        }
    }

    fn parsed_weight(&self) -> Result<f32, OnboardingError> {
        let raw = self.current_weight.trim();
        if raw.is_empty() {
            return Err(OnboardingError::MissingWeight);
        }
        parse_positive(raw).ok_or_else(|| OnboardingError::InvalidWeight(raw.to_string()))
    }

    fn parsed_target_weight(&self) -> Result<Option<f32>, OnboardingError> {
        let raw = self.target_weight.trim();
        if raw.is_empty() || !self.target_weight_applies() {
            return Ok(None);
        }
        parse_positive(raw)
            .map(Some)
            .ok_or_else(|| OnboardingError::InvalidTargetWeight(raw.to_string()))
    }

    /// Check the fields collected on `step`.
    pub fn validate_step(&self, step: OnboardingStep) -> Result<(), OnboardingError> {
        match step {
            OnboardingStep::Name if self.name.trim().is_empty() => Err(OnboardingError::EmptyName),
            OnboardingStep::GoalDescription if self.target_description.trim().is_empty() => {
                Err(OnboardingError::EmptyDescription)
            }
            OnboardingStep::Weight => {
                self.parsed_weight()?;
                self.parsed_target_weight()?;
                Ok(())
            }
            OnboardingStep::Schedule => {
                if self.preferred_days.is_empty() {
                    return Err(OnboardingError::NoTrainingDays);
                }
                let time = self.preferred_time.trim();
                NaiveTime::parse_from_str(time, "%H:%M")
                    .map(|_| ())
                    .map_err(|_| OnboardingError::InvalidTime(time.to_string()))
            }
            _ => Ok(()),
        }
    }
}

fn parse_positive(raw: &str) -> Option<f32> {
    raw.replace(',', ".")
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Result of a finished wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedOnboarding {
    pub profile: UserProfile,
    pub initial_weight: WeightEntry,
    pub language: Language,
}

/// Onboarding wizard controller.
#[derive(Default)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    form: OnboardingForm,
    glossary: Glossary,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given interface language preselected.
    pub fn with_language(language: Language) -> Self {
        let mut wizard = Self::new();
        wizard.form.language = language;
        wizard
    }

    pub fn current_step(&self) -> OnboardingStep {
        self.step
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OnboardingForm {
        &mut self.form
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    /// Hints for the current step as `(term, definition)` pairs.
    pub fn hints(&self) -> Vec<(&str, &str)> {
        self.step
            .glossary_terms()
            .iter()
            .filter_map(|term| self.glossary.get(term))
            .map(|t| (t.term.as_str(), t.definition.as_str()))
            .collect()
    }

    /// Validate the current step and move forward. The last step stays put.
    pub fn next(&mut self) -> Result<(), OnboardingError> {
        self.form.validate_step(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
        }
    }

    /// Fraction of the wizard reached, counting the current step.
    pub fn progress(&self) -> f32 {
        (self.step.index() + 1) as f32 / OnboardingStep::all().len() as f32
    }

    /// Validate every step and build the new profile.
    pub fn complete(&self, now: DateTime<Utc>) -> Result<CompletedOnboarding, OnboardingError> {
        for step in OnboardingStep::all() {
            self.form.validate_step(*step)?;
        }

        let current_weight = self.form.parsed_weight()?;
        let goals = UserGoals {
            primary_goal: self.form.goal,
            target_description: self.form.target_description.trim().to_string(),
            current_weight: Some(current_weight),
            target_weight: self.form.parsed_target_weight()?,
            preferred_days: self.form.preferred_days.clone(),
            preferred_time: self.form.preferred_time.trim().to_string(),
        };

        let profile = UserProfile {
            name: self.form.name.trim().to_string(),
            level: self.form.level,
            goals,
            onboarding_completed: true,
            created_at: now,
            last_weight_update: Some(now),
            ..UserProfile::default()
        };

        tracing::info!("Onboarding completed for {}", profile.name);

        Ok(CompletedOnboarding {
            initial_weight: WeightEntry::new(current_weight, now),
            profile,
            language: self.form.language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> OnboardingWizard {
        let mut wizard = OnboardingWizard::with_language(Language::English);
        let form = wizard.form_mut();
        form.name = "  Dana ".to_string();
        form.level = UserLevel::Intermediate;
        form.goal = FitnessGoal::WeightLoss;
        form.target_description = "Lose 5 kg before summer".to_string();
        form.current_weight = "80,5".to_string();
        form.target_weight = "75".to_string();
        form.toggle_day(Weekday::Fri);
        form.toggle_day(Weekday::Mon);
        wizard
    }

    #[test]
    fn test_name_step_requires_name() {
        let mut wizard = OnboardingWizard::new();
        wizard.next().unwrap();
        assert_eq!(wizard.current_step(), OnboardingStep::Name);
        assert_eq!(wizard.next(), Err(OnboardingError::EmptyName));
        assert_eq!(wizard.current_step(), OnboardingStep::Name);

        wizard.form_mut().name = "Kim".to_string();
        wizard.next().unwrap();
        assert_eq!(wizard.current_step(), OnboardingStep::Level);
        wizard.back();
        assert_eq!(wizard.current_step(), OnboardingStep::Name);
    }

    #[test]
    fn test_weight_validation() {
        let mut form = OnboardingForm::default();
        assert_eq!(
            form.validate_step(OnboardingStep::Weight),
            Err(OnboardingError::MissingWeight)
        );
        form.current_weight = "-3".to_string();
        assert!(matches!(
            form.validate_step(OnboardingStep::Weight),
            Err(OnboardingError::InvalidWeight(_))
        ));

        form.current_weight = "70".to_string();
        form.goal = FitnessGoal::MuscleGain;
        form.target_weight = "abc".to_string();
        assert!(matches!(
            form.validate_step(OnboardingStep::Weight),
            Err(OnboardingError::InvalidTargetWeight(_))
        ));

        form.goal = FitnessGoal::Endurance;
        assert_eq!(form.validate_step(OnboardingStep::Weight), Ok(()));
    }

    #[test]
    fn test_schedule_validation() {
        let mut form = OnboardingForm::default();
        assert_eq!(
            form.validate_step(OnboardingStep::Schedule),
            Err(OnboardingError::NoTrainingDays)
        );
        form.toggle_day(Weekday::Wed);
        assert_eq!(form.validate_step(OnboardingStep::Schedule), Ok(()));
        form.preferred_time = "25:00".to_string();
        assert!(form.validate_step(OnboardingStep::Schedule).is_err());

        form.toggle_day(Weekday::Wed);
        assert!(form.preferred_days.is_empty());
    }

    #[test]
    fn test_complete_builds_profile() {
        let wizard = filled_wizard();
        let now = Utc::now();
        let done = wizard.complete(now).unwrap();

        assert_eq!(done.profile.name, "Dana");
        assert!(done.profile.onboarding_completed);
        assert_eq!(done.profile.level, UserLevel::Intermediate);
        assert_eq!(done.profile.goals.current_weight, Some(80.5));
        assert_eq!(done.profile.goals.target_weight, Some(75.0));
        assert_eq!(
            done.profile.goals.preferred_days,
            vec![Weekday::Mon, Weekday::Fri]
        );
        assert_eq!(done.profile.last_weight_update, Some(now));
        assert_eq!(done.initial_weight.weight_kg, 80.5);
        assert_eq!(done.language, Language::English);
    }

    #[test]
    fn test_complete_reports_first_invalid_step() {
        let mut wizard = filled_wizard();
        wizard.form_mut().target_description = "   ".to_string();
        assert_eq!(
            wizard.complete(Utc::now()),
            Err(OnboardingError::EmptyDescription)
        );
    }

    #[test]
    fn test_progress_and_hints() {
        let mut wizard = filled_wizard();
        assert!((wizard.progress() - 0.125).abs() < f32::EPSILON);
        while !wizard.current_step().is_last() {
            wizard.next().unwrap();
            if wizard.current_step() == OnboardingStep::Level {
                assert_eq!(wizard.hints().len(), 3);
            }
        }
        assert_eq!(wizard.progress(), 1.0);
        wizard.next().unwrap();
        assert_eq!(wizard.current_step(), OnboardingStep::Summary);
    }
}
