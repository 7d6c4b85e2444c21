//! Onboarding wizard steps.

use serde::{Deserialize, Serialize};

/// Steps in the onboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OnboardingStep {
    /// Interface language
    #[default]
    Language,
    Name,
    /// Training experience
    Level,
    /// Primary fitness goal
    Goal,
    /// Free-text description of the goal
    GoalDescription,
    /// Current and optional target body weight
    Weight,
    /// Preferred training days and time
    Schedule,
    /// Review before the profile is created
    Summary,
}

impl OnboardingStep {
    /// Get all steps in order.
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Language,
            OnboardingStep::Name,
            OnboardingStep::Level,
            OnboardingStep::Goal,
            OnboardingStep::GoalDescription,
            OnboardingStep::Weight,
            OnboardingStep::Schedule,
            OnboardingStep::Summary,
        ]
    }

    /// Get the step index (0-based).
    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Option<OnboardingStep> {
        Self::all().get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<OnboardingStep> {
        self.index().checked_sub(1).map(|i| Self::all()[i])
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            OnboardingStep::Language => "onboarding-language-title",
            OnboardingStep::Name => "onboarding-name-title",
            OnboardingStep::Level => "onboarding-level-title",
            OnboardingStep::Goal => "onboarding-goal-title",
            OnboardingStep::GoalDescription => "onboarding-description-title",
            OnboardingStep::Weight => "onboarding-weight-title",
            OnboardingStep::Schedule => "onboarding-schedule-title",
            OnboardingStep::Summary => "onboarding-summary-title",
        }
    }

    pub fn description_key(&self) -> &'static str {
        match self {
            OnboardingStep::Language => "onboarding-language-description",
            OnboardingStep::Name => "onboarding-name-description",
            OnboardingStep::Level => "onboarding-level-description",
            OnboardingStep::Goal => "onboarding-goal-description",
            OnboardingStep::GoalDescription => "onboarding-description-description",
            OnboardingStep::Weight => "onboarding-weight-description",
            OnboardingStep::Schedule => "onboarding-schedule-description",
            OnboardingStep::Summary => "onboarding-summary-description",
        }
    }

    /// Glossary terms worth a hint on this step.
    pub fn glossary_terms(&self) -> &'static [&'static str] {
        match self {
            OnboardingStep::Level => &["Set", "Rep", "1RM"],
            OnboardingStep::Goal => &["Progressive overload", "HIIT", "Compound exercise"],
            OnboardingStep::Schedule => &["Rest day", "Deload"],
            _ => &[],
        }
    }

    pub fn is_first(&self) -> bool {
        *self == OnboardingStep::Language
    }

    pub fn is_last(&self) -> bool {
        *self == OnboardingStep::Summary
    }
}
