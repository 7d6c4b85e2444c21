//! Fitness goal type definitions.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Primary fitness goal chosen during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Strength,
    Endurance,
    #[default]
    Maintenance,
}

impl FitnessGoal {
    /// All goals in display order.
    pub fn all() -> &'static [FitnessGoal] {
        &[
            FitnessGoal::WeightLoss,
            FitnessGoal::MuscleGain,
            FitnessGoal::Strength,
            FitnessGoal::Endurance,
            FitnessGoal::Maintenance,
        ]
    }

    /// Stable identifier used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Strength => "strength",
            FitnessGoal::Endurance => "endurance",
            FitnessGoal::Maintenance => "maintenance",
        }
    }

    /// Parse a stored identifier.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|g| g.as_str() == s)
    }

    /// Translation key for the goal name.
    pub fn translation_key(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "goal-weight-loss",
            FitnessGoal::MuscleGain => "goal-muscle-gain",
            FitnessGoal::Strength => "goal-strength",
            FitnessGoal::Endurance => "goal-endurance",
            FitnessGoal::Maintenance => "goal-maintenance",
        }
    }

    /// Icon shown next to the goal.
    pub fn icon(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "🔥",
            FitnessGoal::MuscleGain => "💪",
            FitnessGoal::Strength => "🏋",
            FitnessGoal::Endurance => "🏃",
            FitnessGoal::Maintenance => "⚖",
        }
    }

    /// Whether reaching the target weight means losing weight.
    pub fn is_weight_loss(&self) -> bool {
        matches!(self, FitnessGoal::WeightLoss)
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Training experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl UserLevel {
    pub fn all() -> &'static [UserLevel] {
        &[UserLevel::Beginner, UserLevel::Intermediate, UserLevel::Advanced]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserLevel::Beginner => "beginner",
            UserLevel::Intermediate => "intermediate",
            UserLevel::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.as_str() == s)
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            UserLevel::Beginner => "level-beginner",
            UserLevel::Intermediate => "level-intermediate",
            UserLevel::Advanced => "level-advanced",
        }
    }

    /// Whether content tagged with `difficulty` is suitable at this level.
    ///
    /// Beginners only see beginner content, intermediates also see beginner
    /// content, advanced users see everything.
    pub fn includes(&self, difficulty: UserLevel) -> bool {
        difficulty <= *self
    }
}

impl std::fmt::Display for UserLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Goals and preferences captured during onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGoals {
    pub primary_goal: FitnessGoal,
    /// Free-form description of what the user wants to achieve
    pub target_description: String,
    /// Body weight in kilograms at the time the goal was set
    pub current_weight: Option<f32>,
    /// Desired body weight in kilograms
    pub target_weight: Option<f32>,
    /// Days of the week the user plans to train
    pub preferred_days: Vec<Weekday>,
    /// Preferred training time (HH:MM)
    pub preferred_time: String,
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            primary_goal: FitnessGoal::default(),
            target_description: String::new(),
            current_weight: None,
            target_weight: None,
            preferred_days: Vec::new(),
            preferred_time: "18:00".to_string(),
        }
    }
}

impl UserGoals {
    /// Number of planned workouts per week, 3 when no days were chosen.
    pub fn planned_workouts_per_week(&self) -> u32 {
        if self.preferred_days.is_empty() {
            3
        } else {
            self.preferred_days.len() as u32
        }
    }
}

/// A body weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    pub weight_kg: f32,
    pub recorded_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl WeightEntry {
    pub fn new(weight_kg: f32, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            weight_kg,
            recorded_at,
            notes: None,
        }
    }
}
