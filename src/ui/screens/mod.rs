//! UI screens for the application.

pub mod home;
pub mod log_workout;
pub mod onboarding;
pub mod profile;
pub mod programs;
pub mod stats;
pub mod week_summary;

pub use home::HomeScreen;
pub use log_workout::LogWorkoutScreen;
pub use onboarding::{OnboardingAction, OnboardingScreen};
pub use profile::{ProfileAction, ProfileScreen};
pub use programs::ProgramsScreen;
pub use stats::StatsScreen;
pub use week_summary::WeekSummaryScreen;

use crate::i18n;

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// First-run wizard
    Onboarding,
    #[default]
    Home,
    LogWorkout,
    Programs,
    Stats,
    WeekSummary,
    Profile,
}

impl Screen {
    /// Screens reachable from the navigation bar, in display order.
    pub fn navigation() -> &'static [Screen] {
        &[
            Screen::Home,
            Screen::LogWorkout,
            Screen::Programs,
            Screen::Stats,
            Screen::Profile,
        ]
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            Screen::Onboarding => "nav-onboarding",
            Screen::Home => "nav-home",
            Screen::LogWorkout => "nav-log-workout",
            Screen::Programs => "nav-programs",
            Screen::Stats => "nav-stats",
            Screen::WeekSummary => "nav-week-summary",
            Screen::Profile => "nav-profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Onboarding => "👋",
            Screen::Home => "🏠",
            Screen::LogWorkout => "➕",
            Screen::Programs => "📋",
            Screen::Stats => "📊",
            Screen::WeekSummary => "🗓",
            Screen::Profile => "👤",
        }
    }

    /// Icon and translated title for navigation buttons.
    pub fn nav_label(&self) -> String {
        format!("{} {}", self.icon(), i18n::t(self.title_key()))
    }
}

/// Weekday names in the current language.
pub(crate) fn weekday_name(day: chrono::Weekday) -> String {
    use chrono::Weekday::*;
    let key = match day {
        Mon => "weekday-mon",
        Tue => "weekday-tue",
        Wed => "weekday-wed",
        Thu => "weekday-thu",
        Fri => "weekday-fri",
        Sat => "weekday-sat",
        Sun => "weekday-sun",
    };
    i18n::t(key)
}

/// All weekdays, Monday first.
pub(crate) const WEEKDAYS: [chrono::Weekday; 7] = [
    chrono::Weekday::Mon,
    chrono::Weekday::Tue,
    chrono::Weekday::Wed,
    chrono::Weekday::Thu,
    chrono::Weekday::Fri,
    chrono::Weekday::Sat,
    chrono::Weekday::Sun,
];
