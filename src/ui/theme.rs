//! UI theme definitions.

use egui::{Color32, Visuals};

use crate::storage::config::ThemePreference;
use crate::workouts::types::WorkoutType;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Resolve a stored preference, following the OS for `System`.
    pub fn from_preference(preference: ThemePreference) -> Self {
        if preference.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                card: DarkTheme::CARD_BG,
                text: DarkTheme::TEXT_PRIMARY,
                text_secondary: DarkTheme::TEXT_SECONDARY,
                primary: DarkTheme::PRIMARY,
                secondary: DarkTheme::SECONDARY,
                success: DarkTheme::SUCCESS,
                warning: DarkTheme::WARNING,
                error: DarkTheme::ERROR,
                border: DarkTheme::BORDER,
            },
            Theme::Light => Palette {
                card: LightTheme::CARD_BG,
                text: LightTheme::TEXT_PRIMARY,
                text_secondary: LightTheme::TEXT_SECONDARY,
                primary: LightTheme::PRIMARY,
                secondary: LightTheme::SECONDARY,
                success: LightTheme::SUCCESS,
                warning: LightTheme::WARNING,
                error: LightTheme::ERROR,
                border: LightTheme::BORDER,
            },
        }
    }
}

/// Colors screens draw with, independent of the active theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub card: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    pub primary: Color32,
    pub secondary: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub border: Color32,
}

impl Palette {
    /// Traffic-light color for a completion percentage.
    pub fn progress_color(&self, percentage: u32) -> Color32 {
        match percentage {
            p if p >= 80 => self.success,
            p if p >= 50 => self.warning,
            _ => self.error,
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 18);
    pub const PANEL_BG: Color32 = Color32::from_rgb(30, 30, 30);
    pub const CARD_BG: Color32 = Color32::from_rgb(37, 37, 37);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(176, 176, 176);
    /// Orange
    pub const PRIMARY: Color32 = Color32::from_rgb(255, 107, 53);
    /// Blue
    pub const SECONDARY: Color32 = Color32::from_rgb(30, 136, 229);
    pub const SUCCESS: Color32 = Color32::from_rgb(76, 175, 80);
    pub const WARNING: Color32 = Color32::from_rgb(255, 152, 0);
    pub const ERROR: Color32 = Color32::from_rgb(244, 67, 54);
    pub const BORDER: Color32 = Color32::from_rgb(51, 51, 51);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(248, 248, 250);
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    pub const CARD_BG: Color32 = Color32::from_rgb(242, 242, 245);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(28, 28, 30);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(99, 99, 102);
    pub const PRIMARY: Color32 = Color32::from_rgb(230, 86, 30);
    pub const SECONDARY: Color32 = Color32::from_rgb(21, 101, 192);
    pub const SUCCESS: Color32 = Color32::from_rgb(46, 125, 50);
    pub const WARNING: Color32 = Color32::from_rgb(230, 126, 0);
    pub const ERROR: Color32 = Color32::from_rgb(211, 47, 47);
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

/// Accent color of a workout type.
pub fn workout_type_color(workout_type: WorkoutType) -> Color32 {
    match workout_type {
        WorkoutType::Strength => DarkTheme::PRIMARY,
        WorkoutType::Cardio => DarkTheme::SECONDARY,
        WorkoutType::Functional => Color32::from_rgb(156, 39, 176),
        WorkoutType::Stretching => DarkTheme::SUCCESS,
    }
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::BACKGROUND;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::PANEL_BG;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 52, 52);
    visuals.widgets.active.bg_fill = DarkTheme::PRIMARY;

    visuals.selection.bg_fill = DarkTheme::PRIMARY.linear_multiply(0.5);
    visuals.selection.stroke.color = DarkTheme::PRIMARY;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::BACKGROUND;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::PANEL_BG;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(228, 228, 232);
    visuals.widgets.active.bg_fill = LightTheme::PRIMARY;

    visuals.selection.bg_fill = LightTheme::PRIMARY.linear_multiply(0.3);
    visuals.selection.stroke.color = LightTheme::PRIMARY;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_preference() {
        assert_eq!(Theme::from_preference(ThemePreference::Dark), Theme::Dark);
        assert_eq!(Theme::from_preference(ThemePreference::Light), Theme::Light);
    }

    #[test]
    fn test_progress_color() {
        let palette = Theme::Dark.palette();
        assert_eq!(palette.progress_color(100), palette.success);
        assert_eq!(palette.progress_color(60), palette.warning);
        assert_eq!(palette.progress_color(10), palette.error);
    }
}
