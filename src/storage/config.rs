//! User profile and application configuration.

use crate::goals::{UserGoals, UserLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
    /// Follow the operating system
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
            ThemePreference::System => "system",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }

    /// Whether the dark palette should be used.
    pub fn is_dark(&self) -> bool {
        match self {
            ThemePreference::Dark => true,
            ThemePreference::Light => false,
            ThemePreference::System => !matches!(dark_light::detect(), dark_light::Mode::Light),
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreference::Dark => write!(f, "Dark"),
            ThemePreference::Light => write!(f, "Light"),
            ThemePreference::System => write!(f, "System"),
        }
    }
}

/// The local user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Avatar emoji or initials
    pub avatar: Option<String>,
    /// Training experience
    pub level: UserLevel,
    /// Goals and schedule preferences
    pub goals: UserGoals,
    /// Id of the selected program
    pub current_program: Option<String>,
    /// Whether onboarding has been finished
    pub onboarding_completed: bool,
    /// Profile creation timestamp
    pub created_at: DateTime<Utc>,
    /// When the body weight was last recorded
    pub last_weight_update: Option<DateTime<Utc>>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            avatar: None,
            level: UserLevel::default(),
            goals: UserGoals::default(),
            current_program: None,
            onboarding_completed: false,
            created_at: Utc::now(),
            last_weight_update: None,
        }
    }
}

impl UserProfile {
    /// Create a new profile with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Avatar to display, falling back to the first letter of the name.
    pub fn avatar_label(&self) -> String {
        match &self.avatar {
            Some(avatar) if !avatar.trim().is_empty() => avatar.clone(),
            _ => self
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_else(|| "?".to_string()),
        }
    }

    /// Weight recorded at onboarding, the baseline for weight progress.
    pub fn start_weight(&self) -> Option<f32> {
        self.goals.current_weight
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Database file name inside the data directory
    pub database_file: String,
    /// UI settings
    pub ui: UiSettings,
    /// History and chart windows
    pub history: HistorySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            database_file: "fittrack.db".to_string(),
            ui: UiSettings::default(),
            history: HistorySettings::default(),
        }
    }
}

impl AppConfig {
    /// Full path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }
}

/// Smallest window the screens lay out in.
pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 560.0];

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Theme used before a profile stores its own
    pub theme: ThemePreference,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Dark,
            window_width: 1100.0,
            window_height: 760.0,
            font_scale: 1.0,
        }
    }
}

impl UiSettings {
    /// Initial window size, raised to [`MIN_WINDOW_SIZE`] where smaller.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.window_width.max(MIN_WINDOW_SIZE[0]),
            self.window_height.max(MIN_WINDOW_SIZE[1]),
        ]
    }

    pub fn zoom_factor(&self) -> f32 {
        if self.font_scale.is_finite() {
            self.font_scale.clamp(0.5, 3.0)
        } else {
            1.0
        }
    }
}

/// History windows used by statistics and charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Weeks of weekly statistics to keep up to date
    pub weekly_stats_weeks: u32,
    /// Days shown in the frequency chart
    pub frequency_days: u32,
    /// Days shown in the feeling chart
    pub feeling_chart_days: u32,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            weekly_stats_weeks: 8,
            frequency_days: 30,
            feeling_chart_days: 30,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fittrack", "FitTrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "fittrack", "FitTrack")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| get_data_dir().join("config.toml"))
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load configuration from `path`, falling back to defaults when it is missing.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::debug!("Saved configuration to {}", path.display());
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
