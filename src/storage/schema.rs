//! Database schema definitions for FitTrack.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Key/value application settings (language, theme, current user)
CREATE TABLE IF NOT EXISTS app_settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Profiles table
CREATE TABLE IF NOT EXISTS profiles (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    avatar TEXT,
    level TEXT NOT NULL,
    goals_json TEXT NOT NULL,
    current_program TEXT,
    onboarding_completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    last_weight_update TEXT
);

-- Profiles that can be switched back to
CREATE TABLE IF NOT EXISTS profile_backups (
    profile_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    backup_date TEXT NOT NULL
);

-- Logged workouts
CREATE TABLE IF NOT EXISTS workouts (
    id TEXT PRIMARY KEY,
    profile_id TEXT NOT NULL,
    performed_at TEXT NOT NULL,
    workout_type TEXT NOT NULL,
    exercises_json TEXT NOT NULL,
    duration_minutes INTEGER NOT NULL DEFAULT 0,
    feeling INTEGER NOT NULL DEFAULT 3,
    notes TEXT,
    completed INTEGER NOT NULL DEFAULT 1,
    program_id TEXT,
    day_number INTEGER
);

CREATE INDEX IF NOT EXISTS idx_workouts_profile ON workouts(profile_id, performed_at);

-- Planned weekly training slots
CREATE TABLE IF NOT EXISTS schedules (
    id TEXT PRIMARY KEY,
    profile_id TEXT NOT NULL,
    day_of_week INTEGER NOT NULL,
    time TEXT NOT NULL,
    program_id TEXT,
    enabled INTEGER NOT NULL DEFAULT 1
);

-- Weekly rollups
CREATE TABLE IF NOT EXISTS weekly_stats (
    profile_id TEXT NOT NULL,
    week_start TEXT NOT NULL,
    total_workouts INTEGER NOT NULL,
    completed_workouts INTEGER NOT NULL,
    average_feeling REAL NOT NULL,
    total_duration_minutes INTEGER NOT NULL,
    improvement_percentage REAL NOT NULL,
    PRIMARY KEY (profile_id, week_start)
);

-- Body weight log
CREATE TABLE IF NOT EXISTS weight_entries (
    id TEXT PRIMARY KEY,
    profile_id TEXT NOT NULL,
    weight_kg REAL NOT NULL,
    recorded_at TEXT NOT NULL,
    notes TEXT
);

CREATE INDEX IF NOT EXISTS idx_weight_entries_profile ON weight_entries(profile_id, recorded_at);

-- Achievement progress
CREATE TABLE IF NOT EXISTS achievements (
    profile_id TEXT NOT NULL,
    achievement_id TEXT NOT NULL,
    progress REAL NOT NULL,
    target REAL NOT NULL,
    unlocked_at TEXT,
    PRIMARY KEY (profile_id, achievement_id)
);
"#;

/// SQL for the schema version table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Settings keys stored in `app_settings`.
pub mod settings_keys {
    pub const LANGUAGE: &str = "language";
    pub const THEME: &str = "theme";
    pub const CURRENT_USER_ID: &str = "current_user_id";
}
