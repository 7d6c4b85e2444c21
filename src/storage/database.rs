//! Database operations using rusqlite.
//!
//! Settings, workouts, schedules and weekly statistics. Profile-level records
//! live in [`crate::storage::profile_store`].

use crate::storage::config::ThemePreference;
use crate::storage::schema::{settings_keys, CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use crate::workouts::types::{
    Feeling, PerformedExercise, WeeklyStats, Workout, WorkoutSchedule, WorkoutType,
};
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        let current_version = self.get_schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, DatabaseError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), DatabaseError> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Begin a transaction.
    pub fn transaction(&mut self) -> Result<rusqlite::Transaction<'_>, DatabaseError> {
        self.conn
            .transaction()
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))
    }

    // ========== Settings ==========

    /// Read a raw setting.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        self.conn
            .query_row(
                "SELECT value FROM app_settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }

    /// Insert or replace a raw setting.
    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO app_settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(())
    }

    pub fn delete_setting(&self, key: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM app_settings WHERE key = ?1", params![key])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(())
    }

    /// Stored UI language id, `None` if never chosen.
    pub fn stored_language(&self) -> Result<Option<String>, DatabaseError> {
        self.get_setting(settings_keys::LANGUAGE)
    }

    pub fn set_language(&self, language: &str) -> Result<(), DatabaseError> {
        self.set_setting(settings_keys::LANGUAGE, language)
    }

    /// Stored theme preference, `None` if never chosen or unreadable.
    pub fn theme(&self) -> Result<Option<ThemePreference>, DatabaseError> {
        Ok(self
            .get_setting(settings_keys::THEME)?
            .and_then(|s| ThemePreference::parse(&s)))
    }

    pub fn set_theme(&self, theme: ThemePreference) -> Result<(), DatabaseError> {
        self.set_setting(settings_keys::THEME, theme.as_str())
    }

    /// Id of the active profile.
    pub fn current_user_id(&self) -> Result<Option<Uuid>, DatabaseError> {
        match self.get_setting(settings_keys::CURRENT_USER_ID)? {
            Some(raw) => Uuid::parse_str(&raw)
                .map(Some)
                .map_err(|e| DatabaseError::DeserializationError(format!("Invalid UUID: {}", e))),
            None => Ok(None),
        }
    }

    pub fn set_current_user_id(&self, id: &Uuid) -> Result<(), DatabaseError> {
        self.set_setting(settings_keys::CURRENT_USER_ID, &id.to_string())
    }

    pub fn clear_current_user_id(&self) -> Result<(), DatabaseError> {
        self.delete_setting(settings_keys::CURRENT_USER_ID)
    }

    // ========== Workout CRUD Operations ==========

    /// Insert or update a workout.
    pub fn save_workout(&self, profile_id: &Uuid, workout: &Workout) -> Result<(), DatabaseError> {
        let exercises_json = serde_json::to_string(&workout.exercises)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO workouts (id, profile_id, performed_at, workout_type, exercises_json,
                 duration_minutes, feeling, notes, completed, program_id, day_number)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                 ON CONFLICT(id) DO UPDATE SET
                    performed_at = excluded.performed_at,
                    workout_type = excluded.workout_type,
                    exercises_json = excluded.exercises_json,
                    duration_minutes = excluded.duration_minutes,
                    feeling = excluded.feeling,
                    notes = excluded.notes,
                    completed = excluded.completed,
                    program_id = excluded.program_id,
                    day_number = excluded.day_number",
                params![
                    workout.id.to_string(),
                    profile_id.to_string(),
                    workout.performed_at.to_rfc3339(),
                    workout.workout_type.as_str(),
                    exercises_json,
                    workout.duration_minutes,
                    workout.feeling.value(),
                    workout.notes,
                    workout.completed,
                    workout.program_id,
                    workout.day_number,
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        tracing::debug!("Saved workout {}", workout.id);
        Ok(())
    }

    /// Get a workout by ID.
    pub fn get_workout(&self, id: &Uuid) -> Result<Option<Workout>, DatabaseError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, performed_at, workout_type, exercises_json, duration_minutes,
                 feeling, notes, completed, program_id, day_number
                 FROM workouts WHERE id = ?1",
                params![id.to_string()],
                WorkoutRow::from_row,
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        row.map(WorkoutRow::into_workout).transpose()
    }

    /// All workouts of a profile, newest first.
    ///
    /// Rows that fail to decode are logged and skipped.
    pub fn list_workouts(&self, profile_id: &Uuid) -> Result<Vec<Workout>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, performed_at, workout_type, exercises_json, duration_minutes,
                 feeling, notes, completed, program_id, day_number
                 FROM workouts WHERE profile_id = ?1 ORDER BY performed_at DESC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![profile_id.to_string()], WorkoutRow::from_row)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut workouts = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            match row.into_workout() {
                Ok(workout) => workouts.push(workout),
                Err(e) => tracing::warn!("Skipping unreadable workout: {}", e),
            }
        }

        Ok(workouts)
    }

    /// Delete a workout by ID.
    pub fn delete_workout(&self, id: &Uuid) -> Result<(), DatabaseError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM workouts WHERE id = ?1", params![id.to_string()])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if rows_affected == 0 {
            return Err(DatabaseError::NotFound(format!("Workout {}", id)));
        }

        Ok(())
    }

    // ========== Schedule CRUD Operations ==========

    /// Insert or update a schedule slot.
    pub fn save_schedule(
        &self,
        profile_id: &Uuid,
        schedule: &WorkoutSchedule,
    ) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO schedules (id, profile_id, day_of_week, time, program_id, enabled)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(id) DO UPDATE SET
                    day_of_week = excluded.day_of_week,
                    time = excluded.time,
                    program_id = excluded.program_id,
                    enabled = excluded.enabled",
                params![
                    schedule.id.to_string(),
                    profile_id.to_string(),
                    schedule.day_of_week.num_days_from_monday(),
                    schedule.time,
                    schedule.program_id,
                    schedule.enabled,
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Schedules of a profile ordered by weekday and time.
    pub fn list_schedules(&self, profile_id: &Uuid) -> Result<Vec<WorkoutSchedule>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, day_of_week, time, program_id, enabled FROM schedules
                 WHERE profile_id = ?1 ORDER BY day_of_week, time",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![profile_id.to_string()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, u8>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, bool>(4)?,
                ))
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut schedules = Vec::new();
        for row in rows {
            let (id, day, time, program_id, enabled) =
                row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            schedules.push(WorkoutSchedule {
                id: parse_uuid(&id)?,
                day_of_week: weekday_from_index(day)?,
                time,
                program_id,
                enabled,
            });
        }

        Ok(schedules)
    }

    pub fn delete_schedule(&self, id: &Uuid) -> Result<(), DatabaseError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM schedules WHERE id = ?1", params![id.to_string()])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if rows_affected == 0 {
            return Err(DatabaseError::NotFound(format!("Schedule {}", id)));
        }

        Ok(())
    }

    // ========== Weekly Stats ==========

    /// Insert or replace the stats for one week.
    pub fn save_weekly_stats(
        &self,
        profile_id: &Uuid,
        stats: &WeeklyStats,
    ) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO weekly_stats (profile_id, week_start, total_workouts,
                 completed_workouts, average_feeling, total_duration_minutes,
                 improvement_percentage)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(profile_id, week_start) DO UPDATE SET
                    total_workouts = excluded.total_workouts,
                    completed_workouts = excluded.completed_workouts,
                    average_feeling = excluded.average_feeling,
                    total_duration_minutes = excluded.total_duration_minutes,
                    improvement_percentage = excluded.improvement_percentage",
                params![
                    profile_id.to_string(),
                    stats.week_start.to_string(),
                    stats.total_workouts,
                    stats.completed_workouts,
                    stats.average_feeling,
                    stats.total_duration_minutes,
                    stats.improvement_percentage,
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Stored weekly stats, most recent week first.
    pub fn list_weekly_stats(&self, profile_id: &Uuid) -> Result<Vec<WeeklyStats>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT week_start, total_workouts, completed_workouts, average_feeling,
                 total_duration_minutes, improvement_percentage
                 FROM weekly_stats WHERE profile_id = ?1 ORDER BY week_start DESC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![profile_id.to_string()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, u32>(1)?,
                    row.get::<_, u32>(2)?,
                    row.get::<_, f32>(3)?,
                    row.get::<_, u32>(4)?,
                    row.get::<_, f32>(5)?,
                ))
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut stats = Vec::new();
        for row in rows {
            let (week_start, total, completed, feeling, duration, improvement) =
                row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            let week_start = NaiveDate::parse_from_str(&week_start, "%Y-%m-%d").map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid week start: {}", e))
            })?;
            stats.push(WeeklyStats {
                week_start,
                total_workouts: total,
                completed_workouts: completed,
                average_feeling: feeling,
                total_duration_minutes: duration,
                improvement_percentage: improvement,
            });
        }

        Ok(stats)
    }

    /// Remove every record belonging to a profile except the profile itself.
    pub fn clear_profile_data(&mut self, profile_id: &Uuid) -> Result<(), DatabaseError> {
        let id = profile_id.to_string();
        let tx = self.transaction()?;
        for table in [
            "workouts",
            "schedules",
            "weekly_stats",
            "weight_entries",
            "achievements",
        ] {
            tx.execute(
                &format!("DELETE FROM {} WHERE profile_id = ?1", table),
                params![id],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        }
        tx.commit()
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tracing::info!("Cleared data for profile {}", profile_id);
        Ok(())
    }
}

/// Intermediate struct for reading workout rows from database.
struct WorkoutRow {
    id: String,
    performed_at: String,
    workout_type: String,
    exercises_json: String,
    duration_minutes: u32,
    feeling: u8,
    notes: Option<String>,
    completed: bool,
    program_id: Option<String>,
    day_number: Option<u8>,
}

impl WorkoutRow {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            performed_at: row.get(1)?,
            workout_type: row.get(2)?,
            exercises_json: row.get(3)?,
            duration_minutes: row.get(4)?,
            feeling: row.get(5)?,
            notes: row.get(6)?,
            completed: row.get(7)?,
            program_id: row.get(8)?,
            day_number: row.get(9)?,
        })
    }

    fn into_workout(self) -> Result<Workout, DatabaseError> {
        let exercises: Vec<PerformedExercise> = serde_json::from_str(&self.exercises_json)
            .map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid exercises JSON: {}", e))
            })?;

        let workout_type = WorkoutType::parse(&self.workout_type).ok_or_else(|| {
            DatabaseError::DeserializationError(format!(
                "Unknown workout type: {}",
                self.workout_type
            ))
        })?;

        let feeling = Feeling::new(self.feeling)
            .map_err(|e| DatabaseError::DeserializationError(e.to_string()))?;

        Ok(Workout {
            id: parse_uuid(&self.id)?,
            performed_at: parse_timestamp(&self.performed_at)?,
            workout_type,
            exercises,
            duration_minutes: self.duration_minutes,
            feeling,
            notes: self.notes,
            completed: self.completed,
            program_id: self.program_id,
            day_number: self.day_number,
        })
    }
}

pub(crate) fn parse_uuid(raw: &str) -> Result<Uuid, DatabaseError> {
    Uuid::parse_str(raw)
        .map_err(|e| DatabaseError::DeserializationError(format!("Invalid UUID: {}", e)))
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::DeserializationError(format!("Invalid date: {}", e)))
}

fn weekday_from_index(index: u8) -> Result<Weekday, DatabaseError> {
    match index {
        0 => Ok(Weekday::Mon),
        1 => Ok(Weekday::Tue),
        2 => Ok(Weekday::Wed),
        3 => Ok(Weekday::Thu),
        4 => Ok(Weekday::Fri),
        5 => Ok(Weekday::Sat),
        6 => Ok(Weekday::Sun),
        other => Err(DatabaseError::DeserializationError(format!(
            "Invalid weekday: {}",
            other
        ))),
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::types::local_noon;

    fn workout_on(date: NaiveDate) -> Workout {
        let mut workout = Workout::new(local_noon(date), WorkoutType::Strength);
        workout.exercises = vec![PerformedExercise::new("squat", "Squat").with_load(80.0, 5, 5)];
        workout.duration_minutes = 45;
        workout
    }

    #[test]
    fn test_create_in_memory_database() {
        let db = Database::open_in_memory().expect("Failed to create database");
        let version = db.get_schema_version().expect("Failed to get version");
        assert_eq!(version, CURRENT_VERSION);
    }

    #[test]
    fn test_tables_created() {
        let db = Database::open_in_memory().expect("Failed to create database");

        let tables: Vec<String> = db
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        for table in [
            "app_settings",
            "profiles",
            "profile_backups",
            "workouts",
            "schedules",
            "weekly_stats",
            "weight_entries",
            "achievements",
        ] {
            assert!(tables.contains(&table.to_string()), "missing {}", table);
        }
    }

    #[test]
    fn test_settings_defaults_and_updates() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.stored_language().unwrap(), None);
        assert_eq!(db.theme().unwrap(), None);
        assert_eq!(db.current_user_id().unwrap(), None);

        db.set_language("en").unwrap();
        db.set_theme(ThemePreference::Light).unwrap();
        let user = Uuid::new_v4();
        db.set_current_user_id(&user).unwrap();

        assert_eq!(db.stored_language().unwrap().as_deref(), Some("en"));
        assert_eq!(db.theme().unwrap(), Some(ThemePreference::Light));

        db.set_setting(settings_keys::THEME, "sepia").unwrap();
        assert_eq!(db.theme().unwrap(), None);
        assert_eq!(db.current_user_id().unwrap(), Some(user));

        db.clear_current_user_id().unwrap();
        assert_eq!(db.current_user_id().unwrap(), None);
    }

    #[test]
    fn test_workout_upsert_and_list() {
        let db = Database::open_in_memory().unwrap();
        let profile = Uuid::new_v4();

        let older = workout_on(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        let mut newer = workout_on(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
        db.save_workout(&profile, &older).unwrap();
        db.save_workout(&profile, &newer).unwrap();

        newer.notes = Some("felt strong".to_string());
        newer.feeling = Feeling::new(5).unwrap();
        db.save_workout(&profile, &newer).unwrap();

        let workouts = db.list_workouts(&profile).unwrap();
        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[0].id, newer.id);
        assert_eq!(workouts[0].notes.as_deref(), Some("felt strong"));
        assert_eq!(workouts[0].feeling.value(), 5);
        assert_eq!(workouts[1], older);

        let other_profile = Uuid::new_v4();
        assert!(db.list_workouts(&other_profile).unwrap().is_empty());
    }

    #[test]
    fn test_get_and_delete_workout() {
        let db = Database::open_in_memory().unwrap();
        let profile = Uuid::new_v4();
        let workout = workout_on(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        db.save_workout(&profile, &workout).unwrap();

        assert_eq!(db.get_workout(&workout.id).unwrap(), Some(workout.clone()));
        db.delete_workout(&workout.id).unwrap();
        assert_eq!(db.get_workout(&workout.id).unwrap(), None);
        assert!(matches!(
            db.delete_workout(&workout.id),
            Err(DatabaseError::NotFound(_))
        ));
    }

    #[test]
    fn test_corrupt_workout_row_is_skipped() {
        let db = Database::open_in_memory().unwrap();
        let profile = Uuid::new_v4();
        db.save_workout(&profile, &workout_on(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()))
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO workouts (id, profile_id, performed_at, workout_type, exercises_json)
                 VALUES (?1, ?2, ?3, 'strength', 'not json')",
                params![Uuid::new_v4().to_string(), profile.to_string(), Utc::now().to_rfc3339()],
            )
            .unwrap();

        assert_eq!(db.list_workouts(&profile).unwrap().len(), 1);
    }

    #[test]
    fn test_schedule_crud() {
        let db = Database::open_in_memory().unwrap();
        let profile = Uuid::new_v4();

        let mut friday = WorkoutSchedule::new(Weekday::Fri, "18:30");
        let monday = WorkoutSchedule::new(Weekday::Mon, "07:00");
        db.save_schedule(&profile, &friday).unwrap();
        db.save_schedule(&profile, &monday).unwrap();

        friday.enabled = false;
        db.save_schedule(&profile, &friday).unwrap();

        let schedules = db.list_schedules(&profile).unwrap();
        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].day_of_week, Weekday::Mon);
        assert!(!schedules[1].enabled);

        db.delete_schedule(&monday.id).unwrap();
        assert_eq!(db.list_schedules(&profile).unwrap().len(), 1);
    }

    #[test]
    fn test_weekly_stats_upsert_by_week() {
        let db = Database::open_in_memory().unwrap();
        let profile = Uuid::new_v4();
        let week = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();

        let mut stats = WeeklyStats {
            week_start: week,
            total_workouts: 2,
            completed_workouts: 2,
            average_feeling: 4.0,
            total_duration_minutes: 90,
            improvement_percentage: 0.0,
        };
        db.save_weekly_stats(&profile, &stats).unwrap();

        stats.completed_workouts = 3;
        db.save_weekly_stats(&profile, &stats).unwrap();

        let stored = db.list_weekly_stats(&profile).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].completed_workouts, 3);
        assert_eq!(stored[0].week_start, week);
    }

    #[test]
    fn test_clear_profile_data_only_touches_that_profile() {
        let mut db = Database::open_in_memory().unwrap();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();

        db.save_workout(&alice, &workout_on(date)).unwrap();
        db.save_workout(&bob, &workout_on(date)).unwrap();
        db.save_schedule(&alice, &WorkoutSchedule::new(Weekday::Tue, "19:00"))
            .unwrap();

        db.clear_profile_data(&alice).unwrap();

        assert!(db.list_workouts(&alice).unwrap().is_empty());
        assert!(db.list_schedules(&alice).unwrap().is_empty());
        assert_eq!(db.list_workouts(&bob).unwrap().len(), 1);
    }

    #[test]
    fn test_open_on_disk_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("fittrack.db");
        let profile = Uuid::new_v4();
        let workout = workout_on(NaiveDate::from_ymd_opt(2024, 5, 5).unwrap());

        {
            let db = Database::open(&path).unwrap();
            db.save_workout(&profile, &workout).unwrap();
        }

        let reopened = Database::open(&path).unwrap();
        assert_eq!(reopened.list_workouts(&profile).unwrap(), vec![workout]);
    }
}
