//! Profile data storage operations.
//!
//! Provides persistence for:
//! - User profiles
//! - Profile backups used for switching between users
//! - Body weight entries
//! - Achievement progress

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::goals::{Achievement, AchievementKind, UserGoals, UserLevel, WeightEntry};
use crate::storage::config::UserProfile;
use crate::storage::database::{parse_timestamp, parse_uuid, DatabaseError};

/// Summary row of a backed-up profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileBackup {
    pub id: Uuid,
    pub name: String,
    pub backup_date: DateTime<Utc>,
}

/// Profile store for persisting per-user records.
pub struct ProfileStore<'a> {
    conn: &'a Connection,
}

impl<'a> ProfileStore<'a> {
    /// Create a new profile store with the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    // ========== Profiles ==========

    /// Insert or update a profile.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), DatabaseError> {
        let goals_json = serde_json::to_string(&profile.goals)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO profiles (id, name, avatar, level, goals_json, current_program,
                 onboarding_completed, created_at, last_weight_update)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    avatar = excluded.avatar,
                    level = excluded.level,
                    goals_json = excluded.goals_json,
                    current_program = excluded.current_program,
                    onboarding_completed = excluded.onboarding_completed,
                    last_weight_update = excluded.last_weight_update",
                params![
                    profile.id.to_string(),
                    profile.name,
                    profile.avatar,
                    profile.level.as_str(),
                    goals_json,
                    profile.current_program,
                    profile.onboarding_completed,
                    profile.created_at.to_rfc3339(),
                    profile.last_weight_update.map(|t| t.to_rfc3339()),
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        tracing::debug!("Saved profile {}", profile.id);
        Ok(())
    }

    /// Load a profile by id.
    pub fn load_profile(&self, id: &Uuid) -> Result<Option<UserProfile>, DatabaseError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, avatar, level, goals_json, current_program,
                 onboarding_completed, created_at, last_weight_update
                 FROM profiles WHERE id = ?1",
                params![id.to_string()],
                |row| {
                    Ok(ProfileRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        avatar: row.get(2)?,
                        level: row.get(3)?,
                        goals_json: row.get(4)?,
                        current_program: row.get(5)?,
                        onboarding_completed: row.get(6)?,
                        created_at: row.get(7)?,
                        last_weight_update: row.get(8)?,
                    })
                },
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        row.map(ProfileRow::into_profile).transpose()
    }

    // ========== Backups ==========

    /// Save the profile and record it in the backup list.
    pub fn save_profile_backup(
        &self,
        profile: &UserProfile,
        backup_date: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        self.save_profile(profile)?;

        self.conn
            .execute(
                "INSERT INTO profile_backups (profile_id, name, backup_date)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(profile_id) DO UPDATE SET
                    name = excluded.name,
                    backup_date = excluded.backup_date",
                params![
                    profile.id.to_string(),
                    profile.name,
                    backup_date.to_rfc3339()
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        tracing::info!("Backed up profile {} ({})", profile.name, profile.id);
        Ok(())
    }

    /// Backed-up profiles, most recent first.
    pub fn list_backups(&self) -> Result<Vec<ProfileBackup>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT profile_id, name, backup_date FROM profile_backups
                 ORDER BY backup_date DESC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut backups = Vec::new();
        for row in rows {
            let (id, name, backup_date) =
                row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            backups.push(ProfileBackup {
                id: parse_uuid(&id)?,
                name,
                backup_date: parse_timestamp(&backup_date)?,
            });
        }

        Ok(backups)
    }

    // ========== Weight Entries ==========

    pub fn add_weight_entry(
        &self,
        profile_id: &Uuid,
        entry: &WeightEntry,
    ) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO weight_entries (id, profile_id, weight_kg, recorded_at, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    entry.id.to_string(),
                    profile_id.to_string(),
                    entry.weight_kg,
                    entry.recorded_at.to_rfc3339(),
                    entry.notes,
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Weight entries of a profile, oldest first.
    pub fn list_weight_entries(
        &self,
        profile_id: &Uuid,
    ) -> Result<Vec<WeightEntry>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, weight_kg, recorded_at, notes FROM weight_entries
                 WHERE profile_id = ?1 ORDER BY recorded_at ASC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![profile_id.to_string()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f32>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                ))
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, weight_kg, recorded_at, notes) =
                row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            entries.push(WeightEntry {
                id: parse_uuid(&id)?,
                weight_kg,
                recorded_at: parse_timestamp(&recorded_at)?,
                notes,
            });
        }

        Ok(entries)
    }

    // ========== Achievements ==========

    /// Replace the stored achievement progress of a profile.
    pub fn save_achievements(
        &self,
        profile_id: &Uuid,
        achievements: &[Achievement],
    ) -> Result<(), DatabaseError> {
        for achievement in achievements {
            self.conn
                .execute(
                    "INSERT INTO achievements
                        (profile_id, achievement_id, progress, target, unlocked_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(profile_id, achievement_id) DO UPDATE SET
                        progress = excluded.progress,
                        target = excluded.target,
                        unlocked_at = excluded.unlocked_at",
                    params![
                        profile_id.to_string(),
                        achievement.kind.id(),
                        achievement.progress,
                        achievement.target(),
                        achievement.unlocked_at.map(|t| t.to_rfc3339()),
                    ],
                )
                .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        }

        Ok(())
    }

    /// Stored achievements sorted by progress, highest first.
    ///
    /// Unknown achievement ids are ignored.
    pub fn load_achievements(&self, profile_id: &Uuid) -> Result<Vec<Achievement>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT achievement_id, progress, unlocked_at FROM achievements
                 WHERE profile_id = ?1 ORDER BY progress DESC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![profile_id.to_string()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f32>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut achievements = Vec::new();
        for row in rows {
            let (id, progress, unlocked_at) =
                row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            let Some(kind) = AchievementKind::parse(&id) else {
                tracing::warn!("Ignoring unknown achievement {}", id);
                continue;
            };
            achievements.push(Achievement {
                kind,
                progress,
                unlocked_at: unlocked_at.as_deref().map(parse_timestamp).transpose()?,
            });
        }

        Ok(achievements)
    }
}

/// Intermediate struct for reading profile rows from database.
struct ProfileRow {
    id: String,
    name: String,
    avatar: Option<String>,
    level: String,
    goals_json: String,
    current_program: Option<String>,
    onboarding_completed: bool,
    created_at: String,
    last_weight_update: Option<String>,
}

impl ProfileRow {
    fn into_profile(self) -> Result<UserProfile, DatabaseError> {
        let goals: UserGoals = serde_json::from_str(&self.goals_json).map_err(|e| {
            DatabaseError::DeserializationError(format!("Invalid goals JSON: {}", e))
        })?;

        let level = UserLevel::parse(&self.level).unwrap_or_else(|| {
            tracing::warn!("Unknown level '{}', using beginner", self.level);
            UserLevel::Beginner
        });

        Ok(UserProfile {
            id: parse_uuid(&self.id)?,
            name: self.name,
            avatar: self.avatar,
            level,
            goals,
            current_program: self.current_program,
            onboarding_completed: self.onboarding_completed,
            created_at: parse_timestamp(&self.created_at)?,
            last_weight_update: self
                .last_weight_update
                .as_deref()
                .map(parse_timestamp)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::FitnessGoal;
    use crate::storage::Database;
    use chrono::{Duration, Weekday};

    fn setup_db() -> Database {
        Database::open_in_memory().expect("Failed to create test database")
    }

    fn test_profile(name: &str) -> UserProfile {
        let mut profile = UserProfile::new(name);
        profile.level = UserLevel::Intermediate;
        profile.goals.primary_goal = FitnessGoal::MuscleGain;
        profile.goals.current_weight = Some(72.5);
        profile.goals.preferred_days = vec![Weekday::Mon, Weekday::Wed, Weekday::Fri];
        profile.onboarding_completed = true;
        profile
    }

    #[test]
    fn test_profile_save_and_load() {
        let db = setup_db();
        let store = ProfileStore::new(db.connection());
        let mut profile = test_profile("Alex");

        store.save_profile(&profile).unwrap();
        let loaded = store.load_profile(&profile.id).unwrap().unwrap();
        assert_eq!(loaded.name, "Alex");
        assert_eq!(loaded.level, UserLevel::Intermediate);
        assert_eq!(loaded.goals, profile.goals);
        assert!(loaded.onboarding_completed);

        profile.current_program = Some("push_pull_legs".to_string());
        store.save_profile(&profile).unwrap();
        let loaded = store.load_profile(&profile.id).unwrap().unwrap();
        assert_eq!(loaded.current_program.as_deref(), Some("push_pull_legs"));

        assert!(store.load_profile(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_backups_upsert_and_order() {
        let db = setup_db();
        let store = ProfileStore::new(db.connection());
        let now = Utc::now();

        let mut first = test_profile("First");
        let second = test_profile("Second");
        store.save_profile_backup(&first, now - Duration::days(2)).unwrap();
        store.save_profile_backup(&second, now - Duration::days(1)).unwrap();

        first.name = "First renamed".to_string();
        store.save_profile_backup(&first, now).unwrap();

        let backups = store.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert_eq!(backups[0].id, first.id);
        assert_eq!(backups[0].name, "First renamed");
        assert_eq!(backups[1].id, second.id);
    }

    #[test]
    fn test_weight_entries_oldest_first() {
        let db = setup_db();
        let store = ProfileStore::new(db.connection());
        let profile_id = Uuid::new_v4();
        let now = Utc::now();

        store
            .add_weight_entry(&profile_id, &WeightEntry::new(80.0, now))
            .unwrap();
        store
            .add_weight_entry(&profile_id, &WeightEntry::new(82.0, now - Duration::days(7)))
            .unwrap();

        let entries = store.list_weight_entries(&profile_id).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].weight_kg, 82.0);
        assert_eq!(entries[1].weight_kg, 80.0);
    }

    #[test]
    fn test_achievements_round_trip() {
        let db = setup_db();
        let store = ProfileStore::new(db.connection());
        let profile_id = Uuid::new_v4();

        let achievements = vec![
            Achievement {
                kind: AchievementKind::TotalWorkouts10,
                progress: 100.0,
                unlocked_at: Some(Utc::now()),
            },
            Achievement {
                kind: AchievementKind::PerfectWeek,
                progress: 0.0,
                unlocked_at: None,
            },
        ];
        store.save_achievements(&profile_id, &achievements).unwrap();
        store.save_achievements(&profile_id, &achievements).unwrap();

        let loaded = store.load_achievements(&profile_id).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].kind, AchievementKind::TotalWorkouts10);
        assert!(loaded[0].is_unlocked());
        assert!(!loaded[1].is_unlocked());
    }
}
