//! Application session state.
//!
//! Holds the active profile and everything loaded for it, and keeps the
//! database in step with every change made through the UI.

use chrono::{DateTime, Local, NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::goals::{calculate_achievements, recovery_tips, streak_days, Achievement, WeightEntry};
use crate::i18n::{self, Language};
use crate::metrics::analytics::recent_weekly_stats;
use crate::onboarding::CompletedOnboarding;
use crate::programs::WorkoutProgram;
use crate::storage::config::{AppConfig, HistorySettings, ThemePreference, UserProfile};
use crate::storage::database::{Database, DatabaseError};
use crate::storage::profile_store::{ProfileBackup, ProfileStore};
use crate::workouts::types::{WeeklyStats, Workout, WorkoutSchedule};

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("No active profile")]
    NoActiveProfile,

    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Workout not found: {0}")]
    WorkoutNotFound(Uuid),
}

fn local_date(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&Local).date_naive()
}

/// The active profile and its data, backed by the database.
pub struct FitnessSession {
    db: Database,
    history: HistorySettings,
    profile: Option<UserProfile>,
    /// Newest first
    workouts: Vec<Workout>,
    schedules: Vec<WorkoutSchedule>,
    /// Newest first
    weekly_stats: Vec<WeeklyStats>,
    /// Oldest first
    weight_entries: Vec<WeightEntry>,
    achievements: Vec<Achievement>,
    language: Language,
    theme: ThemePreference,
}

impl FitnessSession {
    /// Load settings and the current profile, if any.
    ///
    /// Without stored settings the language follows the system locale and the
    /// theme comes from `config`.
    pub fn load(db: Database, config: &AppConfig) -> Result<Self, SessionError> {
        let language = match db.stored_language()? {
            Some(id) => Language::from_id(&id).unwrap_or_default(),
            None => i18n::detect_system_locale(),
        };
        i18n::set_language(language);

        let theme = db.theme()?.unwrap_or(config.ui.theme);

        let mut session = Self {
            db,
            history: config.history.clone(),
            profile: None,
            workouts: Vec::new(),
            schedules: Vec::new(),
            weekly_stats: Vec::new(),
            weight_entries: Vec::new(),
            achievements: Vec::new(),
            language,
            theme,
        };

        if let Some(id) = session.db.current_user_id()? {
            match session.store().load_profile(&id)? {
                Some(profile) => {
                    tracing::info!("Loaded profile {} ({})", profile.name, profile.id);
                    session.activate(profile)?;
                }
                None => {
                    tracing::warn!("Current user {} has no profile, clearing", id);
                    session.db.clear_current_user_id()?;
                }
            }
        }

        Ok(session)
    }

    fn store(&self) -> ProfileStore<'_> {
        ProfileStore::new(self.db.connection())
    }

    fn active_id(&self) -> Result<Uuid, SessionError> {
        self.profile
            .as_ref()
            .map(|p| p.id)
            .ok_or(SessionError::NoActiveProfile)
    }

    /// Make `profile` current and load its records.
    fn activate(&mut self, profile: UserProfile) -> Result<(), SessionError> {
        let id = profile.id;
        self.db.set_current_user_id(&id)?;
        self.workouts = self.db.list_workouts(&id)?;
        self.schedules = self.db.list_schedules(&id)?;
        self.weekly_stats = self.db.list_weekly_stats(&id)?;
        self.weight_entries = self.store().list_weight_entries(&id)?;
        self.achievements = self.store().load_achievements(&id)?;
        self.profile = Some(profile);
        Ok(())
    }

    fn deactivate(&mut self) {
        self.profile = None;
        self.workouts.clear();
        self.schedules.clear();
        self.weekly_stats.clear();
        self.weight_entries.clear();
        self.achievements.clear();
    }

    // ========== Accessors ==========

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// True when there is no profile with finished onboarding.
    pub fn needs_onboarding(&self) -> bool {
        self.profile
            .as_ref()
            .map_or(true, |p| !p.onboarding_completed)
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn schedules(&self) -> &[WorkoutSchedule] {
        &self.schedules
    }

    pub fn weekly_stats(&self) -> &[WeeklyStats] {
        &self.weekly_stats
    }

    pub fn weight_entries(&self) -> &[WeightEntry] {
        &self.weight_entries
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn history(&self) -> &HistorySettings {
        &self.history
    }

    pub fn streak(&self, today: NaiveDate) -> u32 {
        streak_days(&self.workouts, today)
    }

    /// Recovery advice for the goal of the active profile.
    pub fn recovery_tips(&self) -> Vec<&'static str> {
        self.profile
            .as_ref()
            .map(|p| recovery_tips(p.goals.primary_goal))
            .unwrap_or_default()
    }

    /// Day number of the latest logged session of a program.
    pub fn last_program_day(&self, program_id: &str) -> Option<u8> {
        self.workouts
            .iter()
            .filter(|w| w.program_id.as_deref() == Some(program_id))
            .max_by_key(|w| w.performed_at)
            .and_then(|w| w.day_number)
    }

    // ========== Profile ==========

    /// Store the profile created by the onboarding wizard and make it current.
    pub fn complete_onboarding(
        &mut self,
        completed: CompletedOnboarding,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let CompletedOnboarding {
            profile,
            initial_weight,
            language,
        } = completed;

        self.set_language(language)?;
        self.store().save_profile(&profile)?;
        self.store().add_weight_entry(&profile.id, &initial_weight)?;
        tracing::info!("Created profile {} ({})", profile.name, profile.id);

        self.activate(profile)?;
        self.refresh_stats(local_date(now))?;
        self.refresh_achievements(now)?;
        Ok(())
    }

    pub fn update_profile(&mut self, profile: UserProfile) -> Result<(), SessionError> {
        if self.active_id()? != profile.id {
            return Err(SessionError::ProfileNotFound(profile.id));
        }
        self.store().save_profile(&profile)?;
        self.profile = Some(profile);
        Ok(())
    }

    /// Make `program` the current program, or clear it with `None`.
    pub fn select_program(&mut self, program: Option<&WorkoutProgram>) -> Result<(), SessionError> {
        let mut profile = self.profile.clone().ok_or(SessionError::NoActiveProfile)?;
        profile.current_program = program.map(|p| p.id.clone());
        tracing::info!("Selected program {:?}", profile.current_program);
        self.update_profile(profile)
    }

    // ========== Workouts ==========

    pub fn add_workout(
        &mut self,
        workout: Workout,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let id = self.active_id()?;
        self.db.save_workout(&id, &workout)?;
        tracing::info!("Logged {} workout {}", workout.workout_type.as_str(), workout.id);

        self.workouts.push(workout);
        self.workouts
            .sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
        self.recalculate(now)
    }

    pub fn update_workout(
        &mut self,
        workout: Workout,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let id = self.active_id()?;
        let slot = self
            .workouts
            .iter_mut()
            .find(|w| w.id == workout.id)
            .ok_or(SessionError::WorkoutNotFound(workout.id))?;

        self.db.save_workout(&id, &workout)?;
        *slot = workout;
        self.workouts
            .sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
        self.recalculate(now)
    }

    pub fn delete_workout(
        &mut self,
        workout_id: &Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.active_id()?;
        let pos = self
            .workouts
            .iter()
            .position(|w| w.id == *workout_id)
            .ok_or(SessionError::WorkoutNotFound(*workout_id))?;

        self.db.delete_workout(workout_id)?;
        self.workouts.remove(pos);
        tracing::info!("Deleted workout {}", workout_id);
        self.recalculate(now)
    }

    fn recalculate(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.refresh_stats(local_date(now))?;
        self.refresh_achievements(now)
    }

    // ========== Schedules ==========

    /// Insert or update a schedule slot.
    pub fn save_schedule(&mut self, schedule: WorkoutSchedule) -> Result<(), SessionError> {
        let id = self.active_id()?;
        self.db.save_schedule(&id, &schedule)?;

        match self.schedules.iter_mut().find(|s| s.id == schedule.id) {
            Some(existing) => *existing = schedule,
            None => self.schedules.push(schedule),
        }
        self.schedules
            .sort_by_key(|s| (s.day_of_week.num_days_from_monday(), s.time.clone()));
        Ok(())
    }

    pub fn delete_schedule(&mut self, schedule_id: &Uuid) -> Result<(), SessionError> {
        self.active_id()?;
        self.db.delete_schedule(schedule_id)?;
        self.schedules.retain(|s| s.id != *schedule_id);
        Ok(())
    }

    // ========== Stats & Achievements ==========

    /// Recompute and store the stats of the recent weeks.
    pub fn refresh_stats(&mut self, today: NaiveDate) -> Result<(), SessionError> {
        let id = self.active_id()?;
        for stats in recent_weekly_stats(&self.workouts, today, self.history.weekly_stats_weeks) {
            self.db.save_weekly_stats(&id, &stats)?;
        }
        self.weekly_stats = self.db.list_weekly_stats(&id)?;
        tracing::debug!("Refreshed weekly stats ({} weeks)", self.weekly_stats.len());
        Ok(())
    }

    pub fn refresh_achievements(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        let profile = self.profile.as_ref().ok_or(SessionError::NoActiveProfile)?;
        let achievements = calculate_achievements(
            &self.workouts,
            profile,
            &self.weight_entries,
            &self.achievements,
            now,
            local_date(now),
        );

        for achievement in achievements.iter().filter(|a| a.is_unlocked()) {
            let was_unlocked = self
                .achievements
                .iter()
                .any(|a| a.kind == achievement.kind && a.is_unlocked());
            if !was_unlocked {
                tracing::info!("Achievement unlocked: {}", achievement.kind.id());
            }
        }

        self.store().save_achievements(&profile.id, &achievements)?;
        self.achievements = achievements;
        Ok(())
    }

    /// Record a body weight measurement for the active profile.
    pub fn add_weight_entry(
        &mut self,
        weight_kg: f32,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<WeightEntry, SessionError> {
        let mut profile = self.profile.clone().ok_or(SessionError::NoActiveProfile)?;

        let mut entry = WeightEntry::new(weight_kg, now);
        entry.notes = notes.filter(|n| !n.trim().is_empty());
        self.store().add_weight_entry(&profile.id, &entry)?;

        self.weight_entries.push(entry.clone());
        self.weight_entries.sort_by_key(|e| e.recorded_at);

        profile.last_weight_update = Some(now);
        self.update_profile(profile)?;
        self.refresh_achievements(now)?;
        Ok(entry)
    }

    // ========== Users ==========

    /// Profiles available for switching, most recently backed up first.
    pub fn backups(&self) -> Result<Vec<ProfileBackup>, SessionError> {
        Ok(self.store().list_backups()?)
    }

    /// Back up the active profile and leave the session without one.
    ///
    /// The profile's records stay in the database for a later switch back.
    pub fn logout(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        let profile = self.profile.as_ref().ok_or(SessionError::NoActiveProfile)?;
        self.store().save_profile_backup(profile, now)?;
        self.db.clear_current_user_id()?;
        tracing::info!("Logged out {}", profile.name);
        self.deactivate();
        Ok(())
    }

    /// Switch to a backed-up profile, backing up the active one first.
    pub fn switch_user(
        &mut self,
        profile_id: &Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let target = self
            .store()
            .load_profile(profile_id)?
            .ok_or(SessionError::ProfileNotFound(*profile_id))?;

        if let Some(current) = &self.profile {
            if current.id == *profile_id {
                return Ok(());
            }
            self.store().save_profile_backup(current, now)?;
        }

        tracing::info!("Switching to profile {} ({})", target.name, target.id);
        self.deactivate();
        self.activate(target)?;
        self.refresh_stats(local_date(now))?;
        Ok(())
    }

    /// Delete every workout, schedule, weight entry and achievement of the
    /// active profile. The profile itself is kept.
    pub fn reset_profile_data(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        let id = self.active_id()?;
        self.db.clear_profile_data(&id)?;
        tracing::info!("Reset data of profile {}", id);

        self.workouts.clear();
        self.schedules.clear();
        self.weekly_stats.clear();
        self.weight_entries.clear();
        self.achievements.clear();
        self.recalculate(now)
    }

    // ========== Settings ==========

    pub fn set_language(&mut self, language: Language) -> Result<(), SessionError> {
        self.db.set_language(language.id())?;
        i18n::set_language(language);
        self.language = language;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: ThemePreference) -> Result<(), SessionError> {
        self.db.set_theme(theme)?;
        self.theme = theme;
        Ok(())
    }
}
