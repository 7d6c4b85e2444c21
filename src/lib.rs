//! FitTrack - Offline Workout Tracker
//!
//! A local-first fitness tracker built in Rust.
//! Guides new users through goal setup, offers structured training programs,
//! logs workouts with load recommendations, and turns the history into
//! weekly statistics, charts and achievements. Everything is stored in a
//! local SQLite database with support for several profiles.

pub mod goals;
pub mod i18n;
pub mod metrics;
pub mod motivation;
pub mod onboarding;
pub mod programs;
pub mod session;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use programs::ProgramCatalog;
pub use session::{FitnessSession, SessionError};
pub use storage::config::{AppConfig, UserProfile};
pub use storage::database::Database;
pub use workouts::{ExerciseLibrary, Workout};
