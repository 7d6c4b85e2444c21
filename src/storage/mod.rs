//! Storage module for database and configuration.

pub mod config;
pub mod database;
pub mod profile_store;
pub mod schema;

pub use config::{AppConfig, HistorySettings, ThemePreference, UiSettings, UserProfile};
pub use database::{Database, DatabaseError};
pub use profile_store::{ProfileBackup, ProfileStore};
