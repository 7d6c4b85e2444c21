//! Unit test modules.

mod history_stats_test;
mod translation_test;
