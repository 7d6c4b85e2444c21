//! Integration test modules.

mod program_cycle_test;
mod session_persistence_test;
