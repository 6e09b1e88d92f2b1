//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod preference;

// Re-export repositories
pub use preference::PreferenceRepository;
