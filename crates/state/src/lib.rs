//! Manages persisted assessments and environment-derived settings.
//!
//! This crate provides utilities for:
//! - Resolving the home, data and config locations from the environment.
//! - Storing assessments and the in-progress draft behind [`AssessmentStore`]
//!   and [`DraftStore`], in memory or as JSON files on disk.

pub mod env;
pub mod store;

pub use env::{
    app_dir, config_file, data_dir_from_env, default_data_dir, env_seed_samples, home_dir,
};
pub use store::{
    AssessmentStore, DraftStore, JsonFileStore, MemoryStore, StoreError, StoreResult,
};
