#![forbid(unsafe_code)]

//! Core domain model and business logic for the fitplan workout planner.
//!
//! This crate provides:
//! - Domain types (exercises, profiles, plans, sessions)
//! - Exercise catalog and goal templates
//! - Weekly plan generation and exercise selection
//! - Adaptive intensity (streak detection, rep notation arithmetic)
//! - Calorie estimation
//! - Persistence (session log, CSV rollup, plan store, profile)

pub mod types;
pub mod error;
pub mod reps;
pub mod catalog;
pub mod templates;
pub mod selector;
pub mod calories;
pub mod generator;
pub mod intensity;
pub mod config;
pub mod logging;
pub mod profile;
pub mod history;
pub mod rollup;
pub mod plan_store;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use reps::{format_reps, RepNotation};
pub use generator::generate_plan;
pub use intensity::{evaluate, streak_run};
pub use calories::{exercise_calories, session_calories, SessionEstimate};
pub use history::{load_recent_sessions, SessionLog, SessionSink};
pub use plan_store::adapt_day;
pub use stats::{summarize, StatsSummary};
