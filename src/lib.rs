//! A Rust library for civic health risk assessment, emergency identification
//! tools, and locally stored health passports.

pub mod assessment;
pub mod config;
pub mod content;
pub mod emergency;
pub mod error;
pub mod passport;
pub mod storage;

// Re-export the most common types for easier use
// Core types
pub use config::AppConfig;
pub use error::{MyHealthError, Result};

// Risk assessment
pub use assessment::{
    AnswerSet, AssessmentCategory, AssessmentSession, RiskLevel, ScoreResult, score,
};

// Passport and its persistence
pub use passport::{BloodType, Passport, PassportStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// Stroke emergency state
pub use emergency::{FastSign, FastTriage, StrokeTimer};
