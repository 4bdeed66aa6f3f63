// Public fallible APIs in this crate share one concrete error contract (`MoodTraceError`).
// Detection operations themselves never fail; only configuration and opt-in input checks do.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub mod delta;
pub mod engine;
pub mod error;
pub mod models;
pub mod trajectory;
pub mod trigger;

pub use config::{ConfigError, MoodDeltaConfig, MoodDeltaConfigInput, resolve_config};
pub use engine::MoodDeltaEngine;
pub use error::{MoodTraceError, Result};
pub use models::{
    AnalysisFactor, Delta, DeltaDirection, DeltaKind, EmotionalTrajectory, MoodAnalysisResult,
    TrajectoryDirection, TrajectoryPoint, TurningPoint, TurningPointKind, ensure_time_ordered,
};
